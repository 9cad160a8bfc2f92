pub use std::slice::ChunksMut;

/// Runs `oper_a` and then `oper_b` on the calling thread.
#[inline]
pub fn join<A, B, RA, RB>(oper_a: A, oper_b: B) -> (RA, RB)
where
    A: FnOnce() -> RA + Send,
    B: FnOnce() -> RB + Send,
    RA: Send,
    RB: Send,
{
    (oper_a(), oper_b())
}

/// Without rayon there is exactly one worker: the calling thread.
#[inline]
pub const fn current_num_threads() -> usize {
    1
}

pub trait MaybeParallelSliceMut<T> {
    fn maybe_par_chunks_mut(&mut self, chunk_size: usize) -> ChunksMut<'_, T>;
}

impl<T: Send> MaybeParallelSliceMut<T> for [T] {
    fn maybe_par_chunks_mut(&mut self, chunk_size: usize) -> ChunksMut<'_, T> {
        self.chunks_mut(chunk_size)
    }
}
