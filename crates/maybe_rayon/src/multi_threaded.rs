pub use rayon::slice::ChunksMut;

/// Runs `oper_a` on the calling thread while `oper_b` is made available to the
/// rayon pool. Returns once both have completed.
#[inline]
pub fn join<A, B, RA, RB>(oper_a: A, oper_b: B) -> (RA, RB)
where
    A: FnOnce() -> RA + Send,
    B: FnOnce() -> RB + Send,
    RA: Send,
    RB: Send,
{
    rayon::join(oper_a, oper_b)
}

/// Number of threads in the rayon pool we are currently running in.
///
/// Inside `ThreadPool::install` this is the size of that pool, otherwise the global pool.
#[inline]
pub fn current_num_threads() -> usize {
    rayon::current_num_threads()
}

pub trait MaybeParallelSliceMut<T: Send> {
    fn maybe_par_chunks_mut(&mut self, chunk_size: usize) -> ChunksMut<'_, T>;
}

impl<T: Send> MaybeParallelSliceMut<T> for [T] {
    fn maybe_par_chunks_mut(&mut self, chunk_size: usize) -> ChunksMut<'_, T> {
        use rayon::slice::ParallelSliceMut;
        self.par_chunks_mut(chunk_size)
    }
}
