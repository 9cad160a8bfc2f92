/// How much parallelism a conversion is allowed to use.
///
/// This is passed explicitly rather than read from the environment inside the
/// transform, so the same input can be run under any simulated thread count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransformConfig {
    /// Recursion levels below this one fork their upper half onto the thread pool.
    ///
    /// With depth `d` the transform runs at most `2^d` leaves concurrently.
    pub max_split_depth: usize,
    /// Number of contiguous chunks the final scaling pass is split into.
    pub num_chunks: usize,
}

impl TransformConfig {
    /// Sizes the transform for `num_threads` workers.
    ///
    /// The split depth is `log2` of the next power of two at or above `num_threads`,
    /// so the fan-out never falls short of the thread count and exceeds it by
    /// less than a factor of two.
    pub const fn from_num_threads(num_threads: usize) -> Self {
        let num_threads = if num_threads == 0 { 1 } else { num_threads };
        Self {
            max_split_depth: num_threads.next_power_of_two().trailing_zeros() as usize,
            num_chunks: num_threads,
        }
    }

    /// Runs everything on the calling thread.
    pub const fn sequential() -> Self {
        Self {
            max_split_depth: 0,
            num_chunks: 1,
        }
    }
}

impl Default for TransformConfig {
    /// Sized for the rayon pool the caller is running in.
    fn default() -> Self {
        Self::from_num_threads(maybe_rayon::current_num_threads())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_depth_rounds_thread_count_up() {
        let depths: Vec<_> = [1, 2, 3, 4, 5, 6, 7, 8, 9, 16, 24]
            .into_iter()
            .map(|n| TransformConfig::from_num_threads(n).max_split_depth)
            .collect();
        assert_eq!(depths, vec![0, 1, 2, 2, 3, 3, 3, 3, 4, 4, 5]);
    }

    #[test]
    fn zero_threads_is_treated_as_one() {
        assert_eq!(
            TransformConfig::from_num_threads(0),
            TransformConfig::from_num_threads(1)
        );
        assert_eq!(
            TransformConfig::from_num_threads(1),
            TransformConfig::sequential()
        );
    }

    #[test]
    fn default_uses_at_least_one_chunk() {
        let config = TransformConfig::default();
        assert!(config.num_chunks >= 1);
        assert_eq!(
            config,
            TransformConfig::from_num_threads(maybe_rayon::current_num_threads())
        );
    }
}
