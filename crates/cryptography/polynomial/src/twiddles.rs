use bls12_381::{ff::Field, Scalar};

use crate::fft::log2_pow2;

/// Twiddle factors for every stage of a radix-2 transform of size `n`.
///
/// Row `s` holds `w^(i * 2^s)` for `i` in `0..n / 2^(s + 1)`, where `w` is the
/// root of unity the table was built from. There is one row per stage, so
/// `log2(n)` rows in total and roughly `n` scalars overall.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageTwiddles {
    rows: Vec<Vec<Scalar>>,
}

impl StageTwiddles {
    /// Builds the table for a transform of size `n` from an `n`'th root of unity.
    ///
    /// # Panics
    /// Panics if `n` is not a power of two.
    pub fn new(omega: &Scalar, n: usize) -> Self {
        assert!(n.is_power_of_two(), "domain size must be a power of two");
        let log_n = log2_pow2(n) as usize;

        let mut rows = Vec::with_capacity(log_n);
        // omega^(2^s) for the current stage
        let mut stage_root = *omega;
        for stage in 0..log_n {
            let len = n >> (stage + 1);
            let mut row = Vec::with_capacity(len);
            let mut twiddle = Scalar::ONE;
            for _ in 0..len {
                row.push(twiddle);
                twiddle *= stage_root;
            }
            rows.push(row);
            stage_root = stage_root.square();
        }

        Self { rows }
    }

    pub fn num_stages(&self) -> usize {
        self.rows.len()
    }

    /// Returns the twiddle factors for `stage`.
    ///
    /// # Panics
    /// Panics if `stage >= self.num_stages()`.
    pub fn stage(&self, stage: usize) -> &[Scalar] {
        &self.rows[stage]
    }
}
