use std::ops::{Add, Mul, Neg, Sub};

use bls12_381::{ff::Field, group::Group, G1Projective, G2Projective, Scalar};
use maybe_rayon::prelude::*;

use crate::twiddles::StageTwiddles;

/// Elements the transform can operate on: anything that forms a group under
/// addition and can be scaled by a field element.
///
/// The transform is written once against this trait and used for scalars as
/// well as for both pairing groups.
pub trait FFTElement:
    Sized
    + Send
    + Sync
    + Copy
    + PartialEq
    + Eq
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Scalar, Output = Self>
    + Neg<Output = Self>
{
    fn zero() -> Self;
}

impl FFTElement for Scalar {
    fn zero() -> Self {
        Self::ZERO
    }
}

impl FFTElement for G1Projective {
    fn zero() -> Self {
        Self::identity()
    }
}

impl FFTElement for G2Projective {
    fn zero() -> Self {
        Self::identity()
    }
}

/// Replaces `(a, b)` with `(a + b, a - b)`.
#[inline]
pub(crate) fn butterfly<T: FFTElement>(a: &mut T, b: &mut T) {
    let t = *a;
    *a = t + *b;
    *b = t - *b;
}

/// Unrolled decimation-in-frequency transform of exactly 8 elements.
///
/// Produces the same output as running [`dif`] down to single elements, with
/// `stage` being the stage the 8 element block sits at.
#[inline]
fn dif_kernel_8<T: FFTElement>(a: &mut [T], twiddles: &StageTwiddles, stage: usize) {
    debug_assert_eq!(a.len(), 8);
    let [a0, a1, a2, a3, a4, a5, a6, a7] = a else {
        unreachable!("kernel is only called on blocks of length 8");
    };
    let first = twiddles.stage(stage);
    let second = twiddles.stage(stage + 1);

    butterfly(a0, a4);
    butterfly(a1, a5);
    butterfly(a2, a6);
    butterfly(a3, a7);

    *a5 = *a5 * first[1];
    *a6 = *a6 * first[2];
    *a7 = *a7 * first[3];

    butterfly(a0, a2);
    butterfly(a1, a3);
    butterfly(a4, a6);
    butterfly(a5, a7);

    *a3 = *a3 * second[1];
    *a7 = *a7 * second[1];

    butterfly(a0, a1);
    butterfly(a2, a3);
    butterfly(a4, a5);
    butterfly(a6, a7);
}

/// In-place radix-2 decimation-in-frequency transform.
///
/// `stage` is the depth of `values` in the recursion (0 for the full buffer) and
/// selects the twiddle row to use. While `stage < max_split_depth` the upper half
/// is handed to the thread pool and joined before returning; deeper levels run
/// on the calling thread.
///
/// The output is in bit-reversed order, see [`crate::reverse_bit_order`].
///
/// # Panics
///
/// Panics if the length of `values` is not a power of two, or if `twiddles` has
/// fewer stages than `log2(values.len())`.
pub fn dif<T: FFTElement>(
    values: &mut [T],
    twiddles: &StageTwiddles,
    stage: usize,
    max_split_depth: usize,
) {
    let n = values.len();
    assert!(n.is_power_of_two(), "transform length must be a power of two, got {n}");
    assert!(
        stage + log2_pow2(n) as usize <= twiddles.num_stages(),
        "twiddle table has {} stages, transform needs {}",
        twiddles.num_stages(),
        stage + log2_pow2(n) as usize
    );
    assert!(
        n == 1 || twiddles.stage(stage).len() == n / 2,
        "twiddle row {stage} does not match a block of length {n}"
    );
    dif_unchecked(values, twiddles, stage, max_split_depth);
}

fn dif_unchecked<T: FFTElement>(
    values: &mut [T],
    twiddles: &StageTwiddles,
    stage: usize,
    max_split_depth: usize,
) {
    match values.len() {
        1 => return,
        8 => return dif_kernel_8(values, twiddles, stage),
        _ => {}
    }

    let m = values.len() / 2;
    let (lo, hi) = values.split_at_mut(m);

    // The twiddle for index 0 is one.
    butterfly(&mut lo[0], &mut hi[0]);
    let row = twiddles.stage(stage);
    for ((a, b), twiddle) in lo.iter_mut().zip(hi.iter_mut()).zip(row).skip(1) {
        butterfly(a, b);
        *b = *b * *twiddle;
    }

    if m == 1 {
        return;
    }

    let next_stage = stage + 1;
    if stage < max_split_depth {
        maybe_rayon::join(
            || dif_unchecked(lo, twiddles, next_stage, max_split_depth),
            || dif_unchecked(hi, twiddles, next_stage, max_split_depth),
        );
    } else {
        dif_unchecked(lo, twiddles, next_stage, max_split_depth);
        dif_unchecked(hi, twiddles, next_stage, max_split_depth);
    }
}

/// Multiplies every element by `factor`.
///
/// The slice is cut into `num_chunks` contiguous pieces which are scaled in parallel.
pub fn scale_in_place<T: FFTElement>(values: &mut [T], factor: Scalar, num_chunks: usize) {
    let chunk_size = values.len().div_ceil(num_chunks.max(1)).max(1);
    values.maybe_par_chunks_mut(chunk_size).for_each(|chunk| {
        for value in chunk {
            *value = *value * factor;
        }
    });
}

/// We assume that `n` is a power of 2.
pub(crate) const fn log2_pow2(n: usize) -> u32 {
    n.trailing_zeros()
}

#[cfg(test)]
pub(crate) mod tests {
    use bls12_381::{traits::*, G1Projective, G2Projective};
    use proptest::prelude::*;

    use super::*;
    use crate::{reverse_bit_order, Domain};

    /// `out[j] = sum_i values[i] * omega^(i * j)`, computed the slow way.
    pub(crate) fn naive_dft<T: FFTElement>(values: &[T], omega: Scalar) -> Vec<T> {
        let n = values.len();
        (0..n)
            .map(|j| {
                let omega_j = omega.pow_vartime([j as u64]);
                let mut power = Scalar::ONE;
                let mut acc = T::zero();
                for value in values {
                    acc = acc + *value * power;
                    power *= omega_j;
                }
                acc
            })
            .collect()
    }

    /// Plain radix-2 recursion, no size 8 kernel and no threads.
    fn dif_reference<T: FFTElement>(values: &mut [T], twiddles: &StageTwiddles, stage: usize) {
        let n = values.len();
        if n == 1 {
            return;
        }
        let m = n / 2;
        let (lo, hi) = values.split_at_mut(m);
        for i in 0..m {
            butterfly(&mut lo[i], &mut hi[i]);
            hi[i] = hi[i] * twiddles.stage(stage)[i];
        }
        dif_reference(lo, twiddles, stage + 1);
        dif_reference(hi, twiddles, stage + 1);
    }

    fn random_g1(n: usize) -> Vec<G1Projective> {
        (0..n)
            .map(|_| G1Projective::random(&mut rand::thread_rng()))
            .collect()
    }

    fn arb_scalar_vec(log_n: u32) -> impl Strategy<Value = Vec<Scalar>> {
        prop::collection::vec(any::<u64>().prop_map(Scalar::from), 1usize << log_n)
    }

    #[test]
    fn butterfly_uses_original_first_element() {
        let mut a = Scalar::from(10u64);
        let mut b = Scalar::from(3u64);
        butterfly(&mut a, &mut b);
        assert_eq!(a, Scalar::from(13u64));
        assert_eq!(b, Scalar::from(7u64));

        let g = G1Projective::generator();
        let mut a = g * Scalar::from(5u64);
        let mut b = g * Scalar::from(2u64);
        butterfly(&mut a, &mut b);
        assert_eq!(a, g * Scalar::from(7u64));
        assert_eq!(b, g * Scalar::from(3u64));
    }

    #[test]
    fn kernel_matches_full_recursion() {
        // A domain of 32 puts the 8 element blocks at stage 2, which checks the
        // kernel's stage offsets and not just stage 0.
        for size in [8, 32] {
            let domain = Domain::new(size);
            let points = random_g1(size);

            let mut got = points.clone();
            dif(&mut got, domain.twiddles_inv(), 0, 0);

            let mut expected = points;
            dif_reference(&mut expected, domain.twiddles_inv(), 0);

            assert_eq!(got, expected, "size {size}");
        }
    }

    #[test]
    fn dif_matches_naive_dft_for_g1() {
        for log_n in 0..=6 {
            let n = 1 << log_n;
            let domain = Domain::new(n);
            let points = random_g1(n);

            let mut got = points.clone();
            dif(&mut got, domain.twiddles(), 0, 2);
            reverse_bit_order(&mut got);

            assert_eq!(got, naive_dft(&points, domain.generator), "n = {n}");
        }
    }

    #[test]
    fn dif_matches_naive_dft_for_g2() {
        let n = 16;
        let domain = Domain::new(n);
        let points: Vec<_> = (0..n)
            .map(|_| G2Projective::random(&mut rand::thread_rng()))
            .collect();

        let mut got = points.clone();
        dif(&mut got, domain.twiddles_inv(), 0, 1);
        reverse_bit_order(&mut got);

        assert_eq!(got, naive_dft(&points, domain.generator_inv));
    }

    #[test]
    fn dif_on_identity_points_stays_identity() {
        let domain = Domain::new(64);
        let mut points = vec![G1Projective::identity(); 64];
        dif(&mut points, domain.twiddles_inv(), 0, 3);
        assert!(points.iter().all(|p| bool::from(p.is_identity())));
    }

    #[test]
    #[should_panic(expected = "power of two")]
    fn dif_rejects_non_power_of_two() {
        let domain = Domain::new(8);
        let mut values = vec![Scalar::ONE; 6];
        dif(&mut values, domain.twiddles(), 0, 0);
    }

    #[test]
    #[should_panic(expected = "twiddle table")]
    fn dif_rejects_missing_stage_rows() {
        let domain = Domain::new(8);
        let mut values = vec![Scalar::ONE; 16];
        dif(&mut values, domain.twiddles(), 0, 0);
    }

    #[test]
    fn scaling_identity_buffer_is_identity() {
        let mut points = vec![G1Projective::identity(); 33];
        scale_in_place(&mut points, Scalar::from(12345u64), 4);
        assert!(points.iter().all(|p| bool::from(p.is_identity())));
    }

    #[test]
    fn scaling_handles_more_chunks_than_elements() {
        let mut values: Vec<_> = (1..=3u64).map(Scalar::from).collect();
        scale_in_place(&mut values, Scalar::from(2u64), 16);
        let expected: Vec<_> = [2u64, 4, 6].into_iter().map(Scalar::from).collect();
        assert_eq!(values, expected);

        let mut empty: Vec<Scalar> = Vec::new();
        scale_in_place(&mut empty, Scalar::from(2u64), 0);
        assert!(empty.is_empty());
    }

    #[test]
    fn scaling_is_linear_over_g1() {
        let factor = Scalar::random(&mut rand::thread_rng());
        let a = random_g1(20);
        let b = random_g1(20);

        let mut sum: Vec<_> = a.iter().zip(&b).map(|(a, b)| *a + *b).collect();
        scale_in_place(&mut sum, factor, 3);

        let mut scaled_a = a;
        let mut scaled_b = b;
        scale_in_place(&mut scaled_a, factor, 3);
        scale_in_place(&mut scaled_b, factor, 7);
        let sum_of_scaled: Vec<_> = scaled_a.iter().zip(&scaled_b).map(|(a, b)| *a + *b).collect();

        assert_eq!(sum, sum_of_scaled);
    }

    proptest! {
        #[test]
        fn prop_parallel_matches_sequential(log_n in 0u32..10, seed in any::<u64>()) {
            let n = 1usize << log_n;
            let values: Vec<_> = (0..n as u64).map(|i| Scalar::from(i.wrapping_mul(seed) ^ seed)).collect();
            let domain = Domain::new(n);

            let mut sequential = values.clone();
            dif(&mut sequential, domain.twiddles_inv(), 0, 0);

            for max_split_depth in [1, 3, 64] {
                let mut parallel = values.clone();
                dif(&mut parallel, domain.twiddles_inv(), 0, max_split_depth);
                prop_assert_eq!(&parallel, &sequential);
            }
        }

        #[test]
        fn prop_dif_matches_naive_dft_for_scalars(values in (0u32..7).prop_flat_map(arb_scalar_vec)) {
            let domain = Domain::new(values.len());

            let mut got = values.clone();
            dif(&mut got, domain.twiddles(), 0, 2);
            reverse_bit_order(&mut got);

            prop_assert_eq!(got, naive_dft(&values, domain.generator));
        }

        #[test]
        fn prop_scaling_is_linear(
            a in prop::collection::vec(any::<u64>().prop_map(Scalar::from), 0..50),
            factor in any::<u64>().prop_map(Scalar::from),
            num_chunks in 0usize..9,
        ) {
            let b: Vec<_> = a.iter().map(|x| x.square() + Scalar::ONE).collect();

            let mut sum: Vec<_> = a.iter().zip(&b).map(|(a, b)| a + b).collect();
            scale_in_place(&mut sum, factor, num_chunks);

            let mut scaled_a = a.clone();
            let mut scaled_b = b;
            scale_in_place(&mut scaled_a, factor, num_chunks);
            scale_in_place(&mut scaled_b, factor, num_chunks);

            let expected: Vec<_> = scaled_a.iter().zip(&scaled_b).map(|(a, b)| a + b).collect();
            prop_assert_eq!(sum, expected);
        }
    }
}
