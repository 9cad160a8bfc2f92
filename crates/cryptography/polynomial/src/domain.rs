use std::iter::successors;

use bls12_381::{
    ff::{Field, PrimeField},
    Scalar,
};

use crate::{
    bit_reverse::reverse_bit_order,
    fft::{dif, scale_in_place, FFTElement},
    twiddles::StageTwiddles,
};

/// A struct representing a set of points that are roots of unity,
/// which allows us to efficiently evaluate and interpolate over these
/// points using FFT.
///
/// Everything here is computed once in [`Domain::new`] and only read afterwards,
/// so a single domain can be shared by every thread of a transform.
#[derive(Debug, Clone)]
pub struct Domain {
    size: usize,
    /// size of the domain as a scalar
    pub domain_size: Scalar,
    /// Inverse of the domain size as a scalar
    pub domain_size_inv: Scalar,
    /// Generator for this domain
    // Element has order `domain_size`
    pub generator: Scalar,
    /// Inverse of the generator for the domain
    pub generator_inv: Scalar,
    /// Per-stage powers of the generator, used by the forward FFT
    twiddles: StageTwiddles,
    /// Per-stage powers of the inverse generator, used by the inverse FFT
    twiddles_inv: StageTwiddles,
}

impl Domain {
    pub fn new(size: usize) -> Self {
        // We are using roots of unity, so the
        // size of the domain will be padded to
        // the next power of two
        let size = size.next_power_of_two();

        let generator = Self::compute_generator_for_size(size);
        let generator_inv = generator.invert().expect("generator should not be zero");

        let domain_size = Scalar::from(size as u64);
        let domain_size_inv = domain_size.invert().expect("size should not be zero");

        let twiddles = StageTwiddles::new(&generator, size);
        let twiddles_inv = StageTwiddles::new(&generator_inv, size);

        Self {
            size,
            domain_size,
            domain_size_inv,
            generator,
            generator_inv,
            twiddles,
            twiddles_inv,
        }
    }

    /// Computes an n'th root of unity for a given `n`
    fn compute_generator_for_size(size: usize) -> Scalar {
        assert!(size.is_power_of_two());

        let log_size_of_group = size.trailing_zeros();
        assert!(
            log_size_of_group <= Self::two_adicity(),
            "two adicity is 32 but group size needed is 2^{log_size_of_group}"
        );

        // We now want to compute the generator which has order `size`
        let exponent: u64 = 1 << (u64::from(Self::two_adicity()) - u64::from(log_size_of_group));

        Self::largest_root_of_unity().pow_vartime([exponent])
    }

    /// The largest root of unity that we can use for the domain
    const fn largest_root_of_unity() -> Scalar {
        Scalar::ROOT_OF_UNITY
    }

    /// The largest power of two that we can use for the domain
    const fn two_adicity() -> u32 {
        Scalar::S
    }

    /// The size of the domain
    ///
    /// Note: This is always a power of two
    pub const fn size(&self) -> usize {
        self.size
    }

    /// The roots of unity in this domain, `generator^0, generator^1, ...`.
    pub fn roots(&self) -> impl Iterator<Item = Scalar> + '_ {
        successors(Some(Scalar::ONE), |root| Some(root * self.generator)).take(self.size)
    }

    pub const fn twiddles(&self) -> &StageTwiddles {
        &self.twiddles
    }

    pub const fn twiddles_inv(&self) -> &StageTwiddles {
        &self.twiddles_inv
    }

    /// Evaluates in place: `values[j] <- sum_i values[i] * generator^(i * j)`.
    ///
    /// This undoes [`Domain::ifft_in_place`].
    ///
    /// # Panics
    /// Panics if `values.len()` is not the size of the domain.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, fields(size = self.size)))]
    pub fn fft_in_place<T: FFTElement>(&self, values: &mut [T], max_split_depth: usize) {
        assert_eq!(values.len(), self.size, "input length must equal the domain size");

        dif(values, &self.twiddles, 0, max_split_depth);
        reverse_bit_order(values);
    }

    /// Interpolates in place: `values[j] <- 1/n * sum_i values[i] * generator^(-i * j)`.
    ///
    /// For a powers-of-tau vector `[tau^i]G` this produces the Lagrange basis
    /// `[L_j(tau)]G` over this domain.
    ///
    /// `max_split_depth` bounds how many levels of the transform fork onto the
    /// thread pool, and `num_chunks` is the number of pieces the final scaling is
    /// split into.
    ///
    /// # Panics
    /// Panics if `values.len()` is not the size of the domain.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, fields(size = self.size)))]
    pub fn ifft_in_place<T: FFTElement>(
        &self,
        values: &mut [T],
        max_split_depth: usize,
        num_chunks: usize,
    ) {
        assert_eq!(values.len(), self.size, "input length must equal the domain size");

        {
            #[cfg(feature = "tracing")]
            let _span = tracing::info_span!("dif transform", max_split_depth).entered();
            dif(values, &self.twiddles_inv, 0, max_split_depth);
        }
        {
            #[cfg(feature = "tracing")]
            let _span = tracing::info_span!("bit reversal").entered();
            reverse_bit_order(values);
        }
        {
            #[cfg(feature = "tracing")]
            let _span = tracing::info_span!("scale by inverse domain size", num_chunks).entered();
            scale_in_place(values, self.domain_size_inv, num_chunks);
        }
    }
}
