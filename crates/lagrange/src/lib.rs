//! Conversion of powers-of-tau ceremony points from monomial to Lagrange form.
//!
//! A ceremony produces `[tau^i]G` for `i` in `0..n`. Proving systems want
//! `[L_i(tau)]G` instead, where `L_i` is the `i`'th Lagrange polynomial over the
//! `n`'th roots of unity. The two are related by an inverse FFT over the group,
//! which this crate runs in memory, over streams, or in place on a ceremony file
//! by appending the converted points to it.
//!
//! ```no_run
//! use ceremony_lagrange::{LagrangeContext, PairingGroup};
//! use std::fs::OpenOptions;
//!
//! # fn main() -> Result<(), ceremony_lagrange::Error> {
//! let mut file = OpenOptions::new().read(true).write(true).open("phase1.ptau")?;
//! let ctx = LagrangeContext::new(1 << 20);
//! ctx.convert_file_for(PairingGroup::G1, &mut file, 128, 1 << 20)?;
//! # Ok(())
//! # }
//! ```

mod config;
mod convert;
mod errors;
mod group;

pub use config::TransformConfig;
pub use errors::{Error, SerializationError};
pub use group::{CeremonyGroup, PairingGroup};
pub use polynomial::{Domain, FFTElement};

/// A domain together with the parallelism settings used to convert over it.
///
/// Building the domain is the expensive part, so a context should be created
/// once per size and reused for every group converted at that size.
#[derive(Debug, Clone)]
pub struct LagrangeContext {
    domain: Domain,
    config: TransformConfig,
}

impl LagrangeContext {
    /// Creates a context for `size` points, sized for the current thread pool.
    ///
    /// `size` is rounded up to the next power of two.
    pub fn new(size: usize) -> Self {
        Self::with_config(size, TransformConfig::default())
    }

    pub fn with_config(size: usize, config: TransformConfig) -> Self {
        Self {
            domain: Domain::new(size),
            config,
        }
    }

    pub const fn domain(&self) -> &Domain {
        &self.domain
    }

    pub const fn config(&self) -> TransformConfig {
        self.config
    }

    /// Converts `values` to Lagrange form in place.
    ///
    /// This runs the transform, puts the result back into natural order and scales
    /// it by the inverse of the domain size.
    pub fn lagrangify<T: FFTElement>(&self, values: &mut [T]) -> Result<(), Error> {
        self.check_count(values.len())?;
        self.domain.ifft_in_place(
            values,
            self.config.max_split_depth,
            self.config.num_chunks,
        );
        Ok(())
    }

    /// Converts affine points to Lagrange form, returning new affine points.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, fields(group = %G::GROUP, count = points.len())))]
    pub fn lagrangify_points<G: CeremonyGroup>(
        &self,
        points: &[G::Affine],
    ) -> Result<Vec<G::Affine>, Error> {
        self.check_count(points.len())?;
        let mut values: Vec<G> = points.iter().map(G::from_affine).collect();
        self.lagrangify(&mut values)?;
        Ok(G::batch_to_affine(&values))
    }

    fn check_count(&self, count: usize) -> Result<(), Error> {
        if count == self.domain.size() {
            Ok(())
        } else {
            Err(Error::DomainSizeMismatch {
                count,
                domain_size: self.domain.size(),
            })
        }
    }
}
