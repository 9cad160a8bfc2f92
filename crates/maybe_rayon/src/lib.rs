//! Fork-join helpers that use rayon when the `multithreaded` feature is enabled
//! and fall back to running everything on the calling thread otherwise.
//!
//! Both variants expose the same API so callers never need to `cfg` on the feature.
#[cfg(feature = "multithreaded")]
mod multi_threaded;
#[cfg(not(feature = "multithreaded"))]
mod single_threaded;

#[cfg(feature = "multithreaded")]
pub use multi_threaded::*;
#[cfg(not(feature = "multithreaded"))]
pub use single_threaded::*;

pub mod prelude {
    #[cfg(feature = "multithreaded")]
    pub use rayon::prelude::*;

    pub use crate::{MaybeParallelSliceMut, *};
}
