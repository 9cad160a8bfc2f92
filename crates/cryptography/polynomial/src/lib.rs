//! Radix-2 transforms over the BLS12-381 scalar field and curve groups.
//!
//! The central piece is [`Domain::ifft_in_place`], which turns a vector of group
//! elements in monomial form into Lagrange form using a recursive, parallel
//! decimation-in-frequency transform.

mod bit_reverse;
pub mod domain;
mod fft;
mod twiddles;

pub use bit_reverse::{reverse_bit_order, reverse_bits};
pub use domain::Domain;
pub use fft::{dif, scale_in_place, FFTElement};
pub use twiddles::StageTwiddles;
