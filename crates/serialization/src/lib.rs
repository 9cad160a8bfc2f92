//! Compressed encoding of BLS12-381 group elements, and sequential decoders/encoders
//! over `std::io` streams.
//!
//! Points are written back to back with no framing: a run of `n` G1 points is
//! exactly `n * BYTES_PER_G1_POINT` bytes.

mod codec;
mod errors;

pub use codec::{Decoder, Encoder};
pub use errors::Error;

use std::io::{self, Write};

use bls12_381::{G1Point, G2Point};

/// The number of bytes needed to represent a compressed G1 point.
pub const BYTES_PER_G1_POINT: usize = 48;

/// The number of bytes needed to represent a compressed G2 point.
pub const BYTES_PER_G2_POINT: usize = 96;

/// An affine point with a fixed size compressed form.
pub trait PointEncoding: Sized {
    /// Number of bytes in the compressed form.
    const COMPRESSED_SIZE: usize;

    /// Writes the compressed form of `self`.
    fn write_compressed<W: Write>(&self, writer: &mut W) -> io::Result<()>;

    /// Decodes a compressed point, checking that it lies in the prime order subgroup.
    fn from_compressed_slice(bytes: &[u8]) -> Result<Self, Error>;
}

impl PointEncoding for G1Point {
    const COMPRESSED_SIZE: usize = BYTES_PER_G1_POINT;

    fn write_compressed<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_all(&self.to_compressed())
    }

    fn from_compressed_slice(bytes: &[u8]) -> Result<Self, Error> {
        let bytes: &[u8; BYTES_PER_G1_POINT] = bytes.try_into().map_err(|_| invalid_length(bytes))?;
        Option::from(Self::from_compressed(bytes)).ok_or_else(|| Error::CouldNotDeserializeG1Point {
            bytes: bytes.to_vec(),
        })
    }
}

impl PointEncoding for G2Point {
    const COMPRESSED_SIZE: usize = BYTES_PER_G2_POINT;

    fn write_compressed<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_all(&self.to_compressed())
    }

    fn from_compressed_slice(bytes: &[u8]) -> Result<Self, Error> {
        let bytes: &[u8; BYTES_PER_G2_POINT] = bytes.try_into().map_err(|_| invalid_length(bytes))?;
        Option::from(Self::from_compressed(bytes)).ok_or_else(|| Error::CouldNotDeserializeG2Point {
            bytes: bytes.to_vec(),
        })
    }
}

fn invalid_length(bytes: &[u8]) -> Error {
    Error::PointHasInvalidLength {
        bytes: bytes.to_vec(),
        length: bytes.len(),
    }
}
