use std::fmt;

use bls12_381::{traits::*, G1Point, G1Projective, G2Point, G2Projective};
use polynomial::FFTElement;
use serialization::{PointEncoding, BYTES_PER_G1_POINT, BYTES_PER_G2_POINT};

/// The two pairing groups a ceremony file holds points for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PairingGroup {
    G1,
    G2,
}

impl PairingGroup {
    /// Size of one serialized point of this group.
    ///
    /// A driver uses this to compute the byte offset of a run of points.
    pub const fn bytes_per_point(self) -> usize {
        match self {
            Self::G1 => BYTES_PER_G1_POINT,
            Self::G2 => BYTES_PER_G2_POINT,
        }
    }
}

impl fmt::Display for PairingGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::G1 => f.write_str("G1"),
            Self::G2 => f.write_str("G2"),
        }
    }
}

/// A group whose points can be read from a ceremony file, converted, and written back.
///
/// Points are stored in affine form and transformed in projective form.
pub trait CeremonyGroup: FFTElement {
    type Affine: PointEncoding + Copy + Send + Sync;

    const GROUP: PairingGroup;

    fn from_affine(point: &Self::Affine) -> Self;

    fn batch_to_affine(points: &[Self]) -> Vec<Self::Affine>;
}

impl CeremonyGroup for G1Projective {
    type Affine = G1Point;

    const GROUP: PairingGroup = PairingGroup::G1;

    fn from_affine(point: &G1Point) -> Self {
        point.to_curve()
    }

    fn batch_to_affine(points: &[Self]) -> Vec<G1Point> {
        Self::batch_normalize_to_affine(points)
    }
}

impl CeremonyGroup for G2Projective {
    type Affine = G2Point;

    const GROUP: PairingGroup = PairingGroup::G2;

    fn from_affine(point: &G2Point) -> Self {
        point.to_curve()
    }

    fn batch_to_affine(points: &[Self]) -> Vec<G2Point> {
        Self::batch_normalize_to_affine(points)
    }
}
