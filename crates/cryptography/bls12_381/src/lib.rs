use traits::*;

// Re-export ff and group, so other crates do not need to directly import(and independently version) them
pub use ff;
pub use group;

pub mod traits {
    pub use ff::{Field, PrimeField};
    pub use group::{prime::PrimeCurveAffine, Curve, Group};

    pub use crate::BatchNormalize;
}

/// Affine representation of a point in the BLS12-381 G1 curve group.
///
/// This is the form points are serialized in.
pub type G1Point = blstrs::G1Affine;

/// Projective representation of a point in the BLS12-381 G1 curve group.
///
/// This is the form points are transformed in.
pub type G1Projective = blstrs::G1Projective;

/// Affine representation of a point in the BLS12-381 G2 curve group.
pub type G2Point = blstrs::G2Affine;

/// Projective representation of a point in the BLS12-381 G2 curve group.
pub type G2Projective = blstrs::G2Projective;

/// Scalar field element for the BLS12-381 curve.
///
/// Twiddle factors and the inverse domain size live in this field.
pub type Scalar = blstrs::Scalar;

/// Conversion of a whole slice of projective points into affine form.
///
/// Normalizing one point at a time costs a field inversion per point, the batched
/// version shares a single inversion across the slice.
pub trait BatchNormalize: Curve {
    fn batch_normalize_to_affine(points: &[Self]) -> Vec<Self::AffineRepr>;
}

impl BatchNormalize for G1Projective {
    fn batch_normalize_to_affine(points: &[Self]) -> Vec<G1Point> {
        g1_batch_normalize(points)
    }
}

impl BatchNormalize for G2Projective {
    fn batch_normalize_to_affine(points: &[Self]) -> Vec<G2Point> {
        g2_batch_normalize(points)
    }
}

/// Converts Projective points to normalized points efficiently.
///
// Note: G1 goes through blst directly since the ceremony files are dominated
// by G1 points.
pub fn g1_batch_normalize(projective_points: &[G1Projective]) -> Vec<G1Point> {
    if projective_points.is_empty() {
        return Vec::new();
    }

    // Track which points are identity and create a filtered vec without them
    //
    // This is because blst will convert all points into the identity point
    // if even one of them is the identity point.
    let mut identity_positions = Vec::new();
    let mut non_identity_points = Vec::with_capacity(projective_points.len());

    for (idx, point) in projective_points.iter().enumerate() {
        if point.is_identity().into() {
            identity_positions.push(idx);
        } else {
            non_identity_points.push(*point);
        }
    }

    if non_identity_points.is_empty() {
        return vec![G1Point::identity(); projective_points.len()];
    }

    // G1Projective is a transparent wrapper around blst_p1
    let points = unsafe {
        std::slice::from_raw_parts(
            non_identity_points.as_ptr().cast::<blst::blst_p1>(),
            non_identity_points.len(),
        )
    };

    let normalized = blst::p1_affines::from(points);

    let mut normalized = normalized
        .as_slice()
        .iter()
        .map(|p| G1Point::from_raw_unchecked(p.x.into(), p.y.into(), false));

    // Walk the output positions, filling identities where they were removed.
    // `Vec::insert` would make this quadratic in the number of identities.
    let mut result = Vec::with_capacity(projective_points.len());
    let mut identity_positions = identity_positions.into_iter().peekable();
    for idx in 0..projective_points.len() {
        if identity_positions.next_if_eq(&idx).is_some() {
            result.push(G1Point::identity());
        } else if let Some(point) = normalized.next() {
            result.push(point);
        }
    }

    result
}

/// Batch-normalizes a slice of G2 projective points to their affine representation.
pub fn g2_batch_normalize(projective_points: &[G2Projective]) -> Vec<G2Point> {
    batch_normalize_points(projective_points)
}

/// Generic utility to batch-normalize projective points for any curve implementing `PrimeCurveAffine`.
fn batch_normalize_points<T: PrimeCurveAffine>(points: &[T::Curve]) -> Vec<T>
where
    T::Curve: Curve<AffineRepr = T>,
{
    let mut affine_points = vec![T::identity(); points.len()];
    T::Curve::batch_normalize(points, &mut affine_points);
    affine_points
}
