#![allow(dead_code)]

use std::iter::successors;

use bls12_381::{traits::*, G1Point, G1Projective, G2Point, G2Projective, Scalar};
use serialization::{Encoder, PointEncoding};

/// `[tau^0]G, [tau^1]G, ..., [tau^(n-1)]G` for a random `tau`, along with `tau`.
pub fn powers_of_tau_g1(n: usize) -> (Scalar, Vec<G1Point>) {
    let tau = Scalar::random(&mut rand::thread_rng());
    let generator = G1Projective::generator();
    let points = powers(tau, n)
        .map(|power| (generator * power).to_affine())
        .collect();
    (tau, points)
}

pub fn powers_of_tau_g2(n: usize) -> (Scalar, Vec<G2Point>) {
    let tau = Scalar::random(&mut rand::thread_rng());
    let generator = G2Projective::generator();
    let points = powers(tau, n)
        .map(|power| (generator * power).to_affine())
        .collect();
    (tau, points)
}

fn powers(tau: Scalar, n: usize) -> impl Iterator<Item = Scalar> {
    successors(Some(Scalar::ONE), move |p| Some(p * tau)).take(n)
}

pub fn encode<P: PointEncoding>(points: &[P]) -> Vec<u8> {
    let mut bytes = Vec::new();
    Encoder::new(&mut bytes)
        .encode_all(points)
        .expect("writing to a vector cannot fail");
    bytes
}

/// A ceremony-like file: `prefix_len` header bytes, the encoded points, then a trailer.
pub fn ceremony_bytes<P: PointEncoding>(prefix_len: usize, points: &[P], trailer: &[u8]) -> Vec<u8> {
    let mut bytes: Vec<u8> = (0..prefix_len).map(|i| i as u8).collect();
    bytes.extend(encode(points));
    bytes.extend_from_slice(trailer);
    bytes
}
