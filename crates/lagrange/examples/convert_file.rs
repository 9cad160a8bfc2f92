use std::{
    fs::{self, OpenOptions},
    time::Instant,
};

use bls12_381::{traits::*, G1Projective, Scalar};
use ceremony_lagrange::{LagrangeContext, PairingGroup};
use serialization::Encoder;
use tracing_forest::util::LevelFilter;
use tracing_forest::ForestLayer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Registry};

const NUM_POINTS: usize = 1 << 14;
const HEADER_LEN: usize = 64;

/// Writes a header followed by `[tau^i]G1` for `i` in `0..NUM_POINTS`.
fn write_dummy_ceremony(path: &std::path::Path) {
    let tau = Scalar::from(0x1234_5678_u64);
    let mut power = Scalar::ONE;
    let points: Vec<_> = (0..NUM_POINTS)
        .map(|_| {
            let point = G1Projective::generator() * power;
            power *= tau;
            point
        })
        .collect();

    let affine = G1Projective::batch_normalize_to_affine(&points);

    let mut bytes = vec![0u8; HEADER_LEN];
    Encoder::new(&mut bytes)
        .encode_all(&affine)
        .expect("writing to a vector cannot fail");
    fs::write(path, bytes).expect("failed to write ceremony file");
}

fn main() {
    let path = std::env::temp_dir().join("ceremony-lagrange-example.bin");
    write_dummy_ceremony(&path);

    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();

    Registry::default()
        .with(env_filter)
        .with(ForestLayer::default())
        .init();

    let ctx = LagrangeContext::new(NUM_POINTS);
    let mut file = OpenOptions::new()
        .read(true)
        .write(true)
        .open(&path)
        .expect("failed to open ceremony file");

    let start = Instant::now();
    ctx.convert_file_for(PairingGroup::G1, &mut file, HEADER_LEN as u64, NUM_POINTS)
        .expect("conversion failed");
    println!("converted {NUM_POINTS} points in {:?}", start.elapsed());

    fs::remove_file(&path).expect("failed to remove ceremony file");
}
