//! Shared fixtures for the ecelgamal property and integration tests

use ecelgamal_algorithms::{load_domain, CurvePoint, EllipticCurveGroup, NamedCurve};
use ecelgamal_params::traditional::weierstrass::{REFERENCE_CURVE, SECP256K1};
use num_bigint::{BigInt, Sign};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

/// y² = x³ + 2x + 2 over 𝔽₁₇ with G = (5, 1) of order 19
pub fn reference_curve() -> NamedCurve {
    load_domain(&REFERENCE_CURVE).expect("reference domain is valid")
}

/// secp256k1 with its standard generator
pub fn secp256k1() -> NamedCurve {
    load_domain(&SECP256K1).expect("secp256k1 domain is valid")
}

/// Every point of a small curve, found by exhaustive search, O first
pub fn all_points(group: &EllipticCurveGroup) -> Vec<CurvePoint> {
    let p: u64 = group
        .p()
        .try_into()
        .expect("exhaustive search needs a small modulus");
    let mut points = vec![CurvePoint::Identity];
    for x in 0..p {
        for y in 0..p {
            let point = CurvePoint::affine(x, y);
            if group.is_on_curve(&point) {
                points.push(point);
            }
        }
    }
    points
}

/// Interpret 32 bytes as a non-negative big-endian scalar
pub fn scalar_from_bytes(bytes: &[u8]) -> BigInt {
    BigInt::from_bytes_be(Sign::Plus, bytes)
}

/// Deterministic RNG for reproducible randomized tests
pub fn test_rng(seed: u64) -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(seed)
}
