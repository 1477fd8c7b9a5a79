use ecelgamal::prelude::*;
use ecelgamal::params::traditional::weierstrass::{ALL_CURVES, REFERENCE_CURVE};

// Import math functions from common crate
use ecelgamal_common::math_common::{gcd, mod_inverse, modulo};

use ecelgamal_pke::{decrypt, encrypt, generate_keys};
use ecelgamal_tests::{reference_curve, test_rng};

fn big(v: i64) -> BigInt {
    BigInt::from(v)
}

#[test]
fn test_modular_arithmetic() {
    assert_eq!(modulo(&big(-3), &big(17)), big(14));
    assert_eq!(gcd(&big(12), &big(18)), big(6));
    assert_eq!(mod_inverse(&big(3), &big(17)).unwrap(), big(6));
    assert!(matches!(
        mod_inverse(&big(4), &big(8)),
        Err(Error::NoInverse { .. })
    ));
}

#[test]
fn test_reference_walkthrough() {
    let curve = reference_curve();
    let (group, g) = (&curve.group, &curve.base_point);

    assert!(group.is_on_curve(g));

    let d = big(7);
    let keys = generate_keys(group, g, &d).unwrap();
    assert_eq!(keys.public_key, CurvePoint::affine(0, 6));

    let m = CurvePoint::affine(6, 3);
    let ct = encrypt(group, g, &keys.public_key, &m, &big(9)).unwrap();
    assert_eq!(ct.c1, CurvePoint::affine(7, 6));
    assert_eq!(ct.c2, CurvePoint::affine(13, 7));
    assert_eq!(decrypt(group, &d, &ct).unwrap(), m);

    assert!(group.scalar_multiply(g, &big(19)).is_identity());
    assert_eq!(group.scalar_multiply(g, &big(20)), *g);
}

#[test]
fn test_invalid_points_surface_as_api_errors() -> std::result::Result<(), String> {
    let curve = reference_curve();
    let (group, g) = (&curve.group, &curve.base_point);
    let bad = CurvePoint::affine(0, 0);

    let err: Error = generate_keys(group, &bad, &big(7)).unwrap_err().into();
    if err != (Error::InvalidBasePoint { context: "generate_keys" }) {
        return Err(format!("unexpected error: {}", err));
    }

    let keys = generate_keys(group, g, &big(7)).map_err(|e| e.to_string())?;
    let err: Error = encrypt(group, g, &keys.public_key, &bad, &big(9))
        .unwrap_err()
        .into();
    if err != (Error::InvalidMessagePoint { context: "encrypt" }) {
        return Err(format!("unexpected error: {}", err));
    }
    Ok(())
}

// Works with any scheme implementing the Pke trait
fn pke_round_trip<S: Pke>(scheme: &S, message: &S::Plaintext, seed: u64) -> Result<S::Plaintext> {
    let mut rng = test_rng(seed);
    let (pk, sk) = scheme.keypair(&mut rng)?;
    let ct = scheme.encrypt(&pk, message, &mut rng)?;
    scheme.decrypt(&sk, &ct)
}

#[test]
fn test_pke_trait_over_all_curves() {
    for (i, domain) in ALL_CURVES.iter().enumerate() {
        let curve = load_domain(domain).unwrap();
        assert!(curve.group.discriminant_is_nonzero(), "{}", domain.name);
        if let Some(n) = &curve.order {
            assert!(
                curve.group.scalar_multiply(&curve.base_point, n).is_identity(),
                "{}: n·G = O",
                domain.name
            );
        }

        let scheme = EcElGamal::from_named_curve(curve).unwrap();
        let message = scheme
            .group()
            .scalar_multiply(scheme.base_point(), &big(42));
        let recovered = pke_round_trip(&scheme, &message, i as u64).unwrap();
        assert_eq!(recovered, message, "{}", domain.name);
    }
}

#[test]
fn test_api_error_context() {
    let scheme = EcElGamal::from_domain(&REFERENCE_CURVE).unwrap();
    let off_curve = Ciphertext {
        c1: CurvePoint::affine(1, 1),
        c2: CurvePoint::affine(6, 3),
    };
    let keys = scheme.keypair_from_scalar(&big(7)).unwrap();
    let err = scheme
        .decrypt(&keys.private_key, &off_curve)
        .with_context("integration")
        .unwrap_err();
    assert!(matches!(err, Error::InvalidCiphertext { .. }));
    assert_eq!(err.context(), "integration");
}

#[test]
fn test_ciphertext_wire_format() {
    let scheme = EcElGamal::from_domain(&REFERENCE_CURVE).unwrap();
    let keys = scheme.keypair_from_scalar(&big(7)).unwrap();
    let ct = scheme
        .encrypt_with_nonce(&keys.public_key, &CurvePoint::affine(6, 3), &big(9))
        .unwrap();
    let bytes = ct.to_bytes(scheme.group());
    assert_eq!(hex::encode(&bytes), "040706040d07");

    let parsed = Ciphertext::from_bytes(scheme.group(), &bytes).unwrap();
    assert_eq!(
        scheme.decrypt(&keys.private_key, &parsed).unwrap(),
        CurvePoint::affine(6, 3)
    );
}

#[test]
fn test_private_key_export() {
    let scheme = EcElGamal::from_domain(&REFERENCE_CURVE).unwrap();
    let keys = scheme.keypair_from_scalar(&big(7)).unwrap();
    let exported = keys.private_key.to_bytes_zeroizing();
    let restored = PrivateKey::from_bytes(&exported).unwrap();
    assert_eq!(restored.scalar(), big(7));
    assert_eq!(format!("{:?}", restored), "PrivateKey([REDACTED])");
}
