//! Property-based tests for EC-ElGamal encryption

use ecelgamal_algorithms::CurvePoint;
use ecelgamal_pke::{decrypt, encrypt, generate_keys, Ciphertext, EcElGamal};
use ecelgamal_tests::{all_points, reference_curve, scalar_from_bytes, secp256k1};
use num_bigint::BigInt;
use proptest::prelude::*;

fn reference_message() -> impl Strategy<Value = CurvePoint> {
    prop::sample::select(all_points(&reference_curve().group))
}

proptest! {
    #[test]
    fn reference_round_trip(
        d in -100i64..100,
        k in -100i64..100,
        m in reference_message()
    ) {
        let curve = reference_curve();
        let (group, g) = (&curve.group, &curve.base_point);
        let (d, k) = (BigInt::from(d), BigInt::from(k));

        let keys = generate_keys(group, g, &d).unwrap();
        let ct = encrypt(group, g, &keys.public_key, &m, &k).unwrap();
        prop_assert_eq!(decrypt(group, &d, &ct).unwrap(), m);
    }

    #[test]
    fn reference_ciphertext_bytes_round_trip(
        d in 1i64..19,
        k in 1i64..19,
        m in reference_message()
    ) {
        let scheme = EcElGamal::from_named_curve(reference_curve()).unwrap();
        let keys = scheme.keypair_from_scalar(&BigInt::from(d)).unwrap();
        let ct = scheme
            .encrypt_with_nonce(&keys.public_key, &m, &BigInt::from(k))
            .unwrap();
        let bytes = ct.to_bytes(scheme.group());
        prop_assert_eq!(Ciphertext::from_bytes(scheme.group(), &bytes).unwrap(), ct);
    }

    #[test]
    fn wrong_key_never_panics(d in 1i64..19, other in 1i64..19, k in 1i64..19) {
        let curve = reference_curve();
        let (group, g) = (&curve.group, &curve.base_point);
        let m = CurvePoint::affine(6, 3);
        let keys = generate_keys(group, g, &BigInt::from(d)).unwrap();
        let ct = encrypt(group, g, &keys.public_key, &m, &BigInt::from(k)).unwrap();

        let recovered = decrypt(group, &BigInt::from(other), &ct).unwrap();
        prop_assert!(group.is_on_curve(&recovered));
        // G has prime order 19 and k ≠ 0 mod 19, so the result depends on the key
        prop_assert_eq!(recovered == m, d == other);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn secp256k1_round_trip(
        d in any::<[u8; 32]>(),
        k in any::<[u8; 32]>(),
        m in any::<u64>()
    ) {
        let curve = secp256k1();
        let (group, g) = (&curve.group, &curve.base_point);
        let d = scalar_from_bytes(&d);
        let message = group.scalar_multiply(g, &BigInt::from(m));

        let keys = generate_keys(group, g, &d).unwrap();
        let ct = encrypt(group, g, &keys.public_key, &message, &scalar_from_bytes(&k)).unwrap();
        prop_assert_eq!(decrypt(group, &d, &ct).unwrap(), message);
    }
}
