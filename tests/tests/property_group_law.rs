//! Property-based tests for the elliptic-curve group law

use ecelgamal_algorithms::{CurvePoint, EllipticCurveGroup};
use ecelgamal_tests::{all_points, reference_curve, scalar_from_bytes, secp256k1};
use num_bigint::BigInt;
use proptest::prelude::*;

fn reference_group() -> EllipticCurveGroup {
    reference_curve().group
}

/// Any point of the reference curve, including O
fn reference_point() -> impl Strategy<Value = CurvePoint> {
    prop::sample::select(all_points(&reference_group()))
}

proptest! {
    #[test]
    fn identity_is_neutral(p in reference_point()) {
        let group = reference_group();
        prop_assert_eq!(group.add(&p, &CurvePoint::Identity), p.clone());
        prop_assert_eq!(group.add(&CurvePoint::Identity, &p), p);
    }

    #[test]
    fn negation_is_inverse(p in reference_point()) {
        let group = reference_group();
        let neg = group.negate(&p);
        prop_assert!(group.is_on_curve(&neg));
        prop_assert!(group.add(&p, &neg).is_identity());
    }

    #[test]
    fn addition_is_commutative(p in reference_point(), q in reference_point()) {
        let group = reference_group();
        prop_assert_eq!(group.add(&p, &q), group.add(&q, &p));
    }

    #[test]
    fn addition_is_associative(
        p in reference_point(),
        q in reference_point(),
        r in reference_point()
    ) {
        let group = reference_group();
        prop_assert_eq!(
            group.add(&group.add(&p, &q), &r),
            group.add(&p, &group.add(&q, &r))
        );
    }

    #[test]
    fn addition_is_closed(p in reference_point(), q in reference_point()) {
        let group = reference_group();
        prop_assert!(group.is_on_curve(&group.add(&p, &q)));
    }

    #[test]
    fn scalar_multiplication_is_linear(
        p in reference_point(),
        m in 0u32..10_000,
        n in 0u32..10_000
    ) {
        let group = reference_group();
        let lhs = group.scalar_multiply(&p, &BigInt::from(m + n));
        let rhs = group.add(
            &group.scalar_multiply(&p, &BigInt::from(m)),
            &group.scalar_multiply(&p, &BigInt::from(n)),
        );
        prop_assert_eq!(lhs, rhs);
    }

    #[test]
    fn negative_scalar_negates_point(p in reference_point(), n in 0i64..10_000) {
        let group = reference_group();
        prop_assert_eq!(
            group.scalar_multiply(&p, &BigInt::from(-n)),
            group.scalar_multiply(&group.negate(&p), &BigInt::from(n))
        );
    }

    #[test]
    fn scalar_multiplication_matches_repeated_addition(
        p in reference_point(),
        n in 0u32..60
    ) {
        let group = reference_group();
        let mut acc = CurvePoint::Identity;
        for _ in 0..n {
            acc = group.add(&acc, &p);
        }
        prop_assert_eq!(group.scalar_multiply(&p, &BigInt::from(n)), acc);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn secp256k1_linearity(m in any::<u64>(), n in any::<u64>()) {
        let curve = secp256k1();
        let (group, g) = (&curve.group, &curve.base_point);
        let sum = BigInt::from(m) + BigInt::from(n);
        prop_assert_eq!(
            group.scalar_multiply(g, &sum),
            group.add(
                &group.scalar_multiply(g, &BigInt::from(m)),
                &group.scalar_multiply(g, &BigInt::from(n)),
            )
        );
    }

    #[test]
    fn secp256k1_multiples_stay_on_curve(bytes in any::<[u8; 32]>()) {
        let curve = secp256k1();
        let k = scalar_from_bytes(&bytes);
        let p = curve.group.scalar_multiply(&curve.base_point, &k);
        prop_assert!(curve.group.is_on_curve(&p));
        prop_assert!(curve.group.add(&p, &curve.group.negate(&p)).is_identity());
    }

    #[test]
    fn secp256k1_encoding_round_trip(bytes in any::<[u8; 32]>()) {
        let curve = secp256k1();
        let p = curve
            .group
            .scalar_multiply(&curve.base_point, &scalar_from_bytes(&bytes));
        let encoded = curve.group.encode_point(&p);
        prop_assert_eq!(curve.group.decode_point(&encoded).unwrap(), p);
    }
}
