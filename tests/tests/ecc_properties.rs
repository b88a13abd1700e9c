//! Property-based tests for the prime-curve engine

use pcrypt_algorithms::{Curve, PointFormat};
use pcrypt_api::BigNum;
use pcrypt_tests::{bignum_prototype, loaded_registry, named_curve};
use proptest::prelude::*;

fn curve() -> (Curve, BigNum) {
    let registry = loaded_registry().unwrap();
    let prototype = bignum_prototype(&registry).unwrap();
    (named_curve(&registry, "secp192k1").unwrap(), prototype)
}

fn scalar() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..=24)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn shamir_matches_separate_multiplications(a in scalar(), b in scalar()) {
        let (curve, prototype) = curve();
        let (a, b) = (prototype.with_bytes(&a), prototype.with_bytes(&b));
        let g = curve.generator();
        let q = g.double().unwrap().double().unwrap().add(&g).unwrap();

        let joint = g.mul2(&a, Some((&q, &b))).unwrap();
        let separate = g.mul(&a).unwrap().add(&q.mul(&b).unwrap()).unwrap();
        prop_assert_eq!(joint, separate);
    }

    #[test]
    fn scalar_multiplication_distributes(a in any::<u64>(), b in any::<u64>()) {
        let (curve, prototype) = curve();
        let g = curve.generator();
        let sum = prototype.with_small(a).add(&prototype.with_small(b)).unwrap();

        let lhs = g.mul(&sum).unwrap();
        let rhs = g
            .mul(&prototype.with_small(a))
            .unwrap()
            .add(&g.mul(&prototype.with_small(b)).unwrap())
            .unwrap();
        prop_assert_eq!(lhs, rhs);
    }

    #[test]
    fn multiples_stay_on_curve_and_survive_sec(k in scalar()) {
        let (curve, prototype) = curve();
        let p = curve.generator().mul(&prototype.with_bytes(&k)).unwrap();
        prop_assert!(p.is_on_curve().unwrap());

        let encoded = p.to_sec(PointFormat::Uncompressed).unwrap();
        if p.is_infinity() {
            prop_assert_eq!(encoded.clone(), vec![0x00]);
        } else {
            prop_assert_eq!(encoded.len(), 1 + 2 * curve.modulus_size());
        }
        prop_assert_eq!(curve.decode_point(&encoded).unwrap(), p.clone());

        let neg = p.invert().unwrap();
        prop_assert!(p.add(&neg).unwrap().is_infinity());
    }
}
