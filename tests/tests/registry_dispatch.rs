//! End-to-end tests composing algorithms through the registry

use std::cmp::Ordering;
use std::sync::Arc;

use pcrypt_algorithms::ec::prime::vectors::SECP521R1_MULTIPLES;
use pcrypt_algorithms::{PointCoord, PointFormat};
use pcrypt_api::{AlgorithmKind, ErrorKind, InitParams};
use pcrypt_params::traditional::ecc::NAMED_CURVES;
use pcrypt_registry::{units, Registry, StaticCatalog};
use pcrypt_tests::{bignum_prototype, loaded_registry, named_curve, random_scalar, BUILTIN_UNITS};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

#[test]
fn test_builtin_units_enumerate() {
    let registry = loaded_registry().unwrap();
    let names: Vec<_> = registry
        .entry_ids()
        .into_iter()
        .map(|id| registry.algorithm_name(id).unwrap().to_string())
        .collect();
    assert_eq!(
        names,
        ["Bignum", "EllipticCurvePrime", "SHA-224", "SHA-256", "HMAC"]
    );

    for id in registry.entry_ids() {
        let (table, size) = registry.capability_table(id).unwrap();
        assert_eq!(table.kind(), registry.kind(id).unwrap());
        assert_eq!(size, table.table_size());
    }
}

#[test]
fn test_every_self_test_through_registry() {
    let registry = loaded_registry().unwrap();
    for id in registry.entry_ids() {
        let result = registry.self_test(id);
        match registry.kind(id).unwrap() {
            AlgorithmKind::Bignum => {
                assert_eq!(result.unwrap_err().kind(), ErrorKind::NotImplemented)
            }
            _ => result.unwrap(),
        }
    }
}

#[test]
fn test_unknown_unit_and_algorithm() {
    let mut registry = Registry::builtin();
    let err = registry.load("md5", None).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert_eq!(err.to_string(), "plugin unit: 'md5' not found");

    registry.load("sha2", Some("/usr/lib/pcrypt:plugins")).unwrap();
    let err = registry.lookup_by_name("SHA-512", 0, None).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert_eq!(
        registry.lookup_by_kind(AlgorithmKind::Block, 0, None).unwrap_err().kind(),
        ErrorKind::NotFound
    );
}

#[test]
fn test_custom_catalog() {
    let mut catalog = StaticCatalog::new();
    catalog.mount_unit("vendor/sha2", Arc::new(units::sha2_unit()));
    let mut registry = Registry::new(Arc::new(catalog));

    assert!(registry.load("sha2", None).is_err());
    let id = registry.load("sha2", Some("lib:vendor")).unwrap();
    assert_eq!(registry.unit_name(id).unwrap(), "sha2");
    assert_eq!(registry.entry_count(), 2);
}

#[test]
fn test_ids_go_stale_after_unload() {
    let mut registry = loaded_registry().unwrap();
    let ids = registry.entry_ids();
    registry.unload();
    for id in ids {
        assert_eq!(
            registry.capability_table(id).unwrap_err().kind(),
            ErrorKind::Invalid
        );
    }

    for unit in BUILTIN_UNITS {
        registry.load(unit, None).unwrap();
    }
    assert_eq!(registry.entry_count(), 5);
}

#[test]
fn test_curve_requires_bignum_prototype() {
    let registry = loaded_registry().unwrap();
    let id = registry.lookup_by_name("EllipticCurvePrime", 0, None).unwrap();
    let (table, _) = registry.capability_table(id).unwrap();
    let err = table.as_ecc().unwrap().new_curve(&InitParams::new()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MoreInfo);
}

#[test]
fn test_secp521r1_multiples_through_registry() {
    let registry = loaded_registry().unwrap();
    let prototype = bignum_prototype(&registry).unwrap();
    let curve = named_curve(&registry, "secp521r1").unwrap();
    let g = curve.generator();

    for v in SECP521R1_MULTIPLES {
        let p = g.mul(&prototype.with_small(v.k)).unwrap();
        let x = hex::decode(v.x).unwrap();
        let y = hex::decode(v.y).unwrap();
        assert_eq!(p.coordinate(PointCoord::X).unwrap().to_padded_bytes(x.len()).unwrap(), x);
        assert_eq!(p.coordinate(PointCoord::Y).unwrap().to_padded_bytes(y.len()).unwrap(), y);
    }
}

#[test]
fn test_ecdh_style_agreement() {
    let registry = loaded_registry().unwrap();
    let prototype = bignum_prototype(&registry).unwrap();
    let mut rng = ChaCha20Rng::seed_from_u64(0x0ecd);

    for name in ["secp256k1", "secp256r1", "secp384r1"] {
        let curve = named_curve(&registry, name).unwrap();
        let g = curve.generator();
        let len = curve.modulus_size();

        let a = random_scalar(&prototype, &mut rng, len);
        let b = random_scalar(&prototype, &mut rng, len);
        let pub_a = curve.decode_point(&g.mul(&a).unwrap().to_sec(PointFormat::Uncompressed).unwrap()).unwrap();
        let pub_b = curve.decode_point(&g.mul(&b).unwrap().to_sec(PointFormat::Uncompressed).unwrap()).unwrap();

        let shared_a = pub_b.mul(&a).unwrap();
        let shared_b = pub_a.mul(&b).unwrap();
        assert_eq!(shared_a.compare(&shared_b).unwrap(), Ordering::Equal, "{}", name);
        assert!(shared_a.is_on_curve().unwrap());
    }
}

#[test]
fn test_generator_order_on_named_curves() {
    let registry = loaded_registry().unwrap();
    for named in NAMED_CURVES.iter() {
        let curve = named_curve(&registry, named.name).unwrap();
        assert_eq!(curve.name(), Some(named.name));

        let g = curve.generator();
        assert!(g.is_on_curve().unwrap(), "{}", named.name);
        let n = curve.param_bignum("n", PointCoord::X).unwrap();
        assert!(g.mul(&n).unwrap().is_infinity(), "{}", named.name);

        let sec = curve.generator_sec(PointFormat::Uncompressed).unwrap();
        assert_eq!(hex::encode(sec), named.g);
    }
}
