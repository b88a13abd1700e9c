//! Shared fixtures for the pcrypt integration tests

use pcrypt_algorithms::Curve;
use pcrypt_api::{AlgorithmKind, BigNum, InitParams, ParamValue, Result};
use pcrypt_registry::Registry;
use rand::RngCore;

/// Units shipped with the library, in load order
pub const BUILTIN_UNITS: [&str; 4] = ["bignum", "prime", "sha2", "hmac"];

/// A registry with every built-in unit loaded
pub fn loaded_registry() -> Result<Registry> {
    let mut registry = Registry::builtin();
    for unit in BUILTIN_UNITS {
        registry.load(unit, None)?;
    }
    Ok(registry)
}

/// Zero value from the registry's bignum entry
pub fn bignum_prototype(registry: &Registry) -> Result<BigNum> {
    let id = registry.lookup_by_kind(AlgorithmKind::Bignum, 0, None)?;
    let (table, _) = registry.capability_table(id)?;
    Ok(table.as_bignum()?.zero())
}

/// Named curve built entirely through registry dispatch
pub fn named_curve(registry: &Registry, name: &str) -> Result<Curve> {
    let prototype = bignum_prototype(registry)?;
    let id = registry.lookup_by_kind(AlgorithmKind::Ecc, 0, None)?;
    let (table, _) = registry.capability_table(id)?;
    let params = InitParams::new().with("bignum", ParamValue::Bignum(prototype));
    let mut curve = table.as_ecc()?.new_curve(&params)?;
    curve.load_named(name)?;
    Ok(curve)
}

/// Random scalar of `len` bytes
pub fn random_scalar(prototype: &BigNum, rng: &mut impl RngCore, len: usize) -> BigNum {
    let mut bytes = vec![0u8; len];
    rng.fill_bytes(&mut bytes);
    prototype.with_bytes(&bytes)
}
