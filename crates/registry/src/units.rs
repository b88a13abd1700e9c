//! Units shipped with the library

use std::sync::Arc;

use pcrypt_algorithms::error::to_core_result;
use pcrypt_algorithms::mac::hmac;
use pcrypt_algorithms::{
    HmacAlgorithm, NumBignumAlgorithm, PrimeCurveAlgorithm, Sha224, Sha256,
};
use pcrypt_api::{Error, Result};

use crate::capability::Capability;
use crate::catalog::StaticCatalog;
use crate::registry::Registry;
use crate::unit::{BuiltinUnit, PluginUnit};

/// `bignum`: exports `Bignum`
pub fn bignum_unit() -> BuiltinUnit {
    BuiltinUnit::new("bignum", vec![Capability::Bignum(Arc::new(NumBignumAlgorithm))])
}

/// `prime`: exports `EllipticCurvePrime`
pub fn prime_unit() -> BuiltinUnit {
    BuiltinUnit::new("prime", vec![Capability::Ecc(Arc::new(PrimeCurveAlgorithm))])
        .with_self_test(ecc_self_test)
}

/// `sha2`: exports `SHA-224` and `SHA-256`
pub fn sha2_unit() -> BuiltinUnit {
    BuiltinUnit::new(
        "sha2",
        vec![
            Capability::Hash(Arc::new(Sha224::new())),
            Capability::Hash(Arc::new(Sha256::new())),
        ],
    )
    .with_self_test(hash_self_test)
}

/// `hmac`: exports `HMAC`
pub fn hmac_unit() -> BuiltinUnit {
    BuiltinUnit::new("hmac", vec![Capability::Mac(Arc::new(HmacAlgorithm))])
        .with_self_test(hmac_self_test)
}

/// Mount every shipped unit under its bare name and under `plugins/`
pub fn register(catalog: &mut StaticCatalog) {
    let units: [Arc<dyn PluginUnit>; 4] = [
        Arc::new(bignum_unit()),
        Arc::new(prime_unit()),
        Arc::new(sha2_unit()),
        Arc::new(hmac_unit()),
    ];
    for unit in units {
        let name = unit.name().to_string();
        catalog.mount_unit(format!("plugins/{}", name), Arc::clone(&unit));
        catalog.mount_unit(name, unit);
    }
}

// The curve test needs a bignum implementation from the same registry
fn ecc_self_test(capability: &Capability, registry: &Registry) -> Result<()> {
    let ecc = capability.as_ecc()?;
    let id = registry.lookup_by_name("Bignum", 0, None)?;
    let (table, _) = registry.capability_table(id)?;
    ecc.self_test(table.as_bignum()?.as_ref())
}

fn hash_self_test(capability: &Capability, _registry: &Registry) -> Result<()> {
    let hash = capability.as_hash()?;
    let expected = match hash.name() {
        "SHA-224" => "23097d223405d8228642a477bda255b32aadbce4bda0b3f7e36c9da7",
        "SHA-256" => "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad",
        _ => {
            return Err(Error::NotImplemented {
                feature: "hash self-test",
            })
        }
    };
    if hex::encode(hash.digest(b"abc")) != expected {
        return Err(Error::Other {
            context: "hash self-test",
            message: format!("{} digest of \"abc\" mismatch", hash.name()),
        });
    }
    Ok(())
}

fn hmac_self_test(capability: &Capability, registry: &Registry) -> Result<()> {
    capability.as_mac()?;
    let id = registry.lookup_by_name("SHA-256", 0, None)?;
    let (table, _) = registry.capability_table(id)?;
    to_core_result(hmac::self_test(table.as_hash()?), "HMAC self-test")
}
