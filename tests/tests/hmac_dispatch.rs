//! HMAC composed with a hash found in the registry

use pcrypt_api::{ErrorKind, InitParams, ParamValue};
use pcrypt_tests::loaded_registry;

// RFC 4231 test case 2
const KEY: &[u8] = b"Jefe";
const DATA: &[u8] = b"what do ya want for nothing?";
const TAG_SHA256: &str = "5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843";
const TAG_SHA224: &str = "a30e01098bc6dbbf45690f3a7e9e6d0f8bbea2a39e6148008fd05e44";

fn context_for(hash: &str) -> Box<dyn pcrypt_api::MacContext> {
    let registry = loaded_registry().unwrap();
    let hash_id = registry.lookup_by_name(hash, 0, None).unwrap();
    let mac_id = registry.lookup_by_name("HMAC", 0, None).unwrap();

    let digest = registry.capability_table(hash_id).unwrap().0.as_hash().unwrap().clone();
    let mac = registry.capability_table(mac_id).unwrap().0.as_mac().unwrap().clone();
    mac.new_context(&InitParams::new().with("digest", ParamValue::Hash(digest)))
        .unwrap()
}

#[test]
fn test_rfc4231_through_registry() {
    for (hash, expected) in [("SHA-256", TAG_SHA256), ("SHA-224", TAG_SHA224)] {
        let mut ctx = context_for(hash);
        ctx.set_key(KEY).unwrap();
        ctx.update(&DATA[..10]).unwrap();
        ctx.update(&DATA[10..]).unwrap();
        assert_eq!(ctx.tag_size(), expected.len() / 2);
        assert_eq!(hex::encode(ctx.finalize().unwrap()), expected, "{}", hash);
    }
}

#[test]
fn test_verify_through_registry() {
    let mut ctx = context_for("SHA-256");
    ctx.set_key(KEY).unwrap();
    ctx.update(DATA).unwrap();
    assert!(ctx.verify(&hex::decode(TAG_SHA256).unwrap()).unwrap());

    ctx.update(DATA).unwrap();
    let mut forged = hex::decode(TAG_SHA256).unwrap();
    forged[31] ^= 1;
    assert!(!ctx.verify(&forged).unwrap());
}

#[test]
fn test_digest_parameter_is_required() {
    let registry = loaded_registry().unwrap();
    let mac_id = registry.lookup_by_name("HMAC", 0, None).unwrap();
    let mac = registry.capability_table(mac_id).unwrap().0.as_mac().unwrap().clone();
    let err = mac.new_context(&InitParams::new()).err().unwrap();
    assert_eq!(err.kind(), ErrorKind::MoreInfo);
}
