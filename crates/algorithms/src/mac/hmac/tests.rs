use super::*;
use crate::hash::{Sha224, Sha256};
use pcrypt_api::{ErrorKind, ParamValue};

fn sha256() -> Arc<dyn HashAlgorithm> {
    Arc::new(Sha256::new())
}

// SHA-256 reporting a made-up block size
#[derive(Debug)]
struct ResizedBlock {
    block_size: usize,
}

impl HashAlgorithm for ResizedBlock {
    fn name(&self) -> &'static str {
        "SHA-256/resized"
    }

    fn digest_size(&self) -> usize {
        32
    }

    fn block_size(&self) -> usize {
        self.block_size
    }

    fn new_context(&self) -> Box<dyn HashContext> {
        Sha256::new().new_context()
    }
}

#[test]
fn test_hmac_sha256_rfc4231_case1() {
    let tag = Hmac::mac(sha256(), &[0x0b; 20], b"Hi There").unwrap();
    assert_eq!(
        hex::encode(tag),
        "b0344c61d8db38535ca8afceaf0bf12b881dc200c9833da726e9376c2e32cff7"
    );
}

#[test]
fn test_hmac_sha256_rfc4231_case2() {
    let tag = Hmac::mac(sha256(), b"Jefe", b"what do ya want for nothing?").unwrap();
    assert_eq!(
        hex::encode(tag),
        "5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843"
    );
}

#[test]
fn test_hmac_sha224_rfc4231_case1() {
    let tag = Hmac::mac(Arc::new(Sha224::new()), &[0x0b; 20], b"Hi There").unwrap();
    assert_eq!(
        hex::encode(tag),
        "896fb1128abbdf196832107cd49df33f47b4b1169912ba4f53684b22"
    );
}

#[test]
fn test_long_key_is_hashed() {
    let tag = Hmac::mac(
        sha256(),
        &[0xaa; 131],
        b"Test Using Larger Than Block-Size Key - Hash Key First",
    )
    .unwrap();
    assert_eq!(
        hex::encode(tag),
        "60e431591ee0b67f0d8a26aacbf5b77f8e0bc6213728c5140546040f0ee37f54"
    );
}

#[test]
fn test_finalize_restarts_under_same_key() {
    let mut mac = Hmac::with_key(sha256(), b"Jefe").unwrap();
    mac.update(b"what do ya want ");
    mac.update(b"for nothing?");
    let first = mac.finalize();

    mac.update(b"what do ya want for nothing?");
    assert_eq!(mac.finalize(), first);

    mac.update(b"junk");
    mac.reset();
    mac.update(b"what do ya want for nothing?");
    assert!(mac.verify_tag(&first));
}

#[test]
fn test_verify_rejects_wrong_tag() {
    let mut mac = Hmac::with_key(sha256(), &[0x0b; 20]).unwrap();
    mac.update(b"Hi There");
    let mut tag = mac.finalize();

    mac.update(b"Hi There");
    assert!(mac.verify_tag(&tag));

    tag[0] ^= 1;
    mac.update(b"Hi There");
    assert!(!mac.verify_tag(&tag));

    mac.update(b"Hi There");
    assert!(!mac.verify_tag(&tag[..16]));
}

#[test]
fn test_capability_requires_digest() {
    let err = HmacAlgorithm.new_context(&InitParams::new()).err().unwrap();
    assert_eq!(err.kind(), ErrorKind::MoreInfo);

    let params = InitParams::new().with("digest", ParamValue::Hash(sha256()));
    let mut ctx = HmacAlgorithm.new_context(&params).unwrap();
    assert_eq!(ctx.tag_size(), 32);
    ctx.set_key(b"Jefe").unwrap();
    ctx.update(b"what do ya want for nothing?").unwrap();
    assert_eq!(
        hex::encode(ctx.finalize().unwrap()),
        "5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843"
    );
}

#[test]
fn test_self_test() {
    assert!(self_test(&sha256()).is_ok());
    let sha224: Arc<dyn HashAlgorithm> = Arc::new(Sha224::new());
    assert!(self_test(&sha224).is_ok());
}

#[test]
fn test_rejects_digest_wider_than_block() {
    let narrow: Arc<dyn HashAlgorithm> = Arc::new(ResizedBlock { block_size: 16 });
    let err = Hmac::with_key(Arc::clone(&narrow), &[7u8; 20]).err().unwrap();
    assert!(matches!(err, Error::Parameter { name: "HMAC hash digest", .. }));

    let params = InitParams::new().with("digest", ParamValue::Hash(narrow));
    let err = HmacAlgorithm.new_context(&params).err().unwrap();
    assert_eq!(err.kind(), ErrorKind::Invalid);

    let empty: Arc<dyn HashAlgorithm> = Arc::new(ResizedBlock { block_size: 0 });
    assert!(Hmac::new(empty).is_err());

    // equal digest and block sizes are fine, long keys still fit
    let tight: Arc<dyn HashAlgorithm> = Arc::new(ResizedBlock { block_size: 32 });
    let tag = Hmac::mac(tight, &[7u8; 40], b"data").unwrap();
    assert_eq!(tag.len(), 32);
}
