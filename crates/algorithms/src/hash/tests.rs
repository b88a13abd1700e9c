use super::*;
use sha2::digest::core_api::BlockSizeUser;
use sha2::digest::typenum::Unsigned;

#[test]
fn test_sha256_empty() {
    // NIST test vector: Empty string
    let expected = "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";

    let hash = Sha256::new().digest(&[]);
    assert_eq!(hex::encode(hash), expected);
}

#[test]
fn test_sha256_abc() {
    // NIST test vector: "abc"
    let expected = "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad";

    let hash = Sha256::new().digest(b"abc");
    assert_eq!(hex::encode(hash), expected);
}

#[test]
fn test_sha224_abc() {
    let expected = "23097d223405d8228642a477bda255b32aadbce4bda0b3f7e36c9da7";

    let hash = Sha224::new().digest(b"abc");
    assert_eq!(hex::encode(hash), expected);
}

#[test]
fn test_sha224_empty() {
    // NIST test vector: Empty string
    let expected = "d14a028c2a3a2bc9476102bb288234c415a2b01f828ea62ac5b3e42f";

    let hash = Sha224::new().digest(&[]);
    assert_eq!(hex::encode(hash), expected);
}

#[test]
fn test_incremental_matches_one_shot() {
    let alg = Sha256::new();
    let msg = b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq";

    let mut ctx = alg.new_context();
    for chunk in msg.chunks(7) {
        ctx.update(chunk);
    }
    let forked = ctx.box_clone();
    let digest = ctx.finalize();
    assert_eq!(
        hex::encode(&digest),
        "248d6a61d20638b8e5c026930c3e6039a33ce45964ff2167f6ecedd419db06c1"
    );

    // finalize leaves a fresh state behind
    assert_eq!(ctx.finalize(), alg.digest(&[]));

    let mut forked = forked;
    assert_eq!(forked.finalize(), digest);
}

#[test]
fn test_sizes() {
    assert_eq!(Sha224::new().digest_size(), 28);
    assert_eq!(Sha256::new().digest_size(), 32);
    assert_eq!(Sha256::new().block_size(), 64);
    assert_eq!(Sha224::new().name(), "SHA-224");
}

#[test]
fn test_reset_discards_input() {
    let alg = Sha224::new();
    let mut ctx = alg.new_context();
    ctx.update(b"garbage");
    ctx.reset();
    ctx.update(b"abc");
    assert_eq!(ctx.finalize(), alg.digest(b"abc"));
}

#[test]
fn test_sizes_match_digest_crate() {
    let sha224 = Sha224::new();
    assert_eq!(sha224.block_size(), <sha2::Sha224 as BlockSizeUser>::BlockSize::USIZE);
    assert_eq!(sha224.digest_size(), sha224.digest(b"").len());

    let sha256 = Sha256::new();
    assert_eq!(sha256.block_size(), <sha2::Sha256 as BlockSizeUser>::BlockSize::USIZE);
    assert_eq!(sha256.digest_size(), sha256.digest(b"").len());
}
