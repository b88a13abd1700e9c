//! HMAC (Hash-based Message Authentication Code) over any registered hash
//!
//! RFC 2104 / FIPS 198-1. The hash function is supplied at run time as a
//! [`HashAlgorithm`] capability, normally the `"digest"` entry of the
//! [`InitParams`] handed to [`HmacAlgorithm::new_context`].

use std::sync::Arc;

use pcrypt_api::{
    HashAlgorithm, HashContext, InitParams, MacAlgorithm, MacContext, Result as CoreResult,
};
use pcrypt_internal::constant_time::ct_eq;
use pcrypt_params::utils::hash::MAX_HASH_BLOCK_SIZE;
use zeroize::Zeroizing;

use crate::error::{to_core_result, validate, Error, Result};

/// HMAC keyed over a run-time hash function
pub struct Hmac {
    hash: Arc<dyn HashAlgorithm>,
    inner: Box<dyn HashContext>,
    outer: Box<dyn HashContext>,
    key: Zeroizing<Vec<u8>>,
    block_size: usize,
    digest_size: usize,
}

impl Hmac {
    const IPAD_BYTE: u8 = 0x36;
    const OPAD_BYTE: u8 = 0x5c;

    /// Create an HMAC instance with an empty key
    pub fn new(hash: Arc<dyn HashAlgorithm>) -> Result<Self> {
        let block_size = hash.block_size();
        let digest_size = hash.digest_size();
        validate::max_length("HMAC hash block", block_size, MAX_HASH_BLOCK_SIZE)?;
        validate::max_length("HMAC hash digest", digest_size, MAX_HASH_BLOCK_SIZE)?;
        validate::parameter(block_size > 0, "HMAC hash block", "block size is zero")?;
        // a hashed long key must fit in one block
        validate::parameter(
            digest_size <= block_size,
            "HMAC hash digest",
            "digest is longer than the hash block",
        )?;

        let mut mac = Self {
            inner: hash.new_context(),
            outer: hash.new_context(),
            hash,
            key: Zeroizing::new(Vec::new()),
            block_size,
            digest_size,
        };
        mac.load_pads();
        Ok(mac)
    }

    /// Create an HMAC instance keyed with `key`
    pub fn with_key(hash: Arc<dyn HashAlgorithm>, key: &[u8]) -> Result<Self> {
        let mut mac = Self::new(hash)?;
        mac.set_key(key);
        Ok(mac)
    }

    /// Name of the underlying hash function
    pub fn hash_name(&self) -> &'static str {
        self.hash.name()
    }

    /// Install a new key and discard any buffered message
    ///
    /// Keys longer than the hash block are hashed first.
    pub fn set_key(&mut self, key: &[u8]) {
        self.key = if key.len() > self.block_size {
            Zeroizing::new(self.hash.digest(key))
        } else {
            Zeroizing::new(key.to_vec())
        };
        self.load_pads();
    }

    fn load_pads(&mut self) {
        let mut ipad = Zeroizing::new(vec![Self::IPAD_BYTE; self.block_size]);
        let mut opad = Zeroizing::new(vec![Self::OPAD_BYTE; self.block_size]);
        for (i, k) in self.key.iter().enumerate() {
            ipad[i] ^= k;
            opad[i] ^= k;
        }

        self.inner.reset();
        self.outer.reset();
        self.inner.update(&ipad);
        self.outer.update(&opad);
    }

    /// Feed additional `data` into the MAC
    pub fn update(&mut self, data: &[u8]) {
        self.inner.update(data);
    }

    /// Produce the tag and restart for another message under the same key
    pub fn finalize(&mut self) -> Vec<u8> {
        let inner_hash = Zeroizing::new(self.inner.finalize());
        self.outer.update(&inner_hash);
        let tag = self.outer.finalize();
        self.load_pads();
        tag
    }

    /// Discard the buffered message, keeping the key
    pub fn reset(&mut self) {
        self.load_pads();
    }

    /// Finalize and compare with `tag` in constant time
    pub fn verify_tag(&mut self, tag: &[u8]) -> bool {
        let expected = self.finalize();
        ct_eq(&expected, tag)
    }

    /// One-shot MAC helper
    pub fn mac(hash: Arc<dyn HashAlgorithm>, key: &[u8], data: &[u8]) -> Result<Vec<u8>> {
        let mut h = Self::with_key(hash, key)?;
        h.update(data);
        Ok(h.finalize())
    }
}

impl MacContext for Hmac {
    fn set_key(&mut self, key: &[u8]) -> CoreResult<()> {
        Hmac::set_key(self, key);
        Ok(())
    }

    fn update(&mut self, data: &[u8]) -> CoreResult<()> {
        Hmac::update(self, data);
        Ok(())
    }

    fn finalize(&mut self) -> CoreResult<Vec<u8>> {
        Ok(Hmac::finalize(self))
    }

    fn tag_size(&self) -> usize {
        self.digest_size
    }

    fn verify(&mut self, tag: &[u8]) -> CoreResult<bool> {
        Ok(self.verify_tag(tag))
    }
}

/// HMAC as a registry capability
#[derive(Debug, Clone, Copy, Default)]
pub struct HmacAlgorithm;

impl MacAlgorithm for HmacAlgorithm {
    fn name(&self) -> &'static str {
        "HMAC"
    }

    fn new_context(&self, params: &InitParams) -> CoreResult<Box<dyn MacContext>> {
        let hash = params.require_hash("HMAC init", "digest")?;
        let mac = to_core_result(Hmac::new(Arc::clone(hash)), "HMAC init")?;
        Ok(Box::new(mac))
    }
}

struct KnownAnswer {
    key: &'static [u8],
    data: &'static [u8],
    repeat: usize,
    tag: &'static str,
}

// RFC 4231 test cases 1, 2, 3 and 6
const SHA256_VECTORS: &[KnownAnswer] = &[
    KnownAnswer {
        key: &[0x0b; 20],
        data: b"Hi There",
        repeat: 1,
        tag: "b0344c61d8db38535ca8afceaf0bf12b881dc200c9833da726e9376c2e32cff7",
    },
    KnownAnswer {
        key: b"Jefe",
        data: b"what do ya want for nothing?",
        repeat: 1,
        tag: "5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843",
    },
    KnownAnswer {
        key: &[0xaa; 20],
        data: &[0xdd],
        repeat: 50,
        tag: "773ea91e36800e46854db8ebd09181a72959098b3ef8c122d9635514ced565fe",
    },
    KnownAnswer {
        key: &[0xaa; 131],
        data: b"Test Using Larger Than Block-Size Key - Hash Key First",
        repeat: 1,
        tag: "60e431591ee0b67f0d8a26aacbf5b77f8e0bc6213728c5140546040f0ee37f54",
    },
];

const SHA224_VECTORS: &[KnownAnswer] = &[
    KnownAnswer {
        key: &[0x0b; 20],
        data: b"Hi There",
        repeat: 1,
        tag: "896fb1128abbdf196832107cd49df33f47b4b1169912ba4f53684b22",
    },
    KnownAnswer {
        key: b"Jefe",
        data: b"what do ya want for nothing?",
        repeat: 1,
        tag: "a30e01098bc6dbbf45690f3a7e9e6d0f8bbea2a39e6148008fd05e44",
    },
];

/// Run the RFC 4231 known-answer tests over `hash`
///
/// Only SHA-224 and SHA-256 carry vectors; other hashes report
/// `NotImplemented`.
pub fn self_test(hash: &Arc<dyn HashAlgorithm>) -> Result<()> {
    let vectors = match hash.name() {
        "SHA-256" => SHA256_VECTORS,
        "SHA-224" => SHA224_VECTORS,
        _ => {
            return Err(Error::NotImplemented {
                feature: "HMAC self-test for this hash",
            })
        }
    };

    let mut mac = Hmac::new(Arc::clone(hash))?;
    for (i, t) in vectors.iter().enumerate() {
        mac.set_key(t.key);
        for _ in 0..t.repeat {
            mac.update(t.data);
        }
        if hex::encode(mac.finalize()) != t.tag {
            return Err(Error::Processing {
                operation: "HMAC self-test",
                details: format!("{} vector {} mismatch", hash.name(), i + 1).into(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests;
