//! SHA-2 hash capability
//!
//! The compression functions come from the `sha2` crate; this module only
//! adapts them to the [`HashAlgorithm`] capability so they can be handed
//! to constructions such as HMAC at run time.

use core::fmt;
use core::marker::PhantomData;

use pcrypt_api::{HashAlgorithm, HashContext};
use pcrypt_params::utils::hash::{
    SHA224_BLOCK_SIZE, SHA224_OUTPUT_SIZE, SHA256_BLOCK_SIZE, SHA256_OUTPUT_SIZE,
};
use sha2::Digest;

/// Incremental state for any `sha2` digest
struct Sha2Context<D> {
    state: D,
}

impl<D> HashContext for Sha2Context<D>
where
    D: Digest + Clone + Send + 'static,
{
    fn update(&mut self, data: &[u8]) {
        Digest::update(&mut self.state, data);
    }

    fn finalize(&mut self) -> Vec<u8> {
        core::mem::replace(&mut self.state, D::new())
            .finalize()
            .to_vec()
    }

    fn reset(&mut self) {
        self.state = D::new();
    }

    fn box_clone(&self) -> Box<dyn HashContext> {
        Box::new(Sha2Context {
            state: self.state.clone(),
        })
    }
}

/// A SHA-2 variant with fixed name and sizes
pub struct Sha2Hash<D> {
    name: &'static str,
    digest_size: usize,
    block_size: usize,
    _digest: PhantomData<fn() -> D>,
}

impl<D> fmt::Debug for Sha2Hash<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sha2Hash").field("name", &self.name).finish()
    }
}

impl<D> Clone for Sha2Hash<D> {
    fn clone(&self) -> Self {
        Self {
            name: self.name,
            digest_size: self.digest_size,
            block_size: self.block_size,
            _digest: PhantomData,
        }
    }
}

impl<D> HashAlgorithm for Sha2Hash<D>
where
    D: Digest + Clone + Send + 'static,
{
    fn name(&self) -> &'static str {
        self.name
    }

    fn digest_size(&self) -> usize {
        self.digest_size
    }

    fn block_size(&self) -> usize {
        self.block_size
    }

    fn new_context(&self) -> Box<dyn HashContext> {
        Box::new(Sha2Context { state: D::new() })
    }
}

/// SHA-224
pub type Sha224 = Sha2Hash<sha2::Sha224>;

/// SHA-256
pub type Sha256 = Sha2Hash<sha2::Sha256>;

impl Sha224 {
    /// Create the SHA-224 capability
    pub const fn new() -> Self {
        Self {
            name: "SHA-224",
            digest_size: SHA224_OUTPUT_SIZE,
            block_size: SHA224_BLOCK_SIZE,
            _digest: PhantomData,
        }
    }
}

impl Default for Sha224 {
    fn default() -> Self {
        Self::new()
    }
}

impl Sha256 {
    /// Create the SHA-256 capability
    pub const fn new() -> Self {
        Self {
            name: "SHA-256",
            digest_size: SHA256_OUTPUT_SIZE,
            block_size: SHA256_BLOCK_SIZE,
            _digest: PhantomData,
        }
    }
}

impl Default for Sha256 {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests;
