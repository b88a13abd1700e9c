//! Hash function capability

use core::fmt;

/// A hash function exposed through the registry
pub trait HashAlgorithm: fmt::Debug + Send + Sync {
    /// Algorithm name, e.g. `"SHA-256"`
    fn name(&self) -> &'static str;

    /// Digest length in bytes
    fn digest_size(&self) -> usize;

    /// Internal block length in bytes
    fn block_size(&self) -> usize;

    /// Start a new incremental computation
    fn new_context(&self) -> Box<dyn HashContext>;

    /// One-shot digest of `data`
    fn digest(&self, data: &[u8]) -> Vec<u8> {
        let mut ctx = self.new_context();
        ctx.update(data);
        ctx.finalize()
    }
}

/// Incremental hash state
pub trait HashContext: Send {
    /// Absorb more input
    fn update(&mut self, data: &[u8]);

    /// Produce the digest and reset the state
    fn finalize(&mut self) -> Vec<u8>;

    /// Discard all absorbed input
    fn reset(&mut self);

    /// Copy the current state
    fn box_clone(&self) -> Box<dyn HashContext>;
}
