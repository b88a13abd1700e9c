//! Message authentication code capability

use core::fmt;

use crate::error::Result;
use crate::types::InitParams;

/// A MAC construction exposed through the registry
pub trait MacAlgorithm: fmt::Debug + Send + Sync {
    /// Algorithm name, e.g. `"HMAC"`
    fn name(&self) -> &'static str;

    /// Create a context from initialization parameters
    ///
    /// Constructions built on a hash function need the `"digest"` parameter
    /// and fail with `MoreInfo` without it.
    fn new_context(&self, params: &InitParams) -> Result<Box<dyn MacContext>>;
}

/// Keyed MAC state
pub trait MacContext: Send {
    /// Install the key and reset the message state
    fn set_key(&mut self, key: &[u8]) -> Result<()>;

    /// Absorb message bytes
    fn update(&mut self, data: &[u8]) -> Result<()>;

    /// Produce the tag and reset for another message under the same key
    fn finalize(&mut self) -> Result<Vec<u8>>;

    /// Tag length in bytes
    fn tag_size(&self) -> usize;

    /// Finalize and compare against `tag` in constant time
    fn verify(&mut self, tag: &[u8]) -> Result<bool>;
}
