//! Public API traits and types for the pcrypt library
//!
//! This crate provides the public API surface shared by every algorithm
//! family: the error taxonomy, one capability trait per family, the owned
//! [`BigNum`] value type and the [`InitParams`] list handed to algorithm
//! constructors.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, ErrorKind, Result};
pub use types::*;

pub use traits::{
    Bignum,
    BignumAlgorithm,
    HashAlgorithm,
    HashContext,
    MacAlgorithm,
    MacContext,
};
