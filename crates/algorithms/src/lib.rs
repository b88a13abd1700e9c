//! Cryptographic primitives for the pcrypt library
//!
//! This crate provides the concrete algorithms behind the capability traits
//! of `pcrypt-api`:
//!
//! - [`bignum`]: arbitrary-precision integers backed by `num-bigint`
//! - [`ec`]: prime-field elliptic curves with SEC encoding
//! - [`hash`]: SHA-224 and SHA-256
//! - [`mac`]: HMAC over any hash capability

#![forbid(unsafe_code)]
#![deny(missing_docs)]

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

pub mod bignum;
pub use bignum::{NumBignum, NumBignumAlgorithm};

// Elliptic Curve primitives
pub mod ec;
pub use ec::{Curve, EccAlgorithm, Point, PointCoord, PointFormat, PrimeCurveAlgorithm};

// Hash function implementations
pub mod hash;
pub use hash::{Sha224, Sha256};

// MAC implementations
pub mod mac;
pub use mac::{Hmac, HmacAlgorithm};
