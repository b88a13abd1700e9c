//! Message Authentication Code (MAC) implementations

pub mod hmac;

pub use hmac::{Hmac, HmacAlgorithm};
