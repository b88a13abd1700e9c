//! Capability traits implemented by algorithm providers
//!
//! Each algorithm family exposes one trait. Registry entries hold these as
//! trait objects so callers can compose algorithms at run time without
//! knowing the concrete types behind them.

pub mod bignum;
pub mod hash;
pub mod mac;

pub use bignum::{Bignum, BignumAlgorithm};
pub use hash::{HashAlgorithm, HashContext};
pub use mac::{MacAlgorithm, MacContext};
