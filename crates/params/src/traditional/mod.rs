//! Constants for traditional cryptographic algorithms

pub mod ecc;
