//! Constant values for pcrypt cryptographic operations
//!
//! This library provides the static tables shared across the pcrypt project:
//! the SEC named-curve domain parameters and hash sizing constants.

#![no_std]

// Traditional algorithm constants
pub mod traditional;

// Utility constants
pub mod utils;
