//! Internal utilities for the pcrypt library
//!
//! Nothing in here is part of the public API surface; the helpers are shared
//! between the primitive and registry crates.

#![forbid(unsafe_code)]

pub mod constant_time;

pub use constant_time::{ct_eq, ct_eq_choice};
