//! Error handling for the pcrypt ecosystem

pub mod types;

// Re-export the primary error type and result
pub use types::{Error, ErrorKind, Result};

#[cfg(test)]
mod tests;
