//! Constants for hash functions

/// Output size of SHA-224 in bytes
pub const SHA224_OUTPUT_SIZE: usize = 28;

/// Output size of SHA-256 in bytes
pub const SHA256_OUTPUT_SIZE: usize = 32;

/// Internal block size of SHA-224 in bytes
pub const SHA224_BLOCK_SIZE: usize = 64;

/// Internal block size of SHA-256 in bytes
pub const SHA256_BLOCK_SIZE: usize = 64;

/// Largest block size any registered hash may declare for use under HMAC
pub const MAX_HASH_BLOCK_SIZE: usize = 256;
