//! Arbitrary-precision integer capability

use core::any::Any;
use core::cmp::Ordering;
use core::fmt;

use crate::error::Result;
use crate::types::BigNum;

/// Arbitrary-precision signed integer behind an opaque representation
///
/// Binary operations receive the other operand as a trait object. An
/// implementation recovers its own type through [`Bignum::as_any`] and must
/// reject operands of a different representation with
/// [`Error::InvalidParameter`](crate::Error::InvalidParameter).
///
/// Most callers use the [`BigNum`] wrapper rather than this trait directly.
pub trait Bignum: Any + fmt::Debug + Send + Sync {
    /// Name of the implementation that produced this value
    fn algorithm(&self) -> &'static str;

    /// Copy this value into fresh storage of the same representation
    fn box_clone(&self) -> Box<dyn Bignum>;

    /// Upcast used to downcast the other operand of a binary operation
    fn as_any(&self) -> &dyn Any;

    /// Replace the value with the unsigned big-endian integer in `bytes`
    fn set_bytes(&mut self, bytes: &[u8]);

    /// Replace the value with a small non-negative integer
    fn set_small(&mut self, value: u64);

    /// Minimal big-endian encoding of the magnitude; empty for zero
    fn to_bytes(&self) -> Vec<u8>;

    /// Length of [`Bignum::to_bytes`]
    fn nbytes(&self) -> usize;

    /// Bit length of the magnitude; zero for zero
    fn nbits(&self) -> usize;

    /// Bit `index` of the magnitude, counting from the least significant
    fn bit(&self, index: usize) -> bool;

    /// True if the value is zero
    fn is_zero(&self) -> bool;

    /// True if the value is strictly negative
    fn is_negative(&self) -> bool;

    /// Signed comparison
    fn compare(&self, other: &dyn Bignum) -> Result<Ordering>;

    /// Comparison of absolute values
    fn compare_magnitude(&self, other: &dyn Bignum) -> Result<Ordering>;

    /// `self + other`
    fn add(&self, other: &dyn Bignum) -> Result<Box<dyn Bignum>>;

    /// `self - other`
    fn sub(&self, other: &dyn Bignum) -> Result<Box<dyn Bignum>>;

    /// `self * other`
    fn mul(&self, other: &dyn Bignum) -> Result<Box<dyn Bignum>>;

    /// `self mod modulus`, reduced into `[0, |modulus|)`
    fn rem(&self, modulus: &dyn Bignum) -> Result<Box<dyn Bignum>>;

    /// `self * other mod modulus`
    fn mulmod(&self, other: &dyn Bignum, modulus: &dyn Bignum) -> Result<Box<dyn Bignum>>;

    /// `self² mod modulus`
    fn squaremod(&self, modulus: &dyn Bignum) -> Result<Box<dyn Bignum>>;

    /// Multiplicative inverse modulo `modulus`
    ///
    /// Fails with `InvalidParameter` when no inverse exists.
    fn invmod(&self, modulus: &dyn Bignum) -> Result<Box<dyn Bignum>>;

    /// Absolute value
    fn abs(&self) -> Box<dyn Bignum>;
}

/// Factory for one bignum representation
pub trait BignumAlgorithm: fmt::Debug + Send + Sync {
    /// Implementation name
    fn name(&self) -> &'static str;

    /// A new value equal to zero
    fn zero(&self) -> BigNum;

    /// A new value holding the unsigned big-endian integer in `bytes`
    fn from_bytes(&self, bytes: &[u8]) -> BigNum {
        let mut n = self.zero();
        n.set_bytes(bytes);
        n
    }
}
