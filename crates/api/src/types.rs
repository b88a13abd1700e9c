//! Value types shared across algorithm families

use core::cmp::Ordering;
use core::fmt;
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::traits::{Bignum, HashAlgorithm};

/// Algorithm family of a registry entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlgorithmKind {
    /// Hash function
    Hash,
    /// Block cipher
    Block,
    /// Block cipher mode of operation
    Mode,
    /// Message authentication code
    Mac,
    /// Stream cipher
    Stream,
    /// Pseudo-random generator
    Prng,
    /// Arbitrary-precision integers
    Bignum,
    /// Elliptic-curve arithmetic
    Ecc,
}

impl fmt::Display for AlgorithmKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Hash => "hash",
            Self::Block => "block",
            Self::Mode => "mode",
            Self::Mac => "mac",
            Self::Stream => "stream",
            Self::Prng => "prng",
            Self::Bignum => "bignum",
            Self::Ecc => "ecc",
        };
        f.write_str(s)
    }
}

/// Owned arbitrary-precision integer
///
/// Wraps a boxed [`Bignum`] so values can be cloned and dropped like any
/// other Rust value. Arithmetic returns new values; the representation of
/// the result is that of `self`.
pub struct BigNum(Box<dyn Bignum>);

impl BigNum {
    /// Wrap a boxed implementation value
    pub fn from_boxed(inner: Box<dyn Bignum>) -> Self {
        Self(inner)
    }

    /// Borrow the underlying trait object
    pub fn as_dyn(&self) -> &dyn Bignum {
        self.0.as_ref()
    }

    /// Name of the implementation behind this value
    pub fn algorithm(&self) -> &'static str {
        self.0.algorithm()
    }

    /// A new value of the same representation holding the big-endian
    /// unsigned integer in `bytes`
    pub fn with_bytes(&self, bytes: &[u8]) -> Self {
        let mut n = self.clone();
        n.set_bytes(bytes);
        n
    }

    /// A new value of the same representation holding `value`
    pub fn with_small(&self, value: u64) -> Self {
        let mut n = self.clone();
        n.set_small(value);
        n
    }

    /// Replace the value with the big-endian unsigned integer in `bytes`
    pub fn set_bytes(&mut self, bytes: &[u8]) {
        self.0.set_bytes(bytes)
    }

    /// Replace the value with `value`
    pub fn set_small(&mut self, value: u64) {
        self.0.set_small(value)
    }

    /// Minimal big-endian magnitude; empty for zero
    pub fn to_bytes(&self) -> Vec<u8> {
        self.0.to_bytes()
    }

    /// Big-endian magnitude left-padded with zeros to exactly `len` bytes
    pub fn to_padded_bytes(&self, len: usize) -> Result<Vec<u8>> {
        let bytes = self.0.to_bytes();
        if bytes.len() > len {
            return Err(Error::InvalidLength {
                context: "bignum encoding",
                expected: len,
                actual: bytes.len(),
            });
        }
        let mut out = vec![0u8; len - bytes.len()];
        out.extend_from_slice(&bytes);
        Ok(out)
    }

    /// Byte length of the magnitude
    pub fn nbytes(&self) -> usize {
        self.0.nbytes()
    }

    /// Bit length of the magnitude
    pub fn nbits(&self) -> usize {
        self.0.nbits()
    }

    /// Bit `index` of the magnitude
    pub fn bit(&self, index: usize) -> bool {
        self.0.bit(index)
    }

    /// True if zero
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// True if strictly negative
    pub fn is_negative(&self) -> bool {
        self.0.is_negative()
    }

    /// Signed comparison
    pub fn compare(&self, other: &BigNum) -> Result<Ordering> {
        self.0.compare(other.as_dyn())
    }

    /// Comparison of absolute values
    pub fn compare_magnitude(&self, other: &BigNum) -> Result<Ordering> {
        self.0.compare_magnitude(other.as_dyn())
    }

    /// `self + other`
    pub fn add(&self, other: &BigNum) -> Result<BigNum> {
        self.0.add(other.as_dyn()).map(Self)
    }

    /// `self - other`
    pub fn sub(&self, other: &BigNum) -> Result<BigNum> {
        self.0.sub(other.as_dyn()).map(Self)
    }

    /// `self * other`
    pub fn mul(&self, other: &BigNum) -> Result<BigNum> {
        self.0.mul(other.as_dyn()).map(Self)
    }

    /// `self mod modulus` in `[0, |modulus|)`
    pub fn rem(&self, modulus: &BigNum) -> Result<BigNum> {
        self.0.rem(modulus.as_dyn()).map(Self)
    }

    /// `self * other mod modulus`
    pub fn mulmod(&self, other: &BigNum, modulus: &BigNum) -> Result<BigNum> {
        self.0.mulmod(other.as_dyn(), modulus.as_dyn()).map(Self)
    }

    /// `self² mod modulus`
    pub fn squaremod(&self, modulus: &BigNum) -> Result<BigNum> {
        self.0.squaremod(modulus.as_dyn()).map(Self)
    }

    /// Multiplicative inverse modulo `modulus`
    pub fn invmod(&self, modulus: &BigNum) -> Result<BigNum> {
        self.0.invmod(modulus.as_dyn()).map(Self)
    }

    /// Absolute value
    pub fn abs(&self) -> BigNum {
        Self(self.0.abs())
    }
}

impl Clone for BigNum {
    fn clone(&self) -> Self {
        Self(self.0.box_clone())
    }
}

impl fmt::Debug for BigNum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

/// One value in an [`InitParams`] list
#[derive(Debug, Clone)]
pub enum ParamValue {
    /// A bignum prototype; new values are cloned from it
    Bignum(BigNum),
    /// A hash function to build on
    Hash(Arc<dyn HashAlgorithm>),
}

/// Named parameters handed to algorithm constructors
///
/// Well-known names are `"bignum"` (a [`ParamValue::Bignum`] prototype for
/// elliptic-curve contexts) and `"digest"` (a [`ParamValue::Hash`] for
/// hash-based MACs). When a name appears more than once the last value wins.
#[derive(Debug, Clone, Default)]
pub struct InitParams {
    values: Vec<(String, ParamValue)>,
}

impl InitParams {
    /// Empty parameter list
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`InitParams::push`]
    pub fn with(mut self, name: impl Into<String>, value: ParamValue) -> Self {
        self.push(name, value);
        self
    }

    /// Append a parameter
    pub fn push(&mut self, name: impl Into<String>, value: ParamValue) {
        self.values.push((name.into(), value));
    }

    /// Look up a parameter by name
    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.values
            .iter()
            .rev()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    /// The bignum stored under `name`, failing with `MoreInfo` if absent
    ///
    /// A value of the wrong type is an `InvalidParameter` error.
    pub fn require_bignum(&self, context: &'static str, name: &'static str) -> Result<&BigNum> {
        match self.get(name) {
            Some(ParamValue::Bignum(n)) => Ok(n),
            Some(_) => Err(Error::param(context, format!("parameter '{}' is not a bignum", name))),
            None => Err(Error::MoreInfo {
                context,
                parameter: name,
            }),
        }
    }

    /// The hash algorithm stored under `name`, failing with `MoreInfo` if absent
    pub fn require_hash(
        &self,
        context: &'static str,
        name: &'static str,
    ) -> Result<&Arc<dyn HashAlgorithm>> {
        match self.get(name) {
            Some(ParamValue::Hash(h)) => Ok(h),
            Some(_) => Err(Error::param(
                context,
                format!("parameter '{}' is not a hash algorithm", name),
            )),
            None => Err(Error::MoreInfo {
                context,
                parameter: name,
            }),
        }
    }

    /// Number of parameters
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True if no parameters were supplied
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::traits::HashContext;

    #[derive(Debug)]
    struct NullHash;

    struct NullContext;

    impl HashContext for NullContext {
        fn update(&mut self, _data: &[u8]) {}
        fn finalize(&mut self) -> Vec<u8> {
            Vec::new()
        }
        fn reset(&mut self) {}
        fn box_clone(&self) -> Box<dyn HashContext> {
            Box::new(NullContext)
        }
    }

    impl HashAlgorithm for NullHash {
        fn name(&self) -> &'static str {
            "null"
        }
        fn digest_size(&self) -> usize {
            0
        }
        fn block_size(&self) -> usize {
            1
        }
        fn new_context(&self) -> Box<dyn HashContext> {
            Box::new(NullContext)
        }
    }

    #[test]
    fn test_missing_parameter_is_more_info() {
        let params = InitParams::new();
        assert!(params.is_empty());

        let err = params.require_bignum("curve init", "bignum").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MoreInfo);

        let err = params.require_hash("hmac init", "digest").unwrap_err();
        assert_eq!(
            err,
            Error::MoreInfo {
                context: "hmac init",
                parameter: "digest"
            }
        );
    }

    #[test]
    fn test_wrong_parameter_type_is_invalid() {
        let params = InitParams::new().with("bignum", ParamValue::Hash(Arc::new(NullHash)));
        let err = params.require_bignum("curve init", "bignum").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Invalid);
        assert!(params.require_hash("x", "bignum").is_ok());
    }

    #[test]
    fn test_last_value_wins() {
        #[derive(Debug)]
        struct OtherHash;
        impl HashAlgorithm for OtherHash {
            fn name(&self) -> &'static str {
                "other"
            }
            fn digest_size(&self) -> usize {
                0
            }
            fn block_size(&self) -> usize {
                1
            }
            fn new_context(&self) -> Box<dyn HashContext> {
                Box::new(NullContext)
            }
        }

        let params = InitParams::new()
            .with("digest", ParamValue::Hash(Arc::new(NullHash)))
            .with("digest", ParamValue::Hash(Arc::new(OtherHash)));
        assert_eq!(params.len(), 2);
        let hash = params.require_hash("hmac init", "digest").unwrap();
        assert_eq!(hash.name(), "other");
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(AlgorithmKind::Ecc.to_string(), "ecc");
        assert_eq!(AlgorithmKind::Bignum.to_string(), "bignum");
    }
}
