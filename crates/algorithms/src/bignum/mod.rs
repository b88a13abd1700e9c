//! Arbitrary-precision integers backed by `num-bigint`
//!
//! [`NumBignum`] implements the [`Bignum`] capability and
//! [`NumBignumAlgorithm`] is its factory. Values of other representations
//! are rejected by every binary operation.

use core::any::Any;
use core::cmp::Ordering;

use num_bigint::{BigInt, Sign};
use num_traits::{Signed, Zero};
use pcrypt_api::{BigNum, Bignum, BignumAlgorithm, Result as CoreResult};

use crate::error::Error;

const ALGORITHM: &str = "Bignum";

/// Signed integer stored as a `num_bigint::BigInt`
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NumBignum {
    value: BigInt,
}

impl NumBignum {
    /// Wrap an existing integer
    pub fn new(value: BigInt) -> Self {
        Self { value }
    }

    /// Borrow the underlying integer
    pub fn value(&self) -> &BigInt {
        &self.value
    }

    fn boxed(value: BigInt) -> Box<dyn Bignum> {
        Box::new(Self { value })
    }

    fn cast(other: &dyn Bignum) -> CoreResult<&Self> {
        other
            .as_any()
            .downcast_ref::<Self>()
            .ok_or_else(|| Error::param("bignum operand", "operand uses a different representation").into())
    }

    fn modulus(other: &dyn Bignum) -> CoreResult<BigInt> {
        let m = Self::cast(other)?;
        if m.value.is_zero() {
            return Err(Error::param("bignum modulus", "modulus is zero").into());
        }
        Ok(m.value.abs())
    }

    // Euclidean remainder into [0, m) for m > 0
    fn reduce(value: BigInt, m: &BigInt) -> BigInt {
        let r = value % m;
        if r.is_negative() {
            r + m
        } else {
            r
        }
    }
}

impl Bignum for NumBignum {
    fn algorithm(&self) -> &'static str {
        ALGORITHM
    }

    fn box_clone(&self) -> Box<dyn Bignum> {
        Box::new(self.clone())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn set_bytes(&mut self, bytes: &[u8]) {
        self.value = BigInt::from_bytes_be(Sign::Plus, bytes);
    }

    fn set_small(&mut self, value: u64) {
        self.value = BigInt::from(value);
    }

    fn to_bytes(&self) -> Vec<u8> {
        if self.value.is_zero() {
            return Vec::new();
        }
        self.value.magnitude().to_bytes_be()
    }

    fn nbytes(&self) -> usize {
        (self.nbits() + 7) / 8
    }

    fn nbits(&self) -> usize {
        self.value.bits() as usize
    }

    fn bit(&self, index: usize) -> bool {
        self.value.magnitude().bit(index as u64)
    }

    fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    fn is_negative(&self) -> bool {
        self.value.is_negative()
    }

    fn compare(&self, other: &dyn Bignum) -> CoreResult<Ordering> {
        Ok(self.value.cmp(&Self::cast(other)?.value))
    }

    fn compare_magnitude(&self, other: &dyn Bignum) -> CoreResult<Ordering> {
        Ok(self.value.magnitude().cmp(Self::cast(other)?.value.magnitude()))
    }

    fn add(&self, other: &dyn Bignum) -> CoreResult<Box<dyn Bignum>> {
        Ok(Self::boxed(&self.value + &Self::cast(other)?.value))
    }

    fn sub(&self, other: &dyn Bignum) -> CoreResult<Box<dyn Bignum>> {
        Ok(Self::boxed(&self.value - &Self::cast(other)?.value))
    }

    fn mul(&self, other: &dyn Bignum) -> CoreResult<Box<dyn Bignum>> {
        Ok(Self::boxed(&self.value * &Self::cast(other)?.value))
    }

    fn rem(&self, modulus: &dyn Bignum) -> CoreResult<Box<dyn Bignum>> {
        let m = Self::modulus(modulus)?;
        Ok(Self::boxed(Self::reduce(self.value.clone(), &m)))
    }

    fn mulmod(&self, other: &dyn Bignum, modulus: &dyn Bignum) -> CoreResult<Box<dyn Bignum>> {
        let m = Self::modulus(modulus)?;
        let product = &self.value * &Self::cast(other)?.value;
        Ok(Self::boxed(Self::reduce(product, &m)))
    }

    fn squaremod(&self, modulus: &dyn Bignum) -> CoreResult<Box<dyn Bignum>> {
        let m = Self::modulus(modulus)?;
        Ok(Self::boxed(Self::reduce(&self.value * &self.value, &m)))
    }

    fn invmod(&self, modulus: &dyn Bignum) -> CoreResult<Box<dyn Bignum>> {
        let m = Self::modulus(modulus)?;
        match self.value.modinv(&m) {
            Some(inv) => Ok(Self::boxed(inv)),
            None => Err(Error::param("bignum inverse", "value is not invertible").into()),
        }
    }

    fn abs(&self) -> Box<dyn Bignum> {
        Self::boxed(self.value.abs())
    }
}

/// Factory for [`NumBignum`] values
#[derive(Debug, Clone, Copy, Default)]
pub struct NumBignumAlgorithm;

impl BignumAlgorithm for NumBignumAlgorithm {
    fn name(&self) -> &'static str {
        ALGORITHM
    }

    fn zero(&self) -> BigNum {
        BigNum::from_boxed(Box::new(NumBignum::default()))
    }
}
