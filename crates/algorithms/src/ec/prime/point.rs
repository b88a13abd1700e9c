//! Affine points and the group law

use core::cmp::Ordering;
use core::fmt;
use std::sync::Arc;

use pcrypt_api::{BigNum, Error as CoreError, Result as CoreResult};

use super::curve::{DomainParams, PointCoord};
use super::sec::{self, PointFormat, SecPoint};
use crate::error::{validate, Error};

/// A point on a prime curve, or the point at infinity
///
/// Every arithmetic operation returns a new point; coordinates are always
/// reduced into `[0, p)`.
#[derive(Clone)]
pub struct Point {
    pub(crate) infinity: bool,
    pub(crate) x: BigNum,
    pub(crate) y: BigNum,
    pub(crate) curve: Arc<DomainParams>,
}

impl fmt::Debug for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.infinity {
            return f.write_str("Point(infinity)");
        }
        f.debug_struct("Point")
            .field("x", &hex::encode(self.x.to_bytes()))
            .field("y", &hex::encode(self.y.to_bytes()))
            .finish()
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        matches!(self.compare(other), Ok(Ordering::Equal))
    }
}

impl Point {
    /// Is this the point at infinity?
    pub fn is_infinity(&self) -> bool {
        self.infinity
    }

    /// Mark the point as infinite or finite without touching coordinates
    pub fn set_infinity(&mut self, infinity: bool) {
        self.infinity = infinity;
    }

    /// Affine coordinates, or `None` at infinity
    pub fn coordinates(&self) -> Option<(&BigNum, &BigNum)> {
        if self.infinity {
            None
        } else {
            Some((&self.x, &self.y))
        }
    }

    /// Name of the curve this point was created on, if it was a named curve
    pub fn curve_name(&self) -> Option<&'static str> {
        self.curve.name
    }

    fn with_coordinates(&self, x: BigNum, y: BigNum) -> Self {
        Self {
            infinity: false,
            x,
            y,
            curve: Arc::clone(&self.curve),
        }
    }

    fn at_infinity(&self) -> Self {
        Self {
            infinity: true,
            x: self.x.clone(),
            y: self.y.clone(),
            curve: Arc::clone(&self.curve),
        }
    }

    fn check_same_curve(&self, other: &Self) -> CoreResult<()> {
        if Arc::ptr_eq(&self.curve, &other.curve) {
            return Ok(());
        }
        let same = self.curve.p.compare(&other.curve.p)? == Ordering::Equal
            && self.curve.a.compare(&other.curve.a)? == Ordering::Equal;
        validate::parameter(same, "curve point", "points belong to different curves")?;
        Ok(())
    }

    fn finite_coordinate(&self, coord: PointCoord) -> CoreResult<&BigNum> {
        validate::parameter(!self.infinity, "curve point", "point at infinity has no coordinates")?;
        match coord {
            PointCoord::X => Ok(&self.x),
            PointCoord::Y => Ok(&self.y),
            _ => Err(Error::param("curve point", "not a single coordinate").into()),
        }
    }

    /// Replace the point with a SEC encoding
    ///
    /// `0x00` sets the point at infinity; `0x04 ∥ X ∥ Y` sets both
    /// coordinates. Compressed and unknown encodings are `NotImplemented`.
    pub fn set_sec(&mut self, bytes: &[u8]) -> CoreResult<()> {
        match sec::decode(bytes)? {
            SecPoint::Infinity => self.infinity = true,
            SecPoint::Affine { x, y } => {
                self.infinity = false;
                self.x.set_bytes(x);
                self.y.set_bytes(y);
            }
        }
        Ok(())
    }

    /// SEC encoding, coordinates padded to the modulus length
    pub fn to_sec(&self, format: PointFormat) -> CoreResult<Vec<u8>> {
        validate::supported(format == PointFormat::Uncompressed, "compressed SEC points")?;
        if self.infinity {
            return Ok(sec::INFINITY.to_vec());
        }
        Ok(sec::encode_affine(
            &self.x.to_bytes(),
            &self.y.to_bytes(),
            self.curve.modulus_len(),
        )?)
    }

    /// Set a coordinate or the whole point from bytes
    ///
    /// Setting `X` or `Y` makes the point finite.
    pub fn set_coordinate_bytes(&mut self, coord: PointCoord, bytes: &[u8]) -> CoreResult<()> {
        match coord {
            PointCoord::X => {
                self.infinity = false;
                self.x.set_bytes(bytes);
            }
            PointCoord::Y => {
                self.infinity = false;
                self.y.set_bytes(bytes);
            }
            PointCoord::Sec | PointCoord::SecCompressed => self.set_sec(bytes)?,
        }
        Ok(())
    }

    /// Bytes of a coordinate or of the whole point
    pub fn coordinate_bytes(&self, coord: PointCoord) -> CoreResult<Vec<u8>> {
        match coord {
            PointCoord::Sec => self.to_sec(PointFormat::Uncompressed),
            PointCoord::SecCompressed => self.to_sec(PointFormat::Compressed),
            _ => Ok(self.finite_coordinate(coord)?.to_bytes()),
        }
    }

    /// Length of [`Point::coordinate_bytes`] for the same `coord`
    pub fn coordinate_size(&self, coord: PointCoord) -> CoreResult<usize> {
        match coord {
            PointCoord::Sec if self.infinity => Ok(sec::INFINITY.len()),
            PointCoord::Sec => Ok(2 * self.curve.modulus_len() + 1),
            PointCoord::SecCompressed => Err(CoreError::NotImplemented {
                feature: "compressed SEC points",
            }),
            _ => Ok(self.finite_coordinate(coord)?.nbytes()),
        }
    }

    /// Set `X` or `Y` from a bignum of the curve's representation
    pub fn set_coordinate(&mut self, coord: PointCoord, value: &BigNum) -> CoreResult<()> {
        validate::parameter(
            value.algorithm() == self.curve.p.algorithm(),
            "curve point",
            "bignum uses a different representation",
        )?;
        match coord {
            PointCoord::X => self.x = value.clone(),
            PointCoord::Y => self.y = value.clone(),
            _ => return Err(Error::param("curve point", "not a single coordinate").into()),
        }
        self.infinity = false;
        Ok(())
    }

    /// Copy of `X` or `Y`
    pub fn coordinate(&self, coord: PointCoord) -> CoreResult<BigNum> {
        self.finite_coordinate(coord).cloned()
    }

    /// Does the point satisfy `y² = x³ + ax + b mod p`?
    pub fn is_on_curve(&self) -> CoreResult<bool> {
        if self.infinity {
            return Ok(true);
        }
        let p = &self.curve.p;
        let lhs = self.y.squaremod(p)?;
        let x2 = self.x.squaremod(p)?;
        let x3 = x2.mulmod(&self.x, p)?;
        let ax = self.curve.a.mulmod(&self.x, p)?;
        let rhs = x3.add(&ax)?.add(&self.curve.b)?.rem(p)?;
        Ok(lhs.compare(&rhs)? == Ordering::Equal)
    }

    /// Total order: infinity first, then `X`, then `Y` by magnitude
    pub fn compare(&self, other: &Self) -> CoreResult<Ordering> {
        match (self.infinity, other.infinity) {
            (true, true) => Ok(Ordering::Equal),
            (true, false) => Ok(Ordering::Less),
            (false, true) => Ok(Ordering::Greater),
            (false, false) => match self.x.compare_magnitude(&other.x)? {
                Ordering::Equal => self.y.compare_magnitude(&other.y),
                ord => Ok(ord),
            },
        }
    }

    /// Additive inverse `(x, p − y)`
    pub fn invert(&self) -> CoreResult<Self> {
        if self.infinity {
            return Ok(self.at_infinity());
        }
        let p = &self.curve.p;
        let y = p.sub(&self.y)?.rem(p)?;
        Ok(self.with_coordinates(self.x.clone(), y))
    }

    /// `2·self`
    pub fn double(&self) -> CoreResult<Self> {
        if self.infinity || self.y.is_zero() {
            return Ok(self.at_infinity());
        }
        let p = &self.curve.p;
        let two = p.with_small(2);
        let three = p.with_small(3);

        // lambda = (3x² + a) / 2y
        let lambda = self.x.squaremod(p)?.mulmod(&three, p)?.add(&self.curve.a)?;
        let t = self.y.mul(&two)?.invmod(p)?;
        let lambda = lambda.mul(&t)?.rem(p)?;

        // x3 = lambda² − 2x
        let x = lambda.squaremod(p)?.sub(&self.x)?.sub(&self.x)?.rem(p)?;

        // y3 = lambda(x − x3) − y
        let y = self.x.sub(&x)?.mulmod(&lambda, p)?.sub(&self.y)?.rem(p)?;

        Ok(self.with_coordinates(x, y))
    }

    /// `self + other`
    pub fn add(&self, other: &Self) -> CoreResult<Self> {
        self.check_same_curve(other)?;
        if self.infinity && other.infinity {
            return Ok(self.at_infinity());
        }
        if self.infinity {
            return Ok(self.with_coordinates(other.x.clone(), other.y.clone()));
        }
        if other.infinity {
            return Ok(self.clone());
        }
        if self.compare(other)? == Ordering::Equal {
            return self.double();
        }
        if self.x.compare(&other.x)? == Ordering::Equal {
            return Ok(self.at_infinity());
        }

        let p = &self.curve.p;

        // lambda = (y2 − y1) / (x2 − x1)
        let t = other.x.sub(&self.x)?.invmod(p)?.abs();
        let lambda = other.y.sub(&self.y)?.mul(&t)?.rem(p)?;

        // x3 = lambda² − x1 − x2
        let x = lambda.squaremod(p)?.sub(&self.x)?.sub(&other.x)?.rem(p)?;

        // y3 = lambda(x1 − x3) − y1
        let y = self.x.sub(&x)?.mulmod(&lambda, p)?.sub(&self.y)?.rem(p)?;

        Ok(self.with_coordinates(x, y))
    }

    /// `a·self + b·q` by Shamir's trick, or `a·self` without a second term
    pub fn mul2(&self, a: &BigNum, other: Option<(&Point, &BigNum)>) -> CoreResult<Self> {
        validate::parameter(!a.is_negative(), "scalar", "negative scalar")?;
        if let Some((q, b)) = other {
            self.check_same_curve(q)?;
            validate::parameter(!b.is_negative(), "scalar", "negative scalar")?;
        }

        let nbits = other.map_or(0, |(_, b)| b.nbits()).max(a.nbits());
        let z = match other {
            Some((q, _)) => self.add(q)?,
            None => self.clone(),
        };

        let mut r = self.at_infinity();
        for i in (0..nbits).rev() {
            r = r.double()?;
            let b_bit = other.map(|(q, b)| (q, b.bit(i)));
            match (a.bit(i), b_bit) {
                (true, Some((_, true))) => r = r.add(&z)?,
                (true, _) => r = r.add(self)?,
                (false, Some((q, true))) => r = r.add(q)?,
                _ => {}
            }
        }
        Ok(r)
    }

    /// `k·self`
    pub fn mul(&self, k: &BigNum) -> CoreResult<Self> {
        self.mul2(k, None)
    }
}
