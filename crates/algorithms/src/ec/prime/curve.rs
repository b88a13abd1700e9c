//! Domain parameters of a short-Weierstrass curve over GF(p)

use std::sync::Arc;

use pcrypt_api::{BigNum, Error as CoreError, Result as CoreResult};
use pcrypt_params::traditional::ecc::{named_curve, MAX_CURVE_BYTES};
use tracing::debug;

use super::point::Point;
use super::sec::{self, PointFormat, SecPoint};
use crate::error::{validate, Error, Result};

/// Which part of a point or generator a byte string refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointCoord {
    /// Whole point, SEC uncompressed encoding
    Sec,
    /// Whole point, SEC compressed encoding
    SecCompressed,
    /// Affine X coordinate
    X,
    /// Affine Y coordinate
    Y,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    P,
    A,
    B,
    N,
    H,
    G,
}

impl Field {
    fn parse(name: &str) -> Result<Self> {
        match name {
            "p" => Ok(Self::P),
            "a" => Ok(Self::A),
            "b" => Ok(Self::B),
            "n" => Ok(Self::N),
            "h" => Ok(Self::H),
            "g" => Ok(Self::G),
            _ => Err(Error::param("curve field", format!("unknown field '{}'", name))),
        }
    }
}

/// Parameters shared by a curve and every point created from it
#[derive(Debug, Clone)]
pub(crate) struct DomainParams {
    pub(crate) name: Option<&'static str>,
    pub(crate) p: BigNum,
    pub(crate) a: BigNum,
    pub(crate) b: BigNum,
    pub(crate) n: BigNum,
    pub(crate) h: BigNum,
    pub(crate) g_inf: bool,
    pub(crate) gx: BigNum,
    pub(crate) gy: BigNum,
}

impl DomainParams {
    fn scalar(&self, field: Field) -> Option<&BigNum> {
        match field {
            Field::P => Some(&self.p),
            Field::A => Some(&self.a),
            Field::B => Some(&self.b),
            Field::N => Some(&self.n),
            Field::H => Some(&self.h),
            Field::G => None,
        }
    }

    fn scalar_mut(&mut self, field: Field) -> Option<&mut BigNum> {
        match field {
            Field::P => Some(&mut self.p),
            Field::A => Some(&mut self.a),
            Field::B => Some(&mut self.b),
            Field::N => Some(&mut self.n),
            Field::H => Some(&mut self.h),
            Field::G => None,
        }
    }

    /// Byte length of the field prime
    pub(crate) fn modulus_len(&self) -> usize {
        self.p.nbytes()
    }

    fn generator_sec(&self) -> Result<Vec<u8>> {
        if self.g_inf {
            return Ok(sec::INFINITY.to_vec());
        }
        sec::encode_affine(&self.gx.to_bytes(), &self.gy.to_bytes(), self.modulus_len())
    }
}

/// A prime-field elliptic curve `y² = x³ + ax + b mod p`
///
/// Every value is cloned from the bignum prototype the curve was created
/// with. Points keep a shared handle to the parameters that were current
/// when they were created; later changes to the curve do not affect them.
#[derive(Debug, Clone)]
pub struct Curve {
    params: Arc<DomainParams>,
}

impl Curve {
    /// Create an unpopulated curve whose values share `prototype`'s
    /// representation
    pub fn new(prototype: &BigNum) -> Self {
        let zero = prototype.with_small(0);
        Self {
            params: Arc::new(DomainParams {
                name: None,
                p: zero.clone(),
                a: zero.clone(),
                b: zero.clone(),
                n: zero.clone(),
                h: zero.clone(),
                g_inf: true,
                gx: zero.clone(),
                gy: zero,
            }),
        }
    }

    /// Name of the loaded named curve, if any
    pub fn name(&self) -> Option<&'static str> {
        self.params.name
    }

    /// Load the domain parameters of a SEC named curve
    ///
    /// Unknown names fail with `NotImplemented`. The curve is left
    /// untouched on any failure.
    pub fn load_named(&mut self, name: &str) -> CoreResult<()> {
        let Some(named) = named_curve(name) else {
            debug!(curve = name, "unknown named curve");
            return Err(CoreError::NotImplemented {
                feature: "named curve",
            });
        };

        let proto = &self.params.p;
        let p = proto.with_bytes(&decode_hex(named.p, MAX_CURVE_BYTES + 1)?);
        let a = proto.with_bytes(&decode_hex(named.a, MAX_CURVE_BYTES + 1)?);
        let b = proto.with_bytes(&decode_hex(named.b, MAX_CURVE_BYTES + 1)?);
        let n = proto.with_bytes(&decode_hex(named.n, MAX_CURVE_BYTES + 1)?);
        let h = proto.with_bytes(&decode_hex(named.h, MAX_CURVE_BYTES + 1)?);
        let g = decode_hex(named.g, 2 * (MAX_CURVE_BYTES + 1) + 1)?;
        let (g_inf, gx, gy) = match sec::decode(&g)? {
            SecPoint::Infinity => (true, proto.with_small(0), proto.with_small(0)),
            SecPoint::Affine { x, y } => (false, proto.with_bytes(x), proto.with_bytes(y)),
        };

        let params = Arc::make_mut(&mut self.params);
        params.name = Some(named.name);
        params.p = p;
        params.a = a;
        params.b = b;
        params.n = n;
        params.h = h;
        params.g_inf = g_inf;
        params.gx = gx;
        params.gy = gy;

        debug!(curve = named.name, bits = params.p.nbits(), "loaded named curve");
        Ok(())
    }

    /// Set one domain parameter from big-endian bytes
    ///
    /// `field` is one of `p`, `a`, `b`, `n`, `h` or `g`. `coord` selects
    /// how bytes for `g` are read and is ignored for the scalar fields.
    /// Changing any parameter forgets the curve name.
    pub fn set_param(&mut self, field: &str, bytes: &[u8], coord: PointCoord) -> CoreResult<()> {
        let field = Field::parse(field)?;

        // Decode before touching shared state
        let generator = match (field, coord) {
            (Field::G, PointCoord::Sec | PointCoord::SecCompressed) => Some(sec::decode(bytes)?),
            _ => None,
        };

        let params = Arc::make_mut(&mut self.params);
        params.name = None;
        match (field, generator) {
            (Field::G, Some(SecPoint::Infinity)) => params.g_inf = true,
            (Field::G, Some(SecPoint::Affine { x, y })) => {
                params.g_inf = false;
                params.gx.set_bytes(x);
                params.gy.set_bytes(y);
            }
            (Field::G, None) => {
                params.g_inf = false;
                match coord {
                    PointCoord::X => params.gx.set_bytes(bytes),
                    _ => params.gy.set_bytes(bytes),
                }
            }
            (scalar, _) => {
                if let Some(value) = params.scalar_mut(scalar) {
                    value.set_bytes(bytes);
                }
            }
        }
        Ok(())
    }

    /// Big-endian bytes of one domain parameter
    pub fn param(&self, field: &str, coord: PointCoord) -> CoreResult<Vec<u8>> {
        let field = Field::parse(field)?;
        if let Some(value) = self.params.scalar(field) {
            return Ok(value.to_bytes());
        }
        match coord {
            PointCoord::Sec => Ok(self.params.generator_sec()?),
            PointCoord::SecCompressed => Err(CoreError::NotImplemented {
                feature: "compressed SEC points",
            }),
            PointCoord::X => Ok(self.params.gx.to_bytes()),
            PointCoord::Y => Ok(self.params.gy.to_bytes()),
        }
    }

    /// Length of [`Curve::param`] for the same arguments
    pub fn param_size(&self, field: &str, coord: PointCoord) -> CoreResult<usize> {
        let field = Field::parse(field)?;
        if let Some(value) = self.params.scalar(field) {
            return Ok(value.nbytes());
        }
        match coord {
            PointCoord::Sec if self.params.g_inf => Ok(sec::INFINITY.len()),
            PointCoord::Sec => Ok(2 * self.params.modulus_len() + 1),
            PointCoord::SecCompressed => Err(CoreError::NotImplemented {
                feature: "compressed SEC points",
            }),
            PointCoord::X => Ok(self.params.gx.nbytes()),
            PointCoord::Y => Ok(self.params.gy.nbytes()),
        }
    }

    /// Set one domain parameter from a bignum
    ///
    /// For `g` only the `X` and `Y` coordinates can be set this way.
    pub fn set_param_bignum(&mut self, field: &str, value: &BigNum, coord: PointCoord) -> CoreResult<()> {
        let field = Field::parse(field)?;
        validate::parameter(
            value.algorithm() == self.params.p.algorithm(),
            "curve parameter",
            "bignum uses a different representation",
        )?;
        if field == Field::G {
            validate::parameter(
                matches!(coord, PointCoord::X | PointCoord::Y),
                "curve generator",
                "only X and Y can be set from a bignum",
            )?;
        }

        let params = Arc::make_mut(&mut self.params);
        params.name = None;
        match params.scalar_mut(field) {
            Some(slot) => *slot = value.clone(),
            None => {
                params.g_inf = false;
                if coord == PointCoord::X {
                    params.gx = value.clone();
                } else {
                    params.gy = value.clone();
                }
            }
        }
        Ok(())
    }

    /// Copy of one domain parameter
    pub fn param_bignum(&self, field: &str, coord: PointCoord) -> CoreResult<BigNum> {
        let field = Field::parse(field)?;
        if let Some(value) = self.params.scalar(field) {
            return Ok(value.clone());
        }
        match coord {
            PointCoord::X => Ok(self.params.gx.clone()),
            PointCoord::Y => Ok(self.params.gy.clone()),
            _ => Err(Error::param("curve generator", "only X and Y are available as bignums").into()),
        }
    }

    /// Replace the base point
    pub fn set_generator(&mut self, point: &Point) -> CoreResult<()> {
        validate::parameter(
            point.x.algorithm() == self.params.p.algorithm(),
            "curve generator",
            "point uses a different bignum representation",
        )?;
        let params = Arc::make_mut(&mut self.params);
        params.name = None;
        params.g_inf = point.infinity;
        params.gx = point.x.clone();
        params.gy = point.y.clone();
        Ok(())
    }

    /// The base point as a point on this curve
    pub fn generator(&self) -> Point {
        Point {
            infinity: self.params.g_inf,
            x: self.params.gx.clone(),
            y: self.params.gy.clone(),
            curve: Arc::clone(&self.params),
        }
    }

    /// A new point at infinity on this curve
    pub fn new_point(&self) -> Point {
        Point {
            infinity: true,
            x: self.params.p.clone(),
            y: self.params.p.clone(),
            curve: Arc::clone(&self.params),
        }
    }

    /// Decode a SEC-encoded point on this curve
    pub fn decode_point(&self, bytes: &[u8]) -> CoreResult<Point> {
        let mut point = self.new_point();
        point.set_sec(bytes)?;
        Ok(point)
    }

    /// Byte length of the field prime
    pub fn modulus_size(&self) -> usize {
        self.params.modulus_len()
    }

    /// SEC encoding of the base point in the requested format
    pub fn generator_sec(&self, format: PointFormat) -> CoreResult<Vec<u8>> {
        match format {
            PointFormat::Uncompressed => Ok(self.params.generator_sec()?),
            PointFormat::Compressed => Err(CoreError::NotImplemented {
                feature: "compressed SEC points",
            }),
        }
    }
}

/// Decode a hex string from the curve table into at most `max` bytes
pub(crate) fn decode_hex(s: &str, max: usize) -> Result<Vec<u8>> {
    validate::parameter(s.len() % 2 == 0, "curve hex", "odd-length hex string")?;
    validate::max_length("curve hex", s.len() / 2, max)?;
    hex::decode(s).map_err(|e| Error::param("curve hex", e.to_string()))
}
