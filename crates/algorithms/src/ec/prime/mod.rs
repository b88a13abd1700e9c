//! Short-Weierstrass curves over prime fields
//!
//! Affine arithmetic on top of the [`Bignum`](pcrypt_api::Bignum)
//! capability: addition, doubling, negation, Shamir joint scalar
//! multiplication and SEC 1 encoding, with the SEC named curves from
//! `pcrypt-params`.

use core::cmp::Ordering;

use pcrypt_api::{BignumAlgorithm, InitParams, ParamValue, Result as CoreResult};
use tracing::{debug, warn};

use super::EccAlgorithm;
use crate::error::Error;

mod curve;
mod point;
mod sec;
pub mod vectors;

pub use curve::{Curve, PointCoord};
pub use point::Point;
pub use sec::PointFormat;

use vectors::SECP521R1_MULTIPLES;

/// Prime-field curve engine
#[derive(Debug, Clone, Copy, Default)]
pub struct PrimeCurveAlgorithm;

impl EccAlgorithm for PrimeCurveAlgorithm {
    fn name(&self) -> &'static str {
        "EllipticCurvePrime"
    }

    fn new_curve(&self, params: &InitParams) -> CoreResult<Curve> {
        let prototype = params.require_bignum("prime curve init", "bignum")?;
        Ok(Curve::new(prototype))
    }

    fn self_test(&self, bignum: &dyn BignumAlgorithm) -> CoreResult<()> {
        let params = InitParams::new().with("bignum", ParamValue::Bignum(bignum.zero()));
        let mut curve = self.new_curve(&params)?;
        curve.load_named("secp521r1")?;

        let g = curve.generator();
        let mut k = bignum.zero();
        let mut expected = curve.new_point();
        for v in SECP521R1_MULTIPLES {
            expected.set_coordinate_bytes(PointCoord::X, &hex_bytes(v.x)?)?;
            expected.set_coordinate_bytes(PointCoord::Y, &hex_bytes(v.y)?)?;
            k.set_small(v.k);

            if g.mul(&k)?.compare(&expected)? != Ordering::Equal {
                warn!(k = v.k, "secp521r1 scalar multiple mismatch");
                return Err(Error::Processing {
                    operation: "prime curve self-test",
                    details: format!("k = {} produced the wrong point", v.k).into(),
                }
                .into());
            }
        }
        debug!(vectors = SECP521R1_MULTIPLES.len(), "prime curve self-test passed");
        Ok(())
    }
}

fn hex_bytes(s: &str) -> crate::error::Result<Vec<u8>> {
    hex::decode(s).map_err(|e| Error::param("test vector", e.to_string()))
}
