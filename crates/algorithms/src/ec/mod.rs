//! Elliptic-curve arithmetic
//!
//! Curves are created through an [`EccAlgorithm`] capability, which needs a
//! bignum prototype in its [`InitParams`] so that every value on the curve
//! shares one representation.

use core::fmt;

use pcrypt_api::{BignumAlgorithm, InitParams, Result as CoreResult};

pub mod prime;

pub use prime::{Curve, Point, PointCoord, PointFormat, PrimeCurveAlgorithm};

/// An elliptic-curve engine exposed through the registry
pub trait EccAlgorithm: fmt::Debug + Send + Sync {
    /// Engine name, e.g. `"EllipticCurvePrime"`
    fn name(&self) -> &'static str;

    /// Create an unpopulated curve
    ///
    /// Fails with `MoreInfo` unless `params` carries a `"bignum"` prototype.
    fn new_curve(&self, params: &InitParams) -> CoreResult<Curve>;

    /// Run the engine's known-answer test using bignums from `bignum`
    fn self_test(&self, bignum: &dyn BignumAlgorithm) -> CoreResult<()>;
}
