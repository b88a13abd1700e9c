//! # pcrypt
//!
//! A cryptographic algorithm suite whose implementations are discovered and
//! composed by name at run time.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! pcrypt = "0.1"
//! ```
//!
//! ## Features
//!
//! - `algorithms` (default): bignum, elliptic-curve, hash and MAC primitives
//! - `registry` (default): the plugin registry and the built-in units
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`pcrypt-api`]: error taxonomy, capability traits, `BigNum`, `InitParams`
//! - [`pcrypt-params`]: SEC named-curve table and hash sizes
//! - [`pcrypt-algorithms`]: `NumBignum`, the prime-curve engine, SHA-2, HMAC
//! - [`pcrypt-registry`]: `Registry`, catalogs and plugin units
//!
//! ## Example
//!
//! ```
//! # #[cfg(feature = "registry")]
//! # fn main() -> pcrypt::api::Result<()> {
//! use pcrypt::prelude::*;
//!
//! let mut registry = Registry::builtin();
//! registry.load("bignum", None)?;
//! registry.load("prime", None)?;
//!
//! let bignum = registry.lookup_by_kind(AlgorithmKind::Bignum, 0, None)?;
//! let ecc = registry.lookup_by_kind(AlgorithmKind::Ecc, 0, None)?;
//! let prototype = registry.capability_table(bignum)?.0.as_bignum()?.zero();
//!
//! let params = InitParams::new().with("bignum", ParamValue::Bignum(prototype));
//! let mut curve = registry.capability_table(ecc)?.0.as_ecc()?.new_curve(&params)?;
//! curve.load_named("secp256r1")?;
//!
//! let g = curve.generator();
//! assert_eq!(g.add(&g)?, g.double()?);
//! # Ok(())
//! # }
//! # #[cfg(not(feature = "registry"))]
//! # fn main() {}
//! ```

#![forbid(unsafe_code)]

// Core re-exports (always available)
pub use pcrypt_api as api;
pub use pcrypt_internal as internal;
pub use pcrypt_params as params;

// Feature-gated re-exports
#[cfg(feature = "algorithms")]
pub use pcrypt_algorithms as algorithms;

#[cfg(feature = "registry")]
pub use pcrypt_registry as registry;

/// Common imports for pcrypt users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, ErrorKind, Result};

    // Re-export core traits and value types
    pub use crate::api::{
        AlgorithmKind,
        BigNum,
        Bignum,
        BignumAlgorithm,
        HashAlgorithm,
        HashContext,
        InitParams,
        MacAlgorithm,
        MacContext,
        ParamValue,
    };

    #[cfg(feature = "algorithms")]
    pub use crate::algorithms::ec::EccAlgorithm;

    #[cfg(feature = "algorithms")]
    pub use crate::algorithms::{Curve, Point, PointCoord, PointFormat};

    #[cfg(feature = "registry")]
    pub use crate::registry::{Capability, EntryId, PluginUnit, Registry};
}
