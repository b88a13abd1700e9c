//! Typed capability tables

use core::mem;
use std::sync::Arc;

use pcrypt_algorithms::ec::EccAlgorithm;
use pcrypt_api::{
    AlgorithmKind, BignumAlgorithm, Error, HashAlgorithm, MacAlgorithm, Result,
};

/// The operations one registry entry provides
///
/// Accessors for a family other than the entry's own fail with
/// `InvalidParameter`.
#[derive(Debug, Clone)]
pub enum Capability {
    /// Arbitrary-precision integers
    Bignum(Arc<dyn BignumAlgorithm>),
    /// Hash function
    Hash(Arc<dyn HashAlgorithm>),
    /// Message authentication code
    Mac(Arc<dyn MacAlgorithm>),
    /// Elliptic-curve engine
    Ecc(Arc<dyn EccAlgorithm>),
}

impl Capability {
    /// Algorithm family of this table
    pub fn kind(&self) -> AlgorithmKind {
        match self {
            Self::Bignum(_) => AlgorithmKind::Bignum,
            Self::Hash(_) => AlgorithmKind::Hash,
            Self::Mac(_) => AlgorithmKind::Mac,
            Self::Ecc(_) => AlgorithmKind::Ecc,
        }
    }

    /// Name the implementation reports for itself
    pub fn name(&self) -> &'static str {
        match self {
            Self::Bignum(a) => a.name(),
            Self::Hash(a) => a.name(),
            Self::Mac(a) => a.name(),
            Self::Ecc(a) => a.name(),
        }
    }

    /// In-memory size of the concrete implementation behind the table
    pub fn table_size(&self) -> usize {
        match self {
            Self::Bignum(a) => mem::size_of_val(a.as_ref()),
            Self::Hash(a) => mem::size_of_val(a.as_ref()),
            Self::Mac(a) => mem::size_of_val(a.as_ref()),
            Self::Ecc(a) => mem::size_of_val(a.as_ref()),
        }
    }

    fn mismatch(&self, wanted: AlgorithmKind) -> Error {
        Error::param(
            "capability table",
            format!("entry provides {} operations, not {}", self.kind(), wanted),
        )
    }

    /// The bignum factory
    pub fn as_bignum(&self) -> Result<&Arc<dyn BignumAlgorithm>> {
        match self {
            Self::Bignum(a) => Ok(a),
            _ => Err(self.mismatch(AlgorithmKind::Bignum)),
        }
    }

    /// The hash function
    pub fn as_hash(&self) -> Result<&Arc<dyn HashAlgorithm>> {
        match self {
            Self::Hash(a) => Ok(a),
            _ => Err(self.mismatch(AlgorithmKind::Hash)),
        }
    }

    /// The MAC construction
    pub fn as_mac(&self) -> Result<&Arc<dyn MacAlgorithm>> {
        match self {
            Self::Mac(a) => Ok(a),
            _ => Err(self.mismatch(AlgorithmKind::Mac)),
        }
    }

    /// The elliptic-curve engine
    pub fn as_ecc(&self) -> Result<&Arc<dyn EccAlgorithm>> {
        match self {
            Self::Ecc(a) => Ok(a),
            _ => Err(self.mismatch(AlgorithmKind::Ecc)),
        }
    }
}
