//! Run-time plugin registry for the pcrypt library
//!
//! Algorithms are packaged in *units*. A [`Catalog`] resolves unit names to
//! loaded objects, the [`Registry`] enumerates the implementations each
//! unit exports and keeps one entry per implementation. Callers then look
//! entries up by algorithm name or kind and receive a typed [`Capability`]
//! table without knowing any concrete type.
//!
//! ```
//! use pcrypt_registry::Registry;
//!
//! let mut registry = Registry::builtin();
//! registry.load("sha2", None).unwrap();
//! let id = registry.lookup_by_name("SHA-256", 0, None).unwrap();
//! let (table, _) = registry.capability_table(id).unwrap();
//! let digest = table.as_hash().unwrap().digest(b"abc");
//! assert_eq!(digest.len(), 32);
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod capability;
pub mod catalog;
pub mod registry;
pub mod unit;
pub mod units;

pub use capability::Capability;
pub use catalog::{Catalog, LoadedObject, StaticCatalog};
pub use registry::{EntryId, Registry};
pub use unit::{BuiltinUnit, PluginUnit, SelfTestFn};
