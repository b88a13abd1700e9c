//! The registry of loaded implementations

use std::fmt;
use std::ops::Range;
use std::sync::Arc;

use pcrypt_api::{AlgorithmKind, Error, Result};
use tracing::{debug, info, warn};

use crate::capability::Capability;
use crate::catalog::{Catalog, LoadedObject, StaticCatalog};
use crate::unit::PluginUnit;

/// Handle to one registry entry
///
/// Ids are invalidated by [`Registry::unload`]; using a stale id fails with
/// `InvalidParameter`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntryId {
    generation: u64,
    index: usize,
}

impl EntryId {
    /// Position of the entry in load order
    ///
    /// Usable as a `start` bound for the lookup functions.
    pub fn index(&self) -> usize {
        self.index
    }
}

#[derive(Debug)]
struct Entry {
    unit: usize,
    unit_name: String,
    algorithm: String,
    implementation: usize,
    kind: AlgorithmKind,
    capability: Capability,
    table_size: usize,
    siblings: usize,
}

/// Append-only table of implementations loaded from units
pub struct Registry {
    catalog: Arc<dyn Catalog>,
    units: Vec<Arc<dyn PluginUnit>>,
    entries: Vec<Entry>,
    generation: u64,
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("units", &self.units.len())
            .field("entries", &self.entries)
            .field("generation", &self.generation)
            .finish()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Registry {
    /// Empty registry resolving units through `catalog`
    pub fn new(catalog: Arc<dyn Catalog>) -> Self {
        Self {
            catalog,
            units: Vec::new(),
            entries: Vec::new(),
            generation: 0,
        }
    }

    /// Empty registry over the shipped units
    pub fn builtin() -> Self {
        Self::new(StaticCatalog::builtin())
    }

    fn resolve(&self, name: &str, search_path: Option<&str>) -> Result<(String, LoadedObject)> {
        let found = match search_path {
            None => self.catalog.open(name).map(|o| (name.to_string(), o)),
            Some(path) => path.split(':').find_map(|dir| {
                let dir = if dir.is_empty() { "." } else { dir };
                let candidate = format!("{}/{}", dir, name);
                debug!(path = %candidate, "trying unit path");
                self.catalog.open(&candidate).map(|o| (candidate, o))
            }),
        };
        found.ok_or_else(|| Error::not_found("plugin unit", name))
    }

    /// Load the unit called `name` and register every implementation it
    /// exports
    ///
    /// Without a search path the catalog is asked for `name` directly.
    /// Otherwise each element of the colon-separated path is tried as a
    /// directory, an empty element meaning `.`. Returns the id of the first
    /// new entry. If enumeration fails part way, every entry added for the
    /// unit is removed again before the error is returned.
    pub fn load(&mut self, name: &str, search_path: Option<&str>) -> Result<EntryId> {
        let (path, object) = self.resolve(name, search_path)?;
        let unit = object.entry.ok_or_else(|| Error::Resolution { unit: path.clone() })?;

        let first = self.entries.len();
        let unit_index = self.units.len();
        self.units.push(Arc::clone(&unit));

        if let Err(err) = self.register_unit(unit_index, name, unit.as_ref()) {
            self.entries.truncate(first);
            self.units.truncate(unit_index);
            warn!(unit = name, path = %path, error = %err, "unit load rolled back");
            return Err(err);
        }

        info!(
            unit = name,
            path = %path,
            implementations = self.entries.len() - first,
            "loaded unit"
        );
        Ok(EntryId {
            generation: self.generation,
            index: first,
        })
    }

    fn register_unit(&mut self, unit_index: usize, name: &str, unit: &dyn PluginUnit) -> Result<()> {
        let enumeration = |stage: &str, err: Error| Error::Enumeration {
            unit: name.to_string(),
            message: format!("{}: {}", stage, err),
        };

        let count = unit
            .implementation_count()
            .map_err(|e| enumeration("implementation count", e))?;
        if count == 0 {
            return Err(Error::Enumeration {
                unit: name.to_string(),
                message: "unit exports no implementations".to_string(),
            });
        }

        for index in 0..count {
            let kind = unit.kind(index).map_err(|e| enumeration("kind", e))?;
            let algorithm = unit
                .algorithm_name(index)
                .map_err(|e| enumeration("name", e))?;
            let capability = unit.capability(index).map_err(|e| Error::Function {
                unit: name.to_string(),
                message: e.to_string(),
            })?;
            if capability.kind() != kind {
                return Err(Error::Function {
                    unit: name.to_string(),
                    message: format!(
                        "implementation {} declares {} but provides {} operations",
                        index,
                        kind,
                        capability.kind()
                    ),
                });
            }

            debug!(unit = name, algorithm = %algorithm, %kind, "registered implementation");
            self.entries.push(Entry {
                unit: unit_index,
                unit_name: name.to_string(),
                algorithm,
                implementation: index,
                kind,
                table_size: capability.table_size(),
                capability,
                siblings: count,
            });
        }
        Ok(())
    }

    fn range(&self, start: usize, end: Option<usize>) -> Result<Range<usize>> {
        if let Some(end) = end {
            if end < start {
                return Err(Error::param(
                    "registry lookup",
                    format!("end {} is before start {}", end, start),
                ));
            }
        }
        let end = end.map_or(self.entries.len(), |e| e.min(self.entries.len()));
        Ok(start.min(end)..end)
    }

    fn find(&self, mut range: Range<usize>, pred: impl Fn(&Entry) -> bool) -> Option<EntryId> {
        range
            .find(|&i| pred(&self.entries[i]))
            .map(|index| EntryId {
                generation: self.generation,
                index,
            })
    }

    /// First entry in `[start, end)` whose algorithm is called `name`
    ///
    /// `end == None` searches to the last entry.
    pub fn lookup_by_name(&self, name: &str, start: usize, end: Option<usize>) -> Result<EntryId> {
        let range = self.range(start, end)?;
        self.find(range, |e| e.algorithm == name)
            .ok_or_else(|| Error::not_found("registry lookup", name))
    }

    /// First entry in `[start, end)` of the given kind
    pub fn lookup_by_kind(
        &self,
        kind: AlgorithmKind,
        start: usize,
        end: Option<usize>,
    ) -> Result<EntryId> {
        let range = self.range(start, end)?;
        self.find(range, |e| e.kind == kind)
            .ok_or_else(|| Error::not_found("registry lookup", kind.to_string()))
    }

    fn entry(&self, id: EntryId) -> Result<&Entry> {
        if id.generation != self.generation {
            return Err(Error::param("registry entry", "entry id is stale"));
        }
        self.entries
            .get(id.index)
            .ok_or_else(|| Error::param("registry entry", "entry id is out of range"))
    }

    /// Capability table of an entry and its size
    pub fn capability_table(&self, id: EntryId) -> Result<(&Capability, usize)> {
        let entry = self.entry(id)?;
        Ok((&entry.capability, entry.table_size))
    }

    /// Number of registered entries
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// Ids of every registered entry in load order
    pub fn entry_ids(&self) -> Vec<EntryId> {
        (0..self.entries.len())
            .map(|index| EntryId {
                generation: self.generation,
                index,
            })
            .collect()
    }

    /// Number of implementations exported by the entry's unit
    pub fn implementation_count(&self, id: EntryId) -> Result<usize> {
        Ok(self.entry(id)?.siblings)
    }

    /// Algorithm family of an entry
    pub fn kind(&self, id: EntryId) -> Result<AlgorithmKind> {
        Ok(self.entry(id)?.kind)
    }

    /// Algorithm name of an entry
    pub fn algorithm_name(&self, id: EntryId) -> Result<&str> {
        Ok(&self.entry(id)?.algorithm)
    }

    /// Name of the unit an entry was loaded from
    pub fn unit_name(&self, id: EntryId) -> Result<&str> {
        Ok(&self.entry(id)?.unit_name)
    }

    /// Run the known-answer test of an entry
    ///
    /// Families without a test report `NotImplemented`.
    pub fn self_test(&self, id: EntryId) -> Result<()> {
        let entry = self.entry(id)?;
        let unit = &self.units[entry.unit];
        let result = unit.self_test(entry.implementation, self);
        match &result {
            Ok(()) => info!(algorithm = %entry.algorithm, "self-test passed"),
            Err(err) => warn!(algorithm = %entry.algorithm, error = %err, "self-test failed"),
        }
        result
    }

    /// Release every unit and forget all entries
    ///
    /// All ids issued so far become stale.
    pub fn unload(&mut self) {
        let units = self.units.len();
        self.entries.clear();
        self.units.clear();
        self.generation += 1;
        info!(units, "unloaded all units");
    }
}
