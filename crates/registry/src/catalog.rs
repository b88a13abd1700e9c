//! Resolution of unit paths to loaded objects

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use once_cell::sync::Lazy;

use crate::unit::PluginUnit;

/// An object a catalog resolved a path to
///
/// `entry` is `None` when the object exists but exports no plugin entry
/// point; loading such an object fails with a resolution error.
#[derive(Clone)]
pub struct LoadedObject {
    /// The unit's entry point, if exported
    pub entry: Option<Arc<dyn PluginUnit>>,
}

impl LoadedObject {
    /// An object exporting `unit`
    pub fn unit(unit: Arc<dyn PluginUnit>) -> Self {
        Self { entry: Some(unit) }
    }

    /// An object without an entry point
    pub fn without_entry() -> Self {
        Self { entry: None }
    }
}

impl fmt::Debug for LoadedObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.entry {
            Some(unit) => write!(f, "LoadedObject({})", unit.name()),
            None => f.write_str("LoadedObject(<no entry point>)"),
        }
    }
}

/// Resolves unit paths
pub trait Catalog: Send + Sync {
    /// Open the object at `path`, or `None` if nothing is there
    fn open(&self, path: &str) -> Option<LoadedObject>;
}

/// A catalog of objects mounted at fixed paths
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    objects: HashMap<String, LoadedObject>,
}

static BUILTIN: Lazy<Arc<StaticCatalog>> = Lazy::new(|| {
    let mut catalog = StaticCatalog::new();
    crate::units::register(&mut catalog);
    Arc::new(catalog)
});

impl StaticCatalog {
    /// Empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// The shipped units, mounted under their bare names and under `plugins/`
    pub fn builtin() -> Arc<StaticCatalog> {
        Arc::clone(&BUILTIN)
    }

    /// Mount `object` at `path`, replacing anything already there
    pub fn mount(&mut self, path: impl Into<String>, object: LoadedObject) {
        self.objects.insert(path.into(), object);
    }

    /// Mount a unit at `path`
    pub fn mount_unit(&mut self, path: impl Into<String>, unit: Arc<dyn PluginUnit>) {
        self.mount(path, LoadedObject::unit(unit));
    }

    /// Number of mounted paths
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// True if nothing is mounted
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl Catalog for StaticCatalog {
    fn open(&self, path: &str) -> Option<LoadedObject> {
        let mut path = path;
        while let Some(rest) = path.strip_prefix("./") {
            path = rest;
        }
        self.objects.get(path).cloned()
    }
}
