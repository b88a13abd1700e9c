//! Loadable units and the entry-point contract

use core::fmt;

use pcrypt_api::{AlgorithmKind, Error, Result};

use crate::capability::Capability;
use crate::registry::Registry;

/// Entry point of a loadable unit
///
/// A unit exports one or more implementations, addressed by index. The
/// registry asks for the count first and then for the kind, name and
/// capability table of every index below it.
pub trait PluginUnit: Send + Sync {
    /// Name the unit identifies itself by
    fn name(&self) -> &str;

    /// Number of implementations the unit exports
    fn implementation_count(&self) -> Result<usize>;

    /// Algorithm family of implementation `index`
    fn kind(&self, index: usize) -> Result<AlgorithmKind>;

    /// Algorithm name of implementation `index`
    fn algorithm_name(&self, index: usize) -> Result<String>;

    /// Capability table of implementation `index`
    fn capability(&self, index: usize) -> Result<Capability>;

    /// Index of the implementation called `name`
    fn lookup_name(&self, name: &str) -> Result<usize> {
        for index in 0..self.implementation_count()? {
            if self.algorithm_name(index)? == name {
                return Ok(index);
            }
        }
        Err(Error::not_found("unit implementation", name))
    }

    /// Known-answer test of implementation `index`
    ///
    /// Tests may look up the algorithms they depend on in `registry`.
    fn self_test(&self, index: usize, registry: &Registry) -> Result<()> {
        let _ = (index, registry);
        Err(Error::NotImplemented { feature: "self-test" })
    }
}

/// Signature of a built-in known-answer test
pub type SelfTestFn = fn(&Capability, &Registry) -> Result<()>;

/// A unit whose implementations are fixed capability tables
pub struct BuiltinUnit {
    name: &'static str,
    implementations: Vec<Capability>,
    self_test: Option<SelfTestFn>,
}

impl BuiltinUnit {
    /// Create a unit exporting `implementations` in order
    pub fn new(name: &'static str, implementations: Vec<Capability>) -> Self {
        Self {
            name,
            implementations,
            self_test: None,
        }
    }

    /// Attach a known-answer test run for every implementation
    pub fn with_self_test(mut self, test: SelfTestFn) -> Self {
        self.self_test = Some(test);
        self
    }

    fn get(&self, index: usize) -> Result<&Capability> {
        self.implementations.get(index).ok_or_else(|| Error::InvalidParameter {
            context: "unit implementation",
            message: format!("index {} out of range for unit '{}'", index, self.name),
        })
    }
}

impl fmt::Debug for BuiltinUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BuiltinUnit")
            .field("name", &self.name)
            .field("implementations", &self.implementations)
            .finish()
    }
}

impl PluginUnit for BuiltinUnit {
    fn name(&self) -> &str {
        self.name
    }

    fn implementation_count(&self) -> Result<usize> {
        Ok(self.implementations.len())
    }

    fn kind(&self, index: usize) -> Result<AlgorithmKind> {
        self.get(index).map(Capability::kind)
    }

    fn algorithm_name(&self, index: usize) -> Result<String> {
        self.get(index).map(|c| c.name().to_string())
    }

    fn capability(&self, index: usize) -> Result<Capability> {
        self.get(index).cloned()
    }

    fn self_test(&self, index: usize, registry: &Registry) -> Result<()> {
        let capability = self.get(index)?;
        match self.self_test {
            Some(test) => test(capability, registry),
            None => Err(Error::NotImplemented { feature: "self-test" }),
        }
    }
}
