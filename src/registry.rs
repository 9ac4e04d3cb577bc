//! The immutable function reference registry.

use crate::model::{Reference, Resource};
use crate::parser;
use crate::source::Source;
use anyhow::Result;
use std::collections::HashMap;

/// Function name → reference, built once and read-only afterwards.
///
/// The only way to obtain one is a construction call:
///
/// ```compile_fail
/// let registry = funcref::Registry::default();
/// ```
#[derive(Debug, Clone)]
pub struct Registry {
    references: HashMap<String, Reference>,
}

impl Registry {
    /// Load, parse and merge every page from `source`.
    ///
    /// Fails on the first page that cannot be read or parsed; no partial
    /// registry is returned.
    pub fn build(source: &Source) -> Result<Self> {
        let resources = source.load()?;
        Self::from_resources(&resources)
    }

    /// Build from the pages bundled with the crate.
    pub fn embedded() -> Result<Self> {
        Self::build(&Source::Embedded)
    }

    /// Build from already-loaded pages, applied in slice order.
    pub fn from_resources(resources: &[Resource]) -> Result<Self> {
        let pages = resources
            .iter()
            .map(parser::parse_resource)
            .collect::<Result<Vec<_>>>()?;
        let references = parser::merge::merge(pages);
        tracing::debug!(references = references.len(), "built function reference registry");
        Ok(Self { references })
    }

    /// Look up the reference for a function name.
    pub fn get(&self, name: &str) -> Option<&Reference> {
        self.references.get(name)
    }

    pub fn len(&self) -> usize {
        self.references.len()
    }

    pub fn is_empty(&self) -> bool {
        self.references.is_empty()
    }

    /// All documented function names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.references.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Iterate over all entries in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Reference)> {
        self.references.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Entries whose page declared `category`, sorted by name.
    pub fn in_category(&self, category: &str) -> Vec<(&str, &Reference)> {
        let mut entries: Vec<_> = self
            .iter()
            .filter(|(_, r)| r.category.as_deref() == Some(category))
            .collect();
        entries.sort_unstable_by_key(|(name, _)| *name);
        entries
    }
}
