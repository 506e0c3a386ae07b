/* src/server/engine/rust/src/registry.rs */

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::catalog::builtin_sources;
use crate::error::EngineError;
use crate::template::{AccessTier, TemplateEntry, TemplateSource};

/// Read-only lookup table of templates. Fields are inferred once per
/// template when the registry is built.
#[derive(Debug, Default)]
pub struct Registry {
  entries: Vec<TemplateEntry>,
  index: HashMap<String, usize>,
}

static BUILTIN: OnceLock<Result<Registry, EngineError>> = OnceLock::new();

impl Registry {
  /// The compiled-in catalogue, built on first use and shared afterwards.
  pub fn builtin() -> Result<&'static Registry, EngineError> {
    BUILTIN.get_or_init(|| Registry::builder().with_builtin().build()).as_ref().map_err(Clone::clone)
  }

  pub fn builder() -> RegistryBuilder {
    RegistryBuilder::default()
  }

  pub fn get(&self, id: &str) -> Option<&TemplateEntry> {
    self.index.get(id).and_then(|&i| self.entries.get(i))
  }

  /// Like [`Registry::get`], with a missing id as an error.
  pub fn require(&self, id: &str) -> Result<&TemplateEntry, EngineError> {
    self.get(id).ok_or_else(|| EngineError::UnknownTemplate(id.to_string()))
  }

  /// Entries in registration order.
  pub fn iter(&self) -> impl Iterator<Item = &TemplateEntry> {
    self.entries.iter()
  }

  pub fn len(&self) -> usize {
    self.entries.len()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  pub fn by_category<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a TemplateEntry> {
    self.entries.iter().filter(move |e| e.category() == category)
  }

  /// Templates a holder of `tier` may use.
  pub fn available_to(&self, tier: AccessTier) -> impl Iterator<Item = &TemplateEntry> {
    self.entries.iter().filter(move |e| tier.unlocks(e.access()))
  }

  /// Distinct categories in order of first appearance.
  pub fn categories(&self) -> Vec<&str> {
    let mut seen: Vec<&str> = Vec::new();
    for entry in &self.entries {
      if !seen.contains(&entry.category()) {
        seen.push(entry.category());
      }
    }
    seen
  }
}

#[derive(Debug, Default)]
pub struct RegistryBuilder {
  sources: Vec<TemplateSource>,
}

impl RegistryBuilder {
  #[must_use]
  pub fn with_builtin(mut self) -> Self {
    self.sources.extend(builtin_sources());
    self
  }

  #[must_use]
  pub fn add(mut self, source: TemplateSource) -> Self {
    self.sources.push(source);
    self
  }

  #[must_use]
  pub fn extend(mut self, sources: impl IntoIterator<Item = TemplateSource>) -> Self {
    self.sources.extend(sources);
    self
  }

  /// Validate every source and build the lookup table. Stops at the first
  /// invalid source.
  pub fn build(self) -> Result<Registry, EngineError> {
    let mut registry = Registry::default();
    for source in self.sources {
      if registry.index.contains_key(&source.id) {
        return Err(EngineError::DuplicateTemplate(source.id));
      }
      let entry = TemplateEntry::from_source(source)?;
      registry.index.insert(entry.id().to_string(), registry.entries.len());
      registry.entries.push(entry);
    }
    Ok(registry)
  }
}
