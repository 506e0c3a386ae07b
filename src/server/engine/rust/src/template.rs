/* src/server/engine/rust/src/template.rs */

use std::fmt;
use std::str::FromStr;

use pagekit_content::{
  build_fields, first_unaddressable_key, FieldDescriptor, FieldKind, Path, PathStep,
};
use pagekit_injector::Skeleton;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::EngineError;

/// Subscription level needed to use a template. Ordered: `Premium` unlocks
/// everything `Free` does.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessTier {
  #[default]
  Free,
  Premium,
}

impl AccessTier {
  pub fn as_str(self) -> &'static str {
    match self {
      AccessTier::Free => "free",
      AccessTier::Premium => "premium",
    }
  }

  /// Whether a holder of `self` may use a template that requires `required`.
  pub fn unlocks(self, required: AccessTier) -> bool {
    self >= required
  }
}

impl fmt::Display for AccessTier {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for AccessTier {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "free" => Ok(AccessTier::Free),
      "premium" | "pro" => Ok(AccessTier::Premium),
      other => Err(format!("unknown access tier \"{other}\"")),
    }
  }
}

/// Replaces the inferred editor kind for matching fields.
///
/// An override path without indices (`services.description`) applies to
/// every array element; one with indices (`services[0].description`) only
/// to that exact field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldOverride {
  pub path: String,
  pub kind: FieldKind,
}

impl FieldOverride {
  pub fn new(path: impl Into<String>, kind: FieldKind) -> Self {
    Self { path: path.into(), kind }
  }
}

fn override_matches(pattern: &Path, field: &Path) -> bool {
  if pattern.steps().iter().any(|s| matches!(s, PathStep::Index(_))) {
    return pattern == field;
  }
  let keys = field.steps().iter().filter_map(PathStep::as_key);
  keys.eq(pattern.steps().iter().filter_map(PathStep::as_key))
}

/// Declaration a [`TemplateEntry`] is built from.
#[derive(Debug, Clone)]
pub struct TemplateSource {
  pub id: String,
  pub name: String,
  pub category: String,
  pub access: AccessTier,
  /// JSON text of the default content tree; must be an object.
  pub default_data: String,
  /// HTML with `<!--pk:...-->` directives.
  pub skeleton: String,
  pub overrides: Vec<FieldOverride>,
}

/// Renders a content tree into page markup.
#[derive(Debug)]
pub struct Renderer {
  skeleton: Skeleton,
}

impl Renderer {
  pub fn render(&self, content: &Value) -> String {
    self.skeleton.render(content)
  }
}

/// A registered template. Immutable once built; edit sessions work on a
/// clone of [`TemplateEntry::default_data`].
#[derive(Debug)]
pub struct TemplateEntry {
  id: String,
  name: String,
  category: String,
  access: AccessTier,
  default_data: Value,
  fields: Vec<FieldDescriptor>,
  renderer: Renderer,
}

impl TemplateEntry {
  pub(crate) fn from_source(source: TemplateSource) -> Result<Self, EngineError> {
    let TemplateSource { id, name, category, access, default_data, skeleton, overrides } = source;

    let default_data: Value = serde_json::from_str(&default_data)
      .map_err(|e| EngineError::InvalidDefaultData { id: id.clone(), reason: e.to_string() })?;
    if !default_data.is_object() {
      return Err(EngineError::InvalidDefaultData {
        id,
        reason: "top level must be an object".to_string(),
      });
    }
    if let Some((parent, key)) = first_unaddressable_key(&default_data) {
      let at = if parent.is_root() { "top level".to_string() } else { format!("\"{parent}\"") };
      return Err(EngineError::InvalidDefaultData {
        id,
        reason: format!("key {key:?} in {at} cannot be addressed by a path"),
      });
    }

    let mut fields = build_fields(&default_data);
    for rule in &overrides {
      let pattern = Path::parse(&rule.path).map_err(|e| EngineError::InvalidOverride {
        id: id.clone(),
        path: rule.path.clone(),
        reason: e.to_string(),
      })?;
      let mut matched = false;
      for field in fields.iter_mut().filter(|f| override_matches(&pattern, &f.path)) {
        field.kind = rule.kind;
        matched = true;
      }
      if !matched {
        return Err(EngineError::InvalidOverride {
          id,
          path: rule.path.clone(),
          reason: "matches no field".to_string(),
        });
      }
    }

    let skeleton = Skeleton::parse(&skeleton);
    if !skeleton.diagnostics().is_empty() {
      let problems = skeleton.diagnostics().iter().map(ToString::to_string).collect();
      return Err(EngineError::InvalidSkeleton { id, problems });
    }

    Ok(Self { id, name, category, access, default_data, fields, renderer: Renderer { skeleton } })
  }

  pub fn id(&self) -> &str {
    &self.id
  }

  pub fn name(&self) -> &str {
    &self.name
  }

  pub fn category(&self) -> &str {
    &self.category
  }

  pub fn access(&self) -> AccessTier {
    self.access
  }

  pub fn default_data(&self) -> &Value {
    &self.default_data
  }

  pub fn fields(&self) -> &[FieldDescriptor] {
    &self.fields
  }

  pub fn renderer(&self) -> &Renderer {
    &self.renderer
  }

  pub fn field(&self, path: &Path) -> Option<&FieldDescriptor> {
    self.fields.iter().find(|f| &f.path == path)
  }

  pub fn check_access(&self, tier: AccessTier) -> Result<(), EngineError> {
    if tier.unlocks(self.access) {
      Ok(())
    } else {
      Err(EngineError::Locked { id: self.id.clone(), required: self.access })
    }
  }

  /// Paths the skeleton reads that the default data does not provide.
  pub fn unbound_paths(&self) -> Vec<Path> {
    self
      .renderer
      .skeleton
      .data_paths()
      .into_iter()
      .filter(|p| p.resolve(&self.default_data).is_none())
      .collect()
  }

  pub fn info(&self) -> TemplateInfo<'_> {
    TemplateInfo {
      id: &self.id,
      name: &self.name,
      category: &self.category,
      access_tier: self.access,
      field_count: self.fields.len(),
    }
  }

  pub fn schema(&self) -> TemplateSchema<'_> {
    TemplateSchema { info: self.info(), default_data: &self.default_data, fields: &self.fields }
  }
}

/// Listing view of a template.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateInfo<'a> {
  pub id: &'a str,
  pub name: &'a str,
  pub category: &'a str,
  pub access_tier: AccessTier,
  pub field_count: usize,
}

/// What a page builder needs to show an editor for a template.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateSchema<'a> {
  #[serde(flatten)]
  pub info: TemplateInfo<'a>,
  pub default_data: &'a Value,
  pub fields: &'a [FieldDescriptor],
}
