/* src/cli/core/src/config/types.rs */

use anyhow::{bail, Result};
use pagekit_engine::{AccessTier, DEFAULT_DATA_ID};
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PagekitConfig {
  pub project: ProjectSection,
  #[serde(default)]
  pub templates: TemplatesSection,
  #[serde(default)]
  pub publish: PublishSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectSection {
  pub name: String,
  /// Access tier of whoever runs the CLI in this project.
  #[serde(default)]
  pub tier: AccessTier,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TemplatesSection {
  /// Directory of extra templates, one subdirectory each, relative to the
  /// config file.
  #[serde(default)]
  pub dir: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PublishSection {
  #[serde(default = "default_out_dir")]
  pub out_dir: String,
  #[serde(default = "default_data_id")]
  pub data_id: String,
}

impl Default for PublishSection {
  fn default() -> Self {
    Self { out_dir: default_out_dir(), data_id: default_data_id() }
  }
}

fn default_out_dir() -> String {
  "dist".to_string()
}

fn default_data_id() -> String {
  DEFAULT_DATA_ID.to_string()
}

impl PagekitConfig {
  pub fn validate(&self) -> Result<()> {
    if self.project.name.trim().is_empty() {
      bail!("project.name must not be empty");
    }
    self.publish.validate()
  }
}

impl PublishSection {
  pub fn validate(&self) -> Result<()> {
    if self.out_dir.trim().is_empty() {
      bail!("publish.out_dir must not be empty");
    }
    if self.data_id.is_empty() {
      bail!("publish.data_id must not be empty");
    }
    // Lands inside an id="..." attribute
    let invalid = |c: &char| c.is_whitespace() || matches!(c, '"' | '\'' | '<' | '>' | '&');
    if let Some(c) = self.data_id.chars().find(invalid) {
      bail!("publish.data_id \"{}\" contains invalid character {c:?}", self.data_id);
    }
    Ok(())
  }
}
