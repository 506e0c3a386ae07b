/* src/cli/core/src/project.rs */

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use pagekit_engine::{PublishOptions, Registry, TemplateEntry};
use serde_json::Value;

use crate::config::{find_pagekit_config, load_pagekit_config, PagekitConfig};
use crate::library::load_template_dir;
use crate::ui;

/// Explicit path wins; otherwise search upward from `cwd`. Only a search
/// that finds nothing means "no config".
fn config_path(explicit: Option<PathBuf>, cwd: &Path) -> Result<Option<PathBuf>> {
  match explicit {
    Some(path) => Ok(Some(path)),
    None => find_pagekit_config(cwd),
  }
}

/// Config plus the registry it describes: built-in templates and any from
/// `[templates] dir`.
pub struct Project {
  pub config: PagekitConfig,
  /// Directory relative config paths resolve against.
  pub base_dir: PathBuf,
  pub registry: Registry,
}

impl Project {
  /// Explicit config path, else `pagekit.toml` found upward from cwd, else
  /// defaults rooted at cwd.
  pub fn load(explicit: Option<PathBuf>) -> Result<Self> {
    let cwd = std::env::current_dir().context("failed to get cwd")?;
    match config_path(explicit, &cwd)? {
      Some(path) => {
        let config = load_pagekit_config(&path)?;
        let base_dir = path.parent().map_or_else(|| cwd.clone(), Path::to_path_buf);
        Self::from_config(config, base_dir)
      }
      None => Self::from_config(PagekitConfig::default(), cwd),
    }
  }

  pub fn from_config(config: PagekitConfig, base_dir: PathBuf) -> Result<Self> {
    let mut builder = Registry::builder().with_builtin();
    if let Some(dir) = &config.templates.dir {
      let dir = base_dir.join(dir);
      let sources = load_template_dir(&dir)?;
      if !sources.is_empty() {
        ui::arrow(&format!("{} project templates from {}", sources.len(), dir.display()));
      }
      builder = builder.extend(sources);
    }
    let registry = builder.build().context("failed to build template registry")?;
    Ok(Self { config, base_dir, registry })
  }

  pub fn entry(&self, id: &str) -> Result<&TemplateEntry> {
    Ok(self.registry.require(id)?)
  }

  /// Like [`Project::entry`], refusing templates the project tier does not unlock.
  pub fn usable_entry(&self, id: &str) -> Result<&TemplateEntry> {
    let entry = self.entry(id)?;
    entry.check_access(self.config.project.tier)?;
    Ok(entry)
  }

  /// Content tree from `file`, or the template defaults.
  pub fn content(&self, entry: &TemplateEntry, file: Option<&Path>) -> Result<Value> {
    let Some(file) = file else {
      return Ok(entry.default_data().clone());
    };
    let text =
      std::fs::read_to_string(file).with_context(|| format!("failed to read {}", file.display()))?;
    serde_json::from_str(&text).with_context(|| format!("failed to parse {}", file.display()))
  }

  pub fn out_dir(&self, explicit: Option<PathBuf>) -> PathBuf {
    explicit.unwrap_or_else(|| self.base_dir.join(&self.config.publish.out_dir))
  }

  pub fn publish_options(&self) -> PublishOptions {
    PublishOptions { data_id: self.config.publish.data_id.clone() }
  }
}
