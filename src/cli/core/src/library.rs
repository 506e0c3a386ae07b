/* src/cli/core/src/library.rs */

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{bail, Context, Result};
use pagekit_content::FieldKind;
use pagekit_engine::{AccessTier, FieldOverride, TemplateSource};
use serde::Deserialize;

pub const MANIFEST_FILE: &str = "template.toml";
pub const DATA_FILE: &str = "data.json";
pub const PAGE_FILE: &str = "page.html";

/// `template.toml` of a project template. The template id is the name of
/// the directory it sits in.
#[derive(Debug, Deserialize)]
struct TemplateManifest {
  name: String,
  #[serde(default = "default_category")]
  category: String,
  #[serde(default)]
  access: AccessTier,
  /// Editor kind overrides, `path = "textarea"`
  #[serde(default)]
  fields: BTreeMap<String, FieldKind>,
}

fn default_category() -> String {
  "custom".to_string()
}

/// Load every template directory under `dir`, sorted by id. Hidden entries
/// and plain files are skipped.
pub fn load_template_dir(dir: &Path) -> Result<Vec<TemplateSource>> {
  let entries =
    std::fs::read_dir(dir).with_context(|| format!("failed to read {}", dir.display()))?;
  let mut dirs = Vec::new();
  for entry in entries {
    let entry = entry.with_context(|| format!("failed to read {}", dir.display()))?;
    let path = entry.path();
    let hidden = entry.file_name().to_string_lossy().starts_with('.');
    if path.is_dir() && !hidden {
      dirs.push(path);
    }
  }
  dirs.sort();
  dirs.iter().map(|d| load_template(d)).collect()
}

pub fn load_template(dir: &Path) -> Result<TemplateSource> {
  let Some(id) = dir.file_name().and_then(|n| n.to_str()) else {
    bail!("template directory {} has no usable name", dir.display());
  };

  let manifest_path = dir.join(MANIFEST_FILE);
  let manifest = std::fs::read_to_string(&manifest_path)
    .with_context(|| format!("failed to read {}", manifest_path.display()))?;
  let manifest: TemplateManifest = toml::from_str(&manifest)
    .with_context(|| format!("failed to parse {}", manifest_path.display()))?;

  let read = |file: &str| {
    let path = dir.join(file);
    std::fs::read_to_string(&path).with_context(|| format!("failed to read {}", path.display()))
  };

  Ok(TemplateSource {
    id: id.to_string(),
    name: manifest.name,
    category: manifest.category,
    access: manifest.access,
    default_data: read(DATA_FILE)?,
    skeleton: read(PAGE_FILE)?,
    overrides: manifest
      .fields
      .into_iter()
      .map(|(path, kind)| FieldOverride::new(path, kind))
      .collect(),
  })
}

#[cfg(test)]
mod tests {
  use super::*;

  fn write_template(root: &Path, id: &str, manifest: &str) {
    let dir = root.join(id);
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join(MANIFEST_FILE), manifest).unwrap();
    std::fs::write(dir.join(DATA_FILE), r#"{"hero": {"title": "Sale", "body": "Long text"}}"#).unwrap();
    std::fs::write(dir.join(PAGE_FILE), "<h1><!--pk:hero.title--></h1>").unwrap();
  }

  #[test]
  fn loads_manifest_and_files() {
    let root = tempfile::tempdir().unwrap();
    write_template(
      root.path(),
      "spring-sale",
      "name = \"Spring sale\"\naccess = \"premium\"\n\n[fields]\n\"hero.body\" = \"textarea\"\n",
    );
    let source = load_template(&root.path().join("spring-sale")).unwrap();
    assert_eq!(source.id, "spring-sale");
    assert_eq!(source.name, "Spring sale");
    assert_eq!(source.category, "custom");
    assert_eq!(source.access, AccessTier::Premium);
    assert_eq!(source.overrides, vec![FieldOverride::new("hero.body", FieldKind::Textarea)]);
    assert_eq!(source.skeleton, "<h1><!--pk:hero.title--></h1>");
  }

  #[test]
  fn dir_is_sorted_and_skips_hidden_and_files() {
    let root = tempfile::tempdir().unwrap();
    write_template(root.path(), "b", "name = \"B\"\n");
    write_template(root.path(), "a", "name = \"A\"\ncategory = \"events\"\n");
    write_template(root.path(), ".draft", "not toml at all [");
    std::fs::write(root.path().join("README.md"), "notes").unwrap();

    let sources = load_template_dir(root.path()).unwrap();
    let ids: Vec<_> = sources.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "b"]);
    assert_eq!(sources[0].category, "events");
  }

  #[test]
  fn missing_files_are_reported() {
    let root = tempfile::tempdir().unwrap();
    write_template(root.path(), "x", "name = \"X\"\n");
    std::fs::remove_file(root.path().join("x").join(PAGE_FILE)).unwrap();
    let err = load_template_dir(root.path()).unwrap_err();
    assert!(err.to_string().contains(PAGE_FILE));
  }

  #[test]
  fn bad_field_kind_is_a_parse_error() {
    let root = tempfile::tempdir().unwrap();
    write_template(root.path(), "x", "name = \"X\"\n[fields]\n\"hero.body\" = \"video\"\n");
    let err = load_template(&root.path().join("x")).unwrap_err();
    assert!(err.to_string().starts_with("failed to parse"));
  }
}
