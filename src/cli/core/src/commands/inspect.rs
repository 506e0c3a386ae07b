/* src/cli/core/src/commands/inspect.rs */

use std::path::Path;

use anyhow::{Context, Result};
use pagekit_content::{FieldDescriptor, Path as ContentPath};
use pagekit_engine::TemplateEntry;
use serde_json::Value;

use super::emit;
use crate::project::Project;
use crate::ui::{self, pad, DIM, RESET};

fn field_row(field: &FieldDescriptor) -> String {
  let path = pad(&field.path.to_string(), 34);
  format!("{path} {} {DIM}{}{RESET}", pad(field.kind.as_str(), 9), field.label)
}

fn field_table(entry: &TemplateEntry) -> String {
  entry.fields().iter().map(field_row).collect::<Vec<_>>().join("\n")
}

/// Strings print bare; everything else as pretty JSON.
fn display_value(value: &Value) -> Result<String> {
  match value {
    Value::String(s) => Ok(s.clone()),
    other => serde_json::to_string_pretty(other).context("failed to serialize value"),
  }
}

pub fn run_fields(project: &Project, id: &str, json: bool) -> Result<()> {
  let entry = project.entry(id)?;
  if json {
    let text = serde_json::to_string_pretty(entry.fields()).context("failed to serialize fields")?;
    return emit(&text);
  }
  ui::banner(&format!("fields {}", entry.id()));
  emit(&field_table(entry))
}

pub fn run_get(project: &Project, id: &str, path: &str, content: Option<&Path>) -> Result<()> {
  let entry = project.entry(id)?;
  let path = ContentPath::parse(path)?;
  let content = project.content(entry, content)?;
  match path.resolve(&content) {
    Some(value) => emit(&display_value(value)?),
    None => {
      ui::warn(&format!("no value at {path}"));
      Ok(())
    }
  }
}
