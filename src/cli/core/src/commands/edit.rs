/* src/cli/core/src/commands/edit.rs */

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use pagekit_engine::EditSession;
use serde_json::Value;

use super::emit_to;
use crate::project::Project;
use crate::ui;

/// Command-line value: JSON when it parses, otherwise the raw text.
fn parse_value(raw: &str) -> Value {
  serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

pub fn run_set(
  project: &Project,
  id: &str,
  path: &str,
  raw_value: &str,
  content: Option<&Path>,
  out: Option<PathBuf>,
) -> Result<()> {
  let entry = project.usable_entry(id)?;
  let mut session = EditSession::resume(entry, project.content(entry, content)?);
  session.set(path, parse_value(raw_value))?;

  let json =
    serde_json::to_string_pretty(session.content()).context("failed to serialize content")?;
  emit_to(out.as_deref(), &json)?;
  if let Some(out) = out {
    ui::ok(&format!("{path} updated, wrote {}", out.display()));
  }
  Ok(())
}
