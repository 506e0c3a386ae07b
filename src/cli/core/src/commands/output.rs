/* src/cli/core/src/commands/output.rs */

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use pagekit_engine::{publish, render, PublishedPage};

use super::emit_to;
use crate::project::Project;
use crate::ui;

pub fn run_render(
  project: &Project,
  id: &str,
  content: Option<&Path>,
  out: Option<PathBuf>,
) -> Result<()> {
  let entry = project.usable_entry(id)?;
  let content = project.content(entry, content)?;
  let html = render(entry, &content);
  emit_to(out.as_deref(), &html)?;
  if let Some(out) = out {
    ui::ok(&format!("{}  {}", out.display(), ui::format_size(html.len() as u64)));
  }
  Ok(())
}

/// Write `<id>.html` and `<id>.publish.json` into `dir`.
fn write_published(dir: &Path, page: &PublishedPage) -> Result<(PathBuf, PathBuf)> {
  std::fs::create_dir_all(dir).with_context(|| format!("failed to create {}", dir.display()))?;

  let html_path = dir.join(format!("{}.html", page.template_id));
  std::fs::write(&html_path, &page.html)
    .with_context(|| format!("failed to write {}", html_path.display()))?;

  let manifest_path = dir.join(format!("{}.publish.json", page.template_id));
  let manifest =
    serde_json::to_string_pretty(&page.manifest()).context("failed to serialize manifest")?;
  std::fs::write(&manifest_path, manifest)
    .with_context(|| format!("failed to write {}", manifest_path.display()))?;

  Ok((html_path, manifest_path))
}

pub fn run_publish(
  project: &Project,
  id: &str,
  content: Option<&Path>,
  out_dir: Option<PathBuf>,
) -> Result<()> {
  ui::banner("publish");
  let entry = project.usable_entry(id)?;
  let content = project.content(entry, content)?;
  let page = publish(entry, &content, &project.publish_options());

  let dir = project.out_dir(out_dir);
  let (html_path, manifest_path) = write_published(&dir, &page)?;
  ui::ok(&format!("{}  {}", html_path.display(), ui::format_size(page.html.len() as u64)));
  ui::ok(&manifest_path.display().to_string());
  ui::detail(&format!("sha256 {}", page.digest));
  Ok(())
}
