/* src/cli/core/src/commands/check.rs */

use anyhow::{bail, Result};
use pagekit_engine::TemplateEntry;

use crate::project::Project;
use crate::ui;

/// Problems with one template that the registry build lets through.
fn problems(entry: &TemplateEntry) -> Vec<String> {
  entry
    .unbound_paths()
    .iter()
    .map(|path| format!("skeleton reads {path}, which the default data does not provide"))
    .collect()
}

/// Validate one template or all of them. Registry build already rejects
/// broken JSON, overrides and skeletons; this adds slot coverage.
pub fn run_check(project: &Project, id: Option<&str>) -> Result<()> {
  ui::banner("check");
  let entries: Vec<&TemplateEntry> = match id {
    Some(id) => vec![project.entry(id)?],
    None => project.registry.iter().collect(),
  };

  let mut failing = 0;
  for entry in entries {
    let found = problems(entry);
    if found.is_empty() {
      ui::ok(&format!("{} ({} fields)", entry.id(), entry.fields().len()));
      continue;
    }
    failing += 1;
    ui::fail(entry.id());
    for problem in &found {
      ui::detail(problem);
    }
  }

  if failing > 0 {
    bail!("{failing} template(s) failed checks");
  }
  Ok(())
}
