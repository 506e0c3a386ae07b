/* src/cli/core/src/commands/list.rs */

use anyhow::{bail, Result};
use pagekit_engine::{AccessTier, Registry, TemplateEntry};

use super::emit;
use crate::project::Project;
use crate::ui::{self, pad, DIM, RESET, YELLOW};

/// Templates usable at `tier` (all when `None`), optionally in one category.
fn select<'a>(
  registry: &'a Registry,
  tier: Option<AccessTier>,
  category: Option<&str>,
) -> Vec<&'a TemplateEntry> {
  registry
    .iter()
    .filter(|e| tier.is_none_or(|t| t.unlocks(e.access())))
    .filter(|e| category.is_none_or(|c| e.category() == c))
    .collect()
}

fn row(entry: &TemplateEntry, project_tier: AccessTier) -> String {
  let lock = if project_tier.unlocks(entry.access()) {
    String::new()
  } else {
    format!(" {YELLOW}locked{RESET}")
  };
  format!(
    "{} {} {} {}{DIM}{} fields{RESET}{lock}",
    pad(entry.id(), 12),
    pad(entry.name(), 14),
    pad(entry.category(), 12),
    pad(entry.access().as_str(), 9),
    entry.fields().len(),
  )
}

pub fn run_list(project: &Project, tier: Option<AccessTier>, category: Option<&str>) -> Result<()> {
  let selected = select(&project.registry, tier, category);
  if selected.is_empty() {
    if let Some(category) = category {
      let known = project.registry.categories().join(", ");
      bail!("no templates match category \"{category}\" (known: {known})");
    }
    ui::warn("no templates match");
    return Ok(());
  }
  let rows: Vec<_> = selected.iter().map(|e| row(e, project.config.project.tier)).collect();
  emit(&rows.join("\n"))
}
