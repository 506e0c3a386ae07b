/* src/cli/core/src/commands/mod.rs */

mod check;
mod edit;
mod inspect;
mod list;
mod output;

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

pub use check::run_check;
pub use edit::run_set;
pub use inspect::{run_fields, run_get};
pub use list::run_list;
pub use output::{run_publish, run_render};

/// Write command output to stdout; status lines go through `ui` on stderr.
fn emit(text: &str) -> Result<()> {
  let mut out = std::io::stdout().lock();
  out.write_all(text.as_bytes()).context("failed to write to stdout")?;
  if !text.ends_with('\n') {
    out.write_all(b"\n").context("failed to write to stdout")?;
  }
  Ok(())
}

/// Write `text` to `file` when given, else to stdout.
fn emit_to(file: Option<&Path>, text: &str) -> Result<()> {
  match file {
    Some(file) => {
      if let Some(parent) = file.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
          .with_context(|| format!("failed to create {}", parent.display()))?;
      }
      std::fs::write(file, text).with_context(|| format!("failed to write {}", file.display()))
    }
    None => emit(text),
  }
}

#[cfg(test)]
fn builtin_project() -> crate::project::Project {
  let config = crate::config::PagekitConfig::default();
  crate::project::Project::from_config(config, std::path::PathBuf::from(".")).unwrap()
}
