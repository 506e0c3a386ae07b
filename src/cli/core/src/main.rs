/* src/cli/core/src/main.rs */

mod commands;
mod config;
mod library;
mod project;
mod ui;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use pagekit_engine::AccessTier;

use project::Project;

#[derive(Parser)]
#[command(name = "pagekit", about = "pagekit landing page templates", version)]
struct Cli {
  /// Path to pagekit.toml (auto-detected if omitted)
  #[arg(short, long, global = true)]
  config: Option<PathBuf>,
  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand)]
enum Command {
  /// List available templates
  List {
    /// Only templates this tier can use (free, premium)
    #[arg(long)]
    tier: Option<AccessTier>,
    /// Only templates in this category
    #[arg(long)]
    category: Option<String>,
  },
  /// Show the editable fields of a template
  Fields {
    id: String,
    /// Print the field list as JSON
    #[arg(long)]
    json: bool,
  },
  /// Read one value from a content tree
  Get {
    id: String,
    /// Path such as `hero.title` or `logos[0].logoUrl`
    path: String,
    /// Content JSON file (template defaults if omitted)
    #[arg(long)]
    content: Option<PathBuf>,
  },
  /// Write one value and print (or save) the updated content tree
  Set {
    id: String,
    path: String,
    /// JSON value; anything that does not parse is taken as a string
    value: String,
    #[arg(long)]
    content: Option<PathBuf>,
    /// Write the updated content here instead of stdout
    #[arg(short, long)]
    out: Option<PathBuf>,
  },
  /// Render a template to HTML
  Render {
    id: String,
    #[arg(long)]
    content: Option<PathBuf>,
    #[arg(short, long)]
    out: Option<PathBuf>,
  },
  /// Render with embedded content and write the page plus its manifest
  Publish {
    id: String,
    #[arg(long)]
    content: Option<PathBuf>,
    /// Output directory (publish.out_dir if omitted)
    #[arg(long)]
    out_dir: Option<PathBuf>,
  },
  /// Check templates for skeleton slots their default data does not fill
  Check { id: Option<String> },
}

fn main() {
  if let Err(err) = run(Cli::parse()) {
    ui::fail(&format!("{err:#}"));
    std::process::exit(1);
  }
}

fn run(cli: Cli) -> Result<()> {
  let project = Project::load(cli.config)?;

  match cli.command {
    Command::List { tier, category } => commands::run_list(&project, tier, category.as_deref()),
    Command::Fields { id, json } => commands::run_fields(&project, &id, json),
    Command::Get { id, path, content } => {
      commands::run_get(&project, &id, &path, content.as_deref())
    }
    Command::Set { id, path, value, content, out } => {
      commands::run_set(&project, &id, &path, &value, content.as_deref(), out)
    }
    Command::Render { id, content, out } => {
      commands::run_render(&project, &id, content.as_deref(), out)
    }
    Command::Publish { id, content, out_dir } => {
      commands::run_publish(&project, &id, content.as_deref(), out_dir)
    }
    Command::Check { id } => commands::run_check(&project, id.as_deref()),
  }
}
