/* src/server/injector/rust/src/lib.rs */

mod ast;
mod helpers;
mod parser;
mod render;
mod token;

pub use parser::{Diagnostic, DiagnosticKind};

use ast::Node;
use pagekit_content::{Path, PathStep};
use render::{render, Output, Scope};
use serde_json::Value;
use token::tokenize;

/// A parsed page skeleton: HTML with `<!--pk:...-->` directives.
///
/// Parse once, render many times against different content trees.
#[derive(Debug)]
pub struct Skeleton {
  nodes: Vec<Node>,
  diagnostics: Vec<Diagnostic>,
}

impl Skeleton {
  pub fn parse(source: &str) -> Self {
    let tokens = tokenize(source);
    let (nodes, diagnostics) = parser::parse(&tokens);
    Self { nodes, diagnostics }
  }

  pub fn render(&self, data: &Value) -> String {
    let mut out = Output::default();
    render(&self.nodes, Scope::root(data), &mut out);
    out.finish()
  }

  pub fn diagnostics(&self) -> &[Diagnostic] {
    &self.diagnostics
  }

  /// Root-scoped paths the skeleton reads, in document order. Paths relative
  /// to a loop element (`$`, `$$`, `$index`) are skipped.
  pub fn data_paths(&self) -> Vec<Path> {
    let mut paths = Vec::new();
    collect_paths(&self.nodes, &mut paths);
    paths
  }
}

fn is_scoped(path: &Path) -> bool {
  matches!(path.steps().first(), Some(PathStep::Key(k)) if k.starts_with('$'))
}

fn collect_paths(nodes: &[Node], out: &mut Vec<Path>) {
  for node in nodes {
    let (path, children): (Option<&Path>, Vec<&[Node]>) = match node {
      Node::Text(_) => (None, Vec::new()),
      Node::Slot { path, .. } | Node::Attr { path, .. } => (Some(path), Vec::new()),
      Node::If { path, then_nodes, else_nodes } => {
        (Some(path), vec![then_nodes.as_slice(), else_nodes.as_slice()])
      }
      Node::Each { path, body } => (Some(path), vec![body.as_slice()]),
    };
    if let Some(path) = path.filter(|p| !is_scoped(p)) {
      if !out.contains(path) {
        out.push(path.clone());
      }
    }
    for child in children {
      collect_paths(child, out);
    }
  }
}

/// Parse and render in one step.
pub fn inject(skeleton: &str, data: &Value) -> String {
  Skeleton::parse(skeleton).render(data)
}

/// Like [`inject`], also returning parse diagnostics.
pub fn inject_with_diagnostics(skeleton: &str, data: &Value) -> (String, Vec<Diagnostic>) {
  let parsed = Skeleton::parse(skeleton);
  let html = parsed.render(data);
  (html, parsed.diagnostics)
}

#[cfg(test)]
mod tests;
