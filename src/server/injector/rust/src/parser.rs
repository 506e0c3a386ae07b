/* src/server/injector/rust/src/parser.rs */

use std::fmt;

use pagekit_content::Path;

use crate::ast::Node;
use crate::helpers::first_tag_name_end;
use crate::token::Token;

/// Problem found while parsing a skeleton. Parsing is best-effort: the
/// skeleton still renders, minus the broken directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
  pub kind: DiagnosticKind,
  pub directive: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticKind {
  /// `else`, `endif:x` or `endeach` with no open block
  UnmatchedClose,
  /// `if:x` or `each:x` that reached the end of the skeleton
  UnclosedBlock,
  /// Directive path that does not parse; carries the parser message
  InvalidPath(String),
  /// `x:attr:name` with no opening tag after it in the same block
  DetachedAttr,
}

impl fmt::Display for Diagnostic {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let directive = &self.directive;
    match &self.kind {
      DiagnosticKind::UnmatchedClose => write!(f, "`{directive}` closes no open block"),
      DiagnosticKind::UnclosedBlock => write!(f, "`{directive}` is never closed"),
      DiagnosticKind::InvalidPath(reason) => write!(f, "`{directive}`: {reason}"),
      DiagnosticKind::DetachedAttr => write!(f, "`{directive}` has no tag to attach to"),
    }
  }
}

pub(crate) fn parse(tokens: &[Token<'_>]) -> (Vec<Node>, Vec<Diagnostic>) {
  let mut parser = Parser { tokens, pos: 0, diagnostics: Vec::new() };
  let (nodes, _) = parser.block(&|_| false);
  (nodes, parser.diagnostics)
}

fn is_close(directive: &str) -> bool {
  directive == "else" || directive == "endeach" || directive.starts_with("endif:")
}

// A block boundary ends the search: attributes never cross into or out of one
fn has_following_tag(rest: &[Node]) -> bool {
  for node in rest {
    match node {
      Node::Text(text) if first_tag_name_end(text).is_some() => return true,
      Node::Text(_) | Node::Slot { .. } | Node::Attr { .. } => {}
      Node::If { .. } | Node::Each { .. } => return false,
    }
  }
  false
}

struct Parser<'t, 'a> {
  tokens: &'t [Token<'a>],
  pos: usize,
  diagnostics: Vec<Diagnostic>,
}

impl<'a> Parser<'_, 'a> {
  /// Parse until a directive accepted by `stop` (consumed and returned) or EOF.
  fn block(&mut self, stop: &dyn Fn(&str) -> bool) -> (Vec<Node>, Option<&'a str>) {
    let mut nodes = Vec::new();

    while let Some(token) = self.tokens.get(self.pos) {
      self.pos += 1;
      let directive = match token {
        Token::Text(text) => {
          nodes.push(Node::Text((*text).to_string()));
          continue;
        }
        Token::Marker(directive) => *directive,
      };

      if stop(directive) {
        self.check_attrs(&nodes);
        return (nodes, Some(directive));
      }

      if let Some(raw) = directive.strip_prefix("if:") {
        let endif = format!("endif:{raw}");
        let (then_nodes, end) = self.block(&|d| d == "else" || d == endif);
        let (else_nodes, end) = if end == Some("else") {
          self.block(&|d| d == endif)
        } else {
          (Vec::new(), end)
        };
        if end.is_none() {
          self.report(DiagnosticKind::UnclosedBlock, directive);
        }
        if let Some(path) = self.path(directive, raw) {
          nodes.push(Node::If { path, then_nodes, else_nodes });
        }
      } else if let Some(raw) = directive.strip_prefix("each:") {
        let (body, end) = self.block(&|d| d == "endeach");
        if end.is_none() {
          self.report(DiagnosticKind::UnclosedBlock, directive);
        }
        if let Some(path) = self.path(directive, raw) {
          nodes.push(Node::Each { path, body });
        }
      } else if is_close(directive) {
        self.report(DiagnosticKind::UnmatchedClose, directive);
      } else if let Some((raw, name)) = directive.split_once(":attr:") {
        if let Some(path) = self.path(directive, raw) {
          nodes.push(Node::Attr { path, name: name.to_string() });
        }
      } else if let Some(raw) = directive.strip_suffix(":html") {
        if let Some(path) = self.path(directive, raw) {
          nodes.push(Node::Slot { path, raw: true });
        }
      } else if let Some(path) = self.path(directive, directive) {
        nodes.push(Node::Slot { path, raw: false });
      }
    }

    self.check_attrs(&nodes);
    (nodes, None)
  }

  fn check_attrs(&mut self, nodes: &[Node]) {
    for (i, node) in nodes.iter().enumerate() {
      if let Node::Attr { path, name } = node {
        if !has_following_tag(&nodes[i + 1..]) {
          self.report(DiagnosticKind::DetachedAttr, &format!("{path}:attr:{name}"));
        }
      }
    }
  }

  fn path(&mut self, directive: &str, raw: &str) -> Option<Path> {
    match Path::parse(raw) {
      Ok(path) => Some(path),
      Err(err) => {
        self.report(DiagnosticKind::InvalidPath(err.to_string()), directive);
        None
      }
    }
  }

  fn report(&mut self, kind: DiagnosticKind, directive: &str) {
    self.diagnostics.push(Diagnostic { kind, directive: directive.to_string() });
  }
}
