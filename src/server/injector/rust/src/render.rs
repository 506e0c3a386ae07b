/* src/server/injector/rust/src/render.rs */

use std::borrow::Cow;

use pagekit_content::{resolve_steps, Path, PathStep};
use serde_json::Value;

use crate::ast::Node;
use crate::helpers::{escape_html, first_tag_name_end, is_boolean_attr, is_truthy, stringify};

/// Lookup scope. Inside `each`, `$` is the current element, `$$` the element
/// of the enclosing loop and `$index` the position.
#[derive(Clone, Copy)]
pub(crate) struct Scope<'a> {
  root: &'a Value,
  item: Option<&'a Value>,
  outer: Option<&'a Value>,
  index: Option<usize>,
}

impl<'a> Scope<'a> {
  pub(crate) fn root(root: &'a Value) -> Self {
    Self { root, item: None, outer: None, index: None }
  }

  fn lookup(&self, path: &Path) -> Option<Cow<'a, Value>> {
    let steps = path.steps();
    match steps.first() {
      Some(PathStep::Key(k)) if k == "$" => resolve_steps(self.item?, &steps[1..]).map(Cow::Borrowed),
      Some(PathStep::Key(k)) if k == "$$" => {
        resolve_steps(self.outer?, &steps[1..]).map(Cow::Borrowed)
      }
      Some(PathStep::Key(k)) if k == "$index" && steps.len() == 1 => {
        self.index.map(|i| Cow::Owned(Value::from(i)))
      }
      _ => path.resolve(self.root).map(Cow::Borrowed),
    }
  }
}

/// Rendered markup plus attributes waiting for the next opening tag.
#[derive(Default)]
pub(crate) struct Output {
  html: String,
  pending_attrs: Vec<(String, String)>,
}

impl Output {
  pub(crate) fn finish(self) -> String {
    self.html
  }

  fn push_markup(&mut self, markup: &str) {
    if self.pending_attrs.is_empty() {
      self.html.push_str(markup);
      return;
    }
    let Some(at) = first_tag_name_end(markup) else {
      self.html.push_str(markup);
      return;
    };
    self.html.push_str(&markup[..at]);
    for (name, value) in self.pending_attrs.drain(..) {
      self.html.push_str(&format!(r#" {name}="{value}""#));
    }
    self.html.push_str(&markup[at..]);
  }
}

pub(crate) fn render(nodes: &[Node], scope: Scope<'_>, out: &mut Output) {
  for node in nodes {
    match node {
      Node::Text(text) => out.push_markup(text),

      Node::Slot { path, raw } => {
        if let Some(value) = scope.lookup(path) {
          let text = stringify(&value);
          if *raw {
            out.push_markup(&text);
          } else {
            out.html.push_str(&escape_html(&text));
          }
        }
      }

      Node::Attr { path, name } => {
        let Some(value) = scope.lookup(path) else {
          continue;
        };
        if is_boolean_attr(name) {
          if is_truthy(&value) {
            out.pending_attrs.push((name.clone(), String::new()));
          }
        } else if !value.is_null() {
          out.pending_attrs.push((name.clone(), escape_html(&stringify(&value))));
        }
      }

      Node::If { path, then_nodes, else_nodes } => {
        out.pending_attrs.clear();
        let truthy = scope.lookup(path).is_some_and(|v| is_truthy(&v));
        render(if truthy { then_nodes } else { else_nodes }, scope, out);
      }

      Node::Each { path, body } => {
        out.pending_attrs.clear();
        // Owned values come only from `$index`, never an array
        if let Some(Cow::Borrowed(Value::Array(items))) = scope.lookup(path) {
          for (i, item) in items.iter().enumerate() {
            let child = Scope { root: scope.root, item: Some(item), outer: scope.item, index: Some(i) };
            render(body, child, out);
          }
        }
      }
    }
  }
  // Attributes never outlive the block that declared them
  out.pending_attrs.clear();
}
