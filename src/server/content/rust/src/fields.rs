/* src/server/content/rust/src/fields.rs */

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::path::{Path, PathStep};

/// Substrings of a field's last key that mark it as an image field.
pub const IMAGE_HINTS: &[&str] = &["url", "image", "img", "logo", "icon", "avatar"];

/// Editor widget for one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
  Text,
  Textarea,
  Image,
  Number,
}

impl FieldKind {
  pub fn as_str(self) -> &'static str {
    match self {
      FieldKind::Text => "text",
      FieldKind::Textarea => "textarea",
      FieldKind::Image => "image",
      FieldKind::Number => "number",
    }
  }
}

impl fmt::Display for FieldKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for FieldKind {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "text" => Ok(FieldKind::Text),
      "textarea" => Ok(FieldKind::Textarea),
      "image" => Ok(FieldKind::Image),
      "number" => Ok(FieldKind::Number),
      other => Err(format!("unknown field type \"{other}\"")),
    }
  }
}

/// One editable leaf of a content tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDescriptor {
  pub path: Path,
  pub label: String,
  pub default_value: Value,
  #[serde(rename = "type")]
  pub kind: FieldKind,
}

impl FieldDescriptor {
  /// Descriptor with label and kind derived from `path`.
  pub fn infer(path: Path, default_value: Value) -> Self {
    let label = label_for(&path);
    let kind = infer_kind(&path);
    Self { path, label, default_value, kind }
  }
}

/// Flatten `tree` into one descriptor per leaf, depth-first in key order.
///
/// Members whose key is not a [`Path::is_plain_key`] are skipped with their
/// whole subtree: no path string could address them.
pub fn build_fields(tree: &Value) -> Vec<FieldDescriptor> {
  build_fields_at(tree, &Path::root())
}

/// Like [`build_fields`], with every path prefixed by `base`.
pub fn build_fields_at(tree: &Value, base: &Path) -> Vec<FieldDescriptor> {
  let mut out = Vec::new();
  collect(tree, base, &mut out);
  out
}

fn is_scalar(value: &Value) -> bool {
  !matches!(value, Value::Array(_) | Value::Object(_))
}

fn collect(value: &Value, path: &Path, out: &mut Vec<FieldDescriptor>) {
  match value {
    Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => {
      out.push(FieldDescriptor::infer(path.clone(), value.clone()));
    }
    Value::Array(items) if items.iter().all(is_scalar) => {
      for (i, item) in items.iter().enumerate() {
        out.push(FieldDescriptor::infer(path.clone().index(i), item.clone()));
      }
    }
    Value::Array(items) => {
      for (i, item) in items.iter().enumerate() {
        collect(item, &path.clone().index(i), out);
      }
    }
    Value::Object(map) => {
      for (key, child) in map.iter().filter(|(k, _)| Path::is_plain_key(k)) {
        collect(child, &path.clone().key(key.as_str()), out);
      }
    }
  }
}

/// First object key in `tree` a path cannot address, with the path of the
/// object holding it.
pub fn first_unaddressable_key(tree: &Value) -> Option<(Path, String)> {
  find_unaddressable(tree, &Path::root())
}

fn find_unaddressable(value: &Value, path: &Path) -> Option<(Path, String)> {
  match value {
    Value::Array(items) => {
      items.iter().enumerate().find_map(|(i, item)| find_unaddressable(item, &path.clone().index(i)))
    }
    Value::Object(map) => map.iter().find_map(|(key, child)| {
      if Path::is_plain_key(key) {
        find_unaddressable(child, &path.clone().key(key.as_str()))
      } else {
        Some((path.clone(), key.clone()))
      }
    }),
    _ => None,
  }
}

/// `image` when the last key contains an [`IMAGE_HINTS`] entry, else `text`.
///
/// Plain substring matching: `imageCountLimit` is an image field too.
pub fn infer_kind(path: &Path) -> FieldKind {
  let Some(key) = path.last_key() else {
    return FieldKind::Text;
  };
  let key = key.to_ascii_lowercase();
  if IMAGE_HINTS.iter().any(|hint| key.contains(hint)) { FieldKind::Image } else { FieldKind::Text }
}

/// Human label: `logos[2].logoUrl` -> `Logos 2 Logo Url`.
pub fn label_for(path: &Path) -> String {
  let mut words: Vec<String> = Vec::new();
  for step in path.steps() {
    match step {
      PathStep::Key(k) => words.extend(split_words(k)),
      PathStep::Index(i) => words.push(i.to_string()),
    }
  }
  words.iter().map(|w| capitalize(w)).collect::<Vec<_>>().join(" ")
}

// camelCase and whitespace boundaries
fn split_words(key: &str) -> Vec<String> {
  let mut words = Vec::new();
  let mut current = String::new();
  let mut prev: Option<char> = None;
  for ch in key.chars() {
    if ch.is_whitespace() {
      if !current.is_empty() {
        words.push(std::mem::take(&mut current));
      }
      prev = None;
      continue;
    }
    let boundary = ch.is_uppercase()
      && prev.is_some_and(|p| p.is_lowercase() || p.is_ascii_digit())
      && !current.is_empty();
    if boundary {
      words.push(std::mem::take(&mut current));
    }
    current.push(ch);
    prev = Some(ch);
  }
  if !current.is_empty() {
    words.push(current);
  }
  words
}

fn capitalize(word: &str) -> String {
  let mut chars = word.chars();
  match chars.next() {
    Some(first) => first.to_uppercase().chain(chars).collect(),
    None => String::new(),
  }
}
