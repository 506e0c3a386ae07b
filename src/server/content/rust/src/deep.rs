/* src/server/content/rust/src/deep.rs */

use serde_json::{Map, Value};

use crate::error::ContentError;
use crate::path::{Path, PathStep};

/// Resolve `path` against `tree`. Malformed paths and missing steps both
/// yield `None`.
pub fn get_deep<'a>(tree: &'a Value, path: &str) -> Option<&'a Value> {
  Path::parse(path).ok()?.resolve(tree)
}

/// Write `value` at `path`, mutating `tree` in place.
///
/// Callers that need the original tree must clone it first. Missing or `null`
/// intermediates are created as the container the next step needs. An index
/// equal to the array length appends; anything past it is
/// [`ContentError::IndexOutOfBounds`]. A step that meets the wrong container
/// kind is [`ContentError::PathConflict`]. On error the tree is unchanged.
pub fn set_deep_mut(tree: &mut Value, path: &str, value: Value) -> Result<(), ContentError> {
  Path::parse(path)?.assign(tree, value)
}

pub(crate) fn kind_name(value: &Value) -> &'static str {
  match value {
    Value::Null => "null",
    Value::Bool(_) => "boolean",
    Value::Number(_) => "number",
    Value::String(_) => "string",
    Value::Array(_) => "array",
    Value::Object(_) => "object",
  }
}

fn empty_container(step: &PathStep) -> Value {
  match step {
    PathStep::Key(_) => Value::Object(Map::new()),
    PathStep::Index(_) => Value::Array(Vec::new()),
  }
}

/// Resolve a bare step sequence, e.g. the tail of a path after a scope key.
pub fn resolve_steps<'a>(tree: &'a Value, steps: &[PathStep]) -> Option<&'a Value> {
  steps.iter().try_fold(tree, |current, step| match (step, current) {
    (PathStep::Key(k), Value::Object(map)) => map.get(k),
    (PathStep::Index(i), Value::Array(items)) => items.get(*i),
    _ => None,
  })
}

impl Path {
  pub fn resolve<'a>(&self, tree: &'a Value) -> Option<&'a Value> {
    resolve_steps(tree, self.steps())
  }

  pub fn resolve_mut<'a>(&self, tree: &'a mut Value) -> Option<&'a mut Value> {
    let mut current = tree;
    for step in self.steps() {
      current = match (step, current) {
        (PathStep::Key(k), Value::Object(map)) => map.get_mut(k)?,
        (PathStep::Index(i), Value::Array(items)) => items.get_mut(*i)?,
        _ => return None,
      };
    }
    Some(current)
  }

  /// Structured form of [`set_deep_mut`].
  pub fn assign(&self, tree: &mut Value, value: Value) -> Result<(), ContentError> {
    self.check_writable(tree)?;

    let mut current = tree;
    for (depth, step) in self.steps().iter().enumerate() {
      if current.is_null() {
        *current = empty_container(step);
      }
      current = match (step, current) {
        (PathStep::Key(k), Value::Object(map)) => map.entry(k.clone()).or_insert(Value::Null),
        (PathStep::Index(i), Value::Array(items)) => {
          let len = items.len();
          if *i == len {
            items.push(Value::Null);
          }
          match items.get_mut(*i) {
            Some(slot) => slot,
            None => {
              return Err(ContentError::IndexOutOfBounds { path: self.prefix(depth), index: *i, len });
            }
          }
        }
        (step, other) => return Err(self.conflict(depth, step, other)),
      };
    }
    *current = value;
    Ok(())
  }

  /// Walk without mutating so a failing write leaves no half-built containers.
  fn check_writable(&self, tree: &Value) -> Result<(), ContentError> {
    let mut current = Some(tree);
    for (depth, step) in self.steps().iter().enumerate() {
      current = match (step, current) {
        // Absent or null: a fresh container gets created here
        (PathStep::Key(_), None | Some(Value::Null)) => None,
        (PathStep::Index(i), None | Some(Value::Null)) => {
          if *i > 0 {
            return Err(ContentError::IndexOutOfBounds { path: self.prefix(depth), index: *i, len: 0 });
          }
          None
        }
        (PathStep::Key(k), Some(Value::Object(map))) => map.get(k),
        (PathStep::Index(i), Some(Value::Array(items))) => {
          if *i > items.len() {
            return Err(ContentError::IndexOutOfBounds {
              path: self.prefix(depth),
              index: *i,
              len: items.len(),
            });
          }
          items.get(*i)
        }
        (step, Some(other)) => return Err(self.conflict(depth, step, other)),
      };
    }
    Ok(())
  }

  fn conflict(&self, depth: usize, step: &PathStep, found: &Value) -> ContentError {
    ContentError::PathConflict {
      path: self.prefix(depth),
      expected: step.container_name(),
      found: kind_name(found),
    }
  }
}
