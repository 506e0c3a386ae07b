/* src/server/engine/rust/src/session.rs */

use pagekit_content::{FieldDescriptor, Path};
use serde_json::Value;

use crate::error::EngineError;
use crate::publish::{self, PublishOptions, PublishedPage};
use crate::template::TemplateEntry;

/// Working copy of one template's content while a page is being edited.
///
/// The entry's default data is never touched; the session holds its own
/// clone and `&mut self` serializes every write.
#[derive(Debug, Clone)]
pub struct EditSession<'r> {
  entry: &'r TemplateEntry,
  content: Value,
}

impl<'r> EditSession<'r> {
  pub fn open(entry: &'r TemplateEntry) -> Self {
    Self { entry, content: entry.default_data().clone() }
  }

  /// Continue editing a previously saved tree.
  pub fn resume(entry: &'r TemplateEntry, content: Value) -> Self {
    Self { entry, content }
  }

  pub fn entry(&self) -> &'r TemplateEntry {
    self.entry
  }

  pub fn get(&self, path: &str) -> Option<&Value> {
    pagekit_content::get_deep(&self.content, path)
  }

  /// Current value of `field`, or its default when the path is gone.
  pub fn value_for<'a>(&'a self, field: &'a FieldDescriptor) -> &'a Value {
    field.path.resolve(&self.content).unwrap_or(&field.default_value)
  }

  pub fn set(&mut self, path: &str, value: Value) -> Result<(), EngineError> {
    pagekit_content::set_deep_mut(&mut self.content, path, value)?;
    Ok(())
  }

  /// Apply a `{ "path": value, ... }` object in key order. Stops at the
  /// first failing edit; the ones before it stay applied. Returns how many
  /// edits were applied.
  pub fn apply(&mut self, edits: &Value) -> Result<usize, EngineError> {
    let Value::Object(edits) = edits else {
      return Err(EngineError::InvalidEdits("expected an object of path -> value".to_string()));
    };
    let mut applied = 0;
    for (path, value) in edits {
      self.set(path, value.clone())?;
      applied += 1;
    }
    Ok(applied)
  }

  /// Restore the template default at `path`. `Ok(false)` when the default
  /// data has nothing there, in which case the content is left alone.
  pub fn reset(&mut self, path: &str) -> Result<bool, EngineError> {
    let path = Path::parse(path).map_err(pagekit_content::ContentError::from)?;
    let Some(default) = path.resolve(self.entry.default_data()) else {
      return Ok(false);
    };
    match path.resolve_mut(&mut self.content) {
      Some(slot) => *slot = default.clone(),
      None => path.assign(&mut self.content, default.clone())?,
    }
    Ok(true)
  }

  pub fn reset_all(&mut self) {
    self.content = self.entry.default_data().clone();
  }

  pub fn is_dirty(&self) -> bool {
    &self.content != self.entry.default_data()
  }

  pub fn content(&self) -> &Value {
    &self.content
  }

  pub fn into_content(self) -> Value {
    self.content
  }

  pub fn render(&self) -> String {
    publish::render(self.entry, &self.content)
  }

  pub fn publish(&self, opts: &PublishOptions) -> PublishedPage {
    publish::publish(self.entry, &self.content, opts)
  }
}
