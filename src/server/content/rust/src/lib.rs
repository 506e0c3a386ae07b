/* src/server/content/rust/src/lib.rs */

//! Content trees are the JSON documents a page template is filled from.
//! This crate addresses into them by path and infers the flat list of
//! editable fields a page builder shows for a tree.

mod deep;
mod error;
mod fields;
mod path;

pub use deep::{get_deep, resolve_steps, set_deep_mut};
pub use error::ContentError;
pub use fields::{
  build_fields, build_fields_at, first_unaddressable_key, infer_kind, label_for, FieldDescriptor,
  FieldKind, IMAGE_HINTS,
};
pub use path::{Path, PathError, PathErrorKind, PathStep};

pub use serde_json::Value;

#[cfg(test)]
mod tests;
