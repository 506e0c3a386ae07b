/* src/server/content/rust/src/error.rs */

use std::fmt;

use crate::path::{Path, PathError};

/// Write-side failures. Reads never fail: a missing path resolves to `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
  InvalidPath(PathError),
  /// A step found a container of the wrong kind (or a scalar) at `path`.
  PathConflict { path: Path, expected: &'static str, found: &'static str },
  /// Index past the end of the array at `path`; only `index == len` appends.
  IndexOutOfBounds { path: Path, index: usize, len: usize },
}

fn display_path(path: &Path) -> String {
  if path.is_root() { "<root>".to_string() } else { path.to_string() }
}

impl fmt::Display for ContentError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ContentError::InvalidPath(err) => err.fmt(f),
      ContentError::PathConflict { path, expected, found } => {
        write!(f, "path conflict at {}: expected {expected}, found {found}", display_path(path))
      }
      ContentError::IndexOutOfBounds { path, index, len } => {
        write!(f, "index {index} out of bounds at {} (len {len})", display_path(path))
      }
    }
  }
}

impl std::error::Error for ContentError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      ContentError::InvalidPath(err) => Some(err),
      _ => None,
    }
  }
}

impl From<PathError> for ContentError {
  fn from(err: PathError) -> Self {
    ContentError::InvalidPath(err)
  }
}
