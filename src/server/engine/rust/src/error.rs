/* src/server/engine/rust/src/error.rs */

use std::fmt;

use pagekit_content::ContentError;

use crate::template::AccessTier;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
  DuplicateTemplate(String),
  UnknownTemplate(String),
  /// Default data is not JSON, or not a JSON object.
  InvalidDefaultData { id: String, reason: String },
  /// Field override names a path that is malformed or matches no field.
  InvalidOverride { id: String, path: String, reason: String },
  /// Skeleton parse diagnostics, one message per problem.
  InvalidSkeleton { id: String, problems: Vec<String> },
  /// Template requires a higher access tier than the caller holds.
  Locked { id: String, required: AccessTier },
  /// Bulk edits must be a JSON object of `path -> value`.
  InvalidEdits(String),
  Content(ContentError),
}

impl fmt::Display for EngineError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      EngineError::DuplicateTemplate(id) => write!(f, "template \"{id}\" is registered twice"),
      EngineError::UnknownTemplate(id) => write!(f, "unknown template \"{id}\""),
      EngineError::InvalidDefaultData { id, reason } => {
        write!(f, "template \"{id}\": invalid default data: {reason}")
      }
      EngineError::InvalidOverride { id, path, reason } => {
        write!(f, "template \"{id}\": field override \"{path}\": {reason}")
      }
      EngineError::InvalidSkeleton { id, problems } => {
        write!(f, "template \"{id}\": invalid skeleton: {}", problems.join("; "))
      }
      EngineError::Locked { id, required } => {
        write!(f, "template \"{id}\" requires the {required} tier")
      }
      EngineError::InvalidEdits(reason) => write!(f, "invalid edits: {reason}"),
      EngineError::Content(err) => err.fmt(f),
    }
  }
}

impl std::error::Error for EngineError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      EngineError::Content(err) => Some(err),
      _ => None,
    }
  }
}

impl From<ContentError> for EngineError {
  fn from(err: ContentError) -> Self {
    EngineError::Content(err)
  }
}
