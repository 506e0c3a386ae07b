/* src/server/content/rust/src/path.rs */

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// One traversal step into a content tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathStep {
  /// Object member access: `hero`
  Key(String),
  /// Array element access: `[2]`
  Index(usize),
}

impl PathStep {
  pub fn as_key(&self) -> Option<&str> {
    match self {
      PathStep::Key(k) => Some(k),
      PathStep::Index(_) => None,
    }
  }

  /// Container kind this step expects to traverse.
  pub(crate) fn container_name(&self) -> &'static str {
    match self {
      PathStep::Key(_) => "object",
      PathStep::Index(_) => "array",
    }
  }
}

/// A parsed address into a content tree, e.g. `services[2].iconUrl`.
///
/// Grammar: segments separated by `.`, each segment a key followed by any
/// number of `[n]` indices, or indices alone (`[0].title` addresses a root
/// array). The empty string is the root.
///
/// Only keys accepted by [`Path::is_plain_key`] survive a print/parse round
/// trip; others can be built with [`Path::key`] but print ambiguously.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Path {
  steps: Vec<PathStep>,
}

impl Path {
  pub fn root() -> Self {
    Self::default()
  }

  pub fn parse(input: &str) -> Result<Self, PathError> {
    Parser { input, pos: 0 }.parse()
  }

  /// Whether `key` prints and parses back as one key step. The empty key
  /// and keys containing `.`, `[` or `]` do not.
  pub fn is_plain_key(key: &str) -> bool {
    !key.is_empty() && !key.contains(['.', '[', ']'])
  }

  /// Append a key step (builder style).
  #[must_use]
  pub fn key(mut self, key: impl Into<String>) -> Self {
    self.steps.push(PathStep::Key(key.into()));
    self
  }

  /// Append an index step (builder style).
  #[must_use]
  pub fn index(mut self, index: usize) -> Self {
    self.steps.push(PathStep::Index(index));
    self
  }

  pub fn steps(&self) -> &[PathStep] {
    &self.steps
  }

  pub fn len(&self) -> usize {
    self.steps.len()
  }

  pub fn is_root(&self) -> bool {
    self.steps.is_empty()
  }

  pub fn is_empty(&self) -> bool {
    self.is_root()
  }

  /// Last key step, ignoring trailing indices: `logos[2]` -> `logos`.
  pub fn last_key(&self) -> Option<&str> {
    self.steps.iter().rev().find_map(PathStep::as_key)
  }

  /// The first `len` steps of this path.
  pub fn prefix(&self, len: usize) -> Path {
    Path { steps: self.steps[..len.min(self.steps.len())].to_vec() }
  }
}

impl fmt::Display for Path {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for (i, step) in self.steps.iter().enumerate() {
      match step {
        PathStep::Key(k) if i == 0 => f.write_str(k)?,
        PathStep::Key(k) => write!(f, ".{k}")?,
        PathStep::Index(n) => write!(f, "[{n}]")?,
      }
    }
    Ok(())
  }
}

impl FromStr for Path {
  type Err = PathError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Path::parse(s)
  }
}

impl Serialize for Path {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(self)
  }
}

impl<'de> Deserialize<'de> for Path {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    let raw = String::deserialize(deserializer)?;
    Path::parse(&raw).map_err(serde::de::Error::custom)
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathErrorKind {
  /// `a..b`, a leading or trailing `.`
  EmptySegment,
  /// `a[1`
  UnclosedBracket,
  /// `a[]`, `a[x]`, or an index that does not fit in `usize`
  InvalidIndex,
  /// A character that cannot appear at this position, e.g. `a[0]b` or `a]`
  UnexpectedChar(char),
}

/// Malformed path string, with the byte offset where parsing stopped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathError {
  pub input: String,
  pub position: usize,
  pub kind: PathErrorKind,
}

impl fmt::Display for PathError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let what = match &self.kind {
      PathErrorKind::EmptySegment => "empty segment".to_string(),
      PathErrorKind::UnclosedBracket => "unclosed `[`".to_string(),
      PathErrorKind::InvalidIndex => "index must be a non-negative integer".to_string(),
      PathErrorKind::UnexpectedChar(c) => format!("unexpected `{c}`"),
    };
    write!(f, "invalid path \"{}\" at offset {}: {what}", self.input, self.position)
  }
}

impl std::error::Error for PathError {}

struct Parser<'a> {
  input: &'a str,
  pos: usize,
}

impl<'a> Parser<'a> {
  fn parse(mut self) -> Result<Path, PathError> {
    let mut steps = Vec::new();
    if self.input.is_empty() {
      return Ok(Path { steps });
    }

    loop {
      let segment_start = self.pos;
      let key = self.read_key();
      if !key.is_empty() {
        steps.push(PathStep::Key(key.to_string()));
      }
      while self.peek() == Some('[') {
        steps.push(PathStep::Index(self.read_index()?));
      }
      if self.pos == segment_start {
        // Nothing consumed: either `..`, a leading `.`, or a stray `]`
        return match self.peek() {
          Some(']') => Err(self.error(PathErrorKind::UnexpectedChar(']'))),
          _ => Err(self.error(PathErrorKind::EmptySegment)),
        };
      }

      match self.peek() {
        None => return Ok(Path { steps }),
        Some('.') => {
          self.pos += 1;
          if self.peek().is_none() {
            return Err(self.error(PathErrorKind::EmptySegment));
          }
        }
        Some(c) => return Err(self.error(PathErrorKind::UnexpectedChar(c))),
      }
    }
  }

  fn peek(&self) -> Option<char> {
    self.input[self.pos..].chars().next()
  }

  fn read_key(&mut self) -> &'a str {
    let input = self.input;
    let rest = &input[self.pos..];
    let len = rest.find(['.', '[', ']']).unwrap_or(rest.len());
    let start = self.pos;
    self.pos += len;
    &input[start..self.pos]
  }

  fn read_index(&mut self) -> Result<usize, PathError> {
    // Caller guarantees the current char is `[`
    let input = self.input;
    let open = self.pos;
    self.pos += 1;
    let rest = &input[self.pos..];
    let Some(close) = rest.find(']') else {
      self.pos = open;
      return Err(self.error(PathErrorKind::UnclosedBracket));
    };
    let digits = &rest[..close];
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
      return Err(self.error(PathErrorKind::InvalidIndex));
    }
    let index = digits.parse::<usize>().map_err(|_| self.error(PathErrorKind::InvalidIndex))?;
    self.pos += close + 1;
    Ok(index)
  }

  fn error(&self, kind: PathErrorKind) -> PathError {
    PathError { input: self.input.to_string(), position: self.pos, kind }
  }
}
