//! Error types for the importers.

use thiserror::Error;

/// A failed insert, tagged with the step that failed.
///
/// Each variant carries the (lowercased) text of the row that was rejected;
/// the `Display` output is the diagnostic written to logs and error files.
#[derive(Debug, Error)]
pub enum InsertError<E> {
  #[error("error inserting category \"{category}\": {source}")]
  CategoryFailed { category: String, source: E },

  /// `index` is the zero-based position of the term on its line.
  #[error("error inserting term \"{term}\": {source}")]
  TermFailed { index: usize, term: String, source: E },

  /// `index` is the zero-based position of the tag on its line.
  #[error("error inserting tag \"{tag}\": {source}")]
  TagFailed { index: usize, tag: String, source: E },

  #[error("error inserting riddle \"{riddle}\": {source}")]
  RiddleFailed { riddle: String, source: E },
}

/// A batch-level failure. Per-line failures never surface here.
#[derive(Debug, Error)]
pub enum Error {
  #[error("writing error log: {0}")]
  ErrorLog(#[from] std::io::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
