//! Error types for the line grammars.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
  #[error("missing `->` separator: {0:?}")]
  MissingArrow(String),

  #[error("line does not match `[tags] category -> terms`: {0:?}")]
  Malformed(String),

  #[error("expected {expected} words after `->`, found {found}")]
  WordCount { expected: usize, found: usize },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
