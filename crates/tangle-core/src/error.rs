//! Error types for `tangle-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("unknown tag language: {0:?}")]
  UnknownLanguage(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
