//! Error type for `tangle-rest`.

use tangle_core::store::Table;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// A required configuration value is unset or empty.
  #[error("{0} is not set")]
  MissingConfig(&'static str),

  #[error("http error: {0}")]
  Http(#[from] reqwest::Error),

  /// The endpoint answered with a non-success status.
  #[error("{message} (status {status})")]
  Api { status: u16, message: String },

  /// An insert asked for the created row but the response held none.
  #[error("insert into {0} returned no rows")]
  EmptyInsertResponse(Table),

  #[error("json error: {0}")]
  Json(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
