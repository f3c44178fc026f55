//! Connection settings for the hosted database.

use std::fmt;

use crate::{Error, Result};

/// Environment variable holding the project URL.
pub const URL_VAR: &str = "VITE_SUPABASE_URL";
/// Environment variable holding the project API key.
pub const KEY_VAR: &str = "VITE_SUPABASE_KEY";

/// Project URL and API key. Both are required and non-empty.
#[derive(Clone)]
pub struct RestConfig {
  pub url: String,
  pub key: String,
}

impl RestConfig {
  pub fn new(url: impl Into<String>, key: impl Into<String>) -> Result<Self> {
    let (url, key) = (url.into(), key.into());
    if url.trim().is_empty() {
      return Err(Error::MissingConfig(URL_VAR));
    }
    if key.trim().is_empty() {
      return Err(Error::MissingConfig(KEY_VAR));
    }
    Ok(Self { url, key })
  }

  /// Read [`URL_VAR`] and [`KEY_VAR`] from the process environment.
  pub fn from_env() -> Result<Self> {
    Self::from_lookup(|name| std::env::var(name).ok())
  }

  fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
    let url = lookup(URL_VAR).ok_or(Error::MissingConfig(URL_VAR))?;
    let key = lookup(KEY_VAR).ok_or(Error::MissingConfig(KEY_VAR))?;
    Self::new(url, key)
  }
}

// The key never appears in logs.
impl fmt::Debug for RestConfig {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("RestConfig")
      .field("url", &self.url)
      .field("key", &"<redacted>")
      .finish()
  }
}
