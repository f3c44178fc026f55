//! Row types — one struct per database table.
//!
//! `New*` structs are the insert payloads; they serialise to exactly the
//! column set the REST endpoint expects. Rows are never updated or deleted by
//! this workspace, so only [`Category`] has a read-back shape: its generated
//! `id` is needed to link child rows.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

use crate::{Error, Result};

/// Database-assigned primary key.
pub type RowId = i64;

/// Number of answer words attached to every riddle.
pub const RIDDLE_WORDS: usize = 6;

// ─── Language ────────────────────────────────────────────────────────────────

/// Language label stored on every tag row.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Default,
  Serialize,
  Deserialize,
  Display,
  AsRefStr,
  EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Language {
  #[default]
  Hebrew,
  English,
}

impl Language {
  /// Parse a language name, case-insensitively.
  pub fn parse(s: &str) -> Result<Self> {
    s.trim()
      .parse()
      .map_err(|_| Error::UnknownLanguage(s.to_string()))
  }
}

// ─── Categories ──────────────────────────────────────────────────────────────

/// Insert payload for `categories`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewCategory {
  pub category: String,
}

/// A persisted category row, as returned by the insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
  pub id:       RowId,
  pub category: String,
}

// ─── Terms and tags ──────────────────────────────────────────────────────────

/// Insert payload for `terms`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewTerm {
  pub term:        String,
  pub category_id: RowId,
}

/// Insert payload for `tags`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewTag {
  pub tag:         String,
  pub category_id: RowId,
  pub language:    Language,
}

// ─── Riddles ─────────────────────────────────────────────────────────────────

/// Insert payload for `riddles`: a prompt and its six answer words.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewRiddle {
  pub riddle: String,
  pub word_1: String,
  pub word_2: String,
  pub word_3: String,
  pub word_4: String,
  pub word_5: String,
  pub word_6: String,
}

impl NewRiddle {
  pub fn new(riddle: impl Into<String>, words: [String; RIDDLE_WORDS]) -> Self {
    let [word_1, word_2, word_3, word_4, word_5, word_6] = words;
    Self {
      riddle: riddle.into(),
      word_1,
      word_2,
      word_3,
      word_4,
      word_5,
      word_6,
    }
  }

  /// The answer words in column order.
  pub fn words(&self) -> [&str; RIDDLE_WORDS] {
    [
      &self.word_1,
      &self.word_2,
      &self.word_3,
      &self.word_4,
      &self.word_5,
      &self.word_6,
    ]
  }
}
