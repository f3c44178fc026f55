//! Line grammars for the Tangle data files.
//!
//! Three one-record-per-line formats are supported:
//!
//! | Format | Shape |
//! |--------|-------|
//! | simple | `category -> term, term, ...` |
//! | tagged | `[tag, tag] category -> term, term, ...` (parenthesised asides ignored) |
//! | riddle | `riddle -> w1, w2, w3, w4, w5, w6` |
//!
//! Every parser is pure and returns an explicit `Result`, so an empty but
//! well-formed field is never confused with a line that failed to parse.
//! All extracted text is trimmed and lowercased.

mod parse;

pub mod error;

pub use error::{Error, Result};
pub use parse::{parse_riddle, parse_simple, parse_tagged, strip_asides};

use tangle_core::row::RIDDLE_WORDS;

/// A parsed category line. `tags` is always empty for the simple format.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CategoryLine {
  pub tags:     Vec<String>,
  pub category: String,
  pub terms:    Vec<String>,
}

/// A parsed riddle line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RiddleLine {
  pub riddle: String,
  pub words:  [String; RIDDLE_WORDS],
}
