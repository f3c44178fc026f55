//! Parsers for the three line formats.

use std::{borrow::Cow, sync::LazyLock};

use regex::Regex;
use tangle_core::row::RIDDLE_WORDS;

use crate::{
  CategoryLine, RiddleLine,
  error::{Error, Result},
};

const ARROW: &str = "->";

/// Separator between terms in the simple and riddle formats.
const COMMA_SPACE: &str = ", ";

static ASIDE: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"\(.*?\)").expect("aside pattern compiles"));

static TAGGED: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"^\s*\[([^\]]*)\]\s*(\S.*?)\s*->(.*)$")
    .expect("tagged line pattern compiles")
});

// ─── Helpers ─────────────────────────────────────────────────────────────────

fn normalize(s: &str) -> String { s.trim().to_lowercase() }

fn split_normalized(s: &str, sep: &str) -> Vec<String> {
  s.split(sep).map(normalize).collect()
}

/// Remove every parenthesised substring (non-greedy) from `line`.
pub fn strip_asides(line: &str) -> Cow<'_, str> { ASIDE.replace_all(line, "") }

// ─── Simple ──────────────────────────────────────────────────────────────────

/// Parse `category -> term, term, ...`.
///
/// The line is split once on `->`; terms are separated by `", "`.
pub fn parse_simple(line: &str) -> Result<CategoryLine> {
  let (category, terms) = line
    .split_once(ARROW)
    .ok_or_else(|| Error::MissingArrow(line.to_string()))?;

  Ok(CategoryLine {
    tags:     Vec::new(),
    category: normalize(category),
    terms:    split_normalized(terms, COMMA_SPACE),
  })
}

// ─── Tagged ──────────────────────────────────────────────────────────────────

/// Parse `[tag, tag] category -> term, term, ...`.
///
/// A trailing line terminator is ignored, and parenthesised asides are
/// stripped before matching. Tags and terms are separated by `,`; empty
/// entries are dropped. The category must contain at least one non-space
/// character.
pub fn parse_tagged(line: &str) -> Result<CategoryLine> {
  let stripped = strip_asides(line.trim_end_matches(['\r', '\n']));
  let caps = TAGGED
    .captures(&stripped)
    .ok_or_else(|| Error::Malformed(line.to_string()))?;

  let list = |s: &str| -> Vec<String> {
    s.split(',')
      .map(normalize)
      .filter(|item| !item.is_empty())
      .collect()
  };

  Ok(CategoryLine {
    tags:     list(&caps[1]),
    category: normalize(&caps[2]),
    terms:    list(&caps[3]),
  })
}

// ─── Riddle ──────────────────────────────────────────────────────────────────

/// Parse `riddle -> w1, w2, w3, w4, w5, w6`. Exactly six words are required.
pub fn parse_riddle(line: &str) -> Result<RiddleLine> {
  let (riddle, words) = line
    .split_once(ARROW)
    .ok_or_else(|| Error::MissingArrow(line.to_string()))?;

  let words: [String; RIDDLE_WORDS] = split_normalized(words, COMMA_SPACE)
    .try_into()
    .map_err(|found: Vec<String>| Error::WordCount {
      expected: RIDDLE_WORDS,
      found:    found.len(),
    })?;

  Ok(RiddleLine { riddle: normalize(riddle), words })
}
