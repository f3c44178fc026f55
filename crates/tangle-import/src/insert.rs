//! Per-line insert sequences.
//!
//! A category line is written parent-first: the category row, then its terms
//! in order, then its tags in order. Child rows use the id returned by the
//! category insert, so nothing is attempted for a line whose category insert
//! failed. The first failing child stops the line; later terms and all tags
//! are skipped.

use tangle_core::{
  row::{Language, NewCategory, NewRiddle, NewTag, NewTerm, RowId},
  store::WordStore,
};
use tangle_grammar::CategoryLine;

use crate::error::InsertError;

/// What a successful category line wrote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InsertedCategory {
  pub category_id: RowId,
  pub terms:       usize,
  pub tags:        usize,
}

/// Insert one category line: the category, then terms, then tags.
///
/// Tags are written with `language`.
pub async fn insert_category_line<S: WordStore>(
  store: &S,
  line: &CategoryLine,
  language: Language,
) -> Result<InsertedCategory, InsertError<S::Error>> {
  let category = store
    .insert_category(NewCategory { category: line.category.clone() })
    .await
    .map_err(|source| InsertError::CategoryFailed {
      category: line.category.clone(),
      source,
    })?;

  for (index, term) in line.terms.iter().enumerate() {
    store
      .insert_term(NewTerm { term: term.clone(), category_id: category.id })
      .await
      .map_err(|source| InsertError::TermFailed {
        index,
        term: term.clone(),
        source,
      })?;
  }

  for (index, tag) in line.tags.iter().enumerate() {
    store
      .insert_tag(NewTag {
        tag: tag.clone(),
        category_id: category.id,
        language,
      })
      .await
      .map_err(|source| InsertError::TagFailed {
        index,
        tag: tag.clone(),
        source,
      })?;
  }

  Ok(InsertedCategory {
    category_id: category.id,
    terms:       line.terms.len(),
    tags:        line.tags.len(),
  })
}

/// Insert one riddle row.
pub async fn insert_riddle_line<S: WordStore>(
  store: &S,
  riddle: NewRiddle,
) -> Result<(), InsertError<S::Error>> {
  let text = riddle.riddle.clone();
  store
    .insert_riddle(riddle)
    .await
    .map_err(|source| InsertError::RiddleFailed { riddle: text, source })
}
