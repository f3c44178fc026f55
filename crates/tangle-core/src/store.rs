//! The `WordStore` trait and the table names it writes to.
//!
//! The trait is implemented by storage backends (e.g. `tangle-rest`). The
//! importers depend on this abstraction, not on any concrete backend, and
//! receive the store as an explicit handle scoped to one batch run.

use std::future::Future;

use strum::{AsRefStr, Display};

use crate::row::{Category, NewCategory, NewRiddle, NewTag, NewTerm};

// ─── Tables ──────────────────────────────────────────────────────────────────

/// The tables owned by the hosted database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum Table {
  Categories,
  Terms,
  Tags,
  Riddles,
}

// ─── Trait ───────────────────────────────────────────────────────────────────

/// Abstraction over an insert-only word-association store.
///
/// Every call is one row and one round-trip; there is no batching and no
/// cross-call transaction. A failed call leaves earlier rows in place.
pub trait WordStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Insert a category and return the persisted row with its generated id.
  fn insert_category(
    &self,
    input: NewCategory,
  ) -> impl Future<Output = Result<Category, Self::Error>> + Send + '_;

  /// Insert one term referencing an existing category.
  fn insert_term(
    &self,
    input: NewTerm,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  /// Insert one tag referencing an existing category.
  fn insert_tag(
    &self,
    input: NewTag,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  /// Insert one riddle row.
  fn insert_riddle(
    &self,
    input: NewRiddle,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;
}
