//! In-memory [`WordStore`] that records every call, for tests.

use std::{
  collections::HashSet,
  sync::{
    Mutex,
    atomic::{AtomicI64, Ordering},
  },
};

use tangle_core::{
  row::{Category, Language, NewCategory, NewRiddle, NewTag, NewTerm, RowId},
  store::WordStore,
};
use thiserror::Error;

/// One attempted insert, in call order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
  Category(String),
  Term(String, RowId),
  Tag(String, RowId, Language),
  Riddle(NewRiddle),
}

#[derive(Debug, Error)]
#[error("rejected {0:?}")]
pub struct Rejected(pub String);

/// Records calls and rejects any row whose text is in `failing`.
/// Category ids are handed out from 100 upwards.
pub struct MemoryStore {
  calls:   Mutex<Vec<Call>>,
  failing: HashSet<String>,
  next_id: AtomicI64,
}

impl Default for MemoryStore {
  fn default() -> Self { Self::failing(&[]) }
}

impl MemoryStore {
  pub fn failing(texts: &[&str]) -> Self {
    Self {
      calls:   Mutex::new(Vec::new()),
      failing: texts.iter().map(|s| s.to_string()).collect(),
      next_id: AtomicI64::new(100),
    }
  }

  pub fn calls(&self) -> Vec<Call> { self.calls.lock().unwrap().clone() }

  fn record(&self, call: Call, text: &str) -> Result<(), Rejected> {
    self.calls.lock().unwrap().push(call);
    if self.failing.contains(text) {
      Err(Rejected(text.to_string()))
    } else {
      Ok(())
    }
  }
}

impl WordStore for MemoryStore {
  type Error = Rejected;

  async fn insert_category(&self, input: NewCategory) -> Result<Category, Rejected> {
    self.record(Call::Category(input.category.clone()), &input.category)?;
    Ok(Category {
      id:       self.next_id.fetch_add(1, Ordering::SeqCst),
      category: input.category,
    })
  }

  async fn insert_term(&self, input: NewTerm) -> Result<(), Rejected> {
    self.record(Call::Term(input.term.clone(), input.category_id), &input.term)
  }

  async fn insert_tag(&self, input: NewTag) -> Result<(), Rejected> {
    self.record(
      Call::Tag(input.tag.clone(), input.category_id, input.language),
      &input.tag,
    )
  }

  async fn insert_riddle(&self, input: NewRiddle) -> Result<(), Rejected> {
    let text = input.riddle.clone();
    self.record(Call::Riddle(input), &text)
  }
}
