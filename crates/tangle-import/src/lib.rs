//! Batch importers for the Tangle word-association tables.
//!
//! Each input file holds one record per line. The [`batch`] driver walks the
//! lines in order, parses each with the grammar for its [`Format`], and hands
//! the result to the [`insert`] orchestrator, which writes the parent row
//! first and its children after. Lines are independent: a failed line is
//! reported and the batch moves on.

pub mod batch;
pub mod error;
pub mod insert;

pub use batch::{BatchReport, Format, Importer};
pub use error::{Error, InsertError, Result};

#[cfg(test)]
mod testing;
