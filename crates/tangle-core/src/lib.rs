//! Core row types and the store trait for the Tangle word-association data.
//!
//! This crate is deliberately free of HTTP dependencies. The importers and the
//! REST backend both depend on it; it depends on nothing of theirs.

pub mod error;
pub mod row;
pub mod store;

pub use error::{Error, Result};
