//! PostgREST backend for the Tangle word store.
//!
//! [`RestStore`] implements [`tangle_core::store::WordStore`] by POSTing one
//! JSON row per call to `<url>/rest/v1/<table>`, authenticating with the
//! project API key as both the `apikey` header and a bearer token.

mod config;
mod store;

pub mod error;

pub use config::{KEY_VAR, RestConfig, URL_VAR};
pub use error::{Error, Result};
pub use store::RestStore;
