//! [`RestStore`] — the PostgREST implementation of [`WordStore`].

use std::time::Duration;

use reqwest::{Client, RequestBuilder, Response, header};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tangle_core::{
  row::{Category, NewCategory, NewRiddle, NewTag, NewTerm},
  store::{Table, WordStore},
};

use crate::{Error, Result, config::RestConfig};

/// Shape of a PostgREST error body. Only `message` is relied upon.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
  message: String,
}

/// What an insert should send back.
#[derive(Debug, Clone, Copy)]
enum Returning {
  Minimal,
  Representation,
}

impl Returning {
  fn prefer(self) -> &'static str {
    match self {
      Self::Minimal => "return=minimal",
      Self::Representation => "return=representation",
    }
  }
}

// ─── Store ───────────────────────────────────────────────────────────────────

/// A word store backed by a hosted PostgREST endpoint.
///
/// Cheap to clone — the inner [`reqwest::Client`] is `Arc`-based.
#[derive(Clone, Debug)]
pub struct RestStore {
  client: Client,
  config: RestConfig,
}

impl RestStore {
  /// Build a store with its own HTTP client (30 s request timeout).
  pub fn new(config: RestConfig) -> Result<Self> {
    let client = Client::builder().timeout(Duration::from_secs(30)).build()?;
    Ok(Self::with_client(client, config))
  }

  /// Build a store around an existing HTTP client.
  pub fn with_client(client: Client, config: RestConfig) -> Self {
    Self { client, config }
  }

  fn table_url(&self, table: Table) -> String {
    format!("{}/rest/v1/{}", self.config.url.trim_end_matches('/'), table)
  }

  fn auth(&self, req: RequestBuilder) -> RequestBuilder {
    req
      .header("apikey", &self.config.key)
      .bearer_auth(&self.config.key)
      .header(header::CONTENT_TYPE, "application/json")
  }

  /// Turn a non-success response into [`Error::Api`], keeping the server's
  /// message when the body carries one.
  async fn check(resp: Response) -> Result<Response> {
    let status = resp.status();
    if status.is_success() {
      return Ok(resp);
    }
    let text = resp.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ApiErrorBody>(&text)
      .map(|body| body.message)
      .unwrap_or_else(|_| {
        if text.is_empty() {
          status.canonical_reason().unwrap_or("request failed").to_string()
        } else {
          text
        }
      });
    Err(Error::Api { status: status.as_u16(), message })
  }

  async fn insert<T: Serialize>(
    &self,
    table: Table,
    row: &T,
    returning: Returning,
  ) -> Result<Response> {
    tracing::debug!(%table, "insert");
    let resp = self
      .auth(self.client.post(self.table_url(table)))
      .header("Prefer", returning.prefer())
      .json(row)
      .send()
      .await?;
    Self::check(resp).await
  }

  /// `GET <url>` with the project credentials, returning the parsed JSON body.
  ///
  /// Used as a liveness probe for the hosted project.
  pub async fn ping(&self) -> Result<Value> {
    let resp = self
      .auth(self.client.get(&self.config.url))
      .send()
      .await?
      .error_for_status()?;
    Ok(resp.json().await?)
  }
}

impl WordStore for RestStore {
  type Error = Error;

  async fn insert_category(&self, input: NewCategory) -> Result<Category> {
    let resp = self
      .insert(Table::Categories, &input, Returning::Representation)
      .await?;
    let rows: Vec<Category> = serde_json::from_slice(&resp.bytes().await?)?;
    rows
      .into_iter()
      .next()
      .ok_or(Error::EmptyInsertResponse(Table::Categories))
  }

  async fn insert_term(&self, input: NewTerm) -> Result<()> {
    self.insert(Table::Terms, &input, Returning::Minimal).await?;
    Ok(())
  }

  async fn insert_tag(&self, input: NewTag) -> Result<()> {
    self.insert(Table::Tags, &input, Returning::Minimal).await?;
    Ok(())
  }

  async fn insert_riddle(&self, input: NewRiddle) -> Result<()> {
    self.insert(Table::Riddles, &input, Returning::Minimal).await?;
    Ok(())
  }
}
