//! Health-check handler for the hosted database.
//!
//! [`ping`] issues one authenticated `GET` against the project URL and folds
//! the outcome into a [`PingResponse`]; it never returns an error. [`router`]
//! exposes the same handler over HTTP for schedulers that poke a URL.

use std::sync::Arc;

use axum::{
  Json, Router,
  extract::State,
  http::StatusCode,
  response::{IntoResponse, Response},
  routing::get,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tangle_rest::RestStore;

// ─── Configuration ────────────────────────────────────────────────────────────

/// Listen address for `tangle-ping serve`, deserialised with the `config` crate.
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
  pub host: String,
  pub port: u16,
}

// ─── Handler ──────────────────────────────────────────────────────────────────

/// Status/body pair returned by the handler.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PingResponse {
  #[serde(rename = "statusCode")]
  pub status_code: u16,
  pub body:        Value,
}

impl PingResponse {
  pub fn is_success(&self) -> bool { self.status_code == 200 }
}

/// Ping the project URL once. No retries.
///
/// A 2xx response yields `200` with the parsed JSON body. A network error, a
/// non-2xx status, or an unparseable body yields `500` with
/// `"Request failed: <message>"`.
pub async fn ping(store: &RestStore) -> PingResponse {
  match store.ping().await {
    Ok(body) => {
      tracing::info!(at = %Utc::now().to_rfc3339(), "database pinged successfully");
      PingResponse { status_code: 200, body }
    }
    Err(err) => {
      tracing::warn!(error = %err, "database ping failed");
      PingResponse {
        status_code: 500,
        body:        Value::String(format!("Request failed: {err}")),
      }
    }
  }
}

impl IntoResponse for PingResponse {
  fn into_response(self) -> Response {
    let status =
      StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(self.body)).into_response()
  }
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// `GET /api/ping`. Other methods get `405 Method Not Allowed`.
pub fn router(store: Arc<RestStore>) -> Router {
  Router::new()
    .route("/api/ping", get(ping_handler))
    .with_state(store)
}

async fn ping_handler(State(store): State<Arc<RestStore>>) -> PingResponse {
  ping(&store).await
}
