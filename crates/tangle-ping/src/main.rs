//! `tangle-ping` — keep-alive probe for the hosted database.
//!
//! `tangle-ping once` runs the handler a single time, prints the
//! `{statusCode, body}` JSON and exits non-zero on failure; suitable for cron.
//! `tangle-ping serve` exposes `GET /api/ping` over HTTP.
//!
//! Credentials come from `VITE_SUPABASE_URL` / `VITE_SUPABASE_KEY`; either
//! one missing aborts immediately.

use std::{path::PathBuf, process::ExitCode, sync::Arc};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tangle_ping::{ServerConfig, ping, router};
use tangle_rest::{RestConfig, RestStore};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Tangle database health check")]
struct Cli {
  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand)]
enum Command {
  /// Ping once and print the result.
  Once,
  /// Serve the handler over HTTP.
  Serve {
    /// Path to the TOML configuration file (`host`, `port`).
    #[arg(short, long, default_value = "tangle.toml")]
    config: PathBuf,
  },
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  let rest = RestConfig::from_env().context("missing database configuration")?;
  let store = RestStore::new(rest).context("failed to build HTTP client")?;

  match cli.command {
    Command::Once => {
      let resp = ping(&store).await;
      println!("{}", serde_json::to_string_pretty(&resp)?);
      Ok(if resp.is_success() { ExitCode::SUCCESS } else { ExitCode::FAILURE })
    }
    Command::Serve { config: config_path } => {
      let settings = config::Config::builder()
        .set_default("host", "127.0.0.1")?
        .set_default("port", 3000)?
        .add_source(config::File::from(config_path).required(false))
        .add_source(config::Environment::with_prefix("TANGLE"))
        .build()
        .context("failed to read config file")?;
      let server_cfg: ServerConfig = settings
        .try_deserialize()
        .context("failed to deserialise ServerConfig")?;

      let app = router(Arc::new(store)).layer(TraceLayer::new_for_http());
      let address = format!("{}:{}", server_cfg.host, server_cfg.port);

      tracing::info!("Listening on http://{address}");
      let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("failed to bind {address}"))?;
      axum::serve(listener, app).await.context("server error")?;
      Ok(ExitCode::SUCCESS)
    }
  }
}
