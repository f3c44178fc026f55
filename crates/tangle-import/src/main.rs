//! `tangle-import` — load word-association data files into the hosted database.
//!
//! # Usage
//!
//! ```
//! tangle-import simple  --input data.txt
//! tangle-import tagged  --input data.txt --error-log errors.txt
//! tangle-import riddles --input data/riddles.txt
//! ```
//!
//! Credentials come from `VITE_SUPABASE_URL` / `VITE_SUPABASE_KEY` (or
//! `--url` / `--key`). The run exits non-zero only for configuration and I/O
//! errors; per-line failures are logged and counted.

use std::{io, path::PathBuf};

use anyhow::{Context as _, Result};
use clap::{Args, Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use tangle_core::row::Language;
use tangle_import::{Format, Importer};
use tangle_rest::{KEY_VAR, RestConfig, RestStore, URL_VAR};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "tangle-import", version, about = "Import Tangle data files")]
struct Cli {
  /// Project URL of the hosted database.
  #[arg(long, env = URL_VAR, hide_env_values = true)]
  url: Option<String>,

  /// Project API key.
  #[arg(long, env = KEY_VAR, hide_env_values = true)]
  key: Option<String>,

  /// Hide the progress bar.
  #[arg(short, long, global = true)]
  quiet: bool,

  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
  /// `category -> term, term, ...`
  Simple {
    #[command(flatten)]
    files: Files,
  },
  /// `[tag, tag] category -> term, term, ...`
  Tagged {
    #[command(flatten)]
    files: Files,

    /// Language written on every tag row.
    #[arg(long, default_value = "Hebrew", value_parser = Language::parse)]
    language: Language,
  },
  /// `riddle -> w1, w2, w3, w4, w5, w6`
  Riddles {
    /// Input file, one riddle per line.
    #[arg(short, long, default_value = "data/riddles.txt")]
    input: PathBuf,

    /// File receiving malformed lines and insert diagnostics.
    #[arg(short, long)]
    error_log: Option<PathBuf>,
  },
}

#[derive(Args, Debug)]
struct Files {
  /// Input file, one category per line.
  #[arg(short, long, default_value = "data.txt")]
  input: PathBuf,

  /// File receiving malformed lines and insert diagnostics.
  #[arg(short, long)]
  error_log: Option<PathBuf>,
}

// ─── Entry point ──────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  // Fail before touching any input if credentials are missing.
  let config = RestConfig::new(
    cli.url.unwrap_or_default(),
    cli.key.unwrap_or_default(),
  )
  .context("missing database configuration")?;
  let store = RestStore::new(config).context("failed to build HTTP client")?;

  let (format, input, error_log, language) = match cli.command {
    Command::Simple { files } => (Format::Simple, files.input, files.error_log, None),
    Command::Tagged { files, language } => (
      Format::Tagged,
      files.input,
      // The tagged importer always keeps an error log.
      Some(files.error_log.unwrap_or_else(|| PathBuf::from("errors.txt"))),
      Some(language),
    ),
    Command::Riddles { input, error_log } => (Format::Riddle, input, error_log, None),
  };

  let text = tokio::fs::read_to_string(&input)
    .await
    .with_context(|| format!("reading input file {}", input.display()))?;

  let progress = if cli.quiet {
    ProgressBar::hidden()
  } else {
    let bar = ProgressBar::new(0);
    bar.set_style(
      ProgressStyle::with_template("{pos:>6}/{len:<6} [{bar:40}] {msg}")?
        .progress_chars("█ "),
    );
    bar
  };

  let mut importer = Importer::new(&store, format).progress(progress);
  if let Some(language) = language {
    importer = importer.language(language);
  }

  let report = match &error_log {
    Some(path) => importer
      .run_to_file(&text, path)
      .await
      .with_context(|| format!("writing error log {}", path.display()))?,
    None => importer.run(&text, &mut io::sink()).await?,
  };

  tracing::info!(
    input = %input.display(),
    lines = report.lines,
    imported = report.imported,
    blank = report.blank,
    parse_failures = report.parse_failures,
    insert_failures = report.insert_failures,
    "import finished"
  );
  Ok(())
}
