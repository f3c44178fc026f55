//! Batch driver: walk an input file line by line and import each record.

use std::{
  fs::File,
  io::{BufWriter, Write},
  path::Path,
};

use indicatif::ProgressBar;
use tangle_core::{
  row::{Language, NewRiddle},
  store::WordStore,
};
use tangle_grammar::{parse_riddle, parse_simple, parse_tagged};

use crate::{
  Result,
  insert::{insert_category_line, insert_riddle_line},
};

/// The line grammar of an input file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
  /// `category -> term, term, ...`
  Simple,
  /// `[tag, tag] category -> term, term, ...`
  Tagged,
  /// `riddle -> w1, w2, w3, w4, w5, w6`
  Riddle,
}

/// Counts for one batch run. Every line lands in exactly one bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchReport {
  pub lines:           usize,
  pub blank:           usize,
  pub imported:        usize,
  pub parse_failures:  usize,
  pub insert_failures: usize,
}

impl BatchReport {
  pub fn failed(&self) -> usize { self.parse_failures + self.insert_failures }
}

enum LineOutcome {
  Blank,
  Imported,
  Malformed(tangle_grammar::Error),
  Failed(String),
}

// ─── Importer ────────────────────────────────────────────────────────────────

/// Imports one file's worth of lines into a [`WordStore`].
///
/// Lines are processed strictly in order, one insert at a time. A line that
/// fails to parse is written verbatim to the error log; a line whose inserts
/// fail has its diagnostic written instead. Neither stops the batch.
pub struct Importer<'a, S> {
  store:    &'a S,
  format:   Format,
  language: Language,
  progress: ProgressBar,
}

impl<'a, S: WordStore> Importer<'a, S> {
  pub fn new(store: &'a S, format: Format) -> Self {
    Self {
      store,
      format,
      language: Language::default(),
      progress: ProgressBar::hidden(),
    }
  }

  /// Language written on tag rows (tagged format only).
  pub fn language(mut self, language: Language) -> Self {
    self.language = language;
    self
  }

  /// Progress bar advanced once per line; its message is the failure count.
  pub fn progress(mut self, progress: ProgressBar) -> Self {
    self.progress = progress;
    self
  }

  /// Import every line of `input`, appending failures to `error_log`.
  ///
  /// `error_log` is flushed after every entry. Only a write error on
  /// `error_log` aborts the run.
  pub async fn run<W: Write>(
    &self,
    input: &str,
    error_log: &mut W,
  ) -> Result<BatchReport> {
    self.progress.set_length(input.lines().count() as u64);
    let mut report = BatchReport::default();

    for (index, raw) in input.lines().enumerate() {
      report.lines += 1;
      match self.import_line(raw).await {
        LineOutcome::Blank => report.blank += 1,
        LineOutcome::Imported => report.imported += 1,
        LineOutcome::Malformed(err) => {
          tracing::warn!(line = index + 1, error = %err, "skipping malformed line");
          writeln!(error_log, "{raw}")?;
          error_log.flush()?;
          report.parse_failures += 1;
        }
        LineOutcome::Failed(message) => {
          tracing::warn!(line = index + 1, "{message}");
          writeln!(error_log, "{message}")?;
          error_log.flush()?;
          report.insert_failures += 1;
        }
      }
      self.progress.set_message(format!("{} failed", report.failed()));
      self.progress.inc(1);
    }

    self
      .progress
      .finish_with_message(format!("{} failed", report.failed()));
    Ok(report)
  }

  /// Like [`run`](Self::run), with the error log written to `path`.
  ///
  /// The file is created fresh, truncating anything left by an earlier run.
  pub async fn run_to_file(
    &self,
    input: &str,
    path: impl AsRef<Path>,
  ) -> Result<BatchReport> {
    let mut log = BufWriter::new(File::create(path)?);
    let report = self.run(input, &mut log).await?;
    log.flush()?;
    Ok(report)
  }

  async fn import_line(&self, line: &str) -> LineOutcome {
    if line.trim().is_empty() {
      return LineOutcome::Blank;
    }

    match self.format {
      Format::Simple | Format::Tagged => {
        let parsed = if self.format == Format::Simple {
          parse_simple(line)
        } else {
          parse_tagged(line)
        };
        let parsed = match parsed {
          Ok(parsed) => parsed,
          Err(err) => return LineOutcome::Malformed(err),
        };
        match insert_category_line(self.store, &parsed, self.language).await {
          Ok(inserted) => {
            tracing::info!(
              id = inserted.category_id,
              "inserted category \"{}\" ({} terms, {} tags)",
              parsed.category,
              inserted.terms,
              inserted.tags
            );
            LineOutcome::Imported
          }
          Err(err) => LineOutcome::Failed(err.to_string()),
        }
      }
      Format::Riddle => {
        let parsed = match parse_riddle(line) {
          Ok(parsed) => parsed,
          Err(err) => return LineOutcome::Malformed(err),
        };
        let riddle = NewRiddle::new(parsed.riddle, parsed.words);
        let text = riddle.riddle.clone();
        match insert_riddle_line(self.store, riddle).await {
          Ok(()) => {
            tracing::info!("inserted riddle \"{text}\"");
            LineOutcome::Imported
          }
          Err(err) => LineOutcome::Failed(err.to_string()),
        }
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::testing::{Call, MemoryStore};

  async fn run(
    store: &MemoryStore,
    format: Format,
    input: &str,
  ) -> (BatchReport, String) {
    let mut log = Vec::new();
    let report = Importer::new(store, format)
      .run(input, &mut log)
      .await
      .unwrap();
    (report, String::from_utf8(log).unwrap())
  }

  // ── Simple ────────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn simple_file_inserts_category_then_terms_with_returned_id() {
    let store = MemoryStore::default();
    let (report, log) = run(&store, Format::Simple, "fruit -> apple, banana").await;

    assert_eq!(store.calls(), vec![
      Call::Category("fruit".into()),
      Call::Term("apple".into(), 100),
      Call::Term("banana".into(), 100),
    ]);
    assert_eq!(report.imported, 1);
    assert_eq!(report.failed(), 0);
    assert!(log.is_empty());
  }

  #[tokio::test]
  async fn simple_malformed_line_is_logged_and_batch_continues() {
    let store = MemoryStore::default();
    let input = "no arrow here\ncolors -> red, blue\n";
    let (report, log) = run(&store, Format::Simple, input).await;

    assert_eq!(log, "no arrow here\n");
    assert_eq!(report.parse_failures, 1);
    assert_eq!(report.imported, 1);
    assert_eq!(store.calls()[0], Call::Category("colors".into()));
  }

  // ── Tagged ────────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn tagged_file_writes_tags_after_terms() {
    let store = MemoryStore::default();
    let (report, _) = run(&store, Format::Tagged, "[Food] Fruit (sweet) -> Apple").await;

    assert_eq!(report.imported, 1);
    assert_eq!(store.calls(), vec![
      Call::Category("fruit".into()),
      Call::Term("apple".into(), 100),
      Call::Tag("food".into(), 100, Language::Hebrew),
    ]);
  }

  #[tokio::test]
  async fn blank_lines_are_skipped_without_log_entries() {
    let store = MemoryStore::default();
    let input = "\n[a] x -> 1\n   \n\n[b] y -> 2\n";
    let (report, log) = run(&store, Format::Tagged, input).await;

    assert_eq!(report.lines, 5);
    assert_eq!(report.blank, 3);
    assert_eq!(report.imported, 2);
    assert!(log.is_empty());
  }

  #[tokio::test]
  async fn malformed_tagged_lines_are_written_verbatim() {
    let store = MemoryStore::default();
    let input = "garbage line\n[a] x -> 1\nno brackets -> here\n";
    let (report, log) = run(&store, Format::Tagged, input).await;

    assert_eq!(log, "garbage line\nno brackets -> here\n");
    assert_eq!(report.parse_failures, 2);
    assert_eq!(report.imported, 1);
  }

  #[tokio::test]
  async fn insert_failures_write_their_diagnostic() {
    let store = MemoryStore::failing(&["banana"]);
    let input = "[food] fruit -> apple, banana, cherry\n[food] veg -> leek\n";
    let (report, log) = run(&store, Format::Tagged, input).await;

    assert_eq!(log, "error inserting term \"banana\": rejected \"banana\"\n");
    assert_eq!(report.insert_failures, 1);
    assert_eq!(report.imported, 1);
    // the next line still runs with its own category id.
    assert!(store.calls().contains(&Call::Term("leek".into(), 101)));
  }

  #[tokio::test]
  async fn tag_language_is_configurable() {
    let store = MemoryStore::default();
    let mut log = Vec::new();
    Importer::new(&store, Format::Tagged)
      .language(Language::English)
      .run("[t] c -> x", &mut log)
      .await
      .unwrap();
    assert!(store.calls().contains(&Call::Tag("t".into(), 100, Language::English)));
  }

  // ── Error log ─────────────────────────────────────────────────────────────

  /// Writer that counts flushes and what was visible at each one.
  #[derive(Default)]
  struct FlushCounter {
    buf:     Vec<u8>,
    flushed: Vec<String>,
  }

  impl Write for FlushCounter {
    fn write(&mut self, data: &[u8]) -> std::io::Result<usize> {
      self.buf.extend_from_slice(data);
      Ok(data.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
      self.flushed.push(String::from_utf8_lossy(&self.buf).into_owned());
      Ok(())
    }
  }

  #[tokio::test]
  async fn error_log_is_flushed_after_each_entry() {
    let store = MemoryStore::failing(&["banana"]);
    let mut log = FlushCounter::default();
    Importer::new(&store, Format::Tagged)
      .run("garbage\n[a] x -> 1\n[a] fruit -> banana\n", &mut log)
      .await
      .unwrap();

    assert_eq!(log.flushed, vec![
      "garbage\n".to_string(),
      "garbage\nerror inserting term \"banana\": rejected \"banana\"\n".to_string(),
    ]);
  }

  #[tokio::test]
  async fn error_log_file_is_truncated_and_holds_failures() {
    let path = std::env::temp_dir().join(format!(
      "tangle-import-errors-{}.txt",
      std::process::id()
    ));
    std::fs::write(&path, "stale entry from an earlier run\n").unwrap();

    let store = MemoryStore::default();
    let report = Importer::new(&store, Format::Tagged)
      .run_to_file("not a tagged line\n[a] x -> 1\n", &path)
      .await
      .unwrap();
    let contents = std::fs::read_to_string(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(contents, "not a tagged line\n");
    assert_eq!(report.parse_failures, 1);
    assert_eq!(report.imported, 1);
  }

  #[tokio::test]
  async fn error_log_file_is_emptied_by_a_clean_run() {
    let path = std::env::temp_dir().join(format!(
      "tangle-import-clean-{}.txt",
      std::process::id()
    ));
    std::fs::write(&path, "stale\n").unwrap();

    let store = MemoryStore::default();
    Importer::new(&store, Format::Simple)
      .run_to_file("fruit -> apple\n", &path)
      .await
      .unwrap();
    let contents = std::fs::read_to_string(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert!(contents.is_empty(), "{contents:?}");
  }

  // ── Riddles ───────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn riddles_insert_one_row_per_line() {
    let store = MemoryStore::default();
    let input = "Why? -> a, b, c, d, e, f\nshort -> a, b, c, d, e\nhow? -> u, v, w, x, y, z\n";
    let (report, log) = run(&store, Format::Riddle, input).await;

    assert_eq!(report.imported, 2);
    assert_eq!(report.parse_failures, 1);
    assert_eq!(log, "short -> a, b, c, d, e\n");

    let calls = store.calls();
    assert_eq!(calls.len(), 2);
    match &calls[0] {
      Call::Riddle(r) => {
        assert_eq!(r.riddle, "why?");
        assert_eq!(r.words(), ["a", "b", "c", "d", "e", "f"]);
      }
      other => panic!("unexpected call {other:?}"),
    }
  }

  #[tokio::test]
  async fn riddle_insert_failure_is_reported() {
    let store = MemoryStore::failing(&["why?"]);
    let (report, log) = run(&store, Format::Riddle, "why? -> a, b, c, d, e, f").await;
    assert_eq!(report.insert_failures, 1);
    assert_eq!(log, "error inserting riddle \"why?\": rejected \"why?\"\n");
  }
}
