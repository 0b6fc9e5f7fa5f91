//! # Processor Module
//!
//! This module contains the core per-file pipeline of the hook: extension
//! gate, staged-status gate, header detection, header synthesis, rewrite,
//! and re-stage. Files are processed strictly sequentially and
//! independently; an error on one file never blocks the rest of the batch,
//! and no error escapes the per-file step.

use std::path::{Path, PathBuf};

use tracing::{debug, trace};

use crate::config::HookConfig;
use crate::detection::{BlockHeaderDetector, HeaderDetector};
use crate::header::HeaderData;
use crate::report::{FileOutcome, FileReport};
use crate::{git, info_log, rewriter, verbose_log};

/// Processor for handling header insertion on staged files.
///
/// The `Processor` is responsible for:
/// - Gating files by extension and staged status
/// - Checking for an existing header (idempotency)
/// - Synthesizing and inserting the header block
/// - Re-staging rewritten files
/// - Collecting a structured report per file
pub struct Processor {
  /// Resolved author/contact/extension configuration.
  config: HookConfig,

  /// Header detector used as the idempotency guard.
  detector: Box<dyn HeaderDetector>,

  /// When set, run every gate but write nothing and touch no index.
  dry_run: bool,

  /// Per-file reports collected during the run.
  pub file_reports: Vec<FileReport>,
}

impl Processor {
  /// Creates a new processor.
  ///
  /// # Parameters
  ///
  /// * `config` - Resolved configuration for the run
  /// * `dry_run` - Report what would change without modifying anything
  /// * `detector` - Optional detector override; defaults to [`BlockHeaderDetector`]
  pub fn new(config: HookConfig, dry_run: bool, detector: Option<Box<dyn HeaderDetector>>) -> Self {
    let detector = detector.unwrap_or_else(|| Box::new(BlockHeaderDetector::new()));

    Self {
      config,
      detector,
      dry_run,
      file_reports: Vec::new(),
    }
  }

  /// Process every file in the list, returning how many had a header
  /// inserted.
  ///
  /// Files are handled sequentially and independently. A structured
  /// [`FileReport`] is recorded for each, including the skip reason when
  /// nothing was done.
  pub fn process(&mut self, files: &[PathBuf]) -> usize {
    let mut inserted = 0;

    for path in files {
      let report = self.process_file(path);
      if report.outcome == FileOutcome::Inserted {
        inserted += 1;
      }
      self.file_reports.push(report);
    }

    inserted
  }

  /// Run the full pipeline on a single file.
  ///
  /// Every failure degrades to a skip or a `Failed` report; this function
  /// never returns an error, honoring the hook contract that a commit is
  /// never blocked.
  fn process_file(&self, path: &Path) -> FileReport {
    if !self.config.supports(path) {
      trace!("Skipping {} (unsupported extension)", path.display());
      return FileReport::new(path, FileOutcome::SkippedUnsupported);
    }

    // Only files staged as newly added get a header. An unknown status
    // (not a repository, query failure) counts as "not added".
    match git::staged_added(path) {
      Ok(true) => {}
      Ok(false) => {
        trace!("Skipping {} (not staged as added)", path.display());
        return FileReport::new(path, FileOutcome::SkippedNotAdded);
      }
      Err(e) => {
        debug!("Status probe failed for {}: {:#}", path.display(), e);
        return FileReport::new(path, FileOutcome::SkippedNotAdded);
      }
    }

    let raw = match rewriter::read_raw(path) {
      Ok(raw) => raw,
      Err(e) => {
        debug!("Read failed for {}: {:#}", path.display(), e);
        return FileReport::failed(path, format!("{e:#}"));
      }
    };

    if self.detector.has_header(&raw.text) {
      trace!("Skipping {} (header already present)", path.display());
      return FileReport::new(path, FileOutcome::SkippedHasHeader);
    }

    let filename = path.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default();
    let header = HeaderData::new(&filename, &self.config).render();
    let new_content = rewriter::insert_header(&raw, &header);

    if self.dry_run {
      verbose_log!("Dry run: would insert header into {}", path.display());
      return FileReport::new(path, FileOutcome::Inserted);
    }

    if let Err(e) = rewriter::write_atomic(path, &new_content) {
      debug!("Write failed for {}: {:#}", path.display(), e);
      return FileReport::failed(path, format!("{e:#}"));
    }

    // Re-staging keeps the index in sync with the rewritten working tree.
    // The file on disk is already correct, so a failure here is logged and
    // ignored.
    if let Err(e) = git::restage(path) {
      debug!("Re-stage failed for {}: {:#}", path.display(), e);
    }

    info_log!("Inserted header into: {}", path.display());

    FileReport::new(path, FileOutcome::Inserted)
  }
}
