//! # Report Module
//!
//! This module captures a structured result for every file the hook looks
//! at, rather than silently swallowing skip reasons. The collected reports
//! drive the terminal summary and can optionally be written out as JSON via
//! `--report-json`.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Outcome of processing a single file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FileOutcome {
  /// The header was inserted (or would be, in dry-run mode).
  Inserted,
  /// The file's extension is not in the supported set.
  SkippedUnsupported,
  /// The file is not staged as newly added, or its status is unknown.
  SkippedNotAdded,
  /// The file already carries the header.
  SkippedHasHeader,
  /// Reading or writing the file failed.
  Failed,
}

/// Information about a processed file for reporting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileReport {
  /// Path to the file
  #[serde(with = "path_serialization")]
  pub path: PathBuf,
  /// What happened to the file
  pub outcome: FileOutcome,
  /// Additional detail, currently only set for failures
  #[serde(skip_serializing_if = "Option::is_none")]
  pub detail: Option<String>,
}

impl FileReport {
  pub fn new(path: &Path, outcome: FileOutcome) -> Self {
    Self {
      path: path.to_path_buf(),
      outcome,
      detail: None,
    }
  }

  pub fn failed(path: &Path, detail: String) -> Self {
    Self {
      path: path.to_path_buf(),
      outcome: FileOutcome::Failed,
      detail: Some(detail),
    }
  }
}

/// Helper module for serializing/deserializing PathBuf
mod path_serialization {
  use std::path::PathBuf;

  use serde::{Deserialize, Deserializer, Serializer};

  pub fn serialize<S>(path: &std::path::Path, serializer: S) -> Result<S::Ok, S::Error>
  where
    S: Serializer,
  {
    serializer.serialize_str(&path.to_string_lossy())
  }

  pub fn deserialize<'de, D>(deserializer: D) -> Result<PathBuf, D::Error>
  where
    D: Deserializer<'de>,
  {
    let s = String::deserialize(deserializer)?;
    Ok(PathBuf::from(s))
  }
}

/// Aggregate counts for one hook invocation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunSummary {
  pub total: usize,
  pub inserted: usize,
  pub skipped_unsupported: usize,
  pub skipped_not_added: usize,
  pub skipped_has_header: usize,
  pub failed: usize,
  pub duration_ms: u128,
}

impl RunSummary {
  /// Build a summary from the collected per-file reports.
  pub fn from_reports(reports: &[FileReport], elapsed: Duration) -> Self {
    let mut summary = Self {
      total: reports.len(),
      duration_ms: elapsed.as_millis(),
      ..Self::default()
    };

    for report in reports {
      match report.outcome {
        FileOutcome::Inserted => summary.inserted += 1,
        FileOutcome::SkippedUnsupported => summary.skipped_unsupported += 1,
        FileOutcome::SkippedNotAdded => summary.skipped_not_added += 1,
        FileOutcome::SkippedHasHeader => summary.skipped_has_header += 1,
        FileOutcome::Failed => summary.failed += 1,
      }
    }

    summary
  }
}

/// Full JSON report payload.
#[derive(Debug, Serialize)]
struct JsonReport<'a> {
  summary: &'a RunSummary,
  files: &'a [FileReport],
}

/// Write the run report as pretty-printed JSON.
///
/// # Parameters
///
/// * `output_path` - Where to write the report
/// * `reports` - Per-file reports collected during the run
/// * `summary` - Aggregate counts for the run
pub fn write_json_report(output_path: &Path, reports: &[FileReport], summary: &RunSummary) -> Result<()> {
  let payload = JsonReport {
    summary,
    files: reports,
  };

  let content = serde_json::to_string_pretty(&payload).context("Failed to serialize report")?;

  fs::write(output_path, content).with_context(|| format!("Failed to write report to {}", output_path.display()))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_summary_counts_outcomes() {
    let reports = vec![
      FileReport::new(Path::new("a.c"), FileOutcome::Inserted),
      FileReport::new(Path::new("b.py"), FileOutcome::SkippedUnsupported),
      FileReport::new(Path::new("c.cpp"), FileOutcome::SkippedNotAdded),
      FileReport::new(Path::new("d.h"), FileOutcome::SkippedHasHeader),
      FileReport::failed(Path::new("e.hpp"), "unreadable".to_string()),
      FileReport::new(Path::new("f.ino"), FileOutcome::Inserted),
    ];

    let summary = RunSummary::from_reports(&reports, Duration::from_millis(12));

    assert_eq!(summary.total, 6);
    assert_eq!(summary.inserted, 2);
    assert_eq!(summary.skipped_unsupported, 1);
    assert_eq!(summary.skipped_not_added, 1);
    assert_eq!(summary.skipped_has_header, 1);
    assert_eq!(summary.failed, 1);
    assert_eq!(summary.duration_ms, 12);
  }

  #[test]
  fn test_json_report_round_trips_outcome_names() {
    let report = FileReport::new(Path::new("sensor.cpp"), FileOutcome::SkippedHasHeader);
    let json = serde_json::to_string(&report).expect("serialize");

    assert!(json.contains("skipped-has-header"));
    assert!(json.contains("sensor.cpp"));

    let back: FileReport = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back.outcome, FileOutcome::SkippedHasHeader);
  }

  #[test]
  fn test_write_json_report() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let output = dir.path().join("report.json");

    let reports = vec![FileReport::new(Path::new("a.c"), FileOutcome::Inserted)];
    let summary = RunSummary::from_reports(&reports, Duration::from_millis(1));

    write_json_report(&output, &reports, &summary)?;

    let content = std::fs::read_to_string(&output)?;
    let parsed: serde_json::Value = serde_json::from_str(&content)?;
    assert_eq!(parsed["summary"]["inserted"], 1);
    assert_eq!(parsed["files"][0]["outcome"], "inserted");
    Ok(())
  }
}
