//! # Output Module
//!
//! This module centralizes the user-facing terminal output of the hook.
//! Output stays deliberately small: a pre-commit hook's stdout is shown to
//! the committer, so it should only say what changed and why.

use std::path::Path;

use owo_colors::{OwoColorize, Stream};

use crate::logging::is_quiet;
use crate::report::{FileOutcome, FileReport, RunSummary};

/// Symbols used in output
pub mod symbols {
  /// Header inserted
  pub const SUCCESS: &str = "\u{2713}"; // ✓
  /// Processing failure
  pub const FAILURE: &str = "\u{2717}"; // ✗
}

/// Print a blank line for visual separation (respects quiet mode).
pub fn print_blank_line() {
  if !is_quiet() {
    println!();
  }
}

/// Print the list of files that had headers inserted.
///
/// In dry-run mode the heading changes to reflect that nothing was written.
pub fn print_inserted_files(reports: &[FileReport], repo_root: Option<&Path>, dry_run: bool) {
  let inserted: Vec<_> = reports.iter().filter(|r| r.outcome == FileOutcome::Inserted).collect();
  if is_quiet() || inserted.is_empty() {
    return;
  }

  let count = inserted.len();
  let verb = if dry_run { "Would insert header into" } else { "Inserted header into" };
  let header = format!(
    "{} {} {} {}:",
    symbols::SUCCESS.if_supports_color(Stream::Stdout, |s| s.green()),
    verb,
    count,
    if count == 1 { "file" } else { "files" }
  );
  println!("{}", header);

  for report in inserted {
    println!("  {}", make_relative_path(&report.path, repo_root));
  }
}

/// Print the list of files that failed to process.
///
/// Failures never affect the exit code, but hiding them entirely would make
/// the hook impossible to debug.
pub fn print_failed_files(reports: &[FileReport], repo_root: Option<&Path>) {
  let failed: Vec<_> = reports.iter().filter(|r| r.outcome == FileOutcome::Failed).collect();
  if is_quiet() || failed.is_empty() {
    return;
  }

  let count = failed.len();
  let header = format!(
    "{} Skipped {} {} due to errors:",
    symbols::FAILURE.if_supports_color(Stream::Stdout, |s| s.red()),
    count,
    if count == 1 { "file" } else { "files" }
  );
  println!("{}", header);

  for report in failed {
    let display_path = make_relative_path(&report.path, repo_root);
    match &report.detail {
      Some(detail) => println!("  {} ({})", display_path, detail),
      None => println!("  {}", display_path),
    }
  }
}

/// Print the run summary line.
pub fn print_summary(summary: &RunSummary) {
  if is_quiet() {
    return;
  }

  let skipped = summary.skipped_unsupported + summary.skipped_not_added + summary.skipped_has_header;
  println!(
    "{} checked, {} inserted, {} skipped, {} failed in {}ms",
    summary.total,
    summary
      .inserted
      .if_supports_color(Stream::Stdout, |n| n.green()),
    skipped,
    summary.failed,
    summary.duration_ms
  );
}

/// Render a path relative to the repository root for display, falling back
/// to the path as given.
fn make_relative_path(path: &Path, repo_root: Option<&Path>) -> String {
  repo_root
    .and_then(|root| pathdiff::diff_paths(path, root))
    .filter(|rel| !rel.as_os_str().is_empty() && !rel.starts_with(".."))
    .unwrap_or_else(|| path.to_path_buf())
    .display()
    .to_string()
}

#[cfg(test)]
mod tests {
  use std::path::PathBuf;

  use super::*;

  #[test]
  fn test_make_relative_path_inside_root() {
    let root = PathBuf::from("/repo");
    let path = PathBuf::from("/repo/src/sensor.cpp");
    assert_eq!(make_relative_path(&path, Some(&root)), "src/sensor.cpp");
  }

  #[test]
  fn test_make_relative_path_outside_root_falls_back() {
    let root = PathBuf::from("/repo");
    let path = PathBuf::from("/elsewhere/sensor.cpp");
    assert_eq!(make_relative_path(&path, Some(&root)), "/elsewhere/sensor.cpp");
  }

  #[test]
  fn test_make_relative_path_without_root() {
    let path = PathBuf::from("sensor.cpp");
    assert_eq!(make_relative_path(&path, None), "sensor.cpp");
  }
}
