//! # Hook Command
//!
//! This module implements the hook's run command: resolve configuration,
//! process the file list handed over by pre-commit, and print what changed.
//! This is the default command when no subcommand is specified.
//!
//! The command always exits successfully, no matter how many files were
//! modified, skipped, or failed: a header hook must never block a commit.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;
use clap::Args;
use tracing::debug;

use crate::config::{HookConfig, load_config};
use crate::git;
use crate::logging::{ColorMode, init_tracing, set_quiet, set_verbose};
use crate::output::{print_blank_line, print_failed_files, print_inserted_files, print_summary};
use crate::processor::Processor;
use crate::report::{RunSummary, write_json_report};

/// Arguments for the hook run command
#[derive(Args, Debug, Default)]
pub struct HookArgs {
  /// Files to check, as passed by the pre-commit runner
  #[arg(required = false)]
  pub files: Vec<PathBuf>,

  /// Author name to place in the header
  #[arg(long, value_name = "NAME")]
  pub author: Option<String>,

  /// Contact email to place in the header
  #[arg(long, value_name = "EMAIL")]
  pub contact: Option<String>,

  /// Path to config file (default: .check-copyright.toml in the repo root)
  #[arg(long, value_name = "FILE")]
  pub config: Option<PathBuf>,

  /// Ignore config file even if present
  #[arg(long)]
  pub no_config: bool,

  /// Dry run mode: report what would change without writing anything
  #[arg(long)]
  pub dry_run: bool,

  /// Write a JSON report of per-file outcomes to the specified path
  #[arg(long, value_name = "OUTPUT")]
  pub report_json: Option<PathBuf>,

  /// Increase verbosity (-v info, -vv debug, -vvv trace)
  #[arg(short, long, action = clap::ArgAction::Count)]
  pub verbose: u8,

  /// Suppress all output except errors
  #[arg(short, long, conflicts_with = "verbose")]
  pub quiet: bool,

  /// Control when to use colored output (auto, never, always)
  #[arg(
    long,
    value_name = "WHEN",
    num_args = 0..=1,
    default_value_t = ColorMode::Auto,
    default_missing_value = "always",
    value_enum
  )]
  pub colors: ColorMode,
}

/// Run the hook with the given arguments.
///
/// Returns `Ok(())` in every case the hook contract allows: all failures
/// are reported on the terminal and in the collected file reports, never
/// through the exit code.
pub fn run_hook(args: HookArgs) -> Result<()> {
  // Initialize tracing subscriber for structured diagnostics
  init_tracing(args.quiet, args.verbose);

  // Set verbose mode for output formatting and the info_log! macro
  if args.verbose > 0 {
    set_verbose();
  } else if args.quiet {
    set_quiet();
  }
  args.colors.apply();

  if args.files.is_empty() {
    debug!("No files passed; nothing to do");
    return Ok(());
  }

  // The repository root anchors config discovery and relative-path display.
  // Not being in a repository is fine: the status probe will then gate
  // every file as not-added. An unreadable current directory degrades the
  // same way rather than surfacing a nonzero exit.
  let repo_root = match std::env::current_dir() {
    Ok(cwd) => match git::discover_repo_root(&cwd) {
      Ok(root) => root,
      Err(e) => {
        debug!("Repository discovery failed: {:#}", e);
        None
      }
    },
    Err(e) => {
      debug!("Could not determine current directory: {}", e);
      None
    }
  };

  // A malformed config file is reported but never blocks the commit; the
  // run continues with built-in defaults.
  let file_config = match load_config(args.config.as_deref(), repo_root.as_deref(), args.no_config) {
    Ok(config) => config,
    Err(e) => {
      eprintln!("ERROR: {e:#}");
      None
    }
  };

  let config = HookConfig::resolve(args.author, args.contact, file_config);
  debug!("Effective author: {}", config.author);

  let start_time = Instant::now();

  let mut processor = Processor::new(config, args.dry_run, None);
  let inserted = processor.process(&args.files);

  let elapsed = start_time.elapsed();
  debug!("Modified {} of {} files in {}ms", inserted, args.files.len(), elapsed.as_millis());

  let file_reports = std::mem::take(&mut processor.file_reports);
  let summary = RunSummary::from_reports(&file_reports, elapsed);

  print_inserted_files(&file_reports, repo_root.as_deref(), args.dry_run);
  print_failed_files(&file_reports, repo_root.as_deref());
  print_blank_line();
  print_summary(&summary);

  // Generate JSON report if requested
  if let Some(ref output_path) = args.report_json {
    if let Err(e) = write_json_report(output_path, &file_reports, &summary) {
      eprintln!("Error generating JSON report: {}", e);
    } else {
      debug!("Generated JSON report at {}", output_path.display());
    }
  }

  Ok(())
}
