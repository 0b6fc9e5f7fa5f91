//! # check-copyright
//!
//! A pre-commit hook that inserts a standardized copyright header into newly
//! staged C/C++/Arduino source files.
//!
//! For every file it is handed, `check-copyright` asks Git whether the file
//! is staged as newly added, checks whether the header is already present,
//! and if not inserts the header block at the top of the file (after the
//! shebang line for executable scripts, and preserving a leading byte-order
//! mark), then re-stages the file so the committed snapshot matches the
//! working tree.
//!
//! ## Features
//!
//! * Only touches files staged as newly added; modified and untracked files
//!   are left alone
//! * Idempotent: a file that already carries the header is never rewritten
//! * Preserves shebang lines, byte-order marks, and the body's line endings
//! * Never blocks a commit: the process exits successfully regardless of how
//!   many files were modified, skipped, or failed
//! * Optional `.check-copyright.toml` config for author, contact, and extra
//!   extensions
//!
//! ## Usage as a Library
//!
//! This crate can be used as a library in your Rust projects:
//!
//! ```rust,no_run
//! use std::path::PathBuf;
//!
//! use check_copyright::config::HookConfig;
//! use check_copyright::processor::Processor;
//!
//! fn main() {
//!     let config = HookConfig {
//!         author: "A. Test".to_string(),
//!         ..HookConfig::default()
//!     };
//!
//!     // Process the files pre-commit handed over (false = not a dry run,
//!     // None = default header detector)
//!     let mut processor = Processor::new(config, false, None);
//!     let inserted = processor.process(&[PathBuf::from("src/sensor.cpp")]);
//!
//!     println!("{} files modified", inserted);
//! }
//! ```
//!
//! ## Modules
//!
//! * [`processor`] - The per-file pipeline: gates, insertion, re-staging
//! * [`header`] - Header block synthesis
//! * [`detection`] - Idempotency check for existing headers
//! * [`rewriter`] - Raw-byte reading and encoding-preserving writes
//! * [`git`] - Staged-status probe and index re-staging
//!
//! [`processor`]: crate::processor
//! [`header`]: crate::header
//! [`detection`]: crate::detection
//! [`rewriter`]: crate::rewriter
//! [`git`]: crate::git

// Re-export modules for public API
pub mod cli;
pub mod config;
pub mod detection;
pub mod git;
pub mod header;
pub mod logging;
pub mod output;
pub mod processor;
pub mod report;
pub mod rewriter;
