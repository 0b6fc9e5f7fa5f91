//! # Header Module
//!
//! This module builds the copyright header block inserted at the top of
//! newly added source files.

use chrono::{DateTime, Datelike, Local};

use crate::config::HookConfig;

/// Data needed to render one header block.
///
/// Constructed fresh per file: the filename differs per file and the date is
/// taken at render time.
#[derive(Debug, Clone)]
pub struct HeaderData {
  /// Base name of the file the header is inserted into.
  pub filename: String,
  /// Author name for the `Author:` line.
  pub author: String,
  /// Optional contact address; adds a `Contact via email:` line.
  pub contact: Option<String>,
  /// Human-readable creation date, e.g. `March 5, 2026`.
  pub created_on: String,
}

impl HeaderData {
  /// Build header data for a file using the current local date.
  pub fn new(filename: &str, config: &HookConfig) -> Self {
    Self::with_date(filename, config, Local::now())
  }

  /// Build header data with an explicit date (injectable for tests).
  pub fn with_date(filename: &str, config: &HookConfig, date: DateTime<Local>) -> Self {
    Self {
      filename: filename.to_string(),
      author: config.author.clone(),
      contact: config.contact.clone(),
      created_on: format_date_human(date),
    }
  }

  /// Render the header block.
  ///
  /// The result carries no trailing newline; the rewriter joins it to the
  /// file body with a blank separator line in the file's own newline style.
  pub fn render(&self) -> String {
    let mut header = format!(
      "/*\n * {}\n *\n *  Created on: {}\n *      Author: {}\n",
      self.filename, self.created_on, self.author
    );
    if let Some(contact) = &self.contact {
      header.push_str(&format!(" * Contact via email: {contact}\n"));
    }
    header.push_str(" */");
    header
  }
}

/// Format a date as `<Month> <Day>, <Year>` with an unpadded day.
///
/// The day is assembled separately because strftime's unpadded day specifier
/// (`%-d`) is not available on every platform.
pub fn format_date_human(date: DateTime<Local>) -> String {
  format!("{} {}, {}", date.format("%B"), date.day(), date.year())
}
