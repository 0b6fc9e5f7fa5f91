//! # Rewriter Module
//!
//! This module reads a source file as raw bytes, inserts the header block at
//! the correct position, and writes the result back while preserving the
//! file's encoding artifacts: a leading byte-order mark is kept, the body's
//! line endings are left untouched, and the blank line separating header
//! and body follows the file's dominant line-ending convention.

use std::io::Write as _;
use std::path::Path;

use anyhow::{Context, Result};
use tempfile::NamedTempFile;

/// The UTF-8 byte-order mark as a character.
const BOM: char = '\u{feff}';

/// Decoded file content annotated with the encoding artifacts that must
/// survive a rewrite.
#[derive(Debug)]
pub struct RawContent {
  /// The decoded text with any leading byte-order mark stripped.
  pub text: String,
  /// Line-ending style used for the header/body separator: `"\r\n"` when the
  /// raw bytes contain a CRLF anywhere, `"\n"` otherwise.
  pub newline: &'static str,
  /// Whether the file began with a byte-order mark.
  pub had_bom: bool,
}

/// Read a file as raw bytes and decode it permissively.
///
/// Invalid UTF-8 sequences are replaced rather than treated as fatal, so a
/// file with stray bytes is still processed. The line-ending convention is
/// detected from the raw bytes before decoding.
pub fn read_raw(path: &Path) -> Result<RawContent> {
  let bytes = std::fs::read(path).with_context(|| format!("Failed to read file: {}", path.display()))?;

  let newline = if bytes.windows(2).any(|w| w == b"\r\n") { "\r\n" } else { "\n" };

  let decoded = String::from_utf8_lossy(&bytes);
  let stripped = decoded.trim_start_matches(BOM);
  let had_bom = stripped.len() != decoded.len();

  Ok(RawContent {
    text: stripped.to_string(),
    newline,
    had_bom,
  })
}

/// Assemble the new file content with the header inserted.
///
/// The byte-order mark, when originally present, is re-prepended exactly
/// once. Within the text the header goes after a shebang line if there is
/// one, otherwise at the very top.
pub fn insert_header(raw: &RawContent, header: &str) -> String {
  let inserted = insert_after_shebang(&raw.text, header, raw.newline);

  if raw.had_bom {
    let mut with_bom = String::with_capacity(inserted.len() + BOM.len_utf8());
    with_bom.push(BOM);
    with_bom.push_str(&inserted);
    with_bom
  } else {
    inserted
  }
}

/// Insert the header after a leading shebang line, or at the top.
///
/// The header block is separated from the body by one blank line, both
/// newlines in the file's own style. A single-line shebang file with no
/// trailing newline gets one appended before the header so the shebang
/// line stays intact.
fn insert_after_shebang(text: &str, header: &str, newline: &str) -> String {
  if text.starts_with("#!") {
    match text.find('\n') {
      None => format!("{text}{newline}{header}{newline}"),
      Some(first_newline) => {
        let (shebang, rest) = text.split_at(first_newline + 1);
        format!("{shebang}{header}{newline}{newline}{rest}")
      }
    }
  } else {
    format!("{header}{newline}{newline}{text}")
  }
}

/// Write the new content back, replacing the original file.
///
/// Uses a write-to-temp-then-rename pattern in the file's own directory so a
/// crash mid-write cannot truncate the original. The original file's
/// permissions are carried over to the replacement.
pub fn write_atomic(path: &Path, content: &str) -> Result<()> {
  let dir = path
    .parent()
    .filter(|p| !p.as_os_str().is_empty())
    .unwrap_or_else(|| Path::new("."));

  let permissions = std::fs::metadata(path)
    .map(|m| m.permissions())
    .with_context(|| format!("Failed to read metadata for {}", path.display()))?;

  let mut tmp = NamedTempFile::new_in(dir).with_context(|| format!("Failed to create temp file in {}", dir.display()))?;
  tmp
    .write_all(content.as_bytes())
    .with_context(|| format!("Failed to write temp file for {}", path.display()))?;
  tmp
    .as_file()
    .set_permissions(permissions)
    .with_context(|| format!("Failed to set permissions for {}", path.display()))?;
  tmp
    .persist(path)
    .map_err(|e| e.error)
    .with_context(|| format!("Failed to replace {}", path.display()))?;

  Ok(())
}
