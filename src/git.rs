//! # Git Module
//!
//! This module contains functionality for interacting with git repositories:
//! discovering the enclosing repository, probing whether a file is staged as
//! newly added, and re-staging a file after the hook has rewritten it.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use git2::Repository;
use tracing::debug;

use crate::verbose_log;

/// Discover the root (working directory) of the repository enclosing `start`.
///
/// Returns `Ok(None)` when `start` is not inside a git repository.
pub fn discover_repo_root(start: &Path) -> Result<Option<PathBuf>> {
  match Repository::discover(start) {
    Ok(repo) => Ok(repo.workdir().map(Path::to_path_buf)),
    Err(e) if e.code() == git2::ErrorCode::NotFound => Ok(None),
    Err(e) => Err(e).with_context(|| format!("Failed to discover repository from {}", start.display())),
  }
}

/// Open the repository enclosing the given file path.
fn open_enclosing_repo(path: &Path) -> Result<Repository> {
  // Discover from the file's directory so relative invocations from a
  // subdirectory still find the right repository.
  let start = path
    .parent()
    .filter(|p| !p.as_os_str().is_empty())
    .unwrap_or_else(|| Path::new("."));

  Repository::discover(start).with_context(|| format!("Failed to discover repository from {}", start.display()))
}

/// Compute the path of `path` relative to the repository working directory.
///
/// Both sides are canonicalized first so that symlinked temp directories and
/// platform separator differences cannot break the comparison.
fn workdir_relative(repo: &Repository, path: &Path) -> Result<PathBuf> {
  let workdir = repo
    .workdir()
    .context("Repository has no working directory (bare repository)")?;
  let workdir = workdir
    .canonicalize()
    .with_context(|| format!("Failed to canonicalize repository root {}", workdir.display()))?;
  let absolute = path
    .canonicalize()
    .with_context(|| format!("Failed to canonicalize {}", path.display()))?;

  pathdiff::diff_paths(&absolute, &workdir)
    .with_context(|| format!("{} is outside the repository at {}", path.display(), workdir.display()))
}

/// Checks whether a file is staged as newly added ("A") in the index.
///
/// # Parameters
///
/// * `path` - Path to the file, absolute or relative to the current directory
///
/// # Returns
///
/// `true` only when the index records the file as newly added. Modified,
/// renamed, untracked, and unmodified files all return `false`.
///
/// # Errors
///
/// Returns an error if the repository cannot be discovered or the status
/// query fails. Callers that must not block a commit should treat an error
/// as "not added".
pub fn staged_added(path: &Path) -> Result<bool> {
  let repo = open_enclosing_repo(path)?;
  let rel = workdir_relative(&repo, path)?;

  let status = repo
    .status_file(&rel)
    .with_context(|| format!("Failed to query index status for {}", rel.display()))?;

  debug!("Index status for {}: {:?}", rel.display(), status);

  Ok(status.is_index_new())
}

/// Re-stage a file so the index reflects its rewritten working-tree content.
///
/// The surrounding pre-commit pipeline compares staged content with the
/// working tree after hooks run, so a rewritten file must be added back to
/// the index.
///
/// # Errors
///
/// Returns an error if the repository cannot be discovered or the index
/// update fails. Failure here is non-fatal to the hook: the file on disk is
/// already correct, only the index refresh is lost.
pub fn restage(path: &Path) -> Result<()> {
  let repo = open_enclosing_repo(path)?;
  let rel = workdir_relative(&repo, path)?;

  let mut index = repo.index().context("Failed to open repository index")?;
  index
    .add_path(&rel)
    .with_context(|| format!("Failed to re-stage {}", rel.display()))?;
  index.write().context("Failed to write repository index")?;

  verbose_log!("Re-staged: {}", rel.display());

  Ok(())
}
