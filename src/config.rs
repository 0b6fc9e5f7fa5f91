//! # Configuration Module
//!
//! This module provides configuration support for check-copyright, allowing
//! users to set a default author identity, an optional contact address, and
//! additional supported file extensions.
//!
//! Configuration can be specified in a `.check-copyright.toml` file or via
//! the `CHECK_COPYRIGHT_CONFIG` environment variable. CLI flags always take
//! precedence over config file values; the resolved identity is passed as an
//! explicit value into the processor, never kept as ambient module state.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::verbose_log;

/// The default config file name.
pub const DEFAULT_CONFIG_FILENAME: &str = ".check-copyright.toml";

/// Environment variable for specifying config file path.
pub const CONFIG_ENV_VAR: &str = "CHECK_COPYRIGHT_CONFIG";

/// Author name placed in headers when neither the CLI nor a config file
/// provides one.
pub const DEFAULT_AUTHOR: &str = "Nguyen Kha Duong";

/// Extensions handled out of the box (without the leading dot).
pub const DEFAULT_EXTENSIONS: [&str; 5] = ["c", "h", "cpp", "hpp", "ino"];

/// Raw configuration as loaded from a `.check-copyright.toml` file.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
  /// Default author name for the header's `Author:` line.
  #[serde(default)]
  pub author: Option<String>,

  /// Optional contact address for the header's `Contact via email:` line.
  #[serde(default)]
  pub contact: Option<String>,

  /// Additional file extensions to process, without the leading dot
  /// (e.g., "cc", "cxx"). Merged with the built-in set.
  #[serde(default)]
  pub extensions: Vec<String>,
}

/// Error type for configuration operations.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
  /// The config file could not be read.
  #[error("Failed to read config file '{path}': {source}")]
  ReadError { path: PathBuf, source: std::io::Error },

  /// The config file contains invalid TOML.
  #[error("Failed to parse config file '{path}': {source}")]
  ParseError { path: PathBuf, source: toml::de::Error },

  /// An extension entry is invalid.
  #[error("Invalid extension entry '{extension}': {message}")]
  InvalidExtension { extension: String, message: String },
}

impl Config {
  /// Load configuration from a file.
  ///
  /// # Arguments
  ///
  /// * `path` - Path to the configuration file
  ///
  /// # Returns
  ///
  /// The loaded configuration, or an error if the file cannot be read or
  /// parsed.
  pub fn load(path: &Path) -> Result<Self, ConfigError> {
    verbose_log!("Loading config from: {}", path.display());

    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
      path: path.to_path_buf(),
      source: e,
    })?;

    let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
      path: path.to_path_buf(),
      source: e,
    })?;

    config.validate()?;

    Ok(config)
  }

  /// Validate the configuration.
  ///
  /// Checks that extension entries are non-empty and don't include the
  /// leading dot.
  fn validate(&self) -> Result<(), ConfigError> {
    for ext in &self.extensions {
      if ext.is_empty() {
        return Err(ConfigError::InvalidExtension {
          extension: ext.clone(),
          message: "extension cannot be empty".to_string(),
        });
      }

      if ext.starts_with('.') {
        return Err(ConfigError::InvalidExtension {
          extension: ext.clone(),
          message: "extension should not include leading dot".to_string(),
        });
      }
    }

    Ok(())
  }
}

/// Fully resolved identity and extension set handed to the processor.
///
/// Resolution order for each field: CLI flag, then config file, then the
/// built-in default.
#[derive(Debug, Clone)]
pub struct HookConfig {
  /// Author name placed in the header.
  pub author: String,

  /// Optional contact address; when present the header carries a
  /// `Contact via email:` line.
  pub contact: Option<String>,

  /// Lowercased extensions (without the leading dot) eligible for header
  /// insertion.
  pub extensions: HashSet<String>,
}

impl HookConfig {
  /// Resolve the effective configuration from CLI values and an optional
  /// loaded config file.
  pub fn resolve(cli_author: Option<String>, cli_contact: Option<String>, file: Option<Config>) -> Self {
    let file = file.unwrap_or_default();

    let author = cli_author
      .or(file.author)
      .unwrap_or_else(|| DEFAULT_AUTHOR.to_string());

    let contact = cli_contact.or(file.contact);

    let mut extensions: HashSet<String> = DEFAULT_EXTENSIONS.iter().map(|e| (*e).to_string()).collect();
    extensions.extend(file.extensions.into_iter().map(|e| e.to_lowercase()));

    Self {
      author,
      contact,
      extensions,
    }
  }

  /// Whether a path's extension is in the supported set.
  pub fn supports(&self, path: &Path) -> bool {
    path
      .extension()
      .and_then(|e| e.to_str())
      .is_some_and(|e| self.extensions.contains(&e.to_lowercase()))
  }
}

impl Default for HookConfig {
  fn default() -> Self {
    Self::resolve(None, None, None)
  }
}

/// Discover the configuration file path.
///
/// The configuration file is discovered in the following order:
/// 1. Path specified via `--config` flag (passed as `explicit_path`)
/// 2. Path specified via `CHECK_COPYRIGHT_CONFIG` environment variable
/// 3. `.check-copyright.toml` in the repository root
///
/// # Arguments
///
/// * `explicit_path` - Optional explicit path from CLI flag
/// * `repo_root` - The enclosing repository root, when one was found
///
/// # Returns
///
/// The path to the configuration file, or `None` if no config file is found.
pub fn discover_config_path(explicit_path: Option<&Path>, repo_root: Option<&Path>) -> Option<PathBuf> {
  // 1. Explicit path from CLI takes highest priority
  if let Some(path) = explicit_path {
    if path.exists() {
      verbose_log!("Using explicit config path: {}", path.display());
      return Some(path.to_path_buf());
    }
    verbose_log!("Explicit config path does not exist: {}", path.display());
    return None;
  }

  // 2. Check environment variable
  if let Ok(env_path) = std::env::var(CONFIG_ENV_VAR) {
    let path = PathBuf::from(&env_path);
    if path.exists() {
      verbose_log!("Using config from {}: {}", CONFIG_ENV_VAR, path.display());
      return Some(path);
    }
    verbose_log!("{} path does not exist: {}", CONFIG_ENV_VAR, env_path);
  }

  // 3. Check repository root
  if let Some(root) = repo_root {
    let repo_config = root.join(DEFAULT_CONFIG_FILENAME);
    if repo_config.exists() {
      verbose_log!("Using repository config: {}", repo_config.display());
      return Some(repo_config);
    }
  }

  verbose_log!("No config file found");
  None
}

/// Load configuration from the discovered path, or return `None`.
///
/// # Arguments
///
/// * `explicit_path` - Optional explicit path from CLI flag
/// * `repo_root` - The enclosing repository root, when one was found
/// * `no_config` - If true, skip config file discovery and use defaults
pub fn load_config(explicit_path: Option<&Path>, repo_root: Option<&Path>, no_config: bool) -> Result<Option<Config>> {
  if no_config {
    verbose_log!("Config file discovery disabled (--no-config)");
    return Ok(None);
  }

  match discover_config_path(explicit_path, repo_root) {
    Some(path) => {
      let config = Config::load(&path).with_context(|| format!("Failed to load config from {}", path.display()))?;
      Ok(Some(config))
    }
    None => Ok(None),
  }
}
