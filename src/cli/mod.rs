//! # CLI Module
//!
//! This module contains the command-line interface implementation.
//! It uses clap for argument parsing and supports subcommands for
//! extensibility.

mod hook;

use clap::builder::styling::{AnsiColor, Color, Style, Styles};
use clap::{Parser, Subcommand};
pub use hook::{HookArgs, run_hook};

const CUSTOM_STYLES: Styles = Styles::styled()
  .header(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))).bold())
  .usage(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))).bold())
  .literal(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Blue))).bold())
  .placeholder(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Cyan))))
  .error(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Red))).bold())
  .valid(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))))
  .invalid(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Yellow))));

/// Top-level CLI arguments
#[derive(Parser, Debug)]
#[command(
  version,
  about,
  styles = CUSTOM_STYLES,
  after_help = "Examples:
  # Typical pre-commit invocation (file list supplied by the hook runner)
  check-copyright src/sensor.cpp src/boot.ino

  # Override the author placed in the header
  check-copyright --author \"A. Test\" src/sensor.cpp

  # Include a contact line in the header
  check-copyright --contact dev@example.com src/sensor.cpp

  # Show what would change without writing anything
  check-copyright --dry-run src/

  # Write a machine-readable report of per-file outcomes
  check-copyright --report-json outcomes.json src/sensor.cpp
",
  help_template = "{before-help}{name} v{version}
{about-section}
{usage-heading} {usage}

{all-args}{after-help}
"
)]
pub struct Cli {
  #[command(subcommand)]
  pub command: Option<Command>,

  #[command(flatten)]
  pub hook_args: HookArgs,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
  /// Insert copyright headers into newly staged source files (default)
  Run(HookArgs),
}

impl Cli {
  /// Parse CLI arguments and return the Cli struct
  pub fn parse_args() -> Self {
    Self::parse()
  }

  /// Get the effective hook arguments, whether from a subcommand or top-level
  pub fn get_hook_args(self) -> HookArgs {
    match self.command {
      Some(Command::Run(args)) => args,
      None => self.hook_args,
    }
  }
}
