//! # check-copyright
//!
//! A pre-commit hook that inserts a standardized copyright header into newly
//! staged source files.

use anyhow::Result;
use check_copyright::cli::{Cli, run_hook};

fn main() -> Result<()> {
  let cli = Cli::parse_args();

  run_hook(cli.get_hook_args())
}
