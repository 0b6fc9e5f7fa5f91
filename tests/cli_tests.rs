mod common;

use std::fs;
use std::path::Path;

use anyhow::Result;
use assert_cmd::Command;
use common::{git_add, git_add_and_commit, init_git_repo, is_git_available};
use predicates::prelude::*;
use tempfile::TempDir;

fn init_temp_git_repo() -> Result<TempDir> {
  let temp_dir = tempfile::tempdir()?;
  init_git_repo(temp_dir.path())?;
  fs::write(temp_dir.path().join("initial.txt"), "Initial content")?;
  git_add_and_commit(temp_dir.path(), "initial.txt", "Initial commit")?;
  Ok(temp_dir)
}

fn hook_command(dir: &Path) -> Result<Command> {
  let mut cmd = Command::cargo_bin("check-copyright")?;
  cmd.current_dir(dir);
  Ok(cmd)
}

fn stage_new_file(repo: &TempDir, name: &str, content: &str) -> Result<()> {
  fs::write(repo.path().join(name), content)?;
  git_add(repo.path(), name)?;
  Ok(())
}

#[test]
fn test_exit_code_is_zero_with_no_files() -> Result<()> {
  let dir = tempfile::tempdir()?;
  hook_command(dir.path())?.assert().success();
  Ok(())
}

#[test]
fn test_inserts_header_and_exits_zero() -> Result<()> {
  if !is_git_available() {
    println!("Skipping git test because git command is not available");
    return Ok(());
  }

  let repo = init_temp_git_repo()?;
  stage_new_file(&repo, "sensor.cpp", "int main(){}\n")?;

  hook_command(repo.path())?
    .args(["--author", "A. Test", "sensor.cpp"])
    .assert()
    .success()
    .stdout(predicate::str::contains("sensor.cpp"));

  let content = fs::read_to_string(repo.path().join("sensor.cpp"))?;
  assert!(content.starts_with("/*\n * sensor.cpp\n"));
  assert!(content.contains(" *      Author: A. Test\n"));

  Ok(())
}

#[test]
fn test_exit_code_is_zero_outside_repository() -> Result<()> {
  // Not a repository at all: every file degrades to skipped, never an error
  let dir = tempfile::tempdir()?;
  fs::write(dir.path().join("sensor.cpp"), "int main(){}\n")?;

  hook_command(dir.path())?
    .args(["--quiet", "sensor.cpp"])
    .assert()
    .success();

  assert_eq!(fs::read_to_string(dir.path().join("sensor.cpp"))?, "int main(){}\n");

  Ok(())
}

#[test]
fn test_exit_code_is_zero_with_malformed_config() -> Result<()> {
  if !is_git_available() {
    println!("Skipping git test because git command is not available");
    return Ok(());
  }

  let repo = init_temp_git_repo()?;
  fs::write(repo.path().join(".check-copyright.toml"), "author = [unclosed")?;
  stage_new_file(&repo, "sensor.cpp", "int main(){}\n")?;

  // The config error is reported, the run falls back to defaults, the
  // commit is never blocked.
  hook_command(repo.path())?
    .arg("sensor.cpp")
    .assert()
    .success()
    .stderr(predicate::str::contains("ERROR"));

  let content = fs::read_to_string(repo.path().join("sensor.cpp"))?;
  assert!(content.starts_with("/*\n"));

  Ok(())
}

#[test]
fn test_config_file_supplies_author() -> Result<()> {
  if !is_git_available() {
    println!("Skipping git test because git command is not available");
    return Ok(());
  }

  let repo = init_temp_git_repo()?;
  fs::write(
    repo.path().join(".check-copyright.toml"),
    "author = \"Config Author\"\ncontact = \"cfg@example.com\"\n",
  )?;
  stage_new_file(&repo, "sensor.cpp", "int main(){}\n")?;

  hook_command(repo.path())?.arg("sensor.cpp").assert().success();

  let content = fs::read_to_string(repo.path().join("sensor.cpp"))?;
  assert!(content.contains(" *      Author: Config Author\n"));
  assert!(content.contains(" * Contact via email: cfg@example.com\n"));

  Ok(())
}

#[test]
fn test_cli_author_overrides_config() -> Result<()> {
  if !is_git_available() {
    println!("Skipping git test because git command is not available");
    return Ok(());
  }

  let repo = init_temp_git_repo()?;
  fs::write(repo.path().join(".check-copyright.toml"), "author = \"Config Author\"\n")?;
  stage_new_file(&repo, "sensor.cpp", "int main(){}\n")?;

  hook_command(repo.path())?
    .args(["--author", "Flag Author", "sensor.cpp"])
    .assert()
    .success();

  let content = fs::read_to_string(repo.path().join("sensor.cpp"))?;
  assert!(content.contains(" *      Author: Flag Author\n"));

  Ok(())
}

#[test]
fn test_dry_run_modifies_nothing() -> Result<()> {
  if !is_git_available() {
    println!("Skipping git test because git command is not available");
    return Ok(());
  }

  let repo = init_temp_git_repo()?;
  stage_new_file(&repo, "sensor.cpp", "int main(){}\n")?;

  hook_command(repo.path())?
    .args(["--dry-run", "sensor.cpp"])
    .assert()
    .success()
    .stdout(predicate::str::contains("Would insert header"));

  assert_eq!(
    fs::read_to_string(repo.path().join("sensor.cpp"))?,
    "int main(){}\n"
  );

  Ok(())
}

#[test]
fn test_report_json_written() -> Result<()> {
  if !is_git_available() {
    println!("Skipping git test because git command is not available");
    return Ok(());
  }

  let repo = init_temp_git_repo()?;
  stage_new_file(&repo, "sensor.cpp", "int main(){}\n")?;
  fs::write(repo.path().join("notes.md"), "# notes\n")?;

  hook_command(repo.path())?
    .args(["--report-json", "report.json", "sensor.cpp", "notes.md"])
    .assert()
    .success();

  let report: serde_json::Value = serde_json::from_str(&fs::read_to_string(repo.path().join("report.json"))?)?;
  assert_eq!(report["summary"]["total"], 2);
  assert_eq!(report["summary"]["inserted"], 1);
  assert_eq!(report["summary"]["skipped_unsupported"], 1);

  Ok(())
}

#[test]
fn test_running_twice_is_idempotent() -> Result<()> {
  if !is_git_available() {
    println!("Skipping git test because git command is not available");
    return Ok(());
  }

  let repo = init_temp_git_repo()?;
  stage_new_file(&repo, "sensor.cpp", "int main(){}\n")?;

  hook_command(repo.path())?.arg("sensor.cpp").assert().success();
  let after_first = fs::read(repo.path().join("sensor.cpp"))?;

  hook_command(repo.path())?.arg("sensor.cpp").assert().success();
  assert_eq!(fs::read(repo.path().join("sensor.cpp"))?, after_first);

  Ok(())
}

#[test]
fn test_run_subcommand_matches_default() -> Result<()> {
  if !is_git_available() {
    println!("Skipping git test because git command is not available");
    return Ok(());
  }

  let repo = init_temp_git_repo()?;
  stage_new_file(&repo, "sensor.cpp", "int main(){}\n")?;

  hook_command(repo.path())?
    .args(["run", "--author", "A. Test", "sensor.cpp"])
    .assert()
    .success();

  let content = fs::read_to_string(repo.path().join("sensor.cpp"))?;
  assert!(content.starts_with("/*\n"));

  Ok(())
}
