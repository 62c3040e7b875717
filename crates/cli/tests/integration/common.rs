//! Shared test helpers for CLI integration tests.

use std::path::PathBuf;

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use tempfile::TempDir;

/// Get path to a fixture file.
pub fn fixture_path(name: &str) -> PathBuf {
  PathBuf::from(env!("CARGO_MANIFEST_DIR"))
    .join("tests")
    .join("fixtures")
    .join(name)
}

/// Read fixture content.
pub fn fixture_content(name: &str) -> String {
  std::fs::read_to_string(fixture_path(name)).unwrap_or_else(|e| panic!("Failed to load fixture {}: {}", name, e))
}

/// Isolated test environment.
///
/// Each test gets its own temporary directory holding the manifest, a copy of
/// the fake fpm script and the log of its invocations.
pub struct TestEnv {
  pub temp: TempDir,
  pub manifest_path: PathBuf,
}

impl TestEnv {
  /// Create from a fixture file.
  ///
  /// Copies the fixture content to a temporary `packages.yml` file.
  pub fn from_fixture(name: &str) -> Self {
    Self::with_manifest(&fixture_content(name))
  }

  /// Create with the given manifest content.
  pub fn with_manifest(content: &str) -> Self {
    let temp = TempDir::new().unwrap();
    let manifest_path = temp.path().join("packages.yml");
    std::fs::write(&manifest_path, content).unwrap();
    std::fs::write(temp.path().join("fake-fpm.sh"), fixture_content("fake-fpm.sh")).unwrap();
    Self { temp, manifest_path }
  }

  /// Tool command running the fake fpm script.
  pub fn tool(&self) -> String {
    format!("/bin/sh {}", self.temp.path().join("fake-fpm.sh").display())
  }

  /// Log file the fake fpm appends its arguments to.
  pub fn log_path(&self) -> PathBuf {
    self.temp.path().join("fpm.log")
  }

  /// Argument lines of every fake fpm invocation so far.
  pub fn invocations(&self) -> Vec<String> {
    match std::fs::read_to_string(self.log_path()) {
      Ok(log) => log.lines().map(str::to_string).collect(),
      Err(_) => Vec::new(),
    }
  }

  /// Get a pre-configured Command for the fpmfile binary.
  ///
  /// Runs inside the temp directory with the fake fpm as tool and CI
  /// variables cleared, so tests opt in to `GITHUB_REF` and friends.
  pub fn fpmfile_cmd(&self) -> Command {
    let mut cmd: Command = cargo_bin_cmd!("fpmfile");
    cmd.current_dir(self.temp.path());
    cmd.env("FPMFILE_TOOL", self.tool());
    cmd.env("FAKE_FPM_LOG", self.log_path());
    cmd.env_remove("FAKE_FPM_FAIL");
    cmd.env_remove("GITHUB_REF");
    cmd.env_remove("GITHUB_RUN_NUMBER");
    cmd.env_remove("RUST_LOG");
    cmd
  }
}
