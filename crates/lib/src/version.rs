//! Version resolution for CI-triggered builds.
//!
//! CI systems describe what triggered a run as a git ref: `refs/tags/<tag>`
//! for a tag push and `refs/heads/<branch>` for a branch push. A manifest can
//! use such a ref directly as its version (`version: ${GITHUB_REF}`) and have
//! it turned into something a package manager accepts:
//!
//! | Declared                 | Effective                 |
//! |--------------------------|---------------------------|
//! | `refs/tags/v2.3.1`       | `v2.3.1`                  |
//! | `refs/heads/main`        | `<run number>.main`       |
//! | anything else, e.g `1.0` | unchanged                 |
//!
//! The run number keeps branch builds ordered so the latest one wins.

use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, warn};

use crate::consts::RUN_NUMBER_ENV;

static GIT_REF: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"^refs/(tags|heads)/([0-9a-zA-Z\-.]+)$").expect("git ref pattern is valid"));

/// A version string recognised as a CI git ref.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GitRef<'a> {
  Tag(&'a str),
  Branch(&'a str),
}

impl<'a> GitRef<'a> {
  /// Match the whole of `version` against the ref pattern.
  pub fn parse(version: &'a str) -> Option<Self> {
    let captures = GIT_REF.captures(version)?;
    let name = captures.get(2)?.as_str();
    match captures.get(1)?.as_str() {
      "tags" => Some(GitRef::Tag(name)),
      _ => Some(GitRef::Branch(name)),
    }
  }
}

/// Compute the effective version for a declared version string.
///
/// Pure apart from logging; resolving an already resolved version returns it unchanged.
pub fn resolve_version(declared: &str, run_number: &str) -> String {
  let resolved = match GitRef::parse(declared) {
    Some(GitRef::Tag(tag)) => tag.to_string(),
    Some(GitRef::Branch(branch)) => {
      if run_number.is_empty() {
        warn!(branch, "{RUN_NUMBER_ENV} is not set, branch version has no run number");
      }
      format!("{run_number}.{branch}")
    }
    None => declared.to_string(),
  };

  if resolved != declared {
    debug!(declared, resolved = %resolved, "resolved version from git ref");
  }
  resolved
}

/// Read the CI run number, empty if unset.
pub fn run_number_from_env() -> String {
  std::env::var(RUN_NUMBER_ENV).unwrap_or_default()
}
