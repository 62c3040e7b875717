//! Reading manifests from disk.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info};

use super::Manifest;
use crate::expand::expand_env;

/// Errors that can occur while loading a manifest.
#[derive(Debug, Error)]
pub enum LoadError {
  /// The manifest file could not be read.
  #[error("failed to read manifest {}: {source}", .path.display())]
  Read {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  /// The manifest text is not a well-formed manifest document.
  #[error("failed to parse manifest {}: {source}", .path.display())]
  Parse {
    path: PathBuf,
    #[source]
    source: serde_yaml::Error,
  },
}

impl Manifest {
  /// Read a manifest file, substitute environment variables and parse it.
  pub fn load(path: &Path) -> Result<Self, LoadError> {
    debug!(path = %path.display(), "reading manifest");

    let raw = std::fs::read_to_string(path).map_err(|source| LoadError::Read {
      path: path.to_path_buf(),
      source,
    })?;

    let manifest = Self::parse(&expand_env(&raw)).map_err(|source| LoadError::Parse {
      path: path.to_path_buf(),
      source,
    })?;

    info!(path = %path.display(), packages = manifest.packages.len(), "manifest loaded");
    Ok(manifest)
  }

  /// Parse manifest text that has already been through substitution.
  ///
  /// A document without any content (blank, comments only or a bare `---`)
  /// is an empty manifest.
  pub fn parse(text: &str) -> Result<Self, serde_yaml::Error> {
    if is_blank_document(text) {
      return Ok(Self::default());
    }
    let manifest: Option<Self> = serde_yaml::from_str(text)?;
    Ok(manifest.unwrap_or_default())
  }
}

fn is_blank_document(text: &str) -> bool {
  text.lines().map(str::trim).all(|line| {
    line.is_empty() || line.starts_with('#') || line == "---" || line == "..."
  })
}
