//! Manifest validation.
//!
//! Validation checks only what the packaging tool cannot be trusted to
//! report clearly: package names, supported modes, and the fields each mode
//! requires. Everything else (dependency expressions, script paths, license
//! strings) is passed through and left for the tool to reject.
//!
//! Rules run per package in this order:
//! 1. `name` is set
//! 2. `source.mode` is supported
//! 3. a `dir` source has `paths` or `chdir`
//! 4. `target.mode` is supported
//! 5. a `deb` target has a `version`

use thiserror::Error;
use tracing::{debug, info};

use crate::manifest::{Manifest, PackageSpec, SourceMode, TargetMode};

/// A single manifest violation, addressed by package and field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
  "error in {}:\n  -> config field {field} missing or invalid\n  -> {message}",
  describe_package(.package)
)]
pub struct ValidationError {
  /// Name of the offending package, empty if the package has no name.
  pub package: String,
  /// Dotted path of the offending field, e.g. `target.version`.
  pub field: String,
  /// Human-readable explanation.
  pub message: String,
}

impl ValidationError {
  fn new(package: &str, field: impl Into<String>, message: impl Into<String>) -> Self {
    Self {
      package: package.to_string(),
      field: field.into(),
      message: message.into(),
    }
  }
}

fn describe_package(name: &str) -> String {
  if name.is_empty() {
    "manifest".to_string()
  } else {
    format!("package {name}")
  }
}

/// Validate a manifest, returning the first violation found.
///
/// An empty manifest is valid; a notice is logged since nothing will be built.
pub fn check(manifest: &Manifest) -> Result<(), ValidationError> {
  if manifest.packages.is_empty() {
    info!("manifest specifies no packages to build");
  }

  for (index, package) in manifest.packages.iter().enumerate() {
    check_package(index, package)?;
  }

  debug!(packages = manifest.packages.len(), "manifest is valid");
  Ok(())
}

/// Validate a manifest, collecting the first violation of every invalid package.
///
/// Returns an empty list when the manifest is valid.
pub fn check_all(manifest: &Manifest) -> Vec<ValidationError> {
  if manifest.packages.is_empty() {
    info!("manifest specifies no packages to build");
  }

  manifest
    .packages
    .iter()
    .enumerate()
    .filter_map(|(index, package)| check_package(index, package).err())
    .collect()
}

/// Validate one package; `index` is its position in the manifest.
pub fn check_package(index: usize, package: &PackageSpec) -> Result<(), ValidationError> {
  if package.name.is_empty() {
    return Err(ValidationError::new(
      "",
      format!("package[{index}].name"),
      "name is required",
    ));
  }
  let name = package.name.as_str();

  let source = &package.source;
  if !source.mode.is_supported() {
    return Err(ValidationError::new(
      name,
      "source.mode",
      format!(
        "source mode is required and may contain {}",
        SourceMode::SUPPORTED.join("|")
      ),
    ));
  }

  if source.mode == SourceMode::Dir && package.paths.is_empty() && source.chdir.is_none() {
    return Err(ValidationError::new(
      name,
      "paths",
      "for source mode dir at least one path or source.chdir is required (a directory to package)",
    ));
  }

  let target = &package.target;
  if !target.mode.is_supported() {
    return Err(ValidationError::new(
      name,
      "target.mode",
      format!(
        "target mode is required and may contain {}",
        TargetMode::SUPPORTED.join("|")
      ),
    ));
  }

  if target.mode == TargetMode::Deb && target.version.is_empty() {
    return Err(ValidationError::new(
      name,
      "target.version",
      "debian packages require a version",
    ));
  }

  Ok(())
}
