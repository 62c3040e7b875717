//! Top-level error type and process exit codes.

use thiserror::Error;

use crate::build::BuildError;
use crate::manifest::LoadError;
use crate::validate::ValidationError;

/// Any failure of a manifest build run.
#[derive(Debug, Error)]
pub enum Error {
  #[error(transparent)]
  Load(#[from] LoadError),

  #[error(transparent)]
  Validation(#[from] ValidationError),

  #[error(transparent)]
  Build(#[from] BuildError),
}

impl Error {
  /// Process exit code reported for this error.
  ///
  /// `1` means the manifest could not be used, `2` means the packaging tool failed.
  pub fn exit_code(&self) -> u8 {
    match self {
      Error::Load(_) | Error::Validation(_) => 1,
      Error::Build(_) => 2,
    }
  }
}
