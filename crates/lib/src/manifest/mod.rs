//! Package manifest model and loading.
//!
//! Manifests are YAML documents listing the packages to build. Loading reads
//! the file, substitutes `${VAR}` references from the environment and parses
//! the result into [`Manifest`].

mod de;
mod load;
mod types;

pub use load::LoadError;
pub use types::*;
