//! fpmfile-lib: manifest-driven package builds for fpm
//!
//! This crate turns a declarative `packages.yml` manifest into invocations of
//! an external packaging tool:
//! - `manifest`: typed model of the manifest and its loader
//! - `expand`: `${VAR}` substitution applied before parsing
//! - `validate`: structural and mode-specific checks
//! - `version`: CI-ref-aware version resolution
//! - `args`: deterministic argument synthesis per package
//! - `build`: sequential tool invocation with streamed output

pub mod args;
pub mod build;
pub mod consts;
pub mod error;
pub mod expand;
pub mod manifest;
pub mod validate;
pub mod version;


pub use error::Error;
