//! Test utilities for fpmfile-lib.
//!
//! Tests never run a real fpm. Instead the tool is a `/bin/sh -c` script that
//! receives the synthesized arguments as `$1`, `$2`, ... and can echo them,
//! write to stderr or exit with any status.

use crate::build::ToolCommand;
use crate::manifest::{Manifest, PackageSpec, SourceMode, TargetMode};

/// A tool command that runs `script` with the synthesized arguments as positional parameters.
#[cfg(unix)]
pub fn sh_tool(script: &str) -> ToolCommand {
  ToolCommand {
    program: "/bin/sh".to_string(),
    args: vec!["-c".to_string(), script.to_string(), "fpm".to_string()],
  }
}

/// A valid dir → deb manifest with one package per `(name, version)`, each packaging `bla`.
pub fn manifest_with(packages: &[(&str, &str)]) -> Manifest {
  let packages = packages
    .iter()
    .map(|(name, version)| {
      let mut pkg = PackageSpec {
        name: name.to_string(),
        paths: vec!["bla".to_string()],
        ..Default::default()
      };
      pkg.source.mode = SourceMode::Dir;
      pkg.target.mode = TargetMode::Deb;
      pkg.target.version = version.to_string();
      pkg
    })
    .collect();
  Manifest { packages }
}
