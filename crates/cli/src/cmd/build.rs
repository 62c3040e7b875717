//! Implementation of the `fpmfile build` command.
//!
//! This command loads and validates the manifest, then runs the packaging tool
//! once per package, streaming its output to stdout.

use std::path::Path;

use anyhow::{Context, Result};

use fpmfile_lib::build::{BuildOptions, build_file};

use crate::output::{print_info, print_success};

/// Execute the build command.
///
/// Any manifest problem aborts before the first tool invocation. A failing
/// tool aborts the run; packages after it are not attempted.
pub fn cmd_build(manifest: &Path, options: &BuildOptions) -> Result<()> {
  let rt = tokio::runtime::Runtime::new().context("Failed to create async runtime")?;

  let report = {
    let mut out = std::io::stdout().lock();
    rt.block_on(build_file(manifest, options, &mut out))?
  };

  if report.built.is_empty() {
    print_info(&format!("{} specifies no packages to build", manifest.display()));
  } else {
    print_success(&format!("Built {} package(s)", report.built.len()));
  }

  Ok(())
}
