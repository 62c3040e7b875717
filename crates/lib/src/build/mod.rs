//! Building the packages of a manifest.
//!
//! Packages are built strictly one after another in declaration order. The
//! first failing package stops the run; later packages are never attempted.

mod execute;
mod types;

use std::io::Write;
use std::path::Path;

use tracing::{error, info};

pub use execute::run_tool;
pub use types::*;

use crate::args::synthesize;
use crate::error::Error;
use crate::manifest::{Manifest, PackageSpec};
use crate::validate::check;
use crate::version::resolve_version;

/// Resolve the version and synthesize the arguments for one package.
pub fn plan_package(package: &PackageSpec, run_number: &str) -> PackagePlan {
  let version = resolve_version(&package.target.version, run_number);
  let args = synthesize(package, &version);
  PackagePlan {
    name: package.name.clone(),
    version,
    args,
  }
}

/// Plan every package in the manifest without running anything.
pub fn plan(manifest: &Manifest, run_number: &str) -> Vec<PackagePlan> {
  manifest
    .packages
    .iter()
    .map(|package| plan_package(package, run_number))
    .collect()
}

/// Build every package of an already validated manifest.
///
/// Tool output and progress lines are written to `out`.
pub async fn build<W: Write>(
  manifest: &Manifest,
  options: &BuildOptions,
  out: &mut W,
) -> Result<BuildReport, BuildError> {
  let mut report = BuildReport::default();

  for package in &manifest.packages {
    writeln!(out, "building package {}...", package.name)?;
    out.flush()?;

    let plan = plan_package(package, &options.run_number);
    let result = run_tool(&plan.name, &options.tool, &plan.args, out).await?;

    if !result.status.success() {
      error!(package = %plan.name, code = ?result.status.code(), "packaging tool failed");
      return Err(BuildError::ToolFailed {
        package: plan.name,
        tool: options.tool.to_string(),
        code: result.status.code(),
        output: result.output,
      });
    }

    info!(package = %plan.name, version = %plan.version, "package built");
    write!(out, "\n\n")?;
    report.built.push(plan);
  }

  Ok(report)
}

/// Load, validate and build the manifest at `path`.
pub async fn build_file<W: Write>(path: &Path, options: &BuildOptions, out: &mut W) -> Result<BuildReport, Error> {
  let manifest = Manifest::load(path)?;
  check(&manifest)?;
  Ok(build(&manifest, options, out).await?)
}
