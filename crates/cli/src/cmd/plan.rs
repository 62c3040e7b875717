//! Implementation of the `fpmfile plan` command.
//!
//! Shows exactly how the packaging tool would be invoked for every package,
//! with versions resolved, without running anything.

use std::path::Path;

use anyhow::Result;
use serde::Serialize;

use fpmfile_lib::Error;
use fpmfile_lib::build::{BuildOptions, plan};
use fpmfile_lib::manifest::{Manifest, SourceMode, TargetMode};
use fpmfile_lib::validate::check;

use crate::output::{OutputFormat, format_command, print_info, print_json, symbols};

#[derive(Serialize)]
struct PlannedCommand<'a> {
  name: &'a str,
  source: &'a SourceMode,
  target: &'a TargetMode,
  version: &'a str,
  program: &'a str,
  args: Vec<String>,
}

pub fn cmd_plan(manifest_path: &Path, options: &BuildOptions, format: OutputFormat) -> Result<()> {
  let manifest = Manifest::load(manifest_path).map_err(Error::from)?;
  check(&manifest).map_err(Error::from)?;

  let plans = plan(&manifest, &options.run_number);

  if format.is_json() {
    let commands: Vec<_> = manifest
      .packages
      .iter()
      .zip(&plans)
      .map(|(package, plan)| PlannedCommand {
        name: &plan.name,
        source: &package.source.mode,
        target: &package.target.mode,
        version: &plan.version,
        program: &options.tool.program,
        args: options.tool.argv(&plan.args),
      })
      .collect();
    return print_json(&commands);
  }

  if plans.is_empty() {
    print_info(&format!("{} specifies no packages to build", manifest_path.display()));
    return Ok(());
  }

  for plan in &plans {
    println!("{} {} {} {}", symbols::INFO, plan.name, symbols::ARROW, plan.version);
    println!("  {}", format_command(&options.tool.program, &options.tool.argv(&plan.args)));
  }

  Ok(())
}
