//! Implementation of the `fpmfile check` command.

use std::path::Path;

use anyhow::Result;

use fpmfile_lib::Error;
use fpmfile_lib::manifest::Manifest;
use fpmfile_lib::validate::{check, check_all};

use crate::Reported;
use crate::output::{print_error, print_success, print_warning};

pub fn cmd_check(manifest_path: &Path, all: bool) -> Result<()> {
  let manifest = Manifest::load(manifest_path).map_err(Error::from)?;

  if all {
    let errors = check_all(&manifest);
    if !errors.is_empty() {
      for err in &errors {
        print_error(&err.to_string());
      }
      print_error(&format!("{} package(s) failed validation", errors.len()));
      return Err(Reported(1).into());
    }
  } else {
    check(&manifest).map_err(Error::from)?;
  }

  if manifest.packages.is_empty() {
    print_warning(&format!("{} specifies no packages to build", manifest_path.display()));
  } else {
    print_success(&format!(
      "{} is valid ({} package(s))",
      manifest_path.display(),
      manifest.packages.len()
    ));
  }

  Ok(())
}
