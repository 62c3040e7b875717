//! Argument synthesis for the packaging tool.
//!
//! [`synthesize`] maps one package to the exact argument list handed to fpm.
//! The list is built in a fixed order so the same package always produces
//! byte-identical arguments, which keeps logs diffable:
//!
//! 1. `-s <source mode> -t <target mode> -v <version>`
//! 2. source-mode flags (`-x`, `-C` for `dir`)
//! 3. target-mode flags (name, metadata, files, relationships, scripts, systemd)
//! 4. `paths` as positional arguments
//!
//! Absent optional fields produce no argument at all, never an empty value.

use crate::manifest::{PackageSpec, SourceMode, SourceSpec, TargetMode};

/// Build the argument list for `package`, using `version` as the effective version.
pub fn synthesize(package: &PackageSpec, version: &str) -> Vec<String> {
  let mut args = Args::default();

  args.pair("-s", package.source.mode.as_str());
  args.pair("-t", package.target.mode.as_str());
  args.pair("-v", version);

  match package.source.mode {
    SourceMode::Dir => dir_source(&mut args, &package.source),
    SourceMode::Unsupported(_) => {}
  }

  match package.target.mode {
    TargetMode::Deb => deb_target(&mut args, package),
    TargetMode::Unsupported(_) => {}
  }

  for path in &package.paths {
    args.push(path);
  }

  args.0
}

fn dir_source(args: &mut Args, source: &SourceSpec) {
  // fpm has always received the exclude flag and pattern as one token
  for pattern in &source.excludes {
    args.push(&format!("-x {pattern}"));
  }
  args.optional("-C", source.chdir.as_deref());
}

fn deb_target(args: &mut Args, package: &PackageSpec) {
  let target = &package.target;

  args.pair("-n", &package.name);

  args.optional("-m", target.maintainer.as_deref());
  args.optional("--url", target.url.as_deref());
  args.optional("--vendor", target.vendor.as_deref());
  args.optional("--license", target.license.as_deref());
  args.optional("--description", target.description.as_deref());

  args.repeated("--directories", &target.directories);
  args.repeated("--deb-config", &target.config_files);
  args.repeated("--deb-systemd", &target.systemd);

  args.repeated("-d", &target.depends);
  args.repeated("--deb-suggests", &target.suggests);
  args.repeated("--conflicts", &target.conflicts);
  args.flag("--no-auto-depends", target.no_auto_depends);

  args.optional("--before-install", target.before_install.as_deref());
  args.optional("--after-install", target.after_install.as_deref());
  args.optional("--before-remove", target.before_remove.as_deref());
  args.optional("--after-remove", target.after_remove.as_deref());
  args.optional("--before-upgrade", target.before_upgrade.as_deref());
  args.optional("--after-upgrade", target.after_upgrade.as_deref());

  args.flag("--deb-systemd-enable", target.systemd_enable);
  args.flag("--deb-systemd-auto-start", target.systemd_auto_start);
  args.flag("--deb-systemd-restart-after-upgrade", target.systemd_restart_after_upgrade);
}

#[derive(Default)]
struct Args(Vec<String>);

impl Args {
  fn push(&mut self, arg: &str) {
    self.0.push(arg.to_string());
  }

  fn pair(&mut self, flag: &str, value: &str) {
    self.push(flag);
    self.push(value);
  }

  fn optional(&mut self, flag: &str, value: Option<&str>) {
    if let Some(value) = value.filter(|v| !v.is_empty()) {
      self.pair(flag, value);
    }
  }

  fn repeated(&mut self, flag: &str, values: &[String]) {
    for value in values {
      self.pair(flag, value);
    }
  }

  fn flag(&mut self, flag: &str, enabled: bool) {
    if enabled {
      self.push(flag);
    }
  }
}
