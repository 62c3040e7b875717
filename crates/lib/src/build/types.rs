//! Types for driving package builds.

use std::fmt;
use std::process::ExitStatus;

use thiserror::Error;

use crate::consts::DEFAULT_TOOL;

/// Errors that can occur while building packages.
#[derive(Debug, Error)]
pub enum BuildError {
  /// The tool could not be started at all.
  #[error("failed to run {tool} for package {package}: {source}")]
  Spawn {
    package: String,
    tool: String,
    #[source]
    source: std::io::Error,
  },

  /// The tool ran and reported failure.
  #[error("{tool} failed for package {package} with exit code {}", describe_code(.code))]
  ToolFailed {
    package: String,
    tool: String,
    code: Option<i32>,
    /// Combined stdout and stderr of the failed invocation.
    output: String,
  },

  /// I/O error while relaying tool output.
  #[error("io error: {0}")]
  Io(#[from] std::io::Error),
}

fn describe_code(code: &Option<i32>) -> String {
  match code {
    Some(code) => code.to_string(),
    None => "none (terminated by signal)".to_string(),
  }
}

/// The program used to package, plus arguments placed before the synthesized ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolCommand {
  pub program: String,
  pub args: Vec<String>,
}

impl ToolCommand {
  pub fn new(program: impl Into<String>) -> Self {
    Self {
      program: program.into(),
      args: Vec::new(),
    }
  }

  /// Parse a whitespace separated command such as `bundle exec fpm`.
  ///
  /// There is no quoting; returns `None` for a blank command.
  pub fn parse(command: &str) -> Option<Self> {
    let mut words = command.split_whitespace().map(str::to_string);
    let program = words.next()?;
    Some(Self {
      program,
      args: words.collect(),
    })
  }

  /// Full argument vector after the program for one invocation.
  pub fn argv(&self, synthesized: &[String]) -> Vec<String> {
    self.args.iter().chain(synthesized).cloned().collect()
  }
}

impl Default for ToolCommand {
  fn default() -> Self {
    Self::new(DEFAULT_TOOL)
  }
}

impl fmt::Display for ToolCommand {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.program)?;
    for arg in &self.args {
      write!(f, " {arg}")?;
    }
    Ok(())
  }
}

/// Configuration for a build run.
#[derive(Debug, Clone, Default)]
pub struct BuildOptions {
  pub tool: ToolCommand,
  /// CI run number used when resolving branch refs.
  pub run_number: String,
}

/// One package after version resolution and argument synthesis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackagePlan {
  pub name: String,
  pub version: String,
  pub args: Vec<String>,
}

/// Result of a completed tool invocation.
#[derive(Debug)]
pub struct ToolOutput {
  pub status: ExitStatus,
  /// Combined stdout and stderr, in arrival order per line.
  pub output: String,
}

/// Packages built by a successful run, in build order.
#[derive(Debug, Default)]
pub struct BuildReport {
  pub built: Vec<PackagePlan>,
}
