use std::fmt;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use fpmfile_lib::Error;
use fpmfile_lib::build::{BuildOptions, ToolCommand};
use fpmfile_lib::consts::{APP_NAME, DEFAULT_MANIFEST, DEFAULT_TOOL, TOOL_ENV};
use fpmfile_lib::version::run_number_from_env;

mod cmd;
mod output;

use output::{OutputFormat, print_error};

/// fpmfile - Build fpm packages from a declarative manifest
#[derive(Parser)]
#[command(name = APP_NAME)]
#[command(author, version, about, long_about = None)]
struct Cli {
  /// Enable verbose output
  #[arg(short, long, global = true)]
  verbose: bool,

  /// Path to the manifest file
  #[arg(short = 'f', long = "file", global = true, default_value = DEFAULT_MANIFEST)]
  manifest: PathBuf,

  /// Packaging tool command, e.g. "fpm" or "bundle exec fpm"
  #[arg(long, global = true, env = TOOL_ENV, default_value = DEFAULT_TOOL)]
  tool: String,

  /// CI run number used for branch versions [default: $GITHUB_RUN_NUMBER]
  #[arg(long, global = true)]
  run_number: Option<String>,

  /// Defaults to `build` when omitted
  #[command(subcommand)]
  command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
  /// Validate the manifest and build every package
  Build,

  /// Validate the manifest without building
  Check {
    /// Report every invalid package instead of stopping at the first
    #[arg(long)]
    all: bool,
  },

  /// Print the tool invocations without running them
  Plan {
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
  },
}

/// An error that has already been shown to the user; only its exit code remains.
#[derive(Debug)]
pub struct Reported(pub u8);

impl fmt::Display for Reported {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "failed with exit code {}", self.0)
  }
}

impl std::error::Error for Reported {}

fn main() -> ExitCode {
  let cli = match Cli::try_parse() {
    Ok(cli) => cli,
    Err(err) => {
      let _ = err.print();
      // Exit 2 belongs to packaging failures, so usage errors exit 1
      return if err.exit_code() == 0 {
        ExitCode::SUCCESS
      } else {
        ExitCode::from(1)
      };
    }
  };

  let default_level = if cli.verbose { "debug" } else { "warn" };
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
    .with_writer(std::io::stderr)
    .without_time()
    .init();

  match run(cli) {
    Ok(()) => ExitCode::SUCCESS,
    Err(err) => {
      if let Some(Reported(code)) = err.downcast_ref::<Reported>() {
        return ExitCode::from(*code);
      }
      print_error(&format!("{:#}", err));
      ExitCode::from(exit_code(&err))
    }
  }
}

fn run(cli: Cli) -> Result<()> {
  let tool = ToolCommand::parse(&cli.tool).ok_or_else(|| anyhow::anyhow!("--tool must not be empty"))?;
  let options = BuildOptions {
    tool,
    run_number: cli.run_number.unwrap_or_else(run_number_from_env),
  };
  debug!(manifest = %cli.manifest.display(), tool = %options.tool, "starting");

  match cli.command.unwrap_or(Commands::Build) {
    Commands::Build => cmd::cmd_build(&cli.manifest, &options),
    Commands::Check { all } => cmd::cmd_check(&cli.manifest, all),
    Commands::Plan { format } => cmd::cmd_plan(&cli.manifest, &options, format),
  }
}

/// Exit code for the first library error in the chain, `1` otherwise.
fn exit_code(err: &anyhow::Error) -> u8 {
  err
    .chain()
    .find_map(|cause| cause.downcast_ref::<Error>())
    .map(Error::exit_code)
    .unwrap_or(1)
}
