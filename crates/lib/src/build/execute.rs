//! Invoking the packaging tool.
//!
//! The tool's stdout and stderr are drained concurrently and relayed to a
//! single writer as lines arrive, so the operator sees one interleaved stream
//! and neither pipe can fill up and stall the child.

use std::io::Write;
use std::process::Stdio;

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::process::Command;
use tracing::{debug, info};

use crate::build::types::{BuildError, ToolCommand, ToolOutput};

/// Run `tool` with `args` for `package`, relaying its combined output to `out`.
///
/// Returns once the tool exits, whatever its status. Only a failure to start
/// the tool or to relay its output is an error here.
pub async fn run_tool<W: Write>(
  package: &str,
  tool: &ToolCommand,
  args: &[String],
  out: &mut W,
) -> Result<ToolOutput, BuildError> {
  let argv = tool.argv(args);
  info!(package, tool = %tool, "invoking packaging tool");
  debug!(program = %tool.program, args = ?argv, "spawning process");

  let mut child = Command::new(&tool.program)
    .args(&argv)
    .stdin(Stdio::null())
    .stdout(Stdio::piped())
    .stderr(Stdio::piped())
    .kill_on_drop(true)
    .spawn()
    .map_err(|source| BuildError::Spawn {
      package: package.to_string(),
      tool: tool.to_string(),
      source,
    })?;

  let stdout = child
    .stdout
    .take()
    .ok_or_else(|| std::io::Error::other("tool stdout was not captured"))?;
  let stderr = child
    .stderr
    .take()
    .ok_or_else(|| std::io::Error::other("tool stderr was not captured"))?;

  let mut stdout = BufReader::new(stdout);
  let mut stderr = BufReader::new(stderr);
  let mut stdout_line = Vec::new();
  let mut stderr_line = Vec::new();
  let mut stdout_open = true;
  let mut stderr_open = true;
  let mut combined = Vec::new();

  while stdout_open || stderr_open {
    tokio::select! {
      read = stdout.read_until(b'\n', &mut stdout_line), if stdout_open => {
        if read? == 0 {
          stdout_open = false;
        } else {
          relay(&mut stdout_line, out, &mut combined)?;
        }
      }
      read = stderr.read_until(b'\n', &mut stderr_line), if stderr_open => {
        if read? == 0 {
          stderr_open = false;
        } else {
          relay(&mut stderr_line, out, &mut combined)?;
        }
      }
    }
  }

  let status = child.wait().await?;
  debug!(package, code = ?status.code(), "tool exited");

  Ok(ToolOutput {
    status,
    output: String::from_utf8_lossy(&combined).into_owned(),
  })
}

fn relay<W: Write>(line: &mut Vec<u8>, out: &mut W, combined: &mut Vec<u8>) -> std::io::Result<()> {
  out.write_all(line)?;
  out.flush()?;
  combined.append(line);
  Ok(())
}
