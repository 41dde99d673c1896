use std::process::Command;

use panefit_core::{Error, ProcessSource, Result};

/// Runs `tasklist /FO CSV /NH` to snapshot the process table.
///
/// The command is invoked once per call; its column order and the `K`
/// memory suffix are relied upon by the parser.
#[derive(Debug, Clone)]
pub struct Tasklist {
    program: String,
}

impl Tasklist {
    pub fn new() -> Self {
        Self::with_program("tasklist")
    }

    /// Uses a different executable that prints the same format.
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(["/FO", "CSV", "/NH"]);
        cmd
    }
}

impl Default for Tasklist {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessSource for Tasklist {
    fn listing(&self) -> Result<String> {
        let output = self.command().output().map_err(|e| Error::ProcessListing {
            message: format!("executing {}: {e}", self.program),
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::ProcessListing {
                message: format!(
                    "{} exited with {}: {}",
                    self.program,
                    output.status,
                    stderr.trim()
                ),
            });
        }

        tracing::debug!(bytes = output.stdout.len(), "process listing captured");
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
