//! Wrapper around the external interactive screen-capture tool.
//!
//! The tool blocks until the operator selects a region (or cancels), so a
//! single invocation can take arbitrarily long. We never time it out.

use super::outcome::CaptureOutcome;
use crate::utils::config::{CAPTURE_FLAGS, CAPTURE_PROGRAM};
use crate::utils::error::CaptureError;
use log::{debug, info};
use std::path::Path;
use std::process::{Command, Output};

/// Handle to the platform screen-capture binary
#[derive(Debug, Clone)]
pub struct CaptureTool {
    program: String,
    flags: Vec<String>,
}

impl Default for CaptureTool {
    fn default() -> Self {
        Self::new()
    }
}

impl CaptureTool {
    /// Create a tool using the platform default (`screencapture -i -x`)
    pub fn new() -> Self {
        Self::with_command(CAPTURE_PROGRAM, CAPTURE_FLAGS)
    }

    /// Create a tool invoking an arbitrary command
    ///
    /// The destination path is always appended as the last argument.
    /// Used by tests to substitute non-interactive stand-ins.
    pub fn with_command(program: impl Into<String>, flags: &[&str]) -> Self {
        Self {
            program: program.into(),
            flags: flags.iter().map(|f| (*f).to_string()).collect(),
        }
    }

    /// Name of the program this tool invokes
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Verify the capture binary is resolvable on PATH
    ///
    /// # Errors
    /// `CaptureError::ToolNotFound` when the program cannot be located.
    pub fn preflight(&self) -> Result<(), CaptureError> {
        let resolved = which::which(&self.program)
            .map_err(|_| CaptureError::ToolNotFound(self.program.clone()))?;
        debug!("capture tool resolved to {}", resolved.display());
        Ok(())
    }

    /// Invoke the capture tool once, writing to `dest`
    ///
    /// Blocks until the tool exits. The exit status and the presence of
    /// `dest` decide the outcome; cancellation is not an error.
    ///
    /// # Errors
    /// `CaptureError::LaunchFailed` when the process cannot be spawned at
    /// all. Everything the tool itself reports becomes a `CaptureOutcome`.
    pub fn capture(&self, dest: &Path) -> Result<CaptureOutcome, CaptureError> {
        info!("invoking {} -> {}", self.program, dest.display());

        let output = Command::new(&self.program)
            .args(&self.flags)
            .arg(dest)
            .output()
            .map_err(|source| CaptureError::LaunchFailed {
                program: self.program.clone(),
                source,
            })?;

        Ok(map_exit(&output, dest))
    }
}

/// Map the capture tool's exit state to an outcome
fn map_exit(output: &Output, dest: &Path) -> CaptureOutcome {
    let stderr = String::from_utf8_lossy(&output.stderr);
    let stderr = stderr.trim();

    // No exit code means the child died from a signal: the operator
    // interrupted the capture.
    let Some(code) = output.status.code() else {
        debug!("capture tool terminated by signal");
        return CaptureOutcome::Cancelled;
    };

    if code == 0 {
        if dest.exists() {
            return CaptureOutcome::Saved {
                path: dest.to_path_buf(),
            };
        }
        // Clean exit without a file: the selection was dismissed.
        debug!("capture tool exited 0 but wrote no file");
        return CaptureOutcome::Cancelled;
    }

    // screencapture exits non-zero without diagnostics when the operator
    // presses Escape; anything with stderr text is a real failure.
    if stderr.is_empty() {
        CaptureOutcome::Cancelled
    } else {
        CaptureOutcome::Failed {
            reason: stderr.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_platform_tool() {
        let tool = CaptureTool::new();
        assert_eq!(tool.program(), CAPTURE_PROGRAM);
    }

    #[test]
    fn test_with_command_overrides_program() {
        let tool = CaptureTool::with_command("stub-capture", &["--flag"]);
        assert_eq!(tool.program(), "stub-capture");
    }

    #[test]
    fn test_preflight_missing_tool() {
        let tool = CaptureTool::with_command("docshot-no-such-binary", &[]);
        assert!(matches!(
            tool.preflight(),
            Err(CaptureError::ToolNotFound(_))
        ));
    }

    #[cfg(unix)]
    mod exit_mapping {
        use super::*;
        use std::os::unix::process::ExitStatusExt;
        use std::process::ExitStatus;

        // Raw wait status: exit code n is n << 8, signal k is k.
        fn fake_output(raw_status: i32, stderr: &str) -> Output {
            Output {
                status: ExitStatus::from_raw(raw_status),
                stdout: Vec::new(),
                stderr: stderr.as_bytes().to_vec(),
            }
        }

        #[test]
        fn test_exit_zero_with_file_is_saved() {
            let dir = tempfile::tempdir().unwrap();
            let dest = dir.path().join("shot.png");
            std::fs::write(&dest, b"png").unwrap();

            let outcome = map_exit(&fake_output(0, ""), &dest);
            assert_eq!(outcome.path(), Some(dest.as_path()));
        }

        #[test]
        fn test_exit_zero_without_file_is_cancelled() {
            let dir = tempfile::tempdir().unwrap();
            let dest = dir.path().join("missing.png");

            let outcome = map_exit(&fake_output(0, ""), &dest);
            assert!(matches!(outcome, CaptureOutcome::Cancelled));
        }

        #[test]
        fn test_nonzero_silent_exit_is_cancelled() {
            let dir = tempfile::tempdir().unwrap();
            let dest = dir.path().join("missing.png");

            let outcome = map_exit(&fake_output(1 << 8, ""), &dest);
            assert!(matches!(outcome, CaptureOutcome::Cancelled));
        }

        #[test]
        fn test_nonzero_exit_with_stderr_is_failed() {
            let dir = tempfile::tempdir().unwrap();
            let dest = dir.path().join("missing.png");

            let outcome = map_exit(&fake_output(1 << 8, "could not create image\n"), &dest);
            match outcome {
                CaptureOutcome::Failed { reason } => {
                    assert_eq!(reason, "could not create image");
                }
                other => panic!("expected Failed, got {other:?}"),
            }
        }

        #[test]
        fn test_signal_death_is_cancelled() {
            let dir = tempfile::tempdir().unwrap();
            let dest = dir.path().join("missing.png");

            // SIGINT
            let outcome = map_exit(&fake_output(2, ""), &dest);
            assert!(matches!(outcome, CaptureOutcome::Cancelled));
        }
    }
}
