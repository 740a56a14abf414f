//! Command execution primitives with consistent error handling.

use std::process::{Command, Output};

use crate::error::{Error, Result};

/// Run a command in a specific directory.
///
/// Returns trimmed stdout if the command succeeds.
/// Returns an error with stderr (or stdout fallback) if it fails.
pub fn run_in(dir: &str, program: &str, args: &[&str], context: &str) -> Result<String> {
    let output = Command::new(program)
        .args(args)
        .current_dir(dir)
        .output()
        .map_err(|e| {
            Error::internal_io(
                format!("Failed to run {}: {}", context, e),
                Some(context.to_string()),
            )
        })?;

    if !output.status.success() {
        return Err(Error::internal_io(
            format!("{} failed: {}", context, error_text(&output)),
            Some(context.to_string()),
        ));
    }

    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

/// Extract error text from command output.
///
/// Prefers stderr, falls back to stdout if stderr is empty.
pub fn error_text(output: &Output) -> String {
    let stderr = String::from_utf8_lossy(&output.stderr);
    if !stderr.trim().is_empty() {
        stderr.trim().to_string()
    } else {
        String::from_utf8_lossy(&output.stdout).trim().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_in_succeeds_with_valid_command() {
        let result = run_in(".", "echo", &["hello"], "echo test");
        assert!(result.is_ok());
        assert_eq!(result.unwrap(), "hello");
    }

    #[test]
    fn run_in_fails_with_invalid_command() {
        let result = run_in(".", "nonexistent_command_xyz", &[], "test");
        assert!(result.is_err());
    }

    #[test]
    fn run_in_reports_failure_output() {
        let err = run_in(".", "sh", &["-c", "echo broken >&2; exit 3"], "sh test").unwrap_err();
        assert!(err.message.contains("broken"));
    }

    #[test]
    fn error_text_prefers_stderr() {
        let output = Command::new("sh")
            .args(["-c", "echo out; echo err >&2"])
            .output()
            .unwrap();
        assert_eq!(error_text(&output), "err");
    }

    #[test]
    fn error_text_falls_back_to_stdout() {
        let output = Command::new("sh").args(["-c", "echo out"]).output().unwrap();
        assert_eq!(error_text(&output), "out");
    }
}
