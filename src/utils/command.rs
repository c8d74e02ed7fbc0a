//! Command execution utilities

use crate::error::{Result, RigcheckError};
use std::process::Command;

/// Captured result of a finished command
#[derive(Debug, Clone)]
pub struct CommandOutput {
    pub stdout: String,
    pub success: bool,
    pub code: Option<i32>,
}

/// Execute a command and capture stdout, whatever the exit status
pub fn capture_command(program: &str, args: &[String]) -> Result<CommandOutput> {
    let output = Command::new(program).args(args).output()?;

    Ok(CommandOutput {
        stdout: String::from_utf8_lossy(&output.stdout).trim().to_string(),
        success: output.status.success(),
        code: output.status.code(),
    })
}

/// Execute a command and return stdout as String
pub fn run_command(program: &str, args: &[&str]) -> Result<String> {
    let output = Command::new(program).args(args).output()?;

    if output.status.success() {
        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    } else {
        Err(RigcheckError::Detection(format!(
            "Command '{}' failed with exit code: {:?}",
            program,
            output.status.code()
        )))
    }
}

/// Check if a command exists in PATH
pub fn command_exists(program: &str) -> bool {
    use std::env;

    if let Ok(path) = env::var("PATH") {
        for dir in env::split_paths(&path) {
            let full_path = dir.join(program);
            if full_path.is_file() {
                return true;
            }
        }
    }
    false
}
