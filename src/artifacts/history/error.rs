//! Error kinds reported by the commit generator
//!
//! Every kind is terminal for the run. Validation failures (`Format`, `Range`,
//! `NotARepository`) are benign early returns, while `Input` and
//! `ExternalCommand` abort the process with a failure status.

use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerateError {
    /// A date did not match `YYYY-MM-DD`
    Format { value: String },
    /// The start date is after the end date
    Range { start: String, end: String },
    /// The target path has no `.git` entry
    NotARepository { path: PathBuf },
    /// The commit count is not a non-negative integer
    Input { value: String },
    /// `git` exited with a nonzero status or could not be spawned
    ExternalCommand {
        command: String,
        code: Option<i32>,
        stderr: String,
    },
}

impl GenerateError {
    /// Whether the run ended before any commit was attempted because of a
    /// reported validation message.
    pub fn is_benign(&self) -> bool {
        matches!(
            self,
            GenerateError::Format { .. }
                | GenerateError::Range { .. }
                | GenerateError::NotARepository { .. }
        )
    }

    pub fn exit_code(&self) -> i32 {
        if self.is_benign() { 0 } else { 1 }
    }
}

impl std::fmt::Display for GenerateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenerateError::Format { .. } => {
                write!(f, "Error: Dates must be in YYYY-MM-DD format.")
            }
            GenerateError::Range { .. } => {
                write!(f, "Error: Start date cannot be after end date.")
            }
            GenerateError::NotARepository { path } => {
                write!(f, "Error: {} is not a valid git repository.", path.display())
            }
            GenerateError::Input { .. } => write!(f, "Invalid number."),
            GenerateError::ExternalCommand {
                command, stderr, ..
            } => {
                write!(f, "Error executing command: {}", command)?;
                if !stderr.trim().is_empty() {
                    write!(f, "\n{}", stderr.trim_end())?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for GenerateError {}
