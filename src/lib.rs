//! Backdated commit-history generator
//!
//! Appends a line to a tracked file and runs `git add` / `git commit` with the
//! author and committer dates forced to random instants inside a date range.
//!
//! - `areas`: the opened working tree, the target file and the `git` process runner
//! - `artifacts`: date ranges, timestamp sampling, errors and input prompts
//! - `commands`: the generation loop exposed as a `Repository` command

/// Macro for debug logging that is enabled with the debug_generate feature flag
///
/// # Usage
/// ```rust,ignore
/// debug_log!("Running {}", command_line);
/// ```
macro_rules! debug_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "debug_generate")]
        {
            eprintln!($($arg)*);
        }
    };
}

pub mod areas;
pub mod artifacts;
pub mod commands;
