//! External `git` invocation
//!
//! Commands are described as an argument list plus an environment override
//! map and spawned directly, never through a shell.

use crate::artifacts::history::error::GenerateError;
use derive_new::new;
use std::path::Path;
use std::process::Stdio;

/// Runs a version-control command inside a working tree
///
/// Implementations must resolve only once the command has finished, and must
/// report a nonzero exit status as `GenerateError::ExternalCommand`.
#[allow(async_fn_in_trait)]
pub trait CommandRunner {
    async fn run(&self, dir: &Path, args: &[String], envs: &[(String, String)])
    -> anyhow::Result<()>;
}

#[derive(Debug, Clone, new)]
pub struct GitCli {
    program: String,
}

impl Default for GitCli {
    fn default() -> Self {
        GitCli::new("git".to_string())
    }
}

impl CommandRunner for GitCli {
    async fn run(
        &self,
        dir: &Path,
        args: &[String],
        envs: &[(String, String)],
    ) -> anyhow::Result<()> {
        let command_line = describe_command(&self.program, args);
        debug_log!("[git] {} (in {:?}, env {:?})", command_line, dir, envs);

        let output = tokio::process::Command::new(&self.program)
            .args(args)
            .envs(envs.iter().map(|(key, value)| (key.as_str(), value.as_str())))
            .current_dir(dir)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| GenerateError::ExternalCommand {
                command: command_line.clone(),
                code: None,
                stderr: e.to_string(),
            })?;

        if !output.status.success() {
            debug_log!("[git] {} exited with {:?}", command_line, output.status.code());

            return Err(GenerateError::ExternalCommand {
                command: command_line,
                code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            }
            .into());
        }

        Ok(())
    }
}

/// Human-readable command line, used only for error messages
pub fn describe_command(program: &str, args: &[String]) -> String {
    let mut parts = vec![program.to_string()];

    parts.extend(args.iter().map(|arg| {
        if arg.is_empty() || arg.contains(char::is_whitespace) {
            format!("\"{}\"", arg)
        } else {
            arg.clone()
        }
    }));

    parts.join(" ")
}
