use std::path::{Path, PathBuf};

use tokio::process::Command;
use tracing::debug;

/// Execute and handle command line executions
#[derive(Debug, Default, Clone)]
pub struct CliExecutor {
    cwd: Option<PathBuf>,
}

impl CliExecutor {
    /// A new Executor instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Run every command from `dir` instead of the current directory
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self {
            cwd: Some(dir.as_ref().to_path_buf()),
        }
    }

    /// Execute a CLI command and returns the output
    pub async fn execute(&self, command: &str, args: &[&str]) -> anyhow::Result<String> {
        debug!(%command, ?args, "Executing command");
        let output = self.command(command, args).output().await?;
        if !output.status.success() {
            return Err(anyhow::anyhow!(
                "Error executing command `{}`: {}",
                command,
                String::from_utf8_lossy(&output.stderr).trim()
            ));
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }

    /// Run a command attached to the terminal, e.g. an editor, and wait for it to exit
    pub async fn run_interactive(&self, command: &str, args: &[&str]) -> anyhow::Result<()> {
        debug!(%command, ?args, "Running interactive command");
        let status = self.command(command, args).status().await?;
        if !status.success() {
            return Err(anyhow::anyhow!("`{}` exited with {}", command, status));
        }

        Ok(())
    }

    fn command(&self, command: &str, args: &[&str]) -> Command {
        let mut cmd = Command::new(command);
        cmd.args(args);
        if let Some(cwd) = &self.cwd {
            cmd.current_dir(cwd);
        }
        cmd
    }
}
