use std::path::Path;
use std::process::{Command, Stdio};

use log::debug;

use crate::core::ProcessEnvironment;
use crate::core::ports::{CommandOutcome, ProcessRunner};

/// Runs commands through `sh -c` with inherited stdio
pub struct SystemProcessRunner;

impl SystemProcessRunner {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemProcessRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessRunner for SystemProcessRunner {
    fn run(
        &self,
        command: &str,
        working_dir: &Path,
        env: &ProcessEnvironment,
    ) -> Result<CommandOutcome, std::io::Error> {
        debug!("Running `{command}` in {}", working_dir.display());

        let status = Command::new("sh")
            .arg("-c")
            .arg(command)
            .current_dir(working_dir)
            .env_clear()
            .envs(env.iter())
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()?;

        Ok(CommandOutcome {
            code: status.code(),
        })
    }
}
