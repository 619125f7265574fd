use std::path::Path;

use crate::core::environment::ProcessEnvironment;

/// How an external command finished
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandOutcome {
    /// Exit code, `None` when the process was terminated by a signal
    pub code: Option<i32>,
}

impl CommandOutcome {
    pub fn exited(code: i32) -> Self {
        Self { code: Some(code) }
    }

    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Runs shell commands to completion
///
/// Implementations block until the child exits and must not change the
/// working directory of the calling process.
pub trait ProcessRunner {
    /// Run `command` inside `working_dir` with exactly the variables of `env`
    ///
    /// # Returns
    /// * `Ok(CommandOutcome)` - The command ran, successfully or not
    /// * `Err` - The command could not be spawned
    fn run(
        &self,
        command: &str,
        working_dir: &Path,
        env: &ProcessEnvironment,
    ) -> Result<CommandOutcome, std::io::Error>;
}
