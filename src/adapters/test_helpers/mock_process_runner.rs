//! Mock process runner for testing
//!
//! Records every command instead of spawning it.

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::core::ProcessEnvironment;
use crate::core::ports::{CommandOutcome, ProcessRunner};

/// A recorded command invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub command: String,
    pub working_dir: PathBuf,
    pub env: ProcessEnvironment,
}

/// Mock process runner for testing
///
/// Commands exit with 0 unless configured otherwise.
pub struct MockProcessRunner {
    invocations: RefCell<Vec<Invocation>>,
    exit_codes: RefCell<HashMap<String, Option<i32>>>,
    spawn_failures: RefCell<Vec<String>>,
}

impl MockProcessRunner {
    pub fn new() -> Self {
        Self {
            invocations: RefCell::new(Vec::new()),
            exit_codes: RefCell::new(HashMap::new()),
            spawn_failures: RefCell::new(Vec::new()),
        }
    }

    /// Make `command` exit with `code` (`None` simulates a signal)
    pub fn set_exit_code(&self, command: impl Into<String>, code: Option<i32>) {
        self.exit_codes.borrow_mut().insert(command.into(), code);
    }

    /// Make `command` fail to spawn
    pub fn fail_spawn(&self, command: impl Into<String>) {
        self.spawn_failures.borrow_mut().push(command.into());
    }

    /// Get the recorded invocations (for assertions)
    pub fn get_invocations(&self) -> Vec<Invocation> {
        self.invocations.borrow().clone()
    }

    /// Get the recorded command lines in order (for assertions)
    pub fn get_commands(&self) -> Vec<String> {
        self.invocations
            .borrow()
            .iter()
            .map(|i| i.command.clone())
            .collect()
    }
}

impl Default for MockProcessRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessRunner for MockProcessRunner {
    fn run(
        &self,
        command: &str,
        working_dir: &Path,
        env: &ProcessEnvironment,
    ) -> Result<CommandOutcome, std::io::Error> {
        if self.spawn_failures.borrow().iter().any(|c| c == command) {
            return Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("{command}: not found"),
            ));
        }

        self.invocations.borrow_mut().push(Invocation {
            command: command.to_string(),
            working_dir: working_dir.to_path_buf(),
            env: env.clone(),
        });

        let code = self
            .exit_codes
            .borrow()
            .get(command)
            .copied()
            .unwrap_or(Some(0));

        Ok(CommandOutcome { code })
    }
}
