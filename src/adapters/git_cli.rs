use std::path::Path;
use std::process::{Command, Stdio};

use crate::core::ports::{GitError, GitRepository};

pub struct GitCli;

impl GitCli {
    pub fn new() -> Self {
        Self
    }

    fn run_command_inherit(args: &[&str]) -> Result<(), GitError> {
        match Command::new("git")
            .args(args)
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
        {
            Ok(status) if status.success() => Ok(()),
            Ok(status) => Err(GitError::Failed {
                status: status.code().unwrap_or(-1),
                stderr: format!("git {} failed", args.join(" ")),
            }),
            Err(error) => {
                let message = format!("Failed to execute git {}: {}", args.join(" "), error);

                Err(GitError::Execution(message))
            }
        }
    }
}

impl Default for GitCli {
    fn default() -> Self {
        Self::new()
    }
}

impl GitRepository for GitCli {
    fn clone_repository(&self, url: &str, destination: &Path) -> Result<(), GitError> {
        let dest_path = destination.to_string_lossy();

        Self::run_command_inherit(&["clone", url, dest_path.as_ref()])
    }

    fn checkout_reference(&self, repo_path: &Path, reference: &str) -> Result<(), GitError> {
        let repo_path = repo_path.to_string_lossy();

        Self::run_command_inherit(&["-C", repo_path.as_ref(), "fetch", "origin", reference])?;
        Self::run_command_inherit(&[
            "-C",
            repo_path.as_ref(),
            "checkout",
            "--detach",
            "FETCH_HEAD",
        ])
    }
}
