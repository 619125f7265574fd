use thiserror::Error;

use crate::configs::ConfigError;
use crate::core::core_link::LinkError;
use crate::core::gem_overrides::ConfigurationError;
use crate::core::ports::{AcquisitionError, FileSystemError};
use crate::core::repo_spec::RepoSpecError;

/// Failure of an external setup or test command
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("Command `{command}` exited with status {}", format_code(*.code))]
    Failed { command: String, code: Option<i32> },

    #[error("Failed to spawn `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },
}

fn format_code(code: Option<i32>) -> String {
    code.map_or_else(|| "unknown (terminated by signal)".to_string(), |c| c.to_string())
}

#[derive(Debug, Error)]
pub enum CrossRepoError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid repository: {0}")]
    RepoSpec(#[from] RepoSpecError),

    #[error("Acquisition error: {0}")]
    Acquisition(#[from] AcquisitionError),

    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    #[error("Link error: {0}")]
    Link(#[from] LinkError),

    #[error("Command error: {0}")]
    Command(#[from] CommandError),

    #[error("File system error: {0}")]
    FileSystem(#[from] FileSystemError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
