//! Configuration management for cross-repo
//!
//! This module provides a unified `Config` struct that loads settings from
//! multiple sources in priority order. The internal provider implementations
//! are private to enforce the standard configuration loading pattern.
//!
//! # Configuration Priority
//!
//! 1. Environment variable `CROSS_REPO_ROOT`
//! 2. `~/.cross_reporc` (TOML format)
//! 3. `~/.gitconfig` ([crossrepo] section)
//! 4. Default: `~/cross_repo`

mod default_provider;
mod env_provider;
mod gitconfig_provider;
pub(crate) mod provider;
mod rc_provider;

use std::path::{Path, PathBuf};
use std::rc::Rc;
use thiserror::Error;

use crate::core::ports::{FileSystem, FileSystemError};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse config: {0}")]
    Parse(String),

    #[error("Failed to read config: {0}")]
    Io(String),

    #[error("Git config error: {0}")]
    GitConfig(String),

    #[error("Environment variable error: {0}")]
    Env(String),

    #[error("File system error: {0}")]
    FileSystem(#[from] FileSystemError),
}

/// cross-repo configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Root directory under which remote repositories are checked out
    pub root: PathBuf,
}

impl Config {
    /// Load configuration from the first provider that has a value
    pub fn load(fs: &Rc<dyn FileSystem>) -> Result<Self, ConfigError> {
        use provider::ConfigProvider;

        let providers: Vec<Box<dyn ConfigProvider>> = vec![
            Box::new(env_provider::EnvProvider::new(Rc::clone(fs))),
            Box::new(rc_provider::RcFileProvider::new(Rc::clone(fs))),
            Box::new(gitconfig_provider::GitConfigProvider::new(Rc::clone(fs))),
            Box::new(default_provider::DefaultProvider::new(Rc::clone(fs))),
        ];

        Self::from_providers(&providers)
    }

    /// Try each provider in order until one returns a value
    ///
    /// A provider error stops the chain immediately.
    fn from_providers(providers: &[Box<dyn provider::ConfigProvider>]) -> Result<Self, ConfigError> {
        for provider in providers {
            if let Some(root) = provider.load_root()? {
                return Ok(Config { root });
            }
        }

        Err(ConfigError::Parse(
            "No configuration source provided a root directory".into(),
        ))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}
