use std::path::{Path, PathBuf};
use std::rc::Rc;

use crate::configs::{ConfigError, provider::ConfigProvider};
use crate::core::ports::FileSystem;

const ROOT_ENV_VAR: &str = "CROSS_REPO_ROOT";

/// Provider for environment variable configuration
///
/// Reads the `CROSS_REPO_ROOT` environment variable and normalizes the path.
pub struct EnvProvider {
    fs: Rc<dyn FileSystem>,
}

impl EnvProvider {
    pub fn new(fs: Rc<dyn FileSystem>) -> Self {
        Self { fs }
    }

    fn normalize(&self, value: &str) -> Result<Option<PathBuf>, ConfigError> {
        let value = value.trim();
        if value.is_empty() {
            return Ok(None);
        }

        let home = self.fs.home_dir()?;
        let normalized = self.fs.normalize(Path::new(value), &home)?;
        Ok(Some(normalized))
    }
}

impl ConfigProvider for EnvProvider {
    fn load_root(&self) -> Result<Option<PathBuf>, ConfigError> {
        match std::env::var(ROOT_ENV_VAR) {
            Ok(path_str) => self.normalize(&path_str),
            Err(std::env::VarError::NotPresent) => Ok(None),
            Err(e) => Err(ConfigError::Env(e.to_string())),
        }
    }
}
