use std::path::{Path, PathBuf};
use std::rc::Rc;

use crate::configs::{ConfigError, provider::ConfigProvider};
use crate::core::ports::FileSystem;

const GIT_CONFIG_ROOT_KEY: &str = "crossrepo.root";

/// Provider for ~/.gitconfig configuration
///
/// Reads the `crossrepo.root` key from the `[crossrepo]` section in `~/.gitconfig`.
///
/// Example configuration:
///
/// ```ini
/// [crossrepo]
///     root = /path/to/root
/// ```
pub struct GitConfigProvider {
    fs: Rc<dyn FileSystem>,
}

impl GitConfigProvider {
    pub fn new(fs: Rc<dyn FileSystem>) -> Self {
        Self { fs }
    }

    fn read_root(&self, config: &git2::Config) -> Result<Option<PathBuf>, ConfigError> {
        let root_str = match config.get_string(GIT_CONFIG_ROOT_KEY) {
            Ok(s) => s,
            Err(e) if e.code() == git2::ErrorCode::NotFound => {
                // Key doesn't exist, skip to next provider
                return Ok(None);
            }
            Err(e) => {
                return Err(ConfigError::GitConfig(e.to_string()));
            }
        };

        let home = self.fs.home_dir()?;
        let normalized = self.fs.normalize(Path::new(root_str.trim()), &home)?;

        Ok(Some(normalized))
    }
}

impl ConfigProvider for GitConfigProvider {
    fn load_root(&self) -> Result<Option<PathBuf>, ConfigError> {
        let config = match git2::Config::open_default() {
            Ok(c) => c,
            Err(e) => {
                // If .gitconfig doesn't exist, skip to next provider
                if e.code() == git2::ErrorCode::NotFound {
                    return Ok(None);
                }
                return Err(ConfigError::GitConfig(e.to_string()));
            }
        };

        self.read_root(&config)
    }
}
