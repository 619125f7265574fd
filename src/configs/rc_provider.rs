use std::path::{Path, PathBuf};
use std::rc::Rc;

use serde::Deserialize;

use crate::configs::{ConfigError, provider::ConfigProvider};
use crate::core::ports::FileSystem;

const RC_FILE_NAME: &str = ".cross_reporc";

/// TOML structure for .cross_reporc file
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RcFile {
    root: String,
}

/// Provider for ~/.cross_reporc configuration file
///
/// Reads and parses a TOML file at `~/.cross_reporc` with the following format:
///
/// ```toml
/// root = "/path/to/root"
/// ```
pub struct RcFileProvider {
    fs: Rc<dyn FileSystem>,
}

impl RcFileProvider {
    pub fn new(fs: Rc<dyn FileSystem>) -> Self {
        Self { fs }
    }
}

impl ConfigProvider for RcFileProvider {
    fn load_root(&self) -> Result<Option<PathBuf>, ConfigError> {
        let home = self.fs.home_dir()?;
        let rc_path = home.join(RC_FILE_NAME);

        // If file doesn't exist, return None to try next provider
        let content = match self.fs.read_to_string(&rc_path) {
            Ok(Some(c)) => c,
            Ok(None) => return Ok(None),
            Err(e) => return Err(ConfigError::Io(format!("Failed to read {RC_FILE_NAME}: {e}"))),
        };

        // Parse TOML - any parse error should stop immediately
        let parsed: RcFile = toml::from_str(&content)
            .map_err(|e| ConfigError::Parse(format!("Failed to parse {RC_FILE_NAME}: {e}")))?;

        let normalized = self.fs.normalize(Path::new(parsed.root.trim()), &home)?;

        Ok(Some(normalized))
    }
}
