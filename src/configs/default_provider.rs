use std::path::PathBuf;
use std::rc::Rc;

use crate::configs::{ConfigError, provider::ConfigProvider};
use crate::core::ports::FileSystem;

const DEFAULT_ROOT_DIR: &str = "cross_repo";

/// Provider for the default configuration value
///
/// Always returns `~/cross_repo` as the root directory.
/// This provider should be last in the priority chain as a fallback.
pub struct DefaultProvider {
    fs: Rc<dyn FileSystem>,
}

impl DefaultProvider {
    pub fn new(fs: Rc<dyn FileSystem>) -> Self {
        Self { fs }
    }
}

impl ConfigProvider for DefaultProvider {
    fn load_root(&self) -> Result<Option<PathBuf>, ConfigError> {
        let home = self.fs.home_dir()?;
        Ok(Some(home.join(DEFAULT_ROOT_DIR)))
    }
}
