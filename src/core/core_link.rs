use std::path::{Path, PathBuf};

use log::{debug, info};
use thiserror::Error;

use crate::core::ports::{FileSystem, FileSystemError};

/// Where plugin specs expect the core checkout, relative to the plugin root
pub const CORE_LINK_DIR: &str = "spec";
pub const CORE_LINK_NAME: &str = "manageiq";

#[derive(Debug, Error)]
pub enum LinkError {
    #[error("Refusing to replace {} with a link: it is not a symlink", .0.display())]
    Occupied(PathBuf),

    #[error("Failed to link {}: {source}", .link.display())]
    FileSystem {
        link: PathBuf,
        #[source]
        source: FileSystemError,
    },
}

/// The `spec/manageiq` symlink a plugin uses to load the core repository
pub struct CoreLink {
    link: PathBuf,
    target: PathBuf,
}

impl CoreLink {
    pub fn new(plugin_path: &Path, core_path: &Path) -> Self {
        Self {
            link: plugin_path.join(CORE_LINK_DIR).join(CORE_LINK_NAME),
            target: core_path.to_path_buf(),
        }
    }

    pub fn link(&self) -> &Path {
        &self.link
    }

    pub fn target(&self) -> &Path {
        &self.target
    }

    /// Create the link, replacing an existing symlink
    ///
    /// A regular file or directory in the way is left untouched and reported
    /// as [`LinkError::Occupied`].
    pub fn create(&self, fs: &dyn FileSystem) -> Result<(), LinkError> {
        let fs_error = |source| LinkError::FileSystem {
            link: self.link.clone(),
            source,
        };

        if fs.is_symlink(&self.link) {
            debug!("Replacing existing link {}", self.link.display());
            fs.remove(&self.link).map_err(fs_error)?;
        } else if fs.exists(&self.link) {
            return Err(LinkError::Occupied(self.link.clone()));
        }

        if let Some(parent) = self.link.parent() {
            fs.create_dir(parent).map_err(fs_error)?;
        }

        fs.create_symlink(&self.target, &self.link).map_err(fs_error)?;
        info!("Linked {} -> {}", self.link.display(), self.target.display());

        Ok(())
    }
}
