use std::path::PathBuf;

use crate::core::ports::{FileSystemError, GitError};
use crate::core::repository::Repository;

#[derive(Debug, thiserror::Error)]
pub enum AcquisitionError {
    #[error("Local repository not found: {}", .0.display())]
    Missing(PathBuf),

    #[error("Failed to check out {name}: {source}")]
    Git {
        name: String,
        #[source]
        source: GitError,
    },

    #[error("Failed to prepare {name}: {source}")]
    FileSystem {
        name: String,
        #[source]
        source: FileSystemError,
    },
}

/// Capability to materialize a repository checkout on disk
pub trait RepositoryAcquirer {
    /// Guarantee a working copy exists at `repository.path()`
    ///
    /// Calling this on a repository that is already checked out is a no-op.
    fn ensure(&self, repository: &Repository) -> Result<(), AcquisitionError>;
}
