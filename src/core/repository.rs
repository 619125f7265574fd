use std::path::{Path, PathBuf};
use std::rc::Rc;

use log::{debug, info, warn};

use crate::core::ports::{
    AcquisitionError, FileSystem, FileSystemError, GitRepository, RepositoryAcquirer,
};
use crate::core::repo_spec::{RepoSpec, build_checkout_path};

/// A named checkout with a deterministic location on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repository {
    spec: RepoSpec,
    name: String,
    path: PathBuf,
}

impl Repository {
    /// Resolve where `spec` lives on disk
    ///
    /// Remote repositories live under `root`; local paths are normalized
    /// against the current directory.
    pub fn resolve(
        spec: RepoSpec,
        root: &Path,
        fs: &dyn FileSystem,
    ) -> Result<Self, FileSystemError> {
        let (name, path) = match &spec {
            RepoSpec::Remote {
                host,
                org,
                name,
                reference,
                ..
            } => (
                name.clone(),
                build_checkout_path(root, host, org, name, reference),
            ),
            RepoSpec::Local { path } => {
                let path = fs.normalize(path, &fs.current_dir()?)?;
                let name = path
                    .file_name()
                    .map_or_else(|| spec.name(), |n| n.to_string_lossy().into_owned());
                (name, path)
            }
        };

        Ok(Self { spec, name, path })
    }

    pub fn spec(&self) -> &RepoSpec {
        &self.spec
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The checkout location, valid once the repository has been ensured
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Materializes repositories by cloning them with git
pub struct GitCheckoutAcquirer {
    git: Rc<dyn GitRepository>,
    fs: Rc<dyn FileSystem>,
}

impl GitCheckoutAcquirer {
    pub fn new(git: Rc<dyn GitRepository>, fs: Rc<dyn FileSystem>) -> Self {
        Self { git, fs }
    }

    fn checkout(
        &self,
        repository: &Repository,
        url: &str,
        reference: &str,
    ) -> Result<(), AcquisitionError> {
        let path = repository.path();
        let git_error = |source| AcquisitionError::Git {
            name: repository.name().to_string(),
            source,
        };

        info!("Cloning {} into {}", repository.spec(), path.display());
        self.git.clone_repository(url, path).map_err(git_error)?;

        debug!("Checking out {reference} in {}", path.display());
        self.git
            .checkout_reference(path, reference)
            .map_err(git_error)
    }
}

impl RepositoryAcquirer for GitCheckoutAcquirer {
    fn ensure(&self, repository: &Repository) -> Result<(), AcquisitionError> {
        let path = repository.path();

        let (url, reference) = match repository.spec() {
            RepoSpec::Local { .. } => {
                if self.fs.is_dir(path) {
                    debug!("Using local checkout {}", path.display());
                    return Ok(());
                }
                return Err(AcquisitionError::Missing(path.to_path_buf()));
            }
            RepoSpec::Remote { url, reference, .. } => (url, reference.fetch_ref()),
        };

        if self.fs.is_git_repository(path) {
            debug!("{} already checked out at {}", repository.spec(), path.display());
            return Ok(());
        }

        let fs_error = |source| AcquisitionError::FileSystem {
            name: repository.name().to_string(),
            source,
        };

        if self.fs.exists(path) || self.fs.is_symlink(path) {
            warn!("Removing incomplete checkout at {}", path.display());
            self.fs.remove(path).map_err(fs_error)?;
        }

        if let Some(parent) = path.parent() {
            self.fs.create_dir(parent).map_err(fs_error)?;
        }

        if let Err(error) = self.checkout(repository, url, &reference) {
            if self.fs.exists(path) {
                self.fs.remove(path).map_err(fs_error)?;
            }
            return Err(error);
        }

        Ok(())
    }
}
