use std::rc::Rc;

use log::{debug, info};

use crate::core::GemOverrides;
use crate::core::Repository;
use crate::core::ports::{FileSystem, RepositoryAcquirer};
use crate::errors::CrossRepoError;

/// Checks out gem repositories and points the target's bundler at them
pub struct PrepareGemReposUseCase {
    acquirer: Rc<dyn RepositoryAcquirer>,
    fs: Rc<dyn FileSystem>,
}

impl PrepareGemReposUseCase {
    pub fn new(acquirer: Rc<dyn RepositoryAcquirer>, fs: Rc<dyn FileSystem>) -> Self {
        Self { acquirer, fs }
    }

    /// Ensure every gem repository, then register each one as a local override
    ///
    /// All gems are ensured before the override file is touched, so a failed
    /// checkout leaves the target's configuration unchanged.
    pub fn execute(
        &self,
        gem_repos: &[Repository],
        target: &Repository,
    ) -> Result<(), CrossRepoError> {
        if gem_repos.is_empty() {
            debug!("No gem repositories to prepare for {}", target.name());
            return Ok(());
        }

        for gem_repo in gem_repos {
            self.acquirer.ensure(gem_repo)?;
        }

        let mut overrides = GemOverrides::load(self.fs.as_ref(), target.path())?;
        for gem_repo in gem_repos {
            info!(
                "Overriding gem {} with {}",
                gem_repo.name(),
                gem_repo.path().display()
            );
            overrides.insert(gem_repo.name(), gem_repo.path());
        }
        overrides.save(self.fs.as_ref())?;

        Ok(())
    }
}
