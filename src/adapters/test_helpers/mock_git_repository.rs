//! Mock Git repository for testing
//!
//! Provides a mock implementation of Git operations for testing.

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use super::MockFileSystem;
use crate::core::ports::{GitError, GitRepository};

/// Mock Git repository for testing
///
/// When a [`MockFileSystem`] is attached, successful clones create a git
/// working copy in it so later `is_git_repository` checks see the checkout.
pub struct MockGitRepository {
    fs: RefCell<Option<Rc<MockFileSystem>>>,
    cloned_repos: RefCell<Vec<(String, PathBuf)>>,
    checkouts: RefCell<Vec<(PathBuf, String)>>,
    clone_failures: RefCell<HashMap<String, GitError>>,
    checkout_failures: RefCell<HashMap<PathBuf, GitError>>,
}

impl MockGitRepository {
    pub fn new() -> Self {
        Self {
            fs: RefCell::new(None),
            cloned_repos: RefCell::new(Vec::new()),
            checkouts: RefCell::new(Vec::new()),
            clone_failures: RefCell::new(HashMap::new()),
            checkout_failures: RefCell::new(HashMap::new()),
        }
    }

    /// Materialize clones in `fs`
    pub fn attach_file_system(&self, fs: Rc<MockFileSystem>) {
        *self.fs.borrow_mut() = Some(fs);
    }

    /// Make cloning `url` fail with `error`
    pub fn fail_clone_for(&self, url: impl Into<String>, error: GitError) {
        self.clone_failures.borrow_mut().insert(url.into(), error);
    }

    /// Make checking out anything in `repo_path` fail with `error`
    pub fn fail_checkout_for(&self, repo_path: impl AsRef<Path>, error: GitError) {
        self.checkout_failures
            .borrow_mut()
            .insert(repo_path.as_ref().to_path_buf(), error);
    }

    /// Get the list of cloned repositories (for assertions)
    pub fn get_cloned_repos(&self) -> Vec<(String, PathBuf)> {
        self.cloned_repos.borrow().clone()
    }

    /// Get the list of checked out references (for assertions)
    pub fn get_checkouts(&self) -> Vec<(PathBuf, String)> {
        self.checkouts.borrow().clone()
    }
}

impl Default for MockGitRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl GitRepository for MockGitRepository {
    fn clone_repository(&self, url: &str, destination: &Path) -> Result<(), GitError> {
        if let Some(err) = self.clone_failures.borrow_mut().remove(url) {
            return Err(err);
        }

        if let Some(fs) = self.fs.borrow().as_ref() {
            fs.add_git_repo(destination);
        }

        self.cloned_repos
            .borrow_mut()
            .push((url.to_string(), destination.to_path_buf()));

        Ok(())
    }

    fn checkout_reference(&self, repo_path: &Path, reference: &str) -> Result<(), GitError> {
        if let Some(err) = self.checkout_failures.borrow_mut().remove(repo_path) {
            return Err(err);
        }

        self.checkouts
            .borrow_mut()
            .push((repo_path.to_path_buf(), reference.to_string()));

        Ok(())
    }
}
