use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum GitError {
    #[error("Failed to execute git command: {0}")]
    Execution(String),

    #[error("Git command failed with status {status}: {stderr}")]
    Failed { status: i32, stderr: String },
}

pub trait GitRepository {
    fn clone_repository(&self, url: &str, destination: &Path) -> Result<(), GitError>;

    /// Fetch `reference` from `origin` and check it out as a detached HEAD
    ///
    /// `reference` can be anything `git fetch origin <ref>` accepts: a branch,
    /// a tag, a commit sha or a pull request ref such as `pull/42/head`.
    fn checkout_reference(&self, repo_path: &Path, reference: &str) -> Result<(), GitError>;
}
