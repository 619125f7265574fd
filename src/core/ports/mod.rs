pub mod file_system;
pub mod git_repository;
pub mod process_runner;
pub mod repository_acquirer;
pub mod user_interaction;

pub use file_system::{FileSystem, FileSystemError};
pub use git_repository::{GitError, GitRepository};
pub use process_runner::{CommandOutcome, ProcessRunner};
pub use repository_acquirer::{AcquisitionError, RepositoryAcquirer};
pub use user_interaction::UserInteraction;
