//! Test helpers for mocking dependencies in tests
//!
//! This module provides mock implementations of the core ports:
//! - `MockFileSystem`: In-memory filesystem simulation
//! - `MockGitRepository`: Git operations simulation
//! - `MockProcessRunner`: Records commands instead of running them
//! - `MockUserInteraction`: User interaction simulation

mod mock_file_system;
mod mock_git_repository;
mod mock_process_runner;

pub use mock_file_system::MockFileSystem;
pub use mock_git_repository::MockGitRepository;
pub use mock_process_runner::{Invocation, MockProcessRunner};
pub use mock_user_interaction::MockUserInteraction;
