use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum FileSystemError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Path error: {0}")]
    PathError(String),
}

pub trait FileSystem {
    /// Check if a path exists
    ///
    /// Symbolic links are followed, so a dangling link does not exist.
    fn exists(&self, path: &Path) -> bool;

    /// Check if a path is a symbolic link
    ///
    /// # Returns
    /// * `true` if the path is a symbolic link (dangling or not)
    /// * `false` if the path is not a symbolic link or does not exist
    fn is_symlink(&self, path: &Path) -> bool;

    /// Check if a path is a directory
    fn is_dir(&self, path: &Path) -> bool;

    /// Check if a path is a git working copy
    ///
    /// # Returns
    /// * `true` if the path contains a `.git` directory or file (for worktrees)
    /// * `false` otherwise
    fn is_git_repository(&self, path: &Path) -> bool;

    /// Get the home directory path
    ///
    /// # Returns
    /// * `Ok(PathBuf)` - The absolute path to the user's home directory
    /// * `Err` - If the home directory cannot be determined
    fn home_dir(&self) -> Result<PathBuf, FileSystemError>;

    /// Get the current working directory
    fn current_dir(&self) -> Result<PathBuf, FileSystemError>;

    /// Create a directory and all necessary parent directories
    fn create_dir(&self, path: &Path) -> Result<(), FileSystemError>;

    /// Create a symbolic link
    ///
    /// # Arguments
    /// * `target` - The target path the symlink points to
    /// * `link` - The path where the symlink will be created
    fn create_symlink(&self, target: &Path, link: &Path) -> Result<(), FileSystemError>;

    /// Read the target of a symbolic link
    fn read_link(&self, link: &Path) -> Result<PathBuf, FileSystemError>;

    /// Remove a file, a symlink, or a directory and all its contents
    ///
    /// Symlinks are removed without touching what they point to.
    fn remove(&self, path: &Path) -> Result<(), FileSystemError>;

    /// Read a whole file as UTF-8
    ///
    /// # Returns
    /// * `Ok(Some(content))` - The file content
    /// * `Ok(None)` - The file does not exist
    /// * `Err` - The file exists but cannot be read
    fn read_to_string(&self, path: &Path) -> Result<Option<String>, FileSystemError>;

    /// Write a whole file, replacing any previous content
    fn write(&self, path: &Path, content: &str) -> Result<(), FileSystemError>;

    /// Normalize a path to an absolute ``PathBuf``
    ///
    /// # Arguments
    /// * `path` - The path to normalize (supports `~` expansion)
    /// * `base` - Base directory for resolving relative paths
    ///
    /// # Path resolution rules
    /// - `~` or `~/path`: Expanded to home directory (base parameter is ignored)
    /// - `/absolute/path`: Used as-is (base parameter is ignored)
    /// - `relative/path`: Resolved from the base directory
    fn normalize(&self, path: &Path, base: &Path) -> Result<PathBuf, FileSystemError>;
}
