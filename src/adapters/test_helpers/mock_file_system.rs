//! Mock filesystem for testing
//!
//! Provides an in-memory filesystem simulation with basic operations.

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Component, Path, PathBuf};

use crate::core::ports::{FileSystem, FileSystemError};

/// Mock entry in the filesystem
#[derive(Debug, Clone)]
enum MockFsEntry {
    Dir,
    File(String),
    Symlink(PathBuf),
}

/// Mock filesystem for testing
///
/// Provides an in-memory filesystem simulation with basic operations.
/// Symlinks are not followed except by `exists`, which resolves one level.
pub struct MockFileSystem {
    entries: RefCell<HashMap<PathBuf, MockFsEntry>>,
    home_dir: PathBuf,
    current_dir: RefCell<PathBuf>,
    force_error: RefCell<Option<FileSystemError>>,
}

impl MockFileSystem {
    pub fn new() -> Self {
        let mut entries = HashMap::new();

        // Add root directory by default
        entries.insert(PathBuf::from("/"), MockFsEntry::Dir);

        Self {
            entries: RefCell::new(entries),
            home_dir: PathBuf::from("/home/testuser"),
            current_dir: RefCell::new(PathBuf::from("/home/testuser/work")),
            force_error: RefCell::new(None),
        }
    }

    /// Add a file with content, creating parent directories
    pub fn add_file(&self, path: impl AsRef<Path>, content: impl Into<String>) {
        let path = path.as_ref();
        self.add_parents(path);
        self.entries
            .borrow_mut()
            .insert(path.to_path_buf(), MockFsEntry::File(content.into()));
    }

    /// Add a directory, creating parent directories
    pub fn add_dir(&self, path: impl AsRef<Path>) {
        let path = path.as_ref();
        self.add_parents(path);
        self.entries
            .borrow_mut()
            .insert(path.to_path_buf(), MockFsEntry::Dir);
    }

    /// Add a git repository to the mock filesystem
    pub fn add_git_repo(&self, path: impl AsRef<Path>) {
        let path = path.as_ref();
        self.add_dir(path);
        self.add_dir(path.join(".git"));
    }

    /// Add a symlink, creating parent directories
    pub fn add_symlink(&self, link: impl AsRef<Path>, target: impl AsRef<Path>) {
        let link = link.as_ref();
        self.add_parents(link);
        self.entries.borrow_mut().insert(
            link.to_path_buf(),
            MockFsEntry::Symlink(target.as_ref().to_path_buf()),
        );
    }

    /// Content of a file (for assertions)
    pub fn get_file(&self, path: impl AsRef<Path>) -> Option<String> {
        match self.entries.borrow().get(path.as_ref()) {
            Some(MockFsEntry::File(content)) => Some(content.clone()),
            _ => None,
        }
    }

    /// Set the current directory for testing
    pub fn set_current_dir(&self, path: impl AsRef<Path>) {
        *self.current_dir.borrow_mut() = path.as_ref().to_path_buf();
    }

    /// Inject an error to be returned on the next fallible operation
    pub fn inject_error(&self, error: FileSystemError) {
        *self.force_error.borrow_mut() = Some(error);
    }

    fn check_error(&self) -> Result<(), FileSystemError> {
        if let Some(err) = self.force_error.borrow_mut().take() {
            return Err(err);
        }
        Ok(())
    }

    fn add_parents(&self, path: &Path) {
        let mut entries = self.entries.borrow_mut();
        for ancestor in path.ancestors().skip(1) {
            if ancestor.as_os_str().is_empty() {
                continue;
            }
            entries
                .entry(ancestor.to_path_buf())
                .or_insert(MockFsEntry::Dir);
        }
    }

    fn not_found(path: &Path) -> FileSystemError {
        FileSystemError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("{} not found", path.display()),
        ))
    }
}

impl Default for MockFileSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystem for MockFileSystem {
    fn exists(&self, path: &Path) -> bool {
        match self.entries.borrow().get(path) {
            Some(MockFsEntry::Symlink(target)) => self.entries.borrow().contains_key(target),
            Some(_) => true,
            None => false,
        }
    }

    fn is_symlink(&self, path: &Path) -> bool {
        matches!(self.entries.borrow().get(path), Some(MockFsEntry::Symlink(_)))
    }

    fn is_dir(&self, path: &Path) -> bool {
        matches!(self.entries.borrow().get(path), Some(MockFsEntry::Dir))
    }

    fn is_git_repository(&self, path: &Path) -> bool {
        self.entries.borrow().contains_key(&path.join(".git"))
    }

    fn home_dir(&self) -> Result<PathBuf, FileSystemError> {
        self.check_error()?;
        Ok(self.home_dir.clone())
    }

    fn current_dir(&self) -> Result<PathBuf, FileSystemError> {
        self.check_error()?;
        Ok(self.current_dir.borrow().clone())
    }

    fn create_dir(&self, path: &Path) -> Result<(), FileSystemError> {
        self.check_error()?;

        if let Some(entry) = self.entries.borrow().get(path) {
            return match entry {
                MockFsEntry::Dir => Ok(()),
                _ => Err(FileSystemError::Io(std::io::Error::new(
                    std::io::ErrorKind::AlreadyExists,
                    format!("{} exists and is not a directory", path.display()),
                ))),
            };
        }

        self.add_dir(path);
        Ok(())
    }

    fn create_symlink(&self, target: &Path, link: &Path) -> Result<(), FileSystemError> {
        self.check_error()?;

        if self.entries.borrow().contains_key(link) {
            return Err(FileSystemError::Io(std::io::Error::new(
                std::io::ErrorKind::AlreadyExists,
                format!("{} already exists", link.display()),
            )));
        }

        self.add_symlink(link, target);
        Ok(())
    }

    fn read_link(&self, link: &Path) -> Result<PathBuf, FileSystemError> {
        self.check_error()?;

        match self.entries.borrow().get(link) {
            Some(MockFsEntry::Symlink(target)) => Ok(target.clone()),
            _ => Err(Self::not_found(link)),
        }
    }

    fn remove(&self, path: &Path) -> Result<(), FileSystemError> {
        self.check_error()?;

        let mut entries = self.entries.borrow_mut();
        if !entries.contains_key(path) {
            return Err(Self::not_found(path));
        }

        // Remove path and all children
        entries.retain(|p, _| !p.starts_with(path));

        Ok(())
    }

    fn read_to_string(&self, path: &Path) -> Result<Option<String>, FileSystemError> {
        self.check_error()?;

        match self.entries.borrow().get(path) {
            Some(MockFsEntry::File(content)) => Ok(Some(content.clone())),
            Some(_) => Err(FileSystemError::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("{} is not a file", path.display()),
            ))),
            None => Ok(None),
        }
    }

    fn write(&self, path: &Path, content: &str) -> Result<(), FileSystemError> {
        self.check_error()?;

        let parent_is_dir = path.parent().is_none_or(|parent| self.is_dir(parent));
        if !parent_is_dir {
            return Err(Self::not_found(path));
        }

        self.entries
            .borrow_mut()
            .insert(path.to_path_buf(), MockFsEntry::File(content.to_string()));
        Ok(())
    }

    fn normalize(&self, path: &Path, base: &Path) -> Result<PathBuf, FileSystemError> {
        self.check_error()?;

        if path.as_os_str().is_empty() {
            return Err(FileSystemError::PathError(
                "Cannot normalize an empty path".into(),
            ));
        }

        let path_str = path.to_string_lossy();

        let joined = if let Some(rest) = path_str.strip_prefix('~') {
            self.home_dir()?.join(rest.trim_start_matches('/'))
        } else if path.is_absolute() {
            path.to_path_buf()
        } else {
            base.join(path)
        };

        let mut normalized = PathBuf::new();
        for component in joined.components() {
            match component {
                Component::ParentDir => {
                    normalized.pop();
                }
                Component::CurDir => {}
                other => normalized.push(other),
            }
        }

        Ok(normalized)
    }
}
