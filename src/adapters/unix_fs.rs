use std::fs;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf, absolute};

use crate::core::ports::{FileSystem, FileSystemError};

#[derive(Debug)]
pub struct UnixFs;

impl UnixFs {
    pub fn new() -> Self {
        Self
    }
}

impl Default for UnixFs {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystem for UnixFs {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_symlink(&self, path: &Path) -> bool {
        match path.symlink_metadata() {
            Ok(metadata) => metadata.is_symlink(),
            Err(_) => false,
        }
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn is_git_repository(&self, path: &Path) -> bool {
        let git_path = path.join(".git");
        git_path.exists() && (git_path.is_dir() || git_path.is_file())
    }

    fn current_dir(&self) -> Result<PathBuf, FileSystemError> {
        let dir = std::env::current_dir()?;
        Ok(dir)
    }

    fn home_dir(&self) -> Result<PathBuf, FileSystemError> {
        dirs::home_dir()
            .and_then(|path| absolute(&path).ok())
            .ok_or_else(|| FileSystemError::PathError("Home directory not found".into()))
    }

    fn create_dir(&self, path: &Path) -> Result<(), FileSystemError> {
        fs::create_dir_all(path)?;
        Ok(())
    }

    fn create_symlink(&self, target: &Path, link: &Path) -> Result<(), FileSystemError> {
        std::os::unix::fs::symlink(target, link)?;
        Ok(())
    }

    fn read_link(&self, link: &Path) -> Result<PathBuf, FileSystemError> {
        Ok(fs::read_link(link)?)
    }

    fn remove(&self, path: &Path) -> Result<(), FileSystemError> {
        if path.is_dir() && !self.is_symlink(path) {
            fs::remove_dir_all(path)?;
        } else {
            fs::remove_file(path)?;
        }

        Ok(())
    }

    fn read_to_string(&self, path: &Path) -> Result<Option<String>, FileSystemError> {
        match fs::read_to_string(path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&self, path: &Path, content: &str) -> Result<(), FileSystemError> {
        fs::write(path, content)?;
        Ok(())
    }

    fn normalize(&self, path: &Path, base: &Path) -> Result<PathBuf, FileSystemError> {
        if path.as_os_str().is_empty() {
            return Err(FileSystemError::PathError(
                "Cannot normalize an empty path".into(),
            ));
        }

        let mut components = path.components().peekable();
        let mut normalized_path = PathBuf::new();

        match components.peek() {
            Some(Component::Normal(stem)) if *stem == "~" => {
                normalized_path.push(self.home_dir()?);
                components.next();
            }
            Some(Component::RootDir | Component::Prefix(_)) => {}
            _ => normalized_path.push(base),
        }

        for component in components {
            match component {
                Component::Prefix(_) | Component::RootDir | Component::Normal(_) => {
                    normalized_path.push(component);
                }
                Component::CurDir => {}
                Component::ParentDir => {
                    normalized_path.pop();
                }
            }
        }

        Ok(normalized_path)
    }
}
