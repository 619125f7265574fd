use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::core::ports::{FileSystem, FileSystemError};

pub const OVERRIDES_DIR: &str = "bundler.d";
pub const OVERRIDES_FILE: &str = "local_overrides.rb";

const HEADER: &str = "# Local gem overrides managed by cross-repo";

#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("Malformed override file {}, line {line}: {content}", .path.display())]
    Malformed {
        path: PathBuf,
        line: usize,
        content: String,
    },

    #[error("{} exists but is not a directory", .0.display())]
    NotADirectory(PathBuf),

    #[error("File system error: {0}")]
    FileSystem(#[from] FileSystemError),
}

/// `override_gem` entries of a repository's `bundler.d/local_overrides.rb`
///
/// ```ruby
/// override_gem "manageiq-api", :path => "/home/user/cross_repo/github.com/ManageIQ/manageiq-api+master"
/// ```
///
/// Only blank lines, comments and `override_gem` entries are accepted.
/// Entries are kept sorted by gem name so rewriting the file is stable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GemOverrides {
    path: PathBuf,
    entries: BTreeMap<String, PathBuf>,
}

impl GemOverrides {
    /// Location of the override file inside `repo_path`
    pub fn file_path(repo_path: &Path) -> PathBuf {
        repo_path.join(OVERRIDES_DIR).join(OVERRIDES_FILE)
    }

    /// Load the override file of `repo_path`, empty if it does not exist yet
    pub fn load(fs: &dyn FileSystem, repo_path: &Path) -> Result<Self, ConfigurationError> {
        let path = Self::file_path(repo_path);

        match fs.read_to_string(&path)? {
            Some(content) => Self::parse(path, &content),
            None => Ok(Self {
                path,
                entries: BTreeMap::new(),
            }),
        }
    }

    pub fn parse(path: PathBuf, content: &str) -> Result<Self, ConfigurationError> {
        let mut entries = BTreeMap::new();

        for (index, raw) in content.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let Some((name, gem_path)) = parse_entry(line) else {
                return Err(ConfigurationError::Malformed {
                    path,
                    line: index + 1,
                    content: raw.to_string(),
                });
            };
            entries.insert(name, PathBuf::from(gem_path));
        }

        Ok(Self { path, entries })
    }

    /// Point `name` at `gem_path`, returning the previous path if any
    pub fn insert(&mut self, name: impl Into<String>, gem_path: impl Into<PathBuf>) -> Option<PathBuf> {
        self.entries.insert(name.into(), gem_path.into())
    }

    pub fn get(&self, name: &str) -> Option<&Path> {
        self.entries.get(name).map(PathBuf::as_path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn render(&self) -> String {
        let mut content = String::from(HEADER);
        content.push('\n');

        for (name, gem_path) in &self.entries {
            content.push_str(&format!(
                "override_gem {}, :path => {}\n",
                quote(name),
                quote(&gem_path.to_string_lossy())
            ));
        }

        content
    }

    pub fn save(&self, fs: &dyn FileSystem) -> Result<(), ConfigurationError> {
        if let Some(dir) = self.path.parent() {
            if fs.exists(dir) && !fs.is_dir(dir) {
                return Err(ConfigurationError::NotADirectory(dir.to_path_buf()));
            }
            fs.create_dir(dir)?;
        }

        fs.write(&self.path, &self.render())?;
        Ok(())
    }
}

/// Parse `override_gem "name", :path => "path"` (or `path: "path"`)
fn parse_entry(line: &str) -> Option<(String, String)> {
    let rest = line.strip_prefix("override_gem")?;
    if !rest.starts_with(char::is_whitespace) && !rest.starts_with('(') {
        return None;
    }
    let rest = rest.trim_start().trim_start_matches('(').trim_start();

    let (name, rest) = parse_quoted(rest)?;
    let rest = rest.trim_start().strip_prefix(',')?.trim_start();

    let rest = if let Some(rest) = rest.strip_prefix(":path") {
        rest.trim_start().strip_prefix("=>")?
    } else {
        rest.strip_prefix("path:")?
    };

    let (gem_path, rest) = parse_quoted(rest.trim_start())?;
    let rest = rest.trim_start().trim_start_matches(')').trim();

    if !rest.is_empty() && !rest.starts_with('#') {
        return None;
    }
    if name.is_empty() || gem_path.is_empty() {
        return None;
    }

    Some((name, gem_path))
}

/// Parse a double or single quoted Ruby string literal, returning it and the remaining input
fn parse_quoted(input: &str) -> Option<(String, &str)> {
    let mut chars = input.char_indices();
    let (_, quote) = chars.next()?;
    if quote != '"' && quote != '\'' {
        return None;
    }

    let mut value = String::new();
    let mut escaped = false;

    for (index, c) in chars {
        if escaped {
            value.push(c);
            escaped = false;
        } else if c == '\\' {
            escaped = true;
        } else if c == quote {
            return Some((value, &input[index + c.len_utf8()..]));
        } else {
            value.push(c);
        }
    }

    None
}

/// Double-quoted Ruby literal; `#` is escaped so `#{...}` is never interpolated
fn quote(value: &str) -> String {
    let escaped = value
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('#', "\\#");
    format!("\"{escaped}\"")
}
