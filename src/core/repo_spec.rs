use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_HOST: &str = "github.com";
pub const DEFAULT_ORG: &str = "ManageIQ";
pub const DEFAULT_REFERENCE: &str = "master";

#[derive(Debug, Error)]
pub enum RepoSpecError {
    #[error("Invalid: {0}")]
    Invalid(String),
}

/// What to check out from a remote repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reference {
    /// A branch, a tag or a commit sha
    Named(String),
    PullRequest(u32),
}

impl Reference {
    /// The argument handed to `git fetch origin <ref>`
    pub fn fetch_ref(&self) -> String {
        match self {
            Reference::Named(name) => name.clone(),
            Reference::PullRequest(number) => format!("pull/{number}/head"),
        }
    }

    /// Directory-safe form of [`Reference::fetch_ref`] used in checkout paths
    ///
    /// `%` and `/` are percent-encoded, so distinct refs never share a
    /// directory. `#42` and `@pull/42/head` fetch the same ref and do.
    pub fn slug(&self) -> String {
        let mut slug = String::new();
        for c in self.fetch_ref().chars() {
            match c {
                '%' => slug.push_str("%25"),
                '/' => slug.push_str("%2F"),
                c => slug.push(c),
            }
        }
        slug
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reference::Named(name) => write!(f, "@{name}"),
            Reference::PullRequest(number) => write!(f, "#{number}"),
        }
    }
}

/// Parsed repository identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoSpec {
    Remote {
        host: String,
        org: String,
        name: String,
        reference: Reference,
        url: String,
    },
    /// An existing checkout used as-is; the path is not normalized yet
    Local { path: PathBuf },
}

impl RepoSpec {
    /// Parse a repository identifier
    ///
    /// examples of supported formats:
    /// - `manageiq-ui-classic` (org defaults to `ManageIQ`, ref to `master`)
    /// - `ManageIQ/manageiq@kasparov`
    /// - `ManageIQ/manageiq#1234` (pull request)
    /// - <https://github.com/ManageIQ/manageiq.git@master>
    /// - <git@github.com:ManageIQ/manageiq.git>
    /// - <ssh://git@github.com/ManageIQ/manageiq.git>
    /// - `/path/to/checkout`, `./checkout`, `~/checkout`
    pub fn parse(identifier: &str) -> Result<Self, RepoSpecError> {
        let identifier = identifier.trim();

        if identifier.is_empty() {
            return Err(RepoSpecError::Invalid("Empty repository identifier".into()));
        }

        if is_local_path(identifier) {
            return Ok(RepoSpec::Local {
                path: PathBuf::from(identifier),
            });
        }

        // (prefix, separator)
        let formats = [("https://", "/"), ("ssh://git@", "/"), ("git@", ":")];

        for (prefix, separator) in formats {
            if let Some(without_scheme) = identifier.strip_prefix(prefix) {
                let Some((host, path)) = without_scheme.split_once(separator) else {
                    return Err(RepoSpecError::Invalid(format!(
                        "Expected format: {prefix}host{separator}org/name, got: {identifier}",
                    )));
                };

                let (path, reference) = split_reference(path)?;
                let Some((org, name)) = path.split_once('/') else {
                    return Err(RepoSpecError::Invalid(format!(
                        "Expected format: {prefix}host{separator}org/name, got: {identifier}",
                    )));
                };
                let name = name.trim_end_matches(".git");
                validate_segments(identifier, &[host, org, name])?;

                let url = format!("{prefix}{host}{separator}{org}/{name}.git");
                return Ok(RepoSpec::Remote {
                    host: host.to_string(),
                    org: org.to_string(),
                    name: name.to_string(),
                    reference,
                    url,
                });
            }
        }

        let (path, reference) = split_reference(identifier)?;
        let (org, name) = path.split_once('/').unwrap_or((DEFAULT_ORG, path));
        validate_segments(identifier, &[org, name])?;

        Ok(RepoSpec::Remote {
            host: DEFAULT_HOST.to_string(),
            org: org.to_string(),
            name: name.to_string(),
            reference,
            url: format!("https://{DEFAULT_HOST}/{org}/{name}.git"),
        })
    }

    /// Repository name, also used as the gem name for local overrides
    pub fn name(&self) -> String {
        match self {
            RepoSpec::Remote { name, .. } => name.clone(),
            RepoSpec::Local { path } => path
                .file_name()
                .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned()),
        }
    }
}

/// Builds the checkout path of a remote repository
///
/// # Returns
/// Path in the format: `{root}/{host}/{org}/{name}+{slug}`
pub fn build_checkout_path(
    root: &Path,
    host: &str,
    org: &str,
    name: &str,
    reference: &Reference,
) -> PathBuf {
    root.join(host)
        .join(org)
        .join(format!("{name}+{}", reference.slug()))
}

impl fmt::Display for RepoSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RepoSpec::Remote {
                org,
                name,
                reference,
                ..
            } => write!(f, "{org}/{name}{reference}"),
            RepoSpec::Local { path } => write!(f, "{}", path.display()),
        }
    }
}

fn is_local_path(identifier: &str) -> bool {
    identifier == "."
        || identifier.starts_with('/')
        || identifier.starts_with("./")
        || identifier.starts_with("../")
        || identifier.starts_with('~')
}

fn split_reference(path: &str) -> Result<(&str, Reference), RepoSpecError> {
    if let Some((path, number)) = path.rsplit_once('#') {
        let number = number.parse::<u32>().map_err(|_| {
            RepoSpecError::Invalid(format!("Pull request must be a number, got: #{number}"))
        })?;
        return Ok((path, Reference::PullRequest(number)));
    }

    if let Some((path, reference)) = path.rsplit_once('@') {
        if reference.is_empty() {
            return Err(RepoSpecError::Invalid(format!(
                "Empty reference after '@' in {path}"
            )));
        }
        return Ok((path, Reference::Named(reference.to_string())));
    }

    Ok((path, Reference::Named(DEFAULT_REFERENCE.to_string())))
}

fn validate_segments(identifier: &str, segments: &[&str]) -> Result<(), RepoSpecError> {
    let invalid = segments.iter().any(|segment| {
        segment.is_empty() || segment.contains('/') || segment.chars().any(char::is_whitespace)
    });

    if invalid {
        return Err(RepoSpecError::Invalid(format!(
            "Expected format: [org/]name[@ref|#pr], got: {identifier}"
        )));
    }

    Ok(())
}
