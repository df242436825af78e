//! Owner/name pair parsed from a repository URL.

use super::InvalidUrlError;
use serde::{Deserialize, Serialize};
use std::fmt;
use url::Url;

/// Suffix stripped from repository names copied from clone URLs.
const GIT_SUFFIX: &str = ".git";

/// A repository addressed by owner and name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RepoIdentifier {
    /// Repository owner (user or organization).
    pub owner: String,

    /// Repository name, without any `.git` suffix.
    pub repo: String,
}

impl RepoIdentifier {
    /// Parses a URL of the form `https://<host>/<owner>/<repo>[.git][/...]`.
    ///
    /// Leading and trailing whitespace is ignored. Anything after the second
    /// path segment (sub-paths, query, fragment) is discarded.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidUrlError::Missing`] for blank input and
    /// [`InvalidUrlError::Malformed`] when the URL is not an http(s) URL with
    /// a host and at least two non-empty path segments.
    pub fn parse(input: &str) -> Result<Self, InvalidUrlError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(InvalidUrlError::Missing);
        }

        let malformed = || InvalidUrlError::Malformed {
            url: trimmed.to_string(),
        };

        let url = Url::parse(trimmed).map_err(|_| malformed())?;
        if !matches!(url.scheme(), "http" | "https") || url.host_str().is_none() {
            return Err(malformed());
        }

        let mut segments = url
            .path_segments()
            .ok_or_else(malformed)?
            .filter(|segment| !segment.is_empty());

        let owner = segments.next().ok_or_else(malformed)?;
        let repo = strip_git_suffix(segments.next().ok_or_else(malformed)?);

        if repo.is_empty() {
            return Err(malformed());
        }

        Ok(Self {
            owner: owner.to_string(),
            repo: repo.to_string(),
        })
    }

    /// Returns the repository in "owner/repo" format.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.repo)
    }
}

impl fmt::Display for RepoIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

/// Removes a trailing `.git` (any case) from a repository name.
fn strip_git_suffix(name: &str) -> &str {
    name.len()
        .checked_sub(GIT_SUFFIX.len())
        .filter(|&split| {
            name.get(split..)
                .is_some_and(|tail| tail.eq_ignore_ascii_case(GIT_SUFFIX))
        })
        .and_then(|split| name.get(..split))
        .unwrap_or(name)
}
