//! Repository fetch error types.

use crate::repository::InvalidUrlError;
use serde::Serialize;
use thiserror::Error;

/// Errors that abort a repository fetch.
///
/// Failures of best-effort lookups never show up here; they degrade to
/// their default value instead.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The supplied URL could not be parsed.
    #[error(transparent)]
    InvalidUrl(#[from] InvalidUrlError),

    /// The mandatory repository lookup returned 404.
    #[error("Repo not found: {owner}/{repo}")]
    RepoNotFound { owner: String, repo: String },

    /// The mandatory repository lookup failed for another reason.
    #[error("GitHub API error: {0}")]
    GitHubError(#[source] octocrab::Error),

    /// An outbound call exceeded the request timeout.
    #[error("GitHub request '{route}' timed out after {timeout_secs} seconds")]
    Timeout { route: String, timeout_secs: u64 },

    /// The repository metadata carried neither a push nor an update time.
    #[error("Repository {full_name} reports no push or update timestamp")]
    MissingPushTimestamp { full_name: String },

    /// The GitHub client could not be constructed.
    #[error("Failed to build GitHub client: {0}")]
    Client(#[source] octocrab::Error),
}

/// JSON error body handed back to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorBody {
    /// Human-readable error message.
    pub error: String,
}

impl FetchError {
    /// HTTP status code a request handler should answer with.
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            Self::InvalidUrl(_) => 400,
            Self::RepoNotFound { .. } => 404,
            Self::GitHubError(_)
            | Self::Timeout { .. }
            | Self::MissingPushTimestamp { .. }
            | Self::Client(_) => 500,
        }
    }

    /// Error body a request handler should answer with.
    #[must_use]
    pub fn to_error_body(&self) -> ErrorBody {
        ErrorBody {
            error: self.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_errors_to_status_codes() {
        assert_eq!(FetchError::from(InvalidUrlError::Missing).status_code(), 400);
        assert_eq!(
            FetchError::RepoNotFound {
                owner: "o".to_string(),
                repo: "r".to_string()
            }
            .status_code(),
            404
        );
        assert_eq!(
            FetchError::Timeout {
                route: "/repos/o/r".to_string(),
                timeout_secs: 10
            }
            .status_code(),
            500
        );
    }

    #[test]
    fn error_body_carries_message() {
        let body = FetchError::from(InvalidUrlError::Missing).to_error_body();
        assert_eq!(body.error, "Missing repoUrl");
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({ "error": "Missing repoUrl" })
        );
    }
}
