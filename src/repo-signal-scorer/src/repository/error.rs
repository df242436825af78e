//! Repository URL parsing error types.

use thiserror::Error;

/// Errors that can occur while parsing a repository URL.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidUrlError {
    /// No URL was supplied (empty or whitespace only).
    #[error("Missing repoUrl")]
    Missing,

    /// The URL does not have the `https://<host>/<owner>/<repo>` shape.
    #[error("Invalid GitHub repo URL '{url}'. Example: https://github.com/vercel/next.js")]
    Malformed { url: String },
}
