//! Runner error types.

/// Errors that prevent a runner from being built.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// Configuration loading errors.
    #[error(transparent)]
    Config(#[from] crate::config::ConfigError),

    /// GitHub API client initialization errors.
    #[error(transparent)]
    Fetch(#[from] crate::fetcher::FetchError),

    /// Report template loading errors.
    #[error(transparent)]
    Template(#[from] crate::templates::TemplateError),
}
