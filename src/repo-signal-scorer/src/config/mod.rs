//! Scorer configuration.
//!
//! Settings are layered, lowest precedence first: built-in defaults, an
//! optional `config.toml`, then environment variables. Front ends apply their
//! own flags on top through the `with_*` setters.

mod error;
mod file;

pub use error::ConfigError;

use file::ConfigFile;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, warn};

/// Public GitHub REST API root.
pub const DEFAULT_API_BASE_URL: &str = "https://api.github.com";

/// Per-request timeout used when none is configured.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Repositories scored at once when none is configured.
pub const DEFAULT_CONCURRENCY: usize = 4;

const TOKEN_ENV: &str = "GITHUB_TOKEN";
const API_URL_ENV: &str = "REPO_SCORER_API_URL";
const TIMEOUT_ENV: &str = "REPO_SCORER_TIMEOUT_SECS";

/// Configuration for scoring runs.
#[derive(Debug, Clone)]
pub struct ScorerConfig {
    /// REST API root requests are sent to.
    api_base_url: String,
    /// Optional bearer token attached to every request.
    token: Option<String>,
    /// Upper bound on each outbound request.
    request_timeout: Duration,
    /// Maximum repositories scored at once.
    concurrency: usize,
    /// Custom Handlebars report template.
    report_template: Option<PathBuf>,
}

impl Default for ScorerConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            token: None,
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            concurrency: DEFAULT_CONCURRENCY,
            report_template: None,
        }
    }
}

impl ScorerConfig {
    /// Creates a configuration with built-in defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from an optional file and the environment.
    ///
    /// A missing file is not an error. Relative template paths in the file
    /// are resolved against the file's directory.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be read or parsed, or if the
    /// resulting settings fail validation.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(path) = path {
            if let Some(file) = ConfigFile::load(path)? {
                debug!(path = %path.display(), "Loaded config file");
                config.apply_file(file, path.parent().unwrap_or_else(|| Path::new(".")));
            }
        }

        config.apply_env();
        config.validate()?;
        Ok(config)
    }

    fn apply_file(&mut self, file: ConfigFile, base_dir: &Path) {
        let github = file.github;
        if let Some(url) = github.api_base_url {
            self.api_base_url = url;
        }
        if let Some(token) = github.token.filter(|t| !t.trim().is_empty()) {
            self.token = Some(token);
        }
        if let Some(secs) = github.timeout_secs {
            self.request_timeout = Duration::from_secs(secs);
        }
        if let Some(concurrency) = github.concurrency {
            self.concurrency = concurrency;
        }
        if let Some(template) = file.report.template {
            self.report_template = Some(if template.is_relative() {
                base_dir.join(template)
            } else {
                template
            });
        }
    }

    fn apply_env(&mut self) {
        if let Some(token) = read_env(TOKEN_ENV) {
            self.token = Some(token);
        }
        if let Some(url) = read_env(API_URL_ENV) {
            self.api_base_url = url;
        }
        if let Some(raw) = read_env(TIMEOUT_ENV) {
            match raw.parse::<u64>() {
                Ok(secs) => self.request_timeout = Duration::from_secs(secs),
                Err(_) => warn!(
                    "Invalid {TIMEOUT_ENV} value '{raw}': expected whole seconds, ignoring"
                ),
            }
        }
    }

    /// Checks that the settings are usable.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] for an empty API URL, a zero
    /// timeout or zero concurrency.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api_base_url.trim().is_empty() {
            return Err(invalid("api-base-url", "must not be empty"));
        }
        if self.request_timeout.is_zero() {
            return Err(invalid("timeout-secs", "must be greater than zero"));
        }
        if self.concurrency == 0 {
            return Err(invalid("concurrency", "must be greater than zero"));
        }
        Ok(())
    }

    /// Sets the API root.
    #[must_use]
    pub fn with_api_base_url(mut self, api_base_url: impl Into<String>) -> Self {
        self.api_base_url = api_base_url.into();
        self
    }

    /// Sets the bearer token.
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Sets the per-request timeout.
    #[must_use]
    pub fn with_request_timeout(mut self, request_timeout: Duration) -> Self {
        self.request_timeout = request_timeout;
        self
    }

    /// Sets the maximum repositories scored at once.
    #[must_use]
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency;
        self
    }

    /// Sets a custom report template.
    #[must_use]
    pub fn with_report_template(mut self, path: PathBuf) -> Self {
        self.report_template = Some(path);
        self
    }

    /// Returns the API root.
    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    /// Returns the bearer token, if any.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Returns the per-request timeout.
    pub fn request_timeout(&self) -> Duration {
        self.request_timeout
    }

    /// Returns the maximum repositories scored at once.
    pub fn concurrency(&self) -> usize {
        self.concurrency
    }

    /// Returns the custom report template path, if any.
    pub fn report_template(&self) -> Option<&Path> {
        self.report_template.as_deref()
    }
}

fn invalid(field: &str, message: &str) -> ConfigError {
    ConfigError::ValidationError {
        field: field.to_string(),
        message: message.to_string(),
    }
}

/// Reads a non-blank environment variable.
fn read_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.trim().is_empty())
}
