//! `config.toml` deserialization.

use super::ConfigError;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Top-level structure of `config.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub(crate) struct ConfigFile {
    /// GitHub API settings.
    #[serde(default)]
    pub github: GitHubSection,

    /// Report rendering settings.
    #[serde(default)]
    pub report: ReportSection,
}

/// The `[github]` table.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub(crate) struct GitHubSection {
    /// REST API root (e.g. "https://api.github.com").
    pub api_base_url: Option<String>,

    /// Personal access token (falls back to GITHUB_TOKEN).
    pub token: Option<String>,

    /// Per-request timeout in seconds.
    pub timeout_secs: Option<u64>,

    /// Maximum repositories scored at once.
    pub concurrency: Option<usize>,
}

/// The `[report]` table.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub(crate) struct ReportSection {
    /// Handlebars template replacing the built-in Markdown report.
    pub template: Option<PathBuf>,
}

impl ConfigFile {
    /// Loads the config file if it exists.
    pub(crate) fn load(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::IoError {
            path: path.display().to_string(),
            source,
        })?;
        let parsed = toml::from_str(&contents).map_err(|source| ConfigError::TomlError {
            path: path.display().to_string(),
            source,
        })?;
        Ok(Some(parsed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_config(temp: &TempDir, contents: &str) -> PathBuf {
        let path = temp.path().join("config.toml");
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn load_returns_none_when_missing() {
        let temp = TempDir::new().unwrap();
        let config = ConfigFile::load(&temp.path().join("missing.toml")).unwrap();
        assert!(config.is_none());
    }

    #[test]
    fn load_parses_all_sections() {
        let temp = TempDir::new().unwrap();
        let path = write_config(
            &temp,
            r#"
[github]
api-base-url = "https://ghe.example.com/api/v3"
token = "ghp_file"
timeout-secs = 30
concurrency = 8

[report]
template = "templates/report.hbs"
"#,
        );

        let config = ConfigFile::load(&path).unwrap().unwrap();
        assert_eq!(
            config.github.api_base_url.as_deref(),
            Some("https://ghe.example.com/api/v3")
        );
        assert_eq!(config.github.token.as_deref(), Some("ghp_file"));
        assert_eq!(config.github.timeout_secs, Some(30));
        assert_eq!(config.github.concurrency, Some(8));
        assert_eq!(
            config.report.template,
            Some(PathBuf::from("templates/report.hbs"))
        );
    }

    #[test]
    fn load_accepts_empty_file() {
        let temp = TempDir::new().unwrap();
        let path = write_config(&temp, "");
        let config = ConfigFile::load(&path).unwrap().unwrap();
        assert!(config.github.token.is_none());
        assert!(config.report.template.is_none());
    }

    #[test]
    fn load_rejects_invalid_toml() {
        let temp = TempDir::new().unwrap();
        let path = write_config(&temp, "[github\ntoken = ");
        let result = ConfigFile::load(&path);
        assert!(matches!(result, Err(ConfigError::TomlError { .. })));
    }
}
