//! Repository signal gathering from the GitHub REST API.
//!
//! [`RepoMetadataFetcher`] resolves a repository URL, issues the mandatory
//! metadata lookup and seven best-effort probes concurrently, and returns
//! the raw [`RepoFacts`] together with the [`RepoSummary`] used by the
//! report.

mod error;
mod facts;
mod manifest;
mod models;
mod probes;

pub use error::{ErrorBody, FetchError};
pub use facts::{FetchedRepository, RepoFacts, RepoSummary};

use crate::config::ScorerConfig;
use crate::repository::RepoIdentifier;
use chrono::{DateTime, Utc};
use octocrab::service::middleware::retry::RetryConfig;
use octocrab::Octocrab;
use probes::{with_default, ReadmeProbe};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::BTreeMap;
use std::time::Duration;
use tracing::{debug, info, info_span, Instrument};

/// Gathers repository facts from a GitHub-compatible API.
#[derive(Clone)]
pub struct RepoMetadataFetcher {
    octocrab: Octocrab,
    request_timeout: Duration,
}

impl RepoMetadataFetcher {
    /// Builds a fetcher with its own GitHub client.
    ///
    /// The token, when configured, is attached to every request; without
    /// one the client makes unauthenticated calls. Failed requests are never
    /// retried.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Client`] if the base URL is invalid or the
    /// client cannot be built.
    pub fn new(config: &ScorerConfig) -> Result<Self, FetchError> {
        let mut builder = Octocrab::builder()
            .add_retry_config(RetryConfig::None)
            .base_uri(config.api_base_url())
            .map_err(FetchError::Client)?;

        if let Some(token) = config.token() {
            builder = builder.personal_token(token.to_string());
        }

        let octocrab = builder.build().map_err(FetchError::Client)?;
        Ok(Self::with_client(octocrab, config.request_timeout()))
    }

    /// Wraps an existing GitHub client.
    #[must_use]
    pub fn with_client(octocrab: Octocrab, request_timeout: Duration) -> Self {
        Self {
            octocrab,
            request_timeout,
        }
    }

    /// Fetches facts for the repository at `repo_url`, as of now.
    ///
    /// # Errors
    ///
    /// See [`RepoMetadataFetcher::fetch_at`].
    pub async fn fetch(&self, repo_url: &str) -> Result<FetchedRepository, FetchError> {
        self.fetch_at(repo_url, Utc::now()).await
    }

    /// Fetches facts for the repository at `repo_url`.
    ///
    /// `now` anchors the trailing commit window. The URL is parsed before any
    /// request is made.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::InvalidUrl`] for an unparseable URL,
    /// [`FetchError::RepoNotFound`] when the repository lookup answers 404,
    /// and another [`FetchError`] when that lookup fails otherwise. Failures
    /// of the remaining lookups are never returned.
    pub async fn fetch_at(
        &self,
        repo_url: &str,
        now: DateTime<Utc>,
    ) -> Result<FetchedRepository, FetchError> {
        let identifier = RepoIdentifier::parse(repo_url)?;
        let span = info_span!("fetch_repository", repo = %identifier);

        async {
            info!("Fetching repository signals");

            let id = &identifier;
            let (
                repository,
                languages,
                readme,
                has_license,
                has_ci,
                commits_last_30,
                contributors_count,
                has_package_scripts,
            ) = tokio::join!(
                self.repository(id),
                with_default("languages", self.languages(id), BTreeMap::new()),
                with_default("readme", self.readme(id), ReadmeProbe::default()),
                with_default("license", self.license(id), false),
                with_default("ci", self.ci_workflows(id), false),
                with_default("commits", self.commits_since(id, now), 0),
                with_default("contributors", self.contributors(id), 1),
                with_default("package_scripts", self.package_scripts(id), false),
            );

            let repository = repository?;
            let pushed_at = repository
                .pushed_at
                .or(repository.updated_at)
                .ok_or_else(|| FetchError::MissingPushTimestamp {
                    full_name: repository.full_name.clone(),
                })?;
            let open_issues = repository.open_issues_count.unwrap_or(0);

            let facts = RepoFacts {
                has_readme: readme.present,
                has_license,
                has_ci,
                pushed_at,
                open_issues,
                commits_last_30,
                contributors_count,
                languages_count: u32::try_from(languages.len()).unwrap_or(u32::MAX),
                has_package_scripts,
            };
            debug!(?facts, "Collected repository facts");

            let summary = RepoSummary {
                full_name: repository.full_name,
                stars: repository.stargazers_count.unwrap_or(0),
                forks: repository.forks_count.unwrap_or(0),
                open_issues,
                pushed_at,
                languages,
                readme_excerpt: readme.excerpt,
            };

            Ok(FetchedRepository {
                identifier: identifier.clone(),
                summary,
                facts,
            })
        }
        .instrument(span)
        .await
    }

    /// Issues a time-bounded GET and deserializes the JSON response.
    async fn get_json<T, P>(&self, route: &str, params: Option<&P>) -> Result<T, FetchError>
    where
        T: DeserializeOwned,
        P: Serialize + ?Sized,
    {
        tokio::time::timeout(self.request_timeout, self.octocrab.get(route, params))
            .await
            .map_err(|_| FetchError::Timeout {
                route: route.to_string(),
                timeout_secs: self.request_timeout.as_secs(),
            })?
            .map_err(FetchError::GitHubError)
    }
}
