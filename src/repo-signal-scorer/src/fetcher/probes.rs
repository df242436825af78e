//! Individual GitHub lookups.
//!
//! The repository lookup is mandatory. Every other lookup is a best-effort
//! probe: callers wrap it in [`with_default`] so a failure degrades to a
//! documented default instead of aborting the fetch.

use super::manifest::{declares_scripts, PACKAGE_MANIFEST_PATH};
use super::models::{CommitsQuery, ContentFile, PageQuery, RepositoryResponse};
use super::{FetchError, RepoMetadataFetcher};
use crate::repository::RepoIdentifier;
use chrono::{DateTime, Duration, SecondsFormat, Utc};
use serde::de::IgnoredAny;
use std::collections::BTreeMap;
use std::fmt::Display;
use std::future::Future;
use tracing::debug;

/// Page size for list endpoints; one page is all that is ever read.
pub(crate) const PAGE_SIZE: u8 = 100;

/// Length of the trailing commit window.
pub(crate) const COMMIT_WINDOW_DAYS: i64 = 30;

/// Characters of README text kept for the report.
pub(crate) const README_EXCERPT_CHARS: usize = 500;

/// Directory whose presence signals CI.
const CI_WORKFLOWS_PATH: &str = ".github/workflows";

/// Outcome of the README probe.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct ReadmeProbe {
    pub present: bool,
    pub excerpt: Option<String>,
}

/// Awaits a best-effort lookup, collapsing any failure to `default`.
pub(crate) async fn with_default<T, E, F>(probe: &'static str, call: F, default: T) -> T
where
    F: Future<Output = Result<T, E>>,
    E: Display,
{
    match call.await {
        Ok(value) => value,
        Err(e) => {
            debug!(probe, error = %e, "Probe failed, using default");
            default
        }
    }
}

/// Base route for a repository.
pub(crate) fn repo_route(id: &RepoIdentifier) -> String {
    format!("/repos/{}/{}", id.owner, id.repo)
}

/// Start of the commit window ending at `now`, in the format GitHub expects.
pub(crate) fn commit_window_start(now: DateTime<Utc>) -> String {
    (now - Duration::days(COMMIT_WINDOW_DAYS)).to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn to_count(len: usize) -> u32 {
    u32::try_from(len).unwrap_or(u32::MAX)
}

impl RepoMetadataFetcher {
    /// Fetches the repository metadata; the only mandatory lookup.
    pub(crate) async fn repository(
        &self,
        id: &RepoIdentifier,
    ) -> Result<RepositoryResponse, FetchError> {
        match self.get_json(&repo_route(id), None::<&()>).await {
            Err(FetchError::GitHubError(e)) if is_not_found(&e) => Err(FetchError::RepoNotFound {
                owner: id.owner.clone(),
                repo: id.repo.clone(),
            }),
            other => other,
        }
    }

    /// Bytes of code per language.
    pub(crate) async fn languages(
        &self,
        id: &RepoIdentifier,
    ) -> Result<BTreeMap<String, u64>, FetchError> {
        let route = format!("{}/languages", repo_route(id));
        self.get_json(&route, None::<&()>).await
    }

    /// README presence plus a short excerpt of its text.
    pub(crate) async fn readme(&self, id: &RepoIdentifier) -> Result<ReadmeProbe, FetchError> {
        let route = format!("{}/readme", repo_route(id));
        let file: ContentFile = self.get_json(&route, None::<&()>).await?;

        let excerpt = file
            .decode_text()
            .map(|text| text.chars().take(README_EXCERPT_CHARS).collect());

        Ok(ReadmeProbe {
            present: true,
            excerpt,
        })
    }

    /// Whether GitHub detected a license.
    pub(crate) async fn license(&self, id: &RepoIdentifier) -> Result<bool, FetchError> {
        let route = format!("{}/license", repo_route(id));
        let _: IgnoredAny = self.get_json(&route, None::<&()>).await?;
        Ok(true)
    }

    /// Whether the workflows directory lists at least one entry.
    ///
    /// A file at that path fails to deserialize as a listing and counts as
    /// absent.
    pub(crate) async fn ci_workflows(&self, id: &RepoIdentifier) -> Result<bool, FetchError> {
        let route = format!("{}/contents/{CI_WORKFLOWS_PATH}", repo_route(id));
        let entries: Vec<IgnoredAny> = self.get_json(&route, None::<&()>).await?;
        Ok(!entries.is_empty())
    }

    /// Commits in the window ending at `now`, at most one page.
    pub(crate) async fn commits_since(
        &self,
        id: &RepoIdentifier,
        now: DateTime<Utc>,
    ) -> Result<u32, FetchError> {
        let route = format!("{}/commits", repo_route(id));
        let query = CommitsQuery {
            since: commit_window_start(now),
            per_page: PAGE_SIZE,
        };
        let commits: Vec<IgnoredAny> = self.get_json(&route, Some(&query)).await?;
        Ok(to_count(commits.len()))
    }

    /// Listed contributors, at least one.
    pub(crate) async fn contributors(&self, id: &RepoIdentifier) -> Result<u32, FetchError> {
        let route = format!("{}/contributors", repo_route(id));
        let query = PageQuery {
            per_page: PAGE_SIZE,
        };
        let contributors: Vec<IgnoredAny> = self.get_json(&route, Some(&query)).await?;
        Ok(to_count(contributors.len()).max(1))
    }

    /// Whether `package.json` declares any scripts.
    pub(crate) async fn package_scripts(&self, id: &RepoIdentifier) -> Result<bool, FetchError> {
        let route = format!("{}/contents/{PACKAGE_MANIFEST_PATH}", repo_route(id));
        let file: ContentFile = self.get_json(&route, None::<&()>).await?;
        Ok(file
            .decode()
            .is_some_and(|manifest| declares_scripts(&manifest)))
    }
}

/// Checks if a GitHub error is a 404 response.
fn is_not_found(error: &octocrab::Error) -> bool {
    matches!(error, octocrab::Error::GitHub { source, .. } if source.status_code.as_u16() == 404)
}
