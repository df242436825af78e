//! Raw repository facts and summary gathered from the hosting API.

use crate::repository::RepoIdentifier;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// Raw signal bundle consumed by the scorer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepoFacts {
    /// Whether the repository has a README.
    pub has_readme: bool,

    /// Whether the repository has a detectable license.
    pub has_license: bool,

    /// Whether `.github/workflows` contains at least one entry.
    #[serde(rename = "hasCI")]
    pub has_ci: bool,

    /// Last push time (or last update when no push time is reported).
    pub pushed_at: DateTime<Utc>,

    /// Open issue count as reported by the repository metadata.
    pub open_issues: u64,

    /// Commits in the trailing 30-day window, capped at one page of 100.
    pub commits_last_30: u32,

    /// Listed contributors, never below one.
    #[serde(
        default = "default_contributors_count",
        deserialize_with = "deserialize_contributors_count"
    )]
    pub contributors_count: u32,

    /// Number of languages with recorded byte counts.
    pub languages_count: u32,

    /// Whether `package.json` declares at least one script.
    pub has_package_scripts: bool,
}

/// Contributor count assumed when the contributor list is unavailable.
pub(crate) fn default_contributors_count() -> u32 {
    1
}

/// Reads a contributor count, raising zero to one.
fn deserialize_contributors_count<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(u32::deserialize(deserializer)?.max(1))
}

/// Repository metadata fields carried into the report summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RepoSummary {
    /// Full repository name in "owner/name" format.
    pub full_name: String,

    /// Stargazer count.
    pub stars: u64,

    /// Fork count.
    pub forks: u64,

    /// Open issue count.
    pub open_issues: u64,

    /// Last push time.
    pub pushed_at: DateTime<Utc>,

    /// Bytes of code per language.
    pub languages: BTreeMap<String, u64>,

    /// Leading characters of the README, when one was found and decoded.
    pub readme_excerpt: Option<String>,
}

/// Everything gathered for one repository.
#[derive(Debug, Clone)]
pub struct FetchedRepository {
    /// Parsed owner and name.
    pub identifier: RepoIdentifier,

    /// Repository summary for the report.
    pub summary: RepoSummary,

    /// Signals for the scorer.
    pub facts: RepoFacts,
}
