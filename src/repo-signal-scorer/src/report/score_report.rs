//! Score report types.

use super::LanguageShare;
use crate::scoring::ScoreBreakdown;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;

/// The request that produced a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportInput {
    /// URL as supplied by the caller.
    pub repo_url: String,

    /// Repository owner.
    pub owner: String,

    /// Repository name.
    pub repo: String,
}

/// Repository overview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    pub full_name: String,
    pub stars: u64,
    pub forks: u64,
    pub open_issues: u64,
    pub pushed_at: DateTime<Utc>,

    /// Whole days since the last push, measured at scoring time.
    pub days_since_push: i64,

    /// Bytes of code per language.
    pub languages: BTreeMap<String, u64>,

    /// Largest languages with their share of the code.
    pub top_languages: Vec<LanguageShare>,

    /// Leading README text, `null` when unavailable.
    pub readme_excerpt: Option<String>,
}

/// Signals echoed back alongside the score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSignals {
    pub has_readme: bool,
    pub has_license: bool,
    #[serde(rename = "hasCI")]
    pub has_ci: bool,
    pub commits_last_30: u32,
    pub contributors_count: u32,
    pub has_package_scripts: bool,
}

/// Complete scoring result for one repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreReport {
    pub input: ReportInput,
    pub summary: ReportSummary,
    pub signals: ReportSignals,
    pub score: ScoreBreakdown,
}
