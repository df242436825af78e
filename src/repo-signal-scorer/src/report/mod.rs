//! Report assembly.
//!
//! Merges the parsed identifier, repository summary, raw facts and score into
//! a single [`ScoreReport`].

mod languages;
mod score_report;

pub use languages::{top_languages, LanguageShare, TOP_LANGUAGES};
pub use score_report::{ReportInput, ReportSignals, ReportSummary, ScoreReport};

use crate::fetcher::{RepoFacts, RepoSummary};
use crate::repository::RepoIdentifier;
use crate::scoring::{days_between, ScoreBreakdown};
use chrono::{DateTime, Utc};

/// Builds the report for one repository.
///
/// `now` must be the instant the score was computed at, so that
/// `daysSincePush` agrees with the activity bucket.
#[must_use]
pub fn assemble_report(
    repo_url: &str,
    identifier: &RepoIdentifier,
    summary: RepoSummary,
    facts: &RepoFacts,
    score: ScoreBreakdown,
    now: DateTime<Utc>,
) -> ScoreReport {
    let top_languages = top_languages(&summary.languages, TOP_LANGUAGES);

    ScoreReport {
        input: ReportInput {
            repo_url: repo_url.trim().to_string(),
            owner: identifier.owner.clone(),
            repo: identifier.repo.clone(),
        },
        summary: ReportSummary {
            full_name: summary.full_name,
            stars: summary.stars,
            forks: summary.forks,
            open_issues: summary.open_issues,
            pushed_at: summary.pushed_at,
            days_since_push: days_between(summary.pushed_at, now),
            languages: summary.languages,
            top_languages,
            readme_excerpt: summary.readme_excerpt,
        },
        signals: ReportSignals {
            has_readme: facts.has_readme,
            has_license: facts.has_license,
            has_ci: facts.has_ci,
            commits_last_30: facts.commits_last_30,
            contributors_count: facts.contributors_count,
            has_package_scripts: facts.has_package_scripts,
        },
        score,
    }
}
