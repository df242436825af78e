//! Rule-based repository scoring.
//!
//! Turns a [`RepoFacts`] bundle into a [`ScoreBreakdown`]: four capped
//! buckets, a total out of ten and an ordered list of explanations for every
//! withheld point. Scoring is pure; the only input besides the facts is the
//! instant used to measure push recency.

mod breakdown;
mod time;

pub use breakdown::{
    ScoreBreakdown, SubScores, ACTIVITY_CAP, DELIVERY_READINESS_CAP, DOCUMENTATION_CAP,
    HYGIENE_CAP, TOTAL_CAP,
};
pub use time::days_between;

use crate::fetcher::RepoFacts;
use chrono::{DateTime, Utc};

/// Pushes within this many days earn the full recency bonus.
const RECENT_PUSH_DAYS: i64 = 7;

/// Pushes within this many days earn the partial recency bonus.
const STALE_PUSH_DAYS: i64 = 30;

/// Commits in the trailing window needed for the commit volume bonus.
const ACTIVE_COMMIT_THRESHOLD: u32 = 10;

/// Contributors needed for the team execution point.
const TEAM_CONTRIBUTOR_THRESHOLD: u32 = 2;

/// Scores repository facts against the current wall-clock time.
#[must_use]
pub fn score_repo_signals(facts: &RepoFacts) -> ScoreBreakdown {
    score_repo_signals_at(facts, Utc::now())
}

/// Scores repository facts, measuring push recency relative to `now`.
#[must_use]
pub fn score_repo_signals_at(facts: &RepoFacts, now: DateTime<Utc>) -> ScoreBreakdown {
    let mut explanations = Vec::new();

    let documentation = score_documentation(facts, &mut explanations);
    let activity = score_activity(facts, now, &mut explanations);
    let hygiene = score_hygiene(facts, &mut explanations);
    let delivery_readiness = score_delivery_readiness(facts);

    let breakdown = SubScores {
        documentation,
        activity,
        hygiene,
        delivery_readiness,
    };

    ScoreBreakdown {
        score10: clamp_points(i64::from(breakdown.sum()), TOTAL_CAP),
        breakdown,
        explanations,
    }
}

fn score_documentation(facts: &RepoFacts, explanations: &mut Vec<String>) -> u8 {
    let mut points = 0;

    if facts.has_readme {
        points += 1;
    } else {
        explanations.push("Missing README (harder to judge what it does / how to run).".into());
    }

    if facts.has_license {
        points += 1;
    } else {
        explanations.push("Missing LICENSE (can raise diligence/IP concerns).".into());
    }

    clamp_points(points, DOCUMENTATION_CAP)
}

fn score_activity(facts: &RepoFacts, now: DateTime<Utc>, explanations: &mut Vec<String>) -> u8 {
    let mut points = 0;

    let days = days_between(facts.pushed_at, now);
    if days <= RECENT_PUSH_DAYS {
        points += 2;
    } else if days <= STALE_PUSH_DAYS {
        points += 1;
    } else {
        explanations.push(format!("No recent push in {days} days (looks inactive)."));
    }

    if facts.commits_last_30 >= ACTIVE_COMMIT_THRESHOLD {
        points += 1;
    } else if facts.commits_last_30 == 0 {
        explanations.push("No commits in the last 30 days.".into());
    }

    clamp_points(points, ACTIVITY_CAP)
}

fn score_hygiene(facts: &RepoFacts, explanations: &mut Vec<String>) -> u8 {
    let mut points = 0;

    if facts.has_ci {
        points += 1;
    } else {
        explanations.push("No CI detected (e.g., GitHub Actions).".into());
    }

    if facts.has_package_scripts {
        points += 1;
    } else {
        explanations
            .push("No obvious build/test scripts found (package.json scripts).".into());
    }

    if facts.contributors_count >= TEAM_CONTRIBUTOR_THRESHOLD {
        points += 1;
    } else {
        explanations.push("Single contributor (weaker team execution signal).".into());
    }

    clamp_points(points, HYGIENE_CAP)
}

fn score_delivery_readiness(facts: &RepoFacts) -> u8 {
    let mut points = 0;

    if facts.open_issues > 0 {
        points += 1;
    }
    if facts.languages_count >= 1 {
        points += 1;
    }

    clamp_points(points, DELIVERY_READINESS_CAP)
}

/// Clamps a running point total into `0..=cap`.
fn clamp_points(points: i64, cap: u8) -> u8 {
    // The clamp keeps the value within `u8` range, so the fallback is never hit.
    u8::try_from(points.clamp(0, i64::from(cap))).unwrap_or(cap)
}
