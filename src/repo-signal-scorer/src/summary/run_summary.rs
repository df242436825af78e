//! Run summary types.

use super::outcome::ScoreOutcome;

/// Summary of a batch scoring run.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    /// Number of repository URLs supplied.
    pub repositories_requested: usize,

    /// Number of repositories scored.
    pub repositories_scored: usize,

    /// Number of repositories that failed.
    pub repositories_failed: usize,

    /// Per-repository outcomes, in input order.
    pub outcomes: Vec<ScoreOutcome>,
}

impl RunSummary {
    /// Creates a new empty summary.
    #[must_use]
    pub fn new(repositories_requested: usize) -> Self {
        Self {
            repositories_requested,
            outcomes: Vec::with_capacity(repositories_requested),
            ..Default::default()
        }
    }

    /// Updates the summary with an outcome.
    pub fn record_outcome(&mut self, outcome: ScoreOutcome) {
        match &outcome {
            ScoreOutcome::Scored { .. } => self.repositories_scored += 1,
            ScoreOutcome::Failed { .. } => self.repositories_failed += 1,
        }
        self.outcomes.push(outcome);
    }

    /// Returns true if any repository failed.
    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.repositories_failed > 0
    }

    /// Returns true if every requested repository was scored.
    #[must_use]
    pub fn all_success(&self) -> bool {
        self.repositories_failed == 0 && self.repositories_scored == self.repositories_requested
    }

    /// Mean `score10` over the scored repositories, if any.
    #[must_use]
    pub fn average_score(&self) -> Option<f64> {
        let scores: Vec<f64> = self
            .outcomes
            .iter()
            .filter_map(|outcome| match outcome {
                ScoreOutcome::Scored { report, .. } => Some(f64::from(report.score.score10)),
                ScoreOutcome::Failed { .. } => None,
            })
            .collect();

        if scores.is_empty() {
            return None;
        }
        #[allow(clippy::cast_precision_loss)]
        let count = scores.len() as f64;
        Some(scores.iter().sum::<f64>() / count)
    }
}
