//! Per-repository outcome types.

use crate::fetcher::{ErrorBody, FetchError};
use crate::report::ScoreReport;

/// Result of scoring a single repository.
#[derive(Debug, Clone)]
pub enum ScoreOutcome {
    /// Scoring succeeded.
    Scored {
        /// Repository URL as supplied.
        repository: String,
        /// Full report.
        report: Box<ScoreReport>,
    },

    /// Scoring failed.
    Failed {
        /// Repository URL as supplied.
        repository: String,
        /// Status a request-serving front end would answer with.
        status: u16,
        /// Error message.
        error: String,
    },
}

impl ScoreOutcome {
    /// Builds the outcome for a finished scoring attempt.
    pub fn from_result(repository: String, result: Result<ScoreReport, FetchError>) -> Self {
        match result {
            Ok(report) => Self::Scored {
                repository,
                report: Box::new(report),
            },
            Err(e) => Self::Failed {
                repository,
                status: e.status_code(),
                error: e.to_string(),
            },
        }
    }

    /// Repository URL this outcome belongs to.
    #[must_use]
    pub fn repository(&self) -> &str {
        match self {
            Self::Scored { repository, .. } | Self::Failed { repository, .. } => repository,
        }
    }

    /// Error body for a failed outcome.
    #[must_use]
    pub fn error_body(&self) -> Option<ErrorBody> {
        match self {
            Self::Scored { .. } => None,
            Self::Failed { error, .. } => Some(ErrorBody {
                error: error.clone(),
            }),
        }
    }
}
