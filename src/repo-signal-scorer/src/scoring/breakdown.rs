//! Score breakdown types.

use serde::{Deserialize, Serialize};

/// Upper bound of the documentation bucket.
pub const DOCUMENTATION_CAP: u8 = 2;

/// Upper bound of the activity bucket.
pub const ACTIVITY_CAP: u8 = 3;

/// Upper bound of the hygiene bucket.
pub const HYGIENE_CAP: u8 = 3;

/// Upper bound of the delivery readiness bucket.
pub const DELIVERY_READINESS_CAP: u8 = 2;

/// Upper bound of the total score.
pub const TOTAL_CAP: u8 = 10;

/// Points awarded per bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubScores {
    /// README and LICENSE presence (0-2).
    pub documentation: u8,

    /// Push recency and recent commit volume (0-3).
    pub activity: u8,

    /// CI, build scripts and contributor spread (0-3).
    pub hygiene: u8,

    /// Open issues and detected languages (0-2).
    pub delivery_readiness: u8,
}

impl SubScores {
    /// Sum of all buckets before the total clamp.
    #[must_use]
    pub fn sum(&self) -> u32 {
        u32::from(self.documentation)
            + u32::from(self.activity)
            + u32::from(self.hygiene)
            + u32::from(self.delivery_readiness)
    }
}

/// Bounded repository score with the reasons points were withheld.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    /// Total score out of ten.
    pub score10: u8,

    /// Points per bucket.
    pub breakdown: SubScores,

    /// Human-readable reasons, documentation first, then activity, then hygiene.
    pub explanations: Vec<String>,
}

impl ScoreBreakdown {
    /// Returns true if no explanation was emitted.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.explanations.is_empty()
    }
}
