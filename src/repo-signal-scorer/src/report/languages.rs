//! Language share breakdown.

use serde::Serialize;
use std::collections::BTreeMap;

/// Number of languages listed in the report.
pub const TOP_LANGUAGES: usize = 5;

/// One language's share of the repository's code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageShare {
    /// Language name as reported by GitHub.
    pub name: String,

    /// Bytes of code in this language.
    pub bytes: u64,

    /// Rounded percentage of all bytes.
    pub percent: u8,
}

/// Returns the largest languages by byte count with their rounded share.
///
/// Ties are broken by name. Percentages are 0 when no bytes are recorded.
#[must_use]
pub fn top_languages(languages: &BTreeMap<String, u64>, limit: usize) -> Vec<LanguageShare> {
    let total: u128 = languages.values().map(|&bytes| u128::from(bytes)).sum();

    let mut ranked: Vec<(&String, u64)> = languages.iter().map(|(name, &b)| (name, b)).collect();
    // BTreeMap iteration is name-ordered, so a stable sort keeps ties by name.
    ranked.sort_by(|a, b| b.1.cmp(&a.1));

    ranked
        .into_iter()
        .take(limit)
        .map(|(name, bytes)| LanguageShare {
            name: name.clone(),
            bytes,
            percent: percent_of(bytes, total),
        })
        .collect()
}

/// Rounds `part / total` to the nearest whole percent, halves rounding up.
fn percent_of(part: u64, total: u128) -> u8 {
    if total == 0 {
        return 0;
    }
    let rounded = (u128::from(part) * 200 + total) / (total * 2);
    u8::try_from(rounded.min(100)).unwrap_or(100)
}
