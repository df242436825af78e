//! GitHub REST response and query shapes.
//!
//! Only the fields the scorer reads are modelled; everything else in the
//! payloads is ignored during deserialization.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Subset of `GET /repos/{owner}/{repo}`.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RepositoryResponse {
    pub full_name: String,
    pub stargazers_count: Option<u64>,
    pub forks_count: Option<u64>,
    pub open_issues_count: Option<u64>,
    pub pushed_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Subset of a single-file contents response (README, `package.json`).
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ContentFile {
    pub content: Option<String>,
    pub encoding: Option<String>,
}

impl ContentFile {
    /// Decodes the file body.
    ///
    /// GitHub wraps base64 content at 60 columns, so whitespace is removed
    /// before decoding. Returns `None` for missing content, an unknown
    /// encoding or invalid base64.
    pub(crate) fn decode(&self) -> Option<Vec<u8>> {
        let content = self.content.as_deref()?;
        match self.encoding.as_deref() {
            None | Some("base64") => {
                let compact: String = content.split_whitespace().collect();
                STANDARD.decode(compact).ok()
            }
            Some(_) => None,
        }
    }

    /// Decodes the file body as UTF-8 text.
    pub(crate) fn decode_text(&self) -> Option<String> {
        String::from_utf8(self.decode()?).ok()
    }
}

/// Query for single-page list endpoints.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct PageQuery {
    pub per_page: u8,
}

/// Query for the commit list endpoint.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct CommitsQuery {
    /// ISO 8601 lower bound on commit dates.
    pub since: String,
    pub per_page: u8,
}
