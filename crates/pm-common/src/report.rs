use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Match, Selection, run_id};

/// One scoring run as handed to the dashboard or written to disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchReport {
    /// Process-level ULID, see [`run_id::get`].
    pub run_id: String,
    pub generated_at: DateTime<Utc>,
    pub engine_version: String,
    pub institutions: usize,
    pub employers: usize,
    pub fallback_matches: usize,
    pub matches: Vec<Match>,
}

impl MatchReport {
    pub fn new(institutions: usize, employers: usize, matches: Vec<Match>) -> Self {
        Self::at(Utc::now(), institutions, employers, matches)
    }

    pub fn at(
        generated_at: DateTime<Utc>,
        institutions: usize,
        employers: usize,
        matches: Vec<Match>,
    ) -> Self {
        let fallback_matches = matches
            .iter()
            .filter(|m| m.selection == Selection::Fallback)
            .count();

        Self {
            run_id: run_id::get().to_string(),
            generated_at,
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            institutions,
            employers,
            fallback_matches,
            matches,
        }
    }
}
