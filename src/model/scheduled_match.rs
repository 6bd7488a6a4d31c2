use chrono::{DateTime, Utc};
use serde::Serialize;
use url::Url;

/// Whether Leaguepedia knows the exact start time or only the day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, strum::Display)]
pub enum TimePrecision {
    #[strum(serialize = "exact")]
    Exact,
    #[strum(serialize = "date only (TBD)")]
    DateOnly,
}

/// A schedule row after entity decoding and home/away resolution.
#[derive(Debug, Clone, Serialize)]
pub struct ScheduledMatch {
    pub team1: String,
    pub team2: String,
    pub opponent: String,
    /// Tracked team is listed as `Team1`.
    pub is_home: bool,
    pub title: String,
    pub start: DateTime<Utc>,
    pub precision: TimePrecision,
    pub best_of: Option<u32>,
    pub round: Option<String>,
    pub stream: Option<String>,
    pub overview_url: Url,
    /// Ordered description lines; only present values are kept.
    pub metadata: Vec<String>,
}
