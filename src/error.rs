use std::num::ParseIntError;
use std::path::PathBuf;

/// All errors that can occur while building the match calendar.
#[derive(thiserror::Error, Debug)]
pub enum ScheduleError {
    /// HTTP request failed (network, DNS, TLS, timeout, etc.).
    #[error("http request failed for {url}: {source}")]
    Http {
        url: String,
        source: reqwest::Error,
    },

    /// Server returned a non-success HTTP status code.
    #[error("unexpected status {status} for {url}")]
    UnexpectedStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    /// Failed to read the response body as text.
    #[error("failed to read response body from {url}: {source}")]
    ResponseBody {
        url: String,
        source: reqwest::Error,
    },

    /// The response body was not the JSON shape Cargo returns.
    #[error("failed to decode cargo response from {url}: {source}")]
    Decode {
        url: String,
        source: serde_json::Error,
    },

    /// The API answered 200 but reported a query error in the body.
    #[error("cargo query rejected ({code}): {info}")]
    CargoApi { code: String, info: String },

    /// The query succeeded but matched no upcoming matches.
    #[error("no events retrieved")]
    NoEvents,

    /// Failed to parse a match timestamp.
    #[error("failed to parse date: {0}")]
    DateParse(#[from] chrono::ParseError),

    /// `BestOf` was present but not an integer.
    #[error("invalid best-of value {value:?}: {source}")]
    BestOf {
        value: String,
        source: ParseIntError,
    },

    /// The overview page could not be turned into a wiki URL.
    #[error("invalid overview page {page:?}: {source}")]
    InvalidUrl {
        page: String,
        source: url::ParseError,
    },

    /// An event start could not be resolved to a single instant.
    #[error("cannot serialize event {uid}: {reason}")]
    Serialization { uid: String, reason: String },

    /// Writing the calendar file failed.
    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, ScheduleError>;
