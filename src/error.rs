//! Error types for the media catalog.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the media catalog.
#[derive(Error, Debug)]
pub enum Error {
    // Configuration errors
    #[error("TMDB read token not configured. Set TMDB_READ_TOKEN or add it to config.toml")]
    ReadTokenMissing,

    #[error("Database path not configured. Set MEDIA_CATALOG_DB or add it to config.toml")]
    DbPathMissing,

    // TMDB errors
    #[error("TMDB request failed: {0}")]
    Transport(String),

    #[error("TMDB returned zero results")]
    EmptyResults,

    #[error("No match for '{title}' ({year}) within tolerance. First result was: {first_result}\nIf you're looking for a foreign movie, try the original spelling")]
    NoMatch {
        title: String,
        year: i32,
        first_result: String,
    },

    #[error("No director found in movie credits")]
    NoDirector,

    // Local store errors
    #[error("Several records match '{title}' ({year}). Look them up by id instead")]
    AmbiguousLocalRecord { title: String, year: i32 },

    #[error("No record found for {0}")]
    RecordNotFound(String),

    #[error("Record for {0} has no stored poster")]
    PosterMissing(String),

    // Input errors
    #[error("Directory name '{0}' is not 'TITLE (YEAR)'")]
    BadDirName(String),

    #[error("Year {0} is out of range")]
    BadYear(i32),

    // Database errors
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // JSON errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
