use thiserror::Error;

/// Errors raised while acquiring or aggregating playlist data.
///
/// Malformed catalog records never surface here: tracks without an id or name
/// and feature records that cannot be decoded are dropped during ingestion.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// Non-success status, network failure or undecodable body from the catalog API.
    #[error("Catalog request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// A single audio feature request was asked to carry more ids than the API accepts.
    #[error("Too many track ids to request: {requested} (maximum is {max})")]
    InvariantViolation { requested: usize, max: usize },

    /// Aggregation was requested over a playlist that holds no tracks.
    #[error("Playlist {playlist} has no playable tracks to analyse")]
    EmptyCollection { playlist: String },

    /// The access token has passed its lifetime.
    #[error("Access token expired")]
    TokenExpired,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Cannot write report: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
