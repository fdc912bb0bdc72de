use thiserror::Error;

#[derive(Error, Debug)]
pub enum FpiError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Parsing Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration Error: {0}")]
    Config(String),
}

pub type FpiResult<T> = Result<T, FpiError>;

/// Failures of a single scoring invocation.
///
/// `AuthenticationRequired` and `InvalidRequest` are raised before any
/// network activity. `RequestFailed` displays as the bare message so it can be
/// shown to the user verbatim.
#[derive(Error, Debug)]
pub enum ScoringError {
    #[error("authentication required: no bearer token is available for the secure scoring endpoint")]
    AuthenticationRequired,

    #[error("{message}")]
    RequestFailed { status: u16, message: String },

    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

impl ScoringError {
    /// HTTP status of a rejected request, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ScoringError::RequestFailed { status, .. } => Some(*status),
            ScoringError::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
