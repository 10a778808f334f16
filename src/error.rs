//! Huginn error types

/// Huginn error types
#[derive(Debug, thiserror::Error)]
pub enum HuginnError {
    // Input errors
    /// Input was empty or whitespace-only. Recovered by [`Analyzer::render`]
    /// into the fixed prompt message; no backend is invoked.
    ///
    /// [`Analyzer::render`]: crate::Analyzer::render
    #[error("empty input")]
    EmptyInput,

    // Backend/network errors
    /// The scoring backend failed to load, respond, or timed out.
    ///
    /// Propagated to the caller as a visible error; a fabricated neutral
    /// score is never substituted.
    #[error("scoring backend unavailable: {0}")]
    BackendUnavailable(String),

    #[error("HTTP error: {0}")]
    Http(String),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("authentication failed")]
    AuthenticationFailed,

    #[error("model not found: {0}")]
    ModelNotFound(String),

    // Data errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("data error: {0}")]
    Data(String),

    #[error("empty response from backend")]
    EmptyResponse,

    // Configuration errors
    #[error("no scoring backend configured")]
    NoBackend,

    #[error("configuration error: {0}")]
    Configuration(String),
}

impl HuginnError {
    /// Whether this error indicates the scoring backend could not be reached
    /// or did not respond, as opposed to bad input or misconfiguration.
    pub fn is_backend_unavailable(&self) -> bool {
        match self {
            HuginnError::BackendUnavailable(_)
            | HuginnError::Http(_)
            | HuginnError::EmptyResponse => true,
            HuginnError::Api { status, .. } => (500..=599).contains(status),
            _ => false,
        }
    }

    /// Map a transport-level failure onto the error taxonomy.
    ///
    /// Timeouts and connection failures mean the backend is unreachable;
    /// everything else stays an HTTP error.
    pub(crate) fn from_transport(err: reqwest::Error) -> Self {
        if err.is_timeout() || err.is_connect() {
            HuginnError::BackendUnavailable(err.to_string())
        } else {
            HuginnError::Http(err.to_string())
        }
    }
}

/// Result type alias for Huginn operations
pub type Result<T> = std::result::Result<T, HuginnError>;
