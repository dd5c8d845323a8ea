use thiserror::Error;

/// Conditions that end a run.
#[derive(Error, Debug)]
pub enum Error {
    /// The HTTP client could not be built or the liveness request did not complete.
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Symphony API is not responding properly (status {status}): {body}")]
    /// `GET /` answered with something other than 200.
    ApiUnavailable { status: u16, body: String },

    /// Invalid settings, such as an unparsable base URL.
    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Result alias over [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;
