use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
#[derive(Debug, Error)]
pub enum PdlError {
    /// An error occurred during an HTTP request (connection, DNS, timeout).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A provided or composed URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The response body could not be decoded as JSON.
    #[error("JSON decode error: {0}")]
    Json(#[from] serde_json::Error),

    /// The API returned a non-success HTTP status code.
    ///
    /// The response body is attached verbatim; no structured parsing of the
    /// provider's error payload is attempted.
    #[error("Unexpected response status: {status}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The raw response body.
        body: String,
    },

    /// The client was built without an API key.
    #[error("an API key is required to build a PdlClient")]
    MissingApiKey,
}
