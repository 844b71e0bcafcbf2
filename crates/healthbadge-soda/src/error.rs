use thiserror::Error;

/// Errors returned by the inspection-records (SODA) client.
#[derive(Debug, Error)]
pub enum SodaError {
    /// Network or TLS failure, or a non-2xx status from the API.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with its JSON error envelope.
    #[error("SODA API error: {0}")]
    Api(String),

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid base URL '{base_url}': {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },
}
