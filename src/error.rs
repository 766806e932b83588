//! Error types for the sentiment agent.

use thiserror::Error;

/// Main error type for provider and transport failures.
///
/// The responder itself is total and never returns an error; everything here
/// originates in the sentiment-provider collaborators and is converted to an
/// absent measurement before it reaches the conversation layer.
#[derive(Error, Debug)]
pub enum AgentError {
    #[error("Provider error: {0}")]
    Provider(String),

    #[error("No working predict endpoint under {base_url}")]
    EndpointDiscovery { base_url: String },

    #[error("Malformed sentiment payload: {0}")]
    MalformedPayload(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for agent operations.
pub type Result<T> = std::result::Result<T, AgentError>;
