use thiserror::Error;

/// Errors returned by the brief-generation client.
#[derive(Debug, Error)]
pub enum BriefError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The messages API returned an error envelope with a message.
    #[error("messages API error: {0}")]
    Api(String),

    /// The response body could not be deserialized into the expected shape.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// The response parsed but carried no text content block.
    #[error("messages API response contained no text content")]
    MissingContent,
}
