/// Errors from the primary document store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// No project/database has been configured for the primary store.
    #[error("Document store not configured: {0}")]
    NotConfigured(String),

    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The store returned a non-2xx status code.
    #[error("Document store API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// A response body could not be interpreted.
    #[error("Malformed document store response: {0}")]
    Decode(String),

    /// The store refused the operation (used by in-process stores).
    #[error("Document store unavailable: {0}")]
    Unavailable(String),
}
