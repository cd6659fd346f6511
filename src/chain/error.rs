//! Errors raised by the TRON chain client.

/// Failure of a remote TRON API call.
#[derive(Debug, thiserror::Error)]
pub enum ChainError {
    /// Network or protocol failure talking to the full node.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The full node answered with a non-success HTTP status.
    #[error("{endpoint} returned HTTP {status}")]
    Status {
        /// Endpoint path that was called.
        endpoint: String,
        /// HTTP status code.
        status: u16,
    },

    /// The full node reported an error in the response body.
    #[error("api error: {0}")]
    Api(String),

    /// The account does not exist on-chain.
    #[error("account not found on-chain: {0}")]
    AccountNotFound(String),

    /// The response body did not match the expected shape.
    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The address could not be converted for the remote call.
    #[error("invalid address: {0}")]
    InvalidAddress(String),
}
