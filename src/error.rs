//! Error Types
//!
//! Failures surfaced by the GraphQL client.

/// Error returned by a GraphQL operation
#[derive(Debug, thiserror::Error)]
pub enum GraphqlError {
    /// Request could not be sent or the body could not be decoded
    #[error("network error: {0}")]
    Network(#[from] gloo_net::Error),
    #[error("server responded with HTTP {0}")]
    Status(u16),
    /// The response carried a non-empty `errors` array
    #[error("graphql error: {}", .0.join("; "))]
    Graphql(Vec<String>),
    #[error("response contained no data")]
    MissingData,
}
