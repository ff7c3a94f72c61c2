//! Store error types

/// Errors surfaced by the key-value pass-through.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The key does not exist.
    #[error("redis: nil")]
    Nil,

    #[error("invalid store address '{addr}': {reason}")]
    InvalidAddress { addr: String, reason: String },

    /// Anything the redis client reported, unchanged.
    #[error(transparent)]
    Redis(#[from] redis::RedisError),
}
