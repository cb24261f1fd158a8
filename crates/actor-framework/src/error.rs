//! # Framework Errors
//!
//! This module defines the common error types used throughout the actor framework.
//! By centralizing error definitions, we ensure consistent error handling across
//! all actors, stores and clients.

/// Errors raised by a [`RecordStore`](crate::store::RecordStore).
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Failed to write record file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to serialize records: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("Stored records cannot be read back: {0}")]
    Incompatible(#[source] serde_json::Error),
}

/// Errors that can occur within the actor framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("No identifier left after {0}")]
    IdsExhausted(String),
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}
