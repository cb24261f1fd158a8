//! Error types for the Product actor.

use actor_framework::FrameworkError;
use thiserror::Error;

/// Errors that can occur during product operations.
#[derive(Debug, Error)]
pub enum ProductError {
    /// The requested product was not found.
    #[error("Product not found: {0}")]
    NotFound(String),

    /// The product file could not be written, or holds records that cannot be read back.
    #[error("Product storage error: {0}")]
    Storage(String),

    /// Every product id up to the given one is taken.
    #[error("No product id left after {0}")]
    IdsExhausted(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for ProductError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::NotFound(id) => ProductError::NotFound(id),
            FrameworkError::Store(e) => ProductError::Storage(e.to_string()),
            FrameworkError::IdsExhausted(last) => ProductError::IdsExhausted(last),
            other => ProductError::ActorCommunicationError(other.to_string()),
        }
    }
}
