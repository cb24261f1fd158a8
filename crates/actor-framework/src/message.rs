//! # Generic Messages
//!
//! This module defines the generic message types used for communication between
//! the `ResourceClient` and `ResourceActor`.

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor to request operations.
///
/// # Resource-Oriented Architecture
/// Each actor manages one collection of records (the [`ActorEntity`]). Instead of defining
/// ad-hoc messages for every operation, we standardize around the lifecycle operations the
/// collection supports.
///
/// - **List**: Retrieval of the whole collection, in stored order.
/// - **Get**: Retrieval of one record by ID.
/// - **Create**: Lifecycle start. Uses [`ActorEntity::Create`] and assigns the next id.
/// - **Replace**: Full update. Uses [`ActorEntity::Create`], keeping the id.
/// - **Patch**: Partial update. Uses [`ActorEntity::Patch`].
///
/// Records are never removed, so there is no delete message.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    List {
        respond_to: Response<Vec<T>>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    Create {
        params: T::Create,
        respond_to: Response<T>,
    },
    Replace {
        id: T::Id,
        params: T::Create,
        respond_to: Response<T>,
    },
    Patch {
        id: T::Id,
        patch: T::Patch,
        respond_to: Response<T>,
    },
}
