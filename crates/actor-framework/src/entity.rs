//! # ActorEntity Trait
//!
//! The `ActorEntity` trait defines the contract that every record type must implement to be
//! managed by the generic `ResourceActor`. It specifies associated types for IDs, payloads and
//! errors, and provides the mutation hooks (`from_create_params`, `on_replace`, `on_patch`).
//!
//! # Architecture Note
//! We use "Associated Types" (type Id, type Create, etc.) to enforce type safety.
//! A `Product` entity requires a `ProductDraft` payload, and you can't accidentally send it
//! a payload meant for another record type. The compiler prevents this class of bugs entirely.
//!
//! # Provided Methods (Hooks)
//! [`ActorEntity::on_replace`] has a default implementation that rebuilds the entity from
//! the create payload while keeping its id. Override it only when a replace needs to carry
//! state across.

use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Identifiers that are assigned in increasing order.
///
/// The actor assigns `max(existing) + 1` to every new record, or [`SequentialId::first`]
/// when the collection is empty. Ids are never reused, and never wrap around.
pub trait SequentialId: Copy + Eq + Ord + Hash + Send + Sync + Display + Debug + 'static {
    /// The id given to the first record of an empty collection.
    fn first() -> Self;

    /// The id that follows `self`, or `None` when the id space is exhausted.
    fn next(self) -> Option<Self>;
}

impl SequentialId for u32 {
    fn first() -> Self {
        1
    }

    fn next(self) -> Option<Self> {
        self.checked_add(1)
    }
}

impl SequentialId for u64 {
    fn first() -> Self {
        1
    }

    fn next(self) -> Option<Self> {
        self.checked_add(1)
    }
}

/// Computes the id for a record appended to `records`.
///
/// Returns `None` when the largest existing id has no successor.
pub fn next_id<T: ActorEntity>(records: &[T]) -> Option<T::Id> {
    match records.iter().map(|record| record.id()).max() {
        Some(max) => max.next(),
        None => Some(T::Id::first()),
    }
}

/// Trait that any record type must implement to be managed by ResourceActor.
///
/// # Architecture Note
/// By defining a contract (`ActorEntity`) that our record types must satisfy, we can write
/// the `ResourceActor` logic *once*: load the collection, find by id, mutate, persist.
///
/// # Error Granularity
/// The framework enforces a **Per-Actor Error Type** (one enum for the whole actor) rather than
/// per-message error types. Clients deal with a single error type, which keeps pattern
/// matching at the call site simple.
pub trait ActorEntity: Clone + Send + Sync + Debug + 'static {
    /// The unique identifier for this entity.
    type Id: SequentialId;

    /// The data required to create (or fully replace) an instance.
    type Create: Send + Sync + Debug;

    /// The data for a partial update. Only the fields it carries are applied.
    type Patch: Send + Sync + Debug;

    /// The error type for this entity.
    type Error: std::error::Error + Send + Sync + 'static;

    /// The id this record is stored under.
    fn id(&self) -> Self::Id;

    /// Construct the full Entity from the ID and Payload.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Replace every field of the entity, keeping its id.
    fn on_replace(&mut self, params: Self::Create) -> Result<(), Self::Error> {
        *self = Self::from_create_params(self.id(), params)?;
        Ok(())
    }

    /// Merge the fields present in `patch` into the entity.
    fn on_patch(&mut self, patch: Self::Patch) -> Result<(), Self::Error>;
}
