//! # Generic Actor Server
//!
//! This module defines the `ResourceActor`, the single owner of a record collection.
//! It implements the "Server" side of the Actor Model, processing messages sequentially
//! and ensuring exclusive access to the underlying [`RecordStore`].

use crate::client::ResourceClient;
use crate::entity::{next_id, ActorEntity};
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use crate::store::RecordStore;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that manages a persisted collection of entities.
///
/// # Architecture Note
/// This struct is the "Server" half of the actor. It owns the store and the receiver end
/// of the channel.
///
/// **Concurrency Model**:
/// Every request reloads the whole collection from the store, mutates the in-memory copy
/// and writes the whole collection back. Because the actor processes one message at a time,
/// a load/mutate/save cycle can never interleave with another one: two concurrent writers
/// cannot lose each other's update, and no `Mutex` is needed around the store.
///
/// # Usage Pattern
///
/// 1.  **Create**: Call `ResourceActor::new()` with a store to get the `actor` and `client`.
/// 2.  **Run**: Spawn the actor's run loop in a background task.
/// 3.  **Stop**: Drop every client; the loop ends when the channel closes.
///
/// ```rust
/// use actor_framework::{ActorEntity, MemoryStore, ResourceActor};
///
/// #[derive(Clone, Debug)] struct Note { id: u32, text: String }
/// #[derive(Debug)] struct NoteError;
/// impl std::fmt::Display for NoteError {
///     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { write!(f, "note error") }
/// }
/// impl std::error::Error for NoteError {}
///
/// impl ActorEntity for Note {
///     type Id = u32;
///     type Create = String;
///     type Patch = String;
///     type Error = NoteError;
///
///     fn id(&self) -> u32 { self.id }
///     fn from_create_params(id: u32, text: String) -> Result<Self, NoteError> { Ok(Self { id, text }) }
///     fn on_patch(&mut self, text: String) -> Result<(), NoteError> { self.text = text; Ok(()) }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = ResourceActor::new(10, MemoryStore::<Note>::new());
///     tokio::spawn(actor.run());
///
///     let note = client.create("hello".to_string()).await.unwrap();
///     assert_eq!(note.id, 1);
/// }
/// ```
///
/// # Operations
///
/// * **List**: Loads and returns the collection in stored order.
/// * **Get**: Loads the collection and searches it by ID.
/// * **Create**: Assigns `max(id) + 1`, builds the entity, appends it, saves.
/// * **Replace**: Finds the entity, rebuilds it via `on_replace`, saves.
/// * **Patch**: Finds the entity, merges via `on_patch`, saves.
///
/// A missing ID answers `FrameworkError::NotFound` and never writes to the store. Writes
/// also refuse to run when the store reports its data as unreadable, and a create past the
/// largest representable ID answers `FrameworkError::IdsExhausted`.
pub struct ResourceActor<T: ActorEntity, S> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: S,
}

impl<T, S> ResourceActor<T, S>
where
    T: ActorEntity,
    S: RecordStore<T>,
{
    /// Creates a new `ResourceActor` over `store` and its associated `ResourceClient`.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - The capacity of the MPSC channel. If the channel is full,
    ///   calls to the client will wait until there is space.
    /// * `store` - Where the collection is persisted.
    pub fn new(buffer_size: usize, store: S) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self { receiver, store };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop, processing messages until the channel closes.
    pub async fn run(mut self) {
        // Extract just the type name (e.g., "Product" instead of "product_service::model::product::Product")
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::List { respond_to } => {
                    let records = self.load_for_read(entity_type).await;
                    debug!(entity_type, size = records.len(), "List");
                    let _ = respond_to.send(Ok(records));
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self
                        .load_for_read(entity_type)
                        .await
                        .into_iter()
                        .find(|record| record.id() == id);
                    let found = item.is_some();
                    debug!(entity_type, %id, found, "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let result = self.create(params).await;
                    match &result {
                        Ok(item) => info!(entity_type, id = %item.id(), "Created"),
                        Err(e) => warn!(entity_type, error = %e, "Create failed"),
                    }
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Replace {
                    id,
                    params,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?params, "Replace");
                    let result = self
                        .modify(id, |item| item.on_replace(params))
                        .await;
                    match &result {
                        Ok(_) => info!(entity_type, %id, "Replaced"),
                        Err(e) => warn!(entity_type, %id, error = %e, "Replace failed"),
                    }
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Patch {
                    id,
                    patch,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?patch, "Patch");
                    let result = self.modify(id, |item| item.on_patch(patch)).await;
                    match &result {
                        Ok(_) => info!(entity_type, %id, "Patched"),
                        Err(e) => warn!(entity_type, %id, error = %e, "Patch failed"),
                    }
                    let _ = respond_to.send(result);
                }
            }
        }

        info!(entity_type, "Shutdown");
    }

    /// Reads never fail: a collection the store cannot decode lists as empty.
    async fn load_for_read(&self, entity_type: &str) -> Vec<T> {
        self.store.load().await.unwrap_or_else(|e| {
            warn!(entity_type, error = %e, "Serving empty collection");
            Vec::new()
        })
    }

    async fn create(&self, params: T::Create) -> Result<T, FrameworkError> {
        let mut records = self.store.load().await?;
        let id = next_id(&records).ok_or_else(|| {
            let last = records.iter().map(|record| record.id()).max();
            FrameworkError::IdsExhausted(last.map(|id| id.to_string()).unwrap_or_default())
        })?;
        let item = T::from_create_params(id, params)
            .map_err(|e| FrameworkError::EntityError(Box::new(e)))?;
        records.push(item.clone());
        self.store.save(&records).await?;
        Ok(item)
    }

    /// Loads the collection, applies `apply` to the record with `id` and saves.
    async fn modify<F>(&self, id: T::Id, apply: F) -> Result<T, FrameworkError>
    where
        F: FnOnce(&mut T) -> Result<(), T::Error>,
    {
        let mut records = self.store.load().await?;
        let item = records
            .iter_mut()
            .find(|record| record.id() == id)
            .ok_or_else(|| FrameworkError::NotFound(id.to_string()))?;
        apply(item).map_err(|e| FrameworkError::EntityError(Box::new(e)))?;
        let updated = item.clone();
        self.store.save(&records).await?;
        Ok(updated)
    }
}
