//! # Actor Framework
//!
//! This crate provides the building blocks for serving a persisted record collection through a
//! single Tokio task. It implements a **Resource-Oriented Architecture (ROA)** pattern on top of
//! the **Actor Model**: a collection gets the standard List/Get/Create/Replace/Patch operations,
//! and all of them are funnelled through one actor that owns the collection's store.
//!
//! ## Why an actor in front of a flat file?
//!
//! A record collection persisted as one file is read and rewritten wholesale on every write.
//! If two requests run that load/mutate/save cycle at the same time, the second save silently
//! discards the first one's change. Putting the store behind an actor makes the actor the only
//! code that ever touches the file, and it handles one message at a time:
//!
//! - Isolated state (the store is owned by the actor task)
//! - Message-passing concurrency (clients are cheap channel senders)
//! - Sequential processing within the actor eliminates the lost-update race
//!
//! **Further Reading**:
//! - [Actor Model (Wikipedia)](https://en.wikipedia.org/wiki/Actor_model) - Foundational concurrency pattern by Carl Hewitt
//! - [Actors in Rust](https://ryhl.io/blog/actors-with-tokio/) - Practical guide to implementing actors with Tokio
//!
//! ## Architecture Overview
//!
//! 1. **Entity Layer** ([`ActorEntity`]) - How a record is built, replaced and patched
//! 2. **Storage Layer** ([`RecordStore`]) - Whole-collection load and save
//! 3. **Runtime Layer** ([`ResourceActor`]) - Message processing and id assignment
//! 4. **Interface Layer** ([`ResourceClient`], [`ActorClient`]) - Type-safe communication
//!
//! ## Example
//!
//! ```rust
//! use actor_framework::{ActorEntity, JsonFileStore, ResourceActor};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Clone, Debug, Serialize, Deserialize)]
//! struct Note { id: u64, text: String }
//!
//! #[derive(Debug)] struct NoteError;
//! impl std::fmt::Display for NoteError {
//!     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { write!(f, "note error") }
//! }
//! impl std::error::Error for NoteError {}
//!
//! impl ActorEntity for Note {
//!     type Id = u64;
//!     type Create = String;
//!     type Patch = String;
//!     type Error = NoteError;
//!
//!     fn id(&self) -> u64 { self.id }
//!     fn from_create_params(id: u64, text: String) -> Result<Self, NoteError> { Ok(Self { id, text }) }
//!     fn on_patch(&mut self, text: String) -> Result<(), NoteError> { self.text = text; Ok(()) }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let dir = std::env::temp_dir().join("actor-framework-doc");
//!     std::fs::create_dir_all(&dir).unwrap();
//!     let store = JsonFileStore::<Note>::new(dir.join("notes.json"));
//!
//!     let (actor, client) = ResourceActor::new(10, store);
//!     let handle = tokio::spawn(actor.run());
//!
//!     let note = client.create("hello".into()).await.unwrap();
//!     let patched = client.patch(note.id, "bye".into()).await.unwrap();
//!     assert_eq!(patched.text, "bye");
//!
//!     drop(client);
//!     handle.await.unwrap();
//! }
//! ```
//!
//! ## Testing
//!
//! The [`mock`] module lets you test resource-specific clients without spawning an actor,
//! and [`MemoryStore`] runs a real actor without touching the filesystem.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod store;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::{next_id, ActorEntity, SequentialId};
pub use error::{FrameworkError, StoreError};
pub use message::{ResourceRequest, Response};
pub use store::{JsonFileStore, MemoryStore, RecordStore};
