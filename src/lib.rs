//! # Product Service
//!
//! > **A product catalogue over HTTP, persisted in a single JSON file.**
//!
//! The service exposes list, get, create, replace and patch on `/api/products`. Writes are
//! validated field by field before anything is stored, string fields are normalized on the way
//! in, and every successful response is stamped with the time it was produced.
//!
//! ## Design
//!
//! ### One owner for the file
//! The collection lives in one JSON file that is read and rewritten whole on every request.
//! All access goes through a single product actor built on the `actor_framework` crate, so a
//! load/mutate/save cycle never interleaves with another and concurrent writers cannot lose
//! each other's update.
//!
//! ### Validation before the actor
//! Handlers turn the raw body into a typed [`ProductDraft`](model::ProductDraft) or
//! [`ProductPatch`](model::ProductPatch) first. An invalid body is answered with the list of
//! violations and never reaches the store.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Data ([`model`])
//! - **Key items**: [`Product`](model::Product), [`ProductId`](model::ProductId).
//!
//! ### 2. The Actor ([`product_actor`], [`clients`])
//! - **Role**: Implements `ActorEntity` for `Product` and wraps the generic client.
//! - **Key items**: [`ProductClient`](clients::ProductClient).
//!
//! ### 3. The Rules ([`validation`])
//! - **Role**: The declarative field rule table and the parsers built on it.
//!
//! ### 4. The Surface ([`http`])
//! - **Role**: Router, normalization, response stamping and error bodies.
//!
//! ### 5. The Orchestrator ([`lifecycle`], [`config`])
//! - **Role**: Layered configuration, tracing setup, starting and stopping the actor.
//! - **Key items**: [`ProductSystem`](lifecycle::ProductSystem), [`ServiceConfig`](config::ServiceConfig).
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Serve on port 3000, storing products in ./products.json
//! cargo run
//!
//! # Elsewhere
//! cargo run -- --port 8000 --data-file /var/lib/catalogue.json
//! ```

pub mod clients;
pub mod config;
pub mod http;
pub mod lifecycle;
pub mod model;
pub mod product_actor;
pub mod validation;
