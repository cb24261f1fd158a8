//! # Observability & Tracing
//!
//! This module provides the tracing infrastructure for the service.
//!
//! ## Overview
//!
//! The [`setup_tracing`] function initializes structured logging with the `tracing` crate.
//! Log lines come from three places:
//!
//! - **Actor Lifecycle**: `Actor started` and `Shutdown`, tagged with `entity_type`
//! - **Entity Operations**: List, Get, Create, Replace and Patch, with the product id
//! - **HTTP Requests**: spans from `tower-http`'s `TraceLayer`, one per request
//!
//! ## Configuration
//!
//! The level is read from `RUST_LOG` and defaults to `info`. The compact format hides the
//! crate/module prefix (`with_target(false)`), which keeps lines short.
//!
//! ```bash
//! # Compact logs (default)
//! cargo run
//!
//! # Show payloads and file reads/writes
//! RUST_LOG=debug cargo run
//!
//! # Per-request spans from the HTTP layer
//! RUST_LOG=info,tower_http=debug cargo run
//! ```
//!
//! ## Example Output
//!
//! **With `RUST_LOG=info`**:
//!
//! ```text
//! INFO Actor started entity_type="Product"
//! INFO Listening addr=0.0.0.0:3000
//! INFO Created entity_type="Product" id=1
//! INFO Patched entity_type="Product" id=1
//! ```
//!
//! **With `RUST_LOG=debug`** the actor also logs each request payload:
//!
//! ```text
//! DEBUG Create entity_type="Product" params=ProductDraft { name: "widget", ... }
//! DEBUG Record file written path=products.json size=1
//! INFO Created entity_type="Product" id=1
//! ```
//!
//! Failed writes are logged at `warn` by the actor and at `error` by the HTTP layer before
//! the 500 response is sent.

use tracing_subscriber::EnvFilter;

pub fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false) // Don't show module paths - we use entity_type instead
        .compact()
        .init();
}
