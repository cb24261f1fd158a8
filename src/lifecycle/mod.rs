//! Runtime orchestration and lifecycle management.
//!
//! This module contains the infrastructure for managing the service's runtime environment:
//!
//! - **Actor lifecycle management**: Starting the product actor and shutting it down
//! - **Observability setup**: Initializing tracing and logging
//!
//! # Main Components
//!
//! - [`ProductSystem`] - Owns the product actor task and hands out its client
//! - [`setup_tracing`] - Initializes the tracing/logging infrastructure

pub mod product_system;
pub mod tracing;

pub use product_system::*;
pub use tracing::*;
