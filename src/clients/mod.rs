//! Domain-specific clients wrapping the generic [`ResourceClient`](actor_framework::ResourceClient).

pub mod product_client;

pub use product_client::ProductClient;
