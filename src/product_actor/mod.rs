//! Product-specific resource logic: the entity hooks and the actor constructor.

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::ProductClient;
use crate::model::Product;
use actor_framework::{RecordStore, ResourceActor};

/// Creates a new Product actor over `store` and its client.
pub fn new<S>(store: S, capacity: usize) -> (ResourceActor<Product, S>, ProductClient)
where
    S: RecordStore<Product>,
{
    let (actor, generic_client) = ResourceActor::new(capacity, store);
    let client = ProductClient::new(generic_client);

    (actor, client)
}
