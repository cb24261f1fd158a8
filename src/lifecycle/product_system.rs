use crate::clients::ProductClient;
use crate::config::ServiceConfig;
use crate::model::Product;
use actor_framework::{JsonFileStore, RecordStore};
use tracing::{error, info};

/// The runtime orchestrator for the product service.
///
/// `ProductSystem` is responsible for:
/// - **Lifecycle Management**: Starting and stopping the product actor
/// - **Resource Coordination**: Giving the actor sole ownership of the product store
///
/// # Example
///
/// ```ignore
/// let system = ProductSystem::from_config(&config);
///
/// // Use the client to interact with the actor
/// let product = system.product_client.create_product(draft).await?;
///
/// // Gracefully shut down when done
/// system.shutdown().await?;
/// ```
pub struct ProductSystem {
    /// Client for interacting with the Product actor
    pub product_client: ProductClient,

    /// Task handle of the running actor (used for graceful shutdown)
    handle: tokio::task::JoinHandle<()>,
}

impl ProductSystem {
    /// Spawns the product actor over the configured JSON file.
    pub fn from_config(config: &ServiceConfig) -> Self {
        info!(data_file = %config.data_file.display(), "Using product file");
        let store = JsonFileStore::<Product>::new(&config.data_file);
        Self::with_store(store, config.channel_capacity)
    }

    /// Spawns the product actor over any store.
    pub fn with_store<S>(store: S, capacity: usize) -> Self
    where
        S: RecordStore<Product>,
    {
        let (actor, product_client) = crate::product_actor::new(store, capacity);
        let handle = tokio::spawn(actor.run());

        Self {
            product_client,
            handle,
        }
    }

    /// Gracefully shuts down the system.
    ///
    /// Dropping the client closes the channel once every clone of it (including the ones held
    /// by the HTTP router) is gone; the actor then leaves its loop and the task completes.
    ///
    /// # Returns
    ///
    /// - `Ok(())` if the actor shut down cleanly
    /// - `Err(String)` if the actor task failed or panicked
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        drop(self.product_client);

        if let Err(e) = self.handle.await {
            error!("Actor task failed: {:?}", e);
            return Err(format!("Actor task failed: {:?}", e));
        }

        info!("System shutdown complete.");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actor_framework::{ActorClient, MemoryStore};

    #[tokio::test]
    async fn test_shutdown_after_use() {
        let system = ProductSystem::with_store(MemoryStore::<Product>::new(), 4);

        assert!(system.product_client.list().await.unwrap().is_empty());

        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_from_config_reads_data_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("products.json");
        std::fs::write(
            &path,
            r#"[{"id": 4, "name": "widget", "category": "tools", "quantity": 5,
                 "unitPrice": 9.99, "dateAdded": "2024-01-15", "supplier": "acme"}]"#,
        )
        .unwrap();
        let config = ServiceConfig {
            data_file: path,
            ..ServiceConfig::default()
        };

        let system = ProductSystem::from_config(&config);
        let products = system.product_client.list().await.unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].id.0, 4);

        system.shutdown().await.unwrap();
    }
}
