use crate::clients::ProductClient;
use crate::product_actor::{self, ProductContext};
use tokio::task::{JoinError, JoinHandle};
use tracing::{error, info};

/// Runtime owner of the catalog's actor.
///
/// `CatalogSystem` is responsible for:
/// - **Startup**: spawning the Product actor with its id and clock capabilities
/// - **Access**: exposing the [`ProductClient`] every request goes through
/// - **Shutdown**: closing the mailbox and waiting for the actor to finish
pub struct CatalogSystem {
    /// Client for interacting with the Product actor
    pub product_client: ProductClient,

    handle: JoinHandle<()>,
}

impl Default for CatalogSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogSystem {
    /// Starts the actor with UUID ids, the system clock and the default mailbox size.
    ///
    /// Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        Self::with_capacity(product_actor::DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_context(ProductContext::default(), capacity)
    }

    /// Starts the actor with injected capabilities, e.g. deterministic ids in tests.
    pub fn with_context(context: ProductContext, capacity: usize) -> Self {
        let (actor, client) = product_actor::with_capacity(capacity);
        let handle = tokio::spawn(actor.run(context));
        info!(capacity, "Catalog system started");

        Self {
            product_client: ProductClient::new(client),
            handle,
        }
    }

    /// Drops this system's client and waits for the actor task to exit.
    ///
    /// Returns the join error if the actor task panicked.
    pub async fn shutdown(self) -> Result<(), JoinError> {
        info!("Shutting down catalog system...");
        drop(self.product_client);

        if let Err(e) = self.handle.await {
            error!(error = %e, "Product actor task failed");
            return Err(e);
        }

        info!("Catalog system shutdown complete.");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product_actor::ProductError;
    use crate::query::ProductQuery;

    #[tokio::test]
    async fn test_starts_empty_and_shuts_down() {
        let system = CatalogSystem::new();
        let page = system
            .product_client
            .list_products(&ProductQuery::default())
            .await
            .unwrap();
        assert_eq!(page.total, 0);
        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_shutdown_waits_for_outstanding_clones() {
        let system = CatalogSystem::new();
        let survivor = system.product_client.clone();

        let shutdown = tokio::spawn(system.shutdown());
        // The actor keeps serving the surviving clone until it is dropped.
        assert!(survivor.stats().await.is_ok());
        drop(survivor);
        shutdown.await.unwrap().unwrap();
    }

    #[tokio::test]
    async fn test_dropped_actor_reports_communication_error() {
        let (actor, client) = product_actor::new();
        drop(actor);
        let err = ProductClient::new(client).stats().await.unwrap_err();
        assert!(matches!(err, ProductError::ActorCommunicationError(_)));
    }
}
