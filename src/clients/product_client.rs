//! # Product Client
//!
//! Provides a high‑level API for interacting with the `Product` actor.
//! It wraps a `ResourceClient<Product>` and runs the request-side logic: creates are validated
//! before anything is sent, reads pull a snapshot and run the query engine over it.
use crate::model::{Product, ProductDraft, ProductId};
use crate::product_actor::ProductError;
use crate::query::{self, CatalogStats, ProductPage, ProductQuery};
use crate::validator::validate;
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Product actor.
#[derive(Clone)]
pub struct ProductClient {
    inner: ResourceClient<Product>,
}

impl ProductClient {
    pub fn new(inner: ResourceClient<Product>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Product> for ProductClient {
    type Error = ProductError;

    fn inner(&self) -> &ResourceClient<Product> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => ProductError::NotFound(ProductId(id)),
            other => other
                .downcast_entity::<ProductError>()
                .unwrap_or_else(|e| ProductError::ActorCommunicationError(e.to_string())),
        }
    }
}

impl ProductClient {
    /// Validate a candidate and store it.
    ///
    /// Returns the stored record with its assigned `id` and `createdAt`. An invalid
    /// candidate is rejected here and never reaches the actor.
    #[instrument(skip(self, draft))]
    pub async fn create_product(&self, draft: ProductDraft) -> Result<Product, ProductError> {
        debug!(?draft, "create_product called");
        let fields = validate(&draft)?;
        self.inner.create(fields).await.map_err(Self::map_error)
    }

    /// Fetch one product, or [`ProductError::NotFound`].
    #[instrument(skip(self))]
    pub async fn get_product(&self, id: ProductId) -> Result<Product, ProductError> {
        self.get(id.clone())
            .await?
            .ok_or(ProductError::NotFound(id))
    }

    /// Merge `draft` over the stored product; the merged record must pass validation.
    #[instrument(skip(self, draft))]
    pub async fn update_product(
        &self,
        id: ProductId,
        draft: ProductDraft,
    ) -> Result<Product, ProductError> {
        debug!(%id, ?draft, "update_product called");
        self.inner.update(id, draft).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: ProductId) -> Result<(), ProductError> {
        self.delete(id).await
    }

    /// Filtered, searched, paginated view of the catalog.
    #[instrument(skip(self))]
    pub async fn list_products(&self, params: &ProductQuery) -> Result<ProductPage, ProductError> {
        let snapshot = self.list().await?;
        Ok(query::query(&snapshot, params))
    }

    #[instrument(skip(self))]
    pub async fn stats(&self) -> Result<CatalogStats, ProductError> {
        let snapshot = self.list().await?;
        Ok(query::stats(&snapshot))
    }
}
