//! [`ActorEntity`] implementation for the Product domain type.
//!
//! The actor serializes every request, so the merge-validate-replace sequence in
//! [`on_update`](ActorEntity::on_update) runs as one critical section.

use super::context::ProductContext;
use super::error::ProductError;
use crate::model::{Product, ProductDraft, ProductFields, ProductId};
use crate::validator::validate;
use actor_framework::ActorEntity;
use async_trait::async_trait;

#[async_trait]
impl ActorEntity for Product {
    type Id = ProductId;
    type Create = ProductFields;
    type Update = ProductDraft;
    type Context = ProductContext;
    type Error = ProductError;

    fn next_id(ctx: &ProductContext) -> ProductId {
        ctx.ids.next_id()
    }

    /// Creation takes already-validated fields and stamps the creation time.
    fn from_create_params(
        id: ProductId,
        fields: ProductFields,
        ctx: &ProductContext,
    ) -> Result<Self, Self::Error> {
        Ok(Product::new(id, fields, ctx.clock.now()))
    }

    /// Lays the supplied fields over the stored ones and re-validates the result.
    ///
    /// # Errors
    /// [`ProductError::Invalid`] with the first broken rule of the merged record.
    async fn on_update(
        &mut self,
        update: ProductDraft,
        _ctx: &ProductContext,
    ) -> Result<(), Self::Error> {
        let merged = update.merged_over(self.to_draft());
        let fields = validate(&merged)?;
        self.apply(fields);
        Ok(())
    }
}
