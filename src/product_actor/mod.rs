//! # Product Actor
//!
//! The Product resource actor: the single owner of the catalog's product collection.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation for [`Product`]
//! - [`error`] - [`ProductError`] type for type-safe error handling
//! - [`context`] - id and clock capabilities injected as the actor's context
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use catalog_service::clients::ProductClient;
//! use catalog_service::model::ProductDraft;
//! use catalog_service::product_actor::{self, ProductContext};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, generic_client) = product_actor::new();
//!     let client = ProductClient::new(generic_client);
//!     tokio::spawn(actor.run(ProductContext::default()));
//!
//!     let draft: ProductDraft = serde_json::from_value(serde_json::json!({
//!         "name": "Widget",
//!         "description": "A widget",
//!         "price": 9.99,
//!         "category": "Tools",
//!         "inStock": true
//!     }))?;
//!     let product = client.create_product(draft).await?;
//!     assert_eq!(product.price, 9.99);
//!     Ok(())
//! }
//! ```

pub mod context;
pub mod entity;
pub mod error;

pub use context::*;
pub use error::*;

use crate::model::Product;
use actor_framework::{ResourceActor, ResourceClient};

/// Default mailbox size of the Product actor.
pub const DEFAULT_CAPACITY: usize = 32;

/// Creates a new Product actor and its client.
pub fn new() -> (ResourceActor<Product>, ResourceClient<Product>) {
    with_capacity(DEFAULT_CAPACITY)
}

/// Creates a new Product actor whose mailbox holds `capacity` pending requests.
pub fn with_capacity(capacity: usize) -> (ResourceActor<Product>, ResourceClient<Product>) {
    ResourceActor::new(capacity)
}
