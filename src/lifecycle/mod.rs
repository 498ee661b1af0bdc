//! # System Lifecycle
//!
//! Starts the Product actor, hands out its client, and shuts it down again.
//!
//! Shutdown follows the channel-close pattern: dropping every [`ProductClient`](crate::clients::ProductClient)
//! closes the actor's mailbox, the actor drains what is queued and returns from `run`, and
//! [`CatalogSystem::shutdown`] awaits that task.
//!
//! ```rust,ignore
//! setup_tracing();
//! let system = CatalogSystem::new();
//! let page = system.product_client.list_products(&ProductQuery::default()).await?;
//! system.shutdown().await?;
//! ```
//!
//! Clones handed to other tasks (an HTTP router, for instance) must be dropped before
//! `shutdown` can complete.

pub mod catalog_system;
pub mod tracing;

pub use catalog_system::CatalogSystem;
pub use self::tracing::setup_tracing;
