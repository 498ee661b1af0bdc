//! # HTTP Surface
//!
//! Maps the catalog operations onto routes under `/api/products`. Every request passes the
//! access gate ([`auth::require_api_key`]) before routing, and every failure leaves through
//! [`CatalogError`](crate::error::CatalogError)'s responder.

pub mod auth;
pub mod handlers;
pub mod router;
pub mod state;

pub use router::build_router;
pub use state::AppState;
