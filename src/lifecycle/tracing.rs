//! # Observability & Tracing
//!
//! [`setup_tracing`] installs the global `tracing` subscriber for the binary.
//!
//! The filter comes from `RUST_LOG` and falls back to `info`. Output is the compact format
//! without module paths, so span names carry the context:
//!
//! ```text
//! INFO request{method=POST uri=/api/products}:create_product: Created entity_type="Product" size=1
//! WARN request{method=GET uri=/api/products/nope}: Product not found status=404 id=nope
//! ```
//!
//! ```bash
//! # Show full candidate payloads at client entry points
//! RUST_LOG=debug cargo run
//!
//! # Only the actor framework
//! RUST_LOG=actor_framework=debug cargo run
//! ```
//!
//! Credentials never reach the logs: the gate logs only the outcome.

use tracing_subscriber::EnvFilter;

/// Installs the global subscriber. Call once, before anything logs.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_target(false)
        .compact()
        .init();
}
