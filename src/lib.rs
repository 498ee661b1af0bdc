//! # Catalog Service
//!
//! > **An in-memory product catalog behind a keyed HTTP API.**
//!
//! Products are created, read, updated, listed and deleted through routes under
//! `/api/products`. Every request must present a shared secret. The collection lives in a
//! single [`ResourceActor`](actor_framework::ResourceActor) task, so mutations are serialized
//! without locks.
//!
//! ## Request Path
//!
//! ```text
//! HTTP ─▶ gate ─▶ handler ─▶ ProductClient ─▶ (mpsc) ─▶ ResourceActor<Product>
//!                                  │                        │
//!                                  ├─ validate (create)     ├─ merge + validate (update)
//!                                  └─ query / stats         └─ store
//! ```
//!
//! - Creates are validated in the client; an invalid candidate never reaches the actor.
//! - Updates merge the supplied fields over the stored record inside the actor, validate the
//!   merged result, and replace the record only if it passes. `id` and `createdAt` never change.
//! - Reads take an insertion-ordered snapshot and run the pure [`query`] functions over it.
//!
//! ## Module Tour
//!
//! ### 1. The Records ([`model`], [`validator`])
//! - **Key items**: [`Product`](model::Product), [`ProductDraft`](model::ProductDraft),
//!   [`validate`](validator::validate).
//!
//! ### 2. The Actor ([`product_actor`], [`clients`])
//! - **Role**: [`ActorEntity`](actor_framework::ActorEntity) implementation for `Product`,
//!   the id and clock capabilities it is given, and the typed client wrapping it.
//! - **Key items**: [`ProductContext`](product_actor::ProductContext),
//!   [`ProductClient`](clients::ProductClient).
//!
//! ### 3. The Read Side ([`query`])
//! - **Key items**: [`query`](query::query), [`stats`](query::stats).
//!
//! ### 4. The Boundary ([`gate`], [`error`], [`api`])
//! - **Role**: credential check, the error taxonomy with its status codes, and the axum router.
//! - **Key items**: [`CatalogError`](error::CatalogError), [`build_router`](api::build_router).
//!
//! ### 5. The Orchestrator ([`lifecycle`], [`config`])
//! - **Key items**: [`CatalogSystem`](lifecycle::CatalogSystem),
//!   [`setup_tracing`](lifecycle::setup_tracing), [`Config`](config::Config).
//!
//! ## Running
//!
//! ```bash
//! API_KEY=secret RUST_LOG=info cargo run
//! curl -H 'x-api-key: secret' localhost:3000/api/products
//! ```

pub mod api;
pub mod clients;
pub mod config;
pub mod error;
pub mod gate;
pub mod lifecycle;
pub mod model;
pub mod product_actor;
pub mod query;
pub mod validator;
