//! # Actor Framework
//!
//! This crate provides the building blocks for owning a keyed collection of records inside a
//! single Tokio task and talking to it through a cheap, cloneable client. It implements a
//! **Resource-Oriented Architecture (ROA)** pattern on top of the **Actor Model**.
//!
//! ## Why ROA + Actor Model?
//!
//! - **Resource-Oriented**: every resource gets the same create / get / update / delete / list
//!   surface, with a predictable lifecycle.
//! - **Actor Model**: the collection is owned by exactly one task. Requests are processed
//!   sequentially, so read-modify-write updates can never interleave and no lock guards the store.
//!
//! ## Architecture Overview
//!
//! 1. **Entity Layer** ([`ActorEntity`]) - Your business rules: id allocation, construction, update merge.
//! 2. **Runtime Layer** ([`ResourceActor`]) - Message processing, ordering and the store itself.
//! 3. **Interface Layer** ([`ResourceClient`], [`ActorClient`]) - Type-safe async communication.
//!
//! ## Context Injection Pattern
//!
//! Dependencies are injected at **runtime** via [`ResourceActor::run`], not at construction time.
//! The context is handed to every hook and to [`ActorEntity::next_id`], which is how an entity
//! draws identifiers and timestamps from sources the caller controls (and tests can replace).
//!
//! ## Error Handling
//!
//! Hook failures travel as [`FrameworkError::EntityError`] and can be recovered as the entity's
//! own error type with [`FrameworkError::downcast_entity`]. Missing records are reported as
//! [`FrameworkError::NotFound`] by the runtime itself.
//!
//! ## Testing
//!
//! The [`mock`] module provides a [`MockClient`](mock::MockClient) that answers requests from
//! scripted expectations, for testing client-side logic without spawning an actor.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
