//! Identifier and timestamp sources injected into the Product actor.
//!
//! Both are capabilities the catalog consumes rather than implements: production wiring uses
//! [`UuidGenerator`] and [`SystemClock`], tests swap in deterministic ones.

use crate::model::ProductId;
use chrono::{SecondsFormat, Utc};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Produces identifiers that are never repeated.
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> ProductId;
}

/// Produces ISO-8601 timestamps.
pub trait Clock: Send + Sync {
    fn now(&self) -> String;
}

/// Random UUID v4 identifiers.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&self) -> ProductId {
        ProductId(uuid::Uuid::new_v4().to_string())
    }
}

/// Counter-based identifiers (`product_1`, `product_2`, …), for reproducible runs.
#[derive(Debug)]
pub struct SequentialIdGenerator {
    next: AtomicU64,
}

impl Default for SequentialIdGenerator {
    fn default() -> Self {
        Self {
            next: AtomicU64::new(1),
        }
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&self) -> ProductId {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        ProductId(format!("product_{n}"))
    }
}

/// Wall-clock UTC time with millisecond precision, e.g. `2024-05-01T12:00:00.000Z`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> String {
        Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}

/// The Product actor's `Context`.
#[derive(Clone)]
pub struct ProductContext {
    pub ids: Arc<dyn IdGenerator>,
    pub clock: Arc<dyn Clock>,
}

impl ProductContext {
    pub fn new(ids: Arc<dyn IdGenerator>, clock: Arc<dyn Clock>) -> Self {
        Self { ids, clock }
    }
}

impl Default for ProductContext {
    fn default() -> Self {
        Self::new(Arc::new(UuidGenerator), Arc::new(SystemClock))
    }
}
