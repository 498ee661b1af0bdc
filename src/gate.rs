//! # Access Gate
//!
//! Shared-secret check that runs before every other operation. A missing, empty or
//! mismatched credential fails with [`CatalogError::Unauthorized`].

use crate::error::CatalogError;
use std::fmt;
use std::sync::Arc;
use subtle::ConstantTimeEq;

/// Header the credential is read from.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Compares `supplied` against `secret`, exactly and in constant time for equal lengths.
pub fn check(supplied: Option<&str>, secret: &str) -> Result<(), CatalogError> {
    match supplied {
        Some(key) if !key.is_empty() && key.len() == secret.len() => {
            if bool::from(key.as_bytes().ct_eq(secret.as_bytes())) {
                Ok(())
            } else {
                Err(CatalogError::Unauthorized)
            }
        }
        _ => Err(CatalogError::Unauthorized),
    }
}

/// The configured secret, cheap to clone into middleware.
#[derive(Clone)]
pub struct AccessGate {
    secret: Arc<str>,
}

impl AccessGate {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: Arc::from(secret.into()),
        }
    }

    pub fn check(&self, supplied: Option<&str>) -> Result<(), CatalogError> {
        check(supplied, &self.secret)
    }
}

impl fmt::Debug for AccessGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessGate").field("secret", &"<redacted>").finish()
    }
}
