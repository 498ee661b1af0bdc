//! # Error Taxonomy
//!
//! [`CatalogError`] is the single failure type every request path ends in. Its
//! [`IntoResponse`] impl is the boundary responder: it picks the status code and renders
//! `{"error": {"message", "type"}}`.

use crate::product_actor::ProductError;
use crate::validator::ValidationError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;
use tracing::{error, warn};

/// Errors visible to callers of the catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Credential missing or mismatched.
    #[error("Invalid or missing Api key")]
    Unauthorized,

    /// A candidate record failed a field rule.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The request itself could not be read (e.g. a body that is not a JSON object).
    #[error("{0}")]
    BadRequest(String),

    /// The referenced product (or route) does not exist.
    #[error("{what} not found")]
    NotFound { what: &'static str, id: String },

    /// Anything unanticipated. The detail is logged, never sent.
    #[error("Internal failure: {0}")]
    Internal(String),
}

/// Failure kinds, each with one status code and one wire `type` name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Authentication,
    Validation,
    NotFound,
    Internal,
}

impl ErrorKind {
    pub fn status(self) -> StatusCode {
        match self {
            ErrorKind::Authentication => StatusCode::UNAUTHORIZED,
            ErrorKind::Validation => StatusCode::BAD_REQUEST,
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn type_name(self) -> &'static str {
        match self {
            ErrorKind::Authentication => "AuthError",
            ErrorKind::Validation => "ValidationError",
            ErrorKind::NotFound => "NotFoundError",
            ErrorKind::Internal => "InternalError",
        }
    }
}

impl CatalogError {
    pub fn product_not_found(id: impl Into<String>) -> Self {
        CatalogError::NotFound {
            what: "Product",
            id: id.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            CatalogError::Unauthorized => ErrorKind::Authentication,
            CatalogError::Validation(_) | CatalogError::BadRequest(_) => ErrorKind::Validation,
            CatalogError::NotFound { .. } => ErrorKind::NotFound,
            CatalogError::Internal(_) => ErrorKind::Internal,
        }
    }

    pub fn status(&self) -> StatusCode {
        self.kind().status()
    }

    /// The structured body sent to the caller.
    pub fn body(&self) -> ErrorBody {
        let message = match self {
            CatalogError::Internal(_) => "Internal Server Error".to_string(),
            other => other.to_string(),
        };
        ErrorBody {
            error: ErrorDetail {
                message,
                kind: self.kind().type_name(),
            },
        }
    }
}

impl From<ProductError> for CatalogError {
    fn from(e: ProductError) -> Self {
        match e {
            ProductError::NotFound(id) => CatalogError::product_not_found(id.0),
            ProductError::Invalid(reason) => CatalogError::Validation(reason),
            ProductError::ActorCommunicationError(detail) => CatalogError::Internal(detail),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorDetail {
    pub message: String,
    #[serde(rename = "type")]
    pub kind: &'static str,
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            CatalogError::Internal(detail) => error!(%detail, "Request failed"),
            CatalogError::NotFound { id, .. } => warn!(status = status.as_u16(), %id, "{}", self),
            other => warn!(status = status.as_u16(), "{}", other),
        }
        (status, Json(self.body())).into_response()
    }
}
