//! # Product Validator
//!
//! Pure gate applied to every write. [`validate`] turns a [`ProductDraft`] into trusted
//! [`ProductFields`], or reports the first rule it breaks. Rules are checked in a fixed order:
//! name, description, price, category, inStock.

use crate::model::{ProductDraft, ProductFields};
use serde_json::Value;
use thiserror::Error;

/// The first validation rule a draft failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Name is required and must be a string")]
    Name,
    #[error("Description is required and must be a string")]
    Description,
    #[error("Price is required and must be a non-negative number")]
    Price,
    #[error("Category is required and must be a string")]
    Category,
    #[error("inStock must be a boolean")]
    InStock,
}

/// Checks every rule against `draft`. No side effects.
pub fn validate(draft: &ProductDraft) -> Result<ProductFields, ValidationError> {
    let name = non_empty_text(&draft.name).ok_or(ValidationError::Name)?;
    let description = non_empty_text(&draft.description).ok_or(ValidationError::Description)?;
    let price = draft
        .price
        .as_ref()
        .and_then(Value::as_f64)
        .filter(|price| *price >= 0.0)
        .ok_or(ValidationError::Price)?;
    let category = non_empty_text(&draft.category).ok_or(ValidationError::Category)?;
    let in_stock = draft
        .in_stock
        .as_ref()
        .and_then(Value::as_bool)
        .ok_or(ValidationError::InStock)?;

    Ok(ProductFields {
        name,
        description,
        price,
        category,
        in_stock,
    })
}

fn non_empty_text(value: &Option<Value>) -> Option<String> {
    match value {
        Some(Value::String(text)) if !text.is_empty() => Some(text.clone()),
        _ => None,
    }
}
