//! # Product Model
//!
//! Represents a product in the catalog.
//!
//! # Actor Framework
//! [`Product`] implements the [`ActorEntity`](actor_framework::ActorEntity) trait (see
//! [`crate::product_actor::entity`]), so the collection is owned by a
//! [`ResourceActor`](actor_framework::ResourceActor).
//!
//! A record moves through three shapes:
//! - [`ProductDraft`]: untrusted input, every field optional and untyped.
//! - [`ProductFields`]: the output of [`validate`](crate::validator::validate), all rules hold.
//! - [`Product`]: a stored record, with the `id` and `createdAt` assigned at creation.

use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;
use std::fmt::Display;

/// Type-safe identifier for Products. Opaque; compared exactly.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ProductId(pub String);

impl From<String> for ProductId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    /// Whole prices go on the wire as integers (`1`, not `1.0`).
    #[serde(serialize_with = "serialize_price")]
    pub price: f64,
    pub category: String,
    pub in_stock: bool,
    pub created_at: String,
}

/// Largest integer an f64 holds exactly.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_991.0;

fn serialize_price<S: Serializer>(price: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if price.fract() == 0.0 && price.abs() <= MAX_EXACT_INTEGER {
        serializer.serialize_i64(*price as i64)
    } else {
        serializer.serialize_f64(*price)
    }
}

impl Product {
    /// Creates a new Product from validated fields.
    ///
    /// # Arguments
    /// * `id` - Unique identifier (assigned by the actor system)
    /// * `fields` - Validated attributes
    /// * `created_at` - ISO-8601 creation timestamp
    pub fn new(id: ProductId, fields: ProductFields, created_at: impl Into<String>) -> Self {
        Self {
            id,
            name: fields.name,
            description: fields.description,
            price: fields.price,
            category: fields.category,
            in_stock: fields.in_stock,
            created_at: created_at.into(),
        }
    }

    /// The record's current attributes as a draft, the base an update is merged over.
    pub fn to_draft(&self) -> ProductDraft {
        ProductDraft {
            name: Some(Value::from(self.name.as_str())),
            description: Some(Value::from(self.description.as_str())),
            price: Some(Value::from(self.price)),
            category: Some(Value::from(self.category.as_str())),
            in_stock: Some(Value::Bool(self.in_stock)),
        }
    }

    /// Overwrites the mutable attributes. `id` and `created_at` are never touched.
    pub fn apply(&mut self, fields: ProductFields) {
        self.name = fields.name;
        self.description = fields.description;
        self.price = fields.price;
        self.category = fields.category;
        self.in_stock = fields.in_stock;
    }
}

/// Attributes that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductFields {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub in_stock: bool,
}

/// Caller-supplied product data, before validation.
///
/// Fields keep their raw JSON value so that wrong-typed input (`"price": "9.99"`) reaches the
/// validator instead of failing deserialization. Absent and `null` fields are both `None`.
/// Unknown keys, including `id` and `createdAt`, are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub in_stock: Option<Value>,
}

impl ProductDraft {
    /// Lays the fields supplied here over `base`; fields missing here keep `base`'s value.
    pub fn merged_over(self, base: ProductDraft) -> ProductDraft {
        ProductDraft {
            name: self.name.or(base.name),
            description: self.description.or(base.description),
            price: self.price.or(base.price),
            category: self.category.or(base.category),
            in_stock: self.in_stock.or(base.in_stock),
        }
    }
}

impl From<ProductFields> for ProductDraft {
    fn from(fields: ProductFields) -> Self {
        ProductDraft {
            name: Some(Value::from(fields.name)),
            description: Some(Value::from(fields.description)),
            price: Some(Value::from(fields.price)),
            category: Some(Value::from(fields.category)),
            in_stock: Some(Value::Bool(fields.in_stock)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn widget() -> Product {
        Product::new(
            ProductId::from("p-1"),
            ProductFields {
                name: "Widget".into(),
                description: "A widget".into(),
                price: 9.99,
                category: "Tools".into(),
                in_stock: true,
            },
            "2024-01-01T00:00:00.000Z",
        )
    }

    #[test]
    fn test_product_serializes_with_wire_names() {
        let value = serde_json::to_value(widget()).unwrap();
        assert_eq!(
            value,
            json!({
                "id": "p-1",
                "name": "Widget",
                "description": "A widget",
                "price": 9.99,
                "category": "Tools",
                "inStock": true,
                "createdAt": "2024-01-01T00:00:00.000Z"
            })
        );
    }

    #[test]
    fn test_whole_price_serializes_as_integer() {
        let mut product = widget();
        product.price = 1.0;
        let text = serde_json::to_string(&product).unwrap();
        assert!(text.contains(r#""price":1,"#), "{text}");

        let value = serde_json::to_value(&product).unwrap();
        assert_eq!(value["price"], json!(1));
        assert!(value["price"].is_i64());

        product.price = 0.5;
        assert_eq!(serde_json::to_value(&product).unwrap()["price"], json!(0.5));
    }

    #[test]
    fn test_draft_keeps_wrong_types_and_ignores_unknown_keys() {
        let draft: ProductDraft = serde_json::from_value(json!({
            "price": "9.99",
            "inStock": null,
            "id": "forged",
            "color": "red"
        }))
        .unwrap();
        assert_eq!(draft.price, Some(json!("9.99")));
        assert_eq!(draft.in_stock, None);
        assert_eq!(draft.name, None);
    }

    #[test]
    fn test_merged_over_prefers_supplied_fields() {
        let partial = ProductDraft {
            price: Some(json!(12.5)),
            ..ProductDraft::default()
        };
        let merged = partial.merged_over(widget().to_draft());
        assert_eq!(merged.price, Some(json!(12.5)));
        assert_eq!(merged.name, Some(json!("Widget")));
        assert_eq!(merged.in_stock, Some(json!(true)));
    }

    #[test]
    fn test_apply_keeps_identity() {
        let mut product = widget();
        product.apply(ProductFields {
            name: "Gadget".into(),
            description: "A gadget".into(),
            price: 1.0,
            category: "Toys".into(),
            in_stock: false,
        });
        assert_eq!(product.id, ProductId::from("p-1"));
        assert_eq!(product.created_at, "2024-01-01T00:00:00.000Z");
        assert_eq!(product.name, "Gadget");
    }
}
