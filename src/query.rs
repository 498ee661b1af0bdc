//! # Query Engine
//!
//! Read-side pipeline over a snapshot of the collection. [`query`] filters by category
//! (case-insensitive equality) and by name search (case-insensitive substring), counts the
//! matches, then cuts the `page`/`limit` window. [`stats`] aggregates the whole collection.
//!
//! Both are pure: they borrow the snapshot and never touch the store.

use crate::model::Product;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const DEFAULT_PAGE: usize = 1;
pub const DEFAULT_LIMIT: usize = 10;

/// Raw query-string values, exactly as the caller sent them.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListParams {
    pub category: Option<String>,
    pub search: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
}

/// Normalized list query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductQuery {
    pub category: Option<String>,
    pub search: Option<String>,
    pub page: usize,
    pub limit: usize,
}

impl Default for ProductQuery {
    fn default() -> Self {
        Self {
            category: None,
            search: None,
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl From<ListParams> for ProductQuery {
    /// Empty filters count as absent; `page`/`limit` that are not positive integers fall
    /// back to their defaults.
    fn from(params: ListParams) -> Self {
        Self {
            category: params.category.filter(|c| !c.is_empty()),
            search: params.search.filter(|s| !s.is_empty()),
            page: positive_or(params.page.as_deref(), DEFAULT_PAGE),
            limit: positive_or(params.limit.as_deref(), DEFAULT_LIMIT),
        }
    }
}

fn positive_or(raw: Option<&str>, default: usize) -> usize {
    raw.and_then(|text| text.trim().parse::<usize>().ok())
        .filter(|n| *n > 0)
        .unwrap_or(default)
}

/// One page of a filtered listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductPage {
    #[serde(rename = "products")]
    pub items: Vec<Product>,
    /// Matches before pagination.
    pub total: usize,
    pub page: usize,
    pub limit: usize,
}

/// Collection-wide counts.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogStats {
    pub total_products: usize,
    /// Grouped by the literal category string; `"Tools"` and `"tools"` are separate keys.
    pub categories: BTreeMap<String, usize>,
}

pub fn query(products: &[Product], params: &ProductQuery) -> ProductPage {
    let category = params.category.as_deref().map(str::to_lowercase);
    let search = params.search.as_deref().map(str::to_lowercase);

    let matches: Vec<&Product> = products
        .iter()
        .filter(|p| {
            category
                .as_deref()
                .map_or(true, |c| p.category.to_lowercase() == c)
        })
        .filter(|p| {
            search
                .as_deref()
                .map_or(true, |s| p.name.to_lowercase().contains(s))
        })
        .collect();

    let total = matches.len();
    let start = (params.page.max(1) - 1).saturating_mul(params.limit);
    let items = matches
        .into_iter()
        .skip(start)
        .take(params.limit)
        .cloned()
        .collect();

    ProductPage {
        items,
        total,
        page: params.page,
        limit: params.limit,
    }
}

pub fn stats(products: &[Product]) -> CatalogStats {
    let mut categories = BTreeMap::new();
    for product in products {
        *categories.entry(product.category.clone()).or_insert(0) += 1;
    }
    CatalogStats {
        total_products: products.len(),
        categories,
    }
}
