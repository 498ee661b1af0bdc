//! Route handlers. Each one parses its inputs, calls [`ProductClient`](crate::clients::ProductClient)
//! and serializes the result; failures convert into [`CatalogError`].

use crate::api::AppState;
use crate::error::CatalogError;
use crate::model::{Product, ProductDraft, ProductId};
use crate::query::{CatalogStats, ListParams, ProductPage, ProductQuery};
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::{StatusCode, Uri};
use axum::Json;
use serde_json::Value;

type ApiResult<T> = Result<T, CatalogError>;

/// Turns a request body into a candidate record. Anything but a JSON object is a bad request.
fn draft_from(body: Result<Json<Value>, JsonRejection>) -> ApiResult<ProductDraft> {
    let Json(value) = body.map_err(|rejection| CatalogError::BadRequest(rejection.body_text()))?;
    if !value.is_object() {
        return Err(CatalogError::BadRequest(
            "Request body must be a JSON object".into(),
        ));
    }
    serde_json::from_value(value).map_err(|e| CatalogError::BadRequest(e.to_string()))
}

/// A query string that cannot be read (e.g. a repeated key) is a bad request, never an
/// unfiltered listing.
pub async fn list_products(
    State(state): State<AppState>,
    params: Result<Query<ListParams>, QueryRejection>,
) -> ApiResult<Json<ProductPage>> {
    let Query(params) =
        params.map_err(|rejection| CatalogError::BadRequest(rejection.body_text()))?;
    let page = state
        .products
        .list_products(&ProductQuery::from(params))
        .await?;
    Ok(Json(page))
}

pub async fn product_stats(State(state): State<AppState>) -> ApiResult<Json<CatalogStats>> {
    Ok(Json(state.products.stats().await?))
}

pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Product>> {
    Ok(Json(state.products.get_product(ProductId(id)).await?))
}

pub async fn create_product(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Product>)> {
    let draft = draft_from(body)?;
    let product = state.products.create_product(draft).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> ApiResult<Json<Product>> {
    let draft = draft_from(body)?;
    Ok(Json(
        state.products.update_product(ProductId(id), draft).await?,
    ))
}

pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    state.products.delete_product(ProductId(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn route_not_found(uri: Uri) -> CatalogError {
    CatalogError::NotFound {
        what: "Route",
        id: uri.path().to_string(),
    }
}
