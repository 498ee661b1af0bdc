//! Router construction for the catalog server.

use crate::api::auth::require_api_key;
use crate::api::{handlers, AppState};
use axum::middleware;
use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

/// Build the full axum router with all routes and middleware.
///
/// The gate wraps every route and the fallbacks, so an unknown path without a key is a 401,
/// not a 404. A method no route accepts is answered like an unknown path.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/products",
            get(handlers::list_products)
                .post(handlers::create_product)
                .fallback(handlers::route_not_found),
        )
        // Static segment, matched before `/:id`.
        .route(
            "/api/products/stats",
            get(handlers::product_stats).fallback(handlers::route_not_found),
        )
        .route(
            "/api/products/:id",
            get(handlers::get_product)
                .put(handlers::update_product)
                .delete(handlers::delete_product)
                .fallback(handlers::route_not_found),
        )
        .fallback(handlers::route_not_found)
        .layer(middleware::from_fn_with_state(
            state.gate.clone(),
            require_api_key,
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
