//! HTTP-level tests for the catalog router: gate, status codes and response shapes.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use catalog_service::api::{build_router, AppState};
use catalog_service::clients::ProductClient;
use catalog_service::gate::AccessGate;
use catalog_service::lifecycle::CatalogSystem;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

const KEY: &str = "test-key";

// ── Test app builder ───────────────────────────────────────────

fn build_test_app() -> (Router, CatalogSystem) {
    let system = CatalogSystem::new();
    let state = AppState::new(system.product_client.clone(), AccessGate::new(KEY));
    (build_router(state), system)
}

fn request(method: &str, uri: &str, body: Option<Value>) -> Request<Body> {
    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("x-api-key", KEY);
    match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

fn widget() -> Value {
    json!({
        "name": "Widget",
        "description": "A widget",
        "price": 9.99,
        "category": "Tools",
        "inStock": true
    })
}

// ── Helper to read response body ───────────────────────────────

async fn body_json(resp: axum::response::Response) -> Value {
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap_or_else(
        |_| json!({ "raw": String::from_utf8_lossy(&bytes).to_string() }),
    )
}

async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    (status, body_json(resp).await)
}

async fn create_widget(app: &Router) -> Value {
    let (status, body) = send(app, request("POST", "/api/products", Some(widget()))).await;
    assert_eq!(status, StatusCode::CREATED);
    body
}

// ── Tests ───────────────────────────────────────────────────────

#[tokio::test]
async fn test_missing_key_is_401_and_touches_nothing() {
    let (app, system) = build_test_app();

    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/products")
                .header("content-type", "application/json")
                .body(Body::from(widget().to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        body_json(resp).await,
        json!({ "error": { "message": "Invalid or missing Api key", "type": "AuthError" } })
    );

    assert_eq!(system.product_client.stats().await.unwrap().total_products, 0);
}

#[tokio::test]
async fn test_wrong_key_is_401_even_for_unknown_routes() {
    let (app, _system) = build_test_app();

    for uri in ["/api/products", "/api/products/stats", "/nowhere"] {
        let resp = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri(uri)
                    .header("x-api-key", "wrong-key")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED, "{uri}");
    }
}

#[tokio::test]
async fn test_create_returns_201_with_stored_record() {
    let (app, _system) = build_test_app();

    let body = create_widget(&app).await;
    assert_eq!(body["price"], json!(9.99));
    assert_eq!(body["name"], json!("Widget"));
    assert_eq!(body["inStock"], json!(true));
    assert!(body["id"].as_str().is_some_and(|id| !id.is_empty()));
    assert!(body["createdAt"].as_str().is_some());
}

#[tokio::test]
async fn test_invalid_create_is_400_and_adds_nothing() {
    let (app, _system) = build_test_app();

    let mut bad = widget();
    bad["price"] = json!(-1);
    let (status, body) = send(&app, request("POST", "/api/products", Some(bad))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({
            "error": {
                "message": "Price is required and must be a non-negative number",
                "type": "ValidationError"
            }
        })
    );

    let (_, page) = send(&app, request("GET", "/api/products", None)).await;
    assert_eq!(page["total"], json!(0));
}

#[tokio::test]
async fn test_malformed_bodies_are_400() {
    let (app, _system) = build_test_app();

    let not_json = Request::builder()
        .method("POST")
        .uri("/api/products")
        .header("x-api-key", KEY)
        .header("content-type", "application/json")
        .body(Body::from("{ not json"))
        .unwrap();
    let (status, body) = send(&app, not_json).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["type"], json!("ValidationError"));

    let (status, _) = send(&app, request("POST", "/api/products", Some(json!([1, 2])))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_list_filters_and_paginates() {
    let (app, _system) = build_test_app();
    create_widget(&app).await;

    let (status, body) = send(&app, request("GET", "/api/products?category=tools", None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], json!(1));
    assert_eq!(body["products"][0]["category"], json!("Tools"));

    let (_, body) = send(&app, request("GET", "/api/products?page=2&limit=1", None)).await;
    assert_eq!(body["products"], json!([]));
    assert_eq!(body["total"], json!(1));
    assert_eq!((body["page"].clone(), body["limit"].clone()), (json!(2), json!(1)));

    let (status, body) = send(&app, request("GET", "/api/products?page=abc&limit=0", None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!((body["page"].clone(), body["limit"].clone()), (json!(1), json!(10)));
}

#[tokio::test]
async fn test_stats_route_is_reachable() {
    let (app, _system) = build_test_app();
    create_widget(&app).await;

    let (status, body) = send(&app, request("GET", "/api/products/stats", None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "totalProducts": 1, "categories": { "Tools": 1 } }));
}

#[tokio::test]
async fn test_get_update_delete_by_id() {
    let (app, _system) = build_test_app();
    let created = create_widget(&app).await;
    let uri = format!("/api/products/{}", created["id"].as_str().unwrap());

    let (status, body) = send(&app, request("GET", &uri, None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, created);

    let (status, body) = send(
        &app,
        request("PUT", &uri, Some(json!({ "price": 12.5, "id": "other" }))),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["price"], json!(12.5));
    assert_eq!(body["id"], created["id"]);
    assert_eq!(body["createdAt"], created["createdAt"]);

    let (status, body) = send(&app, request("PUT", &uri, Some(json!({ "inStock": "no" })))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["message"], json!("inStock must be a boolean"));

    let resp = app.clone().oneshot(request("DELETE", &uri, None)).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let (status, body) = send(&app, request("GET", &uri, None)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        body,
        json!({ "error": { "message": "Product not found", "type": "NotFoundError" } })
    );
}

#[tokio::test]
async fn test_unknown_ids_and_routes_are_404() {
    let (app, _system) = build_test_app();

    for (method, uri) in [
        ("GET", "/api/products/missing"),
        ("DELETE", "/api/products/missing"),
        ("GET", "/api/nowhere"),
    ] {
        let (status, body) = send(&app, request(method, uri, None)).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{method} {uri}");
        assert_eq!(body["error"]["type"], json!("NotFoundError"));
    }

    let (status, _) = send(
        &app,
        request("PUT", "/api/products/missing", Some(json!({ "price": 1 }))),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_actor_gone_is_500_without_detail() {
    let (actor, client) = catalog_service::product_actor::new();
    drop(actor);
    let app = build_router(AppState::new(
        ProductClient::new(client),
        AccessGate::new(KEY),
    ));

    let (status, body) = send(&app, request("GET", "/api/products", None)).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body,
        json!({ "error": { "message": "Internal Server Error", "type": "InternalError" } })
    );
}

#[tokio::test]
async fn test_unsupported_methods_get_a_structured_404() {
    let (app, _system) = build_test_app();

    for (method, uri) in [
        ("PATCH", "/api/products/abc"),
        ("POST", "/api/products/stats"),
        ("DELETE", "/api/products"),
    ] {
        let (status, body) = send(&app, request(method, uri, Some(json!({})))).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{method} {uri}");
        assert_eq!(
            body,
            json!({ "error": { "message": "Route not found", "type": "NotFoundError" } })
        );
    }

    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .method("PATCH")
                .uri("/api/products/abc")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_repeated_query_keys_are_400_not_unfiltered() {
    let (app, _system) = build_test_app();
    create_widget(&app).await;
    let mut hose = widget();
    hose["category"] = json!("Garden");
    send(&app, request("POST", "/api/products", Some(hose))).await;

    for uri in [
        "/api/products?category=garden&category=garden",
        "/api/products?category=garden&limit=1&limit=1",
    ] {
        let (status, body) = send(&app, request("GET", uri, None)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(body["error"]["type"], json!("ValidationError"));
    }

    let (status, body) = send(&app, request("GET", "/api/products?category=garden", None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], json!(1));
}

#[tokio::test]
async fn test_whole_prices_round_trip_as_integers() {
    let (app, _system) = build_test_app();
    let mut body = widget();
    body["price"] = json!(1);

    let (status, created) = send(&app, request("POST", "/api/products", Some(body))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(created["price"].is_i64(), "{created}");
    assert_eq!(created["price"], json!(1));
}
