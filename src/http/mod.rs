//! # HTTP Surface
//!
//! The axum [`Router`] exposing the product collection under `/api/products`.
//!
//! Request flow: CORS and tracing layers → [`NormalizedJson`] extractor (lowercasing) →
//! handler (validation) → [`ProductClient`] → product actor → store. Successful bodies leave
//! through [`Timestamped`]; failures through [`ApiError`].

pub mod error;
pub mod handlers;
pub mod normalize;
pub mod response;

pub use error::{ApiError, ApiResult, ErrorResponse};
pub use normalize::{NormalizationPolicy, NormalizedJson, ALL_FIELDS};
pub use response::Timestamped;

use crate::clients::ProductClient;
use crate::validation::ValidationMode;
use axum::http::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderValue, Method};
use axum::routing::get;
use axum::Router;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub products: ProductClient,
    pub normalization: Arc<NormalizationPolicy>,
    pub patch_validation: ValidationMode,
}

impl AppState {
    pub fn new(
        products: ProductClient,
        normalization: NormalizationPolicy,
        patch_validation: ValidationMode,
    ) -> Self {
        Self {
            products,
            normalization: Arc::new(normalization),
            patch_validation,
        }
    }
}

/// Builds the service router.
///
/// Unsupported methods on a known path answer the same 404 as unknown paths.
pub fn router(state: AppState, cors_origin: HeaderValue) -> Router {
    Router::new()
        .route(
            "/api/products",
            get(handlers::list_products)
                .post(handlers::create_product)
                .fallback(handlers::route_not_found),
        )
        .route(
            "/api/products/{id}",
            get(handlers::get_product)
                .put(handlers::replace_product)
                .patch(handlers::patch_product)
                .fallback(handlers::route_not_found),
        )
        .fallback(handlers::route_not_found)
        .layer(cors_layer(cors_origin))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// CORS for the single allowed browser origin.
pub fn cors_layer(origin: HeaderValue) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([CONTENT_TYPE, ACCEPT, AUTHORIZATION])
        .allow_credentials(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Product;
    use actor_framework::{MemoryStore, RecordStore};
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use axum::response::Response;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    const ORIGIN: &str = "http://localhost:8080";

    fn app_with(store: Arc<MemoryStore<Product>>, patch_validation: ValidationMode) -> Router {
        let (actor, client) = crate::product_actor::new(store, 8);
        tokio::spawn(actor.run());
        let state = AppState::new(
            client,
            NormalizationPolicy::lowercase(["name", "category", "dateAdded", "supplier"]),
            patch_validation,
        );
        router(state, HeaderValue::from_static(ORIGIN))
    }

    fn app() -> (Router, Arc<MemoryStore<Product>>) {
        let store = Arc::new(MemoryStore::new());
        (app_with(store.clone(), ValidationMode::Full), store)
    }

    fn widget() -> Value {
        json!({
            "name": "Widget",
            "category": "Tools",
            "quantity": 5,
            "unitPrice": 9.99,
            "dateAdded": "2024-01-15",
            "supplier": "ACME"
        })
    }

    fn json_request(method: &str, uri: &str, body: &Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn empty_request(method: &str, uri: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_list_empty_collection() {
        let (app, _) = app();

        let response = app.oneshot(empty_request("GET", "/api/products")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!([]));
    }

    #[tokio::test]
    async fn test_create_normalizes_and_stamps() {
        let (app, store) = app();

        let response = app
            .oneshot(json_request("POST", "/api/products", &widget()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        let body = body_json(response).await;
        assert_eq!(body["id"], 1);
        assert_eq!(body["name"], "widget");
        assert_eq!(body["category"], "tools");
        assert_eq!(body["supplier"], "acme");
        assert_eq!(body["unitPrice"], 9.99);
        assert!(body["timestamp"].is_string());

        let stored = store.load().await.unwrap();
        assert_eq!(stored.len(), 1);
        assert!(!stored[0].extra.contains_key("timestamp"));
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_body_without_writing() {
        let (app, store) = app();
        let mut body = widget();
        body["quantity"] = json!(0);

        let response = app
            .oneshot(json_request("POST", "/api/products", &body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["errors"][0]["path"], "quantity");
        assert_eq!(body["errors"][0]["msg"], "Liczba całkowita wymagana");
        assert!(body.get("timestamp").is_none());
        assert!(store.load().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_get_missing_product() {
        let (app, _) = app();

        let response = app
            .oneshot(empty_request("GET", "/api/products/42"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_json(response).await,
            json!({"message": "Product Not Found", "statusCode": 404})
        );
    }

    #[tokio::test]
    async fn test_get_non_numeric_id_is_not_found() {
        let (app, _) = app();

        let response = app
            .oneshot(empty_request("GET", "/api/products/abc"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_replace_missing_product() {
        let (app, store) = app();

        let response = app
            .oneshot(json_request("PUT", "/api/products/3", &widget()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_json(response).await,
            json!({"error": "Product Not Found"})
        );
        assert!(store.load().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_replace_validates_before_lookup() {
        let (app, _) = app();

        let response = app
            .oneshot(json_request("PUT", "/api/products/3", &json!({})))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["errors"].as_array().unwrap().len(), 6);
    }

    #[tokio::test]
    async fn test_patch_present_mode_accepts_partial_body() {
        let store = Arc::new(MemoryStore::new());
        let app = app_with(store.clone(), ValidationMode::Present);

        let created = app
            .clone()
            .oneshot(json_request("POST", "/api/products", &widget()))
            .await
            .unwrap();
        assert_eq!(created.status(), StatusCode::CREATED);

        let response = app
            .oneshot(json_request("PATCH", "/api/products/1", &json!({"quantity": 10})))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        let body = body_json(response).await;
        assert_eq!(body["quantity"], 10);
        assert_eq!(body["name"], "widget");
    }

    #[tokio::test]
    async fn test_patch_full_mode_rejects_partial_body() {
        let (app, _) = app();

        let response = app
            .oneshot(json_request("PATCH", "/api/products/1", &json!({"quantity": 10})))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_unknown_route_and_method() {
        let (app, _) = app();
        let expected = json!({"message": "Route not found", "statusCode": 404});

        let unknown = app
            .clone()
            .oneshot(empty_request("GET", "/api/orders"))
            .await
            .unwrap();
        assert_eq!(unknown.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(unknown).await, expected);

        let delete = app
            .oneshot(empty_request("DELETE", "/api/products/1"))
            .await
            .unwrap();
        assert_eq!(delete.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(delete).await, expected);
    }

    #[tokio::test]
    async fn test_malformed_json_is_bad_request() {
        let (app, _) = app();
        let request = Request::builder()
            .method("POST")
            .uri("/api/products")
            .header("content-type", "application/json")
            .body(Body::from("{\"name\": "))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["statusCode"], 400);
        assert!(body["message"].is_string());
    }

    #[tokio::test]
    async fn test_non_json_body_is_treated_as_empty() {
        let (app, _) = app();
        let request = Request::builder()
            .method("POST")
            .uri("/api/products")
            .header("content-type", "text/plain")
            .body(Body::from(widget().to_string()))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["errors"].as_array().unwrap().len(), 6);
    }

    #[tokio::test]
    async fn test_store_failure_is_internal_error() {
        let store = Arc::new(MemoryStore::new());
        store.fail_writes(true);
        let app = app_with(store, ValidationMode::Full);

        let response = app
            .oneshot(json_request("POST", "/api/products", &widget()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body["statusCode"], 500);
        assert!(body.get("timestamp").is_none());
    }

    #[tokio::test]
    async fn test_exhausted_ids_are_internal_error_and_actor_survives() {
        let mut draft = crate::validation::parse_draft(&widget()).unwrap();
        draft.name = "last".to_string();
        let last = Product::new(crate::model::ProductId(u64::MAX), draft);
        let store = Arc::new(MemoryStore::with_records(vec![last]));
        let app = app_with(store.clone(), ValidationMode::Full);

        let response = app
            .clone()
            .oneshot(json_request("POST", "/api/products", &widget()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_json(response).await["statusCode"], 500);

        let listed = app.oneshot(empty_request("GET", "/api/products")).await.unwrap();
        assert_eq!(listed.status(), StatusCode::OK);
        let body = body_json(listed).await;
        assert_eq!(body.as_array().unwrap().len(), 1);
        assert_eq!(body[0]["id"], json!(u64::MAX));
        assert_eq!(store.load().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_update_with_trailing_garbage_in_id_is_not_found() {
        let store = Arc::new(MemoryStore::new());
        let app = app_with(store.clone(), ValidationMode::Present);

        let created = app
            .clone()
            .oneshot(json_request("POST", "/api/products", &widget()))
            .await
            .unwrap();
        assert_eq!(created.status(), StatusCode::CREATED);

        for method in ["PUT", "PATCH"] {
            let response = app
                .clone()
                .oneshot(json_request(method, "/api/products/1abc", &widget()))
                .await
                .unwrap();

            assert_eq!(response.status(), StatusCode::NOT_FOUND, "{method}");
            assert_eq!(
                body_json(response).await,
                json!({"error": "Product Not Found"}),
                "{method}"
            );
        }

        let stored = store.load().await.unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].name, "widget");
    }

    #[tokio::test]
    async fn test_cors_preflight() {
        let (app, _) = app();
        let request = Request::builder()
            .method("OPTIONS")
            .uri("/api/products")
            .header("origin", ORIGIN)
            .header("access-control-request-method", "POST")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();

        assert!(response.status().is_success());
        let headers = response.headers();
        assert_eq!(headers["access-control-allow-origin"], ORIGIN);
        assert_eq!(headers["access-control-allow-credentials"], "true");
    }
}
