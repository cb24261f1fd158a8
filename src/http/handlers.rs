//! Route handlers for `/api/products`.
//!
//! Write handlers validate the body before the actor is contacted, so a rejected request never
//! reaches the store.

use super::error::{ApiError, ApiResult};
use super::normalize::NormalizedJson;
use super::response::Timestamped;
use super::AppState;
use crate::model::{Product, ProductId};
use crate::validation;
use actor_framework::ActorClient;
use axum::extract::{Path, State};
use tracing::debug;

/// `GET /api/products`
pub async fn list_products(State(state): State<AppState>) -> ApiResult<Timestamped<Vec<Product>>> {
    let products = state.products.list().await.map_err(ApiError::for_read)?;
    Ok(Timestamped::ok(products))
}

/// `GET /api/products/{id}`
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Timestamped<Product>> {
    let id = parse_id(&id).ok_or(ApiError::ProductNotFound)?;
    state
        .products
        .get(id)
        .await
        .map_err(ApiError::for_read)?
        .map(Timestamped::ok)
        .ok_or(ApiError::ProductNotFound)
}

/// `POST /api/products`
pub async fn create_product(
    State(state): State<AppState>,
    NormalizedJson(body): NormalizedJson,
) -> ApiResult<Timestamped<Product>> {
    let draft = validation::parse_draft(&body).map_err(ApiError::Validation)?;
    let product = state
        .products
        .create_product(draft)
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))?;
    Ok(Timestamped::created(product))
}

/// `PUT /api/products/{id}`
pub async fn replace_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
    NormalizedJson(body): NormalizedJson,
) -> ApiResult<Timestamped<Product>> {
    let draft = validation::parse_draft(&body).map_err(ApiError::Validation)?;
    let id = parse_id(&id).ok_or(ApiError::UpdateTargetNotFound)?;
    let product = state
        .products
        .replace_product(id, draft)
        .await
        .map_err(ApiError::for_update)?;
    Ok(Timestamped::ok(product))
}

/// `PATCH /api/products/{id}`
///
/// Answers 201 on success.
pub async fn patch_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
    NormalizedJson(body): NormalizedJson,
) -> ApiResult<Timestamped<Product>> {
    let patch =
        validation::parse_patch(&body, state.patch_validation).map_err(ApiError::Validation)?;
    let id = parse_id(&id).ok_or(ApiError::UpdateTargetNotFound)?;
    let product = state
        .products
        .patch_product(id, patch)
        .await
        .map_err(ApiError::for_update)?;
    Ok(Timestamped::created(product))
}

/// Fallback for every unmatched method or path.
pub async fn route_not_found() -> ApiError {
    ApiError::RouteNotFound
}

fn parse_id(raw: &str) -> Option<ProductId> {
    match raw.parse::<u64>() {
        Ok(id) => Some(ProductId(id)),
        Err(e) => {
            debug!(id = raw, error = %e, "Unparseable product id");
            None
        }
    }
}
