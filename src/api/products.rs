use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};
use validator::Validate;

use crate::api::extract::ApiJson;
use crate::api::{ApiResult, AppState};
use crate::domain::{Product, ProductCreate, ProductId};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/products", get(list).post(create))
        .route("/api/products/{id}", get(get_by_id).put(update).delete(delete))
}

/// GET /api/products
async fn list(State(state): State<AppState>) -> ApiResult<Json<Vec<Product>>> {
    Ok(Json(state.products.get_products().await?))
}

/// GET /api/products/{id}
async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
) -> ApiResult<Json<Option<Product>>> {
    Ok(Json(state.products.get_product(id).await?))
}

/// POST /api/products
async fn create(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<ProductCreate>,
) -> ApiResult<Json<ProductId>> {
    input.validate()?;
    Ok(Json(state.products.create_product(input).await?))
}

/// PUT /api/products/{id} - a `null` body is passed on as an absent descriptor
async fn update(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
    ApiJson(input): ApiJson<Option<ProductCreate>>,
) -> ApiResult<StatusCode> {
    if let Some(product) = &input {
        product.validate()?;
    }
    state.products.update_product(id, input).await?;
    Ok(StatusCode::OK)
}

/// DELETE /api/products/{id}
async fn delete(State(state): State<AppState>, Path(id): Path<ProductId>) -> ApiResult<StatusCode> {
    state.products.delete_product(id).await?;
    Ok(StatusCode::OK)
}
