use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};
use validator::Validate;

use crate::api::extract::ApiJson;
use crate::api::{ApiResult, AppState};
use crate::domain::{Client, ClientCreate, ClientId};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/clients", get(list).post(create))
        .route("/api/clients/{id}", get(get_by_id).put(update).delete(delete))
}

/// GET /api/clients
async fn list(State(state): State<AppState>) -> ApiResult<Json<Vec<Client>>> {
    Ok(Json(state.clients.get_all_clients().await?))
}

/// GET /api/clients/{id}
async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<ClientId>,
) -> ApiResult<Json<Option<Client>>> {
    Ok(Json(state.clients.get_client(id).await?))
}

/// POST /api/clients
async fn create(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<ClientCreate>,
) -> ApiResult<Json<ClientId>> {
    input.validate()?;
    Ok(Json(state.clients.create_client(input).await?))
}

/// PUT /api/clients/{id}
async fn update(
    State(state): State<AppState>,
    Path(id): Path<ClientId>,
    ApiJson(input): ApiJson<ClientCreate>,
) -> ApiResult<StatusCode> {
    input.validate()?;
    state.clients.update_client(id, input).await?;
    Ok(StatusCode::OK)
}

/// DELETE /api/clients/{id}
async fn delete(State(state): State<AppState>, Path(id): Path<ClientId>) -> ApiResult<StatusCode> {
    state.clients.delete_client(id).await?;
    Ok(StatusCode::OK)
}
