use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};
use serde::Deserialize;

use crate::api::extract::{ApiJson, ApiQuery};
use crate::api::{ApiResult, AppState};
use crate::domain::{ClientId, OrderCreate, OrderId, OrderState, OrderView};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/orders", get(list_for_client).post(create))
        .route("/api/orders/{id}", get(get_by_id).put(update_state).delete(cancel))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ClientQuery {
    client_id: Option<ClientId>,
}

#[derive(Debug, Deserialize)]
struct StateQuery {
    state: OrderState,
}

/// GET /api/orders?clientId= - no client matches no orders
async fn list_for_client(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<ClientQuery>,
) -> ApiResult<Json<Vec<OrderView>>> {
    match query.client_id {
        Some(client_id) => Ok(Json(state.orders.orders_for_client(client_id).await?)),
        None => Ok(Json(Vec::new())),
    }
}

/// GET /api/orders/{id}
async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<OrderId>,
) -> ApiResult<Json<Option<OrderView>>> {
    Ok(Json(state.orders.get_order(id).await?))
}

/// POST /api/orders - a `null` body is passed on as an absent descriptor
async fn create(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<Option<OrderCreate>>,
) -> ApiResult<Json<OrderId>> {
    Ok(Json(state.orders.create_order(input).await?))
}

/// PUT /api/orders/{id}?state=
async fn update_state(
    State(state): State<AppState>,
    Path(id): Path<OrderId>,
    ApiQuery(query): ApiQuery<StateQuery>,
) -> ApiResult<StatusCode> {
    state.orders.update_order_state(id, query.state).await?;
    Ok(StatusCode::OK)
}

/// DELETE /api/orders/{id} - cancels the order and restores its stock
async fn cancel(State(state): State<AppState>, Path(id): Path<OrderId>) -> ApiResult<StatusCode> {
    state.orders.cancel_order(id).await?;
    Ok(StatusCode::OK)
}
