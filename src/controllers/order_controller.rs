use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};

use crate::{
    envelope::Envelope,
    error::StoreError,
    models::Order,
    services::order_service::OrderRequest,
    AppState,
};

// GET /api/orders
pub async fn list_orders(State(state): State<AppState>) -> Json<Envelope<Vec<Order>>> {
    Json(Envelope::list(state.store.list_orders()))
}

// POST /api/orders
pub async fn create_order(
    State(state): State<AppState>,
    payload: Result<Json<OrderRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Envelope<Order>>), StoreError> {
    let Json(req) = payload.map_err(|e| {
        tracing::debug!(error = %e, "unreadable order body");
        StoreError::Validation(format!("Invalid request body: {}", e.body_text()))
    })?;

    let order = state.store.place_order(&req)?;

    Ok((
        StatusCode::CREATED,
        Json(Envelope::data(order).with_message("Order created successfully")),
    ))
}
