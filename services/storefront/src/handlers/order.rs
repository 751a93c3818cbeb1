use axum::{Json, extract::State, http::StatusCode};
use serde::Serialize;
use serde_json::Value;

use crate::domain::types::Order;
use crate::error::StorefrontError;
use crate::extract::ResourceId;
use crate::handlers::MessageResponse;
use crate::state::AppState;
use crate::usecase::order::{GetOrderUseCase, PlaceOrderUseCase};

#[derive(Serialize)]
pub struct OrderResponse {
    pub id: i32,
    pub date: String,
    pub customer_id: i32,
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        Self {
            id: order.id,
            date: order.date,
            customer_id: order.customer_id,
        }
    }
}

// ── POST /orders ─────────────────────────────────────────────────────────────

pub async fn place_order(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<MessageResponse>), StorefrontError> {
    let usecase = PlaceOrderUseCase {
        repo: state.order_repo(),
    };
    usecase.execute(&body).await?;
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("New order added successfully")),
    ))
}

// ── GET /orders/{id} ─────────────────────────────────────────────────────────

pub async fn retrieve_order(
    State(state): State<AppState>,
    ResourceId(id): ResourceId,
) -> Result<Json<OrderResponse>, StorefrontError> {
    let usecase = GetOrderUseCase {
        repo: state.order_repo(),
    };
    let order = usecase.execute(id).await?;
    Ok(Json(order.into()))
}

// ── GET /trackorders/{id} ────────────────────────────────────────────────────

/// Tracking has no state of its own; it answers exactly like [`retrieve_order`].
pub async fn track_order(
    state: State<AppState>,
    id: ResourceId,
) -> Result<Json<OrderResponse>, StorefrontError> {
    retrieve_order(state, id).await
}
