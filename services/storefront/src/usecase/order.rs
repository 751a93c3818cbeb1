use serde_json::Value;

use crate::domain::repository::OrderRepository;
use crate::domain::types::Order;
use crate::domain::validation;
use crate::error::StorefrontError;

// ── GetOrder ─────────────────────────────────────────────────────────────────

/// Serves both order retrieval and order tracking.
pub struct GetOrderUseCase<R: OrderRepository> {
    pub repo: R,
}

impl<R: OrderRepository> GetOrderUseCase<R> {
    pub async fn execute(&self, id: i32) -> Result<Order, StorefrontError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(StorefrontError::OrderNotFound)
    }
}

// ── PlaceOrder ───────────────────────────────────────────────────────────────

pub struct PlaceOrderUseCase<R: OrderRepository> {
    pub repo: R,
}

impl<R: OrderRepository> PlaceOrderUseCase<R> {
    pub async fn execute(&self, payload: &Value) -> Result<(), StorefrontError> {
        let order = validation::order(payload)?;
        self.repo.create(&order).await
    }
}
