use serde::Serialize;

pub mod customer;
pub mod customer_account;
pub mod health;
pub mod order;
pub mod product;

/// Fixed confirmation returned by write endpoints.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

impl MessageResponse {
    pub const fn new(message: &'static str) -> Self {
        Self { message }
    }
}
