use axum::{Json, extract::State, http::StatusCode};
use serde::Serialize;
use serde_json::Value;

use crate::domain::types::Customer;
use crate::error::StorefrontError;
use crate::extract::ResourceId;
use crate::handlers::MessageResponse;
use crate::state::AppState;
use crate::usecase::customer::{
    CreateCustomerUseCase, DeleteCustomerUseCase, GetCustomerUseCase, UpdateCustomerUseCase,
};

#[derive(Serialize)]
pub struct CustomerResponse {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl From<Customer> for CustomerResponse {
    fn from(customer: Customer) -> Self {
        Self {
            id: customer.id,
            name: customer.name,
            email: customer.email,
            phone: customer.phone,
        }
    }
}

// ── GET /customer/{id} ───────────────────────────────────────────────────────

pub async fn get_customer(
    State(state): State<AppState>,
    ResourceId(id): ResourceId,
) -> Result<Json<CustomerResponse>, StorefrontError> {
    let usecase = GetCustomerUseCase {
        repo: state.customer_repo(),
    };
    let customer = usecase.execute(id).await?;
    Ok(Json(customer.into()))
}

// ── POST /customer ───────────────────────────────────────────────────────────

pub async fn add_customer(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<MessageResponse>), StorefrontError> {
    let usecase = CreateCustomerUseCase {
        repo: state.customer_repo(),
    };
    usecase.execute(&body).await?;
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("New customer added successfully")),
    ))
}

// ── PUT /customer/{id} ───────────────────────────────────────────────────────

pub async fn update_customer(
    State(state): State<AppState>,
    ResourceId(id): ResourceId,
    Json(body): Json<Value>,
) -> Result<Json<MessageResponse>, StorefrontError> {
    let usecase = UpdateCustomerUseCase {
        repo: state.customer_repo(),
    };
    usecase.execute(id, &body).await?;
    Ok(Json(MessageResponse::new(
        "Customer details updated successfully",
    )))
}

// ── DELETE /customer/{id} ────────────────────────────────────────────────────

pub async fn delete_customer(
    State(state): State<AppState>,
    ResourceId(id): ResourceId,
) -> Result<Json<MessageResponse>, StorefrontError> {
    let usecase = DeleteCustomerUseCase {
        repo: state.customer_repo(),
    };
    usecase.execute(id).await?;
    Ok(Json(MessageResponse::new("Customer removed successfully")))
}
