use axum::{Json, extract::State, http::StatusCode};
use serde::Serialize;
use serde_json::Value;

use crate::domain::types::CustomerAccount;
use crate::error::StorefrontError;
use crate::extract::ResourceId;
use crate::handlers::MessageResponse;
use crate::state::AppState;
use crate::usecase::customer_account::{
    CreateCustomerAccountUseCase, DeleteCustomerAccountUseCase, ListCustomerAccountsUseCase,
    UpdateCustomerAccountUseCase,
};

#[derive(Serialize)]
pub struct CustomerAccountResponse {
    pub id: i32,
    pub username: String,
    pub password: String,
    pub customer_id: i32,
}

impl From<CustomerAccount> for CustomerAccountResponse {
    fn from(account: CustomerAccount) -> Self {
        Self {
            id: account.id,
            username: account.username,
            password: account.password,
            customer_id: account.customer_id,
        }
    }
}

// ── GET /customeraccount ─────────────────────────────────────────────────────

pub async fn list_customer_accounts(
    State(state): State<AppState>,
) -> Result<Json<Vec<CustomerAccountResponse>>, StorefrontError> {
    let usecase = ListCustomerAccountsUseCase {
        repo: state.customer_account_repo(),
    };
    let accounts = usecase.execute().await?;
    Ok(Json(accounts.into_iter().map(Into::into).collect()))
}

// ── POST /customeraccount ────────────────────────────────────────────────────

pub async fn add_customer_account(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<MessageResponse>), StorefrontError> {
    let usecase = CreateCustomerAccountUseCase {
        repo: state.customer_account_repo(),
    };
    usecase.execute(&body).await?;
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new(
            "New customer account added successfully",
        )),
    ))
}

// ── PUT /customeraccount/{id} ────────────────────────────────────────────────

pub async fn update_customer_account(
    State(state): State<AppState>,
    ResourceId(id): ResourceId,
    Json(body): Json<Value>,
) -> Result<Json<MessageResponse>, StorefrontError> {
    let usecase = UpdateCustomerAccountUseCase {
        repo: state.customer_account_repo(),
    };
    usecase.execute(id, &body).await?;
    Ok(Json(MessageResponse::new(
        "Customer account details updated successfully",
    )))
}

// ── DELETE /customeraccount/{id} ─────────────────────────────────────────────

pub async fn delete_customer_account(
    State(state): State<AppState>,
    ResourceId(id): ResourceId,
) -> Result<Json<MessageResponse>, StorefrontError> {
    let usecase = DeleteCustomerAccountUseCase {
        repo: state.customer_account_repo(),
    };
    usecase.execute(id).await?;
    Ok(Json(MessageResponse::new(
        "Customer account removed successfully",
    )))
}
