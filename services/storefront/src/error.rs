use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use storefront_core::validation::FieldErrors;

/// Storefront service error variants.
#[derive(Debug, thiserror::Error)]
pub enum StorefrontError {
    #[error("customer not found")]
    CustomerNotFound,
    #[error("customer account not found")]
    CustomerAccountNotFound,
    #[error("product not found")]
    ProductNotFound,
    #[error("order not found")]
    OrderNotFound,
    #[error("{0}")]
    Validation(FieldErrors),
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl StorefrontError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::CustomerNotFound => "CUSTOMER_NOT_FOUND",
            Self::CustomerAccountNotFound => "CUSTOMER_ACCOUNT_NOT_FOUND",
            Self::ProductNotFound => "PRODUCT_NOT_FOUND",
            Self::OrderNotFound => "ORDER_NOT_FOUND",
            Self::Validation(_) => "VALIDATION",
            Self::Internal(_) => "INTERNAL",
        }
    }
}

impl From<FieldErrors> for StorefrontError {
    fn from(errors: FieldErrors) -> Self {
        Self::Validation(errors)
    }
}

impl IntoResponse for StorefrontError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::CustomerNotFound
            | Self::CustomerAccountNotFound
            | Self::ProductNotFound
            | Self::OrderNotFound => StatusCode::NOT_FOUND,
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        match self {
            // Validation failures answer with the bare field → messages mapping.
            Self::Validation(errors) => (status, axum::Json(errors)).into_response(),
            other => {
                if let Self::Internal(ref e) = other {
                    tracing::error!(error = %e, kind = "INTERNAL", "internal error");
                }
                let body = serde_json::json!({
                    "kind": other.kind(),
                    "message": other.to_string(),
                });
                (status, axum::Json(body)).into_response()
            }
        }
    }
}
