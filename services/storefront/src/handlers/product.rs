use axum::{Json, extract::State, http::StatusCode};
use serde::Serialize;
use serde_json::Value;

use crate::domain::types::Product;
use crate::error::StorefrontError;
use crate::extract::ResourceId;
use crate::handlers::MessageResponse;
use crate::state::AppState;
use crate::usecase::product::{
    CreateProductUseCase, DeleteProductUseCase, GetProductUseCase, ListProductsUseCase,
    UpdateProductUseCase,
};

#[derive(Serialize)]
pub struct ProductResponse {
    pub id: i32,
    pub name: String,
    pub price: f64,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            price: product.price,
        }
    }
}

// ── GET /product/{id} ────────────────────────────────────────────────────────

pub async fn get_product(
    State(state): State<AppState>,
    ResourceId(id): ResourceId,
) -> Result<Json<ProductResponse>, StorefrontError> {
    let usecase = GetProductUseCase {
        repo: state.product_repo(),
    };
    let product = usecase.execute(id).await?;
    Ok(Json(product.into()))
}

// ── GET /product ─────────────────────────────────────────────────────────────

pub async fn list_products(
    State(state): State<AppState>,
) -> Result<Json<Vec<ProductResponse>>, StorefrontError> {
    let usecase = ListProductsUseCase {
        repo: state.product_repo(),
    };
    let products = usecase.execute().await?;
    Ok(Json(products.into_iter().map(Into::into).collect()))
}

// ── POST /product ────────────────────────────────────────────────────────────

pub async fn add_product(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<MessageResponse>), StorefrontError> {
    let usecase = CreateProductUseCase {
        repo: state.product_repo(),
    };
    usecase.execute(&body).await?;
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("New product added successfully")),
    ))
}

// ── PUT /product/{id} ────────────────────────────────────────────────────────

pub async fn update_product(
    State(state): State<AppState>,
    ResourceId(id): ResourceId,
    Json(body): Json<Value>,
) -> Result<Json<MessageResponse>, StorefrontError> {
    let usecase = UpdateProductUseCase {
        repo: state.product_repo(),
    };
    usecase.execute(id, &body).await?;
    Ok(Json(MessageResponse::new(
        "Product details updated successfully",
    )))
}

// ── DELETE /product/{id} ─────────────────────────────────────────────────────

pub async fn delete_product(
    State(state): State<AppState>,
    ResourceId(id): ResourceId,
) -> Result<Json<MessageResponse>, StorefrontError> {
    let usecase = DeleteProductUseCase {
        repo: state.product_repo(),
    };
    usecase.execute(id).await?;
    Ok(Json(MessageResponse::new("Product removed successfully")))
}
