use serde_json::Value;

use crate::domain::repository::ProductRepository;
use crate::domain::types::Product;
use crate::domain::validation;
use crate::error::StorefrontError;

// ── GetProduct ───────────────────────────────────────────────────────────────

pub struct GetProductUseCase<R: ProductRepository> {
    pub repo: R,
}

impl<R: ProductRepository> GetProductUseCase<R> {
    pub async fn execute(&self, id: i32) -> Result<Product, StorefrontError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(StorefrontError::ProductNotFound)
    }
}

// ── ListProducts ─────────────────────────────────────────────────────────────

pub struct ListProductsUseCase<R: ProductRepository> {
    pub repo: R,
}

impl<R: ProductRepository> ListProductsUseCase<R> {
    pub async fn execute(&self) -> Result<Vec<Product>, StorefrontError> {
        self.repo.list().await
    }
}

// ── CreateProduct ────────────────────────────────────────────────────────────

pub struct CreateProductUseCase<R: ProductRepository> {
    pub repo: R,
}

impl<R: ProductRepository> CreateProductUseCase<R> {
    pub async fn execute(&self, payload: &Value) -> Result<(), StorefrontError> {
        let product = validation::product(payload)?;
        self.repo.create(&product).await
    }
}

// ── UpdateProduct ────────────────────────────────────────────────────────────

pub struct UpdateProductUseCase<R: ProductRepository> {
    pub repo: R,
}

impl<R: ProductRepository> UpdateProductUseCase<R> {
    /// The body's `id` replaces the stored one, so the product may move to a new key.
    pub async fn execute(&self, id: i32, payload: &Value) -> Result<(), StorefrontError> {
        if self.repo.find_by_id(id).await?.is_none() {
            return Err(StorefrontError::ProductNotFound);
        }
        let product = validation::product(payload)?;
        if !self.repo.update(id, &product).await? {
            return Err(StorefrontError::ProductNotFound);
        }
        Ok(())
    }
}

// ── DeleteProduct ────────────────────────────────────────────────────────────

pub struct DeleteProductUseCase<R: ProductRepository> {
    pub repo: R,
}

impl<R: ProductRepository> DeleteProductUseCase<R> {
    pub async fn execute(&self, id: i32) -> Result<(), StorefrontError> {
        let deleted = self.repo.delete(id).await?;
        if !deleted {
            return Err(StorefrontError::ProductNotFound);
        }
        Ok(())
    }
}
