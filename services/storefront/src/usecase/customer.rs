use serde_json::Value;

use crate::domain::repository::CustomerRepository;
use crate::domain::types::Customer;
use crate::domain::validation;
use crate::error::StorefrontError;

// ── GetCustomer ──────────────────────────────────────────────────────────────

pub struct GetCustomerUseCase<R: CustomerRepository> {
    pub repo: R,
}

impl<R: CustomerRepository> GetCustomerUseCase<R> {
    pub async fn execute(&self, id: i32) -> Result<Customer, StorefrontError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(StorefrontError::CustomerNotFound)
    }
}

// ── CreateCustomer ───────────────────────────────────────────────────────────

pub struct CreateCustomerUseCase<R: CustomerRepository> {
    pub repo: R,
}

impl<R: CustomerRepository> CreateCustomerUseCase<R> {
    pub async fn execute(&self, payload: &Value) -> Result<(), StorefrontError> {
        let input = validation::customer(payload)?;
        self.repo.create(&input).await
    }
}

// ── UpdateCustomer ───────────────────────────────────────────────────────────

pub struct UpdateCustomerUseCase<R: CustomerRepository> {
    pub repo: R,
}

impl<R: CustomerRepository> UpdateCustomerUseCase<R> {
    /// The row must exist before the payload is looked at.
    pub async fn execute(&self, id: i32, payload: &Value) -> Result<(), StorefrontError> {
        if self.repo.find_by_id(id).await?.is_none() {
            return Err(StorefrontError::CustomerNotFound);
        }
        let input = validation::customer(payload)?;
        if !self.repo.update(id, &input).await? {
            return Err(StorefrontError::CustomerNotFound);
        }
        Ok(())
    }
}

// ── DeleteCustomer ───────────────────────────────────────────────────────────

pub struct DeleteCustomerUseCase<R: CustomerRepository> {
    pub repo: R,
}

impl<R: CustomerRepository> DeleteCustomerUseCase<R> {
    pub async fn execute(&self, id: i32) -> Result<(), StorefrontError> {
        let deleted = self.repo.delete(id).await?;
        if !deleted {
            return Err(StorefrontError::CustomerNotFound);
        }
        Ok(())
    }
}
