use serde_json::Value;

use crate::domain::repository::CustomerAccountRepository;
use crate::domain::types::CustomerAccount;
use crate::domain::validation;
use crate::error::StorefrontError;

// ── ListCustomerAccounts ─────────────────────────────────────────────────────

pub struct ListCustomerAccountsUseCase<R: CustomerAccountRepository> {
    pub repo: R,
}

impl<R: CustomerAccountRepository> ListCustomerAccountsUseCase<R> {
    pub async fn execute(&self) -> Result<Vec<CustomerAccount>, StorefrontError> {
        self.repo.list().await
    }
}

// ── CreateCustomerAccount ────────────────────────────────────────────────────

pub struct CreateCustomerAccountUseCase<R: CustomerAccountRepository> {
    pub repo: R,
}

impl<R: CustomerAccountRepository> CreateCustomerAccountUseCase<R> {
    pub async fn execute(&self, payload: &Value) -> Result<(), StorefrontError> {
        let account = validation::new_customer_account(payload)?;
        self.repo.create(&account).await
    }
}

// ── UpdateCustomerAccount ────────────────────────────────────────────────────

pub struct UpdateCustomerAccountUseCase<R: CustomerAccountRepository> {
    pub repo: R,
}

impl<R: CustomerAccountRepository> UpdateCustomerAccountUseCase<R> {
    /// Validates username, password and customer_id but only persists the
    /// username; password and customer_id keep their stored values.
    pub async fn execute(&self, id: i32, payload: &Value) -> Result<(), StorefrontError> {
        if self.repo.find_by_id(id).await?.is_none() {
            return Err(StorefrontError::CustomerAccountNotFound);
        }
        let changes = validation::customer_account_changes(payload)?;
        if !self.repo.update_username(id, &changes.username).await? {
            return Err(StorefrontError::CustomerAccountNotFound);
        }
        Ok(())
    }
}

// ── DeleteCustomerAccount ────────────────────────────────────────────────────

pub struct DeleteCustomerAccountUseCase<R: CustomerAccountRepository> {
    pub repo: R,
}

impl<R: CustomerAccountRepository> DeleteCustomerAccountUseCase<R> {
    pub async fn execute(&self, id: i32) -> Result<(), StorefrontError> {
        let deleted = self.repo.delete(id).await?;
        if !deleted {
            return Err(StorefrontError::CustomerAccountNotFound);
        }
        Ok(())
    }
}
