#![allow(async_fn_in_trait)]

use crate::domain::types::{Customer, CustomerAccount, CustomerInput, Order, Product};
use crate::error::StorefrontError;

/// Repository for customers.
pub trait CustomerRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> Result<Option<Customer>, StorefrontError>;

    /// Insert a customer under a store-assigned id.
    async fn create(&self, input: &CustomerInput) -> Result<(), StorefrontError>;

    /// Overwrite name, email and phone. Returns `true` if a row was updated.
    async fn update(&self, id: i32, input: &CustomerInput) -> Result<bool, StorefrontError>;

    /// Delete a customer. Returns `true` if a row was deleted.
    async fn delete(&self, id: i32) -> Result<bool, StorefrontError>;
}

/// Repository for customer accounts.
pub trait CustomerAccountRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<CustomerAccount>, StorefrontError>;

    async fn find_by_id(&self, id: i32) -> Result<Option<CustomerAccount>, StorefrontError>;

    async fn create(&self, account: &CustomerAccount) -> Result<(), StorefrontError>;

    /// Overwrite the username. Returns `true` if a row was updated.
    async fn update_username(&self, id: i32, username: &str) -> Result<bool, StorefrontError>;

    /// Delete an account. Returns `true` if a row was deleted.
    async fn delete(&self, id: i32) -> Result<bool, StorefrontError>;
}

/// Repository for products.
pub trait ProductRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Product>, StorefrontError>;

    async fn find_by_id(&self, id: i32) -> Result<Option<Product>, StorefrontError>;

    async fn create(&self, product: &Product) -> Result<(), StorefrontError>;

    /// Overwrite every column of the row keyed by `id`, including the id itself.
    /// Returns `true` if a row was updated.
    async fn update(&self, id: i32, product: &Product) -> Result<bool, StorefrontError>;

    /// Delete a product. Returns `true` if a row was deleted.
    async fn delete(&self, id: i32) -> Result<bool, StorefrontError>;
}

/// Repository for orders.
pub trait OrderRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> Result<Option<Order>, StorefrontError>;

    async fn create(&self, order: &Order) -> Result<(), StorefrontError>;
}
