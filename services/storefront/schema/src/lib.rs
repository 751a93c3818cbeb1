//! sea-orm entities for the storefront tables.
//!
//! Relations between tables are weak: `customer_id` columns are plain integers
//! with no foreign key, and deleting a customer leaves its accounts and orders.

pub mod customer_accounts;
pub mod customers;
pub mod orders;
pub mod products;
