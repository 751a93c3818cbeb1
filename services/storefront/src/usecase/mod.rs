pub mod customer;
pub mod customer_account;
pub mod order;
pub mod product;
