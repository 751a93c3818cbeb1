//! Per-resource payload validators.
//!
//! Each function declares the resource's fields and their types; every
//! offending field is reported in one pass.

use serde_json::Value;

use storefront_core::validation::{FieldErrors, Payload};

use crate::domain::types::{CustomerAccount, CustomerAccountChanges, CustomerInput, Order, Product};

/// An `id` in the body is type-checked but never stored.
pub fn customer(body: &Value) -> Result<CustomerInput, FieldErrors> {
    let mut payload = Payload::parse(body)?;
    let _ = payload.optional_int("id");
    let name = payload.required_string("name");
    let email = payload.required_string("email");
    let phone = payload.required_string("phone");
    payload.finish(move || {
        Some(CustomerInput {
            name: name?,
            email: email?,
            phone: phone?,
        })
    })
}

pub fn new_customer_account(body: &Value) -> Result<CustomerAccount, FieldErrors> {
    let mut payload = Payload::parse(body)?;
    let id = payload.required_int("id");
    let username = payload.required_string("username");
    let password = payload.required_string("password");
    let customer_id = payload.required_int("customer_id");
    payload.finish(move || {
        Some(CustomerAccount {
            id: id?,
            username: username?,
            password: password?,
            customer_id: customer_id?,
        })
    })
}

/// An `id` in the body is accepted but the path id always wins.
pub fn customer_account_changes(body: &Value) -> Result<CustomerAccountChanges, FieldErrors> {
    let mut payload = Payload::parse(body)?;
    let _ = payload.optional_int("id");
    let username = payload.required_string("username");
    let password = payload.required_string("password");
    let customer_id = payload.required_int("customer_id");
    payload.finish(move || {
        Some(CustomerAccountChanges {
            username: username?,
            password: password?,
            customer_id: customer_id?,
        })
    })
}

pub fn product(body: &Value) -> Result<Product, FieldErrors> {
    let mut payload = Payload::parse(body)?;
    let id = payload.required_int("id");
    let name = payload.required_string("name");
    let price = payload.required_float("price");
    payload.finish(move || {
        Some(Product {
            id: id?,
            name: name?,
            price: price?,
        })
    })
}

pub fn order(body: &Value) -> Result<Order, FieldErrors> {
    let mut payload = Payload::parse(body)?;
    let id = payload.required_int("id");
    let date = payload.required_string("date");
    let customer_id = payload.required_int("customer_id");
    payload.finish(move || {
        Some(Order {
            id: id?,
            date: date?,
            customer_id: customer_id?,
        })
    })
}
