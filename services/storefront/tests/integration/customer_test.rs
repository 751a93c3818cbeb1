use axum::http::StatusCode;
use serde_json::{Value, json};

use crate::helpers::{ada, message, test_server};

#[tokio::test]
async fn should_read_back_created_customer() {
    let server = test_server().await;

    let response = server.post("/customer").json(&ada()).await;
    response.assert_status(StatusCode::CREATED);
    assert_eq!(
        response.json::<Value>(),
        message("New customer added successfully")
    );

    let response = server.get("/customer/1").await;
    response.assert_status_ok();
    assert_eq!(
        response.json::<Value>(),
        json!({
            "id": 1,
            "name": "Ada Lovelace",
            "email": "ada@example.com",
            "phone": "555-0100",
        })
    );
}

#[tokio::test]
async fn should_assign_sequential_ids_when_none_supplied() {
    let server = test_server().await;
    server.post("/customer").json(&ada()).await;
    server
        .post("/customer")
        .json(&json!({"name": "Grace Hopper", "email": "grace@example.com", "phone": "555-0199"}))
        .await;

    let response = server.get("/customer/2").await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["name"], "Grace Hopper");
}

#[tokio::test]
async fn should_ignore_supplied_customer_id() {
    let server = test_server().await;
    let mut body = ada();
    body["id"] = json!(77);
    server
        .post("/customer")
        .json(&body)
        .await
        .assert_status(StatusCode::CREATED);

    server
        .get("/customer/77")
        .await
        .assert_status(StatusCode::NOT_FOUND);
    let response = server.get("/customer/1").await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["id"], 1);
}

#[tokio::test]
async fn should_keep_generating_ids_after_a_body_id() {
    let server = test_server().await;
    let mut body = ada();
    body["id"] = json!(1);
    server
        .post("/customer")
        .json(&body)
        .await
        .assert_status(StatusCode::CREATED);
    server
        .post("/customer")
        .json(&json!({"name": "Grace Hopper", "email": "grace@example.com", "phone": "555-0199"}))
        .await
        .assert_status(StatusCode::CREATED);

    assert_eq!(server.get("/customer/1").await.json::<Value>()["name"], "Ada Lovelace");
    assert_eq!(server.get("/customer/2").await.json::<Value>()["name"], "Grace Hopper");
}

#[tokio::test]
async fn should_reject_customer_without_email_and_create_nothing() {
    let server = test_server().await;

    let response = server
        .post("/customer")
        .json(&json!({"name": "Ada Lovelace", "phone": "555-0100"}))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>(),
        json!({"email": ["Missing data for required field."]})
    );

    server
        .get("/customer/1")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn should_return_json_not_found_for_missing_customer() {
    let server = test_server().await;
    let response = server.get("/customer/404").await;
    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(response.json::<Value>()["kind"], "CUSTOMER_NOT_FOUND");
}

#[tokio::test]
async fn should_overwrite_all_customer_fields_on_put() {
    let server = test_server().await;
    server.post("/customer").json(&ada()).await;

    let response = server
        .put("/customer/1")
        .json(&json!({"name": "Ada King", "email": "king@example.com", "phone": "555-0111"}))
        .await;
    response.assert_status_ok();
    assert_eq!(
        response.json::<Value>(),
        message("Customer details updated successfully")
    );

    let customer = server.get("/customer/1").await.json::<Value>();
    assert_eq!(
        customer,
        json!({
            "id": 1,
            "name": "Ada King",
            "email": "king@example.com",
            "phone": "555-0111",
        })
    );
}

#[tokio::test]
async fn should_leave_customer_untouched_on_invalid_put() {
    let server = test_server().await;
    server.post("/customer").json(&ada()).await;

    server
        .put("/customer/1")
        .json(&json!({"name": "Ada King"}))
        .await
        .assert_status(StatusCode::BAD_REQUEST);

    let customer = server.get("/customer/1").await.json::<Value>();
    assert_eq!(customer["name"], "Ada Lovelace");
}

#[tokio::test]
async fn should_prefer_not_found_over_validation_on_put() {
    let server = test_server().await;
    server
        .put("/customer/9")
        .json(&json!({}))
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn should_delete_customer() {
    let server = test_server().await;
    server.post("/customer").json(&ada()).await;

    let response = server.delete("/customer/1").await;
    response.assert_status_ok();
    assert_eq!(
        response.json::<Value>(),
        message("Customer removed successfully")
    );

    server
        .get("/customer/1")
        .await
        .assert_status(StatusCode::NOT_FOUND);
    server
        .delete("/customer/1")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}
