use axum::http::StatusCode;
use serde_json::{Value, json};

use crate::helpers::{account, ada, message, test_server};

#[tokio::test]
async fn should_list_created_accounts() {
    let server = test_server().await;

    server
        .get("/customeraccount")
        .await
        .assert_json(&json!([]));

    let response = server.post("/customeraccount").json(&account()).await;
    response.assert_status(StatusCode::CREATED);
    assert_eq!(
        response.json::<Value>(),
        message("New customer account added successfully")
    );

    let response = server.get("/customeraccount").await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>(), json!([account()]));
}

#[tokio::test]
async fn should_require_account_id_on_create() {
    let server = test_server().await;
    let mut body = account();
    body.as_object_mut().unwrap().remove("id");

    let response = server.post("/customeraccount").json(&body).await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>(),
        json!({"id": ["Missing data for required field."]})
    );
}

#[tokio::test]
async fn should_not_cascade_from_customer_delete() {
    let server = test_server().await;
    server.post("/customer").json(&ada()).await;
    server.post("/customeraccount").json(&account()).await;

    server.delete("/customer/1").await.assert_status_ok();

    let accounts = server.get("/customeraccount").await.json::<Value>();
    assert_eq!(accounts.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn should_persist_only_username_on_put() {
    let server = test_server().await;
    server.post("/customeraccount").json(&account()).await;

    let response = server
        .put("/customeraccount/1")
        .json(&json!({"username": "countess", "password": "changed", "customer_id": 5}))
        .await;
    response.assert_status_ok();
    assert_eq!(
        response.json::<Value>(),
        message("Customer account details updated successfully")
    );

    let accounts = server.get("/customeraccount").await.json::<Value>();
    assert_eq!(
        accounts,
        json!([{
            "id": 1,
            "username": "countess",
            "password": "hunter2",
            "customer_id": 1,
        }])
    );
}

#[tokio::test]
async fn should_validate_account_put() {
    let server = test_server().await;
    server.post("/customeraccount").json(&account()).await;

    let response = server
        .put("/customeraccount/1")
        .json(&json!({"username": "countess", "password": 1234, "customer_id": 5}))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>(),
        json!({"password": ["Not a valid string."]})
    );
}

#[tokio::test]
async fn should_return_not_found_for_missing_account() {
    let server = test_server().await;
    server
        .put("/customeraccount/3")
        .json(&json!({"username": "x", "password": "y", "customer_id": 1}))
        .await
        .assert_status(StatusCode::NOT_FOUND);
    server
        .delete("/customeraccount/3")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn should_delete_account() {
    let server = test_server().await;
    server.post("/customeraccount").json(&account()).await;

    let response = server.delete("/customeraccount/1").await;
    response.assert_status_ok();
    assert_eq!(
        response.json::<Value>(),
        message("Customer account removed successfully")
    );
    server
        .get("/customeraccount")
        .await
        .assert_json(&json!([]));
}
