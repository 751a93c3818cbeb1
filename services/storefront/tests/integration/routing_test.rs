use axum::http::StatusCode;
use serde_json::{Value, json};

use crate::helpers::{test_server, widget};

#[tokio::test]
async fn should_answer_health_probes() {
    let server = test_server().await;
    server.get("/healthz").await.assert_status_ok();
    server.get("/readyz").await.assert_status_ok();
}

#[tokio::test]
async fn should_treat_non_numeric_ids_as_unknown_routes() {
    let server = test_server().await;
    server.post("/product").json(&widget()).await;

    for path in ["/product/abc", "/product/-1", "/customer/1.0", "/orders/x"] {
        let response = server.get(path).await;
        response.assert_status(StatusCode::NOT_FOUND);
        assert!(response.as_bytes().is_empty(), "body for {path}");
    }
}

#[tokio::test]
async fn should_reject_methods_without_route() {
    let server = test_server().await;
    server
        .get("/customer")
        .await
        .assert_status(StatusCode::METHOD_NOT_ALLOWED);
    server
        .delete("/orders/1")
        .await
        .assert_status(StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn should_report_non_object_payload() {
    let server = test_server().await;
    let response = server.post("/product").json(&json!([widget()])).await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>(),
        json!({"_schema": ["Invalid input type."]})
    );
}

#[tokio::test]
async fn should_reject_unknown_fields() {
    let server = test_server().await;
    let mut body = widget();
    body["colour"] = json!("blue");
    let response = server.post("/product").json(&body).await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>(),
        json!({"colour": ["Unknown field."]})
    );
}

#[tokio::test]
async fn should_echo_request_id() {
    let server = test_server().await;
    let response = server.get("/healthz").await;
    assert!(response.headers().contains_key("x-request-id"));
}
