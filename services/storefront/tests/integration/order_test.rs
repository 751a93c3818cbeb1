use axum::http::StatusCode;
use serde_json::{Value, json};

use crate::helpers::{message, order, test_server};

#[tokio::test]
async fn should_place_and_retrieve_order() {
    let server = test_server().await;

    let response = server.post("/orders").json(&order()).await;
    response.assert_status(StatusCode::CREATED);
    assert_eq!(
        response.json::<Value>(),
        message("New order added successfully")
    );

    server.get("/orders/100").await.assert_json(&order());
}

#[tokio::test]
async fn should_track_order_exactly_like_retrieve() {
    let server = test_server().await;
    server.post("/orders").json(&order()).await;

    let retrieved = server.get("/orders/100").await;
    let tracked = server.get("/trackorders/100").await;
    retrieved.assert_status_ok();
    tracked.assert_status_ok();
    assert_eq!(retrieved.json::<Value>(), tracked.json::<Value>());
}

#[tokio::test]
async fn should_return_not_found_for_missing_order_on_both_routes() {
    let server = test_server().await;
    for path in ["/orders/1", "/trackorders/1"] {
        let response = server.get(path).await;
        response.assert_status(StatusCode::NOT_FOUND);
        assert_eq!(response.json::<Value>()["kind"], "ORDER_NOT_FOUND");
    }
}

#[tokio::test]
async fn should_accept_free_text_date() {
    let server = test_server().await;
    server
        .post("/orders")
        .json(&json!({"id": 1, "date": "sometime soon", "customer_id": 999}))
        .await
        .assert_status(StatusCode::CREATED);

    let stored = server.get("/orders/1").await.json::<Value>();
    assert_eq!(stored["date"], "sometime soon");
}

#[tokio::test]
async fn should_report_every_invalid_order_field() {
    let server = test_server().await;
    let response = server
        .post("/orders")
        .json(&json!({"id": true, "date": null}))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>(),
        json!({
            "customer_id": ["Missing data for required field."],
            "date": ["Field may not be null."],
            "id": ["Not a valid integer."],
        })
    );
}

#[tokio::test]
async fn should_truncate_fractional_order_id() {
    let server = test_server().await;
    server
        .post("/orders")
        .json(&json!({"id": 1.5, "date": "2024-01-01", "customer_id": 1}))
        .await
        .assert_status(StatusCode::CREATED);

    let response = server.get("/orders/1").await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["id"], 1);
}
