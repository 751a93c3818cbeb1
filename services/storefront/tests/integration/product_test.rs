use axum::http::StatusCode;
use serde_json::{Value, json};

use crate::helpers::{message, test_server, widget};

#[tokio::test]
async fn should_walk_product_lifecycle() {
    let server = test_server().await;

    let response = server.post("/product").json(&widget()).await;
    response.assert_status(StatusCode::CREATED);
    assert_eq!(
        response.json::<Value>(),
        message("New product added successfully")
    );

    server.get("/product/1").await.assert_json(&widget());

    let response = server
        .put("/product/1")
        .json(&json!({"id": 1, "name": "Widget", "price": 12.50}))
        .await;
    response.assert_status_ok();
    assert_eq!(
        response.json::<Value>(),
        message("Product details updated successfully")
    );

    let product = server.get("/product/1").await.json::<Value>();
    assert_eq!(product["price"], 12.5);

    let response = server.delete("/product/1").await;
    response.assert_status_ok();
    assert_eq!(
        response.json::<Value>(),
        message("Product removed successfully")
    );

    server
        .get("/product/1")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn should_list_products_in_id_order() {
    let server = test_server().await;
    server
        .post("/product")
        .json(&json!({"id": 2, "name": "Gadget", "price": 3}))
        .await;
    server.post("/product").json(&widget()).await;

    server.get("/product").await.assert_json(&json!([
        {"id": 1, "name": "Widget", "price": 9.99},
        {"id": 2, "name": "Gadget", "price": 3.0},
    ]));
}

#[tokio::test]
async fn should_move_product_to_new_id_on_put() {
    let server = test_server().await;
    server.post("/product").json(&widget()).await;

    server
        .put("/product/1")
        .json(&json!({"id": 5, "name": "Widget", "price": 9.99}))
        .await
        .assert_status_ok();

    server
        .get("/product/1")
        .await
        .assert_status(StatusCode::NOT_FOUND);
    server.get("/product/5").await.assert_status_ok();
}

#[tokio::test]
async fn should_reject_product_with_bad_price() {
    let server = test_server().await;

    let response = server
        .post("/product")
        .json(&json!({"id": 1, "name": "Widget", "price": "cheap"}))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>(),
        json!({"price": ["Not a valid number."]})
    );

    server.get("/product").await.assert_json(&json!([]));
}

#[tokio::test]
async fn should_fail_with_server_error_on_duplicate_id() {
    let server = test_server().await;
    server
        .post("/product")
        .json(&widget())
        .await
        .assert_status(StatusCode::CREATED);

    let response = server.post("/product").json(&widget()).await;
    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.json::<Value>()["kind"], "INTERNAL");
}

#[tokio::test]
async fn should_return_not_found_for_missing_product() {
    let server = test_server().await;
    server
        .put("/product/1")
        .json(&widget())
        .await
        .assert_status(StatusCode::NOT_FOUND);
    server
        .delete("/product/1")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}
