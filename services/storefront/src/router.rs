use axum::{
    Router,
    routing::{get, post, put},
};
use tower_http::trace::TraceLayer;

use storefront_core::health::healthz;
use storefront_core::middleware::{request_id_layer, request_id_propagation_layer};

use crate::handlers::{
    customer::{add_customer, delete_customer, get_customer, update_customer},
    customer_account::{
        add_customer_account, delete_customer_account, list_customer_accounts,
        update_customer_account,
    },
    health::readyz,
    order::{place_order, retrieve_order, track_order},
    product::{add_product, delete_product, get_product, list_products, update_product},
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Customers
        .route("/customer", post(add_customer))
        .route(
            "/customer/{id}",
            get(get_customer).put(update_customer).delete(delete_customer),
        )
        // Customer accounts
        .route(
            "/customeraccount",
            get(list_customer_accounts).post(add_customer_account),
        )
        .route(
            "/customeraccount/{id}",
            put(update_customer_account).delete(delete_customer_account),
        )
        // Products
        .route("/product", get(list_products).post(add_product))
        .route(
            "/product/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
        // Orders
        .route("/orders", post(place_order))
        .route("/orders/{id}", get(retrieve_order))
        .route("/trackorders/{id}", get(track_order))
        .with_state(state)
        // Layers run bottom-up: the id is set before tracing sees the request.
        .layer(request_id_propagation_layer())
        .layer(TraceLayer::new_for_http())
        .layer(request_id_layer())
}
