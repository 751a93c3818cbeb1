use axum::{extract::State, http::StatusCode};

use storefront_core::health::readiness;

use crate::state::AppState;

// ── GET /readyz ──────────────────────────────────────────────────────────────

/// Ready when the store answers a ping.
pub async fn readyz(State(state): State<AppState>) -> StatusCode {
    let probe = state.db.ping().await;
    if let Err(ref e) = probe {
        tracing::warn!(error = %e, "database ping failed");
    }
    readiness(&probe)
}
