//! REST-Handler fuer den Health-Check

use axum::{extract::State, http::StatusCode, Json};

use questgate_observability::HealthResponse;

use crate::rest::ApiState;

/// GET /health
pub async fn health(State(state): State<ApiState>) -> (StatusCode, Json<HealthResponse>) {
    let db_connected = state.db.ping().await;
    if !db_connected {
        tracing::error!("Health-Check: Datenbank nicht erreichbar");
    }
    state.health.antwort(db_connected)
}
