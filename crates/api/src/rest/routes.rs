//! Route-Definitionen fuer die REST-API

use axum::{
    routing::{get, post},
    Router,
};

use crate::rest::{handlers, ApiState};

/// Erstellt den vollstaendigen Router mit gesetztem State
pub fn router(state: ApiState) -> Router {
    Router::new()
        // Anmeldung
        .route("/signup", post(handlers::auth::signup))
        .route("/signin", post(handlers::auth::signin))
        .route("/signout", post(handlers::auth::signout))
        // Quests (geschuetzt)
        .route("/quests", get(handlers::quests::list_quests))
        .route("/quest", post(handlers::quests::create_quest))
        .route(
            "/quest/:id",
            get(handlers::quests::get_quest)
                .put(handlers::quests::update_quest)
                .delete(handlers::quests::delete_quest),
        )
        // Betrieb
        .route("/health", get(handlers::health::health))
        .with_state(state)
}
