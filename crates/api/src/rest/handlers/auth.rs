//! REST-Handler fuer Registrierung, Anmeldung und Abmeldung

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header::SET_COOKIE, HeaderMap},
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::error::{ApiError, ApiResult};
use crate::rest::handlers::body_lesen;
use crate::rest::middleware::{session_cookie, session_cookie_loeschen, session_token};
use crate::rest::ApiState;

/// Body fuer `/signup` und `/signin`
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ZugangsDaten {
    pub username: String,
    pub password: String,
}

/// Antwort auf `/signup`; der Passwort-Hash verlaesst den Server nie
#[derive(Debug, Serialize)]
pub struct RegistrierungAntwort {
    pub id: i64,
    pub username: String,
}

/// POST /signup
pub async fn signup(
    State(state): State<ApiState>,
    body: Result<Json<ZugangsDaten>, JsonRejection>,
) -> ApiResult<Json<RegistrierungAntwort>> {
    let daten = body_lesen(body)?;
    let benutzer = state.auth.registrieren(&daten.username, &daten.password).await?;

    Ok(Json(RegistrierungAntwort {
        id: benutzer.id.inner(),
        username: benutzer.username,
    }))
}

/// POST /signin
pub async fn signin(
    State(state): State<ApiState>,
    body: Result<Json<ZugangsDaten>, JsonRejection>,
) -> ApiResult<Response> {
    let daten = body_lesen(body)?;
    let (benutzer, session) = state.auth.anmelden(&daten.username, &daten.password).await?;

    let cookie = session_cookie(
        &session.token,
        state.auth.session_gueltigkeit(),
        state.cookie_secure,
    )
    .map_err(|e| ApiError::intern(format!("Session-Cookie ungueltig: {e}")))?;

    let mut response = Json(json!({ "username": benutzer.username })).into_response();
    response.headers_mut().insert(SET_COOKIE, cookie);
    Ok(response)
}

/// POST /signout
///
/// Verlangt ein vorgelegtes Token, aber kein gueltiges.
pub async fn signout(State(state): State<ApiState>, headers: HeaderMap) -> ApiResult<Response> {
    let token = session_token(&headers);
    state.auth.abmelden(token.as_deref()).await?;
    tracing::info!("Benutzer abgemeldet");

    let mut response = Json(json!({ "message": "success" })).into_response();
    response
        .headers_mut()
        .insert(SET_COOKIE, session_cookie_loeschen(state.cookie_secure));
    Ok(response)
}
