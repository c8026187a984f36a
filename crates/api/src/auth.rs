//! Zugangskontrolle fuer geschuetzte Endpunkte
//!
//! [`AngemeldeterBenutzer`] ist ein Axum-Extractor. Steht er in der
//! Parameterliste eines Handlers vor Pfad und Body, wird das Session-Token
//! geprueft bevor irgendetwas anderes aus der Anfrage gelesen wird.

use async_trait::async_trait;
use axum::{extract::FromRequestParts, http::request::Parts};

use questgate_core::UserId;

use crate::error::ApiError;
use crate::rest::{middleware::session_token, ApiState};

/// Der zum vorgelegten Session-Token gehoerende Benutzer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AngemeldeterBenutzer(pub UserId);

#[async_trait]
impl FromRequestParts<ApiState> for AngemeldeterBenutzer {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &ApiState,
    ) -> Result<Self, Self::Rejection> {
        let token = session_token(&parts.headers);
        let user_id = state.auth.authentifizieren(token.as_deref()).await?;
        Ok(Self(user_id))
    }
}
