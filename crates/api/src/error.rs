//! Fehlertypen fuer die Questgate-API

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use questgate_auth::AuthError;
use questgate_db::DbError;

use crate::rest::middleware::fehler_antwort;

/// Alle Fehler, die ein Handler an den Client meldet
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    UngueltigeEingabe(String),

    #[error("Token invalid, missing or expired")]
    NichtAngemeldet,

    #[error("Wrong credentials")]
    UngueltigeAnmeldedaten,

    #[error("Username already taken")]
    BenutzernameVergeben,

    #[error("Quest not found")]
    QuestNichtGefunden,

    #[error("Datenbankfehler: {0}")]
    Datenbank(DbError),

    #[error("Interner Fehler: {0}")]
    Intern(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    pub fn eingabe(msg: impl Into<String>) -> Self {
        Self::UngueltigeEingabe(msg.into())
    }

    pub fn intern(msg: impl Into<String>) -> Self {
        Self::Intern(msg.into())
    }

    /// HTTP-Statuscode fuer REST-Fehler
    pub fn http_status(&self) -> StatusCode {
        match self {
            Self::UngueltigeEingabe(_) => StatusCode::BAD_REQUEST,
            Self::NichtAngemeldet | Self::UngueltigeAnmeldedaten => StatusCode::UNAUTHORIZED,
            Self::BenutzernameVergeben => StatusCode::CONFLICT,
            Self::QuestNichtGefunden => StatusCode::NOT_FOUND,
            Self::Datenbank(_) | Self::Intern(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Nachricht fuer den Client; Details von Serverfehlern bleiben im Log
    fn client_nachricht(&self) -> String {
        match self {
            Self::Datenbank(_) | Self::Intern(_) => "Internal server error".to_string(),
            andere => andere.to_string(),
        }
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        match e {
            // Quests sind die einzigen per ID adressierten Ressourcen
            DbError::NichtGefunden(_) => Self::QuestNichtGefunden,
            andere => Self::Datenbank(andere),
        }
    }
}

impl From<AuthError> for ApiError {
    fn from(e: AuthError) -> Self {
        match e {
            AuthError::UngueltigeEingabe(msg) => Self::UngueltigeEingabe(msg),
            AuthError::UngueltigeAnmeldedaten => Self::UngueltigeAnmeldedaten,
            AuthError::NichtAngemeldet => Self::NichtAngemeldet,
            AuthError::BenutzernameVergeben(_) => Self::BenutzernameVergeben,
            AuthError::Datenbank(db) => Self::from(db),
            AuthError::PasswortHashing(msg) => Self::Intern(format!("Passwort-Hashing: {msg}")),
            AuthError::Intern(msg) => Self::Intern(msg),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.http_status();
        if status.is_server_error() {
            tracing::error!(fehler = %self, "Anfrage mit Serverfehler beendet");
        } else {
            tracing::debug!(status = status.as_u16(), fehler = %self, "Anfrage abgelehnt");
        }
        fehler_antwort(status, &self.client_nachricht())
    }
}
