//! Fehlertypen fuer den Auth-Service

use thiserror::Error;

/// Alle moeglichen Fehler im Auth-Service
#[derive(Debug, Error)]
pub enum AuthError {
    // --- Eingabe ---
    #[error("Ungueltige Eingabe: {0}")]
    UngueltigeEingabe(String),

    // --- Passwort ---
    #[error("Passwort-Hashing fehlgeschlagen: {0}")]
    PasswortHashing(String),

    // --- Authentifizierung ---
    /// Deckt unbekannte Benutzer und falsche Passwoerter gleichermassen ab
    #[error("Benutzername oder Passwort falsch")]
    UngueltigeAnmeldedaten,

    /// Kein, unbekanntes oder abgelaufenes Token
    #[error("Nicht angemeldet")]
    NichtAngemeldet,

    // --- Benutzerverwaltung ---
    #[error("Benutzername bereits vergeben: {0}")]
    BenutzernameVergeben(String),

    // --- Datenbank ---
    #[error("Datenbankfehler: {0}")]
    Datenbank(#[from] questgate_db::DbError),

    // --- Intern ---
    #[error("Interner Fehler: {0}")]
    Intern(String),
}

impl AuthError {
    pub fn intern(msg: impl Into<String>) -> Self {
        Self::Intern(msg.into())
    }

    pub fn eingabe(msg: impl Into<String>) -> Self {
        Self::UngueltigeEingabe(msg.into())
    }

    /// Fehler die der Server verursacht hat (nicht der Client)
    pub fn ist_serverfehler(&self) -> bool {
        matches!(
            self,
            Self::PasswortHashing(_) | Self::Datenbank(_) | Self::Intern(_)
        )
    }
}

/// Result-Alias fuer den Auth-Service
pub type AuthResult<T> = Result<T, AuthError>;
