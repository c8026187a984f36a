//! Datenbankmodelle fuer Questgate
//!
//! Diese Typen repraesentieren Datensaetze aus der Datenbank.
//! Sie sind von den API-Typen getrennt und dienen als reine Datenuebertragungsobjekte.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use questgate_core::{QuestId, SessionId, UserId};

// ---------------------------------------------------------------------------
// Benutzer
// ---------------------------------------------------------------------------

/// Benutzer-Datensatz aus der Datenbank
///
/// Bewusst ohne `Serialize`: der Passwort-Hash verlaesst das Crate nur
/// ueber explizite Feldzugriffe.
#[derive(Clone)]
pub struct BenutzerRecord {
    pub id: UserId,
    pub username: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl std::fmt::Debug for BenutzerRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BenutzerRecord")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("password_hash", &"<redacted>")
            .field("created_at", &self.created_at)
            .finish()
    }
}

/// Daten zum Erstellen eines neuen Benutzers
#[derive(Debug, Clone)]
pub struct NeuerBenutzer<'a> {
    pub username: &'a str,
    pub password_hash: &'a str,
}

// ---------------------------------------------------------------------------
// Sessions
// ---------------------------------------------------------------------------

/// Session-Datensatz aus der Datenbank
#[derive(Clone, PartialEq, Eq)]
pub struct SessionRecord {
    pub id: SessionId,
    pub user_id: UserId,
    /// Das Token ist das Geheimnis des Clients
    pub token: String,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl SessionRecord {
    /// Gueltig nur solange der Ablaufzeitpunkt strikt in der Zukunft liegt
    pub fn ist_gueltig_zum(&self, zeitpunkt: DateTime<Utc>) -> bool {
        zeitpunkt < self.expires_at
    }
}

impl std::fmt::Debug for SessionRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionRecord")
            .field("id", &self.id)
            .field("user_id", &self.user_id)
            .field("token", &"<redacted>")
            .field("expires_at", &self.expires_at)
            .field("created_at", &self.created_at)
            .finish()
    }
}

/// Daten zum Erstellen einer neuen Session
#[derive(Clone)]
pub struct NeueSession<'a> {
    pub user_id: UserId,
    pub token: &'a str,
    pub expires_at: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// Quests
// ---------------------------------------------------------------------------

/// Quest-Datensatz aus der Datenbank
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestRecord {
    pub id: QuestId,
    pub title: String,
    pub description: String,
    pub reward: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Felder einer Quest beim Erstellen und Ueberschreiben
#[derive(Debug, Clone, Copy)]
pub struct QuestDaten<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub reward: i64,
}
