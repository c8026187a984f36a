//! Repository-Trait-Definitionen
//!
//! Das Repository-Pattern entkoppelt die Geschaeftslogik von der konkreten
//! Datenbank-Implementierung. Alle Mutationen an Benutzern, Sessions und
//! Quests laufen ausschliesslich ueber diese Traits.

use questgate_core::{QuestId, SessionId};

use crate::error::DbError;
use crate::models::{
    BenutzerRecord, NeueSession, NeuerBenutzer, QuestDaten, QuestRecord, SessionRecord,
};

/// Result-Alias fuer Datenbankoperationen
pub type DbResult<T> = Result<T, DbError>;

/// Konfiguration fuer die Datenbankverbindung
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Verbindungs-URL (z.B. "sqlite://questgate.db")
    pub url: String,
    /// Maximale Anzahl gleichzeitiger Verbindungen im Pool
    pub max_verbindungen: u32,
    /// Ob WAL-Modus bei SQLite aktiviert werden soll
    pub sqlite_wal: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite://questgate.db".into(),
            max_verbindungen: 5,
            sqlite_wal: true,
        }
    }
}

/// Repository fuer Benutzer (Credential Store)
#[allow(async_fn_in_trait)]
pub trait UserRepository: Send + Sync {
    /// Legt einen Benutzer an.
    ///
    /// Schlaegt mit [`DbError::Eindeutigkeit`] fehl wenn der Benutzername
    /// bereits existiert. Die Pruefung erfolgt atomar in der Datenbank.
    async fn create(&self, data: NeuerBenutzer<'_>) -> DbResult<BenutzerRecord>;

    /// Sucht einen Benutzer anhand des Namens (Gross-/Kleinschreibung beachtet)
    async fn get_by_name(&self, username: &str) -> DbResult<Option<BenutzerRecord>>;
}

/// Repository fuer Sessions (Session Store)
#[allow(async_fn_in_trait)]
pub trait SessionRepository: Send + Sync {
    async fn create(&self, data: NeueSession<'_>) -> DbResult<SessionRecord>;

    async fn get_by_token(&self, token: &str) -> DbResult<Option<SessionRecord>>;

    /// Loescht eine Session. Gibt `false` zurueck wenn sie nicht (mehr) existierte.
    async fn delete(&self, id: SessionId) -> DbResult<bool>;
}

/// Repository fuer Quests
#[allow(async_fn_in_trait)]
pub trait QuestRepository: Send + Sync {
    async fn create(&self, data: QuestDaten<'_>) -> DbResult<QuestRecord>;

    async fn get_by_id(&self, id: QuestId) -> DbResult<Option<QuestRecord>>;

    /// Alle Quests, aufsteigend nach ID
    async fn list(&self) -> DbResult<Vec<QuestRecord>>;

    /// Ueberschreibt Titel, Beschreibung und Belohnung und setzt `updated_at`
    async fn update(&self, id: QuestId, data: QuestDaten<'_>) -> DbResult<QuestRecord>;

    async fn delete(&self, id: QuestId) -> DbResult<bool>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn database_config_standard() {
        let cfg = DatabaseConfig::default();
        assert!(cfg.sqlite_wal);
        assert_eq!(cfg.max_verbindungen, 5);
        assert!(cfg.url.starts_with("sqlite://"));
    }
}
