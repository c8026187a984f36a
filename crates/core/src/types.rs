//! Gemeinsame Identifikationstypen fuer Questgate
//!
//! Alle IDs verwenden das Newtype-Pattern um Verwechslungen zwischen
//! verschiedenen ID-Arten zur Compilezeit auszuschliessen. Die Werte
//! werden von der Datenbank vergeben (INTEGER PRIMARY KEY).

use serde::{Deserialize, Serialize};

/// Eindeutige Benutzer-ID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UserId(pub i64);

impl UserId {
    /// Gibt den inneren Zahlenwert zurueck
    pub fn inner(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "user:{}", self.0)
    }
}

/// Eindeutige Session-ID (Datenbankschluessel, nicht das Token)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub i64);

impl SessionId {
    pub fn inner(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "session:{}", self.0)
    }
}

/// Eindeutige Quest-ID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct QuestId(pub i64);

impl QuestId {
    pub fn inner(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for QuestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "quest:{}", self.0)
    }
}
