//! SQLite-Backend-Implementierungen fuer alle Repository-Traits

pub mod pool;
pub mod quests;
pub mod sessions;
pub mod users;

pub use pool::SqliteDb;

use chrono::{DateTime, Utc};

use crate::error::DbError;

/// Parst einen gespeicherten RFC-3339-Zeitstempel
pub(crate) fn zeitstempel_parsen(feld: &str, wert: &str) -> Result<DateTime<Utc>, DbError> {
    DateTime::parse_from_rfc3339(wert)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| DbError::intern(format!("Ungueltige {feld} '{wert}': {e}")))
}
