//! SQLite-Implementierung des UserRepository

use chrono::Utc;

use questgate_core::UserId;

use crate::error::DbError;
use crate::models::{BenutzerRecord, NeuerBenutzer};
use crate::repository::{DbResult, UserRepository};
use crate::sqlite::{pool::SqliteDb, zeitstempel_parsen};

impl UserRepository for SqliteDb {
    async fn create(&self, data: NeuerBenutzer<'_>) -> DbResult<BenutzerRecord> {
        let now = Utc::now();

        // Die UNIQUE-Constraint auf username entscheidet parallele Registrierungen
        let ergebnis = sqlx::query(
            "INSERT INTO users (username, password_hash, created_at) VALUES (?, ?, ?)",
        )
        .bind(data.username)
        .bind(data.password_hash)
        .bind(now.to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db) if db.is_unique_violation() => DbError::Eindeutigkeit(
                format!("Benutzername '{}' bereits vergeben", data.username),
            ),
            e => DbError::Sqlx(e),
        })?;

        Ok(BenutzerRecord {
            id: UserId(ergebnis.last_insert_rowid()),
            username: data.username.to_string(),
            password_hash: data.password_hash.to_string(),
            created_at: now,
        })
    }

    async fn get_by_name(&self, username: &str) -> DbResult<Option<BenutzerRecord>> {
        let row = sqlx::query(
            "SELECT id, username, password_hash, created_at FROM users WHERE username = ?",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| row_to_benutzer(&r)).transpose()
    }
}

fn row_to_benutzer(row: &sqlx::sqlite::SqliteRow) -> DbResult<BenutzerRecord> {
    use sqlx::Row as _;

    let created_at: String = row.try_get("created_at")?;

    Ok(BenutzerRecord {
        id: UserId(row.try_get("id")?),
        username: row.try_get("username")?,
        password_hash: row.try_get("password_hash")?,
        created_at: zeitstempel_parsen("created_at", &created_at)?,
    })
}
