//! SQLite-Implementierung des SessionRepository

use chrono::Utc;

use questgate_core::{SessionId, UserId};

use crate::models::{NeueSession, SessionRecord};
use crate::repository::{DbResult, SessionRepository};
use crate::sqlite::{pool::SqliteDb, zeitstempel_parsen};

impl SessionRepository for SqliteDb {
    async fn create(&self, data: NeueSession<'_>) -> DbResult<SessionRecord> {
        let now = Utc::now();

        let ergebnis = sqlx::query(
            "INSERT INTO sessions (user_id, token, expires_at, created_at) VALUES (?, ?, ?, ?)",
        )
        .bind(data.user_id.inner())
        .bind(data.token)
        .bind(data.expires_at.to_rfc3339())
        .bind(now.to_rfc3339())
        .execute(&self.pool)
        .await?;

        Ok(SessionRecord {
            id: SessionId(ergebnis.last_insert_rowid()),
            user_id: data.user_id,
            token: data.token.to_string(),
            expires_at: data.expires_at,
            created_at: now,
        })
    }

    async fn get_by_token(&self, token: &str) -> DbResult<Option<SessionRecord>> {
        let row = sqlx::query(
            "SELECT id, user_id, token, expires_at, created_at FROM sessions WHERE token = ?",
        )
        .bind(token)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| row_to_session(&r)).transpose()
    }

    async fn delete(&self, id: SessionId) -> DbResult<bool> {
        let affected = sqlx::query("DELETE FROM sessions WHERE id = ?")
            .bind(id.inner())
            .execute(&self.pool)
            .await?
            .rows_affected();
        Ok(affected > 0)
    }
}

fn row_to_session(row: &sqlx::sqlite::SqliteRow) -> DbResult<SessionRecord> {
    use sqlx::Row as _;

    let expires_at: String = row.try_get("expires_at")?;
    let created_at: String = row.try_get("created_at")?;

    Ok(SessionRecord {
        id: SessionId(row.try_get("id")?),
        user_id: UserId(row.try_get("user_id")?),
        token: row.try_get("token")?,
        expires_at: zeitstempel_parsen("expires_at", &expires_at)?,
        created_at: zeitstempel_parsen("created_at", &created_at)?,
    })
}
