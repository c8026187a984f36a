//! SQLite-Implementierung des QuestRepository

use chrono::Utc;

use questgate_core::QuestId;

use crate::error::DbError;
use crate::models::{QuestDaten, QuestRecord};
use crate::repository::{DbResult, QuestRepository};
use crate::sqlite::{pool::SqliteDb, zeitstempel_parsen};

impl QuestRepository for SqliteDb {
    async fn create(&self, data: QuestDaten<'_>) -> DbResult<QuestRecord> {
        let now = Utc::now();
        let now_str = now.to_rfc3339();

        let ergebnis = sqlx::query(
            "INSERT INTO quests (title, description, reward, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(data.title)
        .bind(data.description)
        .bind(data.reward)
        .bind(&now_str)
        .bind(&now_str)
        .execute(&self.pool)
        .await?;

        Ok(QuestRecord {
            id: QuestId(ergebnis.last_insert_rowid()),
            title: data.title.to_string(),
            description: data.description.to_string(),
            reward: data.reward,
            created_at: now,
            updated_at: now,
        })
    }

    async fn get_by_id(&self, id: QuestId) -> DbResult<Option<QuestRecord>> {
        let row = sqlx::query(
            "SELECT id, title, description, reward, created_at, updated_at
             FROM quests WHERE id = ?",
        )
        .bind(id.inner())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| row_to_quest(&r)).transpose()
    }

    async fn list(&self) -> DbResult<Vec<QuestRecord>> {
        let rows = sqlx::query(
            "SELECT id, title, description, reward, created_at, updated_at
             FROM quests ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(row_to_quest).collect()
    }

    async fn update(&self, id: QuestId, data: QuestDaten<'_>) -> DbResult<QuestRecord> {
        let now = Utc::now().to_rfc3339();

        let affected = sqlx::query(
            "UPDATE quests SET title = ?, description = ?, reward = ?, updated_at = ?
             WHERE id = ?",
        )
        .bind(data.title)
        .bind(data.description)
        .bind(data.reward)
        .bind(&now)
        .bind(id.inner())
        .execute(&self.pool)
        .await?
        .rows_affected();

        if affected == 0 {
            return Err(DbError::nicht_gefunden(format!("Quest {id}")));
        }

        QuestRepository::get_by_id(self, id)
            .await?
            .ok_or_else(|| DbError::intern("Quest nach Update nicht gefunden"))
    }

    async fn delete(&self, id: QuestId) -> DbResult<bool> {
        let affected = sqlx::query("DELETE FROM quests WHERE id = ?")
            .bind(id.inner())
            .execute(&self.pool)
            .await?
            .rows_affected();
        Ok(affected > 0)
    }
}

fn row_to_quest(row: &sqlx::sqlite::SqliteRow) -> DbResult<QuestRecord> {
    use sqlx::Row as _;

    let created_at: String = row.try_get("created_at")?;
    let updated_at: String = row.try_get("updated_at")?;

    Ok(QuestRecord {
        id: QuestId(row.try_get("id")?),
        title: row.try_get("title")?,
        description: row.try_get("description")?,
        reward: row.try_get("reward")?,
        created_at: zeitstempel_parsen("created_at", &created_at)?,
        updated_at: zeitstempel_parsen("updated_at", &updated_at)?,
    })
}
