//! REST-Handler fuer Quest-Endpunkte
//!
//! Alle Handler verlangen einen [`AngemeldeterBenutzer`] als ersten
//! Extractor; ohne gueltige Session wird weder Pfad noch Body gelesen.

use axum::extract::{
    rejection::{JsonRejection, PathRejection},
    Json, Path, State,
};
use serde::Deserialize;

use questgate_core::QuestId;
use questgate_db::{models::QuestDaten, models::QuestRecord, QuestRepository};

use crate::auth::AngemeldeterBenutzer;
use crate::error::{ApiError, ApiResult};
use crate::rest::handlers::{body_lesen, pfad_id};
use crate::rest::ApiState;

/// Body fuer das Anlegen und Aendern einer Quest
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct QuestEingabe {
    pub title: String,
    pub description: String,
    pub reward: i64,
}

impl QuestEingabe {
    /// Prueft die Pflichtfelder und liefert die Daten fuer das Repository
    pub fn pruefen(&self) -> ApiResult<QuestDaten<'_>> {
        if self.title.trim().is_empty() {
            return Err(ApiError::eingabe("title is required"));
        }
        if self.description.trim().is_empty() {
            return Err(ApiError::eingabe("description is required"));
        }
        if self.reward <= 0 {
            return Err(ApiError::eingabe("reward must be greater than 0"));
        }
        Ok(QuestDaten {
            title: &self.title,
            description: &self.description,
            reward: self.reward,
        })
    }
}

/// GET /quests
pub async fn list_quests(
    AngemeldeterBenutzer(_): AngemeldeterBenutzer,
    State(state): State<ApiState>,
) -> ApiResult<Json<Vec<QuestRecord>>> {
    let quests = state.db.list().await?;
    Ok(Json(quests))
}

/// GET /quest/:id
pub async fn get_quest(
    AngemeldeterBenutzer(_): AngemeldeterBenutzer,
    State(state): State<ApiState>,
    pfad: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<QuestRecord>> {
    let id = QuestId(pfad_id(pfad)?);
    QuestRepository::get_by_id(&state.db, id)
        .await?
        .map(Json)
        .ok_or(ApiError::QuestNichtGefunden)
}

/// POST /quest
pub async fn create_quest(
    AngemeldeterBenutzer(user_id): AngemeldeterBenutzer,
    State(state): State<ApiState>,
    body: Result<Json<QuestEingabe>, JsonRejection>,
) -> ApiResult<Json<QuestRecord>> {
    let eingabe = body_lesen(body)?;
    let quest = QuestRepository::create(&state.db, eingabe.pruefen()?).await?;

    tracing::info!(user_id = %user_id, quest_id = %quest.id, "Quest erstellt");
    Ok(Json(quest))
}

/// PUT /quest/:id
pub async fn update_quest(
    AngemeldeterBenutzer(user_id): AngemeldeterBenutzer,
    State(state): State<ApiState>,
    pfad: Result<Path<i64>, PathRejection>,
    body: Result<Json<QuestEingabe>, JsonRejection>,
) -> ApiResult<Json<QuestRecord>> {
    let id = QuestId(pfad_id(pfad)?);

    // Erst die ID aufloesen, dann den Body: unbekannte Quest ist immer 404
    if QuestRepository::get_by_id(&state.db, id).await?.is_none() {
        return Err(ApiError::QuestNichtGefunden);
    }

    let eingabe = body_lesen(body)?;
    let daten = eingabe.pruefen()?;
    let quest = state.db.update(id, daten).await?;

    tracing::info!(user_id = %user_id, quest_id = %quest.id, "Quest aktualisiert");
    Ok(Json(quest))
}

/// DELETE /quest/:id
///
/// Antwortet mit dem letzten Stand der geloeschten Quest.
pub async fn delete_quest(
    AngemeldeterBenutzer(user_id): AngemeldeterBenutzer,
    State(state): State<ApiState>,
    pfad: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<QuestRecord>> {
    let id = QuestId(pfad_id(pfad)?);
    let quest = QuestRepository::get_by_id(&state.db, id)
        .await?
        .ok_or(ApiError::QuestNichtGefunden)?;

    if !QuestRepository::delete(&state.db, id).await? {
        return Err(ApiError::QuestNichtGefunden);
    }

    tracing::info!(user_id = %user_id, quest_id = %id, "Quest geloescht");
    Ok(Json(quest))
}
