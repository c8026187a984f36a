//! REST-Handler Module

pub mod auth;
pub mod health;
pub mod quests;

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Json, Path};

use crate::error::ApiError;

// Kaputtes JSON und unbrauchbare Pfad-IDs sind Eingabefehler der Anfrage

pub(crate) fn body_lesen<T>(body: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    body.map(|Json(inhalt)| inhalt)
        .map_err(|e| ApiError::eingabe(e.body_text()))
}

pub(crate) fn pfad_id(pfad: Result<Path<i64>, PathRejection>) -> Result<i64, ApiError> {
    pfad.map(|Path(id)| id)
        .map_err(|e| ApiError::eingabe(e.body_text()))
}
