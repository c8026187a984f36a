//! # questgate-api
//!
//! HTTP-Schnittstelle von Questgate (Axum):
//! - `/signup`, `/signin`, `/signout` fuer Konto und Session
//! - `/quests`, `/quest/:id` fuer die Quest-Verwaltung hinter dem Session-Guard
//! - `/health` fuer Betriebschecks

pub mod auth;
pub mod error;
pub mod rest;

pub use auth::AngemeldeterBenutzer;
pub use error::{ApiError, ApiResult};
pub use rest::{router, ApiKonfig, ApiState, RestServer, RestServerKonfig};
