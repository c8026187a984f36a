//! questgate-db – Datenbank-Abstraktion
//!
//! Dieses Crate stellt das Repository-Pattern bereit. Die einzige
//! Implementierung ist SQLite ueber einen sqlx-Pool; Migrationen liegen
//! unter `migrations/` und werden beim Oeffnen ausgefuehrt.

pub mod error;
pub mod models;
pub mod repository;
pub mod sqlite;

pub use error::DbError;
pub use repository::{
    DatabaseConfig, DbResult, QuestRepository, SessionRepository, UserRepository,
};
pub use sqlite::SqliteDb;
