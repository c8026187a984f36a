//! questgate-core – Gemeinsame Typen
//!
//! Dieses Crate stellt die ID-Typen bereit, die von allen anderen
//! Questgate-Crates gemeinsam genutzt werden.

pub mod types;

// Re-Exporte fuer bequemen Zugriff
pub use types::{QuestId, SessionId, UserId};
