//! questgate-auth – Auth-Service
//!
//! Dieses Crate implementiert:
//! - Passwort-Hashing mit Argon2id
//! - Session-Ausstellung und -Pruefung (Tokens in der Datenbank, Aufraeumen beim Lesen)
//! - AuthService (Registrierung, Login, Logout)

pub mod error;
pub mod password;
pub mod service;
pub mod session;

// Bequeme Re-Exporte
pub use error::{AuthError, AuthResult};
pub use password::{Argon2Parameter, PasswortHasher};
pub use service::AuthService;
pub use session::{SessionAuthentifizierer, SESSION_GUELTIGKEIT_SEKUNDEN};
