//! REST-Interface fuer Questgate

pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod server;

use std::sync::Arc;

use chrono::Duration;

use questgate_auth::{AuthService, PasswortHasher, SESSION_GUELTIGKEIT_SEKUNDEN};
use questgate_db::SqliteDb;
use questgate_observability::HealthState;

/// Laufzeit-Einstellungen der API, die nicht den Listener betreffen
#[derive(Debug, Clone)]
pub struct ApiKonfig {
    /// Gueltigkeitsfenster neuer Sessions
    pub session_gueltigkeit: Duration,
    /// Setzt das `Secure`-Attribut am Session-Cookie
    pub cookie_secure: bool,
}

impl Default for ApiKonfig {
    fn default() -> Self {
        Self {
            session_gueltigkeit: Duration::seconds(SESSION_GUELTIGKEIT_SEKUNDEN),
            cookie_secure: false,
        }
    }
}

/// Axum-State fuer den Questgate-REST-Server
#[derive(Clone)]
pub struct ApiState {
    pub auth: Arc<AuthService<SqliteDb, SqliteDb>>,
    pub db: SqliteDb,
    pub health: HealthState,
    pub cookie_secure: bool,
}

impl ApiState {
    pub fn neu(db: SqliteDb, hasher: PasswortHasher, konfig: ApiKonfig) -> Self {
        let repo = Arc::new(db.clone());
        let auth = AuthService::neu(
            Arc::clone(&repo),
            repo,
            hasher,
            konfig.session_gueltigkeit,
        );
        Self {
            auth: Arc::new(auth),
            db,
            health: HealthState::neu(env!("CARGO_PKG_VERSION")),
            cookie_secure: konfig.cookie_secure,
        }
    }
}

pub use routes::router;
pub use server::{RestServer, RestServerKonfig};
