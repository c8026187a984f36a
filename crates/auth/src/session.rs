//! Session-Ausstellung und -Pruefung fuer Questgate
//!
//! Sessions leben ausschliesslich in der Datenbank (Tabelle `sessions`),
//! es gibt keinen prozessinternen Cache. Abgelaufene Sessions werden nicht
//! von einem Hintergrund-Task entfernt, sondern in dem Moment geloescht,
//! in dem eine Anfrage sie vorlegt.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use rand::RngCore;

use questgate_core::UserId;
use questgate_db::{
    models::{NeueSession, SessionRecord},
    SessionRepository,
};

use crate::error::{AuthError, AuthResult};

/// Standard-Gueltigkeitsfenster einer Session: 20 Minuten
pub const SESSION_GUELTIGKEIT_SEKUNDEN: i64 = 1200;

/// Stellt Sessions aus und loest vorgelegte Tokens zu Benutzern auf
pub struct SessionAuthentifizierer<S: SessionRepository> {
    sessions: Arc<S>,
    gueltigkeit: Duration,
}

impl<S: SessionRepository> SessionAuthentifizierer<S> {
    pub fn neu(sessions: Arc<S>, gueltigkeit: Duration) -> Self {
        Self {
            sessions,
            gueltigkeit,
        }
    }

    /// Das feste Gueltigkeitsfenster ab Ausstellung
    pub fn gueltigkeit(&self) -> Duration {
        self.gueltigkeit
    }

    /// Erstellt eine neue Session mit frischem Token fuer den Benutzer
    pub async fn ausstellen(&self, user_id: UserId) -> AuthResult<SessionRecord> {
        let token = token_generieren();
        let session = self
            .sessions
            .create(NeueSession {
                user_id,
                token: &token,
                expires_at: Utc::now() + self.gueltigkeit,
            })
            .await?;

        tracing::debug!(user_id = %user_id, session_id = %session.id, "Neue Session erstellt");
        Ok(session)
    }

    /// Loest ein vorgelegtes Token zur Benutzer-ID auf
    ///
    /// Fehlendes, unbekanntes und abgelaufenes Token ergeben alle
    /// [`AuthError::NichtAngemeldet`]. Abgelaufene Sessions werden dabei geloescht.
    pub async fn authentifizieren(&self, token: Option<&str>) -> AuthResult<UserId> {
        self.authentifizieren_zum(token, Utc::now()).await
    }

    /// Wie [`Self::authentifizieren`], mit explizitem Pruefzeitpunkt
    pub async fn authentifizieren_zum(
        &self,
        token: Option<&str>,
        zeitpunkt: DateTime<Utc>,
    ) -> AuthResult<UserId> {
        let token = match token {
            Some(t) if !t.is_empty() => t,
            _ => return Err(AuthError::NichtAngemeldet),
        };

        let session = self
            .sessions
            .get_by_token(token)
            .await?
            .ok_or(AuthError::NichtAngemeldet)?;

        if !session.ist_gueltig_zum(zeitpunkt) {
            self.sessions.delete(session.id).await?;
            tracing::info!(
                user_id = %session.user_id,
                session_id = %session.id,
                "Abgelaufene Session beim Lesen entfernt"
            );
            return Err(AuthError::NichtAngemeldet);
        }

        Ok(session.user_id)
    }

    /// Invalidiert (loescht) die Session zum Token, falls vorhanden
    ///
    /// Gibt `true` zurueck wenn eine Session geloescht wurde.
    pub async fn widerrufen(&self, token: &str) -> AuthResult<bool> {
        let Some(session) = self.sessions.get_by_token(token).await? else {
            return Ok(false);
        };
        let geloescht = self.sessions.delete(session.id).await?;
        tracing::debug!(session_id = %session.id, "Session invalidiert");
        Ok(geloescht)
    }
}

/// Generiert einen kryptografisch sicheren Session-Token (URL-sicheres Base64)
pub fn token_generieren() -> String {
    let mut bytes = [0u8; 32];
    rand::thread_rng().fill_bytes(&mut bytes);
    base64::Engine::encode(&base64::engine::general_purpose::URL_SAFE_NO_PAD, bytes)
}
