//! Auth-Service fuer Questgate
//!
//! Zentraler Service fuer Registrierung, Login und Logout. Nutzt das
//! UserRepository, den [`PasswortHasher`] und den [`SessionAuthentifizierer`].

use std::sync::Arc;

use chrono::Duration;

use questgate_core::UserId;
use questgate_db::{
    models::{BenutzerRecord, NeuerBenutzer, SessionRecord},
    SessionRepository, UserRepository,
};

use crate::{
    error::{AuthError, AuthResult},
    password::PasswortHasher,
    session::SessionAuthentifizierer,
};

/// Auth-Service – zentraler Einstiegspunkt fuer alle Authentifizierungsvorgaenge
pub struct AuthService<U: UserRepository, S: SessionRepository> {
    user_repo: Arc<U>,
    sessions: SessionAuthentifizierer<S>,
    hasher: Arc<PasswortHasher>,
}

impl<U: UserRepository, S: SessionRepository> AuthService<U, S> {
    /// Erstellt einen neuen AuthService
    pub fn neu(
        user_repo: Arc<U>,
        session_repo: Arc<S>,
        hasher: PasswortHasher,
        session_gueltigkeit: Duration,
    ) -> Self {
        Self {
            user_repo,
            sessions: SessionAuthentifizierer::neu(session_repo, session_gueltigkeit),
            hasher: Arc::new(hasher),
        }
    }

    /// Gueltigkeitsfenster neu ausgestellter Sessions
    pub fn session_gueltigkeit(&self) -> Duration {
        self.sessions.gueltigkeit()
    }

    /// Registriert einen neuen Benutzer
    ///
    /// Prueft ob der Benutzername bereits vergeben ist und erstellt den Account.
    /// Die UNIQUE-Constraint der Datenbank entscheidet parallele Versuche.
    pub async fn registrieren(&self, username: &str, passwort: &str) -> AuthResult<BenutzerRecord> {
        pflichtfelder_pruefen(username, passwort)?;

        if self.user_repo.get_by_name(username).await?.is_some() {
            return Err(AuthError::BenutzernameVergeben(username.to_string()));
        }

        let passwort_hash = self.hashen(passwort).await?;

        let benutzer = self
            .user_repo
            .create(NeuerBenutzer {
                username,
                password_hash: &passwort_hash,
            })
            .await
            .map_err(|e| {
                if e.ist_eindeutigkeit() {
                    AuthError::BenutzernameVergeben(username.to_string())
                } else {
                    AuthError::Datenbank(e)
                }
            })?;

        tracing::info!(
            user_id = %benutzer.id,
            username = %benutzer.username,
            "Neuer Benutzer registriert"
        );

        Ok(benutzer)
    }

    /// Meldet einen Benutzer an und erstellt eine neue Session
    ///
    /// Unbekannter Benutzer und falsches Passwort sind fuer den Aufrufer
    /// nicht unterscheidbar, weder am Fehler noch an der Laufzeit.
    pub async fn anmelden(
        &self,
        username: &str,
        passwort: &str,
    ) -> AuthResult<(BenutzerRecord, SessionRecord)> {
        pflichtfelder_pruefen(username, passwort)?;

        let Some(benutzer) = self.user_repo.get_by_name(username).await? else {
            self.attrappe_verifizieren(passwort).await?;
            tracing::warn!(username = %username, "Login-Versuch fuer unbekannten Benutzer");
            return Err(AuthError::UngueltigeAnmeldedaten);
        };

        let korrekt = self
            .verifizieren(passwort, &benutzer.password_hash)
            .await?;
        if !korrekt {
            tracing::warn!(username = %username, "Fehlgeschlagener Login-Versuch");
            return Err(AuthError::UngueltigeAnmeldedaten);
        }

        let session = self.sessions.ausstellen(benutzer.id).await?;

        tracing::info!(
            user_id = %benutzer.id,
            username = %benutzer.username,
            "Benutzer angemeldet"
        );

        Ok((benutzer, session))
    }

    /// Meldet einen Benutzer ab und invalidiert die Session
    ///
    /// Ohne Token schlaegt die Abmeldung fehl; ein bereits ungueltiges
    /// Token ist dagegen kein Fehler.
    pub async fn abmelden(&self, token: Option<&str>) -> AuthResult<()> {
        let token = match token {
            Some(t) if !t.is_empty() => t,
            _ => return Err(AuthError::NichtAngemeldet),
        };

        let geloescht = self.sessions.widerrufen(token).await?;
        tracing::debug!(geloescht, "Abmeldung verarbeitet");
        Ok(())
    }

    /// Loest ein vorgelegtes Session-Token zur Benutzer-ID auf
    pub async fn authentifizieren(&self, token: Option<&str>) -> AuthResult<UserId> {
        self.sessions.authentifizieren(token).await
    }

    // Argon2 ist CPU-gebunden und laeuft deshalb auf dem Blocking-Pool

    async fn hashen(&self, passwort: &str) -> AuthResult<String> {
        let hasher = Arc::clone(&self.hasher);
        let passwort = passwort.to_string();
        tokio::task::spawn_blocking(move || hasher.hashen(&passwort))
            .await
            .map_err(|e| AuthError::intern(format!("Hash-Task abgebrochen: {e}")))?
    }

    async fn verifizieren(&self, passwort: &str, hash: &str) -> AuthResult<bool> {
        let hasher = Arc::clone(&self.hasher);
        let passwort = passwort.to_string();
        let hash = hash.to_string();
        tokio::task::spawn_blocking(move || hasher.verifizieren(&passwort, &hash))
            .await
            .map_err(|e| AuthError::intern(format!("Verifikations-Task abgebrochen: {e}")))?
    }

    async fn attrappe_verifizieren(&self, passwort: &str) -> AuthResult<()> {
        let hasher = Arc::clone(&self.hasher);
        let passwort = passwort.to_string();
        tokio::task::spawn_blocking(move || hasher.attrappe_verifizieren(&passwort))
            .await
            .map_err(|e| AuthError::intern(format!("Verifikations-Task abgebrochen: {e}")))
    }
}

fn pflichtfelder_pruefen(username: &str, passwort: &str) -> AuthResult<()> {
    if username.is_empty() {
        return Err(AuthError::eingabe("username is required"));
    }
    if passwort.is_empty() {
        return Err(AuthError::eingabe("password is required"));
    }
    Ok(())
}
