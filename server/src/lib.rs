//! questgate-server – Bibliotheks-Root
//!
//! Verdrahtet Datenbank, Passwort-Hasher und REST-API zu einem laufenden
//! Server und stellt den Einstiegspunkt fuer Integrationstests bereit.

pub mod config;

use anyhow::{Context, Result};

use questgate_api::{ApiKonfig, ApiState, RestServer, RestServerKonfig};
use questgate_auth::PasswortHasher;
use questgate_db::SqliteDb;

use config::ServerConfig;

/// Haelt den Server-Zustand zusammen
pub struct Server {
    pub config: ServerConfig,
}

impl Server {
    /// Erstellt einen neuen Server aus der gegebenen Konfiguration
    pub fn neu(config: ServerConfig) -> Self {
        Self { config }
    }

    /// Baut den API-State: Datenbank oeffnen (inkl. Migrationen) und Hasher erstellen
    pub async fn state_aufbauen(&self) -> Result<ApiState> {
        tracing::info!(url = %self.config.datenbank.url, "Datenbankverbindung wird hergestellt");
        let db = SqliteDb::oeffnen(&self.config.datenbank_config())
            .await
            .context("Datenbank konnte nicht geoeffnet werden")?;

        let hasher = PasswortHasher::neu(self.config.argon2_parameter())
            .context("Passwort-Hasher konnte nicht erstellt werden")?;

        Ok(ApiState::neu(
            db,
            hasher,
            ApiKonfig {
                session_gueltigkeit: self.config.session_gueltigkeit(),
                cookie_secure: self.config.auth.cookie_secure,
            },
        ))
    }

    /// Startet den Server und laeuft bis zum Shutdown-Signal
    ///
    /// Reihenfolge:
    /// 1. Datenbankverbindung herstellen, Migrationen ausfuehren
    /// 2. Passwort-Hasher und Auth-Service aufbauen
    /// 3. REST-API starten und auf Ctrl-C warten
    /// 4. Datenbank-Pool schliessen
    pub async fn starten(self) -> Result<()> {
        let bind_addr = self.config.api_bind_adresse()?;
        tracing::info!(
            server_name = %self.config.server.name,
            api = %bind_addr,
            session_gueltigkeit_s = self.config.auth.session_gueltigkeit_sekunden,
            "Server startet"
        );

        let state = self.state_aufbauen().await?;
        let db = state.db.clone();

        let ergebnis = RestServer::neu(RestServerKonfig {
            bind_addr,
            cors_origins: self.config.api.cors_origins.clone(),
        })
        .starten(state)
        .await;

        db.schliessen().await;
        ergebnis?;
        tracing::info!("Server beendet");
        Ok(())
    }
}
