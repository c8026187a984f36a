//! Questgate Server – Einstiegspunkt
//!
//! Laedt `.env` und die Konfiguration, initialisiert das Logging und startet den Server.

use anyhow::Result;
use questgate_server::{
    config::{ServerConfig, ENV_CONFIG_PFAD},
    Server,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Eine fehlende .env-Datei ist kein Fehler
    let env_datei = dotenvy::dotenv().ok();

    // Konfigurationsdatei-Pfad aus Umgebungsvariable oder Standard
    let config_pfad = std::env::var(ENV_CONFIG_PFAD).unwrap_or_else(|_| "config.toml".into());

    // Konfiguration laden (Standardwerte falls Datei fehlt)
    let config = ServerConfig::laden(&config_pfad)?;

    questgate_observability::logging_initialisieren(&config.logging.level, &config.logging.format)?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        config = %config_pfad,
        env_datei = ?env_datei,
        "Questgate Server wird initialisiert"
    );

    Server::neu(config).starten().await
}
