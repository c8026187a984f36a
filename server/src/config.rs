//! Server-Konfiguration
//!
//! Wird beim Start aus einer TOML-Datei geladen. Alle Felder haben
//! sinnvolle Standardwerte, sodass der Server ohne Konfigurationsdatei
//! lauffaehig ist.

use std::net::SocketAddr;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use questgate_auth::{Argon2Parameter, SESSION_GUELTIGKEIT_SEKUNDEN};
use questgate_db::DatabaseConfig;
use questgate_observability::logging::{log_format_gueltig, log_level_gueltig};

/// Umgebungsvariable mit dem Pfad zur Konfigurationsdatei
pub const ENV_CONFIG_PFAD: &str = "QUESTGATE_CONFIG";

/// Vollstaendige Server-Konfiguration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Allgemeine Server-Einstellungen
    pub server: ServerEinstellungen,
    /// Netzwerk-Einstellungen
    pub netzwerk: NetzwerkEinstellungen,
    /// Datenbank-Einstellungen
    pub datenbank: DatenbankEinstellungen,
    /// Logging-Einstellungen
    pub logging: LoggingEinstellungen,
    /// Sessions, Cookies und Passwort-Hashing
    pub auth: AuthEinstellungen,
    /// REST-API-Einstellungen
    pub api: ApiEinstellungen,
}

/// Allgemeine Server-Einstellungen
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerEinstellungen {
    /// Anzeigename des Servers (nur fuer Logs)
    pub name: String,
}

impl Default for ServerEinstellungen {
    fn default() -> Self {
        Self {
            name: "Questgate".into(),
        }
    }
}

/// Netzwerk-Einstellungen
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NetzwerkEinstellungen {
    pub bind_adresse: String,
    /// Port fuer die REST-API
    pub api_port: u16,
}

impl Default for NetzwerkEinstellungen {
    fn default() -> Self {
        Self {
            bind_adresse: "0.0.0.0".into(),
            api_port: 8008,
        }
    }
}

/// Datenbank-Einstellungen
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatenbankEinstellungen {
    /// Verbindungs-URL
    pub url: String,
    /// Maximale Verbindungspool-Groesse
    pub max_verbindungen: u32,
    /// WAL-Modus fuer SQLite
    pub sqlite_wal: bool,
}

impl Default for DatenbankEinstellungen {
    fn default() -> Self {
        let standard = DatabaseConfig::default();
        Self {
            url: standard.url,
            max_verbindungen: standard.max_verbindungen,
            sqlite_wal: standard.sqlite_wal,
        }
    }
}

/// Logging-Einstellungen
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingEinstellungen {
    /// Log-Level: "trace", "debug", "info", "warn", "error"
    pub level: String,
    /// Format: "json" oder "text"
    pub format: String,
}

impl Default for LoggingEinstellungen {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: "text".into(),
        }
    }
}

/// Sessions, Cookies und Argon2-Parameter
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthEinstellungen {
    /// Gueltigkeitsfenster einer Session ab Anmeldung
    pub session_gueltigkeit_sekunden: i64,
    /// `Secure`-Attribut am Session-Cookie (nur hinter HTTPS setzen)
    pub cookie_secure: bool,
    /// Argon2 m_cost in KiB
    pub argon2_speicher_kib: u32,
    /// Argon2 t_cost
    pub argon2_iterationen: u32,
    /// Argon2 p_cost
    pub argon2_parallelitaet: u32,
}

impl Default for AuthEinstellungen {
    fn default() -> Self {
        let argon2 = Argon2Parameter::default();
        Self {
            session_gueltigkeit_sekunden: SESSION_GUELTIGKEIT_SEKUNDEN,
            cookie_secure: false,
            argon2_speicher_kib: argon2.speicher_kib,
            argon2_iterationen: argon2.iterationen,
            argon2_parallelitaet: argon2.parallelitaet,
        }
    }
}

/// REST-API-Einstellungen
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiEinstellungen {
    /// CORS-Origins (leer = alle erlaubt)
    pub cors_origins: Vec<String>,
}

impl ServerConfig {
    /// Laedt die Konfiguration aus einer TOML-Datei.
    /// Gibt die Standardkonfiguration zurueck wenn die Datei nicht existiert.
    pub fn laden(pfad: &str) -> anyhow::Result<Self> {
        let config = match std::fs::read_to_string(pfad) {
            Ok(inhalt) => Self::aus_toml(&inhalt)
                .with_context(|| format!("Konfigurationsfehler in '{pfad}'"))?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::warn!(
                    pfad = pfad,
                    "Konfigurationsdatei nicht gefunden, verwende Standardwerte"
                );
                Self::default()
            }
            Err(e) => {
                return Err(anyhow::anyhow!(
                    "Konfigurationsdatei '{pfad}' nicht lesbar: {e}"
                ))
            }
        };
        config.validieren()?;
        Ok(config)
    }

    /// Parst die Konfiguration aus einem TOML-String
    pub fn aus_toml(inhalt: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(inhalt)?)
    }

    /// Prueft Werte, die serde allein nicht abfangen kann
    pub fn validieren(&self) -> anyhow::Result<()> {
        if self.auth.session_gueltigkeit_sekunden <= 0 {
            anyhow::bail!("auth.session_gueltigkeit_sekunden muss positiv sein");
        }
        if !log_level_gueltig(&self.logging.level) {
            anyhow::bail!(
                "logging.level '{}' ungueltig (trace, debug, info, warn, error)",
                self.logging.level
            );
        }
        if !log_format_gueltig(&self.logging.format) {
            anyhow::bail!("logging.format '{}' ungueltig (text, json)", self.logging.format);
        }
        if self.datenbank.max_verbindungen == 0 {
            anyhow::bail!("datenbank.max_verbindungen muss mindestens 1 sein");
        }
        self.api_bind_adresse()?;
        Ok(())
    }

    /// Gibt die Bind-Adresse fuer den REST-Server zurueck
    pub fn api_bind_adresse(&self) -> anyhow::Result<SocketAddr> {
        let adresse = format!("{}:{}", self.netzwerk.bind_adresse, self.netzwerk.api_port);
        adresse
            .parse()
            .with_context(|| format!("Ungueltige Bind-Adresse '{adresse}'"))
    }

    /// Datenbank-Konfiguration fuer [`questgate_db::SqliteDb::oeffnen`]
    pub fn datenbank_config(&self) -> DatabaseConfig {
        DatabaseConfig {
            url: self.datenbank.url.clone(),
            max_verbindungen: self.datenbank.max_verbindungen,
            sqlite_wal: self.datenbank.sqlite_wal,
        }
    }

    pub fn argon2_parameter(&self) -> Argon2Parameter {
        Argon2Parameter {
            speicher_kib: self.auth.argon2_speicher_kib,
            iterationen: self.auth.argon2_iterationen,
            parallelitaet: self.auth.argon2_parallelitaet,
        }
    }

    pub fn session_gueltigkeit(&self) -> chrono::Duration {
        chrono::Duration::seconds(self.auth.session_gueltigkeit_sekunden)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_config_ist_valide() {
        let cfg = ServerConfig::default();
        assert!(cfg.validieren().is_ok());
        assert_eq!(cfg.netzwerk.api_port, 8008);
        assert_eq!(cfg.auth.session_gueltigkeit_sekunden, 1200);
        assert!(!cfg.auth.cookie_secure);
        assert_eq!(cfg.logging.level, "info");
        assert!(cfg.datenbank.url.starts_with("sqlite://"));
    }

    #[test]
    fn bind_adresse() {
        let cfg = ServerConfig::default();
        assert_eq!(cfg.api_bind_adresse().unwrap().to_string(), "0.0.0.0:8008");
    }

    #[test]
    fn config_aus_toml_string() {
        let toml = r#"
            [server]
            name = "Gilde"

            [netzwerk]
            api_port = 9000

            [auth]
            session_gueltigkeit_sekunden = 60
            cookie_secure = true
        "#;
        let cfg = ServerConfig::aus_toml(toml).unwrap();
        assert_eq!(cfg.server.name, "Gilde");
        assert_eq!(cfg.netzwerk.api_port, 9000);
        assert_eq!(cfg.session_gueltigkeit(), chrono::Duration::seconds(60));
        assert!(cfg.auth.cookie_secure);
        // Nicht angegebene Felder behalten Standardwerte
        assert_eq!(cfg.netzwerk.bind_adresse, "0.0.0.0");
        assert_eq!(cfg.argon2_parameter(), Argon2Parameter::default());
    }

    #[test]
    fn ungueltige_werte_werden_abgelehnt() {
        let cfg = ServerConfig::aus_toml("[auth]\nsession_gueltigkeit_sekunden = 0").unwrap();
        assert!(cfg.validieren().is_err());

        let cfg = ServerConfig::aus_toml("[netzwerk]\nbind_adresse = \"kein host\"").unwrap();
        assert!(cfg.validieren().is_err());

        assert!(ServerConfig::aus_toml("[netzwerk]\napi_port = \"achttausend\"").is_err());
    }

    #[test]
    fn ungueltige_logging_werte_werden_abgelehnt() {
        let cfg = ServerConfig::aus_toml("[logging]\nlevel = \"verbose\"").unwrap();
        assert!(cfg.validieren().is_err());

        let cfg = ServerConfig::aus_toml("[logging]\nformat = \"xml\"").unwrap();
        assert!(cfg.validieren().is_err());

        let cfg = ServerConfig::aus_toml("[logging]\nlevel = \"debug\"\nformat = \"json\"").unwrap();
        assert!(cfg.validieren().is_ok());
    }

    #[test]
    fn fehlende_datei_ergibt_standard() {
        let cfg = ServerConfig::laden("/gibt/es/nicht/questgate.toml").unwrap();
        assert_eq!(cfg.netzwerk.api_port, 8008);
    }
}
