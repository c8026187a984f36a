//! Structured Logging Setup via tracing-subscriber
//!
//! Umgebungsvariablen haben Vorrang vor der Konfigurationsdatei:
//! - `QG_LOG_LEVEL`: Filter-Direktive (z.B. `info` oder `questgate_api=debug`)
//! - `QG_LOG_FORMAT`: Format (text/json), Standard: text

use anyhow::{anyhow, Result};
use tracing_subscriber::{fmt, EnvFilter};

pub const ENV_LOG_LEVEL: &str = "QG_LOG_LEVEL";
pub const ENV_LOG_FORMAT: &str = "QG_LOG_FORMAT";

/// Ausgabeformat der Logs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

impl LogFormat {
    /// Unbekannte Werte fallen auf `Text` zurueck
    pub fn aus_str(s: &str) -> Self {
        match s.trim() {
            "json" => Self::Json,
            _ => Self::Text,
        }
    }
}

/// Initialisiert das Logging-System.
///
/// `level` und `format` stammen aus der Konfiguration und werden von
/// `QG_LOG_LEVEL` bzw. `QG_LOG_FORMAT` ueberschrieben.
pub fn logging_initialisieren(level: &str, format: &str) -> Result<()> {
    let filter = EnvFilter::try_from_env(ENV_LOG_LEVEL)
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let format = LogFormat::aus_str(
        &wert_waehlen(std::env::var(ENV_LOG_FORMAT).ok(), format),
    );

    let ergebnis = match format {
        LogFormat::Json => fmt()
            .json()
            .with_env_filter(filter)
            .with_target(true)
            .with_thread_ids(true)
            .with_current_span(true)
            .try_init(),
        LogFormat::Text => fmt().with_env_filter(filter).with_target(true).try_init(),
    };

    ergebnis.map_err(|e| anyhow!("Logging konnte nicht initialisiert werden: {e}"))
}

/// Nimmt den Umgebungswert, falls gesetzt und nicht leer, sonst den Konfigurationswert
pub fn wert_waehlen(env: Option<String>, konfig: &str) -> String {
    env.filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| konfig.to_string())
}

/// Validiert ob ein Log-Level-String gueltig ist.
pub fn log_level_gueltig(level: &str) -> bool {
    matches!(level, "trace" | "debug" | "info" | "warn" | "error")
}

/// Validiert ob ein Log-Format-String gueltig ist.
pub fn log_format_gueltig(format: &str) -> bool {
    matches!(format, "text" | "json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_level_gueltige_werte() {
        for level in ["trace", "debug", "info", "warn", "error"] {
            assert!(log_level_gueltig(level), "{level} sollte gueltig sein");
        }
    }

    #[test]
    fn log_level_ungueltige_werte() {
        assert!(!log_level_gueltig("verbose"));
        assert!(!log_level_gueltig("INFO")); // Gross-/Kleinschreibung
        assert!(!log_level_gueltig(""));
    }

    #[test]
    fn log_format_werte() {
        assert!(log_format_gueltig("text"));
        assert!(log_format_gueltig("json"));
        assert!(!log_format_gueltig("xml"));
        assert_eq!(LogFormat::aus_str("json"), LogFormat::Json);
        assert_eq!(LogFormat::aus_str("xml"), LogFormat::Text);
    }

    #[test]
    fn umgebung_hat_vorrang() {
        assert_eq!(wert_waehlen(Some("json".into()), "text"), "json");
        assert_eq!(wert_waehlen(None, "text"), "text");
        assert_eq!(wert_waehlen(Some("  ".into()), "text"), "text");
    }
}
