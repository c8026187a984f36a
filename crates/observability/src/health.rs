//! Health-Check fuer Questgate
//!
//! Endpoint: `GET /health`
//! Response: JSON mit Status, Version, Uptime und DB-Verbindungsstatus

use axum::{http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;

/// Status des Health-Checks
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Unhealthy,
}

/// Antwort des Health-Check-Endpunkts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub version: String,
    pub uptime_seconds: u64,
    pub db_connected: bool,
}

/// Startzeitpunkt des Prozesses, geteilt zwischen allen Health-Anfragen
#[derive(Debug, Clone)]
pub struct HealthState {
    start_time: Arc<Instant>,
    version: &'static str,
}

impl HealthState {
    pub fn neu(version: &'static str) -> Self {
        Self {
            start_time: Arc::new(Instant::now()),
            version,
        }
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }

    /// Baut die Antwort aus dem aktuellen DB-Zustand
    ///
    /// Ohne Datenbank kann keine Anfrage bedient werden, daher `503`.
    pub fn antwort(&self, db_connected: bool) -> (StatusCode, Json<HealthResponse>) {
        let (status, http_status) = if db_connected {
            (HealthStatus::Healthy, StatusCode::OK)
        } else {
            (HealthStatus::Unhealthy, StatusCode::SERVICE_UNAVAILABLE)
        };

        let response = HealthResponse {
            status,
            version: self.version.to_string(),
            uptime_seconds: self.uptime_seconds(),
            db_connected,
        };
        (http_status, Json(response))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_state_uptime_frisch() {
        let state = HealthState::neu("0.1.0");
        assert!(state.uptime_seconds() < 5);
    }

    #[test]
    fn antwort_mit_datenbank() {
        let (status, Json(body)) = HealthState::neu("0.1.0").antwort(true);
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.status, HealthStatus::Healthy);
        assert_eq!(body.version, "0.1.0");
        assert!(body.db_connected);
    }

    #[test]
    fn antwort_ohne_datenbank() {
        let (status, Json(body)) = HealthState::neu("0.1.0").antwort(false);
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body.status, HealthStatus::Unhealthy);
        assert!(!body.db_connected);
    }

    #[test]
    fn health_response_serialisierung() {
        let response = HealthResponse {
            status: HealthStatus::Healthy,
            version: "0.1.0".to_string(),
            uptime_seconds: 3600,
            db_connected: true,
        };

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"status\":\"healthy\""));
        assert!(json.contains("\"uptime_seconds\":3600"));
        assert!(json.contains("\"db_connected\":true"));
    }
}
