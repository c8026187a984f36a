//! Axum HTTP-Server fuer Questgate

use std::net::SocketAddr;

use anyhow::Result;
use axum::http::{HeaderValue, Method};
use axum::{middleware, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use questgate_observability::timing_middleware;

use crate::rest::{routes::router, ApiState};

/// REST-Server-Konfiguration
#[derive(Debug, Clone)]
pub struct RestServerKonfig {
    pub bind_addr: SocketAddr,
    /// Erlaubte CORS-Origins. Leer = alle Origins erlaubt (nur fuer Entwicklung).
    pub cors_origins: Vec<String>,
}

impl Default for RestServerKonfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8008)),
            cors_origins: vec![],
        }
    }
}

/// Axum HTTP-Server fuer Questgate
pub struct RestServer {
    konfig: RestServerKonfig,
}

impl RestServer {
    pub fn neu(konfig: RestServerKonfig) -> Self {
        Self { konfig }
    }

    /// CORS-Layer: entweder spezifische Origins oder permissiv
    fn cors_layer(&self) -> CorsLayer {
        if self.konfig.cors_origins.is_empty() {
            return CorsLayer::permissive();
        }

        let origins: Vec<HeaderValue> = self
            .konfig
            .cors_origins
            .iter()
            .filter_map(|o| match o.parse() {
                Ok(wert) => Some(wert),
                Err(_) => {
                    tracing::warn!(origin = %o, "Ungueltiger CORS-Origin wird ignoriert");
                    None
                }
            })
            .collect();

        // Mit konkreten Origins duerfen Cookies mitgeschickt werden
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([
                Method::GET,
                Method::POST,
                Method::PUT,
                Method::DELETE,
                Method::OPTIONS,
            ])
            .allow_headers([
                axum::http::header::CONTENT_TYPE,
                axum::http::header::AUTHORIZATION,
            ])
            .allow_credentials(true)
    }

    /// Router mit allen Layern; der letzte `.layer()` liegt aussen
    pub fn app(&self, state: ApiState) -> Router {
        router(state)
            .layer(middleware::from_fn(timing_middleware))
            .layer(TraceLayer::new_for_http())
            .layer(self.cors_layer())
    }

    /// Startet den REST-Server und laeuft bis Ctrl-C
    pub async fn starten(self, state: ApiState) -> Result<()> {
        let app = self.app(state);

        let listener = tokio::net::TcpListener::bind(self.konfig.bind_addr).await?;
        tracing::info!(addr = %self.konfig.bind_addr, "REST-Server gestartet");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("REST-Server beendet");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(fehler = %e, "Ctrl-C-Handler konnte nicht installiert werden");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown-Signal empfangen");
}
