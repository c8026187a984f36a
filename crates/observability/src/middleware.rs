//! Request-Timing Middleware fuer Axum
//!
//! Vergibt jeder Anfrage eine Request-ID (`x-request-id`), misst die
//! Antwortzeit und protokolliert beides als strukturiertes Log-Event.

use axum::{
    body::Body,
    http::{HeaderName, HeaderValue, Request, Response},
    middleware::Next,
};
use std::time::Instant;
use tracing::Instrument;
use uuid::Uuid;

/// Header, in dem die Request-ID transportiert wird
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Axum-Middleware-Funktion: misst Antwortzeit und loggt strukturiert.
///
/// Eine vom Client mitgeschickte Request-ID wird uebernommen, sonst wird
/// eine neue UUID erzeugt. Die ID steht im Span aller Logs der Anfrage und
/// wird im Antwort-Header zurueckgegeben.
///
/// Verwendung:
/// ```ignore
/// Router::new()
///     .route("/", get(handler))
///     .layer(axum::middleware::from_fn(timing_middleware))
/// ```
pub async fn timing_middleware(req: Request<Body>, next: Next) -> Response<Body> {
    let request_id = request_id_bestimmen(req.headers().get(REQUEST_ID_HEADER));
    let methode = req.method().to_string();
    let pfad = req.uri().path().to_string();
    let start = Instant::now();

    let span = tracing::info_span!("http", request_id = %request_id);
    let mut response = next.run(req).instrument(span.clone()).await;

    let dauer = start.elapsed();
    let status = response.status().as_u16();

    span.in_scope(|| {
        tracing::info!(
            method = %methode,
            path = %pfad,
            status = status,
            duration_ms = dauer.as_millis() as u64,
            bucket = dauer_bucket(dauer.as_millis() as u64),
            "HTTP-Anfrage abgeschlossen"
        );
    });

    if let Ok(wert) = HeaderValue::from_str(&request_id) {
        response
            .headers_mut()
            .insert(HeaderName::from_static(REQUEST_ID_HEADER), wert);
    }
    response
}

/// Uebernimmt eine brauchbare Request-ID oder erzeugt eine neue
pub fn request_id_bestimmen(vorhanden: Option<&HeaderValue>) -> String {
    vorhanden
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|id| !id.is_empty() && id.len() <= 128)
        .map(str::to_string)
        .unwrap_or_else(|| Uuid::new_v4().to_string())
}

/// Ordnet eine Dauer (in ms) einer groben Laufzeitklasse zu
pub fn dauer_bucket(dauer_ms: u64) -> &'static str {
    match dauer_ms {
        0..=1 => "<=1ms",
        2..=5 => "<=5ms",
        6..=10 => "<=10ms",
        11..=25 => "<=25ms",
        26..=50 => "<=50ms",
        51..=100 => "<=100ms",
        101..=250 => "<=250ms",
        251..=500 => "<=500ms",
        501..=1000 => "<=1s",
        _ => ">1s",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vorhandene_request_id_wird_uebernommen() {
        let wert = HeaderValue::from_static("abc-123");
        assert_eq!(request_id_bestimmen(Some(&wert)), "abc-123");
    }

    #[test]
    fn fehlende_request_id_wird_erzeugt() {
        let id = request_id_bestimmen(None);
        assert!(Uuid::parse_str(&id).is_ok());

        let leer = HeaderValue::from_static("  ");
        assert_ne!(request_id_bestimmen(Some(&leer)), "");
    }

    #[test]
    fn bucket_grenzen() {
        assert_eq!(dauer_bucket(0), "<=1ms");
        assert_eq!(dauer_bucket(5), "<=5ms");
        assert_eq!(dauer_bucket(25), "<=25ms");
        assert_eq!(dauer_bucket(1000), "<=1s");
        assert_eq!(dauer_bucket(1001), ">1s");
    }
}
