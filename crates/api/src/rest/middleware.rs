//! Hilfsfunktionen fuer Session-Cookies und Fehlerantworten

use axum::{
    http::{
        header::{AUTHORIZATION, COOKIE},
        HeaderMap, HeaderValue, StatusCode,
    },
    response::{IntoResponse, Json, Response},
};
use chrono::Duration;
use serde_json::json;

/// Name des Cookies, das den Session-Token traegt
pub const SESSION_COOKIE_NAME: &str = "session_token";

/// Fehlerantwort fuer REST-API
pub fn fehler_antwort(status: StatusCode, nachricht: &str) -> Response {
    (
        status,
        Json(json!({
            "error": {
                "code": status.as_u16(),
                "message": nachricht
            }
        })),
    )
        .into_response()
}

/// Extrahiert den Session-Token: zuerst aus dem Cookie, sonst aus `Authorization: Bearer`
pub fn session_token(headers: &HeaderMap) -> Option<String> {
    cookie_token(headers).or_else(|| bearer_token(headers).map(str::to_string))
}

fn cookie_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'))
        .filter_map(|paar| paar.trim().split_once('='))
        .filter(|(name, _)| name.trim() == SESSION_COOKIE_NAME)
        .map(|(_, wert)| wert.trim())
        // Ein geleertes Cookie (nach /signout) zaehlt als nicht vorhanden
        .find(|wert| !wert.is_empty())
        .map(str::to_string)
}

/// Extrahiert Bearer-Token aus Authorization-Header
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty())
}

/// `Set-Cookie`-Wert fuer eine neue Session
pub fn session_cookie(
    token: &str,
    gueltigkeit: Duration,
    secure: bool,
) -> Result<HeaderValue, axum::http::header::InvalidHeaderValue> {
    let mut cookie = format!(
        "{SESSION_COOKIE_NAME}={token}; Path=/; HttpOnly; SameSite=Lax; Max-Age={}",
        gueltigkeit.num_seconds()
    );
    if secure {
        cookie.push_str("; Secure");
    }
    HeaderValue::from_str(&cookie)
}

/// `Set-Cookie`-Wert, der den Client anweist das Token sofort zu verwerfen
pub fn session_cookie_loeschen(secure: bool) -> HeaderValue {
    if secure {
        HeaderValue::from_static("session_token=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0; Secure")
    } else {
        HeaderValue::from_static("session_token=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_aus_cookie() {
        let mut headers = HeaderMap::new();
        headers.insert(
            COOKIE,
            HeaderValue::from_static("theme=dark; session_token=abc123; lang=de"),
        );
        assert_eq!(session_token(&headers).as_deref(), Some("abc123"));
    }

    #[test]
    fn cookie_hat_vorrang_vor_bearer() {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_static("session_token=aus_cookie"));
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer aus_header"));
        assert_eq!(session_token(&headers).as_deref(), Some("aus_cookie"));
    }

    #[test]
    fn bearer_token_als_fallback() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer mein_token_123"));
        assert_eq!(bearer_token(&headers), Some("mein_token_123"));
        assert_eq!(session_token(&headers).as_deref(), Some("mein_token_123"));
    }

    #[test]
    fn leeres_cookie_faellt_auf_bearer_zurueck() {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_static("session_token=; theme=dark"));
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer gueltig_123"));
        assert_eq!(session_token(&headers).as_deref(), Some("gueltig_123"));

        headers.remove(AUTHORIZATION);
        assert_eq!(session_token(&headers), None);
    }

    #[test]
    fn kein_token() {
        let mut headers = HeaderMap::new();
        assert_eq!(session_token(&headers), None);

        headers.insert(COOKIE, HeaderValue::from_static("andere=wert"));
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Basic dXNlcjpwdw=="));
        assert_eq!(session_token(&headers), None);
    }

    #[test]
    fn cookie_attribute() {
        let wert = session_cookie("tok", Duration::seconds(1200), false).unwrap();
        let wert = wert.to_str().unwrap();
        assert!(wert.starts_with("session_token=tok;"));
        assert!(wert.contains("HttpOnly"));
        assert!(wert.contains("Max-Age=1200"));
        assert!(!wert.contains("Secure"));

        let sicher = session_cookie("tok", Duration::seconds(60), true).unwrap();
        assert!(sicher.to_str().unwrap().ends_with("; Secure"));
    }

    #[test]
    fn cookie_loeschen_setzt_max_age_null() {
        let wert = session_cookie_loeschen(false);
        assert!(wert.to_str().unwrap().contains("Max-Age=0"));
        assert!(wert.to_str().unwrap().starts_with("session_token=;"));
    }
}
