//! Integration-Tests fuer SessionRepository (In-Memory SQLite)

use chrono::{Duration, Utc};
use questgate_db::{
    models::{NeueSession, NeuerBenutzer},
    SessionRepository, SqliteDb, UserRepository,
};

async fn db_mit_benutzer() -> (SqliteDb, questgate_core::UserId) {
    let db = SqliteDb::in_memory()
        .await
        .expect("In-Memory DB konnte nicht erstellt werden");
    let user = UserRepository::create(
        &db,
        NeuerBenutzer {
            username: "dave",
            password_hash: "hash",
        },
    )
    .await
    .unwrap();
    (db, user.id)
}

#[tokio::test]
async fn session_erstellen_und_per_token_laden() {
    let (db, user_id) = db_mit_benutzer().await;
    let ablauf = Utc::now() + Duration::minutes(20);

    let session = SessionRepository::create(
        &db,
        NeueSession {
            user_id,
            token: "token_abc",
            expires_at: ablauf,
        },
    )
    .await
    .expect("Session erstellen fehlgeschlagen");

    let geladen = SessionRepository::get_by_token(&db, "token_abc")
        .await
        .unwrap()
        .expect("Session sollte sofort sichtbar sein");

    assert_eq!(geladen.id, session.id);
    assert_eq!(geladen.user_id, user_id);
    assert_eq!(geladen.expires_at, ablauf);
}

#[tokio::test]
async fn unbekanntes_token_liefert_none() {
    let (db, _) = db_mit_benutzer().await;
    let ergebnis = SessionRepository::get_by_token(&db, "gibt_es_nicht").await.unwrap();
    assert!(ergebnis.is_none());
}

#[tokio::test]
async fn session_loeschen_ist_idempotent() {
    let (db, user_id) = db_mit_benutzer().await;

    let session = SessionRepository::create(
        &db,
        NeueSession {
            user_id,
            token: "token_xyz",
            expires_at: Utc::now() + Duration::minutes(20),
        },
    )
    .await
    .unwrap();

    assert!(SessionRepository::delete(&db, session.id).await.unwrap());
    assert!(!SessionRepository::delete(&db, session.id).await.unwrap());
    assert!(SessionRepository::get_by_token(&db, "token_xyz")
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn mehrere_sessions_pro_benutzer() {
    let (db, user_id) = db_mit_benutzer().await;
    let ablauf = Utc::now() + Duration::minutes(20);

    let s1 = SessionRepository::create(&db, NeueSession { user_id, token: "eins", expires_at: ablauf })
        .await
        .unwrap();
    let s2 = SessionRepository::create(&db, NeueSession { user_id, token: "zwei", expires_at: ablauf })
        .await
        .unwrap();
    assert_ne!(s1.id, s2.id);

    SessionRepository::delete(&db, s1.id).await.unwrap();

    // Die zweite Session bleibt unberuehrt
    assert!(SessionRepository::get_by_token(&db, "zwei").await.unwrap().is_some());
}

#[tokio::test]
async fn sessions_verschwinden_mit_dem_benutzer() {
    let (db, user_id) = db_mit_benutzer().await;
    let ablauf = Utc::now() + Duration::minutes(20);
    SessionRepository::create(&db, NeueSession { user_id, token: "kaskade", expires_at: ablauf })
        .await
        .unwrap();

    sqlx::query("DELETE FROM users WHERE id = ?")
        .bind(user_id.inner())
        .execute(db.pool())
        .await
        .unwrap();

    assert!(SessionRepository::get_by_token(&db, "kaskade").await.unwrap().is_none());
}
