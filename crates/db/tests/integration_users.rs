//! Integration-Tests fuer UserRepository (In-Memory SQLite)

use questgate_core::UserId;
use questgate_db::{models::NeuerBenutzer, SqliteDb, UserRepository};

async fn db() -> SqliteDb {
    SqliteDb::in_memory()
        .await
        .expect("In-Memory DB konnte nicht erstellt werden")
}

#[tokio::test]
async fn benutzer_erstellen_und_laden() {
    let db = db().await;

    let user = UserRepository::create(
        &db,
        NeuerBenutzer {
            username: "alice",
            password_hash: "hash_alice",
        },
    )
    .await
    .expect("Benutzer erstellen fehlgeschlagen");

    assert_eq!(user.id, UserId(1));
    assert_eq!(user.username, "alice");

    let geladen = UserRepository::get_by_name(&db, "alice")
        .await
        .expect("get_by_name fehlgeschlagen")
        .expect("Benutzer sollte gefunden werden");

    assert_eq!(geladen.id, user.id);
    assert_eq!(geladen.username, "alice");
    assert_eq!(geladen.password_hash, "hash_alice");
}

#[tokio::test]
async fn benutzer_nach_name_laden() {
    let db = db().await;

    UserRepository::create(
        &db,
        NeuerBenutzer {
            username: "bob",
            password_hash: "hash_bob",
        },
    )
    .await
    .unwrap();

    let gefunden = UserRepository::get_by_name(&db, "bob")
        .await
        .unwrap()
        .expect("Benutzer 'bob' sollte gefunden werden");

    assert_eq!(gefunden.username, "bob");

    let nicht_gefunden = UserRepository::get_by_name(&db, "unbekannt").await.unwrap();
    assert!(nicht_gefunden.is_none());
}

#[tokio::test]
async fn benutzername_beachtet_gross_kleinschreibung() {
    let db = db().await;

    UserRepository::create(
        &db,
        NeuerBenutzer {
            username: "Carol",
            password_hash: "hash",
        },
    )
    .await
    .unwrap();

    assert!(UserRepository::get_by_name(&db, "carol").await.unwrap().is_none());

    // Anderer Fall ist ein anderer Benutzer
    UserRepository::create(
        &db,
        NeuerBenutzer {
            username: "carol",
            password_hash: "hash",
        },
    )
    .await
    .expect("'carol' und 'Carol' sind verschiedene Namen");
}

#[tokio::test]
async fn benutzer_username_unique() {
    let db = db().await;

    UserRepository::create(
        &db,
        NeuerBenutzer {
            username: "charlie",
            password_hash: "hash1",
        },
    )
    .await
    .unwrap();

    let err = UserRepository::create(
        &db,
        NeuerBenutzer {
            username: "charlie",
            password_hash: "hash2",
        },
    )
    .await;

    assert!(err.is_err());
    assert!(err.unwrap_err().ist_eindeutigkeit());

    let anzahl: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE username = ?")
        .bind("charlie")
        .fetch_one(db.pool())
        .await
        .unwrap();
    assert_eq!(anzahl, 1);
}
