//! Startpfad des Servers gegen eine echte SQLite-Datei

use std::time::{SystemTime, UNIX_EPOCH};

use questgate_server::{config::ServerConfig, Server};

fn temp_db_url() -> (std::path::PathBuf, String) {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let pfad = std::env::temp_dir().join(format!(
        "questgate-test-{}-{nanos}.db",
        std::process::id()
    ));
    let url = format!("sqlite://{}", pfad.display());
    (pfad, url)
}

#[tokio::test]
async fn state_aufbauen_oeffnet_datenbank_und_migriert() {
    let (pfad, url) = temp_db_url();
    let toml = format!(
        r#"
        [datenbank]
        url = "{url}"

        [auth]
        argon2_speicher_kib = 1024
        argon2_iterationen = 1
        "#
    );
    let config = ServerConfig::aus_toml(&toml).unwrap();
    config.validieren().unwrap();

    let state = Server::neu(config).state_aufbauen().await.unwrap();
    assert!(state.db.ping().await);

    let benutzer = state.auth.registrieren("alice", "secret").await.unwrap();
    let (_, session) = state.auth.anmelden("alice", "secret").await.unwrap();
    assert_eq!(
        state.auth.authentifizieren(Some(&session.token)).await.unwrap(),
        benutzer.id
    );
    assert_eq!(state.auth.session_gueltigkeit(), chrono::Duration::seconds(1200));

    drop(state);
    for endung in ["", "-wal", "-shm"] {
        let _ = std::fs::remove_file(format!("{}{endung}", pfad.display()));
    }
}
