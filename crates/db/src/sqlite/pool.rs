//! SQLite-Verbindungspool
//!
//! Jede Verbindung bekommt Fremdschluessel und ein Busy-Timeout, damit
//! parallele Schreiber (z.B. gleichzeitige Registrierungen) aufeinander
//! warten statt mit `SQLITE_BUSY` abzubrechen.

use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};
use tracing::{debug, info};

use crate::error::DbError;
use crate::repository::DatabaseConfig;

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Geteilter Zugriff auf die Questgate-Datenbank; Klone teilen sich den Pool
#[derive(Debug, Clone)]
pub struct SqliteDb {
    pub(crate) pool: SqlitePool,
}

impl SqliteDb {
    /// Oeffnet (und erstellt bei Bedarf) die Datenbankdatei und bringt das Schema auf Stand
    pub async fn oeffnen(config: &DatabaseConfig) -> Result<Self, DbError> {
        let journal = if config.sqlite_wal {
            SqliteJournalMode::Wal
        } else {
            SqliteJournalMode::Delete
        };
        let optionen = verbindungsoptionen(&config.url)?
            .create_if_missing(true)
            .journal_mode(journal);

        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_verbindungen)
            .connect_with(optionen)
            .await?;

        info!(
            url = %config.url,
            wal = config.sqlite_wal,
            max_verbindungen = config.max_verbindungen,
            "SQLite-Pool geoeffnet"
        );

        let db = Self { pool };
        db.migrationen_ausfuehren().await?;
        Ok(db)
    }

    /// Private In-Memory-Datenbank, z.B. fuer Tests
    ///
    /// Der Pool haelt genau eine Verbindung dauerhaft offen; mit ihr
    /// verschwaende sonst die gesamte Datenbank.
    pub async fn in_memory() -> Result<Self, DbError> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(verbindungsoptionen("sqlite::memory:")?)
            .await?;

        let db = Self { pool };
        db.migrationen_ausfuehren().await?;
        Ok(db)
    }

    /// Wendet alle eingebetteten Migrationen aus `migrations/` an
    pub async fn migrationen_ausfuehren(&self) -> Result<(), DbError> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        debug!("Schema auf aktuellem Stand");
        Ok(())
    }

    /// `true` wenn eine Verbindung eine triviale Abfrage beantwortet
    pub async fn ping(&self) -> bool {
        sqlx::query_scalar::<_, i64>("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .is_ok()
    }

    /// Schliesst alle Verbindungen; danach schlaegt jede Abfrage fehl
    pub async fn schliessen(&self) {
        self.pool.close().await;
        info!("SQLite-Pool geschlossen");
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

fn verbindungsoptionen(url: &str) -> Result<SqliteConnectOptions, DbError> {
    Ok(SqliteConnectOptions::from_str(url)?
        .foreign_keys(true)
        .busy_timeout(BUSY_TIMEOUT))
}
