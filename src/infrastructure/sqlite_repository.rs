//! SQLite persistence for saved flights.
//!
//! One table, one row per saved flight. Ids are random UUIDs and `saved_at`
//! is stored as fixed-width RFC 3339 text so it sorts chronologically.

use crate::application::saved_flight_repository::SavedFlightRepository;
use crate::domain::saved_flight::{NewSavedFlight, Priority, SavedFlight};
use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};
use rusqlite::types::Type;
use rusqlite::{params, Connection, Row};
use std::path::Path;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS saved_flights (
    id TEXT PRIMARY KEY,
    callsign TEXT NOT NULL,
    flight_iata TEXT,
    airline TEXT,
    departure_airport TEXT,
    departure_iata TEXT,
    arrival_airport TEXT,
    arrival_iata TEXT,
    status TEXT,
    notes TEXT,
    priority TEXT NOT NULL DEFAULT 'low' CHECK (priority IN ('low', 'medium', 'high')),
    saved_at TEXT NOT NULL
);
"#;

const SELECT_COLUMNS: &str = "id, callsign, flight_iata, airline, departure_airport, departure_iata, \
     arrival_airport, arrival_iata, status, notes, priority, saved_at";

#[derive(Clone)]
pub struct SqliteSavedFlightRepository {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteSavedFlightRepository {
    /// Open or create the database at `path` (`:memory:` for a private in-memory database).
    pub fn open(path: &str) -> Result<Self> {
        let conn = if path == ":memory:" {
            Connection::open_in_memory()?
        } else {
            if let Some(parent) = Path::new(path).parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)
                        .with_context(|| format!("Failed to create directory for {}", path))?;
                }
            }
            Connection::open(path).with_context(|| format!("Failed to open database {}", path))?
        };

        conn.execute_batch("PRAGMA journal_mode=WAL;")?;
        conn.execute_batch(SCHEMA)?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    pub fn open_in_memory() -> Result<Self> {
        Self::open(":memory:")
    }

    /// Run `f` against the connection on the blocking pool.
    async fn with_conn<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Connection) -> rusqlite::Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let conn = self.conn.clone();
        tokio::task::spawn_blocking(move || {
            let conn = conn
                .lock()
                .map_err(|_| anyhow!("saved flight database lock poisoned"))?;
            f(&conn).context("SQLite statement failed")
        })
        .await
        .context("Database task panicked")?
    }
}

fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}

fn conversion_error<E>(idx: usize, err: E) -> rusqlite::Error
where
    E: std::error::Error + Send + Sync + 'static,
{
    rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(err))
}

fn row_to_saved_flight(row: &Row<'_>) -> rusqlite::Result<SavedFlight> {
    let priority: String = row.get(10)?;
    let saved_at: String = row.get(11)?;

    Ok(SavedFlight {
        id: row.get(0)?,
        flight: NewSavedFlight {
            callsign: row.get(1)?,
            flight_iata: row.get(2)?,
            airline: row.get(3)?,
            departure_airport: row.get(4)?,
            departure_iata: row.get(5)?,
            arrival_airport: row.get(6)?,
            arrival_iata: row.get(7)?,
            status: row.get(8)?,
            notes: row.get(9)?,
            priority: priority
                .parse::<Priority>()
                .map_err(|e| conversion_error(10, e))?,
        },
        saved_at: DateTime::parse_from_rfc3339(&saved_at)
            .map_err(|e| conversion_error(11, e))?
            .with_timezone(&Utc),
    })
}

#[async_trait]
impl SavedFlightRepository for SqliteSavedFlightRepository {
    async fn insert(&self, flight: NewSavedFlight) -> Result<SavedFlight> {
        let saved = SavedFlight {
            id: Uuid::new_v4().to_string(),
            flight,
            saved_at: Utc::now().trunc_subsecs(6),
        };

        let row = saved.clone();
        self.with_conn(move |conn| {
            let f = &row.flight;
            conn.execute(
                "INSERT INTO saved_flights (id, callsign, flight_iata, airline, departure_airport, \
                 departure_iata, arrival_airport, arrival_iata, status, notes, priority, saved_at) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)",
                params![
                    row.id,
                    f.callsign,
                    f.flight_iata,
                    f.airline,
                    f.departure_airport,
                    f.departure_iata,
                    f.arrival_airport,
                    f.arrival_iata,
                    f.status,
                    f.notes,
                    f.priority.as_str(),
                    format_timestamp(&row.saved_at),
                ],
            )
        })
        .await?;

        tracing::debug!("saved flight {} as {}", saved.flight.callsign, saved.id);
        Ok(saved)
    }

    async fn list_newest_first(&self) -> Result<Vec<SavedFlight>> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(&format!(
                "SELECT {} FROM saved_flights ORDER BY saved_at DESC, rowid DESC",
                SELECT_COLUMNS
            ))?;
            let rows = stmt.query_map([], row_to_saved_flight)?;
            rows.collect()
        })
        .await
    }

    async fn delete(&self, id: &str) -> Result<bool> {
        let id = id.to_string();
        let deleted = self
            .with_conn(move |conn| conn.execute("DELETE FROM saved_flights WHERE id = ?1", params![id]))
            .await?;
        Ok(deleted > 0)
    }
}
