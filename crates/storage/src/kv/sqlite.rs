#![forbid(unsafe_code)]

use super::{MapError, MapLimits, OrderedKvMap};
use rusqlite::{Connection, OptionalExtension, params};
use std::path::{Path, PathBuf};
use std::time::Duration;

const DB_FILE_NAME: &str = "noticeboard.db";
const SCHEMA_VERSION: &str = "v1";

const SCHEMA_SQL: &str = r#"
    PRAGMA journal_mode=WAL;
    PRAGMA synchronous=NORMAL;

    CREATE TABLE IF NOT EXISTS meta (
      key TEXT PRIMARY KEY,
      value TEXT NOT NULL
    );

    -- Keys compare with the default BINARY collation, so ORDER BY key matches
    -- byte-wise string order.
    CREATE TABLE IF NOT EXISTS kv (
      key TEXT PRIMARY KEY,
      value BLOB NOT NULL
    );
"#;

/// SQLite-backed ordered map, one row per entry.
#[derive(Debug)]
pub struct SqliteMap {
    conn: Connection,
    limits: MapLimits,
    storage_dir: Option<PathBuf>,
}

impl SqliteMap {
    pub fn open(storage_dir: impl AsRef<Path>) -> Result<Self, MapError> {
        let storage_dir = storage_dir.as_ref().to_path_buf();
        std::fs::create_dir_all(&storage_dir)?;

        let conn = Connection::open(storage_dir.join(DB_FILE_NAME))?;
        conn.busy_timeout(Duration::from_secs(5))?;
        install_schema(&conn)?;
        tracing::debug!(dir = %storage_dir.display(), "sqlite map opened");

        Ok(Self {
            conn,
            limits: MapLimits::default(),
            storage_dir: Some(storage_dir),
        })
    }

    pub fn open_in_memory() -> Result<Self, MapError> {
        let conn = Connection::open_in_memory()?;
        install_schema(&conn)?;
        Ok(Self {
            conn,
            limits: MapLimits::default(),
            storage_dir: None,
        })
    }

    pub fn with_limits(mut self, limits: MapLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn storage_dir(&self) -> Option<&Path> {
        self.storage_dir.as_deref()
    }

    pub fn schema_version(&self) -> Result<Option<String>, MapError> {
        Ok(self
            .conn
            .query_row(
                "SELECT value FROM meta WHERE key=?1",
                params!["schema_version"],
                |row| row.get::<_, String>(0),
            )
            .optional()?)
    }
}

fn install_schema(conn: &Connection) -> Result<(), MapError> {
    conn.execute_batch(SCHEMA_SQL)?;
    conn.execute(
        "INSERT OR IGNORE INTO meta(key, value) VALUES (?1, ?2)",
        params!["schema_version", SCHEMA_VERSION],
    )?;
    Ok(())
}

fn to_sqlite_i64(value: usize) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

fn select_value(conn: &Connection, key: &str) -> Result<Option<Vec<u8>>, MapError> {
    Ok(conn
        .query_row(
            "SELECT value FROM kv WHERE key=?1",
            params![key],
            |row| row.get::<_, Vec<u8>>(0),
        )
        .optional()?)
}

impl OrderedKvMap for SqliteMap {
    fn limits(&self) -> MapLimits {
        self.limits
    }

    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, MapError> {
        select_value(&self.conn, key)
    }

    fn insert(&mut self, key: &str, value: Vec<u8>) -> Result<Option<Vec<u8>>, MapError> {
        self.limits.check_entry(key, &value)?;

        let tx = self.conn.transaction()?;
        let previous = select_value(&tx, key)?;
        tx.execute(
            r#"
            INSERT INTO kv(key, value) VALUES (?1, ?2)
            ON CONFLICT(key) DO UPDATE SET value=excluded.value
            "#,
            params![key, value],
        )?;
        tx.commit()?;
        Ok(previous)
    }

    fn remove(&mut self, key: &str) -> Result<Option<Vec<u8>>, MapError> {
        let tx = self.conn.transaction()?;
        let previous = select_value(&tx, key)?;
        if previous.is_some() {
            tx.execute("DELETE FROM kv WHERE key=?1", params![key])?;
        }
        tx.commit()?;
        Ok(previous)
    }

    fn contains_key(&self, key: &str) -> Result<bool, MapError> {
        Ok(self
            .conn
            .query_row("SELECT 1 FROM kv WHERE key=?1", params![key], |row| {
                row.get::<_, i64>(0)
            })
            .optional()?
            .is_some())
    }

    fn keys(&self) -> Result<Vec<String>, MapError> {
        let mut stmt = self.conn.prepare("SELECT key FROM kv ORDER BY key ASC")?;
        let mut rows = stmt.query([])?;
        let mut out = Vec::new();
        while let Some(row) = rows.next()? {
            out.push(row.get::<_, String>(0)?);
        }
        Ok(out)
    }

    fn entries(&self) -> Result<Vec<(String, Vec<u8>)>, MapError> {
        let mut stmt = self
            .conn
            .prepare("SELECT key, value FROM kv ORDER BY key ASC")?;
        let mut rows = stmt.query([])?;
        let mut out = Vec::new();
        while let Some(row) = rows.next()? {
            out.push((row.get::<_, String>(0)?, row.get::<_, Vec<u8>>(1)?));
        }
        Ok(out)
    }

    fn entries_range(
        &self,
        offset: usize,
        limit: usize,
    ) -> Result<Vec<(String, Vec<u8>)>, MapError> {
        let mut stmt = self.conn.prepare(
            "SELECT key, value FROM kv \
             ORDER BY key ASC \
             LIMIT ?1 OFFSET ?2",
        )?;
        let mut rows = stmt.query(params![to_sqlite_i64(limit), to_sqlite_i64(offset)])?;
        let mut out = Vec::new();
        while let Some(row) = rows.next()? {
            out.push((row.get::<_, String>(0)?, row.get::<_, Vec<u8>>(1)?));
        }
        Ok(out)
    }

    fn len(&self) -> Result<u64, MapError> {
        let count = self
            .conn
            .query_row("SELECT COUNT(1) FROM kv", [], |row| row.get::<_, i64>(0))?;
        Ok(u64::try_from(count).unwrap_or(0))
    }
}
