use rusqlite::{Connection, OptionalExtension, params};
use std::path::Path;

use super::{BlobError, BlobStore};

/// Blob store backed by a SQLite key/value table.
pub struct SqliteBlobStore {
    conn: Connection,
}

impl SqliteBlobStore {
    pub fn open(path: &Path) -> Result<Self, BlobError> {
        let conn = Connection::open(path)?;
        Self::with_connection(conn)
    }

    pub fn open_in_memory() -> Result<Self, BlobError> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> Result<Self, BlobError> {
        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS blobs (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );
            "#,
        )?;
        Ok(Self { conn })
    }
}

impl BlobStore for SqliteBlobStore {
    fn get(&self, key: &str) -> Result<Option<String>, BlobError> {
        let value = self
            .conn
            .query_row("SELECT value FROM blobs WHERE key = ?1", params![key], |row| {
                row.get(0)
            })
            .optional()?;
        Ok(value)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), BlobError> {
        self.conn.execute(
            r#"
            INSERT INTO blobs (key, value) VALUES (?1, ?2)
            ON CONFLICT(key) DO UPDATE SET value = excluded.value
            "#,
            params![key, value],
        )?;
        Ok(())
    }
}
