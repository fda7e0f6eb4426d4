use rusqlite::{Connection, OptionalExtension, params};
use std::path::Path;

use crate::{KeyValueStore, Result};

// NOTE: Storage Design Rationale
//
// Why a single kv table (not one table per entity)?
// - The only durable state is the favorites collection, written as one JSON value
// - Snapshots embed full item records, so there is nothing to join against
// - Whole-value upserts mean no read-modify-write within a session
//
// Why SQLite (not a plain file)?
// - Atomic replace of the value comes for free
// - Leaves room for more keys without inventing a file layout

pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    pub fn open(db_path: &Path) -> Result<Self> {
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(db_path)?;
        let store = Self { conn };
        store.init_schema()?;
        tracing::debug!(path = %db_path.display(), "opened sqlite store");
        Ok(store)
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Self { conn };
        store.init_schema()?;
        Ok(store)
    }

    fn init_schema(&self) -> Result<()> {
        self.conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS kv (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );
            "#,
        )?;

        Ok(())
    }
}

impl KeyValueStore for SqliteStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let value = self
            .conn
            .query_row("SELECT value FROM kv WHERE key = ?1", [key], |row| {
                row.get(0)
            })
            .optional()?;

        Ok(value)
    }

    fn put(&mut self, key: &str, value: &str) -> Result<()> {
        self.conn.execute(
            r#"
            INSERT INTO kv (key, value)
            VALUES (?1, ?2)
            ON CONFLICT(key) DO UPDATE SET
                value = ?2
            "#,
            params![key, value],
        )?;

        Ok(())
    }

    fn delete(&mut self, key: &str) -> Result<()> {
        self.conn.execute("DELETE FROM kv WHERE key = ?1", [key])?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_put_get_roundtrip() -> Result<()> {
        let mut store = SqliteStore::open_in_memory()?;
        assert_eq!(store.get("favorites")?, None);

        store.put("favorites", "[]")?;
        assert_eq!(store.get("favorites")?.as_deref(), Some("[]"));

        store.put("favorites", "[[]]")?;
        assert_eq!(store.get("favorites")?.as_deref(), Some("[[]]"));
        Ok(())
    }

    #[test]
    fn test_delete_missing_key_is_ok() -> Result<()> {
        let mut store = SqliteStore::open_in_memory()?;
        store.delete("nothing")?;
        Ok(())
    }
}
