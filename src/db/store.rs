use anyhow::Result;
use rusqlite::{params, Connection, OptionalExtension};

/// String key-value store over the local database.
///
/// Handed by reference to whatever needs persisted state; every write
/// replaces the whole value stored under its key.
pub struct KvStore<'c> {
    conn: &'c Connection,
}

impl<'c> KvStore<'c> {
    pub fn new(conn: &'c Connection) -> Self {
        Self { conn }
    }

    pub fn get(&self, key: &str) -> Result<Option<String>> {
        log::debug!("kv get {}", key);
        self.conn
            .query_row(
                "SELECT value FROM kv_store WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()
            .map_err(anyhow::Error::from)
    }

    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        log::debug!("kv set {} ({} bytes)", key, value.len());
        self.conn.execute(
            "INSERT INTO kv_store (key, value, updated_at) VALUES (?1, ?2, datetime('now'))
             ON CONFLICT(key) DO UPDATE SET value = ?2, updated_at = datetime('now')",
            params![key, value],
        )?;
        Ok(())
    }

    /// Returns whether a value was stored under `key`.
    pub fn remove(&self, key: &str) -> Result<bool> {
        log::debug!("kv remove {}", key);
        let removed = self
            .conn
            .execute("DELETE FROM kv_store WHERE key = ?1", params![key])?;
        Ok(removed > 0)
    }

    /// Drop every key.
    pub fn clear(&self) -> Result<()> {
        log::info!("clearing all stored data");
        self.conn.execute("DELETE FROM kv_store", [])?;
        Ok(())
    }

    pub fn keys(&self) -> Result<Vec<String>> {
        let mut stmt = self.conn.prepare("SELECT key FROM kv_store ORDER BY key")?;
        let keys = stmt
            .query_map([], |row| row.get(0))?
            .collect::<rusqlite::Result<Vec<String>>>()?;
        Ok(keys)
    }
}
