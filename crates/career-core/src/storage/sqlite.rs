//! SQLite storage adapter.

use std::path::Path;

use jiff::Timestamp;
use rusqlite::{params, Connection, OptionalExtension};
use serde_json::Value;

use super::Storage;
use crate::error::{DatabaseResultExt, Result};

const SELECT_VALUE_SQL: &str = "SELECT value FROM kv WHERE key = ?1";

const UPSERT_VALUE_SQL: &str = "INSERT INTO kv (key, value, updated_at) VALUES (?1, ?2, ?3)
     ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at";

const COPY_VALUE_SQL: &str = "INSERT INTO kv (key, value, updated_at)
     SELECT ?2, value, ?3 FROM kv WHERE key = ?1
     ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at";

/// Storage backed by a single-table SQLite database.
pub struct SqliteStorage {
    connection: Connection,
}

impl SqliteStorage {
    /// Opens (creating if needed) the database file and initializes the
    /// schema.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;
        Self::with_connection(connection)
    }

    /// Opens a private in-memory database.
    pub fn open_in_memory() -> Result<Self> {
        let connection =
            Connection::open_in_memory().db_context("Failed to open in-memory database")?;
        Self::with_connection(connection)
    }

    fn with_connection(connection: Connection) -> Result<Self> {
        let storage = Self { connection };
        storage.initialize_schema()?;
        Ok(storage)
    }

    /// Initializes the database schema using the embedded SQL file.
    fn initialize_schema(&self) -> Result<()> {
        let schema_sql = include_str!("../../assets/schema.sql");
        self.connection
            .execute_batch(schema_sql)
            .db_context("Failed to initialize database schema")
    }
}

impl Storage for SqliteStorage {
    fn load(&self, key: &str) -> Result<Option<Value>> {
        let raw: Option<String> = self
            .connection
            .query_row(SELECT_VALUE_SQL, params![key], |row| row.get(0))
            .optional()
            .db_context("Failed to query stored value")?;

        Ok(raw.map(|text| serde_json::from_str(&text)).transpose()?)
    }

    fn save(&mut self, key: &str, value: &Value) -> Result<()> {
        let text = serde_json::to_string(value)?;
        let now = Timestamp::now().to_string();

        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;
        tx.execute(UPSERT_VALUE_SQL, params![key, text, now])
            .db_context("Failed to store value")?;
        tx.commit().db_context("Failed to commit transaction")
    }

    fn copy(&mut self, from: &str, to: &str) -> Result<bool> {
        let now = Timestamp::now().to_string();
        let copied = self
            .connection
            .execute(COPY_VALUE_SQL, params![from, to, now])
            .db_context("Failed to copy stored value")?;
        Ok(copied > 0)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_values_survive_reopen() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let db_path = temp_dir.path().join("career.db");

        {
            let mut storage = SqliteStorage::open(&db_path).unwrap();
            storage.save("careerData", &json!({ "title": "Plan" })).unwrap();
        }

        let storage = SqliteStorage::open(&db_path).unwrap();
        assert_eq!(
            storage.load("careerData").unwrap(),
            Some(json!({ "title": "Plan" }))
        );
        assert!(storage.load("user").unwrap().is_none());
    }

    #[test]
    fn test_save_replaces_previous_value() {
        let mut storage = SqliteStorage::open_in_memory().unwrap();
        storage.save("k", &json!([1])).unwrap();
        storage.save("k", &json!([1, 2])).unwrap();

        assert_eq!(storage.load("k").unwrap(), Some(json!([1, 2])));
    }

    #[test]
    fn test_corrupt_value_is_serialization_error() {
        let mut storage = SqliteStorage::open_in_memory().unwrap();
        storage
            .connection
            .execute(
                "INSERT INTO kv (key, value, updated_at) VALUES ('k', '{not json', 'now')",
                [],
            )
            .unwrap();

        assert!(matches!(
            storage.load("k"),
            Err(crate::PlannerError::Serialization { .. })
        ));
        storage.save("k", &json!(null)).unwrap();
    }

    #[test]
    fn test_copy_keeps_unparsable_text() {
        let mut storage = SqliteStorage::open_in_memory().unwrap();
        storage
            .connection
            .execute(
                "INSERT INTO kv (key, value, updated_at) VALUES ('k', '{\"years\":[', 'now')",
                [],
            )
            .unwrap();

        assert!(storage.copy("k", "backup").unwrap());
        assert!(!storage.copy("missing", "backup").unwrap());

        storage.save("k", &json!({ "years": [] })).unwrap();
        let backup: String = storage
            .connection
            .query_row(SELECT_VALUE_SQL, params!["backup"], |row| row.get(0))
            .unwrap();
        assert_eq!(backup, "{\"years\":[");
    }
}
