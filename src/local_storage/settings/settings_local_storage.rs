use crate::error::Result;
use crate::local_storage::core_local_storage::CoreLocalStorage;
use crate::local_storage::settings::settings_tables::SettingsTable;
use rusqlite::{OptionalExtension, params};
use std::sync::Arc;

/// Key/value store with upsert semantics. A missing key means "default".
pub struct SettingsLocalStorage {
    core_storage: Arc<CoreLocalStorage>,
}

impl SettingsLocalStorage {
    pub fn new(core_storage: Arc<CoreLocalStorage>) -> Self {
        SettingsLocalStorage { core_storage }
    }

    pub fn get(&self, key: &str) -> Result<Option<String>> {
        let query = format!(
            "SELECT {} FROM {} WHERE {} = ?",
            SettingsTable::COLUMN_VALUE,
            SettingsTable::TABLE_NAME,
            SettingsTable::COLUMN_KEY
        );

        let conn = self.core_storage.get_connection()?;
        let value = conn
            .query_row(&query, params![key], |row| row.get(0))
            .optional()?;

        Ok(value)
    }

    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let query = format!(
            "INSERT INTO {table} ({k}, {v}) VALUES (?1, ?2)
             ON CONFLICT({k}) DO UPDATE SET {v} = excluded.{v}",
            table = SettingsTable::TABLE_NAME,
            k = SettingsTable::COLUMN_KEY,
            v = SettingsTable::COLUMN_VALUE
        );

        let conn = self.core_storage.get_connection()?;
        conn.execute(&query, params![key, value])?;
        tracing::debug!(key, "setting stored");

        Ok(())
    }

    /// Removes a key. Returns whether it existed.
    pub fn delete(&self, key: &str) -> Result<bool> {
        let query = format!(
            "DELETE FROM {} WHERE {} = ?",
            SettingsTable::TABLE_NAME,
            SettingsTable::COLUMN_KEY
        );

        let conn = self.core_storage.get_connection()?;
        let affected = conn.execute(&query, params![key])?;

        Ok(affected > 0)
    }

    pub fn get_flag(&self, key: &str) -> Result<bool> {
        Ok(self.get(key)?.as_deref() == Some("True"))
    }

    pub fn set_flag(&self, key: &str, value: bool) -> Result<()> {
        self.set(key, if value { "True" } else { "False" })
    }
}
