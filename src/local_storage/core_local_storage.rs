use rusqlite::{Connection, params};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::Result;

/// Shared access to the database file. Every call opens its own
/// connection, which is closed when it goes out of scope.
#[derive(Debug, Clone)]
pub struct CoreLocalStorage {
    db_path: PathBuf,
}

impl CoreLocalStorage {
    pub fn new(db_path: impl AsRef<Path>) -> Self {
        CoreLocalStorage {
            db_path: db_path.as_ref().to_path_buf(),
        }
    }

    pub fn get_connection(&self) -> Result<Connection> {
        let conn = Connection::open(&self.db_path)?;
        conn.busy_timeout(Duration::from_secs(3))?;
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        Ok(conn)
    }

    pub fn count(&self, table_name: &str) -> Result<i64> {
        let conn = self.get_connection()?;
        let query = format!("SELECT COUNT(*) FROM {}", table_name);
        let count = conn.query_row(&query, [], |row| row.get(0))?;
        Ok(count)
    }

    /// Deletes by primary key and returns the affected row count.
    pub fn delete(&self, table_name: &str, id: i64) -> Result<usize> {
        let conn = self.get_connection()?;
        let query = format!("DELETE FROM {} WHERE id = ?", table_name);
        let affected = conn.execute(&query, params![id])?;
        Ok(affected)
    }
}
