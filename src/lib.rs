pub mod config;
pub mod controller;
pub mod error;
pub mod local_storage;
pub mod models;
pub mod services;

#[cfg(test)]
mod test;

use local_storage::contact::ContactTable;
use local_storage::quotation::QuotationTable;
use local_storage::rule::RuleTable;
use local_storage::settings::SettingsTable;
use local_storage::user::UserTable;
use std::fs;
use std::path::Path;

pub use config::Config;
pub use controller::Controller;
pub use error::{Result, StoreError};

/// Creates the database file, its parent directory and every table that
/// does not exist yet.
pub fn initialize_database(db_path: impl AsRef<Path>) -> Result<()> {
    let db_path = db_path.as_ref();
    if let Some(dir) = db_path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(dir)?;
    }

    let conn = rusqlite::Connection::open(db_path)?;

    conn.execute("PRAGMA foreign_keys = ON;", [])?;

    conn.execute(&UserTable::create_table(), [])?;
    conn.execute(&ContactTable::create_table(), [])?;
    conn.execute(&QuotationTable::create_table(), [])?;
    conn.execute(&RuleTable::create_table(), [])?;
    conn.execute(&SettingsTable::create_table(), [])?;

    tracing::debug!(path = %db_path.display(), "schema initialized");
    Ok(())
}
