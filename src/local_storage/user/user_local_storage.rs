use crate::error::{Result, StoreError};
use crate::local_storage::core_local_storage::CoreLocalStorage;
use crate::local_storage::user::user_tables::UserTable;
use crate::models::{NewUser, User};
use rusqlite::{OptionalExtension, Row, params};
use std::sync::Arc;

pub struct UserLocalStorage {
    core_storage: Arc<CoreLocalStorage>,
}

impl UserLocalStorage {
    pub fn new(core_storage: Arc<CoreLocalStorage>) -> Self {
        UserLocalStorage { core_storage }
    }

    /// Inserts a user. Username and email clashes come back as
    /// `StoreError::Duplicate`.
    pub fn create_user(&self, user: &NewUser) -> Result<i64> {
        let query = format!(
            "INSERT INTO {} ({}, {}, {}, {}, {}, {}, {}) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            UserTable::TABLE_NAME,
            UserTable::COLUMN_NAME,
            UserTable::COLUMN_FIRST_SURNAME,
            UserTable::COLUMN_SECOND_SURNAME,
            UserTable::COLUMN_USERNAME,
            UserTable::COLUMN_EMAIL,
            UserTable::COLUMN_PHONE,
            UserTable::COLUMN_PASSWORD_HASH
        );

        let conn = self.core_storage.get_connection()?;
        conn.execute(
            &query,
            params![
                user.name,
                user.first_surname,
                user.second_surname,
                user.username,
                user.email,
                user.phone,
                user.password_hash,
            ],
        )
        .map_err(StoreError::from_constraint)?;

        let id = conn.last_insert_rowid();
        tracing::info!(id, username = %user.username, "user registered");

        Ok(id)
    }

    pub fn get_user_by_id(&self, id: i64) -> Result<Option<User>> {
        let query = format!(
            "SELECT {} FROM {} WHERE {} = ?",
            UserTable::select_columns(),
            UserTable::TABLE_NAME,
            UserTable::COLUMN_ID
        );

        let conn = self.core_storage.get_connection()?;
        let user = conn.query_row(&query, params![id], user_from_row).optional()?;
        Ok(user)
    }

    /// Looks a user up by username or email.
    pub fn get_user_by_identifier(&self, identifier: &str) -> Result<Option<User>> {
        let query = format!(
            "SELECT {} FROM {} WHERE {} = ?1 OR {} = ?1 ORDER BY {} LIMIT 1",
            UserTable::select_columns(),
            UserTable::TABLE_NAME,
            UserTable::COLUMN_USERNAME,
            UserTable::COLUMN_EMAIL,
            UserTable::COLUMN_ID
        );

        let conn = self.core_storage.get_connection()?;
        let user = conn
            .query_row(&query, params![identifier], user_from_row)
            .optional()?;
        Ok(user)
    }
}

fn user_from_row(row: &Row) -> rusqlite::Result<User> {
    Ok(User {
        id: row.get(0)?,
        name: row.get(1)?,
        first_surname: row.get(2)?,
        second_surname: row.get(3)?,
        username: row.get(4)?,
        email: row.get(5)?,
        phone: row.get(6)?,
        password_hash: row.get(7)?,
    })
}
