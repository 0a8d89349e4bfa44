//! Quotation number sequence.
//!
//! The last issued number lives in `app_settings` under
//! [`SettingKey::QUOTATION_COUNTER`]. Numbers are six zero-padded digits and
//! are never handed out twice: the counter only moves forward, and only
//! inside a write transaction.

use crate::error::{Result, StoreError};
use crate::local_storage::core_local_storage::CoreLocalStorage;
use crate::local_storage::quotation::quotation_tables::QuotationTable;
use crate::local_storage::settings::{SettingKey, SettingsTable};
use rusqlite::{Connection, OptionalExtension, TransactionBehavior, params};
use std::sync::Arc;

/// Logical counter value before the first quotation. The first number is 000150.
pub const DEFAULT_COUNTER: i64 = 149;

/// Width of a formatted quotation number.
pub const NUMBER_WIDTH: usize = 6;

const MAX_NUMBER: i64 = 999_999;

pub fn format_number(value: i64) -> String {
    format!("{:0width$}", value, width = NUMBER_WIDTH)
}

pub struct QuotationSequence {
    core_storage: Arc<CoreLocalStorage>,
}

impl QuotationSequence {
    pub fn new(core_storage: Arc<CoreLocalStorage>) -> Self {
        QuotationSequence { core_storage }
    }

    /// The number the next quotation would receive. Writes nothing.
    pub fn peek_next(&self) -> Result<String> {
        let conn = self.core_storage.get_connection()?;
        let current = current_value(&conn)?;
        checked_next(current).map(format_number)
    }

    /// Advances the counter and returns the newly issued number.
    pub fn increment_and_get(&self) -> Result<String> {
        let mut conn = self.core_storage.get_connection()?;
        let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;
        let number = advance(&tx)?;
        tx.commit()?;

        tracing::info!(number = %number, "quotation number issued");
        Ok(number)
    }
}

/// Reads the last issued value, falling back to [`DEFAULT_COUNTER`]. Never
/// lower than the highest number already stored, so a lost counter row cannot
/// hand out a number that is taken.
pub(crate) fn current_value(conn: &Connection) -> Result<i64> {
    let query = format!(
        "SELECT {} FROM {} WHERE {} = ?",
        SettingsTable::COLUMN_VALUE,
        SettingsTable::TABLE_NAME,
        SettingsTable::COLUMN_KEY
    );

    let stored: Option<String> = conn
        .query_row(&query, params![SettingKey::QUOTATION_COUNTER], |row| row.get(0))
        .optional()?;

    let counter = match stored {
        None => DEFAULT_COUNTER,
        Some(raw) => raw
            .trim()
            .parse::<i64>()
            .ok()
            .filter(|value| *value >= 0)
            .ok_or(StoreError::CorruptSetting {
                key: SettingKey::QUOTATION_COUNTER.to_string(),
                value: raw,
            })?,
    };

    Ok(counter.max(highest_issued(conn)?.unwrap_or(0)))
}

fn highest_issued(conn: &Connection) -> Result<Option<i64>> {
    let query = format!(
        "SELECT MAX(CAST({} AS INTEGER)) FROM {}",
        QuotationTable::COLUMN_NUMBER,
        QuotationTable::TABLE_NAME
    );

    let highest = conn.query_row(&query, [], |row| row.get(0))?;
    Ok(highest)
}

fn checked_next(current: i64) -> Result<i64> {
    if current >= MAX_NUMBER {
        return Err(StoreError::SequenceExhausted(current));
    }
    Ok(current + 1)
}

/// Stores the next value and returns it formatted. Must run inside a write
/// transaction so the caller can roll the increment back together with
/// whatever it writes next.
pub(crate) fn advance(conn: &Connection) -> Result<String> {
    let next = checked_next(current_value(conn)?)?;

    let query = format!(
        "INSERT INTO {table} ({k}, {v}) VALUES (?1, ?2)
         ON CONFLICT({k}) DO UPDATE SET {v} = excluded.{v}
         RETURNING CAST({v} AS INTEGER)",
        table = SettingsTable::TABLE_NAME,
        k = SettingsTable::COLUMN_KEY,
        v = SettingsTable::COLUMN_VALUE
    );

    let issued: i64 = conn.query_row(
        &query,
        params![SettingKey::QUOTATION_COUNTER, next.to_string()],
        |row| row.get(0),
    )?;

    Ok(format_number(issued))
}
