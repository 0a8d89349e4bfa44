use crate::error::{Result, StoreError};
use crate::local_storage::core_local_storage::CoreLocalStorage;
use crate::local_storage::rule::rule_tables::RuleTable;
use crate::models::Rule;
use chrono::Local;
use rusqlite::{OptionalExtension, Row, params};
use std::sync::Arc;

pub struct RuleLocalStorage {
    core_storage: Arc<CoreLocalStorage>,
}

impl RuleLocalStorage {
    pub fn new(core_storage: Arc<CoreLocalStorage>) -> Self {
        RuleLocalStorage { core_storage }
    }

    pub fn create_rule(&self, content: &str) -> Result<Rule> {
        let query = format!(
            "INSERT INTO {} ({}, {}) VALUES (?1, ?2)",
            RuleTable::TABLE_NAME,
            RuleTable::COLUMN_CONTENT,
            RuleTable::COLUMN_UPDATED_ON
        );

        let today = today();
        let conn = self.core_storage.get_connection()?;
        conn.execute(&query, params![content, today])?;
        let id = conn.last_insert_rowid();

        tracing::info!(id, "rule created");
        Ok(Rule {
            id,
            content: content.to_string(),
            updated_on: today,
        })
    }

    pub fn get_rule_by_id(&self, id: i64) -> Result<Option<Rule>> {
        let query = format!(
            "SELECT {}, {}, {} FROM {} WHERE {} = ?",
            RuleTable::COLUMN_ID,
            RuleTable::COLUMN_CONTENT,
            RuleTable::COLUMN_UPDATED_ON,
            RuleTable::TABLE_NAME,
            RuleTable::COLUMN_ID
        );

        let conn = self.core_storage.get_connection()?;
        let rule = conn.query_row(&query, params![id], rule_from_row).optional()?;
        Ok(rule)
    }

    pub fn get_all_rules(&self) -> Result<Vec<Rule>> {
        let query = format!(
            "SELECT {}, {}, {} FROM {} ORDER BY {} ASC",
            RuleTable::COLUMN_ID,
            RuleTable::COLUMN_CONTENT,
            RuleTable::COLUMN_UPDATED_ON,
            RuleTable::TABLE_NAME,
            RuleTable::COLUMN_ID
        );

        let conn = self.core_storage.get_connection()?;
        let mut stmt = conn.prepare(&query)?;
        let rows = stmt.query_map([], rule_from_row)?;

        let mut rules = Vec::new();
        for row in rows {
            rules.push(row?);
        }

        Ok(rules)
    }

    /// Replaces the content and restamps the date.
    pub fn update_rule(&self, id: i64, content: &str) -> Result<()> {
        let query = format!(
            "UPDATE {} SET {} = ?1, {} = ?2 WHERE {} = ?3",
            RuleTable::TABLE_NAME,
            RuleTable::COLUMN_CONTENT,
            RuleTable::COLUMN_UPDATED_ON,
            RuleTable::COLUMN_ID
        );

        let conn = self.core_storage.get_connection()?;
        let affected = conn.execute(&query, params![content, today(), id])?;

        if affected == 0 {
            return Err(StoreError::NotFound { kind: "Rule", id });
        }

        tracing::info!(id, "rule updated");
        Ok(())
    }

    pub fn delete_rule(&self, id: i64) -> Result<()> {
        let affected = self.core_storage.delete(RuleTable::TABLE_NAME, id)?;

        if affected == 0 {
            return Err(StoreError::NotFound { kind: "Rule", id });
        }

        tracing::info!(id, "rule deleted");
        Ok(())
    }
}

fn today() -> String {
    Local::now().date_naive().format("%Y-%m-%d").to_string()
}

fn rule_from_row(row: &Row) -> rusqlite::Result<Rule> {
    Ok(Rule {
        id: row.get(0)?,
        content: row.get(1)?,
        updated_on: row.get(2)?,
    })
}
