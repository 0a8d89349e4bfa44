use crate::error::{Result, StoreError};
use crate::local_storage::core_local_storage::CoreLocalStorage;
use crate::local_storage::quotation::quotation_sequence;
use crate::local_storage::quotation::quotation_tables::QuotationTable;
use crate::models::{Quotation, QuotationDraft};
use chrono::Local;
use rusqlite::{OptionalExtension, Row, TransactionBehavior, params};
use std::sync::Arc;

const CREATED_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub struct QuotationLocalStorage {
    core_storage: Arc<CoreLocalStorage>,
}

impl QuotationLocalStorage {
    pub fn new(core_storage: Arc<CoreLocalStorage>) -> Self {
        QuotationLocalStorage { core_storage }
    }

    /// Issues the next number and inserts the quotation in one transaction.
    /// When the insert fails the counter is rolled back with it.
    pub fn create_quotation(&self, draft: &QuotationDraft) -> Result<Quotation> {
        let mut conn = self.core_storage.get_connection()?;
        let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

        let number = quotation_sequence::advance(&tx)?;
        let created_at = Local::now().format(CREATED_AT_FORMAT).to_string();

        let query = format!(
            "INSERT INTO {} ({}, {}, {}) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)",
            QuotationTable::TABLE_NAME,
            QuotationTable::COLUMN_NUMBER,
            QuotationTable::COLUMN_CREATED_AT,
            QuotationTable::EDITABLE_COLUMNS.join(", ")
        );

        tx.execute(
            &query,
            params![
                number,
                created_at,
                draft.author,
                draft.recipient,
                draft.activity,
                draft.item_name,
                draft.activity_date,
                draft.quantity,
                draft.price,
                draft.payment_account,
                draft.note,
                draft.recipient_phone,
            ],
        )
        .map_err(StoreError::from_constraint)?;

        let id = tx.last_insert_rowid();
        tx.commit()?;

        tracing::info!(id, number = %number, "quotation created");

        Ok(Quotation {
            id,
            number,
            author: draft.author.clone(),
            created_at,
            recipient: draft.recipient.clone(),
            recipient_phone: draft.recipient_phone.clone(),
            activity: draft.activity.clone(),
            item_name: draft.item_name.clone(),
            activity_date: draft.activity_date.clone(),
            quantity: draft.quantity,
            price: draft.price,
            payment_account: draft.payment_account.clone(),
            note: draft.note.clone(),
        })
    }

    pub fn get_quotation_by_id(&self, id: i64) -> Result<Option<Quotation>> {
        let query = format!(
            "SELECT {} FROM {} WHERE {} = ?",
            QuotationTable::select_columns(),
            QuotationTable::TABLE_NAME,
            QuotationTable::COLUMN_ID
        );

        let conn = self.core_storage.get_connection()?;
        let quotation = conn
            .query_row(&query, params![id], quotation_from_row)
            .optional()?;

        Ok(quotation)
    }

    /// All quotations, newest first.
    pub fn get_all_quotations(&self) -> Result<Vec<Quotation>> {
        let query = format!(
            "SELECT {} FROM {} ORDER BY {} DESC, {} DESC",
            QuotationTable::select_columns(),
            QuotationTable::TABLE_NAME,
            QuotationTable::COLUMN_CREATED_AT,
            QuotationTable::COLUMN_ID
        );

        let conn = self.core_storage.get_connection()?;
        let mut stmt = conn.prepare(&query)?;
        let rows = stmt.query_map([], quotation_from_row)?;

        let mut quotations = Vec::new();
        for row in rows {
            quotations.push(row?);
        }

        Ok(quotations)
    }

    /// Rewrites every editable column. The number and creation date stay.
    pub fn update_quotation(&self, id: i64, draft: &QuotationDraft) -> Result<()> {
        let assignments: Vec<String> = QuotationTable::EDITABLE_COLUMNS
            .iter()
            .enumerate()
            .map(|(i, column)| format!("{} = ?{}", column, i + 1))
            .collect();

        let query = format!(
            "UPDATE {} SET {} WHERE {} = ?{}",
            QuotationTable::TABLE_NAME,
            assignments.join(", "),
            QuotationTable::COLUMN_ID,
            QuotationTable::EDITABLE_COLUMNS.len() + 1
        );

        let conn = self.core_storage.get_connection()?;
        let affected = conn.execute(
            &query,
            params![
                draft.author,
                draft.recipient,
                draft.activity,
                draft.item_name,
                draft.activity_date,
                draft.quantity,
                draft.price,
                draft.payment_account,
                draft.note,
                draft.recipient_phone,
                id,
            ],
        )?;

        if affected == 0 {
            return Err(StoreError::NotFound {
                kind: "Quotation",
                id,
            });
        }

        tracing::info!(id, "quotation updated");
        Ok(())
    }

    /// Deleting never returns the number to the sequence.
    pub fn delete_quotation(&self, id: i64) -> Result<()> {
        let affected = self.core_storage.delete(QuotationTable::TABLE_NAME, id)?;

        if affected == 0 {
            return Err(StoreError::NotFound {
                kind: "Quotation",
                id,
            });
        }

        tracing::info!(id, "quotation deleted");
        Ok(())
    }
}

fn quotation_from_row(row: &Row) -> rusqlite::Result<Quotation> {
    Ok(Quotation {
        id: row.get(0)?,
        number: row.get(1)?,
        author: row.get(2)?,
        created_at: row.get(3)?,
        recipient: row.get(4)?,
        recipient_phone: row.get(5)?,
        activity: row.get(6)?,
        item_name: row.get(7)?,
        activity_date: row.get(8)?,
        quantity: row.get(9)?,
        price: row.get(10)?,
        payment_account: row.get::<_, Option<String>>(11)?.unwrap_or_default(),
        note: row.get::<_, Option<String>>(12)?.unwrap_or_default(),
    })
}
