use crate::error::{Result, StoreError};
use crate::local_storage::contact::contact_tables::ContactTable;
use crate::local_storage::core_local_storage::CoreLocalStorage;
use crate::models::{Contact, ContactForm};
use rusqlite::{OptionalExtension, Row, params};
use std::sync::Arc;

pub struct ContactLocalStorage {
    core_storage: Arc<CoreLocalStorage>,
}

impl ContactLocalStorage {
    pub fn new(core_storage: Arc<CoreLocalStorage>) -> Self {
        ContactLocalStorage { core_storage }
    }

    pub fn create_contact(&self, form: &ContactForm) -> Result<i64> {
        let placeholders: Vec<String> = (1..=ContactTable::DATA_COLUMNS.len())
            .map(|i| format!("?{}", i))
            .collect();

        let query = format!(
            "INSERT INTO {} ({}) VALUES ({})",
            ContactTable::TABLE_NAME,
            ContactTable::DATA_COLUMNS.join(", "),
            placeholders.join(", ")
        );

        let conn = self.core_storage.get_connection()?;
        conn.execute(&query, rusqlite::params_from_iter(data_values(form)))?;
        let id = conn.last_insert_rowid();

        tracing::info!(id, "contact created");
        Ok(id)
    }

    pub fn get_contact_by_id(&self, id: i64) -> Result<Option<Contact>> {
        let query = format!(
            "SELECT {}, {} FROM {} WHERE {} = ?",
            ContactTable::COLUMN_ID,
            ContactTable::DATA_COLUMNS.join(", "),
            ContactTable::TABLE_NAME,
            ContactTable::COLUMN_ID
        );

        let conn = self.core_storage.get_connection()?;
        let contact = conn
            .query_row(&query, params![id], contact_from_row)
            .optional()?;

        Ok(contact)
    }

    /// All contacts ordered by name, then first surname.
    pub fn get_all_contacts(&self) -> Result<Vec<Contact>> {
        let query = format!(
            "SELECT {}, {} FROM {} ORDER BY {}, {}, {}",
            ContactTable::COLUMN_ID,
            ContactTable::DATA_COLUMNS.join(", "),
            ContactTable::TABLE_NAME,
            ContactTable::COLUMN_NAME,
            ContactTable::COLUMN_FIRST_SURNAME,
            ContactTable::COLUMN_ID
        );

        let conn = self.core_storage.get_connection()?;
        let mut stmt = conn.prepare(&query)?;
        let rows = stmt.query_map([], contact_from_row)?;

        let mut contacts = Vec::new();
        for row in rows {
            contacts.push(row?);
        }

        Ok(contacts)
    }

    pub fn update_contact(&self, id: i64, form: &ContactForm) -> Result<()> {
        let assignments: Vec<String> = ContactTable::DATA_COLUMNS
            .iter()
            .enumerate()
            .map(|(i, column)| format!("{} = ?{}", column, i + 1))
            .collect();

        let query = format!(
            "UPDATE {} SET {} WHERE {} = ?{}",
            ContactTable::TABLE_NAME,
            assignments.join(", "),
            ContactTable::COLUMN_ID,
            ContactTable::DATA_COLUMNS.len() + 1
        );

        let mut values: Vec<Box<dyn rusqlite::ToSql>> = data_values(form)
            .into_iter()
            .map(|value| Box::new(value) as Box<dyn rusqlite::ToSql>)
            .collect();
        values.push(Box::new(id));

        let conn = self.core_storage.get_connection()?;
        let affected = conn.execute(&query, rusqlite::params_from_iter(values))?;

        if affected == 0 {
            return Err(StoreError::NotFound { kind: "Contact", id });
        }

        tracing::info!(id, "contact updated");
        Ok(())
    }

    pub fn delete_contact(&self, id: i64) -> Result<()> {
        let affected = self.core_storage.delete(ContactTable::TABLE_NAME, id)?;

        if affected == 0 {
            return Err(StoreError::NotFound { kind: "Contact", id });
        }

        tracing::info!(id, "contact deleted");
        Ok(())
    }
}

/// Values in `ContactTable::DATA_COLUMNS` order. An empty second surname is
/// stored as NULL.
fn data_values(form: &ContactForm) -> Vec<Option<String>> {
    let second_surname = Some(form.second_surname.clone()).filter(|s| !s.is_empty());

    vec![
        Some(form.name.clone()),
        Some(form.first_surname.clone()),
        second_surname,
        Some(form.phone.clone()),
        Some(form.mobile.clone()),
        Some(form.email.clone()),
        Some(form.address.clone()),
        Some(form.activity.clone()),
        Some(form.note.clone()),
        Some(form.company.clone()),
        Some(form.website.clone()),
        Some(form.skill_level.clone()),
        Some(form.participation.clone()),
    ]
}

fn contact_from_row(row: &Row) -> rusqlite::Result<Contact> {
    let text = |index: usize| -> rusqlite::Result<String> {
        Ok(row.get::<_, Option<String>>(index)?.unwrap_or_default())
    };

    Ok(Contact {
        id: row.get(0)?,
        details: ContactForm {
            name: text(1)?,
            first_surname: text(2)?,
            second_surname: text(3)?,
            phone: text(4)?,
            mobile: text(5)?,
            email: text(6)?,
            address: text(7)?,
            activity: text(8)?,
            note: text(9)?,
            company: text(10)?,
            website: text(11)?,
            skill_level: text(12)?,
            participation: text(13)?,
        },
    })
}
