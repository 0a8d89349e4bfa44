//! Case-insensitive substring search over loaded records.
//!
//! Callers pass freshly read rows on every keystroke; nothing here holds
//! state between calls.

use crate::models::{Contact, Quotation};

/// Fields a record exposes to the search box.
pub trait Searchable {
    fn search_fields(&self) -> Vec<&str>;
}

impl Searchable for Contact {
    fn search_fields(&self) -> Vec<&str> {
        let d = &self.details;
        vec![
            d.name.as_str(),
            d.first_surname.as_str(),
            d.second_surname.as_str(),
            d.phone.as_str(),
            d.mobile.as_str(),
            d.activity.as_str(),
            d.participation.as_str(),
        ]
    }
}

impl Searchable for Quotation {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.number.as_str(),
            self.activity.as_str(),
            self.item_name.as_str(),
            self.recipient.as_str(),
        ]
    }
}

pub fn matches<T: Searchable>(record: &T, query: &str) -> bool {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }

    record
        .search_fields()
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// Keeps the records matching `query`, preserving their order. A blank
/// query keeps everything.
pub fn filter_records<T: Searchable>(records: Vec<T>, query: &str) -> Vec<T> {
    records
        .into_iter()
        .filter(|record| matches(record, query))
        .collect()
}
