use serde::{Deserialize, Serialize};

/// A priced offer. `number` is fixed at creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quotation {
    pub id: i64,
    pub number: String,
    pub author: String,
    pub created_at: String,
    pub recipient: String,
    pub recipient_phone: Option<String>,
    pub activity: String,
    pub item_name: String,
    pub activity_date: String,
    pub quantity: i64,
    pub price: f64,
    pub payment_account: String,
    pub note: String,
}

impl Quotation {
    pub fn total(&self) -> f64 {
        self.quantity as f64 * self.price
    }
}

/// Raw quotation input. Quantity and price arrive as typed text.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct QuotationForm {
    pub author: String,
    pub recipient: String,
    pub recipient_phone: String,
    pub activity: String,
    pub item_name: String,
    pub activity_date: String,
    pub quantity: String,
    pub price: String,
    pub payment_account: String,
    pub note: String,
}

/// Validated quotation fields, ready to be written.
#[derive(Debug, Clone, PartialEq)]
pub struct QuotationDraft {
    pub author: String,
    pub recipient: String,
    pub recipient_phone: Option<String>,
    pub activity: String,
    pub item_name: String,
    pub activity_date: String,
    pub quantity: i64,
    pub price: f64,
    pub payment_account: String,
    pub note: String,
}

impl QuotationDraft {
    pub fn total(&self) -> f64 {
        self.quantity as f64 * self.price
    }
}
