/// Provides constants and utilities for working with
/// the "cotizaciones" database table.
pub struct QuotationTable;

impl QuotationTable {
    /// The name of the database table
    pub const TABLE_NAME: &'static str = "cotizaciones";

    /// The column name for the primary key identifier of a quotation.
    pub const COLUMN_ID: &'static str = "id";

    /// The column name for the six digit quotation number. Unique.
    pub const COLUMN_NUMBER: &'static str = "numero_cotizacion";

    /// The column name for the staff member who issued the quotation.
    pub const COLUMN_AUTHOR: &'static str = "quien_hace_cotizacion";

    /// The column name for the creation timestamp, stamped on insert only.
    pub const COLUMN_CREATED_AT: &'static str = "fecha_automatica";

    pub const COLUMN_RECIPIENT: &'static str = "dirigido_a";
    pub const COLUMN_ACTIVITY: &'static str = "actividad";
    pub const COLUMN_ITEM_NAME: &'static str = "nombre_item";
    pub const COLUMN_ACTIVITY_DATE: &'static str = "fecha_actividad";
    pub const COLUMN_QUANTITY: &'static str = "cantidad";
    pub const COLUMN_PRICE: &'static str = "precio";

    /// The column name for the payment transfer account reference.
    pub const COLUMN_PAYMENT_ACCOUNT: &'static str = "sinpe";

    pub const COLUMN_NOTE: &'static str = "nota";
    pub const COLUMN_RECIPIENT_PHONE: &'static str = "telefono_cliente";

    /// Columns an edit may change. Number and creation date are excluded.
    pub const EDITABLE_COLUMNS: [&'static str; 10] = [
        Self::COLUMN_AUTHOR,
        Self::COLUMN_RECIPIENT,
        Self::COLUMN_ACTIVITY,
        Self::COLUMN_ITEM_NAME,
        Self::COLUMN_ACTIVITY_DATE,
        Self::COLUMN_QUANTITY,
        Self::COLUMN_PRICE,
        Self::COLUMN_PAYMENT_ACCOUNT,
        Self::COLUMN_NOTE,
        Self::COLUMN_RECIPIENT_PHONE,
    ];

    /// SQL statement for creating the quotations table with the defined schema.
    pub fn create_table() -> String {
        format!(
            "CREATE TABLE IF NOT EXISTS {} (
                {} INTEGER PRIMARY KEY AUTOINCREMENT,
                {} TEXT UNIQUE NOT NULL,
                {} TEXT NOT NULL,
                {} TEXT NOT NULL,
                {} TEXT NOT NULL,
                {} TEXT NOT NULL,
                {} TEXT NOT NULL,
                {} TEXT NOT NULL,
                {} INTEGER NOT NULL,
                {} REAL NOT NULL,
                {} TEXT,
                {} TEXT,
                {} TEXT
            )",
            Self::TABLE_NAME,
            Self::COLUMN_ID,
            Self::COLUMN_NUMBER,
            Self::COLUMN_AUTHOR,
            Self::COLUMN_CREATED_AT,
            Self::COLUMN_RECIPIENT,
            Self::COLUMN_ACTIVITY,
            Self::COLUMN_ITEM_NAME,
            Self::COLUMN_ACTIVITY_DATE,
            Self::COLUMN_QUANTITY,
            Self::COLUMN_PRICE,
            Self::COLUMN_PAYMENT_ACCOUNT,
            Self::COLUMN_NOTE,
            Self::COLUMN_RECIPIENT_PHONE
        )
    }

    /// Column list in the order `Quotation` rows are read.
    pub fn select_columns() -> String {
        [
            Self::COLUMN_ID,
            Self::COLUMN_NUMBER,
            Self::COLUMN_AUTHOR,
            Self::COLUMN_CREATED_AT,
            Self::COLUMN_RECIPIENT,
            Self::COLUMN_RECIPIENT_PHONE,
            Self::COLUMN_ACTIVITY,
            Self::COLUMN_ITEM_NAME,
            Self::COLUMN_ACTIVITY_DATE,
            Self::COLUMN_QUANTITY,
            Self::COLUMN_PRICE,
            Self::COLUMN_PAYMENT_ACCOUNT,
            Self::COLUMN_NOTE,
        ]
        .join(", ")
    }
}
