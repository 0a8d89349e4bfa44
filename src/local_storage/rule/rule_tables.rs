/// Provides constants and utilities for working with
/// the "normas" database table.
pub struct RuleTable;

impl RuleTable {
    /// The name of the database table
    pub const TABLE_NAME: &'static str = "normas";

    /// The column name for the primary key identifier of a rule.
    pub const COLUMN_ID: &'static str = "id";

    /// The column name for storing the text of the rule.
    pub const COLUMN_CONTENT: &'static str = "contenido";

    /// The column name for the date of the last write.
    pub const COLUMN_UPDATED_ON: &'static str = "fecha_creacion";

    /// SQL statement for creating the rules table with the defined schema.
    pub fn create_table() -> String {
        format!(
            "CREATE TABLE IF NOT EXISTS {} (
                {} INTEGER PRIMARY KEY AUTOINCREMENT,
                {} TEXT NOT NULL,
                {} TEXT NOT NULL
            )",
            Self::TABLE_NAME,
            Self::COLUMN_ID,
            Self::COLUMN_CONTENT,
            Self::COLUMN_UPDATED_ON
        )
    }
}
