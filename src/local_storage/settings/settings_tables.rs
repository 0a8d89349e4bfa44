/// Provides constants and utilities for working with
/// the "app_settings" key/value table.
pub struct SettingsTable;

impl SettingsTable {
    /// The name of the database table
    pub const TABLE_NAME: &'static str = "app_settings";

    /// The column name for the setting key. Primary key.
    pub const COLUMN_KEY: &'static str = "key";

    /// The column name for the stored value, always text.
    pub const COLUMN_VALUE: &'static str = "value";

    /// SQL statement for creating the settings table with the defined schema.
    pub fn create_table() -> String {
        format!(
            "CREATE TABLE IF NOT EXISTS {} (
                {} TEXT PRIMARY KEY NOT NULL,
                {} TEXT NOT NULL
            )",
            Self::TABLE_NAME,
            Self::COLUMN_KEY,
            Self::COLUMN_VALUE
        )
    }
}

/// Keys written by the application.
pub struct SettingKey;

impl SettingKey {
    /// Last issued quotation number, as a decimal integer.
    pub const QUOTATION_COUNTER: &'static str = "last_quotation_number";

    /// Username or email remembered at the last login.
    pub const REMEMBERED_IDENTIFIER: &'static str = "remembered_identifier";

    /// "True" or "False".
    pub const REMEMBER_ME: &'static str = "remember_me";

    /// Password hash the remembered login was verified against.
    pub const REMEMBERED_CREDENTIAL: &'static str = "remembered_credential";
}
