/// Provides constants and utilities for working with
/// the "usuarios" database table.
pub struct UserTable;

impl UserTable {
    /// The name of the database table
    pub const TABLE_NAME: &'static str = "usuarios";

    /// The column name for the primary key identifier of a user.
    pub const COLUMN_ID: &'static str = "id";

    /// The column name for storing the user's given name.
    pub const COLUMN_NAME: &'static str = "nombre";

    /// The column name for storing the user's first surname.
    pub const COLUMN_FIRST_SURNAME: &'static str = "p_apellido";

    /// The column name for storing the user's optional second surname.
    pub const COLUMN_SECOND_SURNAME: &'static str = "s_apellido";

    /// The column name for the unique login name.
    pub const COLUMN_USERNAME: &'static str = "usuario";

    /// The column name for the unique email address.
    pub const COLUMN_EMAIL: &'static str = "email";

    /// The column name for the optional phone number.
    pub const COLUMN_PHONE: &'static str = "telefono";

    /// The column name for the PHC encoded password hash.
    pub const COLUMN_PASSWORD_HASH: &'static str = "password_hash";

    /// SQL statement for creating the users table with the defined schema.
    pub fn create_table() -> String {
        format!(
            "CREATE TABLE IF NOT EXISTS {} (
                {} INTEGER PRIMARY KEY AUTOINCREMENT,
                {} TEXT NOT NULL,
                {} TEXT NOT NULL,
                {} TEXT,
                {} TEXT UNIQUE NOT NULL,
                {} TEXT UNIQUE NOT NULL,
                {} TEXT,
                {} TEXT NOT NULL
            )",
            Self::TABLE_NAME,
            Self::COLUMN_ID,
            Self::COLUMN_NAME,
            Self::COLUMN_FIRST_SURNAME,
            Self::COLUMN_SECOND_SURNAME,
            Self::COLUMN_USERNAME,
            Self::COLUMN_EMAIL,
            Self::COLUMN_PHONE,
            Self::COLUMN_PASSWORD_HASH
        )
    }

    /// Column list in the order `User` rows are read.
    pub fn select_columns() -> String {
        [
            Self::COLUMN_ID,
            Self::COLUMN_NAME,
            Self::COLUMN_FIRST_SURNAME,
            Self::COLUMN_SECOND_SURNAME,
            Self::COLUMN_USERNAME,
            Self::COLUMN_EMAIL,
            Self::COLUMN_PHONE,
            Self::COLUMN_PASSWORD_HASH,
        ]
        .join(", ")
    }
}
