/// Provides constants and utilities for working with
/// the "contactos" database table.
pub struct ContactTable;

impl ContactTable {
    /// The name of the database table
    pub const TABLE_NAME: &'static str = "contactos";

    /// The column name for the primary key identifier of a contact.
    pub const COLUMN_ID: &'static str = "id";

    pub const COLUMN_NAME: &'static str = "nombre";
    pub const COLUMN_FIRST_SURNAME: &'static str = "primer_apellido";
    pub const COLUMN_SECOND_SURNAME: &'static str = "segundo_apellido";
    pub const COLUMN_PHONE: &'static str = "telefono";
    pub const COLUMN_MOBILE: &'static str = "movil";
    pub const COLUMN_EMAIL: &'static str = "email";
    pub const COLUMN_ADDRESS: &'static str = "direccion";

    /// The column name for the activity, one of the agenda's activity options.
    pub const COLUMN_ACTIVITY: &'static str = "actividad";

    pub const COLUMN_NOTE: &'static str = "nota";
    pub const COLUMN_COMPANY: &'static str = "empresa";
    pub const COLUMN_WEBSITE: &'static str = "sitio_web";

    /// The column name for the skill level option.
    pub const COLUMN_SKILL_LEVEL: &'static str = "capacidad_persona";

    /// The column name for the participation type option.
    pub const COLUMN_PARTICIPATION: &'static str = "participacion";

    /// Every editable column, in the order they are bound on insert and update.
    pub const DATA_COLUMNS: [&'static str; 13] = [
        Self::COLUMN_NAME,
        Self::COLUMN_FIRST_SURNAME,
        Self::COLUMN_SECOND_SURNAME,
        Self::COLUMN_PHONE,
        Self::COLUMN_MOBILE,
        Self::COLUMN_EMAIL,
        Self::COLUMN_ADDRESS,
        Self::COLUMN_ACTIVITY,
        Self::COLUMN_NOTE,
        Self::COLUMN_COMPANY,
        Self::COLUMN_WEBSITE,
        Self::COLUMN_SKILL_LEVEL,
        Self::COLUMN_PARTICIPATION,
    ];

    /// SQL statement for creating the contacts table with the defined schema.
    pub fn create_table() -> String {
        format!(
            "CREATE TABLE IF NOT EXISTS {} (
                {} INTEGER PRIMARY KEY AUTOINCREMENT,
                {} TEXT NOT NULL,
                {} TEXT NOT NULL,
                {} TEXT,
                {} TEXT,
                {} TEXT,
                {} TEXT,
                {} TEXT,
                {} TEXT,
                {} TEXT,
                {} TEXT,
                {} TEXT,
                {} TEXT,
                {} TEXT
            )",
            Self::TABLE_NAME,
            Self::COLUMN_ID,
            Self::COLUMN_NAME,
            Self::COLUMN_FIRST_SURNAME,
            Self::COLUMN_SECOND_SURNAME,
            Self::COLUMN_PHONE,
            Self::COLUMN_MOBILE,
            Self::COLUMN_EMAIL,
            Self::COLUMN_ADDRESS,
            Self::COLUMN_ACTIVITY,
            Self::COLUMN_NOTE,
            Self::COLUMN_COMPANY,
            Self::COLUMN_WEBSITE,
            Self::COLUMN_SKILL_LEVEL,
            Self::COLUMN_PARTICIPATION
        )
    }
}
