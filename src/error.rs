use rusqlite::ErrorCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("{0} is already registered")]
    Duplicate(Constraint),

    #[error("{kind} with id {id} not found")]
    NotFound { kind: &'static str, id: i64 },

    #[error("Password hashing error: {0}")]
    PasswordHash(String),

    #[error("Quotation numbers exhausted after {0}")]
    SequenceExhausted(i64),

    #[error("Setting '{key}' holds an invalid value: {value}")]
    CorruptSetting { key: String, value: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Failures detected before any storage call.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    #[error("Invalid email format: {0}")]
    InvalidEmail(String),

    #[error("{field} must be a whole number, got '{value}'")]
    NotAnInteger { field: &'static str, value: String },

    #[error("{field} must be a decimal number, got '{value}'")]
    NotADecimal { field: &'static str, value: String },

    #[error("{field} must not be negative")]
    Negative { field: &'static str },

    #[error("{field} must be greater than zero")]
    NotPositive { field: &'static str },

    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("Password must be at least {0} characters long")]
    PasswordTooShort(usize),
}

/// Unique constraints the schema enforces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constraint {
    Username,
    Email,
    QuotationNumber,
}

impl std::fmt::Display for Constraint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Constraint::Username => write!(f, "Username"),
            Constraint::Email => write!(f, "Email"),
            Constraint::QuotationNumber => write!(f, "Quotation number"),
        }
    }
}

impl StoreError {
    /// Translates a UNIQUE violation on a known column into `Duplicate`,
    /// leaving every other error untouched.
    pub fn from_constraint(err: rusqlite::Error) -> Self {
        match unique_violation(&err).and_then(constraint_for_column) {
            Some(constraint) => StoreError::Duplicate(constraint),
            None => StoreError::Database(err),
        }
    }
}

/// Returns `table.column` for a UNIQUE constraint failure.
fn unique_violation(err: &rusqlite::Error) -> Option<&str> {
    match err {
        rusqlite::Error::SqliteFailure(inner, Some(message))
            if inner.code == ErrorCode::ConstraintViolation =>
        {
            message.strip_prefix("UNIQUE constraint failed: ")
        }
        _ => None,
    }
}

fn constraint_for_column(column: &str) -> Option<Constraint> {
    match column {
        "usuarios.usuario" => Some(Constraint::Username),
        "usuarios.email" => Some(Constraint::Email),
        "cotizaciones.numero_cotizacion" => Some(Constraint::QuotationNumber),
        _ => None,
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;
