use serde::Serialize;

use crate::error::StoreError;

/// Result of a mutating repository call, shaped for direct display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Outcome {
    pub success: bool,
    pub message: String,
}

impl Outcome {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }

    /// Collapses a storage result, logging the failure at a level that
    /// matches its cause.
    pub fn from_result<T>(
        result: Result<T, StoreError>,
        on_success: impl FnOnce(T) -> String,
    ) -> Self {
        match result {
            Ok(value) => Self::success(on_success(value)),
            Err(err) => Self::from_error(err),
        }
    }

    pub fn from_error(err: impl Into<StoreError>) -> Self {
        let err = err.into();
        match &err {
            StoreError::Validation(_) | StoreError::Duplicate(_) | StoreError::NotFound { .. } => {
                tracing::warn!(error = %err, "operation rejected")
            }
            _ => tracing::error!(error = %err, "operation failed"),
        }
        Self::failure(format!("Error: {}", err))
    }
}
