//! # Host Error Type
//!
//! Unified error type for host commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Command Function → Result<T, AppError>                                 │
//! │         │                                                               │
//! │         ├── Database error?  DbError  ──┐                               │
//! │         ├── Decode error?    CoreError ─┼──► AppError { code, message } │
//! │         └── Success ────────────────────┴──► T                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The engagement decision never fails, so in practice every error here
//! originates in storage or in a malformed dialog id from the UI.

use serde::Serialize;
use thiserror::Error;

use launcher_core::CoreError;
use launcher_db::DbError;

/// Error returned from host commands.
///
/// ## Serialization
/// ```json
/// { "code": "DATABASE_ERROR", "message": "Database operation failed" }
/// ```
#[derive(Debug, Clone, Error, Serialize)]
#[serde(rename_all = "camelCase")]
#[error("{message}")]
pub struct AppError {
    /// Machine-readable error code
    pub code: ErrorCode,

    /// Human-readable error message
    pub message: String,
}

/// Error codes for host responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    NotFound,
    ValidationError,
    DatabaseError,
    Internal,
}

impl AppError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        AppError {
            code,
            message: message.into(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn internal(message: impl Into<String>) -> Self {
        AppError::new(ErrorCode::Internal, message)
    }
}

/// Converts database errors to host errors.
impl From<DbError> for AppError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::NotFound { entity, id } => {
                AppError::new(ErrorCode::NotFound, format!("{} not found: {}", entity, id))
            }
            DbError::ConnectionFailed(_) => {
                AppError::new(ErrorCode::DatabaseError, "Database connection failed")
            }
            DbError::MigrationFailed(_) => {
                AppError::new(ErrorCode::DatabaseError, "Database migration failed")
            }
            DbError::QueryFailed(e) => {
                tracing::error!("Database query failed: {}", e);
                AppError::new(ErrorCode::DatabaseError, "Database operation failed")
            }
            DbError::TransactionFailed(e) => {
                tracing::error!("Transaction failed: {}", e);
                AppError::new(ErrorCode::DatabaseError, "Database transaction failed")
            }
            DbError::PoolExhausted => {
                AppError::new(ErrorCode::DatabaseError, "Database pool exhausted")
            }
            DbError::Internal(e) => {
                tracing::error!("Internal database error: {}", e);
                AppError::new(ErrorCode::DatabaseError, "Database operation failed")
            }
        }
    }
}

/// Converts core errors to host errors.
impl From<CoreError> for AppError {
    fn from(err: CoreError) -> Self {
        AppError::new(ErrorCode::ValidationError, err.to_string())
    }
}

/// Result type for host commands.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_db_error_hides_details() {
        let err = AppError::from(DbError::QueryFailed("no such table: settings".into()));
        assert_eq!(err.code(), ErrorCode::DatabaseError);
        assert_eq!(err.message, "Database operation failed");
    }

    #[test]
    fn test_core_error_is_validation() {
        let err = AppError::from(CoreError::UnknownDialog("SPLASH".into()));
        assert_eq!(err.code(), ErrorCode::ValidationError);
        assert_eq!(err.to_string(), "Unknown dialog: 'SPLASH'");
    }

    #[test]
    fn test_serializes_code_and_message() {
        let json = serde_json::to_value(AppError::internal("boom")).unwrap();
        assert_eq!(json["code"], "INTERNAL");
        assert_eq!(json["message"], "boom");
    }
}
