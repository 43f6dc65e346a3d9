//! # Error Types
//!
//! Domain-specific error types for launcher-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  launcher-core errors (this file)                                      │
//! │  └── CoreError        - Persisted value could not be decoded           │
//! │                                                                         │
//! │  launcher-db errors (separate crate)                                   │
//! │  └── DbError          - Database operation failures                    │
//! │                                                                         │
//! │  host errors (in app)                                                  │
//! │  └── AppError         - What the presentation layer sees               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The engagement machine itself never fails. These errors only come out of
//! [`crate::validation`], and loaders turn them into field defaults.

use thiserror::Error;

/// Errors raised while decoding persisted preference values.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// Stored user state is not one of START, REVIEW, RATE, SHARE.
    #[error("Unknown user state: '{0}'")]
    UnknownUserState(String),

    /// Stored timestamp is not a non-negative integer of epoch millis.
    #[error("Invalid timestamp for {key}: '{value}'")]
    InvalidTimestamp { key: String, value: String },

    /// Stored boolean flag is not true/false/1/0.
    #[error("Invalid flag for {key}: '{value}'")]
    InvalidFlag { key: String, value: String },

    /// Dialog identifier does not name a known dialog.
    #[error("Unknown dialog: '{0}'")]
    UnknownDialog(String),
}

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;
