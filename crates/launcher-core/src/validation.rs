//! # Validation Module
//!
//! Decoding of persisted preference values.
//!
//! ## Decoding Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Stored Value → Typed Value                         │
//! │                                                                         │
//! │  settings table (TEXT)                                                 │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  THIS MODULE: parse_user_state / parse_timestamp / parse_flag          │
//! │           │                                                             │
//! │           ├── Ok(value)  → used as-is                                  │
//! │           └── Err(_)     → loader logs and falls back to the default   │
//! │                                                                         │
//! │  A corrupt value never blocks the engagement check.                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use launcher_core::validation::{parse_flag, parse_timestamp, parse_user_state};
//! use launcher_core::{PrefKey, UserState};
//!
//! assert_eq!(parse_user_state("RATE").unwrap(), UserState::Rate);
//! assert_eq!(parse_timestamp(PrefKey::FirstOpenTime, "1700000000000").unwrap(), 1_700_000_000_000);
//! assert!(parse_flag(PrefKey::RateClicked, "1").unwrap());
//! ```

use crate::error::{CoreError, CoreResult};
use crate::types::{PrefKey, UserState};

/// Parses a stored user state (`START`, `REVIEW`, `RATE`, `SHARE`).
pub fn parse_user_state(raw: &str) -> CoreResult<UserState> {
    raw.parse()
}

/// Parses a stored epoch-millisecond timestamp.
///
/// ## Rules
/// - Must be an integer
/// - Must not be negative (0 means "unset")
pub fn parse_timestamp(key: PrefKey, raw: &str) -> CoreResult<i64> {
    let invalid = || CoreError::InvalidTimestamp {
        key: key.to_string(),
        value: raw.to_string(),
    };

    let millis: i64 = raw.trim().parse().map_err(|_| invalid())?;
    if millis < 0 {
        return Err(invalid());
    }

    Ok(millis)
}

/// Parses a stored boolean flag (`true`/`false`/`1`/`0`).
pub fn parse_flag(key: PrefKey, raw: &str) -> CoreResult<bool> {
    parse_bool(raw).ok_or_else(|| CoreError::InvalidFlag {
        key: key.to_string(),
        value: raw.to_string(),
    })
}

/// Case-insensitive `true`/`false`/`1`/`0`, surrounding whitespace ignored.
///
/// Shared by stored flags and boolean environment overrides.
pub fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => None,
    }
}

/// Encodes a flag the way [`parse_flag`] reads it back.
pub fn format_flag(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}
