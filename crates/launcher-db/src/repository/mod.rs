//! # Repository Module
//!
//! Database repository implementations for the launcher.
//!
//! ## Repository Layers
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Host command                                                          │
//! │       │  db.prefs().load() / db.prefs().save(&mut prefs)               │
//! │       ▼                                                                 │
//! │  PrefsRepository   ← typed, decodes with defaults                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SettingsRepository ← raw key/value rows                               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SQLite `settings` table                                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`settings::SettingsRepository`] - Raw key/value access
//! - [`prefs::PrefsRepository`] - Engagement preference snapshot

pub mod prefs;
pub mod settings;
