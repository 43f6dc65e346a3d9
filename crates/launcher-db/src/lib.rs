//! # launcher-db: Preferences Store for the Launcher
//!
//! Persists the engagement preferences in a local SQLite database using
//! sqlx for async access.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Launcher Data Flow                               │
//! │                                                                         │
//! │  Host command (resume)                                                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   launcher-db (THIS CRATE)                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌────────────────┐    ┌──────────────┐  │   │
//! │  │   │   Database    │    │  Repositories  │    │  Migrations  │  │   │
//! │  │   │   (pool.rs)   │◄───│ PrefsRepo      │    │ 001_settings │  │   │
//! │  │   │  SqlitePool   │    │ SettingsRepo   │    │  (embedded)  │  │   │
//! │  │   └───────────────┘    └────────────────┘    └──────────────┘  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SQLite database (launcher.db in the platform data dir)               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Database error types
//! - [`repository`] - Settings and prefs repositories
//!
//! ## Usage
//!
//! ```rust,ignore
//! use launcher_db::{Database, DbConfig};
//!
//! let db = Database::new(DbConfig::new("path/to/launcher.db")).await?;
//!
//! let mut prefs = db.prefs().load().await?;
//! // ... run the engagement machine over &mut prefs ...
//! db.prefs().save(&mut prefs).await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};

pub use repository::prefs::PrefsRepository;
pub use repository::settings::SettingsRepository;
