//! # Database State
//!
//! Wraps the `Database` handle shared by host commands.
//!
//! ## Thread Safety
//! `Database` holds a `SqlitePool`, which is thread-safe on its own.

use launcher_db::Database;

/// Wrapper around `Database` for host state management.
#[derive(Debug, Clone)]
pub struct DbState {
    db: Database,
}

impl DbState {
    /// Creates a new DbState wrapping the database connection.
    pub fn new(db: Database) -> Self {
        DbState { db }
    }

    /// Returns a reference to the inner Database.
    pub fn inner(&self) -> &Database {
        &self.db
    }
}
