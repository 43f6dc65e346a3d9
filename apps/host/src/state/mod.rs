//! # State Module
//!
//! Host application state, split into focused types so each command takes
//! only what it needs.
//!
//! ```text
//! ┌──────────────┐  ┌──────────────┐  ┌──────────────┐  ┌───────────────┐
//! │   DbState    │  │ ConfigState  │  │ DialogEvents │  │ LauncherProbe │
//! │  Database    │  │ thresholds   │  │ mpsc sender  │  │ home-role     │
//! │  (SQLite     │  │ db path      │  │              │  │ lookup        │
//! │   pool)      │  │ zone         │  │              │  │               │
//! └──────────────┘  └──────────────┘  └──────────────┘  └───────────────┘
//! ```
//!
//! THREAD SAFETY: the pool is thread-safe, configuration is read-only after
//! startup, and the probe uses an atomic.

mod config;
mod db;
mod dialogs;
mod probe;

pub use config::ConfigState;
pub use db::DbState;
pub use dialogs::DialogEvents;
pub use probe::{LauncherProbe, StaticProbe};
