//! # Launcher Host Library
//!
//! Glue between the platform UI and the engagement logic.
//!
//! ## Module Organization
//! ```text
//! launcher_host/
//! ├── lib.rs          ◄─── You are here (startup & run)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── db.rs       ◄─── Database state wrapper
//! │   ├── config.rs   ◄─── Configuration from env
//! │   ├── dialogs.rs  ◄─── Dialog event channel
//! │   └── probe.rs    ◄─── Default-launcher probe
//! ├── commands/
//! │   ├── launch.rs   ◄─── app_opened
//! │   ├── messages.rs ◄─── resume
//! │   └── dialog.rs   ◄─── show / present / action
//! └── error.rs        ◄─── Host error type
//! ```

pub mod commands;
pub mod error;
pub mod state;

use chrono::Utc;
use directories::ProjectDirs;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use launcher_db::{Database, DbConfig};
use state::{ConfigState, DbState, DialogEvents, StaticProbe};

/// Runs one foreground cycle of the launcher.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  1. Initialize Logging ── tracing-subscriber, RUST_LOG overrides        │
/// │  2. Load Configuration ── LAUNCHER_* environment variables              │
/// │  3. Determine Database Path ── LAUNCHER_DB_PATH or platform data dir    │
/// │  4. Connect to Database ── WAL mode, run pending migrations             │
/// │  5. app_opened ── first-launch bookkeeping                              │
/// │  6. resume ── engagement check, dialog posted on the event channel      │
/// │  7. Present ── each posted dialog is rendered as one JSON line          │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    info!("Starting launcher host");

    let config = ConfigState::from_env();
    let db_path = get_database_path(&config)?;
    info!(?db_path, "Database path determined");

    let db = Database::new(DbConfig::new(db_path)).await?;
    info!("Database connected and migrations applied");

    let db = DbState::new(db);
    let probe = StaticProbe::new(config.is_default_launcher);
    let (events, mut rx) = DialogEvents::channel();

    let now = Utc::now().timestamp_millis();

    if commands::launch::app_opened(&db, &config, now).await? {
        info!("Welcome: first launch");
    }

    commands::messages::resume(&db, &config, &probe, &events, now).await?;
    drop(events);

    while let Some(dialog) = rx.recv().await {
        let content = commands::dialog::present_dialog(&db, &config, dialog, now).await?;
        println!("{}", serde_json::to_string(&content)?);
    }

    db.inner().close().await;
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=launcher=trace` - Trace for launcher crates only
/// - Default: INFO, launcher crates at DEBUG
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,launcher=debug,sqlx=warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Determines the database file path.
///
/// ## Platform-Specific Paths
/// - **macOS**: `~/Library/Application Support/works.rina.launcher/launcher.db`
/// - **Windows**: `%APPDATA%\rina\launcher\data\launcher.db`
/// - **Linux**: `~/.local/share/launcher/launcher.db`
///
/// `LAUNCHER_DB_PATH` overrides all of these.
fn get_database_path(config: &ConfigState) -> Result<PathBuf, Box<dyn std::error::Error>> {
    if let Some(path) = &config.db_path {
        return Ok(path.clone());
    }

    let proj_dirs = ProjectDirs::from("works", "rina", "launcher")
        .ok_or("Could not determine app data directory")?;

    let data_dir = proj_dirs.data_dir();
    std::fs::create_dir_all(data_dir)?;

    Ok(data_dir.join("launcher.db"))
}
