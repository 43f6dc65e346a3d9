//! # Engagement Stage Seeder
//!
//! Writes a chosen engagement stage into a database so each prompt can be
//! exercised by hand without waiting days.
//!
//! ## Usage
//! ```bash
//! # Installed 8 days ago, waiting for the evening rate prompt
//! cargo run -p launcher-db --bin seed -- --state RATE --days-ago 8
//!
//! # User already clicked through a review prompt
//! cargo run -p launcher-db --bin seed -- --state REVIEW --rate-clicked
//!
//! # Specify database path
//! cargo run -p launcher-db --bin seed -- --db ./data/launcher.db
//! ```

use chrono::Utc;
use std::env;

use launcher_core::time::DAY_MILLIS;
use launcher_core::{EngagementStore, UserState};
use launcher_db::{Database, DbConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    let mut state = UserState::Start;
    let mut days_ago: i64 = 0;
    let mut rate_clicked = false;
    let mut db_path = String::from("./launcher_dev.db");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--state" | "-s" => {
                if i + 1 < args.len() {
                    state = args[i + 1].to_ascii_uppercase().parse()?;
                    i += 1;
                }
            }
            "--days-ago" | "-a" => {
                if i + 1 < args.len() {
                    days_ago = args[i + 1].parse().unwrap_or(0);
                    i += 1;
                }
            }
            "--rate-clicked" => rate_clicked = true,
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Launcher Engagement Seeder");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -s, --state <STATE>   START, REVIEW, RATE or SHARE (default: START)");
                println!("  -a, --days-ago <N>    First open N days ago (default: 0)");
                println!("      --rate-clicked    Mark the rate prompt as clicked");
                println!("  -d, --db <PATH>       Database file path (default: ./launcher_dev.db)");
                println!("  -h, --help            Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("🌱 Launcher Engagement Seeder");
    println!("============================");
    println!("Database: {}", db_path);
    println!();

    let db = Database::new(DbConfig::new(&db_path)).await?;
    println!("✓ Connected to database");
    println!("✓ Migrations applied");

    let now = Utc::now().timestamp_millis();
    let first_open_time = now - days_ago.max(0) * DAY_MILLIS;

    let repo = db.prefs();
    let mut prefs = repo.load().await?;
    prefs.set_first_open(false);
    prefs.set_first_open_time(first_open_time);
    prefs.set_user_state(state);
    prefs.set_rate_clicked(rate_clicked);
    // Rewrite everything so a reseed fully replaces the previous stage
    for key in launcher_core::PrefKey::ALL {
        prefs.mark_dirty(key);
    }
    let written = repo.save(&mut prefs).await?;

    println!();
    println!("✓ Wrote {} preferences", written);
    println!("  user_state       = {}", prefs.user_state);
    println!("  first_open_time  = {} ({} days ago)", prefs.first_open_time, days_ago);
    println!("  rate_clicked     = {}", prefs.rate_clicked);
    println!("  share_shown_time = {}", prefs.share_shown_time);

    db.close().await;
    Ok(())
}
