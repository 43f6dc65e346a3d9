//! # Configuration State
//!
//! Host configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`LAUNCHER_*`)
//! 2. Defaults (this file)
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use chrono::{FixedOffset, Local, Offset, TimeZone};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use launcher_core::validation::parse_bool;
use launcher_core::EngagementConfig;

/// Host configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Engagement thresholds.
    pub engagement: EngagementConfig,

    /// Database file override (else the platform data dir).
    pub db_path: Option<PathBuf>,

    /// Answer of the static default-launcher probe.
    pub is_default_launcher: bool,

    /// Fixed UTC offset for hour-of-day checks; `None` uses the system zone.
    pub utc_offset_minutes: Option<i32>,
}

impl Default for ConfigState {
    fn default() -> Self {
        ConfigState {
            engagement: EngagementConfig::default(),
            db_path: None,
            is_default_launcher: false,
            utc_offset_minutes: None,
        }
    }
}

impl ConfigState {
    /// Creates a ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `LAUNCHER_DB_PATH`: Database file path
    /// - `LAUNCHER_IS_DEFAULT`: `true`/`1` if this app holds the home role
    /// - `LAUNCHER_UTC_OFFSET_MINUTES`: Fixed zone for evening checks
    /// - `LAUNCHER_REVIEW_AFTER_HOURS`, `LAUNCHER_RATE_AFTER_DAYS`,
    ///   `LAUNCHER_SHARE_AFTER_DAYS`, `LAUNCHER_SHARE_INTERVAL_DAYS`,
    ///   `LAUNCHER_EVENING_HOUR`: Engagement thresholds
    ///
    /// Unparsable values keep their defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ConfigState::from_env`] over an arbitrary lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ConfigState::default();

        if let Some(path) = lookup("LAUNCHER_DB_PATH") {
            config.db_path = Some(PathBuf::from(path));
        }

        if let Some(flag) = lookup("LAUNCHER_IS_DEFAULT").as_deref().and_then(parse_bool) {
            config.is_default_launcher = flag;
        }

        if let Some(offset) = parse(&lookup, "LAUNCHER_UTC_OFFSET_MINUTES") {
            config.utc_offset_minutes = Some(offset);
        }

        let e = &mut config.engagement;
        if let Some(v) = parse_threshold(&lookup, "LAUNCHER_REVIEW_AFTER_HOURS") {
            e.review_after_hours = v;
        }
        if let Some(v) = parse_threshold(&lookup, "LAUNCHER_RATE_AFTER_DAYS") {
            e.rate_after_days = v;
        }
        if let Some(v) = parse_threshold(&lookup, "LAUNCHER_SHARE_AFTER_DAYS") {
            e.share_after_days = v;
        }
        if let Some(v) = parse_threshold(&lookup, "LAUNCHER_SHARE_INTERVAL_DAYS") {
            e.share_interval_days = v;
        }
        if let Some(v) = parse::<u32, _>(&lookup, "LAUNCHER_EVENING_HOUR") {
            if v < 24 {
                e.evening_hour = v;
            }
        }

        config
    }

    /// The zone hour-of-day checks run in at `now`.
    pub fn zone_at(&self, now: i64) -> FixedOffset {
        if let Some(offset) = self
            .utc_offset_minutes
            .and_then(|minutes| FixedOffset::east_opt(minutes * 60))
        {
            return offset;
        }

        Local
            .timestamp_millis_opt(now)
            .earliest()
            .map(|dt| dt.offset().fix())
            .unwrap_or_else(|| chrono::Utc.fix())
    }
}

fn parse<T, F>(lookup: &F, key: &str) -> Option<T>
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    lookup(key).and_then(|raw| raw.trim().parse().ok())
}

/// Elapsed-time thresholds must not be negative.
fn parse_threshold<F>(lookup: &F, key: &str) -> Option<i64>
where
    F: Fn(&str) -> Option<String>,
{
    parse::<i64, _>(lookup, key).filter(|v| *v >= 0)
}
