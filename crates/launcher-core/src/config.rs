//! # Engagement Configuration
//!
//! Thresholds the engagement machine gates its prompts on.

use serde::{Deserialize, Serialize};

/// Timing thresholds for the engagement funnel.
///
/// ## Defaults
/// - Review becomes eligible 1 hour after first open
/// - Rate needs 7 days since first open
/// - Share needs 21 days since first open and 42 days since it was last shown
/// - Rate and Share only fire from 18:00 local time onwards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EngagementConfig {
    pub review_after_hours: i64,
    pub rate_after_days: i64,
    pub share_after_days: i64,
    pub share_interval_days: i64,
    /// Local hour (0-23) from which evening prompts may show.
    pub evening_hour: u32,
}

impl Default for EngagementConfig {
    fn default() -> Self {
        EngagementConfig {
            review_after_hours: 1,
            rate_after_days: 7,
            share_after_days: 21,
            share_interval_days: 42,
            evening_hour: 18,
        }
    }
}
