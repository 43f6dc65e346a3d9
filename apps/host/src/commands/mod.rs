//! # Host Commands Module
//!
//! Entry points the platform UI calls.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs       ◄─── You are here (exports, shared helpers)
//! ├── launch.rs    ◄─── app_opened (first-open bookkeeping)
//! ├── messages.rs  ◄─── resume (engagement check on foreground)
//! └── dialog.rs    ◄─── show_dialog, present_dialog, dialog_action
//! ```
//!
//! ## Command Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  load Prefs ──► EngagementMachine over &mut Prefs ──► save dirty keys  │
//! │                         │                                               │
//! │                         └──► Dialog? ──► DialogEvents::post            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every command loads a fresh snapshot and writes back only what changed.

pub mod dialog;
pub mod launch;
pub mod messages;

use chrono::FixedOffset;
use tracing::info;

use launcher_core::{EngagementMachine, Prefs, UserState};

use crate::state::ConfigState;

/// Builds a machine over `prefs` in the configured zone at `now`.
pub(crate) fn machine<'a>(
    prefs: &'a mut Prefs,
    config: &ConfigState,
    now: i64,
) -> EngagementMachine<&'a mut Prefs, FixedOffset> {
    EngagementMachine::with_timezone(prefs, config.engagement, config.zone_at(now))
}

pub(crate) fn log_transition(transition: Option<(UserState, UserState)>) {
    if let Some((from, to)) = transition {
        info!(%from, %to, "User state advanced");
    }
}
