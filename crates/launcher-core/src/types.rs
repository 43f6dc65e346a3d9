//! # Domain Types
//!
//! Core domain types shared by the engagement machine, the store and the host.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌───────────────────┐   ┌─────────────────┐     │
//! │  │   UserState     │   │      Dialog       │   │    PrefKey      │     │
//! │  │  ─────────────  │   │  ───────────────  │   │  ─────────────  │     │
//! │  │  Start          │   │  About  Review    │   │  first_open     │     │
//! │  │  Review         │   │  Rate   Share     │   │  first_open_time│     │
//! │  │  Rate           │   │  Hidden Keyboard  │   │  user_state     │     │
//! │  │  Share          │   │  DigitalWellbeing │   │  share_shown... │     │
//! │  │  (monotonic)    │   │  ProMessage       │   │  rate_clicked   │     │
//! │  └─────────────────┘   └───────────────────┘   └─────────────────┘     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

// =============================================================================
// User State
// =============================================================================

/// Coarse engagement funnel stage.
///
/// The derived ordering is the funnel order: `Start < Review < Rate < Share`.
/// Persisted state only ever moves forward along it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize, TS,
)]
#[ts(export)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserState {
    /// Freshly installed, nothing asked yet.
    #[default]
    Start,
    /// Eligible for the "did you know" review prompt.
    Review,
    /// Eligible for the evening rate-us prompt.
    Rate,
    /// Terminal: the share prompt recurs on its own cadence.
    Share,
}

impl UserState {
    /// Stored representation.
    pub const fn as_str(&self) -> &'static str {
        match self {
            UserState::Start => "START",
            UserState::Review => "REVIEW",
            UserState::Rate => "RATE",
            UserState::Share => "SHARE",
        }
    }

    /// Whether no further transitions exist.
    pub const fn is_terminal(&self) -> bool {
        matches!(self, UserState::Share)
    }
}

impl fmt::Display for UserState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserState {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "START" => Ok(UserState::Start),
            "REVIEW" => Ok(UserState::Review),
            "RATE" => Ok(UserState::Rate),
            "SHARE" => Ok(UserState::Share),
            other => Err(CoreError::UnknownUserState(other.to_string())),
        }
    }
}

// =============================================================================
// Dialog
// =============================================================================

/// A one-shot request to the presentation layer to show a message dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Dialog {
    About,
    Review,
    Rate,
    Share,
    Hidden,
    Keyboard,
    DigitalWellbeing,
    ProMessage,
}

impl Dialog {
    /// Every dialog, in declaration order.
    pub const ALL: [Dialog; 8] = [
        Dialog::About,
        Dialog::Review,
        Dialog::Rate,
        Dialog::Share,
        Dialog::Hidden,
        Dialog::Keyboard,
        Dialog::DigitalWellbeing,
        Dialog::ProMessage,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Dialog::About => "ABOUT",
            Dialog::Review => "REVIEW",
            Dialog::Rate => "RATE",
            Dialog::Share => "SHARE",
            Dialog::Hidden => "HIDDEN",
            Dialog::Keyboard => "KEYBOARD",
            Dialog::DigitalWellbeing => "DIGITAL_WELLBEING",
            Dialog::ProMessage => "PRO_MESSAGE",
        }
    }

    /// Whether this dialog belongs to the engagement funnel.
    pub const fn is_engagement(&self) -> bool {
        matches!(self, Dialog::Review | Dialog::Rate | Dialog::Share)
    }
}

impl fmt::Display for Dialog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Dialog {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Dialog::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| CoreError::UnknownDialog(s.to_string()))
    }
}

// =============================================================================
// Preference Keys
// =============================================================================

/// Keys under which engagement preferences are persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PrefKey {
    FirstOpen,
    FirstOpenTime,
    UserState,
    ShareShownTime,
    RateClicked,
}

impl PrefKey {
    pub const ALL: [PrefKey; 5] = [
        PrefKey::FirstOpen,
        PrefKey::FirstOpenTime,
        PrefKey::UserState,
        PrefKey::ShareShownTime,
        PrefKey::RateClicked,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            PrefKey::FirstOpen => "first_open",
            PrefKey::FirstOpenTime => "first_open_time",
            PrefKey::UserState => "user_state",
            PrefKey::ShareShownTime => "share_shown_time",
            PrefKey::RateClicked => "rate_clicked",
        }
    }
}

impl fmt::Display for PrefKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
