//! # Preference Store
//!
//! The injected key-value seam the engagement machine reads and writes.
//!
//! ## Ownership
//! ```text
//! ┌────────────────────┐   get/set    ┌─────────────────────┐
//! │ EngagementMachine  │ ───────────► │ impl EngagementStore│
//! └────────────────────┘              └──────────┬──────────┘
//!                                                │
//!                        Prefs (in-memory snapshot, dirty tracking)
//!                                                │
//!                                   PrefsRepository::save (launcher-db)
//! ```

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::types::{PrefKey, UserState};
use crate::validation::format_flag;

/// Per-field access to persisted engagement preferences.
///
/// Reads are expected to be immediately consistent with prior writes
/// made through the same store.
pub trait EngagementStore {
    fn user_state(&self) -> UserState;
    fn set_user_state(&mut self, state: UserState);

    /// True until the app has been opened once.
    fn first_open(&self) -> bool;
    fn set_first_open(&mut self, first_open: bool);

    /// Epoch millis of the first launch; 0 means unset.
    fn first_open_time(&self) -> i64;
    fn set_first_open_time(&mut self, millis: i64);

    /// Epoch millis of the last SHARE dialog; 0 means never shown.
    fn share_shown_time(&self) -> i64;
    fn set_share_shown_time(&mut self, millis: i64);

    fn rate_clicked(&self) -> bool;
    fn set_rate_clicked(&mut self, clicked: bool);
}

impl<S: EngagementStore + ?Sized> EngagementStore for &mut S {
    fn user_state(&self) -> UserState {
        (**self).user_state()
    }
    fn set_user_state(&mut self, state: UserState) {
        (**self).set_user_state(state)
    }
    fn first_open(&self) -> bool {
        (**self).first_open()
    }
    fn set_first_open(&mut self, first_open: bool) {
        (**self).set_first_open(first_open)
    }
    fn first_open_time(&self) -> i64 {
        (**self).first_open_time()
    }
    fn set_first_open_time(&mut self, millis: i64) {
        (**self).set_first_open_time(millis)
    }
    fn share_shown_time(&self) -> i64 {
        (**self).share_shown_time()
    }
    fn set_share_shown_time(&mut self, millis: i64) {
        (**self).set_share_shown_time(millis)
    }
    fn rate_clicked(&self) -> bool {
        (**self).rate_clicked()
    }
    fn set_rate_clicked(&mut self, clicked: bool) {
        (**self).set_rate_clicked(clicked)
    }
}

// =============================================================================
// Prefs Snapshot
// =============================================================================

/// In-memory snapshot of the engagement preferences.
///
/// Setters record which keys actually changed so a repository can write
/// back only those.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prefs {
    pub first_open: bool,
    pub first_open_time: i64,
    pub user_state: UserState,
    pub share_shown_time: i64,
    pub rate_clicked: bool,
    #[serde(skip)]
    dirty: BTreeSet<PrefKey>,
}

impl Default for Prefs {
    fn default() -> Self {
        Prefs {
            first_open: true,
            first_open_time: 0,
            user_state: UserState::Start,
            share_shown_time: 0,
            rate_clicked: false,
            dirty: BTreeSet::new(),
        }
    }
}

impl Prefs {
    /// Keys written since the snapshot was loaded or last saved.
    pub fn dirty_keys(&self) -> impl Iterator<Item = PrefKey> + '_ {
        self.dirty.iter().copied()
    }

    pub fn is_dirty(&self) -> bool {
        !self.dirty.is_empty()
    }

    /// Forgets pending changes (after a successful save).
    pub fn mark_clean(&mut self) {
        self.dirty.clear();
    }

    /// Marks a key as needing a write regardless of whether it changed.
    pub fn mark_dirty(&mut self, key: PrefKey) {
        self.dirty.insert(key);
    }

    /// Stored text form of one field.
    pub fn encode(&self, key: PrefKey) -> String {
        match key {
            PrefKey::FirstOpen => format_flag(self.first_open).to_string(),
            PrefKey::FirstOpenTime => self.first_open_time.to_string(),
            PrefKey::UserState => self.user_state.as_str().to_string(),
            PrefKey::ShareShownTime => self.share_shown_time.to_string(),
            PrefKey::RateClicked => format_flag(self.rate_clicked).to_string(),
        }
    }

    fn touch<T: PartialEq>(dirty: &mut BTreeSet<PrefKey>, key: PrefKey, slot: &mut T, value: T) {
        if *slot != value {
            *slot = value;
            dirty.insert(key);
        }
    }
}

impl EngagementStore for Prefs {
    fn user_state(&self) -> UserState {
        self.user_state
    }
    fn set_user_state(&mut self, state: UserState) {
        Self::touch(&mut self.dirty, PrefKey::UserState, &mut self.user_state, state);
    }
    fn first_open(&self) -> bool {
        self.first_open
    }
    fn set_first_open(&mut self, first_open: bool) {
        Self::touch(&mut self.dirty, PrefKey::FirstOpen, &mut self.first_open, first_open);
    }
    fn first_open_time(&self) -> i64 {
        self.first_open_time
    }
    fn set_first_open_time(&mut self, millis: i64) {
        Self::touch(&mut self.dirty, PrefKey::FirstOpenTime, &mut self.first_open_time, millis);
    }
    fn share_shown_time(&self) -> i64 {
        self.share_shown_time
    }
    fn set_share_shown_time(&mut self, millis: i64) {
        Self::touch(&mut self.dirty, PrefKey::ShareShownTime, &mut self.share_shown_time, millis);
    }
    fn rate_clicked(&self) -> bool {
        self.rate_clicked
    }
    fn set_rate_clicked(&mut self, clicked: bool) {
        Self::touch(&mut self.dirty, PrefKey::RateClicked, &mut self.rate_clicked, clicked);
    }
}
