//! # Engagement State Machine
//!
//! Decides, on each foreground resume, whether to ask the user for a
//! review, a rating, or a share.
//!
//! ## Transitions
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   START ──(≥1h since first open)──► REVIEW                             │
//! │                                       │   ▲                             │
//! │                 rate_clicked ─────────┤   └─ default launcher:         │
//! │                                       │       emit REVIEW dialog        │
//! │                         REVIEW shown ─┼──► RATE                         │
//! │                                       │     │  ▲                        │
//! │                 rate_clicked ─────────┼─────┤  └─ default launcher,     │
//! │                                       │     │     ≥7d, hour ≥ 18:       │
//! │                                       │     │     emit RATE dialog      │
//! │                                       ▼     ▼                           │
//! │                   RATE shown ──────► SHARE (terminal)                   │
//! │                                        └─ default launcher, ≥21d since  │
//! │                                           first open, ≥42d since last   │
//! │                                           share, hour ≥ 18:             │
//! │                                           emit SHARE, stamp share time  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The REVIEW branch has no evening gate. RATE and SHARE do.
//!
//! ## Usage
//! ```rust
//! use chrono::Utc;
//! use launcher_core::{Dialog, EngagementConfig, EngagementMachine, EngagementStore, Prefs, UserState};
//!
//! let t0 = 1_700_000_000_000;
//! let mut prefs = Prefs::default();
//! prefs.first_open_time = t0;
//!
//! let mut machine = EngagementMachine::with_timezone(&mut prefs, EngagementConfig::default(), Utc);
//! let outcome = machine.check_for_messages(t0 + 2 * 3_600_000, || true);
//! assert_eq!(outcome.dialog, None);
//! assert_eq!(machine.store().user_state(), UserState::Review);
//!
//! let outcome = machine.check_for_messages(t0 + 3 * 3_600_000, || true);
//! assert_eq!(outcome.dialog, Some(Dialog::Review));
//! ```

use chrono::{Local, TimeZone};

use crate::config::EngagementConfig;
use crate::dialog::DialogAction;
use crate::store::EngagementStore;
use crate::time::{has_been_days, has_been_hours, local_hour};
use crate::types::{Dialog, UserState};

/// Result of one [`EngagementMachine::check_for_messages`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CheckOutcome {
    /// Dialog to hand to the presentation layer, if any.
    pub dialog: Option<Dialog>,
    /// State change made during this call as `(from, to)`.
    pub transition: Option<(UserState, UserState)>,
}

/// Engagement funnel driver over an injected preference store.
pub struct EngagementMachine<S, Tz: TimeZone = Local> {
    store: S,
    config: EngagementConfig,
    tz: Tz,
}

impl<S: EngagementStore> EngagementMachine<S, Local> {
    /// Creates a machine that reads hour-of-day in the local time zone.
    pub fn new(store: S, config: EngagementConfig) -> Self {
        EngagementMachine::with_timezone(store, config, Local)
    }
}

impl<S: EngagementStore, Tz: TimeZone> EngagementMachine<S, Tz> {
    pub fn with_timezone(store: S, config: EngagementConfig, tz: Tz) -> Self {
        EngagementMachine { store, config, tz }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn config(&self) -> &EngagementConfig {
        &self.config
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Records an app launch.
    ///
    /// On the very first launch clears the first-open flag, stamps
    /// `first_open_time` and returns `true`.
    pub fn record_app_open(&mut self, now: i64) -> bool {
        if !self.store.first_open() {
            return false;
        }
        self.store.set_first_open(false);
        self.store.set_first_open_time(now);
        true
    }

    /// Evaluates the funnel at `now` (epoch millis).
    ///
    /// `is_default_launcher` is only called by branches that need it.
    /// At most one dialog is returned per call.
    pub fn check_for_messages<F>(&mut self, now: i64, is_default_launcher: F) -> CheckOutcome
    where
        F: FnOnce() -> bool,
    {
        if self.store.first_open_time() == 0 {
            self.store.set_first_open_time(now);
        }

        let first_open_time = self.store.first_open_time();
        let cfg = self.config;
        let mut outcome = CheckOutcome::default();

        match self.store.user_state() {
            UserState::Start => {
                if has_been_hours(first_open_time, now, cfg.review_after_hours) {
                    outcome.transition = self.advance_to(UserState::Review);
                }
            }

            UserState::Review => {
                if self.store.rate_clicked() {
                    outcome.transition = self.advance_to(UserState::Share);
                } else if is_default_launcher() {
                    outcome.dialog = Some(Dialog::Review);
                }
            }

            UserState::Rate => {
                if self.store.rate_clicked() {
                    outcome.transition = self.advance_to(UserState::Share);
                } else if is_default_launcher()
                    && has_been_days(first_open_time, now, cfg.rate_after_days)
                    && self.is_evening(now)
                {
                    outcome.dialog = Some(Dialog::Rate);
                }
            }

            UserState::Share => {
                if is_default_launcher()
                    && has_been_days(first_open_time, now, cfg.share_after_days)
                    && has_been_days(self.store.share_shown_time(), now, cfg.share_interval_days)
                    && self.is_evening(now)
                {
                    self.store.set_share_shown_time(now);
                    outcome.dialog = Some(Dialog::Share);
                }
            }
        }

        outcome
    }

    /// Applies the consequences of the presentation layer showing `dialog`.
    ///
    /// Showing REVIEW moves the funnel to RATE; showing RATE moves it to
    /// SHARE. Returns the transition, if one happened.
    pub fn dialog_shown(&mut self, dialog: Dialog) -> Option<(UserState, UserState)> {
        match dialog {
            Dialog::Review => self.advance_to(UserState::Rate),
            Dialog::Rate => self.advance_to(UserState::Share),
            _ => None,
        }
    }

    /// Applies the consequences of the user clicking `dialog`'s action and
    /// returns what the host should do next.
    pub fn dialog_action(&mut self, dialog: Dialog) -> DialogAction {
        if matches!(dialog, Dialog::Review | Dialog::Rate) {
            self.store.set_rate_clicked(true);
        }
        dialog.action()
    }

    /// Moves forward to `target`; requests that would go backwards or stay
    /// put are ignored.
    fn advance_to(&mut self, target: UserState) -> Option<(UserState, UserState)> {
        let current = self.store.user_state();
        if target <= current {
            return None;
        }
        self.store.set_user_state(target);
        Some((current, target))
    }

    fn is_evening(&self, now: i64) -> bool {
        local_hour(&self.tz, now).is_some_and(|hour| hour >= self.config.evening_hour)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Prefs;
    use crate::time::{DAY_MILLIS, HOUR_MILLIS};
    use chrono::{FixedOffset, Utc};

    /// 2024-01-01T00:00:00Z
    const MIDNIGHT: i64 = 1_704_067_200_000;

    fn at(day: i64, hour: i64) -> i64 {
        MIDNIGHT + day * DAY_MILLIS + hour * HOUR_MILLIS
    }

    fn prefs(state: UserState, first_open_time: i64) -> Prefs {
        let mut prefs = Prefs::default();
        prefs.first_open = false;
        prefs.first_open_time = first_open_time;
        prefs.user_state = state;
        prefs
    }

    fn machine(prefs: &mut Prefs) -> EngagementMachine<&mut Prefs, Utc> {
        EngagementMachine::with_timezone(prefs, EngagementConfig::default(), Utc)
    }

    // -------------------------------------------------------------------------
    // First open
    // -------------------------------------------------------------------------

    #[test]
    fn test_record_app_open_only_once() {
        let mut p = Prefs::default();
        let mut m = machine(&mut p);

        assert!(m.record_app_open(at(0, 9)));
        assert!(!m.record_app_open(at(3, 9)));
        drop(m);

        assert!(!p.first_open);
        assert_eq!(p.first_open_time, at(0, 9));
    }

    #[test]
    fn test_unset_first_open_time_is_initialised_to_now() {
        let mut p = prefs(UserState::Start, 0);
        let outcome = machine(&mut p).check_for_messages(at(0, 10), || true);

        assert_eq!(outcome, CheckOutcome::default());
        assert_eq!(p.first_open_time, at(0, 10));
        assert_eq!(p.user_state, UserState::Start);
    }

    // -------------------------------------------------------------------------
    // START
    // -------------------------------------------------------------------------

    #[test]
    fn test_start_advances_after_one_hour_without_dialog() {
        let mut p = prefs(UserState::Start, at(0, 8));
        let outcome = machine(&mut p).check_for_messages(at(0, 9), || true);

        assert_eq!(outcome.dialog, None);
        assert_eq!(
            outcome.transition,
            Some((UserState::Start, UserState::Review))
        );
        assert_eq!(p.user_state, UserState::Review);
    }

    #[test]
    fn test_start_waits_under_one_hour() {
        let mut p = prefs(UserState::Start, at(0, 8));
        let outcome = machine(&mut p).check_for_messages(at(0, 9) - 1, || true);

        assert_eq!(outcome, CheckOutcome::default());
        assert_eq!(p.user_state, UserState::Start);
    }

    #[test]
    fn test_start_never_queries_default_launcher() {
        let mut p = prefs(UserState::Start, at(0, 8));
        machine(&mut p).check_for_messages(at(5, 20), || panic!("not needed"));
        assert_eq!(p.user_state, UserState::Review);
    }

    // -------------------------------------------------------------------------
    // REVIEW
    // -------------------------------------------------------------------------

    #[test]
    fn test_review_with_rate_clicked_jumps_to_share() {
        let mut p = prefs(UserState::Review, at(0, 8));
        p.rate_clicked = true;
        let outcome = machine(&mut p).check_for_messages(at(0, 10), || true);

        assert_eq!(outcome.dialog, None);
        assert_eq!(outcome.transition, Some((UserState::Review, UserState::Share)));
        assert_eq!(p.user_state, UserState::Share);
    }

    #[test]
    fn test_review_emits_dialog_at_any_hour() {
        let mut p = prefs(UserState::Review, at(0, 0));
        let outcome = machine(&mut p).check_for_messages(at(0, 3), || true);

        assert_eq!(outcome.dialog, Some(Dialog::Review));
        assert_eq!(outcome.transition, None);
        assert_eq!(p.user_state, UserState::Review);
    }

    #[test]
    fn test_review_requires_default_launcher() {
        let mut p = prefs(UserState::Review, at(0, 0));
        let outcome = machine(&mut p).check_for_messages(at(0, 20), || false);
        assert_eq!(outcome, CheckOutcome::default());
    }

    // -------------------------------------------------------------------------
    // RATE
    // -------------------------------------------------------------------------

    #[test]
    fn test_rate_emits_in_the_evening_after_a_week() {
        let mut p = prefs(UserState::Rate, at(0, 9));
        let outcome = machine(&mut p).check_for_messages(at(7, 18), || true);

        assert_eq!(outcome.dialog, Some(Dialog::Rate));
        assert_eq!(p.user_state, UserState::Rate);
    }

    #[test]
    fn test_rate_hour_boundary() {
        let mut p = prefs(UserState::Rate, at(0, 9));
        let mut m = machine(&mut p);

        let before = at(7, 18) - 1; // 17:59:59.999
        assert_eq!(m.check_for_messages(before, || true).dialog, None);
        assert_eq!(m.check_for_messages(at(8, 17), || true).dialog, None);
        assert_eq!(m.check_for_messages(at(8, 23), || true).dialog, Some(Dialog::Rate));
    }

    #[test]
    fn test_rate_needs_seven_whole_days() {
        let mut p = prefs(UserState::Rate, at(0, 19));
        let outcome = machine(&mut p).check_for_messages(at(7, 18), || true);
        assert_eq!(outcome.dialog, None);
    }

    #[test]
    fn test_rate_with_rate_clicked_jumps_to_share() {
        let mut p = prefs(UserState::Rate, at(0, 9));
        p.rate_clicked = true;
        let outcome = machine(&mut p).check_for_messages(at(1, 1), || false);

        assert_eq!(outcome.transition, Some((UserState::Rate, UserState::Share)));
        assert_eq!(outcome.dialog, None);
    }

    #[test]
    fn test_rate_hour_uses_configured_time_zone() {
        // 17:00 UTC is 19:00 at UTC+2
        let mut p = prefs(UserState::Rate, at(0, 9));
        let tz = FixedOffset::east_opt(2 * 3600).unwrap();
        let mut m = EngagementMachine::with_timezone(&mut p, EngagementConfig::default(), tz);

        assert_eq!(m.check_for_messages(at(7, 17), || true).dialog, Some(Dialog::Rate));
    }

    // -------------------------------------------------------------------------
    // SHARE
    // -------------------------------------------------------------------------

    #[test]
    fn test_share_emits_and_stamps_shown_time() {
        let mut p = prefs(UserState::Share, at(0, 9));
        let now = at(21, 19);
        let outcome = machine(&mut p).check_for_messages(now, || true);

        assert_eq!(outcome.dialog, Some(Dialog::Share));
        assert_eq!(outcome.transition, None);
        assert_eq!(p.share_shown_time, now);
    }

    #[test]
    fn test_share_does_not_repeat_immediately() {
        let mut p = prefs(UserState::Share, at(0, 9));
        let mut m = machine(&mut p);

        assert_eq!(m.check_for_messages(at(21, 19), || true).dialog, Some(Dialog::Share));
        assert_eq!(m.check_for_messages(at(21, 19) + 1, || true).dialog, None);
        assert_eq!(m.check_for_messages(at(62, 20), || true).dialog, None);
        assert_eq!(m.check_for_messages(at(63, 19), || true).dialog, Some(Dialog::Share));
    }

    #[test]
    fn test_share_needs_three_weeks_and_evening() {
        let mut p = prefs(UserState::Share, at(0, 9));
        let mut m = machine(&mut p);

        assert_eq!(m.check_for_messages(at(20, 20), || true).dialog, None);
        assert_eq!(m.check_for_messages(at(25, 17), || true).dialog, None);
        assert_eq!(m.check_for_messages(at(25, 18), || false).dialog, None);
        drop(m);
        assert_eq!(p.share_shown_time, 0);
    }

    #[test]
    fn test_share_is_terminal_even_with_rate_clicked() {
        let mut p = prefs(UserState::Share, at(0, 9));
        p.rate_clicked = true;
        let outcome = machine(&mut p).check_for_messages(at(1, 1), || false);
        assert_eq!(outcome, CheckOutcome::default());
        assert_eq!(p.user_state, UserState::Share);
    }

    // -------------------------------------------------------------------------
    // Presentation feedback
    // -------------------------------------------------------------------------

    #[test]
    fn test_dialog_shown_advances_funnel() {
        let mut p = prefs(UserState::Review, at(0, 9));
        let mut m = machine(&mut p);

        assert_eq!(
            m.dialog_shown(Dialog::Review),
            Some((UserState::Review, UserState::Rate))
        );
        assert_eq!(
            m.dialog_shown(Dialog::Rate),
            Some((UserState::Rate, UserState::Share))
        );
        assert_eq!(m.dialog_shown(Dialog::About), None);
    }

    #[test]
    fn test_dialog_shown_never_moves_backwards() {
        let mut p = prefs(UserState::Share, at(0, 9));
        let mut m = machine(&mut p);

        assert_eq!(m.dialog_shown(Dialog::Review), None);
        drop(m);
        assert_eq!(p.user_state, UserState::Share);
    }

    #[test]
    fn test_review_action_sets_rate_clicked() {
        let mut p = prefs(UserState::Rate, at(0, 9));
        let mut m = machine(&mut p);

        assert_eq!(m.dialog_action(Dialog::Review), DialogAction::OpenStoreRating);
        let outcome = m.check_for_messages(at(0, 10), || true);
        assert_eq!(outcome.transition, Some((UserState::Rate, UserState::Share)));
    }

    #[test]
    fn test_share_action_leaves_rate_clicked_alone() {
        let mut p = prefs(UserState::Share, at(0, 9));
        assert_eq!(
            machine(&mut p).dialog_action(Dialog::Share),
            DialogAction::OpenShareSheet
        );
        assert!(!p.rate_clicked);
    }

    // -------------------------------------------------------------------------
    // Properties
    // -------------------------------------------------------------------------

    #[test]
    fn test_repeated_checks_are_idempotent() {
        for state in [UserState::Review, UserState::Rate] {
            let mut p = prefs(state, at(0, 9));
            let mut m = machine(&mut p);
            let first = m.check_for_messages(at(10, 19), || true);
            let second = m.check_for_messages(at(10, 19), || true);
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_concrete_scenario() {
        let t0 = at(0, 6);
        let mut p = prefs(UserState::Start, t0);
        let mut m = machine(&mut p);

        let outcome = m.check_for_messages(t0 + 2 * HOUR_MILLIS, || true);
        assert_eq!(outcome.dialog, None);
        assert_eq!(m.store().user_state(), UserState::Review);

        let outcome = m.check_for_messages(t0 + 3 * HOUR_MILLIS, || true);
        assert_eq!(outcome.dialog, Some(Dialog::Review));
        assert_eq!(m.store().user_state(), UserState::Review);
    }

    #[test]
    fn test_full_funnel_walk() {
        let mut p = Prefs::default();
        let mut m = machine(&mut p);

        m.record_app_open(at(0, 8));
        m.check_for_messages(at(0, 10), || true);
        let dialog = m.check_for_messages(at(1, 10), || true).dialog;
        assert_eq!(dialog, Some(Dialog::Review));
        m.dialog_shown(Dialog::Review);

        assert_eq!(m.check_for_messages(at(7, 19), || true).dialog, Some(Dialog::Rate));
        m.dialog_shown(Dialog::Rate);
        assert_eq!(m.store().user_state(), UserState::Share);

        assert_eq!(m.check_for_messages(at(21, 19), || true).dialog, Some(Dialog::Share));
    }
}
