//! # Message Commands
//!
//! The engagement check run each time the launcher comes to the foreground.
//!
//! ## Resume Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Launcher resumed                                                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  resume(now)                                                            │
//! │       ├── load prefs                                                    │
//! │       ├── check_for_messages(now, probe)                                │
//! │       │       ├── maybe advance user state                              │
//! │       │       └── maybe pick REVIEW / RATE / SHARE                      │
//! │       ├── save changed prefs                                            │
//! │       └── post dialog (if any) to the presentation layer                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::debug;

use launcher_core::Dialog;

use crate::error::AppResult;
use crate::state::{ConfigState, DbState, DialogEvents, LauncherProbe};

/// Runs the engagement check at `now` and posts at most one dialog.
///
/// Prefs are saved before the dialog is posted, so a SHARE dialog's
/// shown-time is on disk before anything can render it.
pub async fn resume(
    db: &DbState,
    config: &ConfigState,
    probe: &dyn LauncherProbe,
    events: &DialogEvents,
    now: i64,
) -> AppResult<Option<Dialog>> {
    debug!(now, "resume command");

    let repo = db.inner().prefs();
    let mut prefs = repo.load().await?;

    let outcome =
        super::machine(&mut prefs, config, now).check_for_messages(now, || probe.is_default_launcher());
    repo.save(&mut prefs).await?;

    super::log_transition(outcome.transition);
    if let Some(dialog) = outcome.dialog {
        events.post(dialog);
    }

    Ok(outcome.dialog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::StaticProbe;
    use launcher_core::time::{DAY_MILLIS, HOUR_MILLIS};
    use launcher_core::UserState;
    use launcher_db::{Database, DbConfig};

    /// 2024-01-01T00:00:00Z
    const T0: i64 = 1_704_067_200_000;

    struct Harness {
        db: DbState,
        config: ConfigState,
        probe: StaticProbe,
        events: DialogEvents,
        rx: tokio::sync::mpsc::UnboundedReceiver<Dialog>,
    }

    async fn harness() -> Harness {
        let db = DbState::new(Database::new(DbConfig::in_memory()).await.unwrap());
        let config = ConfigState {
            utc_offset_minutes: Some(0),
            ..ConfigState::default()
        };
        let (events, rx) = DialogEvents::channel();
        Harness {
            db,
            config,
            probe: StaticProbe::new(true),
            events,
            rx,
        }
    }

    impl Harness {
        async fn resume(&self, now: i64) -> Option<Dialog> {
            resume(&self.db, &self.config, &self.probe, &self.events, now)
                .await
                .unwrap()
        }

        async fn state(&self) -> UserState {
            self.db.inner().prefs().load().await.unwrap().user_state
        }
    }

    #[tokio::test]
    async fn test_start_to_review_then_dialog() {
        let mut h = harness().await;

        // First resume stamps first_open_time
        assert_eq!(h.resume(T0).await, None);
        assert_eq!(h.resume(T0 + 2 * HOUR_MILLIS).await, None);
        assert_eq!(h.state().await, UserState::Review);

        assert_eq!(h.resume(T0 + 3 * HOUR_MILLIS).await, Some(Dialog::Review));
        assert_eq!(h.state().await, UserState::Review);
        assert_eq!(h.rx.try_recv().ok(), Some(Dialog::Review));
        assert!(h.rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_not_default_launcher_posts_nothing() {
        let mut h = harness().await;
        h.probe.set(false);
        h.db.inner().settings().set("user_state", "REVIEW").await.unwrap();

        assert_eq!(h.resume(T0).await, None);
        assert!(h.rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_share_shown_time_is_persisted() {
        let h = harness().await;
        let settings = h.db.inner().settings();
        settings.set("user_state", "SHARE").await.unwrap();
        settings.set("first_open_time", &T0.to_string()).await.unwrap();

        let evening = T0 + 30 * DAY_MILLIS + 19 * HOUR_MILLIS;
        assert_eq!(h.resume(evening).await, Some(Dialog::Share));

        let prefs = h.db.inner().prefs().load().await.unwrap();
        assert_eq!(prefs.share_shown_time, evening);

        assert_eq!(h.resume(evening + 1).await, None);
    }

    #[tokio::test]
    async fn test_corrupt_state_restarts_funnel() {
        let h = harness().await;
        h.db.inner().settings().set("user_state", "??").await.unwrap();

        assert_eq!(h.resume(T0).await, None);
        assert_eq!(h.state().await, UserState::Start);
    }
}
