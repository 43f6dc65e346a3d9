//! # Prefs Repository
//!
//! Typed load/save of the engagement preferences.
//!
//! ## Load Path
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  SELECT key, value FROM settings                                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  for each PrefKey:                                                     │
//! │       ├── missing            → default                                 │
//! │       ├── decodes            → value                                   │
//! │       └── fails to decode    → warn! + default                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Prefs (clean snapshot)                                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `save` writes only the keys the snapshot marks dirty, in one transaction.

use std::collections::HashMap;

use sqlx::SqlitePool;
use tracing::{debug, warn};

use crate::error::DbResult;
use crate::repository::settings::SettingsRepository;
use launcher_core::validation::{parse_flag, parse_timestamp, parse_user_state};
use launcher_core::{CoreResult, PrefKey, Prefs};

/// Repository for the engagement preference snapshot.
#[derive(Debug, Clone)]
pub struct PrefsRepository {
    settings: SettingsRepository,
}

impl PrefsRepository {
    /// Creates a new PrefsRepository.
    pub fn new(pool: SqlitePool) -> Self {
        PrefsRepository {
            settings: SettingsRepository::new(pool),
        }
    }

    /// Loads the current preferences.
    ///
    /// Only a database failure is an error; unreadable values fall back
    /// to their defaults.
    pub async fn load(&self) -> DbResult<Prefs> {
        let stored: HashMap<String, String> = self.settings.all().await?.into_iter().collect();
        let mut prefs = Prefs::default();

        for key in PrefKey::ALL {
            let Some(raw) = stored.get(key.as_str()) else {
                continue;
            };

            match key {
                PrefKey::FirstOpen => {
                    if let Some(v) = decode(key, parse_flag(key, raw)) {
                        prefs.first_open = v;
                    }
                }
                PrefKey::FirstOpenTime => {
                    if let Some(v) = decode(key, parse_timestamp(key, raw)) {
                        prefs.first_open_time = v;
                    }
                }
                PrefKey::UserState => {
                    if let Some(v) = decode(key, parse_user_state(raw)) {
                        prefs.user_state = v;
                    }
                }
                PrefKey::ShareShownTime => {
                    if let Some(v) = decode(key, parse_timestamp(key, raw)) {
                        prefs.share_shown_time = v;
                    }
                }
                PrefKey::RateClicked => {
                    if let Some(v) = decode(key, parse_flag(key, raw)) {
                        prefs.rate_clicked = v;
                    }
                }
            }
        }

        debug!(user_state = %prefs.user_state, "Loaded prefs");
        Ok(prefs)
    }

    /// Persists the keys `prefs` marks dirty and marks it clean.
    ///
    /// Returns the number of keys written.
    pub async fn save(&self, prefs: &mut Prefs) -> DbResult<usize> {
        if !prefs.is_dirty() {
            return Ok(0);
        }

        let entries: Vec<(&str, String)> = prefs
            .dirty_keys()
            .map(|key| (key.as_str(), prefs.encode(key)))
            .collect();

        let written = self.settings.set_many(entries).await?;
        prefs.mark_clean();

        debug!(written, "Saved prefs");
        Ok(written)
    }
}

fn decode<T>(key: PrefKey, result: CoreResult<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            warn!(key = %key, error = %err, "Ignoring unreadable preference, using default");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{Database, DbConfig};
    use launcher_core::{EngagementStore, Prefs, UserState};

    async fn db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    #[tokio::test]
    async fn test_empty_store_loads_defaults() {
        let db = db().await;
        let prefs = db.prefs().load().await.unwrap();
        assert_eq!(prefs, Prefs::default());
    }

    #[tokio::test]
    async fn test_save_then_load() {
        let db = db().await;
        let repo = db.prefs();

        let mut prefs = repo.load().await.unwrap();
        prefs.set_first_open(false);
        prefs.set_first_open_time(1_704_067_200_000);
        prefs.set_user_state(UserState::Rate);
        prefs.set_rate_clicked(true);

        assert_eq!(repo.save(&mut prefs).await.unwrap(), 4);
        assert!(!prefs.is_dirty());

        let loaded = repo.load().await.unwrap();
        assert_eq!(loaded, prefs);
    }

    #[tokio::test]
    async fn test_clean_snapshot_writes_nothing() {
        let db = db().await;
        let mut prefs = db.prefs().load().await.unwrap();
        assert_eq!(db.prefs().save(&mut prefs).await.unwrap(), 0);
        assert!(db.settings().all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_corrupt_values_fall_back_to_defaults() {
        let db = db().await;
        let settings = db.settings();
        settings.set("user_state", "FINISHED").await.unwrap();
        settings.set("first_open_time", "-12").await.unwrap();
        settings.set("rate_clicked", "maybe").await.unwrap();
        settings.set("share_shown_time", "1704067200000").await.unwrap();

        let prefs = db.prefs().load().await.unwrap();
        assert_eq!(prefs.user_state, UserState::Start);
        assert_eq!(prefs.first_open_time, 0);
        assert!(!prefs.rate_clicked);
        assert_eq!(prefs.share_shown_time, 1_704_067_200_000);
    }

    #[tokio::test]
    async fn test_save_only_touches_dirty_keys() {
        let db = db().await;
        db.settings().set("user_state", "SHARE").await.unwrap();

        let mut prefs = db.prefs().load().await.unwrap();
        prefs.set_share_shown_time(99);
        db.prefs().save(&mut prefs).await.unwrap();

        let rows = db.settings().all().await.unwrap();
        assert_eq!(
            rows,
            vec![
                ("share_shown_time".to_string(), "99".to_string()),
                ("user_state".to_string(), "SHARE".to_string()),
            ]
        );
    }
}
