//! # Launch Commands

use tracing::{debug, info};

use crate::error::AppResult;
use crate::state::{ConfigState, DbState};

/// Records an app launch. Returns `true` on the very first launch, when the
/// host should run its first-open onboarding.
pub async fn app_opened(db: &DbState, config: &ConfigState, now: i64) -> AppResult<bool> {
    debug!(now, "app_opened command");

    let repo = db.inner().prefs();
    let mut prefs = repo.load().await?;

    let first_open = super::machine(&mut prefs, config, now).record_app_open(now);
    repo.save(&mut prefs).await?;

    if first_open {
        info!(first_open_time = now, "First launch recorded");
    }
    Ok(first_open)
}
