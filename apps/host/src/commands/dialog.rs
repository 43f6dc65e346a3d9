//! # Dialog Commands
//!
//! Requests for, presentation of, and clicks on message dialogs.
//!
//! ## Dialog Lifecycle
//! ```text
//! ┌──────────────┐    ┌──────────────────┐    ┌──────────────────┐
//! │ show_dialog  │    │  present_dialog  │    │  dialog_action   │
//! │ or resume    │───►│  content + state │───►│  rate_clicked +  │
//! │ (post event) │    │  REVIEW → RATE   │    │  DialogAction    │
//! └──────────────┘    │  RATE   → SHARE  │    └──────────────────┘
//!                     └──────────────────┘
//! ```

use tracing::{debug, info};

use launcher_core::{Dialog, DialogAction, DialogContent};

use crate::error::AppResult;
use crate::state::{ConfigState, DbState, DialogEvents};

/// Posts a dialog requested from elsewhere in the app (settings, hidden
/// apps, keyboard tips and so on).
pub fn show_dialog(events: &DialogEvents, dialog: Dialog) -> bool {
    debug!(%dialog, "show_dialog command");
    events.post(dialog)
}

/// Like [`show_dialog`] but takes the wire identifier, e.g. `"HIDDEN"`.
///
/// Returns the parsed dialog and whether it was delivered.
pub fn show_dialog_by_id(events: &DialogEvents, id: &str) -> AppResult<(Dialog, bool)> {
    let dialog: Dialog = id.parse()?;
    Ok((dialog, show_dialog(events, dialog)))
}

/// Called when the presentation layer actually displays `dialog`.
///
/// Returns the text to render. Displaying REVIEW or RATE moves the user
/// one stage along the funnel.
pub async fn present_dialog(
    db: &DbState,
    config: &ConfigState,
    dialog: Dialog,
    now: i64,
) -> AppResult<DialogContent> {
    debug!(%dialog, "present_dialog command");

    if dialog.is_engagement() {
        let repo = db.inner().prefs();
        let mut prefs = repo.load().await?;
        let transition = super::machine(&mut prefs, config, now).dialog_shown(dialog);
        repo.save(&mut prefs).await?;
        super::log_transition(transition);
    }

    Ok(dialog.content())
}

/// Called when the user clicks `dialog`'s action button.
///
/// Clicking through REVIEW or RATE records `rate_clicked`, which sends the
/// funnel straight to SHARE on the next resume.
pub async fn dialog_action(
    db: &DbState,
    config: &ConfigState,
    dialog: Dialog,
    now: i64,
) -> AppResult<DialogAction> {
    debug!(%dialog, "dialog_action command");

    let repo = db.inner().prefs();
    let mut prefs = repo.load().await?;
    let action = super::machine(&mut prefs, config, now).dialog_action(dialog);
    repo.save(&mut prefs).await?;

    info!(%dialog, ?action, "Dialog action");
    Ok(action)
}
