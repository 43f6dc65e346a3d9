//! # Dialog Catalogue
//!
//! What each [`Dialog`] says and what its single action button does.
//! The presentation layer renders [`DialogContent`] and performs the
//! returned [`DialogAction`]; nothing here touches a UI toolkit.

use serde::Serialize;
use ts_rs::TS;

use crate::types::Dialog;

/// Text shown in the message dialog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct DialogContent {
    pub dialog: Dialog,
    pub title: String,
    pub message: String,
    pub action_label: String,
    /// Whether the dialog closes when its action runs.
    pub dismiss_on_action: bool,
    /// Short toast shown after the action.
    pub toast: Option<String>,
}

/// Side effect the host performs when the action button is clicked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum DialogAction {
    Dismiss,
    OpenStoreRating,
    OpenShareSheet,
    OpenUsageAccessSettings,
    /// Store listing of the pro edition; the host owns the URL.
    OpenProListing,
}

impl Dialog {
    /// Title, message and action text for this dialog.
    pub fn content(&self) -> DialogContent {
        let (title, message, action_label) = match self {
            Dialog::About => (
                "Launcher",
                "Welcome to launcher settings. Tap a setting to change it.",
                "Okay",
            ),
            Dialog::Review => (
                "Did you know?",
                "Reviews help others discover a minimal launcher. A short review means a lot.",
                "Leave a review",
            ),
            Dialog::Rate => (
                "Launcher",
                "Enjoying a calmer home screen? Please rate us on the store.",
                "Rate now",
            ),
            Dialog::Share => (
                "Hey!",
                "Know someone who would like a distraction-free phone? Share the launcher with them.",
                "Share now",
            ),
            Dialog::Hidden => (
                "Hidden apps",
                "Long press an app in the list to hide it. Hidden apps are listed here.",
                "Okay",
            ),
            Dialog::Keyboard => (
                "Launcher",
                "Swipe up to open the app list with the keyboard ready to search.",
                "Okay",
            ),
            Dialog::DigitalWellbeing => (
                "Screen time",
                "Allow usage access to see today's screen time on the home screen.",
                "Permission",
            ),
            Dialog::ProMessage => (
                "Hey!",
                "The pro edition adds themes and more customisation.",
                "Go pro",
            ),
        };

        let toast = match self {
            Dialog::Review => Some("😇❤️"),
            Dialog::Rate => Some("🤩❤️"),
            Dialog::Share => Some("😊❤️"),
            _ => None,
        };

        DialogContent {
            dialog: *self,
            title: title.to_string(),
            message: message.to_string(),
            action_label: action_label.to_string(),
            dismiss_on_action: !matches!(self, Dialog::DigitalWellbeing | Dialog::ProMessage),
            toast: toast.map(str::to_string),
        }
    }

    /// The action behind this dialog's button.
    pub fn action(&self) -> DialogAction {
        match self {
            Dialog::Review | Dialog::Rate => DialogAction::OpenStoreRating,
            Dialog::Share => DialogAction::OpenShareSheet,
            Dialog::DigitalWellbeing => DialogAction::OpenUsageAccessSettings,
            Dialog::ProMessage => DialogAction::OpenProListing,
            Dialog::About | Dialog::Hidden | Dialog::Keyboard => DialogAction::Dismiss,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_dialogs_stay_open() {
        assert!(!Dialog::DigitalWellbeing.content().dismiss_on_action);
        assert!(!Dialog::ProMessage.content().dismiss_on_action);
        assert!(Dialog::Review.content().dismiss_on_action);
    }

    #[test]
    fn test_engagement_dialogs_toast() {
        for dialog in Dialog::ALL {
            assert_eq!(dialog.content().toast.is_some(), dialog.is_engagement());
        }
    }

    #[test]
    fn test_actions() {
        assert_eq!(Dialog::Rate.action(), DialogAction::OpenStoreRating);
        assert_eq!(Dialog::Share.action(), DialogAction::OpenShareSheet);
        assert_eq!(Dialog::Keyboard.action(), DialogAction::Dismiss);
        assert_eq!(Dialog::ProMessage.action(), DialogAction::OpenProListing);
    }

    #[test]
    fn test_action_serializes_snake_case() {
        let json = serde_json::to_string(&DialogAction::OpenUsageAccessSettings).unwrap();
        assert_eq!(json, "\"open_usage_access_settings\"");
    }
}
