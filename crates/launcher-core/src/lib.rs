//! # launcher-core: Engagement Logic for the Launcher
//!
//! Decides when the home-screen launcher surfaces its review, rate and
//! share prompts. Pure decision logic with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Launcher Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Presentation layer (platform UI)                │   │
//! │  │        renders DialogContent, performs DialogAction             │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    apps/host (commands)                         │   │
//! │  │         app_opened, resume, present_dialog, dialog_action       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ launcher-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌────────────┐  ┌───────────┐  ┌───────────┐ │   │
//! │  │   │   types   │  │ engagement │  │  dialog   │  │ validation│ │   │
//! │  │   │ UserState │  │  Machine   │  │  Content  │  │  decoding │ │   │
//! │  │   │  Dialog   │  │  Outcome   │  │  Action   │  │           │ │   │
//! │  │   └───────────┘  └────────────┘  └───────────┘  └───────────┘ │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO CLOCK READS                        │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                launcher-db (Preferences store)                  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - `UserState`, `Dialog`, `PrefKey`
//! - [`engagement`] - The engagement state machine
//! - [`store`] - `EngagementStore` seam and the `Prefs` snapshot
//! - [`dialog`] - Dialog text and actions
//! - [`config`] - Engagement thresholds
//! - [`time`] - Elapsed-time predicates
//! - [`validation`] - Decoding persisted values
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Injected Time**: the caller passes `now`; nothing here reads a clock
//! 2. **Injected Storage**: every persisted field goes through [`EngagementStore`]
//! 3. **Forward Only**: user state never moves backwards

// =============================================================================
// Module Declarations
// =============================================================================

pub mod config;
pub mod dialog;
pub mod engagement;
pub mod error;
pub mod store;
pub mod time;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use config::EngagementConfig;
pub use dialog::{DialogAction, DialogContent};
pub use engagement::{CheckOutcome, EngagementMachine};
pub use error::{CoreError, CoreResult};
pub use store::{EngagementStore, Prefs};
pub use types::*;
