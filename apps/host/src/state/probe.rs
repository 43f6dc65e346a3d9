//! # Default-Launcher Probe
//!
//! Answers "does this app currently hold the home-screen role?".
//! The platform lookup is fast and synchronous.

use std::sync::atomic::{AtomicBool, Ordering};

/// Source of the default-launcher answer.
pub trait LauncherProbe: Send + Sync {
    fn is_default_launcher(&self) -> bool;
}

/// Probe with a fixed answer, taken from configuration.
#[derive(Debug)]
pub struct StaticProbe(AtomicBool);

impl StaticProbe {
    pub fn new(is_default: bool) -> Self {
        StaticProbe(AtomicBool::new(is_default))
    }

    /// Updates the answer, e.g. after the user picks a home app.
    pub fn set(&self, is_default: bool) {
        self.0.store(is_default, Ordering::Relaxed);
    }
}

impl LauncherProbe for StaticProbe {
    fn is_default_launcher(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

impl<F> LauncherProbe for F
where
    F: Fn() -> bool + Send + Sync,
{
    fn is_default_launcher(&self) -> bool {
        self()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_probe_can_flip() {
        let probe = StaticProbe::new(false);
        assert!(!probe.is_default_launcher());
        probe.set(true);
        assert!(probe.is_default_launcher());
    }

    #[test]
    fn test_closure_probe() {
        let probe = || true;
        assert!(LauncherProbe::is_default_launcher(&probe));
    }
}
