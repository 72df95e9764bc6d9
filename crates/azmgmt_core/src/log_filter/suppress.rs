//! Suppress filter: a boolean kill-switch for log events.
//!
//! # Invariants
//! - A new filter accepts every event.
//! - `accept` never inspects the event and has no side effects.
//! - Only `suppress` changes state.

use crate::log_filter::{LogFilter, LogFilterConfig};
use log::Record;
use std::sync::atomic::{AtomicBool, Ordering};

/// Observable state of a [`SuppressFilter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuppressState {
    Accepting,
    Suppressing,
}

/// Accepts or blocks all events depending on one flag.
///
/// The flag is atomic so one filter can sit in a `static` shared by the
/// logging pipeline and by whoever toggles it.
#[derive(Debug)]
pub struct SuppressFilter {
    accept: AtomicBool,
}

impl Default for SuppressFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl SuppressFilter {
    pub const fn new() -> Self {
        Self {
            accept: AtomicBool::new(true),
        }
    }

    /// Builds a filter from configuration.
    ///
    /// The configuration is ignored: the result always starts in the
    /// accept-all state. There is no config key for the initial state.
    pub fn factory(_config: &LogFilterConfig) -> Self {
        Self::default()
    }

    /// `suppress(true)` blocks all events, `suppress(false)` accepts them.
    pub fn suppress(&self, suppress: bool) {
        self.accept.store(!suppress, Ordering::Relaxed);
    }

    pub fn is_accepting(&self) -> bool {
        self.accept.load(Ordering::Relaxed)
    }

    pub fn state(&self) -> SuppressState {
        if self.is_accepting() {
            SuppressState::Accepting
        } else {
            SuppressState::Suppressing
        }
    }
}

impl LogFilter for SuppressFilter {
    fn accept(&self, _record: &Record<'_>) -> bool {
        self.is_accepting()
    }
}
