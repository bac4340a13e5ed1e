// SPDX-License-Identifier: MPL-2.0
//! Bounded log of bubble events shown at the bottom of each screen.
//!
//! The log doubles as the bubble [`Delegate`]: shown/hidden notifications
//! are recorded here and traced at `info` level.

use crate::config::DEMO_EVENT_LOG_LINES;
use crate::ui::bubble::{Delegate, InfoBubble};
use std::collections::VecDeque;
use std::sync::{Mutex, PoisonError};

#[derive(Debug)]
pub struct EventLog {
    lines: Mutex<VecDeque<String>>,
    capacity: usize,
}

impl EventLog {
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEMO_EVENT_LOG_LINES)
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            lines: Mutex::new(VecDeque::with_capacity(capacity)),
            capacity: capacity.max(1),
        }
    }

    /// Appends a line, dropping the oldest one when full.
    pub fn record(&self, line: impl Into<String>) {
        let line = line.into();
        tracing::info!("{line}");

        let mut lines = self.lines.lock().unwrap_or_else(PoisonError::into_inner);
        if lines.len() == self.capacity {
            lines.pop_front();
        }
        lines.push_back(line);
    }

    /// Recorded lines, oldest first.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .cloned()
            .collect()
    }
}

impl Default for EventLog {
    fn default() -> Self {
        Self::new()
    }
}

impl Delegate for EventLog {
    fn did_show(&self, bubble: &InfoBubble) {
        self.record(format!("{}: did show info bubble", bubble.id()));
    }

    fn did_hide(&self, bubble: &InfoBubble) {
        self.record(format!("{}: did hide info bubble", bubble.id()));
    }
}
