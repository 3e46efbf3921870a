//! Transient "Copied!" flag.
//!
//! Each copy schedules its own reset deadline. Deadlines are never cancelled:
//! whichever fires first after a copy clears the flag, even if a later copy
//! is still inside its own window.

use std::time::{Duration, Instant};

pub const COPY_FEEDBACK_WINDOW: Duration = Duration::from_millis(1500);

#[derive(Debug, Default)]
pub struct CopyFeedback {
    active: bool,
    pending: Vec<Instant>,
}

impl CopyFeedback {
    pub fn trigger(&mut self, now: Instant) {
        self.active = true;
        self.pending.push(now + COPY_FEEDBACK_WINDOW);
    }

    /// Fire every deadline at or before `now`. Returns true if any fired.
    pub fn tick(&mut self, now: Instant) -> bool {
        let before = self.pending.len();
        self.pending.retain(|&deadline| deadline > now);
        let fired = self.pending.len() != before;
        if fired {
            self.active = false;
        }
        fired
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.iter().min().copied()
    }
}
