use std::time::{Duration, Instant};

/// Trailing-edge debounce deadline.
///
/// `schedule` replaces any pending deadline, so repeated calls within the
/// window collapse to a single firing at the latest call's deadline.
/// `poll` reports expiry exactly once and clears the deadline.
#[derive(Clone, Copy, Debug, Default)]
pub struct DebounceTimer {
    deadline: Option<Instant>,
}

impl DebounceTimer {
    pub fn new() -> Self {
        Self { deadline: None }
    }

    /// Arm the timer `delay_ms` from `now`, cancelling any pending deadline.
    pub fn schedule(&mut self, now: Instant, delay_ms: u64) {
        self.deadline = Some(now + Duration::from_millis(delay_ms));
    }

    /// Drop the pending deadline without firing.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// True exactly once, when `now` has reached the scheduled deadline.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}
