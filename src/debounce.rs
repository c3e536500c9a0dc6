//! Keystroke coalescing for the search box.
//!
//! A new input restarts the quiet window and replaces any pending value.
//! A settled value equal to the last emitted one is dropped. The clock is
//! passed in by the caller.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    window: Duration,
    pending: Option<(T, Instant)>,
    last_emitted: Option<T>,
}

impl<T: Clone + PartialEq> Debouncer<T> {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            pending: None,
            last_emitted: None,
        }
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// Record an input at `now`, cancelling the pending one.
    pub fn push(&mut self, value: T, now: Instant) {
        self.pending = Some((value, now));
    }

    /// When the pending value settles, if there is one.
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|(_, at)| *at + self.window)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Emit the pending value once its window has elapsed.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        match self.deadline() {
            Some(deadline) if now >= deadline => self.flush(),
            _ => None,
        }
    }

    /// Emit the pending value immediately.
    pub fn flush(&mut self) -> Option<T> {
        let (value, _) = self.pending.take()?;
        if self.last_emitted.as_ref() == Some(&value) {
            return None;
        }
        self.last_emitted = Some(value.clone());
        Some(value)
    }

    /// Drop the pending value without emitting.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Drop the pending value and treat `value` as the last one emitted.
    ///
    /// Used when the downstream value is set directly, so later inputs are
    /// compared against what is actually applied.
    pub fn reset(&mut self, value: T) {
        self.pending = None;
        self.last_emitted = Some(value);
    }
}
