//! Repeating interval timer with cancel.
//!
//! [`IntervalTimer`] is the scheduling primitive underneath the carousel. It
//! never registers a callback of its own: the owner polls it with the current
//! instant, and a cancelled timer cannot fire on a later poll.

use crate::time::{TimeDuration, TimeInstant};

/// A re-armable repeating timer.
///
/// Fires when `interval` has elapsed since it was last armed. Firing re-arms
/// at the poll instant rather than the missed deadline, so a host suspended
/// for many intervals observes a single fire on wake.
#[derive(Debug, Clone, Copy)]
pub struct IntervalTimer<I: TimeInstant> {
    interval: I::Duration,
    armed_at: Option<I>,
}

impl<I: TimeInstant> IntervalTimer<I> {
    /// Creates a disarmed timer.
    pub fn new(interval: I::Duration) -> Self {
        Self {
            interval,
            armed_at: None,
        }
    }

    /// Schedules the next fire exactly one interval after `now`.
    ///
    /// Re-arming an armed timer discards any partially elapsed interval.
    pub fn arm(&mut self, now: I) {
        self.armed_at = Some(now);
    }

    /// Disarms the timer. Idempotent.
    pub fn cancel(&mut self) {
        self.armed_at = None;
    }

    /// Returns true if the timer is armed.
    pub fn is_armed(&self) -> bool {
        self.armed_at.is_some()
    }

    /// Returns the configured interval.
    pub fn interval(&self) -> I::Duration {
        self.interval
    }

    /// Checks the timer against `now`, returning true if it fired.
    ///
    /// A fired timer is re-armed at `now`.
    pub fn poll(&mut self, now: I) -> bool {
        let Some(armed_at) = self.armed_at else {
            return false;
        };

        if now.duration_since(armed_at).as_millis() >= self.interval.as_millis() {
            self.armed_at = Some(now);
            true
        } else {
            false
        }
    }

    /// Time left until the next fire, or `None` when disarmed.
    pub fn remaining(&self, now: I) -> Option<I::Duration> {
        self.armed_at
            .map(|armed_at| self.interval.saturating_sub(now.duration_since(armed_at)))
    }
}
