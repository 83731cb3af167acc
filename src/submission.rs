//! Success-display window shown after a form hand-off.
//!
//! After a form has been handed off, the view shows its "sent" state for a
//! fixed window and then resets the form. Nothing is awaited: the window
//! expires whether or not the external hand-off was completed.

use crate::time::{TimeDuration, TimeInstant, TimeSource};
use crate::timer::IntervalTimer;

/// How long the success state is shown, in milliseconds.
pub const SUCCESS_DISPLAY_MS: u64 = 3000;

/// Form lifecycle phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SubmissionPhase {
    /// Accepting input.
    Editing,
    /// Showing the success state.
    Submitted,
}

/// One-shot timer around a form's success state.
pub struct SubmissionWindow<'t, I: TimeInstant, T: TimeSource<I>> {
    time_source: &'t T,
    timer: IntervalTimer<I>,
}

impl<'t, I: TimeInstant, T: TimeSource<I>> SubmissionWindow<'t, I, T> {
    /// Creates a window with the standard 3 second display.
    pub fn new(time_source: &'t T) -> Self {
        Self::with_display(I::Duration::from_millis(SUCCESS_DISPLAY_MS), time_source)
    }

    pub fn with_display(display: I::Duration, time_source: &'t T) -> Self {
        Self {
            time_source,
            timer: IntervalTimer::new(display),
        }
    }

    /// Enters the success state. Ignored while already submitted.
    pub fn submit(&mut self) {
        if !self.timer.is_armed() {
            self.timer.arm(self.time_source.now());
        }
    }

    /// Returns true exactly once, when the window expires and the form
    /// should be reset.
    pub fn service(&mut self) -> bool {
        if self.timer.poll(self.time_source.now()) {
            self.timer.cancel();
            true
        } else {
            false
        }
    }

    /// Returns the current phase.
    pub fn phase(&self) -> SubmissionPhase {
        if self.timer.is_armed() {
            SubmissionPhase::Submitted
        } else {
            SubmissionPhase::Editing
        }
    }

    /// Returns true while the success state is shown.
    pub fn is_submitted(&self) -> bool {
        self.phase() == SubmissionPhase::Submitted
    }

    /// Time until the form resets, if submitted.
    pub fn remaining(&self) -> Option<I::Duration> {
        self.timer.remaining(self.time_source.now())
    }
}
