//! Stepped count-up animation for headline statistics.
//!
//! Counts from zero to a target in a fixed number of discrete steps spread
//! over a fixed duration. Like [`Carousel`](crate::Carousel), it is serviced
//! by the host and reads time from a [`TimeSource`].

use crate::carousel::ServiceTiming;
use crate::time::{TimeDuration, TimeInstant, TimeSource};

/// Default total animation time, in milliseconds.
pub const DEFAULT_COUNT_DURATION_MS: u64 = 2000;

/// Default number of discrete steps.
pub const DEFAULT_COUNT_STEPS: u32 = 60;

/// A one-shot count-up animation.
pub struct CountUp<'t, I: TimeInstant, T: TimeSource<I>> {
    time_source: &'t T,
    target: u64,
    duration: I::Duration,
    steps: u32,
    started_at: Option<I>,
    value: u64,
}

impl<'t, I: TimeInstant, T: TimeSource<I>> CountUp<'t, I, T> {
    /// Creates a counter with the default duration and step count.
    pub fn new(target: u64, time_source: &'t T) -> Self {
        Self::with_timing(
            target,
            I::Duration::from_millis(DEFAULT_COUNT_DURATION_MS),
            DEFAULT_COUNT_STEPS,
            time_source,
        )
    }

    /// Creates a counter with explicit timing. A step count of zero is
    /// treated as one.
    pub fn with_timing(target: u64, duration: I::Duration, steps: u32, time_source: &'t T) -> Self {
        Self {
            time_source,
            target,
            duration,
            steps: steps.max(1),
            started_at: None,
            value: 0,
        }
    }

    /// Starts counting. Later calls are ignored so the animation plays once.
    pub fn start(&mut self) -> ServiceTiming<I::Duration> {
        if self.started_at.is_none() {
            self.started_at = Some(self.time_source.now());
        }
        self.service().1
    }

    /// Recomputes the displayed value.
    ///
    /// # Returns
    /// The value to display and when to service again. The timing is
    /// `Idle` before `start` and once the target has been reached.
    pub fn service(&mut self) -> (u64, ServiceTiming<I::Duration>) {
        let Some(started_at) = self.started_at else {
            return (self.value, ServiceTiming::Idle);
        };

        let elapsed = self.time_source.now().duration_since(started_at).as_millis();
        let step_ms = self.step_millis();
        let steps = u64::from(self.steps);
        let done = elapsed / step_ms;

        if done >= steps {
            self.value = self.target;
            return (self.value, ServiceTiming::Idle);
        }

        // u128 keeps large targets from overflowing the product.
        self.value = (u128::from(done) * u128::from(self.target) / u128::from(steps)) as u64;
        let until_next = (done + 1) * step_ms - elapsed;
        (
            self.value,
            ServiceTiming::Delay(I::Duration::from_millis(until_next)),
        )
    }

    /// Returns the last computed value.
    pub fn value(&self) -> u64 {
        self.value
    }

    /// Returns the final value.
    pub fn target(&self) -> u64 {
        self.target
    }

    /// Returns true once the target is displayed.
    pub fn is_complete(&self) -> bool {
        self.started_at.is_some() && self.value == self.target
    }

    fn step_millis(&self) -> u64 {
        (self.duration.as_millis() / u64::from(self.steps)).max(1)
    }
}
