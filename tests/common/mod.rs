//! Shared test infrastructure for autoplay-carousel integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use autoplay_carousel::{
    CarouselChange, CarouselObserver, ChangeCause, TimeDuration, TimeInstant, TimeSource,
};

// ============================================================================
// Mock Time Types
// ============================================================================

/// Mock duration type for testing (wraps milliseconds)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestDuration(pub u64);

impl TimeDuration for TestDuration {
    const ZERO: Self = TestDuration(0);

    fn as_millis(&self) -> u64 {
        self.0
    }

    fn from_millis(millis: u64) -> Self {
        TestDuration(millis)
    }

    fn saturating_sub(self, other: Self) -> Self {
        TestDuration(self.0.saturating_sub(other.0))
    }
}

/// Mock instant type for testing
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestInstant(pub u64);

impl TimeInstant for TestInstant {
    type Duration = TestDuration;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        TestDuration(self.0 - earlier.0)
    }
}

// ============================================================================
// Mock Time Source
// ============================================================================

/// Mock time source with controllable time advancement
pub struct MockTimeSource {
    current_time: core::cell::Cell<TestInstant>,
}

impl MockTimeSource {
    pub fn new() -> Self {
        Self {
            current_time: core::cell::Cell::new(TestInstant(0)),
        }
    }

    /// Advance time by the given number of milliseconds
    pub fn advance(&self, millis: u64) {
        let current = self.current_time.get();
        self.current_time.set(TestInstant(current.0 + millis));
    }

    pub fn set_time(&self, time: TestInstant) {
        self.current_time.set(time);
    }
}

impl TimeSource<TestInstant> for MockTimeSource {
    fn now(&self) -> TestInstant {
        self.current_time.get()
    }
}

// ============================================================================
// Recording Observer
// ============================================================================

/// Observer that records every notification in order
pub struct Recorder {
    changes: heapless::Vec<CarouselChange, 64>,
}

impl Recorder {
    pub fn new() -> Self {
        Self {
            changes: heapless::Vec::new(),
        }
    }

    pub fn changes(&self) -> &[CarouselChange] {
        &self.changes
    }

    pub fn causes(&self) -> heapless::Vec<ChangeCause, 64> {
        self.changes.iter().map(|c| c.cause).collect()
    }

    pub fn count(&self, cause: ChangeCause) -> usize {
        self.changes.iter().filter(|c| c.cause == cause).count()
    }

    pub fn last_index(&self) -> Option<usize> {
        self.changes.last().map(|c| c.snapshot.current_index)
    }
}

impl CarouselObserver for Recorder {
    fn on_change(&mut self, change: CarouselChange) {
        let _ = self.changes.push(change);
    }
}
