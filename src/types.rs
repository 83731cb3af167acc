//! Core types for carousel configuration and state notifications.

use crate::time::TimeDuration;

/// Autoplay cadence of the testimonial rotation, in milliseconds.
pub const TESTIMONIAL_INTERVAL_MS: u64 = 4000;

/// Autoplay cadence of the hero background slider, in milliseconds.
pub const HERO_SLIDER_INTERVAL_MS: u64 = 5000;

/// Immutable construction parameters for a carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselConfig<D: TimeDuration> {
    /// Time between automatic advances.
    pub interval: D,

    /// Number of items rotated over.
    pub item_count: usize,

    /// Index shown when the carousel mounts.
    pub initial_index: usize,

    /// Whether the carousel starts `Running` or `Paused`.
    pub autoplay: bool,
}

impl<D: TimeDuration> CarouselConfig<D> {
    /// Creates a config starting at index 0 with autoplay enabled.
    pub fn new(item_count: usize, interval: D) -> Self {
        Self {
            interval,
            item_count,
            initial_index: 0,
            autoplay: true,
        }
    }

    /// Testimonial rotation: advances every 4 seconds.
    pub fn testimonials(item_count: usize) -> Self {
        Self::new(item_count, D::from_millis(TESTIMONIAL_INTERVAL_MS))
    }

    /// Hero background slider: advances every 5 seconds.
    pub fn hero_slider(item_count: usize) -> Self {
        Self::new(item_count, D::from_millis(HERO_SLIDER_INTERVAL_MS))
    }

    /// Sets the initial index.
    pub fn initial_index(mut self, index: usize) -> Self {
        self.initial_index = index;
        self
    }

    /// Sets whether autoplay is enabled at mount.
    ///
    /// Carousels gated on visibility typically mount with autoplay off and
    /// are resumed once they scroll into view.
    pub fn autoplay(mut self, autoplay: bool) -> Self {
        self.autoplay = autoplay;
        self
    }

    /// Checks the config invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.item_count == 0 {
            return Err(ConfigError::EmptyItems);
        }
        if self.interval.as_millis() == 0 {
            return Err(ConfigError::ZeroInterval);
        }
        if self.initial_index >= self.item_count {
            return Err(ConfigError::InitialIndexOutOfRange {
                index: self.initial_index,
                item_count: self.item_count,
            });
        }
        Ok(())
    }
}

/// Config validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// No items to rotate over.
    EmptyItems,

    /// Autoplay interval of zero.
    ZeroInterval,

    /// Initial index not below the item count.
    InitialIndexOutOfRange { index: usize, item_count: usize },
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::EmptyItems => write!(f, "carousel must have at least one item"),
            ConfigError::ZeroInterval => write!(f, "autoplay interval must be non-zero"),
            ConfigError::InitialIndexOutOfRange { index, item_count } => write!(
                f,
                "initial index {} out of range for {} items",
                index, item_count
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

/// Lifecycle state of a carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CarouselState {
    /// Autoplay armed; the index advances every interval.
    Running,
    /// Autoplay stopped. Manual navigation still works.
    Paused,
    /// Unmounted. Every operation is rejected.
    Disposed,
}

/// What triggered a state-changed notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ChangeCause {
    /// Automatic advance.
    Tick,
    /// Manual `next`.
    Next,
    /// Manual `previous`.
    Previous,
    /// Manual `go_to`.
    GoTo,
    /// Autoplay stopped.
    Paused,
    /// Autoplay restarted.
    Resumed,
    /// Carousel disposed.
    Disposed,
}

/// Point-in-time view of a carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CarouselSnapshot {
    /// Index of the displayed item, always below `item_count`.
    pub current_index: usize,
    /// Fixed number of items.
    pub item_count: usize,
    /// Whether autoplay is currently armed.
    pub auto_playing: bool,
}

/// Payload delivered to observers on every transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CarouselChange {
    pub cause: ChangeCause,
    pub snapshot: CarouselSnapshot,
}
