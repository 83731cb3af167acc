#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`Carousel`**: Owns the current index of one carousel and advances it on a fixed interval
//! - **`CarouselConfig`**: Item count, interval, initial index and autoplay flag, validated at construction
//! - **`CarouselObserver`**: Trait a view implements to re-render on every state change
//! - **`IntervalTimer`**: Re-armable repeating timer with synchronous cancel
//! - **`CarouselCollection`**: Independent carousels on one page sharing a time source
//! - **`SlideDeck`**: Fixed-capacity payload list a carousel rotates over
//! - **`CountUp`**: Stepped count-up animation for headline statistics
//! - **`SubmissionWindow`**: Timed success state after a form hand-off
//! - **`TimeSource`**: Trait to implement for your host's clock
//! - **`CarouselAction`**: Commands a view forwards to a carousel
//!
//! With the `handoff` feature, `handoff` renders form submissions into
//! pre-filled chat links and `checkout` wraps a vendor payment widget.

#[macro_use]
mod fmt;

pub mod time;
pub mod timer;
pub mod types;
pub mod carousel;
pub mod command;
pub mod collection;
pub mod deck;
pub mod counter;
pub mod submission;

#[cfg(feature = "handoff")]
pub mod handoff;
#[cfg(feature = "handoff")]
pub mod checkout;

pub use carousel::{Carousel, CarouselError, CarouselObserver, NoopObserver, ServiceTiming};
pub use collection::{CarouselCollection, CarouselId, CollectionError};
pub use command::{CarouselAction, CarouselCommand};
pub use counter::CountUp;
pub use deck::{DeckBuilder, DeckError, SlideDeck, Testimonial};
pub use submission::{SubmissionPhase, SubmissionWindow};
pub use time::{TimeDuration, TimeInstant, TimeSource};
#[cfg(feature = "std")]
pub use time::SystemClock;
pub use timer::IntervalTimer;
pub use types::{
    CarouselChange, CarouselConfig, CarouselSnapshot, CarouselState, ChangeCause, ConfigError,
    HERO_SLIDER_INTERVAL_MS, TESTIMONIAL_INTERVAL_MS,
};
