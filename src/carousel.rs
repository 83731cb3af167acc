//! Autoplay carousel controller with pause-on-interaction.
//!
//! Provides [`Carousel`], which owns the current index into a fixed-size item
//! list, advances it on a fixed interval, and lets manual navigation take
//! precedence over autoplay. Also defines the [`CarouselObserver`] trait that
//! views implement to re-render on every transition.

use crate::command::CarouselAction;
use crate::time::{TimeInstant, TimeSource};
use crate::timer::IntervalTimer;
use crate::types::{
    CarouselChange, CarouselConfig, CarouselSnapshot, CarouselState, ChangeCause, ConfigError,
};

/// Receiver of state-changed notifications.
///
/// Notifications are delivered synchronously, in the order transitions occur.
pub trait CarouselObserver {
    /// Called after every transition.
    fn on_change(&mut self, change: CarouselChange);
}

impl<F: FnMut(CarouselChange)> CarouselObserver for F {
    fn on_change(&mut self, change: CarouselChange) {
        self(change)
    }
}

/// Observer that ignores all notifications.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl CarouselObserver for NoopObserver {
    fn on_change(&mut self, _change: CarouselChange) {}
}

/// Timing information returned by [`Carousel::service`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ServiceTiming<D> {
    /// Autoplay armed. Service again after this delay.
    Delay(D),

    /// Autoplay stopped. No servicing needed until the next command.
    Idle,
}

/// Errors that can occur during carousel operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CarouselError {
    /// Construction parameters failed validation.
    InvalidConfig(ConfigError),
    /// `go_to` target not below the item count.
    IndexOutOfRange { index: usize, item_count: usize },
    /// Operation on a disposed carousel.
    ControllerDisposed,
}

impl core::fmt::Display for CarouselError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            CarouselError::InvalidConfig(err) => write!(f, "invalid carousel config: {}", err),
            CarouselError::IndexOutOfRange { index, item_count } => write!(
                f,
                "index {} out of range for carousel of {} items",
                index, item_count
            ),
            CarouselError::ControllerDisposed => write!(f, "carousel has been disposed"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CarouselError {}

impl From<ConfigError> for CarouselError {
    fn from(err: ConfigError) -> Self {
        CarouselError::InvalidConfig(err)
    }
}

/// Why autoplay is currently stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PauseReason {
    /// `pause()` or autoplay disabled at mount.
    Explicit,
    /// Manual navigation.
    Interaction,
    /// Pointer hovering the carousel.
    Hover,
}

/// Controls the displayed index of a single carousel.
///
/// The host drives autoplay by calling [`service`](Self::service) whenever the
/// returned delay elapses. Pausing or disposing cancels the pending tick
/// before returning, so a later `service` call cannot advance the index.
///
/// # Type Parameters
/// * `'t` - Lifetime of the time source reference
/// * `I` - Time instant type
/// * `T` - Time source implementation type
/// * `O` - Observer notified on every transition
pub struct Carousel<'t, I: TimeInstant, T: TimeSource<I>, O: CarouselObserver> {
    config: CarouselConfig<I::Duration>,
    time_source: &'t T,
    observer: O,
    state: CarouselState,
    current_index: usize,
    timer: IntervalTimer<I>,
    pause_reason: Option<PauseReason>,
}

impl<'t, I: TimeInstant, T: TimeSource<I>, O: CarouselObserver> Carousel<'t, I, T, O> {
    /// Creates a carousel, `Running` when `config.autoplay` is set and
    /// `Paused` otherwise.
    ///
    /// # Errors
    /// `InvalidConfig` if the item count or interval is zero, or the initial
    /// index is out of range.
    pub fn new(
        config: CarouselConfig<I::Duration>,
        observer: O,
        time_source: &'t T,
    ) -> Result<Self, CarouselError> {
        config.validate()?;

        let mut timer = IntervalTimer::new(config.interval);
        let (state, pause_reason) = if config.autoplay {
            timer.arm(time_source.now());
            (CarouselState::Running, None)
        } else {
            (CarouselState::Paused, Some(PauseReason::Explicit))
        };

        Ok(Self {
            config,
            time_source,
            observer,
            state,
            current_index: config.initial_index,
            timer,
            pause_reason,
        })
    }

    /// Handles an action by dispatching to the matching method.
    ///
    /// # Returns
    /// * `Ok(ServiceTiming)` - When the carousel next needs servicing
    /// * `Err` - Operation rejected (disposed, out of range)
    pub fn handle_action(
        &mut self,
        action: CarouselAction,
    ) -> Result<ServiceTiming<I::Duration>, CarouselError> {
        match action {
            CarouselAction::Next => self.next()?,
            CarouselAction::Previous => self.previous()?,
            CarouselAction::GoTo(index) => self.go_to(index)?,
            CarouselAction::Pause => self.pause()?,
            CarouselAction::Resume => self.resume()?,
            CarouselAction::PointerEnter => self.pointer_enter()?,
            CarouselAction::PointerLeave => self.pointer_leave()?,
            CarouselAction::Dispose => {
                self.dispose()?;
                return Ok(ServiceTiming::Idle);
            }
        }
        Ok(self.timing())
    }

    /// Advances to the next item, wrapping to the first. Stops autoplay.
    pub fn next(&mut self) -> Result<(), CarouselError> {
        self.ensure_live("next")?;
        self.interrupt_autoplay();
        self.current_index = (self.current_index + 1) % self.config.item_count;
        self.notify(ChangeCause::Next);
        Ok(())
    }

    /// Steps back to the previous item, wrapping to the last. Stops autoplay.
    pub fn previous(&mut self) -> Result<(), CarouselError> {
        self.ensure_live("previous")?;
        self.interrupt_autoplay();
        self.current_index = match self.current_index {
            0 => self.config.item_count - 1,
            index => index - 1,
        };
        self.notify(ChangeCause::Previous);
        Ok(())
    }

    /// Jumps to `index`. Stops autoplay.
    ///
    /// # Errors
    /// `IndexOutOfRange` if `index >= item_count`; state is left untouched,
    /// autoplay included.
    pub fn go_to(&mut self, index: usize) -> Result<(), CarouselError> {
        self.ensure_live("go_to")?;
        if index >= self.config.item_count {
            debug!(
                "go_to({}) rejected: {} items",
                index, self.config.item_count
            );
            return Err(CarouselError::IndexOutOfRange {
                index,
                item_count: self.config.item_count,
            });
        }
        self.interrupt_autoplay();
        self.current_index = index;
        self.notify(ChangeCause::GoTo);
        Ok(())
    }

    /// Stops autoplay and cancels the pending tick. Idempotent.
    pub fn pause(&mut self) -> Result<(), CarouselError> {
        self.ensure_live("pause")?;
        self.stop_autoplay(PauseReason::Explicit);
        Ok(())
    }

    /// Restarts autoplay with the next tick one full interval from now.
    ///
    /// Calling this while already running restarts the cadence from zero.
    pub fn resume(&mut self) -> Result<(), CarouselError> {
        self.ensure_live("resume")?;
        self.timer.arm(self.time_source.now());
        self.pause_reason = None;
        if self.state != CarouselState::Running {
            self.state = CarouselState::Running;
            self.notify(ChangeCause::Resumed);
        }
        Ok(())
    }

    /// Holds autoplay while the pointer is over the carousel.
    ///
    /// Has no effect when autoplay is already stopped.
    pub fn pointer_enter(&mut self) -> Result<(), CarouselError> {
        self.ensure_live("pointer_enter")?;
        if self.state == CarouselState::Running {
            self.stop_autoplay(PauseReason::Hover);
        }
        Ok(())
    }

    /// Releases a hover hold.
    ///
    /// Autoplay only resumes if the pause came from [`pointer_enter`](Self::pointer_enter);
    /// manual navigation during the hover keeps the carousel paused.
    pub fn pointer_leave(&mut self) -> Result<(), CarouselError> {
        self.ensure_live("pointer_leave")?;
        if self.pause_reason == Some(PauseReason::Hover) {
            self.resume()?;
        }
        Ok(())
    }

    /// Cancels all pending ticks and moves to the terminal `Disposed` state.
    pub fn dispose(&mut self) -> Result<(), CarouselError> {
        self.ensure_live("dispose")?;
        self.timer.cancel();
        self.pause_reason = None;
        self.state = CarouselState::Disposed;
        self.notify(ChangeCause::Disposed);
        Ok(())
    }

    /// Services autoplay, advancing by one item if the interval has elapsed.
    ///
    /// However long the host went without servicing, at most one tick fires
    /// per call, and the next one is scheduled a full interval later.
    ///
    /// # Returns
    /// - `Ok(ServiceTiming::Delay(d))` - Autoplay armed, service again after `d`
    /// - `Ok(ServiceTiming::Idle)` - Paused, nothing to do
    /// - `Err(ControllerDisposed)` - Carousel disposed
    pub fn service(&mut self) -> Result<ServiceTiming<I::Duration>, CarouselError> {
        self.ensure_live("service")?;

        if self.state == CarouselState::Running && self.timer.poll(self.time_source.now()) {
            self.current_index = (self.current_index + 1) % self.config.item_count;
            debug!("autoplay tick -> {}", self.current_index);
            self.notify(ChangeCause::Tick);
        }

        Ok(self.timing())
    }

    /// Returns the current lifecycle state.
    pub fn state(&self) -> CarouselState {
        self.state
    }

    /// Returns the index of the displayed item.
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Returns the fixed number of items.
    pub fn item_count(&self) -> usize {
        self.config.item_count
    }

    /// Returns true if autoplay is armed.
    pub fn is_running(&self) -> bool {
        self.state == CarouselState::Running
    }

    /// Returns true if autoplay is stopped.
    pub fn is_paused(&self) -> bool {
        self.state == CarouselState::Paused
    }

    /// Returns true once disposed.
    pub fn is_disposed(&self) -> bool {
        self.state == CarouselState::Disposed
    }

    /// Returns the construction config.
    pub fn config(&self) -> &CarouselConfig<I::Duration> {
        &self.config
    }

    /// Returns the current index, item count and autoplay flag.
    pub fn snapshot(&self) -> CarouselSnapshot {
        CarouselSnapshot {
            current_index: self.current_index,
            item_count: self.config.item_count,
            auto_playing: self.is_running(),
        }
    }

    /// Time until the next automatic advance, if autoplay is armed.
    pub fn time_until_tick(&self) -> Option<I::Duration> {
        self.timer.remaining(self.time_source.now())
    }

    /// Returns a reference to the observer.
    pub fn observer(&self) -> &O {
        &self.observer
    }

    fn ensure_live(&self, operation: &'static str) -> Result<(), CarouselError> {
        if self.state == CarouselState::Disposed {
            warn!("{} rejected: carousel disposed", operation);
            return Err(CarouselError::ControllerDisposed);
        }
        Ok(())
    }

    fn interrupt_autoplay(&mut self) {
        self.stop_autoplay(PauseReason::Interaction);
    }

    fn stop_autoplay(&mut self, reason: PauseReason) {
        self.timer.cancel();
        match self.state {
            CarouselState::Running => {
                self.state = CarouselState::Paused;
                self.pause_reason = Some(reason);
                self.notify(ChangeCause::Paused);
            }
            // An explicit or manual pause overrides a hover hold so that
            // pointer_leave no longer resumes.
            CarouselState::Paused if reason != PauseReason::Hover => {
                self.pause_reason = Some(reason);
            }
            _ => {}
        }
    }

    fn timing(&self) -> ServiceTiming<I::Duration> {
        match self.time_until_tick() {
            Some(delay) if self.is_running() => ServiceTiming::Delay(delay),
            _ => ServiceTiming::Idle,
        }
    }

    fn notify(&mut self, cause: ChangeCause) {
        let change = CarouselChange {
            cause,
            snapshot: self.snapshot(),
        };
        self.observer.on_change(change);
    }
}
