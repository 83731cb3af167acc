use crate::carousel::{Carousel, CarouselError, CarouselObserver, ServiceTiming};
use crate::command::{CarouselAction, CarouselCommand};
use crate::time::{TimeDuration, TimeInstant, TimeSource};
use crate::types::{CarouselConfig, CarouselState};

/// An identifier for a carousel slot within a page.
///
/// Wraps a `usize` slot index. Views pick the id when mounting and use it to
/// route commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CarouselId(pub usize);

impl From<usize> for CarouselId {
    fn from(id: usize) -> Self {
        CarouselId(id)
    }
}

impl From<CarouselId> for usize {
    fn from(id: CarouselId) -> Self {
        id.0
    }
}

/// Errors that can occur during collection operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CollectionError {
    /// No carousel is mounted under this id.
    InvalidId(CarouselId),

    /// A carousel is already mounted under this id.
    DuplicateId(CarouselId),

    /// The id exceeds the collection's capacity.
    IdOutOfBounds { id: CarouselId, capacity: usize },

    /// A carousel operation failed.
    Carousel(CarouselError),
}

impl core::fmt::Display for CollectionError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            CollectionError::InvalidId(id) => {
                write!(f, "no carousel mounted under id {}", id.0)
            }
            CollectionError::DuplicateId(id) => {
                write!(f, "carousel id {} already mounted", id.0)
            }
            CollectionError::IdOutOfBounds { id, capacity } => {
                write!(
                    f,
                    "carousel id {} exceeds collection capacity of {}",
                    id.0, capacity
                )
            }
            CollectionError::Carousel(err) => write!(f, "carousel error: {}", err),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CollectionError {}

impl From<CarouselError> for CollectionError {
    fn from(err: CarouselError) -> Self {
        CollectionError::Carousel(err)
    }
}

/// Independent carousels sharing one page and one time source.
///
/// A landing page typically mounts a testimonial rotation and a hero slider
/// side by side. Each slot is owned and driven independently; the collection
/// only routes commands and aggregates service timing so the host can run a
/// single timer for the whole page.
///
/// # Type Parameters
/// * `'t` - Lifetime of the time source reference
/// * `I` - Time instant type
/// * `T` - Time source implementation type
/// * `O` - Observer type (same for every slot)
/// * `MAX` - Maximum number of carousels
pub struct CarouselCollection<'t, I: TimeInstant, T: TimeSource<I>, O: CarouselObserver, const MAX: usize> {
    carousels: [Option<Carousel<'t, I, T, O>>; MAX],
    time_source: &'t T,
}

impl<'t, I, T, O, const MAX: usize> CarouselCollection<'t, I, T, O, MAX>
where
    I: TimeInstant,
    T: TimeSource<I>,
    O: CarouselObserver,
{
    /// Creates an empty collection.
    pub fn new(time_source: &'t T) -> Self {
        Self {
            carousels: core::array::from_fn(|_| None),
            time_source,
        }
    }

    /// Mounts a new carousel under `id`.
    ///
    /// # Errors
    /// * `IdOutOfBounds` - `id` is not below `MAX`
    /// * `DuplicateId` - a carousel is already mounted there
    /// * `Carousel(InvalidConfig)` - `config` failed validation
    pub fn mount(
        &mut self,
        id: CarouselId,
        config: CarouselConfig<I::Duration>,
        observer: O,
    ) -> Result<(), CollectionError> {
        let time_source = self.time_source;
        let slot = self.slot_mut(id, true)?;
        if slot.is_some() {
            return Err(CollectionError::DuplicateId(id));
        }

        *slot = Some(Carousel::new(config, observer, time_source)?);
        info!("mounted carousel {}", id.0);
        Ok(())
    }

    /// Disposes the carousel under `id` and frees its slot.
    pub fn unmount(&mut self, id: CarouselId) -> Result<(), CollectionError> {
        let slot = self.slot_mut(id, false)?;
        let mut carousel = slot.take().ok_or(CollectionError::InvalidId(id))?;
        if !carousel.is_disposed() {
            carousel.dispose()?;
        }
        info!("unmounted carousel {}", id.0);
        Ok(())
    }

    /// Routes an action to the carousel under `id`.
    ///
    /// # Returns
    /// * `Ok(Some(duration))` - Time until that carousel needs service
    /// * `Ok(None)` - Carousel paused or disposed
    /// * `Err` - Unknown id or the carousel rejected the action
    pub fn handle_command(
        &mut self,
        id: CarouselId,
        action: CarouselAction,
    ) -> Result<Option<I::Duration>, CollectionError> {
        let carousel = self.get_mut(id)?;
        Ok(match carousel.handle_action(action)? {
            ServiceTiming::Delay(delay) => Some(delay),
            ServiceTiming::Idle => None,
        })
    }

    /// Routes a [`CarouselCommand`].
    pub fn dispatch(
        &mut self,
        command: CarouselCommand<CarouselId>,
    ) -> Result<Option<I::Duration>, CollectionError> {
        self.handle_command(command.carousel_id, command.action)
    }

    /// Services every running carousel and returns the shortest delay.
    ///
    /// # Returns
    /// * `Some(duration)` - Sleep this long before servicing again
    /// * `None` - Nothing is running; wait for the next command
    pub fn service_all(&mut self) -> Result<Option<I::Duration>, CollectionError> {
        let mut min_delay: Option<I::Duration> = None;

        for carousel in self.carousels.iter_mut().flatten() {
            if carousel.state() != CarouselState::Running {
                continue;
            }
            if let ServiceTiming::Delay(delay) = carousel.service()? {
                min_delay = match min_delay {
                    Some(current) if current.as_millis() <= delay.as_millis() => Some(current),
                    _ => Some(delay),
                };
            }
        }

        Ok(min_delay)
    }

    /// Returns the state of the carousel under `id`.
    pub fn state(&self, id: CarouselId) -> Result<CarouselState, CollectionError> {
        Ok(self.get(id)?.state())
    }

    /// Returns the displayed index of the carousel under `id`.
    pub fn current_index(&self, id: CarouselId) -> Result<usize, CollectionError> {
        Ok(self.get(id)?.current_index())
    }

    /// Returns the carousel under `id`.
    pub fn get(&self, id: CarouselId) -> Result<&Carousel<'t, I, T, O>, CollectionError> {
        self.carousels
            .get(id.0)
            .and_then(Option::as_ref)
            .ok_or(CollectionError::InvalidId(id))
    }

    /// Returns the carousel under `id` mutably.
    pub fn get_mut(
        &mut self,
        id: CarouselId,
    ) -> Result<&mut Carousel<'t, I, T, O>, CollectionError> {
        self.carousels
            .get_mut(id.0)
            .and_then(Option::as_mut)
            .ok_or(CollectionError::InvalidId(id))
    }

    /// Returns the number of mounted carousels.
    pub fn len(&self) -> usize {
        self.carousels.iter().filter(|c| c.is_some()).count()
    }

    /// Returns true if no carousel is mounted.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns true if a carousel is mounted under `id`.
    pub fn contains(&self, id: CarouselId) -> bool {
        id.0 < MAX && self.carousels[id.0].is_some()
    }

    fn slot_mut(
        &mut self,
        id: CarouselId,
        mounting: bool,
    ) -> Result<&mut Option<Carousel<'t, I, T, O>>, CollectionError> {
        match self.carousels.get_mut(id.0) {
            Some(slot) => Ok(slot),
            None if mounting => Err(CollectionError::IdOutOfBounds { id, capacity: MAX }),
            None => Err(CollectionError::InvalidId(id)),
        }
    }
}
