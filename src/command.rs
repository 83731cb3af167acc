//! Command-based control for carousels.

/// Actions a view forwards to a carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CarouselAction {
    /// Next-arrow click.
    Next,
    /// Previous-arrow click.
    Previous,
    /// Dot selection.
    GoTo(usize),
    /// Stop autoplay.
    Pause,
    /// Restart autoplay, e.g. when the section scrolls into view.
    Resume,
    /// Pointer entered the carousel.
    PointerEnter,
    /// Pointer left the carousel.
    PointerLeave,
    /// View unmounted.
    Dispose,
}

/// Command targeting a specific carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselCommand<Id> {
    pub carousel_id: Id,
    pub action: CarouselAction,
}

impl<Id> CarouselCommand<Id> {
    /// Creates command.
    pub fn new(carousel_id: Id, action: CarouselAction) -> Self {
        Self {
            carousel_id,
            action,
        }
    }
}
