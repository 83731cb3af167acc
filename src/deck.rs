use crate::carousel::{Carousel, CarouselObserver};
use crate::time::{TimeDuration, TimeInstant, TimeSource};
use crate::types::CarouselConfig;
use heapless::Vec;

/// A fixed-capacity list of items a carousel rotates over.
///
/// The deck owns the payload (testimonials, hero slides, headlines); the
/// carousel only owns the index. Keeping them apart lets one deck be shown
/// by several carousels, and lets the item count of a carousel config be
/// derived from the deck instead of being kept in sync by hand.
///
/// # Type Parameters
/// * `Item` - Payload type
/// * `N` - Maximum number of items
#[derive(Debug, Clone)]
pub struct SlideDeck<Item, const N: usize> {
    items: Vec<Item, N>,
}

impl<Item, const N: usize> SlideDeck<Item, N> {
    /// Creates a new deck builder.
    pub fn builder() -> DeckBuilder<Item, N> {
        DeckBuilder::new()
    }

    /// Builds a deck from an array of items.
    ///
    /// # Errors
    /// * `Empty` - `items` has no elements
    /// * `CapacityExceeded` - more than `N` items
    pub fn from_items<const M: usize>(items: [Item; M]) -> Result<Self, DeckError> {
        let mut builder = Self::builder();
        for item in items {
            builder = builder.item(item)?;
        }
        builder.build()
    }

    /// Carousel config over this deck with the given autoplay interval.
    pub fn config<D: TimeDuration>(&self, interval: D) -> CarouselConfig<D> {
        CarouselConfig::new(self.items.len(), interval)
    }

    /// Returns the item at `index`.
    pub fn get(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    /// Returns the item a carousel is currently showing.
    ///
    /// `None` if the carousel was built for a larger deck.
    pub fn current<I, T, O>(&self, carousel: &Carousel<'_, I, T, O>) -> Option<&Item>
    where
        I: TimeInstant,
        T: TimeSource<I>,
        O: CarouselObserver,
    {
        self.items.get(carousel.current_index())
    }

    /// Returns the number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always false: decks are validated non-empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Item> {
        self.items.iter()
    }
}

/// Builder for validated slide decks.
#[derive(Debug)]
pub struct DeckBuilder<Item, const N: usize> {
    items: Vec<Item, N>,
}

impl<Item, const N: usize> DeckBuilder<Item, N> {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Appends an item.
    ///
    /// # Errors
    /// `CapacityExceeded` once `N` items have been added.
    pub fn item(mut self, item: Item) -> Result<Self, DeckError> {
        self.items
            .push(item)
            .map_err(|_| DeckError::CapacityExceeded)?;
        Ok(self)
    }

    /// Builds the deck.
    ///
    /// # Errors
    /// `Empty` if no items were added.
    pub fn build(self) -> Result<SlideDeck<Item, N>, DeckError> {
        if self.items.is_empty() {
            return Err(DeckError::Empty);
        }
        Ok(SlideDeck { items: self.items })
    }
}

impl<Item, const N: usize> Default for DeckBuilder<Item, N> {
    fn default() -> Self {
        Self::new()
    }
}

/// Deck construction errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DeckError {
    /// No items provided.
    Empty,

    /// Deck capacity exceeded.
    CapacityExceeded,
}

impl core::fmt::Display for DeckError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            DeckError::Empty => write!(f, "deck must have at least one item"),
            DeckError::CapacityExceeded => write!(f, "deck capacity exceeded"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for DeckError {}

/// A client quote shown in the testimonial rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub role: &'static str,
    /// Star rating, 1 to 5.
    pub rating: u8,
}

impl Testimonial {
    pub const fn new(
        quote: &'static str,
        author: &'static str,
        role: &'static str,
        rating: u8,
    ) -> Self {
        Self {
            quote,
            author,
            role,
            rating,
        }
    }
}
