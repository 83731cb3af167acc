//! Integration tests for CarouselCollection

mod common;
use common::*;

use autoplay_carousel::{
    CarouselAction, CarouselCollection, CarouselCommand, CarouselConfig, CarouselError,
    CarouselId, CarouselState, CollectionError, ConfigError, SlideDeck, Testimonial,
};

const TESTIMONIALS: CarouselId = CarouselId(0);
const HERO: CarouselId = CarouselId(1);

type Page<'t> = CarouselCollection<'t, TestInstant, MockTimeSource, Recorder, 4>;

fn landing_page(timer: &MockTimeSource) -> Page<'_> {
    let mut page = Page::new(timer);
    page.mount(TESTIMONIALS, CarouselConfig::testimonials(3), Recorder::new())
        .unwrap();
    page.mount(HERO, CarouselConfig::hero_slider(4), Recorder::new())
        .unwrap();
    page
}

#[test]
fn mounted_carousels_run_independently() {
    let timer = MockTimeSource::new();
    let mut page = landing_page(&timer);
    assert_eq!(page.len(), 2);

    timer.advance(4000);
    assert_eq!(page.service_all().unwrap(), Some(TestDuration(1000)));
    assert_eq!(page.current_index(TESTIMONIALS).unwrap(), 1);
    assert_eq!(page.current_index(HERO).unwrap(), 0);

    timer.advance(1000);
    assert_eq!(page.service_all().unwrap(), Some(TestDuration(3000)));
    assert_eq!(page.current_index(HERO).unwrap(), 1);
}

#[test]
fn interacting_with_one_carousel_does_not_pause_the_other() {
    let timer = MockTimeSource::new();
    let mut page = landing_page(&timer);

    assert_eq!(
        page.handle_command(TESTIMONIALS, CarouselAction::Next).unwrap(),
        None
    );
    assert_eq!(page.state(TESTIMONIALS).unwrap(), CarouselState::Paused);
    assert_eq!(page.state(HERO).unwrap(), CarouselState::Running);

    timer.advance(5000);
    assert_eq!(page.service_all().unwrap(), Some(TestDuration(5000)));
    assert_eq!(page.current_index(TESTIMONIALS).unwrap(), 1);
    assert_eq!(page.current_index(HERO).unwrap(), 1);
}

#[test]
fn service_all_returns_none_when_nothing_runs() {
    let timer = MockTimeSource::new();
    let mut page = landing_page(&timer);

    page.dispatch(CarouselCommand::new(TESTIMONIALS, CarouselAction::Pause))
        .unwrap();
    page.dispatch(CarouselCommand::new(HERO, CarouselAction::PointerEnter))
        .unwrap();

    timer.advance(100_000);
    assert_eq!(page.service_all().unwrap(), None);
}

#[test]
fn resume_command_reports_next_service_delay() {
    let timer = MockTimeSource::new();
    let mut page = landing_page(&timer);

    page.handle_command(HERO, CarouselAction::Pause).unwrap();
    timer.advance(2500);
    assert_eq!(
        page.handle_command(HERO, CarouselAction::Resume).unwrap(),
        Some(TestDuration(5000))
    );
}

#[test]
fn commands_to_unknown_ids_fail() {
    let timer = MockTimeSource::new();
    let mut page = landing_page(&timer);

    assert_eq!(
        page.handle_command(CarouselId(3), CarouselAction::Next),
        Err(CollectionError::InvalidId(CarouselId(3)))
    );
    assert_eq!(
        page.handle_command(CarouselId(42), CarouselAction::Next),
        Err(CollectionError::InvalidId(CarouselId(42)))
    );
    assert!(page.state(CarouselId(2)).is_err());
}

#[test]
fn carousel_errors_are_wrapped() {
    let timer = MockTimeSource::new();
    let mut page = landing_page(&timer);

    assert_eq!(
        page.handle_command(HERO, CarouselAction::GoTo(4)),
        Err(CollectionError::Carousel(CarouselError::IndexOutOfRange {
            index: 4,
            item_count: 4
        }))
    );
    assert_eq!(
        page.mount(CarouselId(2), CarouselConfig::testimonials(0), Recorder::new()),
        Err(CollectionError::Carousel(CarouselError::InvalidConfig(
            ConfigError::EmptyItems
        )))
    );
    assert!(!page.contains(CarouselId(2)));
}

#[test]
fn disposed_carousel_is_skipped_until_unmounted() {
    let timer = MockTimeSource::new();
    let mut page = landing_page(&timer);

    page.handle_command(TESTIMONIALS, CarouselAction::Dispose)
        .unwrap();
    assert_eq!(page.state(TESTIMONIALS).unwrap(), CarouselState::Disposed);

    timer.advance(5000);
    assert_eq!(page.service_all().unwrap(), Some(TestDuration(5000)));

    assert_eq!(
        page.handle_command(TESTIMONIALS, CarouselAction::Next),
        Err(CollectionError::Carousel(CarouselError::ControllerDisposed))
    );

    page.unmount(TESTIMONIALS).unwrap();
    assert_eq!(page.len(), 1);
}

#[test]
fn unmount_notifies_dispose_and_slot_can_be_remounted() {
    let timer = MockTimeSource::new();
    let mut page = landing_page(&timer);

    page.unmount(HERO).unwrap();
    assert!(!page.contains(HERO));

    page.mount(HERO, CarouselConfig::hero_slider(2), Recorder::new())
        .unwrap();
    assert_eq!(page.state(HERO).unwrap(), CarouselState::Running);
    assert!(page.get(HERO).unwrap().observer().changes().is_empty());
}

#[test]
fn deck_drives_displayed_testimonial() {
    let timer = MockTimeSource::new();
    let deck = SlideDeck::<Testimonial, 8>::from_items([
        Testimonial::new("Conversions tripled.", "A. Sharma", "Founder", 5),
        Testimonial::new("Profitable in 30 days.", "R. Mehta", "CEO", 5),
        Testimonial::new("Organic traffic up in weeks.", "K. Verma", "Director", 5),
    ])
    .unwrap();

    let mut page = Page::new(&timer);
    page.mount(
        TESTIMONIALS,
        deck.config(TestDuration(4000)),
        Recorder::new(),
    )
    .unwrap();

    timer.advance(8000);
    page.service_all().unwrap();
    timer.advance(4000);
    page.service_all().unwrap();

    let shown = deck.current(page.get(TESTIMONIALS).unwrap()).unwrap();
    assert_eq!(shown.author, "K. Verma");
}
