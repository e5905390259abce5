use estate_common::carousel::CarouselMode;
use estate_common::config::ShowcaseConfig;
use estate_common::error::EstateError;
use estate_common::filter::FilterSpec;
use estate_common::financing::{self, LoanTerm};
use estate_common::listing::{ListingId, ListingStatus};
use showcase_integration::harness::{TestHarness, DESKTOP_WIDTH, PHONE_WIDTH};
use showcase_integration::{make_booking_request, titles, today};

/// Completed filter, a user listing that does not match it, then clearing.
#[test]
fn filter_add_and_clear() {
    let mut h = TestHarness::setup();
    assert_eq!(h.showcase.visible_listings().len(), 6);

    h.showcase
        .set_filter_spec(FilterSpec::new().with_status(ListingStatus::Completed));
    assert_eq!(
        titles(h.showcase.visible_listings()),
        vec!["Skyline Haven", "Serenity Suites", "Oceanfront Oasis"]
    );

    let mine = h.submit("Backwater Villa", "100000", ListingStatus::Listed);
    assert_eq!(h.showcase.visible_listings().len(), 3, "Listed does not match Completed");
    assert_eq!(h.showcase.all_listings().len(), 7);

    h.showcase.clear_filters();
    let visible = h.showcase.visible_listings();
    assert_eq!(visible.len(), 7);
    assert_eq!(visible[0].title, "Skyline Haven");
    assert_eq!(visible[5].title, "Mountain Retreat");
    assert_eq!(visible[6].id, mine.id);
}

#[test]
fn user_listings_follow_builtins_in_insertion_order() {
    let mut h = TestHarness::setup();
    let first = h.submit("First Home", "250000", ListingStatus::Listed);
    let second = h.submit("Second Home", "350000", ListingStatus::Upcoming);
    let ids: Vec<ListingId> = h.showcase.all_listings().iter().map(|l| l.id).collect();
    assert_eq!(&ids[6..], &[first.id, second.id]);
    assert!(first.id < second.id);
}

#[test]
fn deleting_a_builtin_is_a_no_op() {
    let mut h = TestHarness::setup();
    h.showcase.jump_to(4).unwrap();
    let before = h.showcase.carousel_state();

    assert!(h.showcase.delete_listing(ListingId(1)).is_none());
    assert_eq!(h.showcase.all_listings().len(), 6);
    assert_eq!(h.showcase.carousel_state(), before);
}

#[test]
fn deleting_the_last_card_reclamps_the_carousel() {
    let mut h = TestHarness::setup();
    let mine = h.submit("Lake House", "500000", ListingStatus::Listed);
    h.showcase.jump_to(6).unwrap();

    let removed = h.showcase.delete_listing(mine.id).unwrap();
    assert_eq!(removed.title, "Lake House");
    let state = h.showcase.carousel_state();
    assert_eq!(state.filtered_count, 6);
    assert_eq!(state.index, 5);
}

#[test]
fn commission_is_added_to_the_displayed_price() {
    let mut h = TestHarness::setup();
    let l = h.submit("Garden Flat", "100000", ListingStatus::Listed);
    assert_eq!(l.base_price, Some(100_000));
    assert_eq!(l.numeric_price(), 115_000);
    assert_eq!(l.price, "₹1,15,000");

    let config = ShowcaseConfig {
        commission_percent: 0,
        ..ShowcaseConfig::default()
    };
    let mut h = TestHarness::with_config(config);
    let l = h.submit("Garden Flat", "100000", ListingStatus::Listed);
    assert_eq!(l.numeric_price(), 100_000);
}

#[test]
fn price_filter_sees_marked_up_price() {
    let mut h = TestHarness::setup();
    h.submit("Garden Flat", "100000", ListingStatus::Listed);

    let mut spec = FilterSpec::new();
    spec.set_min_price_input("1,10,000").unwrap();
    spec.set_max_price_input("1,20,000").unwrap();
    h.showcase.set_filter_spec(spec);
    assert_eq!(titles(h.showcase.visible_listings()), vec!["Garden Flat"]);
}

#[test]
fn emi_reference_quote() {
    let q = financing::quote(1_000_000.0, 0.30, 8.0, 10);
    assert_eq!(q.down_payment, 300_000.0);
    assert_eq!(q.loan_amount, 700_000.0);
    assert!((q.monthly_installment - 8_493.0).abs() < 1.0);

    let flat = financing::quote(1_000_000.0, 0.30, 0.0, 20);
    assert_eq!(flat.monthly_installment, 700_000.0 / 240.0);
}

#[test]
fn detail_modal_quotes_the_selected_listing() {
    let mut h = TestHarness::setup();
    h.showcase.open_details(ListingId(1)).unwrap();
    assert!(h.showcase.carousel_state().modal_open);

    let ten = h.showcase.quote_selected().unwrap();
    assert_eq!(ten.total_price, 1_250_000.0);
    h.showcase.select_term(LoanTerm::ThirtyYears);
    let thirty = h.showcase.quote_selected().unwrap();
    assert!(thirty.monthly_installment < ten.monthly_installment);
    assert!(thirty.total_interest() > ten.total_interest());

    h.showcase.close_details();
    assert!(!h.showcase.carousel_state().modal_open);
}

#[test]
fn show_all_then_filter_tracks_grid_size() {
    let mut h = TestHarness::setup();
    h.showcase.enter_show_all();
    h.showcase
        .set_filter_spec(FilterSpec::new().with_location("i"));
    let state = h.showcase.carousel_state();
    assert_eq!(state.mode, CarouselMode::ShowAll);
    assert_eq!(state.items_per_page, state.filtered_count);
    assert!(h.showcase.current_listing().is_none());
    assert!(matches!(
        h.showcase.jump_to(0),
        Err(EstateError::InvalidTransition { .. })
    ));
}

#[test]
fn desktop_viewport_shows_the_whole_row() {
    let mut h = TestHarness::setup();
    h.showcase.on_viewport_change(DESKTOP_WIDTH);
    assert_eq!(h.showcase.carousel_state().items_per_page, 6);
    assert_eq!(h.showcase.autoplay_schedule(), None);

    h.showcase.on_viewport_change(PHONE_WIDTH);
    assert_eq!(h.showcase.carousel_state().items_per_page, 1);
    assert!(h.showcase.autoplay_schedule().is_some());
}

#[test]
fn booking_a_visit() {
    let mut h = TestHarness::setup();
    let booking = h
        .showcase
        .book_visit(ListingId(5), &make_booking_request("Meera"), today())
        .unwrap();
    assert_eq!(booking.listing_id, ListingId(5));
    assert_eq!(booking.email, "meera@example.com");

    let mut late = make_booking_request("Arjun");
    late.visit_date = "2024-02-01".to_string();
    assert!(matches!(
        h.showcase.book_visit(ListingId(5), &late, today()),
        Err(EstateError::ValidationFailed { field: "visit_date", .. })
    ));
    assert_eq!(h.showcase.bookings().len(), 1);
}
