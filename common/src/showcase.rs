use std::collections::BTreeSet;

use chrono::{DateTime, NaiveDate, TimeZone};
use tracing::{debug, info, warn};

use crate::booking::{Booking, BookingId, BookingRequest};
use crate::carousel::{CarouselController, CarouselMode, CarouselState};
use crate::config::ShowcaseConfig;
use crate::error::{EstateError, Result};
use crate::filter::{apply_filters, available_features, FilterSpec};
use crate::financing::{FinancingQuote, LoanTerm};
use crate::listing::{Listing, ListingDetails, ListingId};
use crate::store::{ListingStore, NewListing};

/// One visitor's session: catalog, filter, carousel, detail modal and bookings.
///
/// Every mutating method runs the whole update sequence (change the store or
/// filter, recompute the visible set, re-clamp the carousel) before
/// returning, so no caller can observe a half-updated view.
#[derive(Debug, Clone)]
pub struct Showcase {
    config: ShowcaseConfig,
    store: ListingStore,
    filter: FilterSpec,
    visible: Vec<Listing>,
    carousel: CarouselController,
    selected: Option<ListingId>,
    term: LoanTerm,
    bookings: Vec<Booking>,
}

impl Showcase {
    /// Session over the built-in catalog.
    pub fn new(config: ShowcaseConfig) -> Self {
        let store = ListingStore::with_catalog(config.commission_percent);
        Self::with_store(config, store)
    }

    pub fn with_store(config: ShowcaseConfig, store: ListingStore) -> Self {
        let visible = store.all_listings();
        let carousel = CarouselController::new(visible.len(), config.wide_viewport_min_width);
        Self {
            term: config.default_term,
            config,
            store,
            filter: FilterSpec::default(),
            visible,
            carousel,
            selected: None,
            bookings: Vec::new(),
        }
    }

    pub fn config(&self) -> &ShowcaseConfig {
        &self.config
    }

    fn refresh(&mut self) {
        let all = self.store.all_listings();
        self.visible = apply_filters(&all, &self.filter);
        self.carousel.on_filtered_set_changed(self.visible.len());
        debug!(
            total = all.len(),
            visible = self.visible.len(),
            index = self.carousel.index(),
            "filtered view recomputed"
        );
    }

    // ── Listings ────────────────────────────────────────────────────────────

    pub fn add_listing(&mut self, input: NewListing) -> Result<Listing> {
        self.add_listing_at(input, chrono::Utc::now())
    }

    pub fn add_listing_at<Tz: TimeZone>(
        &mut self,
        input: NewListing,
        now: DateTime<Tz>,
    ) -> Result<Listing> {
        let listing = self.store.add_listing_at(input, now).inspect_err(|e| {
            warn!(error = %e, "listing submission rejected");
        })?;
        self.refresh();
        Ok(listing)
    }

    /// Delete a user listing. Closes the detail modal if it was showing it.
    pub fn delete_listing(&mut self, id: ListingId) -> Option<Listing> {
        let removed = self.store.delete_listing(id)?;
        if self.selected == Some(id) {
            self.close_details();
        }
        self.refresh();
        Some(removed)
    }

    pub fn all_listings(&self) -> Vec<Listing> {
        self.store.all_listings()
    }

    pub fn store(&self) -> &ListingStore {
        &self.store
    }

    // ── Filtering ───────────────────────────────────────────────────────────

    pub fn set_filter_spec(&mut self, spec: FilterSpec) {
        self.filter = spec;
        self.refresh();
    }

    pub fn clear_filters(&mut self) {
        self.filter.clear();
        self.refresh();
    }

    pub fn toggle_feature(&mut self, feature: &str) -> bool {
        let required = self.filter.toggle_feature(feature);
        self.refresh();
        required
    }

    pub fn filter(&self) -> &FilterSpec {
        &self.filter
    }

    /// The filtered listings, in catalog order.
    pub fn visible_listings(&self) -> &[Listing] {
        &self.visible
    }

    /// Feature tags offered by the filter dialog, across the whole catalog.
    pub fn available_features(&self) -> BTreeSet<String> {
        available_features(self.store.iter())
    }

    // ── Carousel ────────────────────────────────────────────────────────────

    pub fn carousel_state(&self) -> CarouselState {
        self.carousel.state()
    }

    pub fn carousel(&self) -> &CarouselController {
        &self.carousel
    }

    /// The card in focus while rotating.
    pub fn current_listing(&self) -> Option<&Listing> {
        match self.carousel.mode() {
            CarouselMode::Rotating => self.visible.get(self.carousel.index()),
            CarouselMode::ShowAll => None,
        }
    }

    pub fn enter_show_all(&mut self) {
        self.carousel.enter_show_all();
    }

    pub fn exit_show_all(&mut self) {
        self.carousel.exit_show_all();
    }

    pub fn next(&mut self) {
        self.carousel.next();
    }

    pub fn prev(&mut self) {
        self.carousel.prev();
    }

    pub fn jump_to(&mut self, index: usize) -> Result<()> {
        self.carousel.jump_to(index).inspect_err(|e| {
            warn!(error = %e, "carousel jump rejected");
        })
    }

    pub fn on_viewport_change(&mut self, width: u32) {
        self.carousel.on_viewport_change(width);
    }

    pub fn autoplay_tick(&mut self, generation: u64) -> bool {
        self.carousel.autoplay_tick(generation)
    }

    pub fn autoplay_schedule(&self) -> Option<u64> {
        self.carousel.autoplay_schedule()
    }

    pub fn teardown(&mut self) {
        self.carousel.teardown();
    }

    // ── Detail modal & financing ────────────────────────────────────────────

    pub fn open_details(&mut self, id: ListingId) -> Result<ListingDetails<'_>> {
        if self.store.get(id).is_none() {
            return Err(EstateError::UnknownListing(id));
        }
        self.selected = Some(id);
        self.carousel.on_modal_open();
        self.selected_details().ok_or(EstateError::UnknownListing(id))
    }

    pub fn close_details(&mut self) {
        if self.selected.take().is_some() {
            self.carousel.on_modal_close();
        }
    }

    pub fn selected_details(&self) -> Option<ListingDetails<'_>> {
        self.selected
            .and_then(|id| self.store.get(id))
            .map(Listing::details)
    }

    pub fn select_term(&mut self, term: LoanTerm) {
        self.term = term;
    }

    pub fn selected_term(&self) -> LoanTerm {
        self.term
    }

    /// Financing quote for the listing open in the detail modal.
    pub fn quote_selected(&self) -> Option<FinancingQuote> {
        let id = self.selected?;
        self.quote(id, self.term).ok()
    }

    pub fn quote(&self, id: ListingId, term: LoanTerm) -> Result<FinancingQuote> {
        let listing = self.store.get(id).ok_or(EstateError::UnknownListing(id))?;
        Ok(FinancingQuote::for_listing(
            listing,
            self.config.financing_terms(),
            term,
        ))
    }

    // ── Bookings ────────────────────────────────────────────────────────────

    pub fn book_visit(
        &mut self,
        listing_id: ListingId,
        request: &BookingRequest,
        today: NaiveDate,
    ) -> Result<Booking> {
        if self.store.get(listing_id).is_none() {
            return Err(EstateError::UnknownListing(listing_id));
        }
        let id = BookingId(self.bookings.len() as u64 + 1);
        let booking = request
            .validate(id, listing_id, today)
            .inspect_err(|e| warn!(error = %e, "booking rejected"))?;
        info!(booking = id.0, listing = %listing_id, date = %booking.visit_date, "visit booked");
        self.bookings.push(booking.clone());
        Ok(booking)
    }

    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }
}

impl Default for Showcase {
    fn default() -> Self {
        Self::new(ShowcaseConfig::default())
    }
}
