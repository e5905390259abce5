use std::time::Duration;

use estate_common::autoplay::LiveShowcase;
use estate_common::config::ShowcaseConfig;
use estate_common::listing::{Listing, ListingStatus};
use estate_common::showcase::Showcase;

use crate::{at_millis, make_listing_form, EPOCH_MS};

/// Narrow enough for the single-card rotating layout.
pub const PHONE_WIDTH: u32 = 390;
pub const DESKTOP_WIDTH: u32 = 1440;

/// A showcase session with a controllable submission clock.
pub struct TestHarness {
    pub showcase: Showcase,
    clock_ms: i64,
}

impl TestHarness {
    pub fn setup() -> Self {
        Self::with_config(ShowcaseConfig::default())
    }

    pub fn with_config(config: ShowcaseConfig) -> Self {
        tracing_subscriber::fmt::try_init().ok();
        let mut showcase = Showcase::new(config);
        showcase.on_viewport_change(PHONE_WIDTH);
        Self {
            showcase,
            clock_ms: EPOCH_MS,
        }
    }

    /// Submit a valid user listing one second after the previous submission.
    pub fn submit(&mut self, title: &str, price: &str, status: ListingStatus) -> Listing {
        self.clock_ms += 1_000;
        let form = make_listing_form(title, price, status);
        self.showcase
            .add_listing_at(form, at_millis(self.clock_ms))
            .unwrap_or_else(|e| panic!("submission {title:?} rejected: {e}"))
    }

    /// Move the session behind a live autoplay timer.
    pub fn into_live(self, period: Duration) -> LiveShowcase {
        LiveShowcase::with_period(self.showcase, period)
            .unwrap_or_else(|e| panic!("autoplay period {period:?} rejected: {e}"))
    }
}
