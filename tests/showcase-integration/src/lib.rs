use chrono::{DateTime, NaiveDate, TimeZone, Utc};

use estate_common::booking::BookingRequest;
use estate_common::listing::{ImageRef, Listing, ListingStatus};
use estate_common::store::NewListing;

pub mod harness;

/// Fixed "now" used by every fixture: 2024-03-01T00:00:00Z.
pub const EPOCH_MS: i64 = 1_709_251_200_000;

pub fn at_millis(ms: i64) -> DateTime<Utc> {
    Utc.timestamp_millis_opt(ms)
        .single()
        .unwrap_or_else(|| panic!("timestamp {ms} out of range"))
}

pub fn today() -> NaiveDate {
    at_millis(EPOCH_MS).date_naive()
}

/// A complete "list your own estate" submission.
pub fn make_listing_form(title: &str, price: &str, status: ListingStatus) -> NewListing {
    NewListing {
        title: title.to_string(),
        price: price.to_string(),
        location: "Kochi, India".to_string(),
        status: Some(status),
        description: format!("{title} by the backwaters"),
        features: vec!["Garden".to_string(), "Solar Power".to_string()],
        photo: Some(ImageRef::Upload(format!(
            "blob:local/{}",
            title.to_lowercase().replace(' ', "-")
        ))),
        ..Default::default()
    }
}

/// A booking request that passes validation against [`today`].
pub fn make_booking_request(name: &str) -> BookingRequest {
    BookingRequest {
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase()),
        phone: "+91 98765 43210".to_string(),
        visit_date: "2024-03-05".to_string(),
        message: Some("Morning visit preferred".to_string()),
    }
}

pub fn titles(listings: &[Listing]) -> Vec<&str> {
    listings.iter().map(|l| l.title.as_str()).collect()
}
