use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::catalog::builtin_listings;
use crate::currency::{apply_commission, format_inr, parse_amount_input};
use crate::error::{EstateError, Result};
use crate::listing::{ImageRef, Listing, ListingId, ListingStatus, Timeline, TransactionType};

/// User listing ids never go below this, keeping them clear of catalog ordinals.
pub const USER_ID_FLOOR: u64 = 1_000_000;

/// Raw "list your own estate" form input.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NewListing {
    pub title: String,
    /// Base price in rupees as typed, before commission.
    pub price: String,
    pub location: String,
    /// Defaults to `Listed` when not chosen.
    pub status: Option<ListingStatus>,
    pub description: String,
    /// One entry per feature input box; blanks are discarded.
    pub features: Vec<String>,
    pub timeline: Timeline,
    pub photo: Option<ImageRef>,
    pub property_type: Option<String>,
    pub bedrooms: Option<u8>,
    pub transaction_type: Option<TransactionType>,
}

fn required(value: &str, field: &'static str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(EstateError::missing(field));
    }
    Ok(trimmed.to_string())
}

impl NewListing {
    /// Check every required field without touching any store.
    /// Returns the parsed base price.
    pub fn validate(&self) -> Result<u64> {
        required(&self.title, "title")?;
        let price = required(&self.price, "price")?;
        let base_price = parse_amount_input(&price).ok_or_else(|| EstateError::ValidationFailed {
            field: "price",
            reason: format!("{price:?} is not a whole rupee amount"),
        })?;
        required(&self.location, "location")?;
        required(&self.description, "description")?;
        if self.photo.is_none() {
            return Err(EstateError::missing("photo"));
        }
        Ok(base_price)
    }
}

/// Holds the immutable built-in catalog and the visitor-submitted listings.
#[derive(Debug, Clone)]
pub struct ListingStore {
    builtin: Vec<Listing>,
    user: Vec<Listing>,
    last_user_id: u64,
    commission_percent: u32,
}

impl ListingStore {
    pub fn new(builtin: Vec<Listing>, commission_percent: u32) -> Self {
        debug_assert!(builtin.iter().all(|l| l.id.0 < USER_ID_FLOOR));
        Self {
            builtin,
            user: Vec::new(),
            last_user_id: 0,
            commission_percent,
        }
    }

    /// Store seeded with the built-in catalog.
    pub fn with_catalog(commission_percent: u32) -> Self {
        Self::new(builtin_listings(), commission_percent)
    }

    /// Validate and append a user listing, stamped with the current time.
    pub fn add_listing(&mut self, input: NewListing) -> Result<Listing> {
        self.add_listing_at(input, Utc::now())
    }

    /// Validate and append a user listing created at `now`.
    ///
    /// The id is `now` in milliseconds, bumped past the previous id when two
    /// submissions land in the same millisecond (or the clock steps back).
    pub fn add_listing_at<Tz: TimeZone>(
        &mut self,
        input: NewListing,
        now: DateTime<Tz>,
    ) -> Result<Listing> {
        let base_price = input.validate()?;
        let photo = input.photo.ok_or_else(|| EstateError::missing("photo"))?;
        let id = self.next_user_id(now.timestamp_millis());

        let features: Vec<String> = input
            .features
            .iter()
            .map(|f| f.trim())
            .filter(|f| !f.is_empty())
            .map(str::to_string)
            .collect();
        let timeline = (!input.timeline.is_blank()).then_some(input.timeline);

        let listing = Listing {
            id,
            title: input.title.trim().to_string(),
            location: input.location.trim().to_string(),
            price: format_inr(apply_commission(base_price, self.commission_percent)),
            base_price: Some(base_price),
            status: Some(input.status.unwrap_or(ListingStatus::Listed)),
            description: Some(input.description.trim().to_string()),
            features,
            timeline,
            specifications: None,
            image: photo,
            is_user_listed: true,
            property_type: input.property_type,
            bedrooms: input.bedrooms,
            transaction_type: input.transaction_type,
        };

        info!(id = %listing.id, title = %listing.title, price = %listing.price, "listing added");
        self.user.push(listing.clone());
        Ok(listing)
    }

    fn next_user_id(&mut self, now_ms: i64) -> ListingId {
        let now_ms = u64::try_from(now_ms).unwrap_or(0);
        let id = now_ms
            .max(self.last_user_id.saturating_add(1))
            .max(USER_ID_FLOOR);
        self.last_user_id = id;
        ListingId(id)
    }

    /// Remove a user listing. Unknown ids and built-in ids are ignored.
    ///
    /// The removed listing is handed back so the caller can release its upload.
    pub fn delete_listing(&mut self, id: ListingId) -> Option<Listing> {
        let pos = self.user.iter().position(|l| l.id == id);
        match pos {
            Some(pos) => {
                let removed = self.user.remove(pos);
                info!(id = %id, title = %removed.title, "listing deleted");
                Some(removed)
            }
            None => {
                debug!(id = %id, "delete ignored: not a user listing");
                None
            }
        }
    }

    /// Built-ins in catalog order, then user listings in insertion order.
    pub fn all_listings(&self) -> Vec<Listing> {
        self.iter().cloned().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Listing> {
        self.builtin.iter().chain(self.user.iter())
    }

    pub fn get(&self, id: ListingId) -> Option<&Listing> {
        self.iter().find(|l| l.id == id)
    }

    pub fn builtin_listings(&self) -> &[Listing] {
        &self.builtin
    }

    pub fn user_listings(&self) -> &[Listing] {
        &self.user
    }

    pub fn len(&self) -> usize {
        self.builtin.len() + self.user.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
