use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::currency::parse_amount_input;
use crate::error::{EstateError, Result};
use crate::listing::{Listing, ListingStatus, TransactionType};

/// Optional predicates over listings. An absent field places no constraint;
/// the present ones are AND-ed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterSpec {
    pub status: Option<ListingStatus>,
    /// Case-insensitive substring of the listing's location.
    pub location: Option<String>,
    pub min_price: Option<u64>,
    pub max_price: Option<u64>,
    /// Every one of these must be among the listing's features.
    pub features: BTreeSet<String>,
    pub property_type: Option<String>,
    pub bedrooms: Option<u8>,
    pub transaction_type: Option<TransactionType>,
}

impl FilterSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn with_status(mut self, status: ListingStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Blank text means "any location".
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        let location = location.into();
        self.location = (!location.trim().is_empty()).then_some(location);
        self
    }

    pub fn with_price_range(mut self, min: Option<u64>, max: Option<u64>) -> Self {
        self.min_price = min;
        self.max_price = max;
        self
    }

    pub fn with_feature(mut self, feature: impl Into<String>) -> Self {
        self.features.insert(feature.into());
        self
    }

    pub fn with_property_type(mut self, property_type: impl Into<String>) -> Self {
        self.property_type = Some(property_type.into());
        self
    }

    pub fn with_bedrooms(mut self, bedrooms: u8) -> Self {
        self.bedrooms = Some(bedrooms);
        self
    }

    pub fn with_transaction_type(mut self, transaction_type: TransactionType) -> Self {
        self.transaction_type = Some(transaction_type);
        self
    }

    /// Set the lower price bound from raw text input.
    pub fn set_min_price_input(&mut self, input: &str) -> Result<()> {
        self.min_price = parse_price_bound(input)?;
        Ok(())
    }

    /// Set the upper price bound from raw text input.
    pub fn set_max_price_input(&mut self, input: &str) -> Result<()> {
        self.max_price = parse_price_bound(input)?;
        Ok(())
    }

    /// Add the feature if absent, remove it if present. Returns whether it is now required.
    pub fn toggle_feature(&mut self, feature: &str) -> bool {
        if self.features.remove(feature) {
            false
        } else {
            self.features.insert(feature.to_string());
            true
        }
    }

    /// Whether a single listing satisfies every present predicate.
    pub fn matches(&self, listing: &Listing) -> bool {
        if let Some(status) = &self.status {
            if listing.display_status() != *status {
                return false;
            }
        }

        if let Some(location) = &self.location {
            if !listing
                .location
                .to_lowercase()
                .contains(&location.to_lowercase())
            {
                return false;
            }
        }

        if self.min_price.is_some() || self.max_price.is_some() {
            let price = listing.numeric_price();
            if self.min_price.is_some_and(|min| price < min) {
                return false;
            }
            if self.max_price.is_some_and(|max| price > max) {
                return false;
            }
        }

        if !self.features.iter().all(|f| listing.has_feature(f)) {
            return false;
        }

        // Facets only constrain listings that carry them.
        if let (Some(want), Some(have)) = (&self.property_type, &listing.property_type) {
            if want != have {
                return false;
            }
        }
        if let (Some(want), Some(have)) = (self.bedrooms, listing.bedrooms) {
            if want != have {
                return false;
            }
        }
        if let (Some(want), Some(have)) = (self.transaction_type, listing.transaction_type) {
            if want != have {
                return false;
            }
        }

        true
    }
}

/// Parse a price bound typed by the user.
///
/// Blank input clears the bound; anything that is not a whole amount is rejected
/// rather than coerced.
pub fn parse_price_bound(input: &str) -> Result<Option<u64>> {
    if input.trim().is_empty() {
        return Ok(None);
    }
    parse_amount_input(input)
        .map(Some)
        .ok_or_else(|| EstateError::InvalidFilterBounds {
            input: input.to_string(),
        })
}

/// Listings matching `spec`, in their original relative order.
pub fn apply_filters(listings: &[Listing], spec: &FilterSpec) -> Vec<Listing> {
    listings
        .iter()
        .filter(|l| spec.matches(l))
        .cloned()
        .collect()
}

/// Union of every listing's feature tags.
pub fn available_features<'a>(listings: impl IntoIterator<Item = &'a Listing>) -> BTreeSet<String> {
    listings
        .into_iter()
        .flat_map(|l| l.features.iter().cloned())
        .collect()
}

pub fn available_locations<'a>(listings: impl IntoIterator<Item = &'a Listing>) -> BTreeSet<String> {
    listings.into_iter().map(|l| l.location.clone()).collect()
}

/// Display statuses present in the set (absent status counts as completed).
pub fn available_statuses<'a>(
    listings: impl IntoIterator<Item = &'a Listing>,
) -> BTreeSet<ListingStatus> {
    listings.into_iter().map(Listing::display_status).collect()
}
