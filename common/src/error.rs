use thiserror::Error;

use crate::carousel::CarouselMode;
use crate::listing::ListingId;

/// Errors reported by showcase operations.
///
/// None of these are fatal: a rejected operation leaves every store and state
/// machine exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EstateError {
    /// A submission (listing or booking) is missing a field or carries a bad value.
    #[error("validation failed for {field}: {reason}")]
    ValidationFailed { field: &'static str, reason: String },

    /// Carousel jump target outside the filtered set.
    #[error("index {index} out of range for {len} listings")]
    OutOfRange { index: usize, len: usize },

    /// A price bound that is neither blank nor a whole amount.
    #[error("invalid price bound {input:?}")]
    InvalidFilterBounds { input: String },

    /// Operation not allowed in the carousel's current mode.
    #[error("{operation} is not allowed in {mode:?} mode")]
    InvalidTransition {
        operation: &'static str,
        mode: CarouselMode,
    },

    #[error("listing {0} not found")]
    UnknownListing(ListingId),

    #[error("config error: {0}")]
    Config(String),
}

impl EstateError {
    pub(crate) fn missing(field: &'static str) -> Self {
        EstateError::ValidationFailed {
            field,
            reason: "is required".into(),
        }
    }
}

pub type Result<T, E = EstateError> = std::result::Result<T, E>;
