use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{EstateError, Result};
use crate::listing::ListingId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BookingId(pub u64);

/// Site-visit request as typed into the booking form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BookingRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    /// `YYYY-MM-DD`.
    pub visit_date: String,
    pub message: Option<String>,
}

/// A validated booking, recorded for the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    pub id: BookingId,
    pub listing_id: ListingId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub visit_date: NaiveDate,
    pub message: Option<String>,
}

fn invalid(field: &'static str, reason: impl Into<String>) -> EstateError {
    EstateError::ValidationFailed {
        field,
        reason: reason.into(),
    }
}

impl BookingRequest {
    /// Validate against `today` and build the booking.
    pub fn validate(
        &self,
        id: BookingId,
        listing_id: ListingId,
        today: NaiveDate,
    ) -> Result<Booking> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(EstateError::missing("name"));
        }

        let email = self.email.trim();
        if !is_plausible_email(email) {
            return Err(invalid("email", format!("{email:?} is not an email address")));
        }

        let phone = self.phone.trim();
        if phone.chars().any(|c| !(c.is_ascii_digit() || "+-() ".contains(c))) {
            return Err(invalid("phone", "only digits, spaces and + - ( ) are allowed"));
        }
        let digits = phone.chars().filter(char::is_ascii_digit).count();
        if !(10..=15).contains(&digits) {
            return Err(invalid("phone", format!("expected 10 to 15 digits, got {digits}")));
        }

        let visit_date = NaiveDate::parse_from_str(self.visit_date.trim(), "%Y-%m-%d")
            .map_err(|_| invalid("visit_date", format!("{:?} is not YYYY-MM-DD", self.visit_date)))?;
        if visit_date < today {
            return Err(invalid("visit_date", "date is in the past"));
        }

        Ok(Booking {
            id,
            listing_id,
            name: name.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
            visit_date,
            message: self
                .message
                .as_deref()
                .map(str::trim)
                .filter(|m| !m.is_empty())
                .map(str::to_string),
        })
    }
}

fn is_plausible_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !email.contains(char::is_whitespace)
        && domain
            .split_once('.')
            .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty() && !tld.ends_with('.'))
}
