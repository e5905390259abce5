use std::fmt;

use serde::{Deserialize, Serialize};

use crate::currency::parse_display_amount;

/// Unique listing identifier.
///
/// Built-in listings use small catalog ordinals; user listings use a
/// millisecond timestamp, so the two ranges never meet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ListingId(pub u64);

impl fmt::Display for ListingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Lifecycle status of a project or listing.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ListingStatus {
    Completed,
    InProgress,
    Upcoming,
    Planned,
    Listed,
    Other(String),
}

impl ListingStatus {
    pub fn label(&self) -> &str {
        match self {
            ListingStatus::Completed => "Completed",
            ListingStatus::InProgress => "In Progress",
            ListingStatus::Upcoming => "Upcoming",
            ListingStatus::Planned => "Planned",
            ListingStatus::Listed => "Listed",
            ListingStatus::Other(label) => label,
        }
    }

    /// Parse a display label back into a status. Unknown labels become `Other`.
    pub fn from_label(label: &str) -> Self {
        match label.trim() {
            "Completed" => ListingStatus::Completed,
            "In Progress" => ListingStatus::InProgress,
            "Upcoming" => ListingStatus::Upcoming,
            "Planned" => ListingStatus::Planned,
            "Listed" => ListingStatus::Listed,
            other => ListingStatus::Other(other.to_string()),
        }
    }
}

impl fmt::Display for ListingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionType {
    Sale,
    Rent,
}

/// Where the listing's photo lives. Opaque to the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImageRef {
    /// Asset shipped with the site, by name.
    Bundled(String),
    /// Session-local upload reference (e.g. an object URL). Released by the caller.
    Upload(String),
}

/// Project timeline. At most one milestone field is expected to be set;
/// when several are, `completed` wins over `completion_date` over `start_date`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    pub duration: String,
    pub area: String,
    pub team_size: String,
    #[serde(default)]
    pub completed: Option<String>,
    #[serde(default)]
    pub completion_date: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
}

/// The resolved date-like milestone of a timeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Milestone<'a> {
    pub label: &'static str,
    pub value: &'a str,
}

impl Timeline {
    /// True when the form left every timeline field empty.
    pub fn is_blank(&self) -> bool {
        [&self.duration, &self.area, &self.team_size]
            .into_iter()
            .all(|s| s.trim().is_empty())
            && non_blank(&self.completed).is_none()
            && non_blank(&self.completion_date).is_none()
            && non_blank(&self.start_date).is_none()
    }

    pub fn milestone(&self) -> Milestone<'_> {
        if let Some(value) = non_blank(&self.completed) {
            Milestone { label: "Completed", value }
        } else if let Some(value) = non_blank(&self.completion_date) {
            Milestone { label: "Completion", value }
        } else if let Some(value) = non_blank(&self.start_date) {
            Milestone { label: "Start Date", value }
        } else {
            Milestone { label: "Timeline", value: NOT_AVAILABLE }
        }
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.trim().is_empty())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Specifications {
    pub kind: String,
    pub floors: String,
    pub units: String,
    pub parking: String,
}

pub const NOT_AVAILABLE: &str = "N/A";

/// A property shown in the catalog, built-in or user-submitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub id: ListingId,
    pub title: String,
    pub location: String,
    /// Display price, e.g. "₹12,50,000".
    pub price: String,
    /// Pre-commission amount in rupees; user listings only.
    #[serde(default)]
    pub base_price: Option<u64>,
    #[serde(default)]
    pub status: Option<ListingStatus>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub timeline: Option<Timeline>,
    #[serde(default)]
    pub specifications: Option<Specifications>,
    pub image: ImageRef,
    #[serde(default)]
    pub is_user_listed: bool,
    #[serde(default)]
    pub property_type: Option<String>,
    #[serde(default)]
    pub bedrooms: Option<u8>,
    #[serde(default)]
    pub transaction_type: Option<TransactionType>,
}

impl Listing {
    /// Numeric price in rupees, derived from the display string.
    pub fn numeric_price(&self) -> u64 {
        parse_display_amount(&self.price)
    }

    /// Status as displayed; listings without one show as completed projects.
    pub fn display_status(&self) -> ListingStatus {
        self.status.clone().unwrap_or(ListingStatus::Completed)
    }

    pub fn description_or_default(&self) -> String {
        match self.description.as_deref().map(str::trim) {
            Some(text) if !text.is_empty() => text.to_string(),
            _ => format!(
                "{} is a property located in {}.",
                self.title, self.location
            ),
        }
    }

    pub fn has_feature(&self, feature: &str) -> bool {
        self.features.iter().any(|f| f == feature)
    }

    /// Everything the detail modal shows, with every fallback resolved.
    pub fn details(&self) -> ListingDetails<'_> {
        let milestone = self
            .timeline
            .as_ref()
            .map(Timeline::milestone)
            .unwrap_or(Milestone {
                label: "Timeline",
                value: NOT_AVAILABLE,
            });
        let timeline = self.timeline.as_ref();
        ListingDetails {
            listing: self,
            status_label: self.display_status().label().to_string(),
            description: self.description_or_default(),
            duration: timeline_field(timeline, |t| &t.duration),
            area: timeline_field(timeline, |t| &t.area),
            team_size: timeline_field(timeline, |t| &t.team_size),
            milestone,
            specifications: self.specifications.as_ref(),
            map_query: &self.location,
        }
    }
}

fn timeline_field<'a>(timeline: Option<&'a Timeline>, pick: fn(&Timeline) -> &String) -> &'a str {
    timeline
        .map(|t| pick(t).as_str())
        .filter(|s| !s.trim().is_empty())
        .unwrap_or(NOT_AVAILABLE)
}

/// Resolved detail view of a listing.
#[derive(Debug, Clone)]
pub struct ListingDetails<'a> {
    pub listing: &'a Listing,
    pub status_label: String,
    pub description: String,
    pub duration: &'a str,
    pub area: &'a str,
    pub team_size: &'a str,
    pub milestone: Milestone<'a>,
    /// Shown only when present; there is no placeholder block.
    pub specifications: Option<&'a Specifications>,
    /// Passed verbatim to the external map embed.
    pub map_query: &'a str,
}
