//! Cultural event records.
//!
//! An [`Event`] is one entry of the calendar catalog: a festival, ritual,
//! workshop or retreat hosted by a monastery on a given day.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::audience::{AudienceMode, PricePair};

/// Catalog identifier, assigned as `catalog length + 1` on append
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(pub u32);

impl EventId {
    /// Get the raw numeric value
    pub fn get(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for EventId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for EventId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(EventId)
    }
}

/// A single cultural event in the catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    /// Catalog identifier
    pub id: EventId,

    /// Display title
    pub title: String,

    /// Hosting monastery
    pub monastery: String,

    /// Calendar day the event takes place on
    pub date: NaiveDate,

    /// Human-readable time range, e.g. "06:00 AM - 06:00 PM"
    pub time: String,

    /// Open category label, e.g. "Major Festival"
    pub event_type: String,

    /// Long-form description (may contain newlines)
    pub description: String,

    /// Venue within or around the monastery
    pub location: String,

    /// Declared maximum participant count
    pub capacity: u32,

    /// Participants already booked (display value)
    pub booked: u32,

    /// Price shown to visitors
    pub pricing: Pricing,

    /// Ordered, duplicate-free tags
    #[serde(default)]
    pub tags: Vec<String>,

    /// Image reference (static path or committed upload)
    pub image: String,

    /// Optional add-ons offered with the event
    #[serde(default)]
    pub features: EventFeatures,
}

impl Event {
    /// Displayed price for the given audience mode
    pub fn price(&self, mode: AudienceMode) -> &str {
        self.pricing.display(mode)
    }

    /// Remaining seats according to the declared `booked` value
    pub fn seats_left(&self) -> u32 {
        self.capacity.saturating_sub(self.booked)
    }

    /// Whether no seats are left
    pub fn is_sold_out(&self) -> bool {
        self.booked >= self.capacity
    }
}

/// How an event's price is stored
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum Pricing {
    /// Resolved once, at submission time
    Fixed { price: String },

    /// Resolved per audience mode at display time
    ByAudience(PricePair),
}

impl Pricing {
    /// Price string shown for the given mode
    pub fn display(&self, mode: AudienceMode) -> &str {
        match self {
            Pricing::Fixed { price } => price,
            Pricing::ByAudience(pair) => pair.for_mode(mode),
        }
    }
}

/// Add-on flags collected by the submission form
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventFeatures {
    /// An audio guide is available
    pub audio_guide: bool,

    /// A virtual preview is available
    pub virtual_preview: bool,

    /// Visitors must book ahead
    pub requires_prebooking: bool,
}
