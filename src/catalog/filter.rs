//! Date and category selection over catalog events.
//!
//! All functions here are pure: they borrow events and return the matching
//! subsequence in catalog order. An empty result is never an error.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::Serialize;
use tracing::debug;

use crate::domain::Event;

/// Category id that selects every event
pub const ALL_CATEGORIES: &str = "all";

/// Category ids offered by the calendar, with display labels.
///
/// Apart from `all`, these match against the event type only. Any other
/// category id also matches against tags.
pub const CATEGORIES: &[(&str, &str)] = &[
    (ALL_CATEGORIES, "All Events"),
    ("festival", "Festivals"),
    ("ritual", "Rituals"),
    ("workshop", "Workshops"),
    ("retreat", "Retreats"),
    ("cultural", "Cultural Events"),
];

/// Normalize a date input to a calendar day.
///
/// Accepts `YYYY-MM-DD`, RFC 3339 timestamps and `YYYY-MM-DDTHH:MM` local
/// timestamps. Returns `None` for anything else.
pub fn parse_day(input: &str) -> Option<NaiveDate> {
    let input = input.trim();

    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(ts) = DateTime::parse_from_rfc3339(input) {
        return Some(ts.date_naive());
    }
    NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M")
        .ok()
        .map(|ts| ts.date())
}

/// Events taking place on `date`
pub fn filter_by_date<'a>(
    events: impl IntoIterator<Item = &'a Event>,
    date: NaiveDate,
) -> Vec<&'a Event> {
    let matched: Vec<_> = events.into_iter().filter(|e| e.date == date).collect();
    debug!(%date, matched = matched.len(), "Filtered events by date");
    matched
}

/// Events belonging to a category.
///
/// `"all"` keeps everything. Otherwise an event matches when its type
/// contains the category id (case-insensitive substring). Tags are only
/// searched for category ids outside [`CATEGORIES`].
pub fn filter_by_category<'a>(
    events: impl IntoIterator<Item = &'a Event>,
    category_id: &str,
) -> Vec<&'a Event> {
    let matched: Vec<_> = events
        .into_iter()
        .filter(|e| matches_category(e, category_id))
        .collect();
    debug!(category = category_id, matched = matched.len(), "Filtered events by category");
    matched
}

fn matches_category(event: &Event, category_id: &str) -> bool {
    if category_id == ALL_CATEGORIES {
        return true;
    }

    let needle = category_id.to_lowercase();
    if event.event_type.to_lowercase().contains(&needle) {
        return true;
    }

    let predefined = CATEGORIES.iter().any(|(id, _)| *id == needle);
    !predefined && event.tags.iter().any(|t| t.to_lowercase().contains(&needle))
}

/// Number of catalog events in one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub id: &'static str,
    pub label: &'static str,
    pub count: usize,
}

/// Count events per predefined category in a single pass.
///
/// Counts describe the whole catalog and ignore whatever view is active.
pub fn category_counts<'a>(events: impl IntoIterator<Item = &'a Event>) -> Vec<CategoryCount> {
    let mut counts: Vec<CategoryCount> = CATEGORIES
        .iter()
        .map(|&(id, label)| CategoryCount { id, label, count: 0 })
        .collect();

    for event in events {
        for entry in counts.iter_mut() {
            if matches_category(event, entry.id) {
                entry.count += 1;
            }
        }
    }

    counts
}

/// The filter selection presented to the UI.
///
/// A selected date suppresses the category filter; the two never combine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventView {
    /// Date picked in the date picker, if any
    pub date: Option<NaiveDate>,

    /// Selected category id
    pub category: String,
}

impl Default for EventView {
    fn default() -> Self {
        Self {
            date: None,
            category: ALL_CATEGORIES.to_string(),
        }
    }
}

impl EventView {
    /// View filtered to a single day
    pub fn on_date(date: NaiveDate) -> Self {
        Self {
            date: Some(date),
            ..Default::default()
        }
    }

    /// View filtered to a category
    pub fn in_category(category: impl Into<String>) -> Self {
        Self {
            date: None,
            category: category.into(),
        }
    }

    /// Select the visible events
    pub fn apply<'a>(&self, events: impl IntoIterator<Item = &'a Event>) -> Vec<&'a Event> {
        match self.date {
            Some(date) => filter_by_date(events, date),
            None => filter_by_category(events, &self.category),
        }
    }
}
