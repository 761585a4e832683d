//! iCalendar (ICS) serialization of the event catalog.
//!
//! Output shape:
//!
//! ```text
//! BEGIN:VCALENDAR
//! VERSION:2.0
//! PRODID:-//<product id>//EN
//! BEGIN:VEVENT
//! UID:<id>
//! DTSTART:<yyyyMMdd>T<HHmm>00
//! DTEND:<yyyyMMdd>T<HHmm>00
//! SUMMARY:<title>
//! DESCRIPTION:<description>
//! LOCATION:<monastery>, <location>
//! END:VEVENT
//! END:VCALENDAR
//! ```
//!
//! Lines are joined with `\n`, one VEVENT per event in catalog order.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::domain::Event;

use super::CalendarFile;

/// How clock values in an event's time range become `HHmm`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeConvention {
    /// Strip the colon from the clock value and drop any AM/PM suffix.
    /// "06:00 PM" becomes "0600".
    #[default]
    Verbatim,

    /// Convert 12-hour values to 24-hour. "06:00 PM" becomes "1800".
    TwentyFourHour,
}

/// Settings that shape the exported document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSettings {
    /// Goes between `-//` and `//EN` in PRODID
    pub product_id: String,
    pub time_convention: TimeConvention,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            product_id: DEFAULT_PRODUCT_ID.to_string(),
            time_convention: TimeConvention::default(),
        }
    }
}

pub const DEFAULT_PRODUCT_ID: &str = "Monastery360//Cultural Calendar";

/// Serialize events into a downloadable calendar file
pub fn export_ics<'a>(
    events: impl IntoIterator<Item = &'a Event>,
    settings: &ExportSettings,
) -> CalendarFile {
    let mut lines = vec![
        "BEGIN:VCALENDAR".to_string(),
        "VERSION:2.0".to_string(),
        format!("PRODID:-//{}//EN", settings.product_id),
    ];

    let mut count = 0usize;
    for event in events {
        push_vevent(&mut lines, event, settings.time_convention);
        count += 1;
    }

    lines.push("END:VCALENDAR".to_string());
    info!(events = count, "Exported calendar");

    CalendarFile::new(lines.join("\n"))
}

fn push_vevent(lines: &mut Vec<String>, event: &Event, convention: TimeConvention) {
    let (start, end) = split_time_range(&event.time);
    let day = event.date.format("%Y%m%d");

    lines.push("BEGIN:VEVENT".to_string());
    lines.push(format!("UID:{}", event.id));
    lines.push(format!("DTSTART:{}T{}00", day, clock_value(start, convention)));
    lines.push(format!("DTEND:{}T{}00", day, clock_value(end, convention)));
    lines.push(format!("SUMMARY:{}", escape_text(&event.title)));
    lines.push(format!("DESCRIPTION:{}", escape_text(&event.description)));
    lines.push(format!(
        "LOCATION:{}, {}",
        escape_text(&event.monastery),
        escape_text(&event.location)
    ));
    lines.push("END:VEVENT".to_string());
}

/// Split "start - end"; a range without an end reuses the start
fn split_time_range(time: &str) -> (&str, &str) {
    match time.split_once(" - ") {
        Some((start, end)) => (start.trim(), end.trim()),
        None => (time.trim(), time.trim()),
    }
}

/// `HHmm` for one half of a time range
pub fn clock_value(half: &str, convention: TimeConvention) -> String {
    if convention == TimeConvention::TwentyFourHour {
        let parsed = NaiveTime::parse_from_str(half, "%I:%M %p")
            .or_else(|_| NaiveTime::parse_from_str(half, "%H:%M"));
        if let Ok(time) = parsed {
            return time.format("%H%M").to_string();
        }
    }

    half.split_whitespace()
        .next()
        .unwrap_or_default()
        .replace(':', "")
}

/// Line breaks become a literal `\n`, so every field stays on one line
fn escape_text(text: &str) -> String {
    text.replace("\r\n", "\n")
        .replace('\r', "\n")
        .replace('\n', "\\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_value_verbatim_drops_meridiem() {
        assert_eq!(clock_value("06:00 AM", TimeConvention::Verbatim), "0600");
        assert_eq!(clock_value("06:00 PM", TimeConvention::Verbatim), "0600");
        assert_eq!(clock_value("14:30", TimeConvention::Verbatim), "1430");
        assert_eq!(clock_value("", TimeConvention::Verbatim), "");
    }

    #[test]
    fn test_clock_value_twenty_four_hour() {
        assert_eq!(clock_value("06:00 PM", TimeConvention::TwentyFourHour), "1800");
        assert_eq!(clock_value("12:15 AM", TimeConvention::TwentyFourHour), "0015");
        assert_eq!(clock_value("14:30", TimeConvention::TwentyFourHour), "1430");
        // Unparseable input falls back to verbatim
        assert_eq!(clock_value("noon", TimeConvention::TwentyFourHour), "noon");
    }

    #[test]
    fn test_split_time_range() {
        assert_eq!(split_time_range("06:00 AM - 06:00 PM"), ("06:00 AM", "06:00 PM"));
        assert_eq!(split_time_range("14:00"), ("14:00", "14:00"));
    }

    #[test]
    fn test_escape_text() {
        assert_eq!(escape_text("line one\nline two"), "line one\\nline two");
        assert_eq!(escape_text("a\r\nb"), "a\\nb");
        assert_eq!(escape_text("a\rb"), "a\\nb");
    }

    #[test]
    fn test_empty_export_is_complete() {
        let file = export_ics(std::iter::empty(), &ExportSettings::default());
        assert_eq!(
            file.body(),
            "BEGIN:VCALENDAR\nVERSION:2.0\nPRODID:-//Monastery360//Cultural Calendar//EN\nEND:VCALENDAR"
        );
    }
}
