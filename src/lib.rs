//! cultural-calendar - Cultural event calendar and booking engine
//!
//! The calendar behind a monastery heritage tourism site: a catalog of
//! festivals, rituals and workshops, date and category filtering, a booking
//! lifecycle, and iCalendar export.
//!
//! # Architecture
//!
//! Everything is session-local and synchronous:
//! - The catalog is built-in events followed by user submissions
//! - Filters are pure functions over catalog events
//! - One booking form may be open at a time; confirmation records the id
//! - The exporter reads the catalog and produces a downloadable ICS file
//!
//! # Modules
//!
//! - `domain`: Data structures (Event, AudienceMode, TravelerRecord)
//! - `catalog`: EventCatalog and the filter engine
//! - `submission`: Form sections, validation and pending uploads
//! - `booking`: Booking state machine and package bookings
//! - `export`: ICS serialization
//! - `session`: One in-memory browsing session
//! - `cli`: Command-line interface
//!
//! # Usage
//!
//! ```bash
//! # Festivals on a given day
//! cultural-calendar events --date 2025-09-20
//!
//! # Submit an event and export the catalog
//! cultural-calendar submit lamp-offering.yaml --export
//! ```

pub mod booking;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod domain;
pub mod export;
pub mod session;
pub mod submission;

// Re-export main types at crate root for convenience
pub use booking::{BookOutcome, BookingError, BookingStateMachine, PackageBooking};
pub use catalog::{filter_by_category, filter_by_date, EventCatalog, EventView};
pub use domain::{AudienceMode, Event, EventId, TravelerRecord};
pub use export::{export_ics, CalendarFile, ExportSettings, TimeConvention};
pub use session::Session;
pub use submission::{submit, SubmissionError, SubmissionForm};
