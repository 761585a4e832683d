//! Booking flows.
//!
//! - `machine`: Single-event booking lifecycle and the booked set
//! - `package`: Multi-traveler package bookings

pub mod machine;
pub mod package;

use chrono::NaiveDate;
use thiserror::Error;

use crate::domain::EventId;

pub use machine::{BookOutcome, BookingDraft, BookingState, BookingStateMachine, PaymentFields};
pub use package::{Package, PackageBooking, TravelerRoster, MAX_TRAVELERS, MIN_TRAVELERS};

/// Errors raised by the booking flows
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookingError {
    #[error("Event not found: {0}")]
    UnknownEvent(EventId),

    #[error("No booking form is open")]
    NoActiveBooking,

    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Traveler count must be between 1 and 4, got {0}")]
    TravelerCount(usize),

    #[error("End date is fixed by the selected package")]
    EndDateLocked,

    #[error("A {days}-day package starting {start} ends outside the supported date range")]
    DateOutOfRange { start: NaiveDate, days: u32 },
}
