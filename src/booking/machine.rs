//! Single-event booking lifecycle.
//!
//! ```text
//! Browsing --book_now--> BookingForm --confirm_booking--> Browsing (+ booked set)
//!                             |
//!                             +------cancel------------> Browsing
//! ```
//!
//! At most one booking form is open at a time. Confirmation only records
//! the event id; the event's `booked` counter is not touched, and capacity
//! never blocks opening a form.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::catalog::EventCatalog;
use crate::domain::{EventId, TravelerRecord};

use super::BookingError;

/// Simulated payment details
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaymentFields {
    pub card_holder: String,
    pub card_number: String,
    pub expiry: String,
    pub cvv: String,
}

/// In-progress booking for one event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingDraft {
    pub event_id: EventId,
    pub traveler: TravelerRecord,
    pub payment: PaymentFields,
}

impl BookingDraft {
    fn new(event_id: EventId) -> Self {
        Self {
            event_id,
            traveler: TravelerRecord::default(),
            payment: PaymentFields::default(),
        }
    }

    /// Required-field check run by the form before confirming
    pub fn validate(&self) -> Result<(), BookingError> {
        let required = [
            ("name", &self.traveler.name),
            ("email", &self.traveler.email),
            ("card holder", &self.payment.card_holder),
            ("card number", &self.payment.card_number),
            ("expiry", &self.payment.expiry),
            ("cvv", &self.payment.cvv),
        ];

        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(BookingError::MissingField(field));
            }
        }
        Ok(())
    }
}

/// Where the booking UI currently is
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum BookingState {
    #[default]
    Browsing,
    BookingForm(BookingDraft),
}

/// Result of asking to book an event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookOutcome {
    /// The form is open for the event
    FormOpened {
        event_id: EventId,
        /// Event whose open form was replaced, if any
        replaced: Option<EventId>,
    },

    /// The event was booked earlier; nothing changed
    AlreadyBooked(EventId),
}

/// Booking state plus the set of confirmed event ids
#[derive(Debug, Clone, Default)]
pub struct BookingStateMachine {
    state: BookingState,
    booked: BTreeSet<EventId>,
}

impl BookingStateMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &BookingState {
        &self.state
    }

    /// Event whose form is open, if any
    pub fn target(&self) -> Option<EventId> {
        self.draft().map(|d| d.event_id)
    }

    pub fn draft(&self) -> Option<&BookingDraft> {
        match &self.state {
            BookingState::BookingForm(draft) => Some(draft),
            BookingState::Browsing => None,
        }
    }

    /// Mutable access to the open form's fields
    pub fn draft_mut(&mut self) -> Option<&mut BookingDraft> {
        match &mut self.state {
            BookingState::BookingForm(draft) => Some(draft),
            BookingState::Browsing => None,
        }
    }

    /// Confirmed event ids, ascending
    pub fn booked(&self) -> &BTreeSet<EventId> {
        &self.booked
    }

    pub fn is_booked(&self, event_id: EventId) -> bool {
        self.booked.contains(&event_id)
    }

    /// Open the booking form for an event.
    ///
    /// An already booked event is a no-op that leaves any open form alone.
    /// Opening a form for another event replaces the current one.
    pub fn book_now(
        &mut self,
        catalog: &EventCatalog,
        event_id: EventId,
    ) -> Result<BookOutcome, BookingError> {
        if self.is_booked(event_id) {
            warn!(event = %event_id, "Event already booked");
            return Ok(BookOutcome::AlreadyBooked(event_id));
        }

        if catalog.get(event_id).is_none() {
            return Err(BookingError::UnknownEvent(event_id));
        }

        // Form already open for this event: keep what was typed
        if self.target() == Some(event_id) {
            return Ok(BookOutcome::FormOpened {
                event_id,
                replaced: None,
            });
        }

        let replaced = self.target();
        self.state = BookingState::BookingForm(BookingDraft::new(event_id));
        info!(event = %event_id, replaced = ?replaced, "Opened booking form");

        Ok(BookOutcome::FormOpened { event_id, replaced })
    }

    /// Record the open booking as confirmed and return to browsing
    pub fn confirm_booking(&mut self) -> Result<EventId, BookingError> {
        let event_id = self.target().ok_or(BookingError::NoActiveBooking)?;

        self.booked.insert(event_id);
        self.state = BookingState::Browsing;
        info!(event = %event_id, total = self.booked.len(), "Booking confirmed");

        Ok(event_id)
    }

    /// Discard the open form, returning the event it was for
    pub fn cancel(&mut self) -> Option<EventId> {
        let event_id = self.target()?;
        self.state = BookingState::Browsing;
        info!(event = %event_id, "Booking cancelled");
        Some(event_id)
    }
}
