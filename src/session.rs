//! One browsing session.
//!
//! Bundles the catalog, the active filter view and both booking flows.
//! Everything lives in memory and is gone when the session ends. The
//! audience mode is never stored here; callers pass it in.

use tracing::debug;

use crate::booking::{BookOutcome, BookingError, BookingStateMachine, PackageBooking};
use crate::catalog::{category_counts, CategoryCount, EventCatalog, EventView};
use crate::domain::{AudienceMode, Event, EventId};
use crate::export::{export_ics, CalendarFile, ExportSettings};
use crate::submission::{self, SubmissionError, SubmissionForm};

#[derive(Debug, Default)]
pub struct Session {
    catalog: EventCatalog,
    view: EventView,
    booking: BookingStateMachine,
    package: PackageBooking,
}

impl Session {
    /// Session over the shipped built-in events
    pub fn new() -> Self {
        Self::default()
    }

    /// Session over a given catalog
    pub fn with_catalog(catalog: EventCatalog) -> Self {
        Self {
            catalog,
            ..Default::default()
        }
    }

    pub fn catalog(&self) -> &EventCatalog {
        &self.catalog
    }

    pub fn view(&self) -> &EventView {
        &self.view
    }

    pub fn set_view(&mut self, view: EventView) {
        debug!(?view, "Changed event view");
        self.view = view;
    }

    /// Events visible under the current view
    pub fn visible_events(&self) -> Vec<&Event> {
        self.view.apply(self.catalog.iter())
    }

    /// Category counts over the whole catalog
    pub fn category_counts(&self) -> Vec<CategoryCount> {
        category_counts(self.catalog.iter())
    }

    /// Submit an event and return to the unfiltered listing
    pub fn submit(
        &mut self,
        form: SubmissionForm,
        mode: AudienceMode,
    ) -> Result<Event, SubmissionError> {
        let event = submission::submit(&mut self.catalog, form, mode)?;
        self.view = EventView::default();
        Ok(event)
    }

    pub fn booking(&self) -> &BookingStateMachine {
        &self.booking
    }

    pub fn booking_mut(&mut self) -> &mut BookingStateMachine {
        &mut self.booking
    }

    pub fn book_now(&mut self, event_id: EventId) -> Result<BookOutcome, BookingError> {
        self.booking.book_now(&self.catalog, event_id)
    }

    pub fn package(&self) -> &PackageBooking {
        &self.package
    }

    pub fn package_mut(&mut self) -> &mut PackageBooking {
        &mut self.package
    }

    /// Export the whole catalog, ignoring the current view
    pub fn export(&self, settings: &ExportSettings) -> CalendarFile {
        export_ics(self.catalog.iter(), settings)
    }
}
