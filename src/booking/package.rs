//! Multi-traveler package bookings.
//!
//! Independent of the single-event booking flow. A package has a fixed
//! length in days, so picking a start date fixes the end date.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::TravelerRecord;

use super::BookingError;

/// Smallest and largest traveler count a package booking accepts
pub const MIN_TRAVELERS: usize = 1;
pub const MAX_TRAVELERS: usize = 4;

/// Ordered traveler list sized by the traveler count selector
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TravelerRoster {
    travelers: Vec<TravelerRecord>,
}

impl Default for TravelerRoster {
    fn default() -> Self {
        Self {
            travelers: vec![TravelerRecord::default(); MIN_TRAVELERS],
        }
    }
}

impl TravelerRoster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.travelers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.travelers.is_empty()
    }

    pub fn travelers(&self) -> &[TravelerRecord] {
        &self.travelers
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut TravelerRecord> {
        self.travelers.get_mut(index)
    }

    /// Change the traveler count.
    ///
    /// Entries keep their index. Shrinking drops trailing entries for good;
    /// growing appends blank records.
    pub fn resize(&mut self, count: usize) -> Result<(), BookingError> {
        if !(MIN_TRAVELERS..=MAX_TRAVELERS).contains(&count) {
            return Err(BookingError::TravelerCount(count));
        }
        self.travelers.resize(count, TravelerRecord::default());
        debug!(count, "Resized traveler roster");
        Ok(())
    }
}

/// A tour package with a fixed length
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Package {
    pub name: String,
    /// Length in days, at least 1
    pub duration_days: u32,
}

impl Package {
    pub fn new(name: impl Into<String>, duration_days: u32) -> Self {
        Self {
            name: name.into(),
            duration_days: duration_days.max(1),
        }
    }

    /// Last day of a package starting on `start`
    pub fn end_date(&self, start: NaiveDate) -> Result<NaiveDate, BookingError> {
        let days = self.duration_days.max(1);
        start
            .checked_add_signed(Duration::days(i64::from(days) - 1))
            .ok_or(BookingError::DateOutOfRange { start, days })
    }
}

/// Package booking form state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageBooking {
    package: Option<Package>,
    roster: TravelerRoster,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
}

impl PackageBooking {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn package(&self) -> Option<&Package> {
        self.package.as_ref()
    }

    pub fn roster(&self) -> &TravelerRoster {
        &self.roster
    }

    pub fn start_date(&self) -> Option<NaiveDate> {
        self.start_date
    }

    pub fn end_date(&self) -> Option<NaiveDate> {
        self.end_date
    }

    /// Select a package, re-deriving the end date from any chosen start.
    ///
    /// A package that would end out of range is refused and nothing changes.
    pub fn select_package(&mut self, package: Package) -> Result<(), BookingError> {
        if let Some(start) = self.start_date {
            self.end_date = Some(package.end_date(start)?);
        }
        self.package = Some(package);
        Ok(())
    }

    /// Deselect the package; the end date becomes editable again
    pub fn clear_package(&mut self) {
        self.package = None;
    }

    /// Choose the start date; with a package selected the end date follows
    pub fn select_start_date(&mut self, start: NaiveDate) -> Result<(), BookingError> {
        if let Some(package) = &self.package {
            self.end_date = Some(package.end_date(start)?);
        }
        self.start_date = Some(start);
        Ok(())
    }

    /// Choose the end date directly, only allowed without a package
    pub fn set_end_date(&mut self, end: NaiveDate) -> Result<(), BookingError> {
        if self.package.is_some() {
            return Err(BookingError::EndDateLocked);
        }
        self.end_date = Some(end);
        Ok(())
    }
}
