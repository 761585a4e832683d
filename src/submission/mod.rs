//! User event submission.
//!
//! Turns a filled-in [`SubmissionForm`] into a catalog event. There is no
//! duplicate detection: two identical submissions become two events.

pub mod form;
pub mod upload;

use thiserror::Error;
use tracing::{info, warn};

use crate::catalog::EventCatalog;
use crate::domain::{AudienceMode, Event, EventId, Pricing};

pub use form::{
    parse_tags, AddOnsSection, DetailsSection, FormSection, PricingSection, ScheduleSection,
    SubmissionForm, ValidatedForm,
};
pub use upload::PendingUpload;

/// Image reference used when no image was picked
pub const PLACEHOLDER_IMAGE: &str = "/images/events/placeholder.jpg";

/// Reasons a submission is rejected before reaching the catalog
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid event date: {0}")]
    InvalidDate(String),

    #[error("Capacity must be at least 1, got {0}")]
    InvalidCapacity(u32),
}

/// Validate a form and append the resulting event.
///
/// `mode` selects the stored price; see
/// [`PricePair::resolve_for_submission`](crate::domain::PricePair::resolve_for_submission).
/// The catalog is untouched when validation fails.
pub fn submit(
    catalog: &mut EventCatalog,
    form: SubmissionForm,
    mode: AudienceMode,
) -> Result<Event, SubmissionError> {
    let valid = form.validate().map_err(|e| {
        warn!(error = %e, "Rejected event submission");
        e
    })?;

    let event = build_event(valid, mode);
    let stored = catalog.append(event);
    info!(id = %stored.id, %mode, "Submitted event");

    Ok(stored.clone())
}

fn build_event(valid: ValidatedForm, mode: AudienceMode) -> Event {
    let image = valid
        .image
        .map(PendingUpload::commit)
        .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string());

    Event {
        // Reassigned by the catalog
        id: EventId(0),
        title: valid.details.title,
        monastery: valid.details.monastery,
        date: valid.schedule.date,
        time: valid.schedule.time,
        event_type: valid.details.event_type,
        description: valid.details.description,
        location: valid.schedule.location,
        capacity: valid.schedule.capacity,
        booked: 0,
        pricing: Pricing::Fixed {
            price: valid.pricing.resolve_for_submission(mode),
        },
        tags: valid.details.tags,
        image,
        features: valid.features,
    }
}
