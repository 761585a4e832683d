//! Submission form sections and their validation.
//!
//! The form is edited one section at a time. Each section validates into a
//! typed value; only a fully validated form can become an event.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::catalog::parse_day;
use crate::domain::{EventFeatures, PricePair};

use super::upload::PendingUpload;
use super::SubmissionError;

/// Event type used when the form leaves it blank
pub const DEFAULT_EVENT_TYPE: &str = "Cultural Event";

/// Split comma-separated tags into an ordered, duplicate-free list
pub fn parse_tags(raw: &str) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for tag in raw.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        if !tags.iter().any(|t| t == tag) {
            tags.push(tag.to_string());
        }
    }
    tags
}

fn required(value: &str, field: &'static str) -> Result<String, SubmissionError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(SubmissionError::MissingField(field));
    }
    Ok(value.to_string())
}

/// What the event is
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DetailsSection {
    pub title: String,
    pub monastery: String,
    pub description: String,
    pub event_type: String,
    /// Comma-separated, as typed
    pub tags: String,
}

/// Validated [`DetailsSection`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidDetails {
    pub title: String,
    pub monastery: String,
    pub description: String,
    pub event_type: String,
    pub tags: Vec<String>,
}

impl DetailsSection {
    pub fn validate(&self) -> Result<ValidDetails, SubmissionError> {
        let event_type = match self.event_type.trim() {
            "" => DEFAULT_EVENT_TYPE.to_string(),
            other => other.to_string(),
        };

        Ok(ValidDetails {
            title: required(&self.title, "title")?,
            monastery: required(&self.monastery, "monastery")?,
            description: required(&self.description, "description")?,
            event_type,
            tags: parse_tags(&self.tags),
        })
    }
}

/// When and where
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScheduleSection {
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub location: String,
    pub capacity: u32,
}

impl Default for ScheduleSection {
    fn default() -> Self {
        Self {
            date: String::new(),
            start_time: String::new(),
            end_time: String::new(),
            location: String::new(),
            capacity: 1,
        }
    }
}

/// Validated [`ScheduleSection`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidSchedule {
    pub date: NaiveDate,
    /// "<start> - <end>", or just "<start>" without an end time
    pub time: String,
    pub location: String,
    pub capacity: u32,
}

impl ScheduleSection {
    pub fn validate(&self) -> Result<ValidSchedule, SubmissionError> {
        let date_text = required(&self.date, "date")?;
        let start = required(&self.start_time, "start time")?;
        let location = required(&self.location, "location")?;

        let date = parse_day(&date_text).ok_or(SubmissionError::InvalidDate(date_text))?;
        if self.capacity < 1 {
            return Err(SubmissionError::InvalidCapacity(self.capacity));
        }

        let end = self.end_time.trim();
        let time = if end.is_empty() {
            start
        } else {
            format!("{} - {}", start, end)
        };

        Ok(ValidSchedule {
            date,
            time,
            location,
            capacity: self.capacity,
        })
    }
}

/// Tourist and researcher prices as typed
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingSection {
    pub tourist_price: String,
    pub researcher_price: String,
}

impl PricingSection {
    /// Prices are kept exactly as typed, so only an exact match of
    /// [`RESEARCH_ACCESS_PRICE`](crate::domain::RESEARCH_ACCESS_PRICE) counts
    /// as the reserved literal.
    pub fn validate(&self) -> Result<PricePair, SubmissionError> {
        Ok(PricePair::new(
            self.tourist_price.as_str(),
            self.researcher_price.as_str(),
        ))
    }
}

/// Optional add-ons
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AddOnsSection {
    pub audio_guide: bool,
    pub virtual_preview: bool,
    pub requires_prebooking: bool,
}

impl AddOnsSection {
    pub fn validate(&self) -> Result<EventFeatures, SubmissionError> {
        Ok(EventFeatures {
            audio_guide: self.audio_guide,
            virtual_preview: self.virtual_preview,
            requires_prebooking: self.requires_prebooking,
        })
    }
}

/// One edited section of the form
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "section")]
pub enum FormSection {
    Details(DetailsSection),
    Schedule(ScheduleSection),
    Pricing(PricingSection),
    AddOns(AddOnsSection),
}

/// The whole submission form, including a picked image if any
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SubmissionForm {
    pub details: DetailsSection,
    pub schedule: ScheduleSection,
    pub pricing: PricingSection,
    pub add_ons: AddOnsSection,
    #[serde(skip)]
    image: Option<PendingUpload>,
}

/// A form whose every section passed validation
#[derive(Debug)]
pub struct ValidatedForm {
    pub details: ValidDetails,
    pub schedule: ValidSchedule,
    pub pricing: PricePair,
    pub features: EventFeatures,
    pub image: Option<PendingUpload>,
}

impl SubmissionForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace one section
    pub fn update(&mut self, section: FormSection) {
        match section {
            FormSection::Details(details) => self.details = details,
            FormSection::Schedule(schedule) => self.schedule = schedule,
            FormSection::Pricing(pricing) => self.pricing = pricing,
            FormSection::AddOns(add_ons) => self.add_ons = add_ons,
        }
    }

    /// Builder form of [`SubmissionForm::update`]
    pub fn with(mut self, section: FormSection) -> Self {
        self.update(section);
        self
    }

    /// Attach a picked image, releasing any previously picked one
    pub fn attach_image(&mut self, upload: PendingUpload) {
        if let Some(previous) = self.image.replace(upload) {
            previous.discard();
        }
    }

    /// Drop the picked image, if any
    pub fn remove_image(&mut self) {
        if let Some(upload) = self.image.take() {
            upload.discard();
        }
    }

    pub fn image(&self) -> Option<&PendingUpload> {
        self.image.as_ref()
    }

    /// Validate every section, in form order.
    ///
    /// On failure the form, and any picked image with it, is released.
    pub fn validate(self) -> Result<ValidatedForm, SubmissionError> {
        let details = self.details.validate()?;
        let schedule = self.schedule.validate()?;
        let pricing = self.pricing.validate()?;
        let features = self.add_ons.validate()?;

        Ok(ValidatedForm {
            details,
            schedule,
            pricing,
            features,
            image: self.image,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AudienceMode, RESEARCH_ACCESS_PRICE};

    #[test]
    fn test_parse_tags() {
        assert_eq!(
            parse_tags(" Cham Dance, ,Masks,Cham Dance ,"),
            vec!["Cham Dance", "Masks"]
        );
        assert!(parse_tags("").is_empty());
    }

    #[test]
    fn test_details_require_title() {
        let details = DetailsSection {
            monastery: "Rumtek".to_string(),
            description: "x".to_string(),
            ..Default::default()
        };
        assert_eq!(
            details.validate().unwrap_err(),
            SubmissionError::MissingField("title")
        );
    }

    #[test]
    fn test_details_default_event_type() {
        let details = DetailsSection {
            title: "Tea Ceremony".to_string(),
            monastery: "Rumtek".to_string(),
            description: "x".to_string(),
            ..Default::default()
        };
        assert_eq!(details.validate().unwrap().event_type, DEFAULT_EVENT_TYPE);
    }

    #[test]
    fn test_schedule_time_range() {
        let schedule = ScheduleSection {
            date: "2025-10-01".to_string(),
            start_time: "14:00".to_string(),
            end_time: "16:30".to_string(),
            location: "Hall".to_string(),
            capacity: 12,
        };
        let valid = schedule.validate().unwrap();
        assert_eq!(valid.time, "14:00 - 16:30");
        assert_eq!(valid.date, NaiveDate::from_ymd_opt(2025, 10, 1).unwrap());
    }

    #[test]
    fn test_padded_research_price_is_not_reserved() {
        let pricing = PricingSection {
            tourist_price: "₹200".to_string(),
            researcher_price: format!(" {} ", RESEARCH_ACCESS_PRICE),
        };
        let pair = pricing.validate().unwrap();

        assert_eq!(pair.resolve_for_submission(AudienceMode::Tourist), "₹200");

        let exact = PricingSection {
            researcher_price: RESEARCH_ACCESS_PRICE.to_string(),
            ..pricing
        };
        assert_eq!(
            exact.validate().unwrap().resolve_for_submission(AudienceMode::Tourist),
            RESEARCH_ACCESS_PRICE
        );
    }

    #[test]
    fn test_schedule_without_end_time() {
        let schedule = ScheduleSection {
            date: "2025-10-01".to_string(),
            start_time: "14:00".to_string(),
            location: "Hall".to_string(),
            ..Default::default()
        };
        assert_eq!(schedule.validate().unwrap().time, "14:00");
    }

    #[test]
    fn test_schedule_rejects_bad_date_and_capacity() {
        let mut schedule = ScheduleSection {
            date: "next tuesday".to_string(),
            start_time: "14:00".to_string(),
            location: "Hall".to_string(),
            capacity: 5,
            ..Default::default()
        };
        assert_eq!(
            schedule.validate().unwrap_err(),
            SubmissionError::InvalidDate("next tuesday".to_string())
        );

        schedule.date = "2025-10-01".to_string();
        schedule.capacity = 0;
        assert_eq!(
            schedule.validate().unwrap_err(),
            SubmissionError::InvalidCapacity(0)
        );
    }

    #[test]
    fn test_update_replaces_section() {
        let form = SubmissionForm::new().with(FormSection::AddOns(AddOnsSection {
            audio_guide: true,
            ..Default::default()
        }));
        assert!(form.add_ons.audio_guide);
        assert!(!form.add_ons.virtual_preview);
    }

    #[test]
    fn test_form_from_yaml() {
        let yaml = r#"
details:
  title: Butter Lamp Offering
  monastery: Rumtek Monastery
  description: Evening lamps
  tags: "Lamps, Evening"
schedule:
  date: "2025-11-11"
  start_time: "06:00 PM"
  end_time: "08:00 PM"
  location: Main Hall
  capacity: 40
pricing:
  tourist_price: "₹200"
  researcher_price: "Free (Research Access)"
"#;
        let form: SubmissionForm = serde_yaml::from_str(yaml).unwrap();
        let valid = form.validate().unwrap();
        assert_eq!(valid.details.tags, vec!["Lamps", "Evening"]);
        assert_eq!(valid.schedule.time, "06:00 PM - 08:00 PM");
        assert!(valid.image.is_none());
    }
}
