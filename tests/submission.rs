//! Submission Integration Tests
//!
//! Tests for required-field rejection, id assignment and price selection.

use cultural_calendar::domain::RESEARCH_ACCESS_PRICE;
use cultural_calendar::submission::{
    AddOnsSection, DetailsSection, FormSection, PendingUpload, PricingSection, ScheduleSection,
    PLACEHOLDER_IMAGE,
};
use cultural_calendar::{submit, AudienceMode, EventCatalog, SubmissionError, SubmissionForm};

fn complete_form() -> SubmissionForm {
    SubmissionForm::new()
        .with(FormSection::Details(DetailsSection {
            title: "Guru Rinpoche Thunkar Tshechu".to_string(),
            monastery: "Tashiding Monastery".to_string(),
            description: "Prayers on the birth anniversary\nof Guru Rinpoche".to_string(),
            event_type: "Religious Festival".to_string(),
            tags: "Guru Rinpoche, Prayers, ,Prayers".to_string(),
        }))
        .with(FormSection::Schedule(ScheduleSection {
            date: "2025-08-04".to_string(),
            start_time: "09:00 AM".to_string(),
            end_time: "05:00 PM".to_string(),
            location: "Main Temple".to_string(),
            capacity: 150,
        }))
        .with(FormSection::Pricing(PricingSection {
            tourist_price: "₹300".to_string(),
            researcher_price: RESEARCH_ACCESS_PRICE.to_string(),
        }))
        .with(FormSection::AddOns(AddOnsSection {
            audio_guide: true,
            virtual_preview: false,
            requires_prebooking: true,
        }))
}

#[test]
fn test_submit_appends_one_event_with_greater_id() {
    let mut catalog = EventCatalog::new();
    let before = catalog.len();
    let max_id = catalog.iter().map(|e| e.id).max().unwrap();

    let event = submit(&mut catalog, complete_form(), AudienceMode::Tourist).unwrap();

    assert_eq!(catalog.len(), before + 1);
    assert!(event.id > max_id);
    assert_eq!(event.booked, 0);
    assert_eq!(event.capacity, 150);
    assert_eq!(event.tags, vec!["Guru Rinpoche", "Prayers"]);
    assert!(event.features.audio_guide);
    assert!(event.features.requires_prebooking);
}

#[test]
fn test_each_required_field_blocks_submission() {
    type Clear = fn(&mut SubmissionForm);
    let cases: [(&str, Clear); 6] = [
        ("title", |f| f.details.title.clear()),
        ("monastery", |f| f.details.monastery.clear()),
        ("description", |f| f.details.description.clear()),
        ("date", |f| f.schedule.date.clear()),
        ("start time", |f| f.schedule.start_time = "   ".to_string()),
        ("location", |f| f.schedule.location.clear()),
    ];

    for (field, clear) in cases {
        let mut catalog = EventCatalog::new();
        let before = catalog.len();
        let mut form = complete_form();
        clear(&mut form);

        let err = submit(&mut catalog, form, AudienceMode::Tourist).unwrap_err();

        assert_eq!(err, SubmissionError::MissingField(field));
        assert_eq!(catalog.len(), before, "catalog changed when {} was empty", field);
    }
}

#[test]
fn test_identical_submissions_both_succeed() {
    let mut catalog = EventCatalog::new();

    let first = submit(&mut catalog, complete_form(), AudienceMode::Tourist).unwrap();
    let second = submit(&mut catalog, complete_form(), AudienceMode::Tourist).unwrap();

    assert_eq!(first.title, second.title);
    assert_ne!(first.id, second.id);
    assert_eq!(catalog.submitted().len(), 2);
}

#[test]
fn test_reserved_researcher_price_kept_in_any_mode() {
    let mut catalog = EventCatalog::new();

    let event = submit(&mut catalog, complete_form(), AudienceMode::Tourist).unwrap();

    assert_eq!(event.price(AudienceMode::Tourist), RESEARCH_ACCESS_PRICE);
}

#[test]
fn test_mode_selects_price_otherwise() {
    let mut form = complete_form();
    form.pricing.researcher_price = "₹100".to_string();
    let mut catalog = EventCatalog::new();

    let event = submit(&mut catalog, form, AudienceMode::Tourist).unwrap();

    assert_eq!(event.price(AudienceMode::Researcher), "₹300");
}

#[test]
fn test_rejected_submission_releases_image() {
    let mut catalog = EventCatalog::new();
    let mut form = complete_form();
    form.attach_image(PendingUpload::new("/tmp/tshechu.jpg"));
    form.details.title.clear();

    assert!(submit(&mut catalog, form, AudienceMode::Tourist).is_err());
    assert!(catalog.iter().all(|e| !e.image.starts_with("upload://")));
}

#[test]
fn test_replacing_image_keeps_latest() {
    let mut form = complete_form();
    form.attach_image(PendingUpload::new("first.jpg"));
    let second = PendingUpload::new("second.jpg");
    let expected = second.reference();
    form.attach_image(second);

    let mut catalog = EventCatalog::new();
    let event = submit(&mut catalog, form, AudienceMode::Tourist).unwrap();

    assert_eq!(event.image, expected);
}

#[test]
fn test_removed_image_falls_back_to_placeholder() {
    let mut form = complete_form();
    form.attach_image(PendingUpload::new("/tmp/tshechu.jpg"));
    assert!(form.image().is_some());

    form.remove_image();
    assert!(form.image().is_none());

    let mut catalog = EventCatalog::new();
    let event = submit(&mut catalog, form, AudienceMode::Tourist).unwrap();
    assert_eq!(event.image, PLACEHOLDER_IMAGE);
}
