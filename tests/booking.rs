//! Booking Integration Tests
//!
//! Tests for the single-form invariant, duplicate bookings and package
//! traveler rosters.

use chrono::NaiveDate;
use cultural_calendar::booking::{BookingState, Package, TravelerRoster};
use cultural_calendar::{BookOutcome, BookingError, EventId, Session, TravelerRecord};

#[test]
fn test_already_booked_is_noop() {
    let mut session = Session::new();
    session.book_now(EventId(1)).unwrap();
    session.booking_mut().confirm_booking().unwrap();

    // Another event's form is open when the duplicate attempt happens
    session.book_now(EventId(2)).unwrap();
    session.booking_mut().draft_mut().unwrap().traveler.name = "Pema".to_string();
    let booked_before = session.booking().booked().len();

    let outcome = session.book_now(EventId(1)).unwrap();

    assert_eq!(outcome, BookOutcome::AlreadyBooked(EventId(1)));
    assert_eq!(session.booking().booked().len(), booked_before);
    assert_eq!(session.booking().target(), Some(EventId(2)));
    assert_eq!(session.booking().draft().unwrap().traveler.name, "Pema");
}

#[test]
fn test_full_event_can_be_booked() {
    let mut session = Session::new();
    let bumchu = session.catalog().get(EventId(3)).unwrap();
    assert_eq!(bumchu.seats_left(), 0);

    let outcome = session.book_now(EventId(3)).unwrap();

    assert!(matches!(outcome, BookOutcome::FormOpened { event_id: EventId(3), .. }));
    assert_eq!(session.booking_mut().confirm_booking(), Ok(EventId(3)));
    assert_eq!(session.catalog().get(EventId(3)).unwrap().booked, 200);
}

#[test]
fn test_confirm_is_idempotent_on_booked_set() {
    let mut session = Session::new();
    session.book_now(EventId(4)).unwrap();
    session.booking_mut().confirm_booking().unwrap();

    assert_eq!(session.book_now(EventId(4)).unwrap(), BookOutcome::AlreadyBooked(EventId(4)));
    assert_eq!(
        session.booking_mut().confirm_booking(),
        Err(BookingError::NoActiveBooking)
    );
    assert_eq!(session.booking().booked().len(), 1);
}

#[test]
fn test_cancel_returns_to_browsing_without_side_effects() {
    let mut session = Session::new();
    let catalog_len = session.catalog().len();
    session.book_now(EventId(5)).unwrap();
    session.booking_mut().draft_mut().unwrap().traveler =
        TravelerRecord::new("Karma", "karma@example.com");

    assert_eq!(session.booking_mut().cancel(), Some(EventId(5)));

    assert_eq!(*session.booking().state(), BookingState::Browsing);
    assert!(session.booking().booked().is_empty());
    assert_eq!(session.catalog().len(), catalog_len);

    // Reopening starts from a blank form
    session.book_now(EventId(5)).unwrap();
    assert!(session.booking().draft().unwrap().traveler.is_blank());
}

#[test]
fn test_submitted_events_are_bookable() {
    let mut session = Session::new();
    let form = serde_yaml::from_str(
        r#"
details:
  title: Monlam Chenmo
  monastery: Rumtek Monastery
  description: Great prayer festival
schedule:
  date: "2026-03-01"
  start_time: "07:00"
  location: Assembly Hall
  capacity: 2
"#,
    )
    .unwrap();
    let event = session.submit(form, Default::default()).unwrap();

    let outcome = session.book_now(event.id).unwrap();

    assert!(matches!(outcome, BookOutcome::FormOpened { event_id, .. } if event_id == event.id));
}

#[test]
fn test_roster_resize_round_trip() {
    let mut roster = TravelerRoster::new();
    roster.resize(3).unwrap();
    for (i, name) in ["Dorjee", "Sonam", "Yangchen"].iter().enumerate() {
        let record = roster.get_mut(i).unwrap();
        record.name = name.to_string();
        record.age = format!("{}", 30 + i);
    }

    roster.resize(1).unwrap();
    roster.resize(3).unwrap();

    let travelers = roster.travelers();
    assert_eq!(travelers.len(), 3);
    assert_eq!(travelers[0].name, "Dorjee");
    assert_eq!(travelers[0].age, "30");
    assert!(travelers[1].is_blank());
    assert!(travelers[2].is_blank());
}

#[test]
fn test_package_dates_follow_start() {
    let mut session = Session::new();
    let package = session.package_mut();
    package
        .select_package(Package::new("Monastery Trail", 4))
        .unwrap();

    let start = NaiveDate::from_ymd_opt(2025, 12, 30).unwrap();
    package.select_start_date(start).unwrap();

    assert_eq!(package.end_date(), NaiveDate::from_ymd_opt(2026, 1, 2));
    assert_eq!(
        package.set_end_date(start),
        Err(BookingError::EndDateLocked)
    );
    assert_eq!(package.end_date(), NaiveDate::from_ymd_opt(2026, 1, 2));
}
