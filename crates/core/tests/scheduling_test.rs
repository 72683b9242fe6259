use carebook_core::{
    BookingError, DEFAULT_BUFFER_MINUTES, TimeInterval, Timespan, conflicting, generate_slots,
    has_conflict, resolve_buffer_minutes,
    scheduling::availability::{available_slots, booking_interval, first_available_slot, lookup_range},
};
use chrono::{DateTime, TimeZone, Utc};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn at(hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 16, hour, minute, 0).unwrap()
}

fn interval(start: (u32, u32), end: (u32, u32)) -> TimeInterval {
    TimeInterval::new(at(start.0, start.1), at(end.0, end.1)).unwrap()
}

fn bounds(slots: &[TimeInterval]) -> Vec<(DateTime<Utc>, DateTime<Utc>)> {
    slots.iter().map(|s| (s.start_at(), s.end_at())).collect()
}

#[test]
fn test_generate_slots_excludes_slot_past_window_end() {
    let slots = generate_slots(at(9, 0), at(10, 0), 20, 10).unwrap();

    assert_eq!(
        bounds(&slots),
        vec![(at(9, 0), at(9, 20)), (at(9, 30), at(9, 50))]
    );
}

#[rstest]
#[case::empty_window(at(9, 0), at(9, 0), 30, 10)]
#[case::inverted_window(at(10, 0), at(9, 0), 30, 10)]
#[case::duration_exceeds_window(at(9, 0), at(9, 10), 30, 0)]
fn test_generate_slots_empty(
    #[case] start: DateTime<Utc>,
    #[case] end: DateTime<Utc>,
    #[case] duration: i64,
    #[case] buffer: i64,
) {
    let slots = generate_slots(start, end, duration, buffer).unwrap();
    assert!(slots.is_empty());
}

#[rstest]
#[case(0)]
#[case(-15)]
fn test_generate_slots_rejects_non_positive_duration(#[case] duration: i64) {
    let result = generate_slots(at(9, 0), at(17, 0), duration, 10);
    assert!(matches!(result, Err(BookingError::InvalidDuration(d)) if d == duration));
}

#[test]
fn test_generate_slots_full_working_day() {
    // 09:00-17:00 with 45 minute visits and a 15 minute gap: one visit per hour.
    let slots = generate_slots(at(9, 0), at(17, 0), 45, 15).unwrap();

    assert_eq!(slots.len(), 8);
    assert_eq!(slots[0].start_at(), at(9, 0));
    assert_eq!(slots[7].start_at(), at(16, 0));
    assert_eq!(slots[7].end_at(), at(16, 45));
}

#[test]
fn test_generate_slots_is_idempotent() {
    let first = generate_slots(at(8, 0), at(12, 30), 25, 5).unwrap();
    let second = generate_slots(at(8, 0), at(12, 30), 25, 5).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_conflict_when_booking_inside_buffer() {
    let candidate = interval((10, 0), (10, 30));
    let booked = vec![interval((10, 25), (10, 40))];

    assert!(has_conflict(&candidate, &booked, 10));
}

#[test]
fn test_no_conflict_when_booking_beyond_buffer() {
    let candidate = interval((10, 0), (10, 30));
    let booked = vec![interval((11, 0), (11, 30))];

    assert!(!has_conflict(&candidate, &booked, 10));
}

#[rstest]
// Expanded candidate is [09:50, 10:40). Booking ending exactly at 09:50 only touches it.
#[case::ends_at_expanded_start((9, 20), (9, 50), false)]
#[case::ends_inside_expanded_start((9, 20), (9, 51), true)]
#[case::starts_at_expanded_end((10, 40), (11, 0), false)]
#[case::starts_inside_expanded_end((10, 39), (11, 0), true)]
#[case::swallows_candidate((9, 0), (12, 0), true)]
fn test_conflict_boundaries(
    #[case] booked_start: (u32, u32),
    #[case] booked_end: (u32, u32),
    #[case] expected: bool,
) {
    let candidate = interval((10, 0), (10, 30));
    let booked = vec![interval(booked_start, booked_end)];

    assert_eq!(has_conflict(&candidate, &booked, 10), expected);
}

#[rstest]
#[case(0)]
#[case(-5)]
fn test_zero_buffer_skips_conflict_check(#[case] buffer: i64) {
    let candidate = interval((10, 0), (10, 30));
    let booked = vec![interval((10, 0), (10, 30))];

    assert!(!has_conflict(&candidate, &booked, buffer));
    assert!(conflicting(&candidate, &booked, buffer).is_empty());
}

#[test]
fn test_no_conflict_against_empty_schedule() {
    let candidate = interval((10, 0), (10, 30));
    let booked: Vec<TimeInterval> = Vec::new();

    assert!(!has_conflict(&candidate, &booked, 10));
}

#[test]
fn test_conflicting_returns_only_colliding_bookings() {
    let candidate = interval((10, 0), (10, 30));
    let booked = vec![
        interval((8, 0), (8, 30)),
        interval((10, 35), (11, 0)),
        interval((9, 45), (9, 55)),
        interval((13, 0), (14, 0)),
    ];

    let hits = conflicting(&candidate, &booked, 10);
    assert_eq!(hits, vec![&booked[1], &booked[2]]);
}

#[rstest]
#[case::unset(None, DEFAULT_BUFFER_MINUTES)]
#[case::empty(Some(""), DEFAULT_BUFFER_MINUTES)]
#[case::garbage(Some("ten"), DEFAULT_BUFFER_MINUTES)]
#[case::negative(Some("-5"), DEFAULT_BUFFER_MINUTES)]
#[case::fractional(Some("7.5"), DEFAULT_BUFFER_MINUTES)]
#[case::zero(Some("0"), 0)]
#[case::valid(Some("15"), 15)]
#[case::padded(Some(" 20 "), 20)]
fn test_resolve_buffer_minutes(#[case] raw: Option<&str>, #[case] expected: i64) {
    assert_eq!(resolve_buffer_minutes(raw), expected);
}

#[test]
fn test_default_buffer_is_ten_minutes() {
    assert_eq!(resolve_buffer_minutes(None), 10);
}

#[test]
fn test_available_slots_filters_booked_neighbourhood() {
    // Candidates: 09:00, 09:30, 10:00, 10:30 (20 min each, 10 min gap).
    // 09:30 overlaps the booking outright and 10:00 sits inside its buffer.
    let booked = vec![interval((9, 35), (9, 55))];
    let slots = available_slots(at(9, 0), at(11, 0), 20, 10, &booked).unwrap();

    assert_eq!(
        bounds(&slots),
        vec![(at(9, 0), at(9, 20)), (at(10, 30), at(10, 50))]
    );
}

#[test]
fn test_first_available_slot() {
    let booked = vec![interval((9, 0), (9, 20))];
    let first = first_available_slot(at(9, 0), at(11, 0), 20, 10, &booked).unwrap();
    assert_eq!(first, Some(interval((9, 30), (9, 50))));

    let none = first_available_slot(at(9, 0), at(9, 10), 20, 10, &booked).unwrap();
    assert_eq!(none, None);
}

#[test]
fn test_booking_interval() {
    assert_eq!(booking_interval(at(14, 0), 30).unwrap(), interval((14, 0), (14, 30)));
    assert!(matches!(
        booking_interval(at(14, 0), 0),
        Err(BookingError::InvalidDuration(0))
    ));
}

#[test]
fn test_lookup_range_widens_by_buffer() {
    assert_eq!(lookup_range(at(9, 0), at(17, 0), 10), (at(8, 50), at(17, 10)));
    assert_eq!(lookup_range(at(9, 0), at(17, 0), -3), (at(9, 0), at(17, 0)));
}
