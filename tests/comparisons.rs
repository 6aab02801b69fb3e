//! The comparison predicates and the two-operand selection helpers.

use partial_date::{earlier_of, later_of, Component, DateFields, Gregorian, PartialDate};

const UTC: Gregorian = Gregorian::utc();

fn ymd(year: i32, month: i32, day: i32) -> PartialDate {
    PartialDate::from_ymd(UTC, year, month, day)
}

#[test]
fn absent_components_never_compare_equal() {
    let full = ymd(2023, 4, 15);
    let no_year = PartialDate::from_fields(
        UTC,
        DateFields { month: Some(4), day: Some(15), ..DateFields::EMPTY },
    );
    // the sides agree on month and day...
    assert!(full.is_equal(Component::Month, &no_year));
    assert!(full.is_equal(Component::Day, &no_year));
    // ...but an absent year equals nothing, in either direction
    assert!(!full.is_equal(Component::Year, &no_year));
    assert!(!no_year.is_equal(Component::Year, &full));
    assert!(!no_year.is_same_year(&no_year));
}

#[test]
fn same_day_chain_requires_the_whole_prefix() {
    // same day-of-month in different months is not the same calendar day
    assert!(!ymd(2023, 4, 15).is_same_calendar_day(&ymd(2023, 5, 15)));
    // same month in different years is not the same month
    assert!(!ymd(2023, 4, 15).is_same_month(&ymd(2024, 4, 15)));
    assert!(ymd(2023, 4, 15).is_same_calendar_day(&ymd(2023, 4, 15)));
}

#[test]
fn same_calendar_day_ignores_the_clock() {
    let early = PartialDate::from_fields(UTC, DateFields::ymd_hms(2023, 4, 15, 0, 1, 0));
    let late = PartialDate::from_fields(UTC, DateFields::ymd_hms(2023, 4, 15, 23, 59, 59));
    assert!(early.is_same_calendar_day(&late));
    assert!(early.is_earlier(&late));
}

#[test]
fn strict_instant_ordering() {
    let noon = PartialDate::from_fields(UTC, DateFields::ymd_hms(2023, 4, 15, 12, 0, 0));
    let one = PartialDate::from_fields(UTC, DateFields::ymd_hms(2023, 4, 15, 13, 0, 0));
    assert!(noon.is_earlier(&one));
    assert!(!noon.is_earlier(&noon));
    assert!(one.is_later(&noon));
    assert!(noon.is_same_instant(&noon));
    assert!(!noon.is_same_instant(&one));
}

#[test]
fn unresolvable_values_order_nothing() {
    let resolved = ymd(2023, 4, 15);
    let unresolved = PartialDate::from_fields(UTC, DateFields::EMPTY);
    assert!(!resolved.is_earlier(&unresolved));
    assert!(!resolved.is_later(&unresolved));
    assert!(!unresolved.is_earlier(&resolved));
    assert!(!unresolved.is_later(&resolved));
    assert!(!unresolved.is_same_instant(&resolved));
}

#[test]
fn partial_values_still_order_through_their_defaults() {
    // month and day alone resolve against the reference year, so ordering
    // within the same tracked shape is meaningful
    let april = PartialDate::from_fields(
        UTC,
        DateFields { month: Some(4), day: Some(15), ..DateFields::EMPTY },
    );
    let may = PartialDate::from_fields(
        UTC,
        DateFields { month: Some(5), day: Some(1), ..DateFields::EMPTY },
    );
    assert!(april.is_earlier(&may));
}

#[test]
fn earlier_of_returns_the_operand() {
    let a = ymd(2023, 4, 15);
    let b = ymd(2024, 1, 1);
    assert_eq!(earlier_of(&a, &b), Some(&a));
    assert_eq!(earlier_of(&b, &a), Some(&a));
    assert_eq!(later_of(&a, &b), Some(&b));
    assert_eq!(later_of(&b, &a), Some(&b));
}

#[test]
fn selection_needs_both_sides_resolvable() {
    let a = ymd(2023, 4, 15);
    let unresolved = PartialDate::from_fields(UTC, DateFields::EMPTY);
    assert_eq!(earlier_of(&a, &unresolved), None);
    assert_eq!(earlier_of(&unresolved, &a), None);
    assert_eq!(later_of(&a, &unresolved), None);
}

#[test]
fn ties_prefer_the_first_argument() {
    let a = ymd(2023, 4, 15);
    let b = ymd(2023, 4, 15);
    assert!(std::ptr::eq(earlier_of(&a, &b).unwrap(), &a));
    assert!(std::ptr::eq(later_of(&a, &b).unwrap(), &a));
}
