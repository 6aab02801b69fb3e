#![cfg(feature = "serde")]

//! Serde round trips for the crate's types.

use partial_date::{Component, DateFields, Gregorian, Instant, PartialDate, Weekday};

#[test]
fn date_fields_round_trip() {
    let fields = DateFields { millisecond: Some(250), ..DateFields::ymd(2023, 4, 15) };
    let json = serde_json::to_string(&fields).unwrap();
    let back: DateFields = serde_json::from_str(&json).unwrap();
    assert_eq!(back, fields);
}

#[test]
fn absent_components_survive() {
    let fields = DateFields { month: Some(4), ..DateFields::EMPTY };
    let json = serde_json::to_string(&fields).unwrap();
    let back: DateFields = serde_json::from_str(&json).unwrap();
    assert_eq!(back.month, Some(4));
    assert_eq!(back.year, None);
}

#[test]
fn partial_date_round_trip() {
    let date = PartialDate::from_ymd(Gregorian::utc(), 2023, 4, 15);
    let json = serde_json::to_string(&date).unwrap();
    let back: PartialDate = serde_json::from_str(&json).unwrap();
    assert_eq!(back, date);
    assert!(back.is_same_instant(&date));
}

#[test]
fn plain_enums_round_trip() {
    for component in Component::ALL {
        let json = serde_json::to_string(&component).unwrap();
        let back: Component = serde_json::from_str(&json).unwrap();
        assert_eq!(back, component);
    }
    let json = serde_json::to_string(&Weekday::Sun).unwrap();
    assert_eq!(serde_json::from_str::<Weekday>(&json).unwrap(), Weekday::Sun);
}

#[test]
fn instant_is_transparent_millis() {
    let instant = Instant::from_timestamp_millis(1_681_549_507_000);
    let json = serde_json::to_string(&instant).unwrap();
    let back: Instant = serde_json::from_str(&json).unwrap();
    assert_eq!(back, instant);
}
