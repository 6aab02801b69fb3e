// This is a part of partial-date.
// See README.md and LICENSE.txt for details.

//! Scanning text back into component values.

use super::formatting::MONTHS;
use super::Item;
use crate::{Component, DateFields};

/// Parses text against the items, producing exactly the components the
/// pattern names — a `dd.MM` pattern yields day and month, nothing else.
///
/// Returns `None` on any mismatch, including trailing input. Numeric fields
/// are scanned leniently: at least one digit, up to a per-component cap,
/// regardless of the pattern width.
pub(crate) fn parse_items(text: &str, items: &[Item]) -> Option<DateFields> {
    let mut fields = DateFields::EMPTY;
    let mut rest = text;
    for item in items {
        rest = match *item {
            Item::Literal(expected) => {
                let mut chars = rest.chars();
                if chars.next()? != expected {
                    return None;
                }
                chars.as_str()
            }
            Item::Numeric(component, _) => {
                let (value, rest) = number(rest, max_digits(component))?;
                fields.set(component, Some(value));
                rest
            }
            Item::MonthName => {
                let (month, rest) = month_by_name(rest)?;
                fields.set(Component::Month, Some(month));
                rest
            }
        };
    }
    if rest.is_empty() {
        Some(fields)
    } else {
        None
    }
}

/// How many digits a component may consume.
fn max_digits(component: Component) -> usize {
    match component {
        Component::Year => 9,
        Component::Millisecond => 3,
        _ => 2,
    }
}

/// Scans a non-negative number of one to `max` digits.
fn number(s: &str, max: usize) -> Option<(i32, &str)> {
    let digits = s.bytes().take(max).take_while(|b| b.is_ascii_digit()).count();
    if digits == 0 {
        return None;
    }
    let value = s[..digits].parse().ok()?;
    Some((value, &s[digits..]))
}

/// Matches a leading English month name, case-insensitively.
fn month_by_name(s: &str) -> Option<(i32, &str)> {
    for (index, name) in MONTHS.iter().enumerate() {
        if let Some(prefix) = s.get(..name.len()) {
            if prefix.eq_ignore_ascii_case(name) {
                return Some((index as i32 + 1, &s[name.len()..]));
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::parse_items;
    use crate::format::{DateFormat, Pattern};
    use crate::DateFields;

    fn parse(text: &str, pattern: &str) -> Option<DateFields> {
        parse_items(text, &Pattern::Custom(pattern.to_owned()).items())
    }

    #[test]
    fn yields_exactly_the_pattern_components() {
        let fields = parse("15.04.2023", DateFormat::DayMonthYear.text()).unwrap();
        assert_eq!(fields, DateFields::ymd(2023, 4, 15));
        let fields = parse("15.04", DateFormat::DayMonth.text()).unwrap();
        assert_eq!(fields, DateFields { year: None, ..DateFields::ymd(0, 4, 15) });
        let fields = parse("2023", DateFormat::Year.text()).unwrap();
        assert_eq!(fields, DateFields { year: Some(2023), ..DateFields::EMPTY });
    }

    #[test]
    fn full_timestamp() {
        let fields = parse("2023-04-15T09:05:07", DateFormat::YearMonthDayTime.text()).unwrap();
        assert_eq!(fields, DateFields::ymd_hms(2023, 4, 15, 9, 5, 7));
    }

    #[test]
    fn lenient_digit_widths() {
        let fields = parse("5.4.2023", DateFormat::DayMonthYear.text()).unwrap();
        assert_eq!(fields, DateFields::ymd(2023, 4, 5));
    }

    #[test]
    fn month_names_ignore_case() {
        let fields = parse("april 2023", "LLLL yyyy").unwrap();
        assert_eq!(fields.month, Some(4));
        assert_eq!(fields.year, Some(2023));
    }

    #[test]
    fn mismatches_are_none() {
        assert_eq!(parse("15/04/2023", "dd.MM.yyyy"), None);
        assert_eq!(parse("Smarch 1", "LLLL d"), None);
        assert_eq!(parse("..", "dd.MM"), None);
        assert_eq!(parse("", "yyyy"), None);
        // trailing input is a mismatch too
        assert_eq!(parse("2023 and more", "yyyy"), None);
        // so is non-ASCII where a name or digit is expected
        assert_eq!(parse("июнь 2023", "LLLL yyyy"), None);
    }

    #[test]
    fn numbers_stop_at_their_digit_cap() {
        // the day field consumes at most two digits, leaving "3.11"
        // against ".MM" — a mismatch, not a 123rd day
        assert_eq!(parse("123.11", "d.MM"), None);
        // the year cap is wide enough for far-future years
        let fields = parse("123456", "yyyy").unwrap();
        assert_eq!(fields.year, Some(123_456));
    }
}
