// This is a part of partial-date.
// See README.md and LICENSE.txt for details.

//! Rendering component values through a pattern.

use core::fmt::Write;

use super::Item;
use crate::DateFields;

/// English standalone month names. Locale-aware rendering is out of scope;
/// these are the names the month-name field emits and matches.
pub(super) static MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Renders the items over a component set. Absent components render as 0 —
/// callers formatting a resolved instant always pass a complete set.
pub(crate) fn format_items(fields: &DateFields, items: &[Item]) -> String {
    let mut out = String::new();
    for item in items {
        match *item {
            Item::Literal(c) => out.push(c),
            Item::Numeric(component, width) => {
                let value = fields.get(component).unwrap_or(0);
                let _ = write!(out, "{:0width$}", value, width = width);
            }
            Item::MonthName => {
                let month = fields.month.unwrap_or(0);
                match usize::try_from(month).ok().and_then(|m| MONTHS.get(m.wrapping_sub(1))) {
                    Some(name) => out.push_str(name),
                    None => {
                        let _ = write!(out, "{}", month);
                    }
                }
            }
        }
    }
    out
}
