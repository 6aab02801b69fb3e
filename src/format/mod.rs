// This is a part of partial-date.
// See README.md and LICENSE.txt for details.

//! Pattern-based formatting and parsing.
//!
//! Patterns use the date-field letters the well-known formats are written
//! in: `y` year, `M`/`L` month (four or more letters select the month
//! name), `d` day, `H` hour, `m` minute, `s` second, `S` millisecond.
//! Text between single quotes is literal (`''` is a literal quote), and any
//! other character stands for itself. Unrecognized field letters degrade to
//! literals rather than failing — the whole formatting surface is total.

mod formatting;
mod parse;

pub(crate) use formatting::format_items;
pub(crate) use parse::parse_items;

use crate::{Calendar, Component};

/// The well-known named formats.
#[derive(PartialEq, Eq, Copy, Clone, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DateFormat {
    /// `dd.MM.yyyy` — day, month and year.
    DayMonthYear,
    /// `dd.MM` — day and month.
    DayMonth,
    /// `LLLL yyyy` — month name and year.
    MonthNameYear,
    /// `yyyy` — year alone.
    Year,
    /// `yyyy-MM-dd'T'HH:mm:ss` — full date and time of day.
    YearMonthDayTime,
}

impl DateFormat {
    /// The pattern string of this format.
    pub const fn text(self) -> &'static str {
        match self {
            DateFormat::DayMonthYear => "dd.MM.yyyy",
            DateFormat::DayMonth => "dd.MM",
            DateFormat::MonthNameYear => "LLLL yyyy",
            DateFormat::Year => "yyyy",
            DateFormat::YearMonthDayTime => "yyyy-MM-dd'T'HH:mm:ss",
        }
    }
}

/// A formatting pattern: one of the well-known formats, or any custom
/// pattern string.
#[derive(PartialEq, Eq, Clone, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Pattern {
    /// A well-known format.
    Named(DateFormat),
    /// A custom pattern string.
    Custom(String),
}

impl Pattern {
    /// The pattern string.
    pub fn text(&self) -> &str {
        match self {
            Pattern::Named(format) => format.text(),
            Pattern::Custom(text) => text,
        }
    }

    pub(crate) fn items(&self) -> Vec<Item> {
        tokenize(self.text())
    }
}

impl From<DateFormat> for Pattern {
    fn from(format: DateFormat) -> Pattern {
        Pattern::Named(format)
    }
}

/// A single parsed element of a pattern.
#[derive(PartialEq, Eq, Clone, Debug)]
pub(crate) enum Item {
    /// A numeric field, zero-padded to the given width when formatted.
    Numeric(Component, usize),
    /// The month rendered by name.
    MonthName,
    /// A character matched and emitted verbatim.
    Literal(char),
}

/// Splits a pattern string into items.
fn tokenize(pattern: &str) -> Vec<Item> {
    let mut items = Vec::new();
    let mut chars = pattern.chars().peekable();
    while let Some(&c) = chars.peek() {
        match c {
            '\'' => {
                chars.next();
                if chars.peek() == Some(&'\'') {
                    chars.next();
                    items.push(Item::Literal('\''));
                    continue;
                }
                while let Some(inner) = chars.next() {
                    if inner != '\'' {
                        items.push(Item::Literal(inner));
                    } else if chars.peek() == Some(&'\'') {
                        chars.next();
                        items.push(Item::Literal('\''));
                    } else {
                        break;
                    }
                }
            }
            'a'..='z' | 'A'..='Z' => {
                let mut count = 0;
                while chars.peek() == Some(&c) {
                    chars.next();
                    count += 1;
                }
                let field = match (c, count) {
                    ('y', _) => Some(Item::Numeric(Component::Year, count)),
                    ('M' | 'L', n) if n >= 3 => Some(Item::MonthName),
                    ('M' | 'L', n) => Some(Item::Numeric(Component::Month, n)),
                    ('d', n) => Some(Item::Numeric(Component::Day, n)),
                    ('H', n) => Some(Item::Numeric(Component::Hour, n)),
                    ('m', n) => Some(Item::Numeric(Component::Minute, n)),
                    ('s', n) => Some(Item::Numeric(Component::Second, n)),
                    ('S', n) => Some(Item::Numeric(Component::Millisecond, n)),
                    _ => None,
                };
                match field {
                    Some(item) => items.push(item),
                    // unknown field letter, keep it as text
                    None => items.extend(core::iter::repeat(Item::Literal(c)).take(count)),
                }
            }
            _ => {
                chars.next();
                items.push(Item::Literal(c));
            }
        }
    }
    items
}

/// Re-renders a date string from one pattern into another.
///
/// The text is parsed with `from`, resolved against the calendar (absent
/// components take the calendar's reference values) and rendered with `to`.
/// Returns `None` when the text does not match `from` or the parsed
/// components do not resolve.
pub fn convert<C: Calendar>(
    calendar: &C,
    text: &str,
    from: &Pattern,
    to: &Pattern,
) -> Option<String> {
    let fields = parse_items(text, &from.items())?;
    let instant = calendar.resolve(&fields)?;
    Some(format_items(&calendar.fields_at(instant), &to.items()))
}
