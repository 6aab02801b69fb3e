// This is a part of partial-date.
// See README.md and LICENSE.txt for details.

//! The partial calendar date value.

use core::fmt;

use crate::format::{self, DateFormat, Pattern};
use crate::{validate, Calendar, Component, DateFields, Gregorian, Instant, Weekday};

/// A calendar date where any subset of components may be absent.
///
/// The components present at construction are the value's *tracked* fields,
/// and that subset is fixed for its whole lifetime: [`change`] may rewrite a
/// tracked field's number or cascade into other tracked fields, but it never
/// promotes an absent field to present and never clears a present one.
///
/// A `PartialDate` is either calendar-valid — its present components denote
/// a real moment — or explicitly unresolved, in which case [`instant`] and
/// everything built on it answer with absence. It is never silently wrong.
///
/// Values are immutable; the one arithmetic operation returns a new value.
/// Equality compares the component sets field-wise and ignores the calendar;
/// use [`is_same_instant`] to compare moments in time.
///
/// [`change`]: PartialDate::change
/// [`instant`]: PartialDate::instant
/// [`is_same_instant`]: PartialDate::is_same_instant
#[derive(Copy, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PartialDate<C: Calendar = Gregorian> {
    fields: DateFields,
    calendar: C,
}

impl<C: Calendar> PartialDate<C> {
    /// Makes a partial date from raw components.
    ///
    /// The raw set is repaired by [`validate`] before it is stored, so an
    /// impossible combination like April 31 comes out as the nearest real
    /// date (April 30) rather than an error.
    pub fn from_fields(calendar: C, fields: DateFields) -> PartialDate<C> {
        let fields = validate(fields, &calendar);
        PartialDate { fields, calendar }
    }

    /// Makes a partial date tracking year, month and day only.
    pub fn from_ymd(calendar: C, year: i32, month: i32, day: i32) -> PartialDate<C> {
        PartialDate::from_fields(calendar, DateFields::ymd(year, month, day))
    }

    /// A snapshot of the current moment with all seven components tracked.
    #[cfg(feature = "clock")]
    pub fn now(calendar: C) -> PartialDate<C> {
        let fields = calendar.now();
        PartialDate { fields, calendar }
    }

    /// Parses text against a pattern.
    ///
    /// Exactly the components the pattern names come out tracked: a
    /// [`DateFormat::DayMonthYear`] parse yields day, month and year, with
    /// the time of day absent. The parsed set is validated like any other
    /// raw input. Returns `None` when the text does not match.
    pub fn parse(calendar: C, text: &str, pattern: &Pattern) -> Option<PartialDate<C>> {
        let fields = format::parse_items(text, &pattern.items())?;
        Some(PartialDate::from_fields(calendar, fields))
    }

    /// The component set.
    #[inline]
    pub fn fields(&self) -> &DateFields {
        &self.fields
    }

    /// The calendar context this value resolves against.
    #[inline]
    pub fn calendar(&self) -> &C {
        &self.calendar
    }

    /// The year, if tracked.
    #[inline]
    pub fn year(&self) -> Option<i32> {
        self.fields.year
    }

    /// The month, if tracked.
    #[inline]
    pub fn month(&self) -> Option<i32> {
        self.fields.month
    }

    /// The day of month, if tracked.
    #[inline]
    pub fn day(&self) -> Option<i32> {
        self.fields.day
    }

    /// The hour, if tracked.
    #[inline]
    pub fn hour(&self) -> Option<i32> {
        self.fields.hour
    }

    /// The minute, if tracked.
    #[inline]
    pub fn minute(&self) -> Option<i32> {
        self.fields.minute
    }

    /// The second, if tracked.
    #[inline]
    pub fn second(&self) -> Option<i32> {
        self.fields.second
    }

    /// The millisecond, if tracked.
    #[inline]
    pub fn millisecond(&self) -> Option<i32> {
        self.fields.millisecond
    }

    /// Reads one component by selector.
    #[inline]
    pub fn component(&self, component: Component) -> Option<i32> {
        self.fields.get(component)
    }

    /// The absolute instant this value denotes, or `None` when the tracked
    /// components are insufficient or not calendar-valid.
    pub fn instant(&self) -> Option<Instant> {
        self.calendar.resolve(&self.fields)
    }

    /// The day of week, or `None` when the value does not resolve.
    pub fn weekday(&self) -> Option<Weekday> {
        self.instant().map(|instant| self.calendar.weekday(instant))
    }

    /// Whether the tracked month is a leap month; `None` when the question
    /// cannot be answered from the tracked components.
    pub fn leap_month(&self) -> Option<bool> {
        self.calendar.leap_month(&self.fields)
    }

    /// Shifts one component by `by`, adding when `increase` is true and
    /// subtracting otherwise, and returns the shifted value.
    ///
    /// When the target component is absent the call is a no-op — the value
    /// comes back unchanged, not an error. Otherwise the raw shift is
    /// resolved through the calendar and every *tracked* component is
    /// re-read from the resolved instant, so an increment past a boundary
    /// cascades: December 15 plus one month becomes January 15 of the next
    /// year — if the year is tracked. An untracked year stays absent even
    /// though the underlying date rolled over.
    ///
    /// When the shifted set does not resolve, only the raw shift persists
    /// and the other components keep their old readings — a known degraded
    /// state the next successful resolution repairs.
    #[must_use = "this returns the changed value; the original is untouched"]
    pub fn change(&self, component: Component, by: i32, increase: bool) -> PartialDate<C> {
        let current = match self.fields.get(component) {
            Some(current) => i64::from(current),
            None => return self.clone(),
        };
        let delta = if increase { i64::from(by) } else { -i64::from(by) };
        let raw = (current + delta).clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32;

        let mut fields = self.fields;
        fields.set(component, Some(raw));
        if let Some(instant) = self.calendar.resolve(&fields) {
            for tracked in Component::ALL {
                if fields.get(tracked).is_some() {
                    fields.set(tracked, Some(self.calendar.field(instant, tracked)));
                }
            }
        }
        PartialDate { fields, calendar: self.calendar.clone() }
    }

    /// Renders this value through a pattern.
    ///
    /// The value must resolve to an instant; an unresolved value renders as
    /// the empty string, not an error. The first letter of the rendered
    /// text is uppercased.
    pub fn format(&self, pattern: &Pattern) -> String {
        let instant = match self.instant() {
            Some(instant) => instant,
            None => return String::new(),
        };
        let rendered = format::format_items(&self.calendar.fields_at(instant), &pattern.items());
        capitalize_first(&rendered)
    }

    /// Renders this value through one of the well-known formats.
    pub fn format_with(&self, format: DateFormat) -> String {
        self.format(&Pattern::Named(format))
    }
}

/// Uppercases the first character.
fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

impl<C: Calendar> PartialEq for PartialDate<C> {
    /// Field-wise comparison of the component sets; the calendar does not
    /// participate.
    fn eq(&self, other: &PartialDate<C>) -> bool {
        self.fields == other.fields
    }
}

impl<C: Calendar> Eq for PartialDate<C> {}

impl<C: Calendar> fmt::Debug for PartialDate<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.fields, f)
    }
}
