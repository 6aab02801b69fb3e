// This is a part of partial-date.
// See README.md and LICENSE.txt for details.

//! The calendar seam: resolving component sets to instants and back.

use num_integer::{div_mod_floor, mod_floor};

use crate::{Component, DateFields, FixedOffset, Instant, Weekday};

pub(crate) const MILLIS_PER_DAY: i64 = 86_400_000;
pub(crate) const MILLIS_PER_HOUR: i64 = 3_600_000;
pub(crate) const MILLIS_PER_MINUTE: i64 = 60_000;

/// A calendar system attached to a timezone.
///
/// This is the collaborator every [`PartialDate`] leans on: it decides which
/// component sets denote a real moment, turns them into an [`Instant`], and
/// reads single components back out. Implementations must be pure — two
/// calls with the same input return the same output — and hold no mutable
/// state, so a calendar value can be shared freely across threads.
///
/// The shipped implementation is [`Gregorian`].
///
/// [`PartialDate`]: crate::PartialDate
pub trait Calendar: Clone {
    /// Resolves a component set to an absolute instant.
    ///
    /// Absent components take the calendar's reference values and present
    /// out-of-range components are normalized by carrying (month 13 becomes
    /// January of the following year). Returns `None` when the set is
    /// insufficient (completely empty) or the normalized reading falls
    /// outside the representable instant range.
    fn resolve(&self, fields: &DateFields) -> Option<Instant>;

    /// Reads a single component of an instant, in this calendar's local
    /// time.
    fn field(&self, instant: Instant, component: Component) -> i32;

    /// The day of week of an instant, in this calendar's local time.
    fn weekday(&self, instant: Instant) -> Weekday;

    /// Whether a component set is calendar-valid as written, with no
    /// normalization: every present component must be in its nominal range
    /// and a present day must exist in the (possibly defaulted) month.
    fn is_valid(&self, fields: &DateFields) -> bool;

    /// Whether the set's month is a leap month. `None` when the question
    /// cannot be answered from the present components.
    fn leap_month(&self, fields: &DateFields) -> Option<bool>;

    /// A snapshot of the current wall-clock reading, all seven components
    /// present.
    #[cfg(feature = "clock")]
    fn now(&self) -> DateFields;

    /// Reads every component of an instant at once.
    fn fields_at(&self, instant: Instant) -> DateFields {
        let mut fields = DateFields::EMPTY;
        for component in Component::ALL {
            fields.set(component, Some(self.field(instant, component)));
        }
        fields
    }
}

/// The proleptic Gregorian calendar in a fixed-offset timezone.
///
/// Leap seconds do not exist here, and the sub-second precision is the
/// millisecond tick.
#[derive(PartialEq, Eq, Copy, Clone, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Gregorian {
    offset: FixedOffset,
}

impl Gregorian {
    /// A Gregorian calendar in the given timezone.
    pub const fn new(offset: FixedOffset) -> Gregorian {
        Gregorian { offset }
    }

    /// A Gregorian calendar in UTC.
    pub const fn utc() -> Gregorian {
        Gregorian { offset: FixedOffset::utc() }
    }

    /// The timezone this calendar resolves against.
    #[inline]
    pub const fn offset(&self) -> FixedOffset {
        self.offset
    }

    /// Whether `year` is a leap year.
    #[inline]
    pub const fn leap_year(year: i32) -> bool {
        year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
    }

    /// The number of days in a month, or `None` for a month outside 1–12.
    pub const fn days_in_month(year: i32, month: i32) -> Option<i32> {
        let days = match month {
            1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
            4 | 6 | 9 | 11 => 30,
            2 => {
                if Gregorian::leap_year(year) {
                    29
                } else {
                    28
                }
            }
            _ => return None,
        };
        Some(days)
    }

    fn offset_millis(&self) -> i64 {
        i64::from(self.offset.local_minus_utc()) * 1000
    }
}

impl Default for Gregorian {
    fn default() -> Gregorian {
        Gregorian::utc()
    }
}

impl Calendar for Gregorian {
    fn resolve(&self, fields: &DateFields) -> Option<Instant> {
        if fields.is_empty() {
            return None;
        }
        let year = i64::from(fields.year.unwrap_or(1));
        let month = i64::from(fields.month.unwrap_or(1));
        let day = i64::from(fields.day.unwrap_or(1));

        // carry out-of-range months into the year before converting
        let months = year * 12 + (month - 1);
        let (year, month0) = div_mod_floor(months, 12);
        let days = days_from_civil(year, month0 + 1, day);

        let time = i64::from(fields.hour.unwrap_or(0))
            .checked_mul(MILLIS_PER_HOUR)?
            .checked_add(i64::from(fields.minute.unwrap_or(0)).checked_mul(MILLIS_PER_MINUTE)?)?
            .checked_add(i64::from(fields.second.unwrap_or(0)).checked_mul(1000)?)?
            .checked_add(i64::from(fields.millisecond.unwrap_or(0)))?;
        let local = days.checked_mul(MILLIS_PER_DAY)?.checked_add(time)?;
        let utc = local.checked_sub(self.offset_millis())?;
        Some(Instant::from_timestamp_millis(utc))
    }

    fn field(&self, instant: Instant, component: Component) -> i32 {
        let local = instant.timestamp_millis().saturating_add(self.offset_millis());
        let (days, ms) = div_mod_floor(local, MILLIS_PER_DAY);
        match component {
            Component::Year => civil_from_days(days).0 as i32,
            Component::Month => civil_from_days(days).1 as i32,
            Component::Day => civil_from_days(days).2 as i32,
            Component::Hour => (ms / MILLIS_PER_HOUR) as i32,
            Component::Minute => (ms / MILLIS_PER_MINUTE % 60) as i32,
            Component::Second => (ms / 1000 % 60) as i32,
            Component::Millisecond => (ms % 1000) as i32,
        }
    }

    fn weekday(&self, instant: Instant) -> Weekday {
        let local = instant.timestamp_millis().saturating_add(self.offset_millis());
        let (days, _) = div_mod_floor(local, MILLIS_PER_DAY);
        Weekday::from_days_since_epoch(days)
    }

    fn is_valid(&self, fields: &DateFields) -> bool {
        if matches!(fields.year, Some(year) if year < 1) {
            return false;
        }
        if matches!(fields.month, Some(month) if !(1..=12).contains(&month)) {
            return false;
        }
        if matches!(fields.hour, Some(hour) if !(0..=23).contains(&hour)) {
            return false;
        }
        if matches!(fields.minute, Some(minute) if !(0..=59).contains(&minute)) {
            return false;
        }
        if matches!(fields.second, Some(second) if !(0..=59).contains(&second)) {
            return false;
        }
        if matches!(fields.millisecond, Some(ms) if !(0..=999).contains(&ms)) {
            return false;
        }
        if let Some(day) = fields.day {
            // an absent month or year is checked against the reference date
            let year = fields.year.unwrap_or(1);
            let month = fields.month.unwrap_or(1);
            match Gregorian::days_in_month(year, month) {
                Some(len) if (1..=len).contains(&day) => {}
                _ => return false,
            }
        }
        true
    }

    fn leap_month(&self, fields: &DateFields) -> Option<bool> {
        match (fields.year, fields.month) {
            (Some(year), Some(month)) => Some(month == 2 && Gregorian::leap_year(year)),
            _ => None,
        }
    }

    #[cfg(feature = "clock")]
    fn now(&self) -> DateFields {
        use std::time::{SystemTime, UNIX_EPOCH};

        let millis = match SystemTime::now().duration_since(UNIX_EPOCH) {
            Ok(since) => since.as_millis() as i64,
            Err(before) => -(before.duration().as_millis() as i64),
        };
        self.fields_at(Instant::from_timestamp_millis(millis))
    }
}

/// Days relative to 1970-01-01 of the given civil date.
///
/// `month` must be in 1–12; `day` may be any value and shifts linearly.
pub(crate) fn days_from_civil(year: i64, month: i64, day: i64) -> i64 {
    let year = if month <= 2 { year - 1 } else { year };
    let (era, yoe) = div_mod_floor(year, 400);
    let mp = mod_floor(month + 9, 12);
    let doy = (153 * mp + 2) / 5 + day - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146_097 + doe - 719_468
}

/// The civil `(year, month, day)` of a day count relative to 1970-01-01.
pub(crate) fn civil_from_days(days: i64) -> (i64, i64, i64) {
    let (era, doe) = div_mod_floor(days + 719_468, 146_097);
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let year = yoe + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = doy - (153 * mp + 2) / 5 + 1;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    (if month <= 2 { year + 1 } else { year }, month, day)
}
