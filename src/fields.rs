// This is a part of partial-date.
// See README.md and LICENSE.txt for details.

//! The raw calendar component set.

use core::fmt;

use crate::Component;

/// A set of calendar components, each independently present or absent.
///
/// This is the raw material a [`PartialDate`] is built from: nothing here is
/// checked against a calendar, so `day: Some(31)` next to `month: Some(4)`
/// is representable. Run a set through [`validate`] (or construct a
/// `PartialDate`, which does so) to repair it.
///
/// Absent fields stay absent through every operation in this crate; no
/// function invents a component the caller did not supply.
///
/// [`PartialDate`]: crate::PartialDate
/// [`validate`]: crate::validate
#[derive(PartialEq, Eq, Copy, Clone, Default, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DateFields {
    /// Calendar year.
    pub year: Option<i32>,
    /// Month of year.
    pub month: Option<i32>,
    /// Day of month.
    pub day: Option<i32>,
    /// Hour of day.
    pub hour: Option<i32>,
    /// Minute of hour.
    pub minute: Option<i32>,
    /// Second of minute.
    pub second: Option<i32>,
    /// Millisecond of second.
    pub millisecond: Option<i32>,
}

impl DateFields {
    /// The set with every component absent.
    pub const EMPTY: DateFields = DateFields {
        year: None,
        month: None,
        day: None,
        hour: None,
        minute: None,
        second: None,
        millisecond: None,
    };

    /// A year-month-day set with the time-of-day components absent.
    pub const fn ymd(year: i32, month: i32, day: i32) -> DateFields {
        DateFields {
            year: Some(year),
            month: Some(month),
            day: Some(day),
            hour: None,
            minute: None,
            second: None,
            millisecond: None,
        }
    }

    /// A year-month-day hour-minute-second set with the millisecond absent.
    pub const fn ymd_hms(
        year: i32,
        month: i32,
        day: i32,
        hour: i32,
        minute: i32,
        second: i32,
    ) -> DateFields {
        DateFields {
            year: Some(year),
            month: Some(month),
            day: Some(day),
            hour: Some(hour),
            minute: Some(minute),
            second: Some(second),
            millisecond: None,
        }
    }

    /// Reads the value of one component.
    #[inline]
    pub const fn get(&self, component: Component) -> Option<i32> {
        match component {
            Component::Year => self.year,
            Component::Month => self.month,
            Component::Day => self.day,
            Component::Hour => self.hour,
            Component::Minute => self.minute,
            Component::Second => self.second,
            Component::Millisecond => self.millisecond,
        }
    }

    /// Writes the value of one component.
    #[inline]
    pub fn set(&mut self, component: Component, value: Option<i32>) {
        match component {
            Component::Year => self.year = value,
            Component::Month => self.month = value,
            Component::Day => self.day = value,
            Component::Hour => self.hour = value,
            Component::Minute => self.minute = value,
            Component::Second => self.second = value,
            Component::Millisecond => self.millisecond = value,
        }
    }

    /// True when every component is absent.
    pub fn is_empty(&self) -> bool {
        Component::ALL.iter().all(|&c| self.get(c).is_none())
    }
}

impl fmt::Debug for DateFields {
    /// Shows present components only, e.g. `DateFields { year: 2023, day: 15 }`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("DateFields");
        for component in Component::ALL {
            if let Some(value) = self.get(component) {
                s.field(&component.to_string(), &value);
            }
        }
        s.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::DateFields;
    use crate::Component;

    #[test]
    fn get_set_roundtrip() {
        let mut fields = DateFields::EMPTY;
        for (i, component) in Component::ALL.into_iter().enumerate() {
            assert_eq!(fields.get(component), None);
            fields.set(component, Some(i as i32));
            assert_eq!(fields.get(component), Some(i as i32));
        }
        assert!(!fields.is_empty());
    }

    #[test]
    fn empty() {
        assert!(DateFields::EMPTY.is_empty());
        assert!(DateFields::default().is_empty());
        assert!(!DateFields::ymd(2023, 1, 1).is_empty());
    }

    #[test]
    fn ymd_leaves_time_absent() {
        let fields = DateFields::ymd(2023, 4, 15);
        assert_eq!(fields.hour, None);
        assert_eq!(fields.minute, None);
        assert_eq!(fields.second, None);
        assert_eq!(fields.millisecond, None);
    }

    #[test]
    fn debug_skips_absent() {
        let fields = DateFields { year: Some(2023), day: Some(15), ..DateFields::EMPTY };
        assert_eq!(format!("{:?}", fields), "DateFields { year: 2023, day: 15 }");
    }
}
