use core::fmt;

use num_integer::mod_floor;

/// The day of week.
///
/// Numbering follows the calendar reference day: Sunday is day 1 (see
/// [`Weekday::number_from_sunday`]). The order of the days of week depends
/// on context, which is why this type does *not* implement `PartialOrd` or
/// `Ord`.
#[derive(PartialEq, Eq, Copy, Clone, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Weekday {
    /// Sunday.
    Sun = 0,
    /// Monday.
    Mon = 1,
    /// Tuesday.
    Tue = 2,
    /// Wednesday.
    Wed = 3,
    /// Thursday.
    Thu = 4,
    /// Friday.
    Fri = 5,
    /// Saturday.
    Sat = 6,
}

impl Weekday {
    /// The next day in the week.
    #[inline]
    pub const fn succ(&self) -> Weekday {
        match *self {
            Weekday::Sun => Weekday::Mon,
            Weekday::Mon => Weekday::Tue,
            Weekday::Tue => Weekday::Wed,
            Weekday::Wed => Weekday::Thu,
            Weekday::Thu => Weekday::Fri,
            Weekday::Fri => Weekday::Sat,
            Weekday::Sat => Weekday::Sun,
        }
    }

    /// The previous day in the week.
    #[inline]
    pub const fn pred(&self) -> Weekday {
        match *self {
            Weekday::Sun => Weekday::Sat,
            Weekday::Mon => Weekday::Sun,
            Weekday::Tue => Weekday::Mon,
            Weekday::Wed => Weekday::Tue,
            Weekday::Thu => Weekday::Wed,
            Weekday::Fri => Weekday::Thu,
            Weekday::Sat => Weekday::Fri,
        }
    }

    /// Returns a day-of-week number starting from Sunday = 1.
    #[inline]
    pub const fn number_from_sunday(&self) -> u32 {
        *self as u32 + 1
    }

    /// Returns a day-of-week number starting from Monday = 1.
    /// (ISO 8601 weekday number.)
    #[inline]
    pub const fn number_from_monday(&self) -> u32 {
        (*self as u32 + 6) % 7 + 1
    }

    /// The weekday of the given day count relative to the Unix epoch.
    ///
    /// Day 0 (1970-01-01) was a Thursday.
    pub(crate) fn from_days_since_epoch(days: i64) -> Weekday {
        match mod_floor(days + 4, 7) {
            0 => Weekday::Sun,
            1 => Weekday::Mon,
            2 => Weekday::Tue,
            3 => Weekday::Wed,
            4 => Weekday::Thu,
            5 => Weekday::Fri,
            _ => Weekday::Sat,
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match *self {
            Weekday::Sun => "Sun",
            Weekday::Mon => "Mon",
            Weekday::Tue => "Tue",
            Weekday::Wed => "Wed",
            Weekday::Thu => "Thu",
            Weekday::Fri => "Fri",
            Weekday::Sat => "Sat",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::Weekday;

    #[test]
    fn number_from_sunday() {
        assert_eq!(Weekday::Sun.number_from_sunday(), 1);
        assert_eq!(Weekday::Wed.number_from_sunday(), 4);
        assert_eq!(Weekday::Sat.number_from_sunday(), 7);
    }

    #[test]
    fn number_from_monday() {
        assert_eq!(Weekday::Mon.number_from_monday(), 1);
        assert_eq!(Weekday::Sun.number_from_monday(), 7);
    }

    #[test]
    fn succ_pred_roundtrip() {
        let mut day = Weekday::Sun;
        for _ in 0..7 {
            assert_eq!(day.succ().pred(), day);
            day = day.succ();
        }
        assert_eq!(day, Weekday::Sun);
    }

    #[test]
    fn epoch_was_a_thursday() {
        assert_eq!(Weekday::from_days_since_epoch(0), Weekday::Thu);
        assert_eq!(Weekday::from_days_since_epoch(3), Weekday::Sun);
        assert_eq!(Weekday::from_days_since_epoch(-4), Weekday::Sun);
    }
}
