// This is a part of partial-date.
// See README.md and LICENSE.txt for details.

//! The absolute instant a component set resolves to.

use core::fmt;

use num_integer::div_mod_floor;

use crate::calendar::{civil_from_days, MILLIS_PER_DAY, MILLIS_PER_HOUR, MILLIS_PER_MINUTE};

/// An absolute point in time, unambiguous once a calendar context is fixed.
///
/// Internally a count of milliseconds relative to `1970-01-01T00:00:00Z`;
/// the millisecond unit matches the crate's deliberately lossy sub-second
/// precision. Instants are totally ordered, which is what the comparison
/// predicates build on.
#[derive(PartialEq, Eq, PartialOrd, Ord, Copy, Clone, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Instant(i64);

impl Instant {
    /// Makes an instant from a count of milliseconds since the Unix epoch.
    #[inline]
    pub const fn from_timestamp_millis(millis: i64) -> Instant {
        Instant(millis)
    }

    /// Returns the number of milliseconds since the Unix epoch.
    #[inline]
    pub const fn timestamp_millis(self) -> i64 {
        self.0
    }
}

impl fmt::Debug for Instant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (days, ms) = div_mod_floor(self.0, MILLIS_PER_DAY);
        let (year, month, day) = civil_from_days(days);
        let (hour, rem) = div_mod_floor(ms, MILLIS_PER_HOUR);
        let (minute, rem) = div_mod_floor(rem, MILLIS_PER_MINUTE);
        let (second, milli) = div_mod_floor(rem, 1000);
        write!(
            f,
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}.{:03}Z",
            year, month, day, hour, minute, second, milli
        )
    }
}

impl fmt::Display for Instant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
