// This is a part of partial-date.
// See README.md and LICENSE.txt for details.

//! The time zone with a fixed offset from UTC.

use core::fmt;

use num_integer::div_mod_floor;

/// The time zone with fixed offset, from UTC-23:59:59 to UTC+23:59:59.
///
/// A calendar context carries one of these; there is no daylight-saving or
/// tz-database logic anywhere in this crate.
#[derive(PartialEq, Eq, Copy, Clone, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FixedOffset {
    local_minus_utc: i32,
}

impl FixedOffset {
    /// The UTC offset.
    pub const fn utc() -> FixedOffset {
        FixedOffset { local_minus_utc: 0 }
    }

    /// Makes a new `FixedOffset` for the Eastern Hemisphere with the given
    /// timezone difference. The negative `secs` means the Western
    /// Hemisphere.
    ///
    /// Returns `None` on the out-of-bound `secs`.
    pub const fn east_opt(secs: i32) -> Option<FixedOffset> {
        if -86_400 < secs && secs < 86_400 {
            Some(FixedOffset { local_minus_utc: secs })
        } else {
            None
        }
    }

    /// Makes a new `FixedOffset` for the Western Hemisphere with the given
    /// timezone difference. The negative `secs` means the Eastern
    /// Hemisphere.
    ///
    /// Returns `None` on the out-of-bound `secs`.
    pub const fn west_opt(secs: i32) -> Option<FixedOffset> {
        if -86_400 < secs && secs < 86_400 {
            Some(FixedOffset { local_minus_utc: -secs })
        } else {
            None
        }
    }

    /// Returns the number of seconds to add to convert from UTC to the local
    /// time.
    #[inline]
    pub const fn local_minus_utc(&self) -> i32 {
        self.local_minus_utc
    }
}

impl fmt::Debug for FixedOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let offset = self.local_minus_utc;
        let (sign, offset) = if offset < 0 { ('-', -offset) } else { ('+', offset) };
        let (mins, sec) = div_mod_floor(offset, 60);
        let (hour, min) = div_mod_floor(mins, 60);
        if sec == 0 {
            write!(f, "{}{:02}:{:02}", sign, hour, min)
        } else {
            write!(f, "{}{:02}:{:02}:{:02}", sign, hour, min, sec)
        }
    }
}

impl fmt::Display for FixedOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::FixedOffset;

    #[test]
    fn bounds() {
        assert!(FixedOffset::east_opt(86_399).is_some());
        assert!(FixedOffset::east_opt(86_400).is_none());
        assert!(FixedOffset::west_opt(-86_400).is_none());
        assert_eq!(FixedOffset::east_opt(0), Some(FixedOffset::utc()));
    }

    #[test]
    fn west_negates() {
        assert_eq!(FixedOffset::west_opt(3600).map(|o| o.local_minus_utc()), Some(-3600));
        assert_eq!(FixedOffset::east_opt(3600).map(|o| o.local_minus_utc()), Some(3600));
    }

    #[test]
    fn debug_format() {
        let plus = FixedOffset::east_opt(9 * 3600).unwrap();
        assert_eq!(format!("{:?}", plus), "+09:00");
        let minus = FixedOffset::west_opt(3600 * 3 + 1800).unwrap();
        assert_eq!(format!("{:?}", minus), "-03:30");
        let odd = FixedOffset::east_opt(3661).unwrap();
        assert_eq!(format!("{:?}", odd), "+01:01:01");
    }
}
