use core::fmt;

/// A selector for one of the seven calendar fields a [`PartialDate`] can
/// carry.
///
/// The set is closed: every field-wise operation dispatches over it with an
/// exhaustive `match`, so adding a component is a compile-time event.
///
/// [`PartialDate`]: crate::PartialDate
#[derive(PartialEq, Eq, Copy, Clone, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Component {
    /// Calendar year, 1-based. No upper bound.
    Year,
    /// Month of year, 1 through 12.
    Month,
    /// Day of month, 1 through the month length.
    Day,
    /// Hour of day, 0 through 23.
    Hour,
    /// Minute of hour, 0 through 59.
    Minute,
    /// Second of minute, 0 through 59.
    Second,
    /// Millisecond of second, 0 through 999.
    ///
    /// This is a deliberately lossy view: whatever finer-grained sub-second
    /// reading a calendar holds is clamped to the 0–999 tick.
    Millisecond,
}

impl Component {
    /// All components, most significant first.
    pub const ALL: [Component; 7] = [
        Component::Year,
        Component::Month,
        Component::Day,
        Component::Hour,
        Component::Minute,
        Component::Second,
        Component::Millisecond,
    ];

    /// The order in which [`validate`] clamps components.
    ///
    /// `Day` comes last: its repair loop decrements until the date fits the
    /// month, which only terminates once month and year are already in
    /// range.
    ///
    /// [`validate`]: crate::validate
    pub const VALIDATION_ORDER: [Component; 7] = [
        Component::Year,
        Component::Month,
        Component::Hour,
        Component::Minute,
        Component::Second,
        Component::Millisecond,
        Component::Day,
    ];
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Component::Year => "year",
            Component::Month => "month",
            Component::Day => "day",
            Component::Hour => "hour",
            Component::Minute => "minute",
            Component::Second => "second",
            Component::Millisecond => "millisecond",
        })
    }
}
