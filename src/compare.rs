// This is a part of partial-date.
// See README.md and LICENSE.txt for details.

//! Nil-safe comparison of partial dates.
//!
//! Every predicate here is total and answers `false` whenever the data it
//! needs is absent on either side: an untracked component never equals
//! anything, and an unresolvable value is neither earlier nor later than
//! any other. Callers that need to distinguish "absent" from "unequal" ask
//! the accessors directly.

use crate::{Calendar, Component, PartialDate};

impl<C: Calendar> PartialDate<C> {
    /// Whether one component is present on both sides and numerically
    /// equal.
    pub fn is_equal(&self, component: Component, other: &PartialDate<C>) -> bool {
        both_present_and_equal(self.component(component), other.component(component))
    }

    /// Whether both values track the same year.
    pub fn is_same_year(&self, other: &PartialDate<C>) -> bool {
        self.is_equal(Component::Year, other)
    }

    /// Whether both values track the same month of the same year.
    pub fn is_same_month(&self, other: &PartialDate<C>) -> bool {
        self.is_equal(Component::Month, other) && self.is_same_year(other)
    }

    /// Whether both values track the same calendar day — a full
    /// year/month/day match, regardless of the time-of-day components.
    pub fn is_same_calendar_day(&self, other: &PartialDate<C>) -> bool {
        self.is_equal(Component::Day, other) && self.is_same_month(other)
    }

    /// Whether both values resolve to exactly the same instant.
    pub fn is_same_instant(&self, other: &PartialDate<C>) -> bool {
        match (self.instant(), other.instant()) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }

    /// Whether this value resolves strictly earlier than `other`.
    ///
    /// `false` whenever either side does not resolve — a value is never
    /// "earlier than" an unresolvable one.
    pub fn is_earlier(&self, other: &PartialDate<C>) -> bool {
        match (self.instant(), other.instant()) {
            (Some(a), Some(b)) => a < b,
            _ => false,
        }
    }

    /// Whether this value resolves strictly later than `other`.
    ///
    /// `false` whenever either side does not resolve.
    pub fn is_later(&self, other: &PartialDate<C>) -> bool {
        match (self.instant(), other.instant()) {
            (Some(a), Some(b)) => a > b,
            _ => false,
        }
    }
}

fn both_present_and_equal(first: Option<i32>, second: Option<i32>) -> bool {
    matches!((first, second), (Some(a), Some(b)) if a == b)
}

/// The operand resolving to the earlier instant, `first` on ties.
///
/// `None` unless both operands resolve.
pub fn earlier_of<'a, C: Calendar>(
    first: &'a PartialDate<C>,
    second: &'a PartialDate<C>,
) -> Option<&'a PartialDate<C>> {
    let (a, b) = (first.instant()?, second.instant()?);
    if a <= b {
        Some(first)
    } else {
        Some(second)
    }
}

/// The operand resolving to the later instant, `first` on ties.
///
/// `None` unless both operands resolve.
pub fn later_of<'a, C: Calendar>(
    first: &'a PartialDate<C>,
    second: &'a PartialDate<C>,
) -> Option<&'a PartialDate<C>> {
    let (a, b) = (first.instant()?, second.instant()?);
    if a >= b {
        Some(first)
    } else {
        Some(second)
    }
}
