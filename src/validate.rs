// This is a part of partial-date.
// See README.md and LICENSE.txt for details.

//! Best-effort repair of inconsistent component sets.

use crate::{Calendar, Component, DateFields};

/// Clamps a component set toward calendar validity.
///
/// Never fails: the result is either calendar-valid or the best clamped
/// state this pass could reach (callers detect the latter through
/// [`Calendar::resolve`] returning `None` later). An already-valid set is
/// returned untouched, and absent components are never invented.
///
/// Components are clamped in [`Component::VALIDATION_ORDER`] with a
/// validity re-test after each one, stopping at the first success. `Day` is
/// deliberately last; its repair decrements toward the month length, which
/// relies on month and year already being in range.
pub fn validate<C: Calendar>(fields: DateFields, calendar: &C) -> DateFields {
    if calendar.is_valid(&fields) {
        return fields;
    }
    let mut fields = fields;
    for component in Component::VALIDATION_ORDER {
        clamp(component, &mut fields, calendar);
        if calendar.is_valid(&fields) {
            return fields;
        }
    }
    fields
}

/// Applies the single clamp rule of one component. Absent components are
/// left alone.
fn clamp<C: Calendar>(component: Component, fields: &mut DateFields, calendar: &C) {
    match component {
        Component::Year => {
            if matches!(fields.year, Some(year) if year < 1) {
                fields.year = Some(1);
            }
        }
        Component::Month => clamp_range(&mut fields.month, 1, 12),
        Component::Hour => clamp_range(&mut fields.hour, 0, 23),
        Component::Minute => clamp_range(&mut fields.minute, 0, 59),
        Component::Second => clamp_range(&mut fields.second, 0, 59),
        Component::Millisecond => clamp_range(&mut fields.millisecond, 0, 999),
        Component::Day => {
            if let Some(day) = fields.day {
                if day < 1 {
                    fields.day = Some(1);
                } else {
                    if day > 31 {
                        fields.day = Some(31);
                    }
                    // walk down to the month length; the floor at 1 keeps
                    // the loop bounded even under a misbehaving calendar
                    while !calendar.is_valid(fields) {
                        match fields.day {
                            Some(day) if day > 1 => fields.day = Some(day - 1),
                            _ => break,
                        }
                    }
                }
            }
        }
    }
}

fn clamp_range(field: &mut Option<i32>, min: i32, max: i32) {
    if let Some(value) = *field {
        if value < min {
            *field = Some(min);
        } else if value > max {
            *field = Some(max);
        }
    }
}
