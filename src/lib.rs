// This is a part of partial-date.
// See README.md and LICENSE.txt for details.

//! Partial calendar dates: date/time values where any subset of components
//! may be present or deliberately absent.
//!
//! The entry point is [`PartialDate`], a value owning up to seven optional
//! components — year, month, day, hour, minute, second, millisecond — plus
//! the [`Calendar`] context it resolves against. Raw input is repaired by a
//! clamping [`validate`] pass instead of rejected, arithmetic cascades only
//! through the components the caller opted into tracking, and every
//! fallible operation answers with absence rather than an error.
//!
//! ```
//! use partial_date::{earlier_of, Component, Gregorian, PartialDate};
//!
//! // April 31 does not exist; construction clamps it to the nearest real day.
//! let date = PartialDate::from_ymd(Gregorian::utc(), 2023, 4, 31);
//! assert_eq!(date.day(), Some(30));
//!
//! // Arithmetic cascades through tracked components only.
//! let date = PartialDate::from_ymd(Gregorian::utc(), 2023, 12, 15);
//! let next = date.change(Component::Month, 1, true);
//! assert_eq!((next.year(), next.month(), next.day()), (Some(2024), Some(1), Some(15)));
//!
//! // Comparison selects between the operands themselves.
//! assert_eq!(earlier_of(&date, &next), Some(&date));
//! ```
//!
//! Values with fewer tracked components behave the same way, they just
//! never invent what the caller left out:
//!
//! ```
//! use partial_date::{Component, DateFields, Gregorian, PartialDate};
//!
//! let fields = DateFields { month: Some(12), day: Some(15), ..DateFields::EMPTY };
//! let date = PartialDate::from_fields(Gregorian::utc(), fields);
//! let rolled = date.change(Component::Month, 1, true);
//! assert_eq!(rolled.month(), Some(1));
//! assert_eq!(rolled.year(), None); // a rollover happened, but year is untracked
//! ```
//!
//! # Optional features
//!
//! - `clock` (default): [`PartialDate::now`] wall-clock snapshots.
//! - `serde`: `Serialize`/`Deserialize` for the crate's types.

#![deny(missing_docs)]
#![warn(unreachable_pub)]

mod calendar;
mod compare;
mod component;
mod fields;
pub mod format;
mod instant;
mod offset;
mod partial;
mod validate;
mod weekday;

pub use calendar::{Calendar, Gregorian};
pub use compare::{earlier_of, later_of};
pub use component::Component;
pub use fields::DateFields;
pub use format::{DateFormat, Pattern};
pub use instant::Instant;
pub use offset::FixedOffset;
pub use partial::PartialDate;
pub use validate::validate;
pub use weekday::Weekday;
