mod consts;
mod field;
mod format;
mod prelude;
mod range;
mod types;
mod validate;

pub use consts::*;
pub use field::{FieldConfig, FieldError};
pub use format::{DateFormat, UnknownFormat};
pub use range::DateRange;
pub use types::{Day, Month, Weekday, Year, days_in_month, is_leap_year};
pub use validate::{Constraints, ValidationError};

use crate::prelude::*;
use std::str::FromStr;
use types::weekday_of;

/// A wall-clock calendar day: year, month and day of month, each validated
/// at construction. No time component, no time zone.
///
/// Ordering is chronological; `Display` and `FromStr` use the canonical
/// zero-padded `YYYY-MM-DD` form regardless of any field format in play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", "year.get()", "month.get()", "day.get()")]
pub struct CalendarDate {
    year: types::Year,
    month: types::Month,
    day: types::Day,
}

/// Which component of a date a [`ParseError::OutOfRange`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum DateUnit {
    #[display(fmt = "year")]
    Year,
    #[display(fmt = "month")]
    Month,
    #[display(fmt = "day")]
    Day,
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    /// Input does not have the separator/group shape the format dictates.
    #[display(fmt = "malformed date string {_0:?}")]
    MalformedString(String),
    /// A group between separators contains something other than digits.
    #[display(fmt = "non-numeric date component {_0:?}")]
    NonNumericComponent(String),
    /// A numeric group is outside its calendar range.
    #[display(fmt = "{unit} {value} is out of range (1-{max})")]
    OutOfRange {
        unit: DateUnit,
        value: u32,
        max: u16,
    },
}

impl std::error::Error for ParseError {}

impl CalendarDate {
    /// Creates a date from raw components, validating each one
    /// (including the day against the month length and leap-year rule).
    ///
    /// # Errors
    /// Returns `ParseError::OutOfRange` naming the first invalid component.
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, ParseError> {
        let year = types::Year::new(year)?;
        let month = types::Month::new(month)?;
        let day = types::Day::new(day, year.get(), month.get())?;
        Ok(Self { year, month, day })
    }

    /// Returns the year (1..=9999)
    #[inline]
    pub const fn year(self) -> u16 {
        self.year.get()
    }

    /// Returns the month (1..=12)
    #[inline]
    pub const fn month(self) -> u8 {
        self.month.get()
    }

    /// Returns the day of month (1..=31)
    #[inline]
    pub const fn day(self) -> u8 {
        self.day.get()
    }

    /// Moves the date by `delta` calendar months for month navigation.
    ///
    /// The day is clamped to the target month's length, so Jan 31 + 1 month
    /// is Feb 28 (or Feb 29 in a leap year), never a rollover into March.
    /// Navigation saturates at 0001-01 and 9999-12 rather than failing.
    pub fn add_months(self, delta: i32) -> Self {
        let index = i32::from(self.year()) * 12 + i32::from(self.month()) - 1;
        let index = index
            .saturating_add(delta)
            .clamp(MIN_MONTH_INDEX, MAX_MONTH_INDEX);

        let year = (index / 12) as u16;
        let month = (index % 12 + 1) as u8;
        let day = self.day().min(days_in_month(year, month));
        // components are clamped into range, so construction cannot fail
        Self::new(year, month, day).unwrap_or(self)
    }

    /// First day of this date's month
    pub fn month_start(self) -> Self {
        // MIN_DAY is valid in every month
        Self::new(self.year(), self.month(), MIN_DAY).unwrap_or(self)
    }

    /// Last day of this date's month (leap-year aware)
    pub fn month_end(self) -> Self {
        let last = days_in_month(self.year(), self.month());
        Self::new(self.year(), self.month(), last).unwrap_or(self)
    }

    /// Day of week, for laying out the calendar grid
    pub fn weekday(self) -> Weekday {
        weekday_of(self.year(), self.month(), self.day())
    }
}

impl FromStr for CalendarDate {
    type Err = ParseError;

    /// Parses the canonical `YYYY-MM-DD` form. Field input under other
    /// layouts goes through [`DateFormat::parse`] instead.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DateFormat::YearMonthDay
            .parse(s)?
            .ok_or_else(|| ParseError::MalformedString(s.to_owned()))
    }
}

impl serde::Serialize for CalendarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for CalendarDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
