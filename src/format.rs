use crate::consts::{ISO_SEPARATOR, MAX_MONTH, MAX_YEAR, SLASH_SEPARATOR};
use crate::prelude::*;
use crate::{CalendarDate, DateUnit, ParseError};
use std::str::FromStr;

/// The closed set of text layouts a date field can use.
///
/// A layout fixes both directions at once: the parse grammar (separator and
/// group order) and the render template (zero-padded groups in the same
/// order). Unrecognized layout strings are rejected up front by [`FromStr`],
/// so a constructed `DateFormat` can always parse what it formats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display)]
pub enum DateFormat {
    /// `MM/DD/YYYY`
    #[default]
    #[display(fmt = "MM/DD/YYYY")]
    MonthDayYear,
    /// `DD/MM/YYYY`
    #[display(fmt = "DD/MM/YYYY")]
    DayMonthYear,
    /// `YYYY-MM-DD`
    #[display(fmt = "YYYY-MM-DD")]
    YearMonthDay,
}

/// A layout string that is not one of the supported templates.
/// Raised when converting configuration, never during parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized date format {0:?} (expected MM/DD/YYYY, DD/MM/YYYY or YYYY-MM-DD)")]
pub struct UnknownFormat(pub String);

impl DateFormat {
    /// The separator between groups in this layout
    pub const fn separator(self) -> char {
        match self {
            Self::MonthDayYear | Self::DayMonthYear => SLASH_SEPARATOR,
            Self::YearMonthDay => ISO_SEPARATOR,
        }
    }

    /// Parses field text into a date under this layout.
    ///
    /// Empty (or all-whitespace) input is the "nothing typed" case and
    /// returns `Ok(None)`, distinct from every parse failure. Groups may be
    /// unpadded and carry surrounding whitespace; the separator and group
    /// count must match the layout exactly.
    ///
    /// # Errors
    /// `MalformedString` when the separator/group shape does not match,
    /// `NonNumericComponent` when a group is empty or has non-digits,
    /// `OutOfRange` when a group is outside its calendar range.
    pub fn parse(self, text: &str) -> Result<Option<CalendarDate>, ParseError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }

        let groups: Vec<&str> = trimmed.split(self.separator()).map(str::trim).collect();
        let (year, month, day) = match (self, groups.as_slice()) {
            (Self::MonthDayYear, &[m, d, y]) | (Self::DayMonthYear, &[d, m, y]) => (y, m, d),
            (Self::YearMonthDay, &[y, m, d]) => (y, m, d),
            _ => return Err(ParseError::MalformedString(trimmed.to_owned())),
        };

        let year = narrow::<u16>(group_value(year)?, DateUnit::Year, MAX_YEAR)?;
        let month = narrow::<u8>(group_value(month)?, DateUnit::Month, u16::from(MAX_MONTH))?;
        // 31 is the longest month; the constructor re-checks against the
        // real month length
        let day = narrow::<u8>(group_value(day)?, DateUnit::Day, 31)?;

        CalendarDate::new(year, month, day).map(Some)
    }

    /// Renders a date as field text under this layout.
    ///
    /// `None` renders the empty string. For every constructible date this is
    /// a left inverse of [`parse`](Self::parse).
    pub fn format(self, date: Option<CalendarDate>) -> String {
        let Some(date) = date else {
            return String::new();
        };
        let sep = self.separator();
        let (y, m, d) = (date.year(), date.month(), date.day());
        match self {
            Self::MonthDayYear => format!("{m:02}{sep}{d:02}{sep}{y:04}"),
            Self::DayMonthYear => format!("{d:02}{sep}{m:02}{sep}{y:04}"),
            Self::YearMonthDay => format!("{y:04}{sep}{m:02}{sep}{d:02}"),
        }
    }
}

fn group_value(text: &str) -> Result<u32, ParseError> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::NonNumericComponent(text.to_owned()));
    }
    // a digit-only group can only fail to parse on overflow; saturate so
    // the range check reports it
    Ok(text.parse::<u32>().unwrap_or(u32::MAX))
}

fn narrow<T: TryFrom<u32>>(value: u32, unit: DateUnit, max: u16) -> Result<T, ParseError> {
    T::try_from(value).map_err(|_| ParseError::OutOfRange { unit, value, max })
}

impl FromStr for DateFormat {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "MM/DD/YYYY" => Ok(Self::MonthDayYear),
            "DD/MM/YYYY" => Ok(Self::DayMonthYear),
            "YYYY-MM-DD" => Ok(Self::YearMonthDay),
            other => Err(UnknownFormat(other.to_owned())),
        }
    }
}

impl serde::Serialize for DateFormat {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for DateFormat {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
