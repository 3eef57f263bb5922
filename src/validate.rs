use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::{CalendarDate, DateRange};

/// The rules a picked date must satisfy: an inclusive window, a set of
/// individually disabled days, and whether an empty value is acceptable.
///
/// Unset bounds mean unbounded; the default constraint set accepts
/// everything. Disabled-day membership is calendar-day equality: the set
/// holds `CalendarDate` values, so there is no object identity to compare.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Constraints {
    pub min_date: Option<CalendarDate>,
    pub max_date: Option<CalendarDate>,
    pub disabled_dates: HashSet<CalendarDate>,
    pub required: bool,
}

/// A constraint violation on otherwise well-formed input. Recoverable by
/// the user; each variant carries the dates the UI needs for its message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("date {date} is before the minimum {min}")]
    BeforeMinDate { date: CalendarDate, min: CalendarDate },

    #[error("date {date} is after the maximum {max}")]
    AfterMaxDate { date: CalendarDate, max: CalendarDate },

    #[error("date {0} is disabled")]
    DateDisabled(CalendarDate),

    #[error("range start {start} is after end {end}")]
    RangeInverted {
        start: CalendarDate,
        end: CalendarDate,
    },

    #[error("a date is required")]
    RequiredMissing,
}

impl Constraints {
    /// Checks one date against the window and the disabled set.
    ///
    /// Checks run min, then max, then disabled; only the first violation is
    /// reported. `required` does not apply here, since a concrete date is
    /// never "missing" (see [`validate_value`](Self::validate_value)).
    ///
    /// # Errors
    /// The first violated constraint, as a [`ValidationError`].
    pub fn validate(&self, date: CalendarDate) -> Result<(), ValidationError> {
        if let Some(min) = self.min_date {
            if date < min {
                return Err(ValidationError::BeforeMinDate { date, min });
            }
        }
        if let Some(max) = self.max_date {
            if date > max {
                return Err(ValidationError::AfterMaxDate { date, max });
            }
        }
        if self.disabled_dates.contains(&date) {
            return Err(ValidationError::DateDisabled(date));
        }
        Ok(())
    }

    /// Checks an optional field value: an empty value only violates
    /// `required`, a present value defers to [`validate`](Self::validate).
    ///
    /// # Errors
    /// `RequiredMissing` for a missing required value, otherwise whatever
    /// `validate` reports.
    pub fn validate_value(&self, value: Option<CalendarDate>) -> Result<(), ValidationError> {
        match value {
            Some(date) => self.validate(date),
            None if self.required => Err(ValidationError::RequiredMissing),
            None => Ok(()),
        }
    }

    /// Checks a candidate range: each picked endpoint individually first
    /// (short-circuiting on the first violation), then the ordering of a
    /// complete pair. A start-only range is a valid selection in progress;
    /// an empty range only violates `required`.
    ///
    /// # Errors
    /// The first violated constraint, as a [`ValidationError`].
    pub fn validate_range(&self, range: DateRange) -> Result<(), ValidationError> {
        if let Some(start) = range.start {
            self.validate(start)?;
        }
        if let Some(end) = range.end {
            self.validate(end)?;
        }
        if let (Some(start), Some(end)) = (range.start, range.end) {
            if start > end {
                return Err(ValidationError::RangeInverted { start, end });
            }
        }
        if self.required && range.is_empty() {
            return Err(ValidationError::RequiredMissing);
        }
        Ok(())
    }
}
