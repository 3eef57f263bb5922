use serde::{Deserialize, Serialize};

use crate::CalendarDate;

/// A candidate date-range selection: two optional endpoints.
///
/// A range with only `start` set is a selection in progress, and a range
/// with `start` after `end` is representable on purpose: ordering is a
/// validation outcome (`ValidationError::RangeInverted`), not a
/// construction invariant, so the UI can show the user what they picked
/// before rejecting it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    pub start: Option<CalendarDate>,
    pub end: Option<CalendarDate>,
}

impl DateRange {
    pub const fn new(start: Option<CalendarDate>, end: Option<CalendarDate>) -> Self {
        Self { start, end }
    }

    /// A selection in progress: the first endpoint has been picked
    pub const fn single(start: CalendarDate) -> Self {
        Self {
            start: Some(start),
            end: None,
        }
    }

    /// A range with both endpoints picked
    pub const fn between(start: CalendarDate, end: CalendarDate) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
        }
    }

    /// Neither endpoint picked ("Clear" state)
    pub const fn is_empty(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    /// Start picked, end still pending
    pub const fn is_in_progress(&self) -> bool {
        self.start.is_some() && self.end.is_none()
    }

    /// Both endpoints picked
    pub const fn is_complete(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }

    /// Both endpoints picked but in the wrong order
    pub fn is_inverted(&self) -> bool {
        matches!((self.start, self.end), (Some(start), Some(end)) if start > end)
    }

    /// Whether `date` falls inside the current selection, for grid
    /// highlighting. A complete range contains its endpoints; an
    /// in-progress range contains only its start; an inverted range
    /// contains nothing.
    pub fn contains(&self, date: CalendarDate) -> bool {
        match (self.start, self.end) {
            (Some(start), Some(end)) => start <= date && date <= end,
            (Some(start), None) => date == start,
            _ => false,
        }
    }
}
