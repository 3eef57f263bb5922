use serde::{Deserialize, Serialize};

use crate::format::DateFormat;
use crate::range::DateRange;
use crate::validate::{Constraints, ValidationError};
use crate::{CalendarDate, ParseError};

/// Everything a date field needs, constructed once at the UI boundary:
/// the active layout and the constraint set. The defaults are explicit
/// (`MM/DD/YYYY` with an unconstrained, optional value) so callers never
/// re-derive fallbacks per call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    pub format: DateFormat,
    pub constraints: Constraints,
}

/// Either half of the per-keystroke path can fail; the UI renders both the
/// same way, as inline field text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl FieldConfig {
    pub fn new(format: DateFormat, constraints: Constraints) -> Self {
        Self {
            format,
            constraints,
        }
    }

    /// The per-keystroke path for a single-date field: parse the raw text
    /// under the configured layout, then validate the result (including
    /// the `required` rule for empty text).
    ///
    /// # Errors
    /// A [`ParseError`] or [`ValidationError`], transparently wrapped.
    pub fn read(&self, text: &str) -> Result<Option<CalendarDate>, FieldError> {
        let value = self.format.parse(text)?;
        self.constraints.validate_value(value)?;
        Ok(value)
    }

    /// Renders the current value back into field text (empty for `None`).
    pub fn write(&self, value: Option<CalendarDate>) -> String {
        self.format.format(value)
    }

    /// The per-keystroke path for a start/end field pair: parse both texts,
    /// then validate the resulting range (endpoints, ordering, `required`).
    ///
    /// # Errors
    /// The first [`ParseError`] (start text first) or the range's first
    /// [`ValidationError`], transparently wrapped.
    pub fn read_range(&self, start_text: &str, end_text: &str) -> Result<DateRange, FieldError> {
        let range = DateRange::new(self.format.parse(start_text)?, self.format.parse(end_text)?);
        self.constraints.validate_range(range)?;
        Ok(range)
    }

    /// Renders a range back into its two field texts.
    pub fn write_range(&self, range: DateRange) -> (String, String) {
        (self.format.format(range.start), self.format.format(range.end))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: u16, month: u8, day: u8) -> CalendarDate {
        CalendarDate::new(year, month, day).expect("test date should be valid")
    }

    fn january_config() -> FieldConfig {
        FieldConfig::new(
            DateFormat::MonthDayYear,
            Constraints {
                min_date: Some(date(2024, 1, 1)),
                max_date: Some(date(2024, 1, 31)),
                ..Default::default()
            },
        )
    }

    #[test]
    fn test_defaults_are_explicit() {
        let config = FieldConfig::default();
        assert_eq!(config.format, DateFormat::MonthDayYear);
        assert_eq!(config.constraints, Constraints::default());
    }

    #[test]
    fn test_read_parses_then_validates() {
        let config = january_config();

        assert_eq!(config.read("01/15/2024").unwrap(), Some(date(2024, 1, 15)));

        // well-formed but outside the window
        let result = config.read("02/15/2024");
        assert!(matches!(
            result,
            Err(FieldError::Validation(ValidationError::AfterMaxDate { .. }))
        ));

        // malformed text never reaches validation
        let result = config.read("2024-01-15");
        assert!(matches!(
            result,
            Err(FieldError::Parse(ParseError::MalformedString(_)))
        ));
    }

    #[test]
    fn test_read_empty_text() {
        let config = january_config();
        assert_eq!(config.read("").unwrap(), None);

        let required = FieldConfig::new(
            DateFormat::MonthDayYear,
            Constraints {
                required: true,
                ..Default::default()
            },
        );
        assert!(matches!(
            required.read(""),
            Err(FieldError::Validation(ValidationError::RequiredMissing))
        ));
    }

    #[test]
    fn test_write_then_read_round_trips() {
        let config = january_config();
        let value = Some(date(2024, 1, 15));

        let text = config.write(value);
        assert_eq!(text, "01/15/2024");
        assert_eq!(config.read(&text).unwrap(), value);

        assert_eq!(config.write(None), "");
    }

    #[test]
    fn test_read_range() {
        let config = january_config();

        let range = config.read_range("01/10/2024", "01/20/2024").unwrap();
        assert_eq!(range, DateRange::between(date(2024, 1, 10), date(2024, 1, 20)));

        // selection in progress
        let range = config.read_range("01/10/2024", "").unwrap();
        assert_eq!(range, DateRange::single(date(2024, 1, 10)));

        let result = config.read_range("01/20/2024", "01/10/2024");
        assert!(matches!(
            result,
            Err(FieldError::Validation(ValidationError::RangeInverted { .. }))
        ));

        let result = config.read_range("junk", "01/10/2024");
        assert!(matches!(result, Err(FieldError::Parse(_))));
    }

    #[test]
    fn test_write_range() {
        let config = january_config();

        let (start, end) =
            config.write_range(DateRange::between(date(2024, 1, 10), date(2024, 1, 20)));
        assert_eq!(start, "01/10/2024");
        assert_eq!(end, "01/20/2024");

        let (start, end) = config.write_range(DateRange::single(date(2024, 1, 10)));
        assert_eq!(start, "01/10/2024");
        assert_eq!(end, "");
    }

    #[test]
    fn test_error_display_passes_through() {
        let config = january_config();

        let err = config.read("13/10/2024").unwrap_err();
        assert_eq!(err.to_string(), "month 13 is out of range (1-12)");

        let err = config.read("02/15/2024").unwrap_err();
        assert_eq!(
            err.to_string(),
            "date 2024-02-15 is after the maximum 2024-01-31"
        );
    }

    #[test]
    fn test_serde_round_trip() {
        let config = january_config();
        let json = serde_json::to_string(&config).expect("config should serialize");
        let restored: FieldConfig = serde_json::from_str(&json).expect("config should deserialize");
        assert_eq!(config, restored);

        // an unknown layout fails at configuration time, not at parse time
        let result: Result<FieldConfig, _> =
            serde_json::from_str(r#"{"format":"MM-DD-YYYY"}"#);
        assert!(result.is_err());
    }
}
