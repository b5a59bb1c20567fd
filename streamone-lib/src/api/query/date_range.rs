//! Date range types for v3 queries and report specs.

use std::str::FromStr;

use chrono::DateTime;
use chrono::Utc;
use serde_json::json;

use crate::error::ValidationError;

const ISO_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// A named, service-interpreted time window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelativeDateRange {
    /// No range specified.
    Unknown,
    /// Today.
    Today,
    /// Start of the current week to now.
    WeekToDate,
    /// Start of the current month to now.
    MonthToDate,
    /// Start of the current quarter to now.
    QuarterToDate,
    /// Start of the current year to now.
    YearToDate,
    /// The previous week.
    LastWeek,
    /// The previous month.
    LastMonth,
    /// The previous quarter.
    LastQuarter,
    /// The previous year.
    LastYear,
    /// The most recent complete month.
    LatestMonth,
    /// The month before last.
    TwoMonthsAgo,
}

impl RelativeDateRange {
    /// Returns the wire representation.
    pub fn as_str(self) -> &'static str {
        match self {
            RelativeDateRange::Unknown => "UNKNOWN_RELATIVE_DATE_RANGE",
            RelativeDateRange::Today => "TODAY",
            RelativeDateRange::WeekToDate => "WEEK_TO_DATE",
            RelativeDateRange::MonthToDate => "MONTH_TO_DATE",
            RelativeDateRange::QuarterToDate => "QUARTER_TO_DATE",
            RelativeDateRange::YearToDate => "YEAR_TO_DATE",
            RelativeDateRange::LastWeek => "LAST_WEEK",
            RelativeDateRange::LastMonth => "LAST_MONTH",
            RelativeDateRange::LastQuarter => "LAST_QUARTER",
            RelativeDateRange::LastYear => "LAST_YEAR",
            RelativeDateRange::LatestMonth => "LATEST_MONTH",
            RelativeDateRange::TwoMonthsAgo => "TWO_MONTHS_AGO",
        }
    }
}

impl FromStr for RelativeDateRange {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "UNKNOWN_RELATIVE_DATE_RANGE" => Ok(RelativeDateRange::Unknown),
            "TODAY" => Ok(RelativeDateRange::Today),
            "WEEK_TO_DATE" => Ok(RelativeDateRange::WeekToDate),
            "MONTH_TO_DATE" => Ok(RelativeDateRange::MonthToDate),
            "QUARTER_TO_DATE" => Ok(RelativeDateRange::QuarterToDate),
            "YEAR_TO_DATE" => Ok(RelativeDateRange::YearToDate),
            "LAST_WEEK" => Ok(RelativeDateRange::LastWeek),
            "LAST_MONTH" => Ok(RelativeDateRange::LastMonth),
            "LAST_QUARTER" => Ok(RelativeDateRange::LastQuarter),
            "LAST_YEAR" => Ok(RelativeDateRange::LastYear),
            "LATEST_MONTH" => Ok(RelativeDateRange::LatestMonth),
            "TWO_MONTHS_AGO" => Ok(RelativeDateRange::TwoMonthsAgo),
            other => Err(ValidationError::new(
                "relativeDateRange",
                format!("unknown relative date range '{other}'"),
            )),
        }
    }
}

/// A date window: either a named relative range or a fixed start/end pair.
///
/// Exactly one form is populated; the enum makes the both-present case
/// unrepresentable. Input that arrives as two optional parts goes through
/// [`DateRange::from_parts`], which rejects ambiguous combinations instead
/// of silently resolving them.
///
/// # Example
///
/// ```
/// use streamone_lib::api::query::{DateRange, RelativeDateRange};
///
/// let range = DateRange::relative(RelativeDateRange::MonthToDate);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum DateRange {
    /// A named relative window, e.g. `MONTH_TO_DATE`.
    Relative(RelativeDateRange),
    /// An explicit start/end pair (ISO-8601 on the wire).
    Fixed {
        /// Start of the window, inclusive.
        start: DateTime<Utc>,
        /// End of the window, inclusive.
        end: DateTime<Utc>,
    },
}

impl DateRange {
    /// Creates a relative date range.
    pub fn relative(range: RelativeDateRange) -> Self {
        DateRange::Relative(range)
    }

    /// Creates a fixed date range.
    pub fn fixed(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        DateRange::Fixed { start, end }
    }

    /// Builds a date range from two optional parts.
    ///
    /// Fails when both or neither are supplied.
    pub fn from_parts(
        relative: Option<RelativeDateRange>,
        fixed: Option<(DateTime<Utc>, DateTime<Utc>)>,
    ) -> Result<Self, ValidationError> {
        match (relative, fixed) {
            (Some(_), Some(_)) => Err(ValidationError::new(
                "dateRange",
                "relativeDateRange and fixedDateRange are mutually exclusive",
            )),
            (Some(relative), None) => Ok(DateRange::Relative(relative)),
            (None, Some((start, end))) => Ok(DateRange::Fixed { start, end }),
            (None, None) => Err(ValidationError::new(
                "dateRange",
                "either relativeDateRange or fixedDateRange is required",
            )),
        }
    }

    /// Appends the flattened query parameters for this range.
    ///
    /// `prefix` is the parameter family, e.g. `startDateRange`.
    pub(crate) fn encode_into(&self, prefix: &str, out: &mut Vec<(String, String)>) {
        match self {
            DateRange::Relative(range) => {
                out.push((
                    format!("{prefix}.relativeDateRange"),
                    range.as_str().to_string(),
                ));
            }
            DateRange::Fixed { start, end } => {
                out.push((
                    format!("{prefix}.fixedDateRange.startDate"),
                    start.format(ISO_FORMAT).to_string(),
                ));
                out.push((
                    format!("{prefix}.fixedDateRange.endDate"),
                    end.format(ISO_FORMAT).to_string(),
                ));
            }
        }
    }

    /// Returns the `date_range_option` payload used by the reports service.
    ///
    /// The reports service takes snake_case JSON here, unlike the camelCase
    /// query parameters.
    pub(crate) fn report_spec(&self) -> serde_json::Value {
        match self {
            DateRange::Relative(range) => json!({
                "selected_range": {
                    "relative_date_range": range.as_str(),
                }
            }),
            DateRange::Fixed { start, end } => json!({
                "selected_range": {
                    "fixed_date_range": {
                        "start_date": start.format(ISO_FORMAT).to_string(),
                        "end_date": end.format(ISO_FORMAT).to_string(),
                    }
                }
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(s: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
    }

    #[test]
    fn test_relative_encoding() {
        let mut out = Vec::new();
        DateRange::relative(RelativeDateRange::MonthToDate).encode_into("startDateRange", &mut out);
        assert_eq!(
            out,
            vec![(
                "startDateRange.relativeDateRange".to_string(),
                "MONTH_TO_DATE".to_string()
            )]
        );
    }

    #[test]
    fn test_fixed_encoding() {
        let mut out = Vec::new();
        DateRange::fixed(ts("2024-01-01T00:00:00Z"), ts("2024-02-01T00:00:00Z"))
            .encode_into("endDateRange", &mut out);
        assert_eq!(
            out,
            vec![
                (
                    "endDateRange.fixedDateRange.startDate".to_string(),
                    "2024-01-01T00:00:00Z".to_string()
                ),
                (
                    "endDateRange.fixedDateRange.endDate".to_string(),
                    "2024-02-01T00:00:00Z".to_string()
                ),
            ]
        );
    }

    #[test]
    fn test_both_parts_rejected() {
        let result = DateRange::from_parts(
            Some(RelativeDateRange::MonthToDate),
            Some((ts("2024-01-01T00:00:00Z"), ts("2024-02-01T00:00:00Z"))),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_neither_part_rejected() {
        assert!(DateRange::from_parts(None, None).is_err());
    }

    #[test]
    fn test_unknown_relative_range_rejected() {
        assert!("BOGUS".parse::<RelativeDateRange>().is_err());
    }

    #[test]
    fn test_report_spec_relative() {
        let spec = DateRange::relative(RelativeDateRange::LastMonth).report_spec();
        assert_eq!(
            spec,
            serde_json::json!({
                "selected_range": { "relative_date_range": "LAST_MONTH" }
            })
        );
    }
}
