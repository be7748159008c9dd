// Scale domain models
use super::error::ScaleError;
use chrono::NaiveDate;

/// Wire format for calendar dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// One day's readings. `difference` is always `max - min`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaleRecord {
    pub date: NaiveDate,
    pub min: i32,
    pub max: i32,
    pub difference: i32,
}

impl ScaleRecord {
    /// Builds a record, rejecting `max < min` and ranges that overflow.
    pub fn new(date: NaiveDate, min: i32, max: i32) -> Result<Self, ScaleError> {
        let difference = reading_difference(min, max)?;
        Ok(Self {
            date,
            min,
            max,
            difference,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScaleAverage {
    pub avg_min: f64,
    pub avg_max: f64,
    pub avg_difference: f64,
}

impl ScaleAverage {
    pub fn new(avg_min: f64, avg_max: f64, avg_difference: f64) -> Self {
        Self {
            avg_min,
            avg_max,
            avg_difference,
        }
    }
}

/// Result of listing every record: newest first, plus the averages when there
/// is anything to average.
#[derive(Debug, Clone, PartialEq)]
pub struct ScaleSummary {
    pub records: Vec<ScaleRecord>,
    pub average: Option<ScaleAverage>,
}

pub fn reading_difference(min: i32, max: i32) -> Result<i32, ScaleError> {
    if max < min {
        return Err(ScaleError::MinGreaterThanMax { min, max });
    }
    max.checked_sub(min).ok_or(ScaleError::ReadingOutOfRange { min, max })
}

/// Strict `YYYY-MM-DD`: the text must be exactly what the date formats back to,
/// so unpadded fields, signs, whitespace and short years are rejected.
pub fn parse_date(input: &str) -> Result<NaiveDate, ScaleError> {
    let invalid = |reason: String| ScaleError::InvalidDate {
        input: input.to_string(),
        reason,
    };

    let date = NaiveDate::parse_from_str(input, DATE_FORMAT)
        .map_err(|e| invalid(e.to_string()))?;
    if date.format(DATE_FORMAT).to_string() != input {
        return Err(invalid("expected YYYY-MM-DD".to_string()));
    }
    Ok(date)
}

/// Rounds to one decimal place, halves away from zero.
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
