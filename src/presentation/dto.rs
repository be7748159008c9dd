// Request and response bodies for the scale endpoints
use crate::domain::scale::{DATE_FORMAT, ScaleAverage, ScaleRecord, ScaleSummary};
use chrono::{FixedOffset, NaiveTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct ScaleParam {
    pub date: String,
    pub min: i32,
    pub max: i32,
}

#[derive(Debug, Deserialize)]
pub struct DateQuery {
    pub date: String,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct ScaleView {
    /// RFC 3339 midnight in the reference offset, e.g. `2018-08-22T00:00:00+07:00`
    pub date: String,
    pub min: i32,
    pub max: i32,
    pub difference: i32,
}

impl ScaleView {
    pub fn from_record(record: &ScaleRecord, offset: FixedOffset) -> Self {
        let date = record
            .date
            .and_time(NaiveTime::MIN)
            .and_local_timezone(offset)
            .single()
            .map(|midnight| midnight.to_rfc3339())
            .unwrap_or_else(|| record.date.format(DATE_FORMAT).to_string());

        Self {
            date,
            min: record.min,
            max: record.max,
            difference: record.difference,
        }
    }

    pub fn from_records(records: &[ScaleRecord], offset: FixedOffset) -> Vec<Self> {
        records.iter().map(|r| Self::from_record(r, offset)).collect()
    }
}

#[derive(Debug, Serialize, PartialEq)]
pub struct AverageView {
    pub min: f64,
    pub max: f64,
    pub difference: f64,
}

impl From<&ScaleAverage> for AverageView {
    fn from(average: &ScaleAverage) -> Self {
        Self {
            min: average.avg_min,
            max: average.avg_max,
            difference: average.avg_difference,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ScalesView {
    pub scales: Vec<ScaleView>,
    pub average: Option<AverageView>,
}

impl ScalesView {
    pub fn from_summary(summary: &ScaleSummary, offset: FixedOffset) -> Self {
        Self {
            scales: ScaleView::from_records(&summary.records, offset),
            average: summary.average.as_ref().map(AverageView::from),
        }
    }
}
