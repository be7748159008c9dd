// Repository trait for scale record storage
use crate::domain::scale::ScaleRecord;
use async_trait::async_trait;
use chrono::NaiveDate;

/// Storage port for scale records. Dates are not unique keys: every operation
/// that takes a date applies to all records on that date.
#[async_trait]
pub trait ScaleRepository: Send + Sync {
    /// Append a record
    async fn create(&self, record: ScaleRecord);

    /// All records, newest date first; records sharing a date keep insertion order
    async fn list_all(&self) -> Vec<ScaleRecord>;

    /// Records on exactly `date`, in the same order as `list_all`
    async fn list_by_date(&self, date: NaiveDate) -> Vec<ScaleRecord>;

    /// Overwrite min/max on every record dated `record.date`, returning how many changed
    async fn update_by_date(&self, record: &ScaleRecord) -> usize;

    /// Remove every record on `date`, returning how many were removed
    async fn delete_by_date(&self, date: NaiveDate) -> usize;
}
