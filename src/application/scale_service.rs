// Scale service - Validation and aggregation over the repository
use crate::application::scale_repository::ScaleRepository;
use crate::domain::error::ScaleError;
use crate::domain::scale::{
    ScaleAverage, ScaleRecord, ScaleSummary, parse_date, reading_difference, round_to_tenth,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct ScaleService {
    repository: Arc<dyn ScaleRepository>,
}

impl ScaleService {
    pub fn new(repository: Arc<dyn ScaleRepository>) -> Self {
        Self { repository }
    }

    pub async fn create(&self, date: &str, min: i32, max: i32) -> Result<(), ScaleError> {
        let record = Self::build_record(date, min, max)?;
        tracing::info!("Creating scale record for {}", record.date);
        self.repository.create(record).await;
        Ok(())
    }

    /// Every record, newest first, with averages. `average` is `None` when
    /// nothing is stored.
    pub async fn get_all(&self) -> ScaleSummary {
        let records = self.repository.list_all().await;
        let average = Self::calculate_average(&records);
        ScaleSummary { records, average }
    }

    pub async fn get_by_date(&self, date: &str) -> Result<Vec<ScaleRecord>, ScaleError> {
        let date = parse_date(date)?;
        Ok(self.repository.list_by_date(date).await)
    }

    pub async fn update(&self, date: &str, min: i32, max: i32) -> Result<(), ScaleError> {
        let record = Self::build_record(date, min, max)?;
        let updated = self.repository.update_by_date(&record).await;
        tracing::info!("Updated {} scale records for {}", updated, record.date);
        Ok(())
    }

    pub async fn delete(&self, date: &str) -> Result<(), ScaleError> {
        let date = parse_date(date)?;
        let removed = self.repository.delete_by_date(date).await;
        tracing::info!("Deleted {} scale records for {}", removed, date);
        Ok(())
    }

    /// Readings are checked before the date is parsed.
    fn build_record(date: &str, min: i32, max: i32) -> Result<ScaleRecord, ScaleError> {
        reading_difference(min, max)?;
        let date = parse_date(date)?;
        ScaleRecord::new(date, min, max)
    }

    pub fn calculate_average(records: &[ScaleRecord]) -> Option<ScaleAverage> {
        if records.is_empty() {
            return None;
        }

        let count = records.len() as f64;
        let min_total: i64 = records.iter().map(|r| i64::from(r.min)).sum();
        let max_total: i64 = records.iter().map(|r| i64::from(r.max)).sum();

        Some(ScaleAverage::new(
            round_to_tenth(min_total as f64 / count),
            round_to_tenth(max_total as f64 / count),
            round_to_tenth((max_total - min_total) as f64 / count),
        ))
    }
}
