// Sample records loaded at startup
use crate::application::scale_service::ScaleService;
use crate::domain::error::ScaleError;

const SAMPLE_SCALES: [(&str, i32, i32); 5] = [
    ("2018-08-22", 49, 50),
    ("2018-08-21", 49, 49),
    ("2018-08-20", 50, 52),
    ("2018-08-19", 50, 51),
    ("2018-08-18", 48, 50),
];

/// Create the sample records through the service so they pass the same checks
/// as user input.
pub async fn seed_sample_scales(service: &ScaleService) -> Result<usize, ScaleError> {
    for (date, min, max) in SAMPLE_SCALES {
        service.create(date, min, max).await?;
    }
    Ok(SAMPLE_SCALES.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::scale::ScaleAverage;
    use crate::infrastructure::memory_repository::InMemoryScaleRepository;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_seed_sample_scales() {
        let service = ScaleService::new(Arc::new(InMemoryScaleRepository::new()));
        assert_eq!(seed_sample_scales(&service).await.unwrap(), 5);

        let summary = service.get_all().await;
        assert_eq!(summary.records[0].date.to_string(), "2018-08-22");
        assert_eq!(summary.records[4].date.to_string(), "2018-08-18");
        assert_eq!(summary.average, Some(ScaleAverage::new(49.2, 50.4, 1.2)));
    }
}
