// In-memory repository implementation
use crate::application::scale_repository::ScaleRepository;
use crate::domain::scale::ScaleRecord;
use async_trait::async_trait;
use chrono::NaiveDate;
use tokio::sync::Mutex;

#[derive(Debug, Default)]
pub struct InMemoryScaleRepository {
    records: Mutex<Vec<ScaleRecord>>,
}

impl InMemoryScaleRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Stable sort, so equal dates keep their relative order.
fn newest_first(records: &mut [ScaleRecord]) {
    records.sort_by(|a, b| b.date.cmp(&a.date));
}

#[async_trait]
impl ScaleRepository for InMemoryScaleRepository {
    async fn create(&self, record: ScaleRecord) {
        let mut records = self.records.lock().await;
        records.push(record);
        tracing::debug!("Stored scale record, {} total", records.len());
    }

    async fn list_all(&self) -> Vec<ScaleRecord> {
        let mut snapshot = self.records.lock().await.clone();
        newest_first(&mut snapshot);
        snapshot
    }

    async fn list_by_date(&self, date: NaiveDate) -> Vec<ScaleRecord> {
        let mut matches: Vec<ScaleRecord> = self
            .records
            .lock()
            .await
            .iter()
            .filter(|r| r.date == date)
            .cloned()
            .collect();
        newest_first(&mut matches);
        matches
    }

    async fn update_by_date(&self, record: &ScaleRecord) -> usize {
        let mut records = self.records.lock().await;
        let mut updated = 0;
        for existing in records.iter_mut().filter(|r| r.date == record.date) {
            existing.min = record.min;
            existing.max = record.max;
            existing.difference = record.max - record.min;
            updated += 1;
        }
        tracing::debug!("Updated {} scale records for {}", updated, record.date);
        updated
    }

    async fn delete_by_date(&self, date: NaiveDate) -> usize {
        let mut records = self.records.lock().await;
        let before = records.len();
        records.retain(|r| r.date != date);
        let removed = before - records.len();
        tracing::debug!("Removed {} scale records for {}", removed, date);
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn record(date: NaiveDate, min: i32, max: i32) -> ScaleRecord {
        ScaleRecord::new(date, min, max).unwrap()
    }

    #[tokio::test]
    async fn test_list_all_is_newest_first_and_stable() {
        let repo = InMemoryScaleRepository::new();
        repo.create(record(date(2018, 8, 20), 50, 52)).await;
        repo.create(record(date(2018, 8, 22), 49, 50)).await;
        repo.create(record(date(2018, 8, 21), 49, 49)).await;
        repo.create(record(date(2018, 8, 22), 47, 48)).await;

        let all = repo.list_all().await;
        let keys: Vec<(NaiveDate, i32)> = all.iter().map(|r| (r.date, r.min)).collect();
        assert_eq!(
            keys,
            vec![
                (date(2018, 8, 22), 49),
                (date(2018, 8, 22), 47),
                (date(2018, 8, 21), 49),
                (date(2018, 8, 20), 50),
            ]
        );
    }

    #[tokio::test]
    async fn test_list_all_leaves_storage_order_untouched() {
        let repo = InMemoryScaleRepository::new();
        repo.create(record(date(2018, 8, 18), 48, 50)).await;
        repo.create(record(date(2018, 8, 22), 49, 50)).await;

        let _ = repo.list_all().await;

        let stored = repo.records.lock().await.clone();
        assert_eq!(stored[0].date, date(2018, 8, 18));
        assert_eq!(stored[1].date, date(2018, 8, 22));
    }

    #[tokio::test]
    async fn test_list_by_date() {
        let repo = InMemoryScaleRepository::new();
        repo.create(record(date(2018, 8, 22), 49, 50)).await;
        repo.create(record(date(2018, 8, 22), 48, 51)).await;
        repo.create(record(date(2018, 8, 21), 49, 49)).await;

        let day = repo.list_by_date(date(2018, 8, 21)).await;
        assert_eq!(day, vec![record(date(2018, 8, 21), 49, 49)]);

        let pair = repo.list_by_date(date(2018, 8, 22)).await;
        assert_eq!(pair.len(), 2);
        assert_eq!(pair[0].min, 49);
        assert_eq!(pair[1].min, 48);

        assert!(repo.list_by_date(date(2099, 1, 1)).await.is_empty());
    }

    #[tokio::test]
    async fn test_update_by_date_recomputes_difference() {
        let repo = InMemoryScaleRepository::new();
        repo.create(record(date(2018, 8, 22), 49, 50)).await;
        repo.create(record(date(2018, 8, 22), 40, 41)).await;
        repo.create(record(date(2018, 8, 21), 49, 49)).await;

        let updated = repo.update_by_date(&record(date(2018, 8, 22), 45, 53)).await;
        assert_eq!(updated, 2);

        for r in repo.list_by_date(date(2018, 8, 22)).await {
            assert_eq!((r.min, r.max, r.difference), (45, 53, 8));
        }
        assert_eq!(
            repo.list_by_date(date(2018, 8, 21)).await,
            vec![record(date(2018, 8, 21), 49, 49)]
        );

        let missing = repo.update_by_date(&record(date(2099, 1, 1), 1, 2)).await;
        assert_eq!(missing, 0);
        assert_eq!(repo.list_all().await.len(), 3);
    }

    #[tokio::test]
    async fn test_delete_by_date_removes_adjacent_matches() {
        let repo = InMemoryScaleRepository::new();
        repo.create(record(date(2018, 8, 22), 49, 50)).await;
        repo.create(record(date(2018, 8, 22), 48, 50)).await;
        repo.create(record(date(2018, 8, 22), 47, 50)).await;
        repo.create(record(date(2018, 8, 21), 49, 49)).await;

        assert_eq!(repo.delete_by_date(date(2018, 8, 22)).await, 3);
        assert_eq!(
            repo.list_all().await,
            vec![record(date(2018, 8, 21), 49, 49)]
        );
    }

    #[tokio::test]
    async fn test_delete_missing_date_is_noop() {
        let repo = InMemoryScaleRepository::new();
        repo.create(record(date(2018, 8, 21), 49, 49)).await;

        assert_eq!(repo.delete_by_date(date(2099, 1, 1)).await, 0);
        assert_eq!(repo.list_all().await.len(), 1);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn prop_list_all_sorted_descending_and_stable(
            days in prop::collection::vec(0u32..10, 0..40)
        ) {
            let rt = tokio::runtime::Builder::new_current_thread().build().unwrap();
            let all = rt.block_on(async {
                let repo = InMemoryScaleRepository::new();
                // min carries the insertion index so stability is observable
                for (i, day) in days.iter().enumerate() {
                    repo.create(record(date(2018, 8, 1 + day), i as i32, i as i32 + 1)).await;
                }
                repo.list_all().await
            });

            prop_assert_eq!(all.len(), days.len());
            for pair in all.windows(2) {
                prop_assert!(pair[0].date >= pair[1].date);
                if pair[0].date == pair[1].date {
                    prop_assert!(pair[0].min < pair[1].min);
                }
            }
        }
    }
}
