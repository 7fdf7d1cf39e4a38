use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tracing::debug;
use uuid::Uuid;

use super::errors::RepositoryError;
use super::readings::ReadingRepositoryTrait;
use crate::models::{NewReading, StoredReading, UserId};

/// In-memory storage implementation for blood pressure readings
#[derive(Debug, Clone, Default)]
pub struct InMemoryReadingRepository {
    /// Storage for blood pressure readings
    readings: Arc<Mutex<HashMap<Uuid, StoredReading>>>,
}

impl InMemoryReadingRepository {
    /// Create a new in-memory storage
    pub fn new() -> Self {
        Self::default()
    }

    fn owned_by(&self, user_id: &UserId) -> Result<Vec<StoredReading>, RepositoryError> {
        let store = self.readings.lock()?;
        Ok(store
            .values()
            .filter(|reading| &reading.user_id == user_id)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl ReadingRepositoryTrait for InMemoryReadingRepository {
    async fn create(&self, user_id: &UserId, reading: NewReading) -> Result<StoredReading, RepositoryError> {
        let stored = StoredReading {
            id: Uuid::new_v4(),
            user_id: user_id.clone(),
            systolic: reading.systolic,
            diastolic: reading.diastolic,
            pulse: reading.pulse,
            notes: reading.notes,
            reading_type: reading.reading_type,
            recorded_at: reading.recorded_at,
            created_at: Utc::now(),
        };

        let mut store = self.readings.lock()?;
        store.insert(stored.id, stored.clone());
        debug!(id = %stored.id, user = %user_id, "Stored blood pressure reading in memory");
        Ok(stored)
    }

    async fn find_since(
        &self,
        user_id: &UserId,
        since: DateTime<Utc>,
    ) -> Result<Vec<StoredReading>, RepositoryError> {
        let mut readings: Vec<StoredReading> = self
            .owned_by(user_id)?
            .into_iter()
            .filter(|reading| reading.recorded_at >= since)
            .collect();
        readings.sort_by(|a, b| a.recorded_at.cmp(&b.recorded_at));
        Ok(readings)
    }

    async fn find_all(&self, user_id: &UserId) -> Result<Vec<StoredReading>, RepositoryError> {
        let mut readings = self.owned_by(user_id)?;
        readings.sort_by(|a, b| b.recorded_at.cmp(&a.recorded_at));
        Ok(readings)
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<StoredReading>, RepositoryError> {
        let store = self.readings.lock()?;
        Ok(store.get(&id).cloned())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, RepositoryError> {
        let mut store = self.readings.lock()?;
        Ok(store.remove(&id).is_some())
    }

    async fn count_by_user(&self, user_id: &UserId) -> Result<usize, RepositoryError> {
        Ok(self.owned_by(user_id)?.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ReadingType;
    use chrono::{Duration, TimeZone};

    fn new_reading(systolic: u16, recorded_at: DateTime<Utc>) -> NewReading {
        NewReading {
            systolic,
            diastolic: 80,
            pulse: Some(70),
            notes: None,
            reading_type: ReadingType::Manual,
            recorded_at,
        }
    }

    fn start() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap()
    }

    #[tokio::test]
    async fn test_find_since_is_ascending_and_filtered() {
        let repo = InMemoryReadingRepository::new();
        let user = UserId::new("alice");

        repo.create(&user, new_reading(130, start() + Duration::days(2))).await.unwrap();
        repo.create(&user, new_reading(110, start() - Duration::days(5))).await.unwrap();
        repo.create(&user, new_reading(120, start() + Duration::days(1))).await.unwrap();

        let readings = repo.find_since(&user, start()).await.unwrap();
        let systolic: Vec<u16> = readings.iter().map(|r| r.systolic).collect();
        assert_eq!(systolic, vec![120, 130]);
    }

    #[tokio::test]
    async fn test_find_all_is_newest_first_and_per_user() {
        let repo = InMemoryReadingRepository::new();
        let alice = UserId::new("alice");
        let bob = UserId::new("bob");

        repo.create(&alice, new_reading(120, start())).await.unwrap();
        repo.create(&alice, new_reading(125, start() + Duration::hours(3))).await.unwrap();
        repo.create(&bob, new_reading(140, start())).await.unwrap();

        let readings = repo.find_all(&alice).await.unwrap();
        let systolic: Vec<u16> = readings.iter().map(|r| r.systolic).collect();
        assert_eq!(systolic, vec![125, 120]);
        assert_eq!(repo.count_by_user(&bob).await.unwrap(), 1);
    }

    #[test]
    fn test_get_and_delete() {
        let repo = InMemoryReadingRepository::new();
        let user = UserId::new("carol");

        let stored = tokio_test::block_on(repo.create(&user, new_reading(118, start()))).unwrap();
        let fetched = tokio_test::block_on(repo.get_by_id(stored.id)).unwrap();
        assert_eq!(fetched, Some(stored.clone()));

        assert!(tokio_test::block_on(repo.delete(stored.id)).unwrap());
        assert!(!tokio_test::block_on(repo.delete(stored.id)).unwrap());
        assert_eq!(tokio_test::block_on(repo.get_by_id(stored.id)).unwrap(), None);
    }
}
