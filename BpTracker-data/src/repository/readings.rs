use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::errors::RepositoryError;
use crate::models::{NewReading, StoredReading, UserId};

/// Repository trait for blood pressure readings
#[cfg_attr(feature = "mock", mockall::automock)]
#[async_trait]
pub trait ReadingRepositoryTrait: Send + Sync {
    /// Store a new reading for a user
    async fn create(&self, user_id: &UserId, reading: NewReading) -> Result<StoredReading, RepositoryError>;

    /// All readings of a user recorded at or after `since`, oldest first
    async fn find_since(
        &self,
        user_id: &UserId,
        since: DateTime<Utc>,
    ) -> Result<Vec<StoredReading>, RepositoryError>;

    /// All readings of a user, newest first
    async fn find_all(&self, user_id: &UserId) -> Result<Vec<StoredReading>, RepositoryError>;

    /// Get a reading by ID
    async fn get_by_id(&self, id: Uuid) -> Result<Option<StoredReading>, RepositoryError>;

    /// Delete a reading by ID, returning whether it existed
    async fn delete(&self, id: Uuid) -> Result<bool, RepositoryError>;

    /// Number of readings stored for a user
    async fn count_by_user(&self, user_id: &UserId) -> Result<usize, RepositoryError>;
}
