use async_trait::async_trait;
use sqlx::Row;
use std::collections::BTreeSet;

use calendar_core::model::DayNumber;

use crate::repository::{
    COMPLETED_DAYS_KEY, ProgressRepository, StorageError, UNLOCKED_DAY_KEY, decode_completed_days,
    decode_unlocked_day, encode_completed_days,
};

use super::SqliteRepository;

impl SqliteRepository {
    async fn load_value(&self, key: &str) -> Result<Option<String>, StorageError> {
        let row = sqlx::query("SELECT value FROM progress WHERE key = ?1")
            .bind(key)
            .fetch_optional(&self.pool)
            .await
            .map_err(|err| StorageError::Connection(err.to_string()))?;

        let Some(row) = row else {
            return Ok(None);
        };

        row.try_get("value")
            .map(Some)
            .map_err(|err| StorageError::Serialization(err.to_string()))
    }

    async fn save_value(&self, key: &str, value: &str) -> Result<(), StorageError> {
        sqlx::query(
            r"
            INSERT INTO progress (key, value)
            VALUES (?1, ?2)
            ON CONFLICT(key) DO UPDATE SET
                value = excluded.value
            ",
        )
        .bind(key)
        .bind(value)
        .execute(&self.pool)
        .await
        .map_err(|err| StorageError::Connection(err.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl ProgressRepository for SqliteRepository {
    async fn load_completed_days(&self) -> Result<BTreeSet<DayNumber>, StorageError> {
        Ok(self
            .load_value(COMPLETED_DAYS_KEY)
            .await?
            .map(|value| decode_completed_days(&value))
            .unwrap_or_default())
    }

    async fn save_completed_days(&self, days: &BTreeSet<DayNumber>) -> Result<(), StorageError> {
        let encoded = encode_completed_days(days)?;
        self.save_value(COMPLETED_DAYS_KEY, &encoded).await
    }

    async fn load_unlocked_day(&self) -> Result<DayNumber, StorageError> {
        Ok(self
            .load_value(UNLOCKED_DAY_KEY)
            .await?
            .map(|value| decode_unlocked_day(&value))
            .unwrap_or(DayNumber::new(1)))
    }

    async fn save_unlocked_day(&self, day: DayNumber) -> Result<(), StorageError> {
        self.save_value(UNLOCKED_DAY_KEY, &day.to_string()).await
    }

    async fn reset(&self) -> Result<(), StorageError> {
        sqlx::query("DELETE FROM progress WHERE key IN (?1, ?2)")
            .bind(COMPLETED_DAYS_KEY)
            .bind(UNLOCKED_DAY_KEY)
            .execute(&self.pool)
            .await
            .map_err(|err| StorageError::Connection(err.to_string()))?;

        Ok(())
    }
}
