use async_trait::async_trait;
use calendar_core::model::DayNumber;
use std::collections::{BTreeSet, HashMap};
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Errors surfaced by storage adapters.
///
/// Malformed persisted data is NOT an error: loads treat it as absence and
/// fall back to first-run defaults. Errors mean the medium itself failed.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

//
// ─── PERSISTED LAYOUT ──────────────────────────────────────────────────────────
//

/// Key holding the JSON-encoded array of completed day numbers.
pub const COMPLETED_DAYS_KEY: &str = "completedDays";

/// Key holding the unlock frontier as a decimal string.
pub const UNLOCKED_DAY_KEY: &str = "unlockedDay";

pub(crate) fn encode_completed_days(days: &BTreeSet<DayNumber>) -> Result<String, StorageError> {
    let raw: Vec<u32> = days.iter().map(|day| day.value()).collect();
    serde_json::to_string(&raw).map_err(|err| StorageError::Serialization(err.to_string()))
}

/// Decode a stored completed-days value, treating malformed input as empty.
pub(crate) fn decode_completed_days(value: &str) -> BTreeSet<DayNumber> {
    serde_json::from_str::<Vec<u32>>(value)
        .map(|days| {
            days.into_iter()
                .filter(|day| *day >= 1)
                .map(DayNumber::new)
                .collect()
        })
        .unwrap_or_default()
}

/// Decode a stored frontier value, treating non-numeric input as day 1.
pub(crate) fn decode_unlocked_day(value: &str) -> DayNumber {
    value.parse::<DayNumber>().unwrap_or(DayNumber::new(1))
}

//
// ─── REPOSITORY CONTRACT ───────────────────────────────────────────────────────
//

/// Durable key-value persistence of calendar progress.
///
/// Loads fail soft: a missing or malformed value yields the first-run
/// default (`{}` / day 1) rather than an error.
#[async_trait]
pub trait ProgressRepository: Send + Sync {
    /// Previously persisted completed-day set, or empty when absent or
    /// malformed.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` only if the medium cannot be read.
    async fn load_completed_days(&self) -> Result<BTreeSet<DayNumber>, StorageError>;

    /// Overwrite the persisted completed-day set.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the set cannot be stored.
    async fn save_completed_days(&self, days: &BTreeSet<DayNumber>) -> Result<(), StorageError>;

    /// Previously persisted unlock frontier, or day 1 when absent or
    /// non-numeric.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` only if the medium cannot be read.
    async fn load_unlocked_day(&self) -> Result<DayNumber, StorageError>;

    /// Overwrite the persisted unlock frontier.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the marker cannot be stored.
    async fn save_unlocked_day(&self, day: DayNumber) -> Result<(), StorageError>;

    /// Delete all persisted progress, returning the store to first-run
    /// defaults.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if deletion fails.
    async fn reset(&self) -> Result<(), StorageError>;
}

//
// ─── IN-MEMORY BACKEND ─────────────────────────────────────────────────────────
//

/// Simple in-memory repository implementation for testing and prototyping.
///
/// Holds the exact wire strings the persisted layout prescribes, so tests
/// exercise the same encode/decode paths as the durable backend.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Arc::new(Mutex::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl ProgressRepository for InMemoryRepository {
    async fn load_completed_days(&self) -> Result<BTreeSet<DayNumber>, StorageError> {
        let guard = self
            .entries
            .lock()
            .map_err(|err| StorageError::Connection(err.to_string()))?;
        Ok(guard
            .get(COMPLETED_DAYS_KEY)
            .map(|value| decode_completed_days(value))
            .unwrap_or_default())
    }

    async fn save_completed_days(&self, days: &BTreeSet<DayNumber>) -> Result<(), StorageError> {
        let encoded = encode_completed_days(days)?;
        let mut guard = self
            .entries
            .lock()
            .map_err(|err| StorageError::Connection(err.to_string()))?;
        guard.insert(COMPLETED_DAYS_KEY.to_owned(), encoded);
        Ok(())
    }

    async fn load_unlocked_day(&self) -> Result<DayNumber, StorageError> {
        let guard = self
            .entries
            .lock()
            .map_err(|err| StorageError::Connection(err.to_string()))?;
        Ok(guard
            .get(UNLOCKED_DAY_KEY)
            .map(|value| decode_unlocked_day(value))
            .unwrap_or(DayNumber::new(1)))
    }

    async fn save_unlocked_day(&self, day: DayNumber) -> Result<(), StorageError> {
        let mut guard = self
            .entries
            .lock()
            .map_err(|err| StorageError::Connection(err.to_string()))?;
        guard.insert(UNLOCKED_DAY_KEY.to_owned(), day.to_string());
        Ok(())
    }

    async fn reset(&self) -> Result<(), StorageError> {
        let mut guard = self
            .entries
            .lock()
            .map_err(|err| StorageError::Connection(err.to_string()))?;
        guard.remove(COMPLETED_DAYS_KEY);
        guard.remove(UNLOCKED_DAY_KEY);
        Ok(())
    }
}

//
// ─── STORAGE AGGREGATE ─────────────────────────────────────────────────────────
//

/// Aggregates the progress repository behind a trait object for easy
/// backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub progress: Arc<dyn ProgressRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        let progress: Arc<dyn ProgressRepository> = Arc::new(InMemoryRepository::new());
        Self { progress }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
