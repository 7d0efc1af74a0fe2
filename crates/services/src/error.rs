//! Shared error types for the services crate.

use thiserror::Error;

use calendar_core::model::DayNumber;
use storage::repository::StorageError;
use storage::sqlite::SqliteInitError;

/// Errors emitted by `CalendarService`.
///
/// Invalid operation requests (opening a locked day, toggling with nothing
/// open) are explicit rejections: the operation changes no state and the
/// caller can assert on the variant.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CalendarError {
    #[error("day {0} is not in the catalog")]
    UnknownDay(DayNumber),

    #[error("day {day} is locked; days up to {unlocked_day} are accessible")]
    DayLocked {
        day: DayNumber,
        unlocked_day: DayNumber,
    },

    #[error("no day is open")]
    NoActiveDay,

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted while parsing the external task catalog document.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CatalogParseError {
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Invalid(#[from] calendar_core::Error),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Sqlite(#[from] SqliteInitError),
    #[error(transparent)]
    Calendar(#[from] CalendarError),
}
