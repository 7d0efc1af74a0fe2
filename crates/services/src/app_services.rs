use std::sync::Arc;

use calendar_core::model::TaskCatalog;
use storage::repository::Storage;

use crate::calendar::CalendarService;
use crate::error::{AppServicesError, CalendarError};

/// Assembles the storage backend and the task catalog behind one handle.
#[derive(Clone)]
pub struct AppServices {
    storage: Storage,
    catalog: TaskCatalog,
}

impl AppServices {
    /// Build services backed by `SQLite` storage.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization fails.
    pub async fn new_sqlite(db_url: &str, catalog: TaskCatalog) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        Ok(Self { storage, catalog })
    }

    /// Build services over the in-memory store.
    #[must_use]
    pub fn in_memory(catalog: TaskCatalog) -> Self {
        Self {
            storage: Storage::in_memory(),
            catalog,
        }
    }

    #[must_use]
    pub fn catalog(&self) -> &TaskCatalog {
        &self.catalog
    }

    /// Hydrate a calendar controller from the persisted progress.
    ///
    /// # Errors
    ///
    /// Returns `CalendarError::Storage` if the store cannot be read.
    pub async fn load_calendar(&self) -> Result<CalendarService, CalendarError> {
        CalendarService::load(self.catalog.clone(), Arc::clone(&self.storage.progress)).await
    }
}
