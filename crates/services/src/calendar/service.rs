use std::fmt;
use std::sync::Arc;

use calendar_core::model::{DayNumber, TaskCatalog};
use calendar_core::progress::{DayStatus, ProgressState, Toggle};
use storage::repository::ProgressRepository;

use super::view::{DayCardState, DayDetail, ProgressSummary};
use crate::error::CalendarError;

//
// ─── TOGGLE RESULT ─────────────────────────────────────────────────────────────
//

/// Outcome of toggling the active day's completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleResult {
    pub day: DayNumber,
    /// Whether the day is completed after the toggle.
    pub completed: bool,
    /// The unlock frontier after the toggle.
    pub unlocked_day: DayNumber,
}

//
// ─── CALENDAR SERVICE ──────────────────────────────────────────────────────────
//

/// The calendar controller: derives per-day view state and mediates all
/// progress transitions.
///
/// All state is explicit — the static catalog, the hydrated
/// [`ProgressState`], and the currently open day — and every mutation
/// persists through the progress store before the call returns. If the
/// store fails, the in-memory mutation is kept and the error surfaces to
/// the caller, so progress is never silently lost within the session.
pub struct CalendarService {
    catalog: TaskCatalog,
    store: Arc<dyn ProgressRepository>,
    state: ProgressState,
    active_day: Option<DayNumber>,
}

impl CalendarService {
    /// Hydrate a controller from persisted progress.
    ///
    /// Malformed stored values read as first-run defaults inside the
    /// store; completed days outside the catalog are dropped.
    ///
    /// # Errors
    ///
    /// Returns `CalendarError::Storage` if the medium cannot be read.
    pub async fn load(
        catalog: TaskCatalog,
        store: Arc<dyn ProgressRepository>,
    ) -> Result<Self, CalendarError> {
        let completed = store.load_completed_days().await?;
        let unlocked_day = store.load_unlocked_day().await?;

        let mut state = ProgressState::from_parts(completed, unlocked_day);
        state.sanitize(catalog.last_day());

        Ok(Self {
            catalog,
            store,
            state,
            active_day: None,
        })
    }

    // Accessors
    #[must_use]
    pub fn catalog(&self) -> &TaskCatalog {
        &self.catalog
    }

    #[must_use]
    pub fn active_day(&self) -> Option<DayNumber> {
        self.active_day
    }

    #[must_use]
    pub fn unlocked_day(&self) -> DayNumber {
        self.state.unlocked_day()
    }

    #[must_use]
    pub fn is_completed(&self, day: DayNumber) -> bool {
        self.state.is_completed(day)
    }

    /// Open a day's detail view.
    ///
    /// Records the day as active so a subsequent toggle targets it.
    /// Reopening an already-open day is idempotent: the payload is
    /// identical and no progress state changes.
    ///
    /// # Errors
    ///
    /// Returns `CalendarError::UnknownDay` for a day outside the catalog,
    /// or `CalendarError::DayLocked` beyond the unlock frontier; neither
    /// changes any state.
    pub fn open(&mut self, day: DayNumber) -> Result<DayDetail, CalendarError> {
        let task = self
            .catalog
            .get(day)
            .ok_or(CalendarError::UnknownDay(day))?;

        // Completed days are never LOCKED, even past the frontier.
        if self.state.status(day) == DayStatus::Locked {
            return Err(CalendarError::DayLocked {
                day,
                unlocked_day: self.state.unlocked_day(),
            });
        }

        self.active_day = Some(day);
        Ok(DayDetail::from_task(task, self.state.is_completed(day)))
    }

    /// Dismiss the detail view without changing completion.
    pub fn close(&mut self) {
        self.active_day = None;
    }

    /// Toggle the active day's completion and persist immediately.
    ///
    /// Completing a day at or past the frontier advances the frontier;
    /// un-completing never rolls it back. The frontier marker is only
    /// rewritten when it actually moved.
    ///
    /// # Errors
    ///
    /// Returns `CalendarError::NoActiveDay` if no day is open.
    /// Returns `CalendarError::Storage` if persistence fails; the
    /// in-memory mutation is kept, so retrying the next mutation will
    /// write the current state.
    pub async fn toggle_active_day(&mut self) -> Result<ToggleResult, CalendarError> {
        let day = self.active_day.ok_or(CalendarError::NoActiveDay)?;

        let frontier_before = self.state.unlocked_day();
        let outcome = self.state.toggle(day);

        self.store
            .save_completed_days(self.state.completed_days())
            .await?;
        if self.state.unlocked_day() != frontier_before {
            self.store
                .save_unlocked_day(self.state.unlocked_day())
                .await?;
        }

        Ok(ToggleResult {
            day,
            completed: matches!(outcome, Toggle::Marked { .. }),
            unlocked_day: self.state.unlocked_day(),
        })
    }

    /// Recompute every day's state for the rendering collaborator.
    ///
    /// Called after any mutation; a full-grid redraw from this snapshot
    /// replaces reloading the whole view.
    #[must_use]
    pub fn day_states(&self) -> Vec<DayCardState> {
        self.catalog
            .tasks()
            .iter()
            .map(|task| DayCardState {
                day: task.day(),
                status: self.state.status(task.day()),
            })
            .collect()
    }

    #[must_use]
    pub fn progress_summary(&self) -> ProgressSummary {
        ProgressSummary::new(self.state.completed_count(), self.catalog.len())
    }

    /// Clear all progress, in memory and in the store.
    ///
    /// # Errors
    ///
    /// Returns `CalendarError::Storage` if deletion fails; the in-memory
    /// state is already back to first-run defaults.
    pub async fn reset_all(&mut self) -> Result<(), CalendarError> {
        self.state.reset();
        self.active_day = None;
        self.store.reset().await?;
        Ok(())
    }
}

impl fmt::Debug for CalendarService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CalendarService")
            .field("catalog_len", &self.catalog.len())
            .field("state", &self.state)
            .field("active_day", &self.active_day)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
