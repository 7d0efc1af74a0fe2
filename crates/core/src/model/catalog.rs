use thiserror::Error;

use crate::model::ids::DayNumber;
use crate::model::task::{Task, TaskDraft};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("duplicate day {0} in catalog")]
    DuplicateDay(DayNumber),

    #[error("catalog days must be dense from 1: expected day {expected}, found day {found}")]
    NonContiguousDay {
        expected: DayNumber,
        found: DayNumber,
    },
}

//
// ─── CATALOG ───────────────────────────────────────────────────────────────────
//

/// The static, externally supplied task catalog.
///
/// Day numbers are unique and dense from 1..N, so lookups index directly
/// into the backing vector. The catalog is never mutated at runtime; an
/// empty catalog is legal and simply has nothing to unlock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskCatalog {
    tasks: Vec<Task>,
}

impl TaskCatalog {
    /// Build a catalog from validated tasks.
    ///
    /// Tasks are sorted by day number; the sequence must then be exactly
    /// 1, 2, …, N.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::DuplicateDay` if two tasks share a day, or
    /// `CatalogError::NonContiguousDay` on the first gap.
    pub fn new(mut tasks: Vec<Task>) -> Result<Self, CatalogError> {
        tasks.sort_by_key(Task::day);

        let mut expected = DayNumber::new(1);
        for task in &tasks {
            if task.day() < expected {
                return Err(CatalogError::DuplicateDay(task.day()));
            }
            if task.day() > expected {
                return Err(CatalogError::NonContiguousDay {
                    expected,
                    found: task.day(),
                });
            }
            expected = expected.next();
        }

        Ok(Self { tasks })
    }

    /// Validate raw drafts and build the catalog in one step.
    ///
    /// # Errors
    ///
    /// Returns `crate::Error` wrapping the first draft validation failure
    /// or the catalog shape error.
    pub fn from_drafts(drafts: Vec<TaskDraft>) -> Result<Self, crate::Error> {
        let tasks = drafts
            .into_iter()
            .map(TaskDraft::validate)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(tasks)?)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Fetch a task by day number.
    #[must_use]
    pub fn get(&self, day: DayNumber) -> Option<&Task> {
        let index = usize::try_from(day.value()).ok()?.checked_sub(1)?;
        self.tasks.get(index)
    }

    #[must_use]
    pub fn contains(&self, day: DayNumber) -> bool {
        self.get(day).is_some()
    }

    /// Tasks in day order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Highest day number in the catalog, if any.
    #[must_use]
    pub fn last_day(&self) -> Option<DayNumber> {
        self.tasks.last().map(Task::day)
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
