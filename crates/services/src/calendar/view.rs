use serde::Serialize;

use calendar_core::model::{DayNumber, Difficulty, Task};
use calendar_core::progress::DayStatus;

//
// ─── RENDER INSTRUCTIONS ───────────────────────────────────────────────────────
//

/// Full detail payload for an opened day, as shown in the detail view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayDetail {
    pub day: DayNumber,
    /// Heading line for the detail view, e.g. `"Day 12"`.
    pub heading: String,
    pub title: String,
    pub difficulty: Difficulty,
    pub description: String,
    pub tips: Vec<String>,
    pub bonus: Option<String>,
    pub completed: bool,
}

impl DayDetail {
    pub(crate) fn from_task(task: &Task, completed: bool) -> Self {
        Self {
            day: task.day(),
            heading: format!("Day {}", task.day()),
            title: task.title().to_owned(),
            difficulty: task.difficulty(),
            description: task.description().to_owned(),
            tips: task.tips().to_vec(),
            bonus: task.bonus().map(str::to_owned),
            completed,
        }
    }
}

/// Computed state for one day-card in the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayCardState {
    pub day: DayNumber,
    pub status: DayStatus,
}

/// Aggregated completion progress, useful for a progress indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProgressSummary {
    pub completed_count: usize,
    pub total_count: usize,
    /// `round(100 * completed / total)`, or 0 for an empty catalog.
    pub percent: u8,
}

impl ProgressSummary {
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn new(completed_count: usize, total_count: usize) -> Self {
        let percent = if total_count == 0 {
            0
        } else {
            ((100 * completed_count + total_count / 2) / total_count) as u8
        };
        Self {
            completed_count,
            total_count,
            percent,
        }
    }

    /// Human-readable progress line, e.g. `"Completed 5 of 30"`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("Completed {} of {}", self.completed_count, self.total_count)
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
