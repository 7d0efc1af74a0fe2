use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::model::ids::DayNumber;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TaskError {
    #[error("day number must be >= 1")]
    InvalidDay,

    #[error("task title cannot be empty")]
    EmptyTitle,

    #[error("task description cannot be empty")]
    EmptyDescription,
}

//
// ─── DIFFICULTY ────────────────────────────────────────────────────────────────
//

/// Difficulty label attached to each catalog task.
///
/// The label doubles as the style hint the rendering collaborator applies
/// to the detail view, so `Display` yields the lowercase form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

//
// ─── TASK TYPES ────────────────────────────────────────────────────────────────
//

/// Raw catalog record as it appears in the external task document.
///
/// The `task` field carries the description text; `tips` and `bonus` may be
/// absent. Drafts are validated into [`Task`] before entering a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TaskDraft {
    pub day: u32,
    pub title: String,
    pub difficulty: Difficulty,
    #[serde(rename = "task")]
    pub description: String,
    #[serde(default)]
    pub tips: Vec<String>,
    #[serde(default)]
    pub bonus: Option<String>,
}

impl TaskDraft {
    /// Validate the draft into a read-only [`Task`].
    ///
    /// Trims title and description, drops blank tips, and filters an empty
    /// bonus down to `None`.
    ///
    /// # Errors
    ///
    /// Returns `TaskError::InvalidDay` for day `0`, `EmptyTitle` or
    /// `EmptyDescription` for whitespace-only text.
    pub fn validate(self) -> Result<Task, TaskError> {
        if self.day == 0 {
            return Err(TaskError::InvalidDay);
        }

        let title = self.title.trim().to_owned();
        if title.is_empty() {
            return Err(TaskError::EmptyTitle);
        }

        let description = self.description.trim().to_owned();
        if description.is_empty() {
            return Err(TaskError::EmptyDescription);
        }

        let tips: Vec<String> = self
            .tips
            .into_iter()
            .map(|tip| tip.trim().to_owned())
            .filter(|tip| !tip.is_empty())
            .collect();

        let bonus = self
            .bonus
            .map(|b| b.trim().to_owned())
            .filter(|b| !b.is_empty());

        Ok(Task {
            day: DayNumber::new(self.day),
            title,
            difficulty: self.difficulty,
            description,
            tips,
            bonus,
        })
    }
}

/// One day's task in the static catalog, read-only at runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    day: DayNumber,
    title: String,
    difficulty: Difficulty,
    description: String,
    tips: Vec<String>,
    bonus: Option<String>,
}

impl Task {
    // Accessors
    #[must_use]
    pub fn day(&self) -> DayNumber {
        self.day
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn tips(&self) -> &[String] {
        &self.tips
    }

    #[must_use]
    pub fn bonus(&self) -> Option<&str> {
        self.bonus.as_deref()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(day: u32) -> TaskDraft {
        TaskDraft {
            day,
            title: format!("Task {day}"),
            difficulty: Difficulty::Easy,
            description: "Do the thing".into(),
            tips: vec!["start small".into()],
            bonus: None,
        }
    }

    #[test]
    fn draft_validates_into_task() {
        let task = draft(1).validate().unwrap();
        assert_eq!(task.day(), DayNumber::new(1));
        assert_eq!(task.title(), "Task 1");
        assert_eq!(task.difficulty(), Difficulty::Easy);
        assert_eq!(task.description(), "Do the thing");
        assert_eq!(task.tips(), ["start small"]);
        assert_eq!(task.bonus(), None);
    }

    #[test]
    fn draft_rejects_day_zero() {
        let mut d = draft(0);
        d.day = 0;
        assert_eq!(d.validate().unwrap_err(), TaskError::InvalidDay);
    }

    #[test]
    fn draft_rejects_empty_title() {
        let mut d = draft(1);
        d.title = "   ".into();
        assert_eq!(d.validate().unwrap_err(), TaskError::EmptyTitle);
    }

    #[test]
    fn draft_rejects_empty_description() {
        let mut d = draft(1);
        d.description = String::new();
        assert_eq!(d.validate().unwrap_err(), TaskError::EmptyDescription);
    }

    #[test]
    fn draft_trims_text_and_drops_blank_tips() {
        let d = TaskDraft {
            day: 2,
            title: "  Stretch  ".into(),
            difficulty: Difficulty::Medium,
            description: "  10 minutes  ".into(),
            tips: vec!["  ".into(), " keep breathing ".into(), String::new()],
            bonus: Some("   ".into()),
        };

        let task = d.validate().unwrap();
        assert_eq!(task.title(), "Stretch");
        assert_eq!(task.description(), "10 minutes");
        assert_eq!(task.tips(), ["keep breathing"]);
        assert_eq!(task.bonus(), None);
    }

    #[test]
    fn draft_keeps_non_empty_bonus() {
        let mut d = draft(3);
        d.bonus = Some(" extra round ".into());
        let task = d.validate().unwrap();
        assert_eq!(task.bonus(), Some("extra round"));
    }

    #[test]
    fn difficulty_labels() {
        assert_eq!(Difficulty::Easy.to_string(), "easy");
        assert_eq!(Difficulty::Medium.to_string(), "medium");
        assert_eq!(Difficulty::Hard.to_string(), "hard");
    }

    #[test]
    fn draft_deserializes_catalog_document_fields() {
        let json = r#"{
            "day": 1,
            "title": "Walk",
            "difficulty": "easy",
            "task": "Walk for 20 minutes",
            "tips": ["bring water"],
            "bonus": "jog the last 5"
        }"#;
        let d: TaskDraft = serde_json::from_str(json).unwrap();
        assert_eq!(d.description, "Walk for 20 minutes");
        assert_eq!(d.difficulty, Difficulty::Easy);
    }

    #[test]
    fn draft_defaults_missing_tips_and_bonus() {
        let json = r#"{
            "day": 4,
            "title": "Rest",
            "difficulty": "easy",
            "task": "Take a rest day"
        }"#;
        let d: TaskDraft = serde_json::from_str(json).unwrap();
        assert!(d.tips.is_empty());
        assert_eq!(d.bonus, None);
    }
}
