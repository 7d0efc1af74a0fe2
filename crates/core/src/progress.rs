use serde::Serialize;
use std::collections::BTreeSet;

use crate::model::DayNumber;

//
// ─── DAY STATUS ────────────────────────────────────────────────────────────────
//

/// Derived per-day state the rendering collaborator draws.
///
/// Completion membership dominates: a day in the completed set is
/// `Completed` even if the unlock frontier later moved past it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DayStatus {
    Locked,
    UnlockedIncomplete,
    Completed,
}

/// Outcome of toggling a day's completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    /// The day was marked complete; `unlocked_day` is the frontier after
    /// the toggle (advanced iff the day was at or past it).
    Marked { unlocked_day: DayNumber },
    /// The day was un-completed. The frontier is never rolled back.
    Cleared,
}

//
// ─── PROGRESS STATE ────────────────────────────────────────────────────────────
//

/// The unlock/completion state machine.
///
/// Tracks which days are completed and the unlock frontier: a day `d` is
/// accessible iff `d <= unlocked_day`. Completing the frontier day (or any
/// day at or past it) advances the frontier to `d + 1`. Un-completing a day
/// removes it from the completed set but deliberately leaves the frontier
/// where it is, so days already unlocked stay unlocked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressState {
    completed: BTreeSet<DayNumber>,
    unlocked_day: DayNumber,
}

impl ProgressState {
    /// First-run state: nothing completed, only day 1 accessible.
    #[must_use]
    pub fn new() -> Self {
        Self {
            completed: BTreeSet::new(),
            unlocked_day: DayNumber::new(1),
        }
    }

    /// Rehydrate from persisted parts.
    ///
    /// The frontier is clamped to day 1; a stored value below that is
    /// treated as absent.
    #[must_use]
    pub fn from_parts(completed: BTreeSet<DayNumber>, unlocked_day: DayNumber) -> Self {
        Self {
            completed,
            unlocked_day: DayNumber::new(unlocked_day.value().max(1)),
        }
    }

    /// Drop completed entries outside the catalog's day range.
    ///
    /// `last_day` is the catalog's highest day, or `None` for an empty
    /// catalog (everything is dropped).
    pub fn sanitize(&mut self, last_day: Option<DayNumber>) {
        match last_day {
            Some(last) => self.completed.retain(|day| *day <= last),
            None => self.completed.clear(),
        }
    }

    // Accessors
    #[must_use]
    pub fn completed_days(&self) -> &BTreeSet<DayNumber> {
        &self.completed
    }

    #[must_use]
    pub fn unlocked_day(&self) -> DayNumber {
        self.unlocked_day
    }

    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.completed.len()
    }

    #[must_use]
    pub fn is_completed(&self, day: DayNumber) -> bool {
        self.completed.contains(&day)
    }

    /// A day is accessible iff it is at or below the unlock frontier.
    #[must_use]
    pub fn is_accessible(&self, day: DayNumber) -> bool {
        day <= self.unlocked_day
    }

    /// Derive the state-machine status for one day.
    #[must_use]
    pub fn status(&self, day: DayNumber) -> DayStatus {
        if self.is_completed(day) {
            DayStatus::Completed
        } else if day > self.unlocked_day {
            DayStatus::Locked
        } else {
            DayStatus::UnlockedIncomplete
        }
    }

    /// Flip a day's completion.
    ///
    /// Marking a day at or past the frontier advances the frontier to the
    /// day after it; un-marking never moves the frontier.
    pub fn toggle(&mut self, day: DayNumber) -> Toggle {
        if self.completed.remove(&day) {
            return Toggle::Cleared;
        }

        self.completed.insert(day);
        if day >= self.unlocked_day {
            self.unlocked_day = day.next();
        }
        Toggle::Marked {
            unlocked_day: self.unlocked_day,
        }
    }

    /// Back to first-run defaults.
    pub fn reset(&mut self) {
        self.completed.clear();
        self.unlocked_day = DayNumber::new(1);
    }
}

impl Default for ProgressState {
    fn default() -> Self {
        Self::new()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    fn day(n: u32) -> DayNumber {
        DayNumber::new(n)
    }

    #[test]
    fn fresh_state_unlocks_only_day_one() {
        let state = ProgressState::new();
        assert_eq!(state.unlocked_day(), day(1));
        assert_eq!(state.completed_count(), 0);
        assert_eq!(state.status(day(1)), DayStatus::UnlockedIncomplete);
        assert_eq!(state.status(day(2)), DayStatus::Locked);
        assert!(state.is_accessible(day(1)));
        assert!(!state.is_accessible(day(2)));
    }

    #[test]
    fn completing_frontier_day_advances_frontier() {
        let mut state = ProgressState::new();
        let outcome = state.toggle(day(1));
        assert_eq!(
            outcome,
            Toggle::Marked {
                unlocked_day: day(2)
            }
        );
        assert_eq!(state.status(day(1)), DayStatus::Completed);
        assert_eq!(state.status(day(2)), DayStatus::UnlockedIncomplete);
    }

    #[test]
    fn completing_earlier_day_leaves_frontier() {
        let mut state = ProgressState::new();
        state.toggle(day(1));
        state.toggle(day(2));
        state.toggle(day(1)); // un-complete
        let outcome = state.toggle(day(1)); // complete again, behind frontier
        assert_eq!(
            outcome,
            Toggle::Marked {
                unlocked_day: day(3)
            }
        );
        assert_eq!(state.unlocked_day(), day(3));
    }

    #[test]
    fn uncompleting_does_not_relock() {
        let mut state = ProgressState::new();
        state.toggle(day(1));
        assert_eq!(state.unlocked_day(), day(2));

        let outcome = state.toggle(day(1));
        assert_eq!(outcome, Toggle::Cleared);
        assert_eq!(state.completed_count(), 0);
        // Day 2 stays unlocked: forgiving by design.
        assert_eq!(state.unlocked_day(), day(2));
        assert_eq!(state.status(day(2)), DayStatus::UnlockedIncomplete);
    }

    #[test]
    fn completed_membership_dominates_status() {
        // A completed day past the frontier still reports Completed.
        let completed = [day(5)].into_iter().collect();
        let state = ProgressState::from_parts(completed, day(2));
        assert_eq!(state.status(day(5)), DayStatus::Completed);
        assert_eq!(state.status(day(3)), DayStatus::Locked);
        assert_eq!(state.status(day(1)), DayStatus::UnlockedIncomplete);
    }

    #[test]
    fn locked_iff_beyond_frontier_and_incomplete() {
        let completed = [day(1), day(3)].into_iter().collect();
        let state = ProgressState::from_parts(completed, day(2));
        for n in 1..=6 {
            let expected = if state.is_completed(day(n)) {
                DayStatus::Completed
            } else if n > 2 {
                DayStatus::Locked
            } else {
                DayStatus::UnlockedIncomplete
            };
            assert_eq!(state.status(day(n)), expected, "day {n}");
        }
    }

    #[test]
    fn frontier_is_monotonic_under_completion() {
        let mut state = ProgressState::new();
        let mut previous = state.unlocked_day();
        for n in 1..=10 {
            state.toggle(day(n));
            assert!(state.unlocked_day() >= previous);
            previous = state.unlocked_day();
        }
        assert_eq!(state.unlocked_day(), day(11));
    }

    #[test]
    fn toggle_twice_restores_completed_set() {
        let mut state = ProgressState::new();
        state.toggle(day(1));
        state.toggle(day(1));
        assert!(!state.is_completed(day(1)));
        assert_eq!(state.completed_count(), 0);
    }

    #[test]
    fn from_parts_clamps_frontier_to_one() {
        let state = ProgressState::from_parts(BTreeSet::new(), day(0));
        assert_eq!(state.unlocked_day(), day(1));
    }

    #[test]
    fn sanitize_drops_days_outside_catalog() {
        let completed = [day(1), day(7), day(40)].into_iter().collect();
        let mut state = ProgressState::from_parts(completed, day(8));
        state.sanitize(Some(day(30)));
        assert!(state.is_completed(day(7)));
        assert!(!state.is_completed(day(40)));

        state.sanitize(None);
        assert_eq!(state.completed_count(), 0);
    }

    #[test]
    fn reset_restores_first_run_defaults() {
        let mut state = ProgressState::new();
        for n in 1..=5 {
            state.toggle(day(n));
        }
        state.reset();
        assert_eq!(state, ProgressState::new());
        assert_eq!(state.status(day(2)), DayStatus::Locked);
    }
}
