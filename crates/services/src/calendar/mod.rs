mod catalog;
mod service;
mod view;

// Public API of the calendar subsystem.
pub use crate::error::CalendarError;
pub use catalog::parse_catalog;
pub use service::{CalendarService, ToggleResult};
pub use view::{DayCardState, DayDetail, ProgressSummary};
