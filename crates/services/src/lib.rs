#![forbid(unsafe_code)]

pub mod app_services;
pub mod calendar;
pub mod error;

pub use app_services::AppServices;
pub use calendar::{
    CalendarService, DayCardState, DayDetail, ProgressSummary, ToggleResult, parse_catalog,
};
pub use error::{AppServicesError, CalendarError, CatalogParseError};
