use thiserror::Error;

use crate::domain::ScheduleError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Cannot read sheet file '{path}': {source}")]
    SheetIo {
        path: String,
        source: std::io::Error,
    },

    #[error("Sheet file '{path}' is not valid JSON: {source}")]
    SheetParse {
        path: String,
        source: serde_json::Error,
    },

    #[error("Invalid schedule for transfer '{description}': {source}")]
    InvalidSchedule {
        description: String,
        source: ScheduleError,
    },

    #[error("Invalid amount '{amount}' for transfer '{description}': {reason}")]
    InvalidAmount {
        description: String,
        amount: String,
        reason: String,
    },

    #[error("Invalid weekday {weekday} for transfer '{description}': must be 0 (Sunday) to 6 (Saturday)")]
    InvalidWeekday { description: String, weekday: u32 },

    #[error("Invalid date '{date}' for transfer '{description}': use YYYY-MM-DD")]
    InvalidDate { description: String, date: String },
}
