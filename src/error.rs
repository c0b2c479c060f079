//! Crate-level error type.

use thiserror::Error;

/// Errors raised at the edges of the timetable engine.
///
/// The generation pipeline itself never fails: malformed clock strings
/// degrade to midnight and "no valid schedule" is an empty result. These
/// errors cover caller-facing guards and catalog parsing.
#[derive(Debug, Error)]
pub enum ScheduleError {
    /// A preference weight is outside the accepted slider range.
    #[error("weight '{name}' must be between 0 and {max}, got {value}")]
    WeightOutOfRange {
        name: &'static str,
        value: u8,
        max: u8,
    },

    /// Generation was requested without any course.
    #[error("no courses requested")]
    NoCourses,

    /// More courses were requested than the planner allows.
    #[error("too many courses requested: {requested} (at most {max})")]
    TooManyCourses { requested: usize, max: usize },

    /// A course code is not present in the catalog.
    #[error("unknown course code: {0}")]
    UnknownCourse(String),

    /// A weekday label could not be recognised.
    #[error("unknown weekday: {0}")]
    UnknownWeekday(String),

    /// The catalog payload is not valid JSON for the course model.
    #[error("malformed catalog: {0}")]
    Catalog(#[from] serde_json::Error),
}

/// Result alias for fallible timetable operations.
pub type Result<T> = std::result::Result<T, ScheduleError>;
