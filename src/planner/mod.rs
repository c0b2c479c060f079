//! Schedule enumeration, filtering, scoring and ranking.
//!
//! # Pipeline
//!
//! ```text
//! courses → Combinations → is_valid → PreferenceScorer → RankedSchedules
//! ```
//!
//! [`generate_schedules`] runs the pipeline without limits.
//! [`ScheduleGenerator`] wraps it with request checks driven by
//! [`PlannerConfig`]. [`ScheduleSummary`] describes any set of chosen
//! sections, generated or hand-picked.
//!
//! # Complexity
//!
//! Combination count is the product of per-course option counts, so it grows
//! exponentially with the number of requested courses. Enumeration is lazy;
//! only valid combinations are kept in memory.

mod enumerate;
mod generator;
mod ranker;
mod summary;

pub use enumerate::{course_options, Combinations};
pub use generator::{
    generate_schedules, PlannerConfig, ScheduleGenerator, DEFAULT_DISPLAY_LIMIT,
    DEFAULT_MAX_COURSES,
};
pub use ranker::{RankedSchedules, ScheduleCombination};
pub use summary::ScheduleSummary;
