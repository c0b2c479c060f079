//! Course timetable engine.
//!
//! Assembles conflict-free weekly class schedules from a catalog of course
//! offerings and ranks auto-generated candidates against soft preferences.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Course`, `Section`, `Timeslot`, `Weekday`,
//!   `Selection`, `PreferenceWeights`
//! - **`conflict`**: Half-open overlap detection shared by manual selection
//!   and generation
//! - **`linkage`**: Lecture ↔ lab/tutorial companion resolution
//! - **`scoring`**: Preference criteria and weighted 0–100 scoring
//! - **`planner`**: Lazy enumeration, filtering, ranking and summaries
//! - **`catalog`**: JSON catalog loading and course search
//! - **`validation`**: Catalog integrity checks
//!
//! # Example
//!
//! ```
//! use u_timetable::{detect_conflicts, generate_schedules};
//! use u_timetable::models::{ChosenSection, Course, PreferenceWeights, Section, Timeslot, Weekday};
//!
//! let comp = Course::new("COMP2012").with_section(Section::lecture("L1").with_timeslot(
//!     Timeslot::new([Weekday::Monday], "9:00AM", "10:30AM"),
//! ));
//! let math = Course::new("MATH2411").with_section(Section::lecture("L1").with_timeslot(
//!     Timeslot::new([Weekday::Monday], "10:00AM", "11:00AM"),
//! ));
//!
//! let picked = [
//!     ChosenSection::new(&comp, &comp.sections[0]),
//!     ChosenSection::new(&math, &math.sections[0]),
//! ];
//! assert_eq!(detect_conflicts(&picked).len(), 1);
//!
//! let ranked = generate_schedules([&comp, &math], &PreferenceWeights::default());
//! assert!(ranked.is_empty());
//! ```
//!
//! # Logging
//!
//! Emits `tracing` events; installing a subscriber is left to the caller.

pub mod catalog;
pub mod conflict;
pub mod error;
pub mod linkage;
pub mod models;
pub mod planner;
pub mod scoring;
pub mod validation;

pub use conflict::{detect_conflicts, Conflict};
pub use error::{Result, ScheduleError};
pub use planner::generate_schedules;
