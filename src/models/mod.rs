//! Timetable domain models.
//!
//! Provides the data types shared by manual selection and automatic
//! generation: catalog data (courses, sections, timeslots), the student's
//! selection, and preference weights.
//!
//! # Domain Mappings
//!
//! | u-timetable | Catalog term | Example |
//! |-------------|--------------|---------|
//! | Course | Course offering | COMP2012 |
//! | Section | Class component | L1, LA1, T1 |
//! | Timeslot | Meeting pattern | Mon/Wed 9:00AM-10:20AM |
//! | Selection | Timetable | One section per (course, type) |

mod course;
mod preferences;
mod section;
mod selection;
mod time;

pub use course::Course;
pub use preferences::{PreferenceWeights, MAX_WEIGHT};
pub use section::{Section, SectionType};
pub use selection::{total_credits, ChosenSection, Selection};
pub use time::{parse_clock, to_minutes, windows_by_day, Minutes, TimeWindow, Timeslot, Weekday};
