//! Section (course component) model.
//!
//! A section is one offered instance of a course component: a lecture, lab,
//! tutorial or other meeting, each with its own timeslots and capacity.
//!
//! # Linkage
//! Labs and tutorials may name the lecture they are tied to through
//! `linked_section`. `None` means the section pairs with any lecture of its
//! course. See [`resolve_companions`](crate::linkage::resolve_companions).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Timeslot;

/// Component type of a section.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SectionType {
    Lecture,
    Lab,
    Tutorial,
    #[default]
    Other,
}

impl fmt::Display for SectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SectionType::Lecture => "LECTURE",
            SectionType::Lab => "LAB",
            SectionType::Tutorial => "TUTORIAL",
            SectionType::Other => "OTHER",
        };
        f.write_str(label)
    }
}

/// One offered instance of a course component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    /// Section code, unique within its course for a component type.
    pub code: String,
    /// Component type.
    #[serde(default)]
    pub section_type: SectionType,
    /// Weekly meeting patterns. Empty = no scheduled time (never conflicts).
    #[serde(default)]
    pub timeslots: Vec<Timeslot>,
    /// Code of the lecture this lab/tutorial is tied to.
    #[serde(default)]
    pub linked_section: Option<String>,
    /// Room label.
    #[serde(default)]
    pub room: String,
    /// Instructor names.
    #[serde(default)]
    pub instructor: String,
    /// Teaching assistants.
    #[serde(default)]
    pub teaching_assistants: String,
    /// Seat quota (display string).
    #[serde(default)]
    pub quota: String,
    /// Enrolled count (display string).
    #[serde(default)]
    pub enrolled: String,
    /// Available seats (display string).
    #[serde(default)]
    pub available: String,
    /// Waitlist count (display string).
    #[serde(default)]
    pub wait: String,
    /// Free-form remarks.
    #[serde(default)]
    pub remarks: String,
}

impl Section {
    /// Creates a section with no timeslots.
    pub fn new(code: impl Into<String>, section_type: SectionType) -> Self {
        Self {
            code: code.into(),
            section_type,
            timeslots: Vec::new(),
            linked_section: None,
            room: String::new(),
            instructor: String::new(),
            teaching_assistants: String::new(),
            quota: String::new(),
            enrolled: String::new(),
            available: String::new(),
            wait: String::new(),
            remarks: String::new(),
        }
    }

    /// Creates a lecture section.
    pub fn lecture(code: impl Into<String>) -> Self {
        Self::new(code, SectionType::Lecture)
    }

    /// Creates a lab section.
    pub fn lab(code: impl Into<String>) -> Self {
        Self::new(code, SectionType::Lab)
    }

    /// Creates a tutorial section.
    pub fn tutorial(code: impl Into<String>) -> Self {
        Self::new(code, SectionType::Tutorial)
    }

    /// Adds a timeslot.
    pub fn with_timeslot(mut self, timeslot: Timeslot) -> Self {
        self.timeslots.push(timeslot);
        self
    }

    /// Ties this section to a lecture code.
    pub fn with_linked_section(mut self, lecture_code: impl Into<String>) -> Self {
        self.linked_section = Some(lecture_code.into());
        self
    }

    /// Sets the instructor.
    pub fn with_instructor(mut self, instructor: impl Into<String>) -> Self {
        self.instructor = instructor.into();
        self
    }

    /// Sets the room.
    pub fn with_room(mut self, room: impl Into<String>) -> Self {
        self.room = room.into();
        self
    }

    /// Sets the capacity figures.
    pub fn with_capacity(
        mut self,
        quota: impl Into<String>,
        enrolled: impl Into<String>,
        available: impl Into<String>,
        wait: impl Into<String>,
    ) -> Self {
        self.quota = quota.into();
        self.enrolled = enrolled.into();
        self.available = available.into();
        self.wait = wait.into();
        self
    }

    /// Whether the section has any scheduled time.
    pub fn has_timeslots(&self) -> bool {
        !self.timeslots.is_empty()
    }

    /// Available seats as a number, if the display string is numeric.
    pub fn available_seats(&self) -> Option<i64> {
        self.available.trim().parse().ok()
    }

    /// Whether the section has no seats left.
    ///
    /// Unknown availability is treated as not full.
    pub fn is_full(&self) -> bool {
        self.available_seats().is_some_and(|n| n <= 0)
    }
}
