//! Selection (working timetable) model.
//!
//! A selection is the set of sections a student currently holds, either
//! built by hand or applied from a generated schedule. It keeps at most one
//! section per (course, component type).
//!
//! # Mutation Rules
//! - Adding a section whose (course, type) is present replaces the old one.
//! - Removing a course drops every section of that course.
//!
//! Conflicts are never stored; [`Selection::conflicts`] recomputes them.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::{Course, Section, SectionType};
use crate::conflict::{detect_conflicts, Conflict};

/// A section together with the course it belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChosenSection {
    /// Owning course code.
    pub course_code: String,
    /// Owning course title.
    pub course_title: String,
    /// Owning course credit value.
    pub credits: Option<f64>,
    /// The section itself.
    pub section: Section,
}

impl ChosenSection {
    /// Pairs a section with its course.
    pub fn new(course: &Course, section: &Section) -> Self {
        Self {
            course_code: course.code.clone(),
            course_title: course.title.clone(),
            credits: course.credits,
            section: section.clone(),
        }
    }

    /// Component type of the section.
    #[inline]
    pub fn section_type(&self) -> SectionType {
        self.section.section_type
    }

    /// Section code.
    #[inline]
    pub fn section_code(&self) -> &str {
        &self.section.code
    }

    /// Whether this occupies the same (course, type) slot as `other`.
    pub fn same_slot(&self, other: &Self) -> bool {
        self.course_code == other.course_code && self.section_type() == other.section_type()
    }
}

/// Total credits of a set of sections, counting each course once.
///
/// Credits are attached to lectures; a course held without a lecture
/// contributes nothing.
pub fn total_credits(sections: &[ChosenSection]) -> f64 {
    let mut seen = HashSet::new();
    sections
        .iter()
        .filter(|s| s.section_type() == SectionType::Lecture)
        .filter(|s| seen.insert(s.course_code.as_str()))
        .map(|s| s.credits.unwrap_or(0.0).max(0.0))
        .sum()
}

/// A student's working set of sections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    sections: Vec<ChosenSection>,
}

impl Selection {
    /// Creates an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a section, replacing any section of the same (course, type).
    pub fn add(&mut self, chosen: ChosenSection) {
        match self.sections.iter_mut().find(|s| s.same_slot(&chosen)) {
            Some(existing) => *existing = chosen,
            None => self.sections.push(chosen),
        }
    }

    /// Replaces the section of the same (course, type) if one is held.
    ///
    /// Returns `false` (and leaves the selection unchanged) otherwise.
    pub fn switch_section(&mut self, chosen: ChosenSection) -> bool {
        match self.sections.iter_mut().find(|s| s.same_slot(&chosen)) {
            Some(existing) => {
                *existing = chosen;
                true
            }
            None => false,
        }
    }

    /// Removes every section of a course. Returns how many were removed.
    pub fn remove_course(&mut self, course_code: &str) -> usize {
        let before = self.sections.len();
        self.sections.retain(|s| s.course_code != course_code);
        before - self.sections.len()
    }

    /// Empties the selection.
    pub fn clear(&mut self) {
        self.sections.clear();
    }

    /// Replaces the whole selection with the given sections.
    ///
    /// Used to apply a generated combination; the usual replacement rule
    /// still holds if the input repeats a (course, type).
    pub fn apply(&mut self, sections: &[ChosenSection]) {
        self.sections.clear();
        for s in sections {
            self.add(s.clone());
        }
    }

    /// Held sections, in insertion order.
    pub fn sections(&self) -> &[ChosenSection] {
        &self.sections
    }

    /// Number of held sections.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Whether nothing is held.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// The held section for a (course, type), if any.
    pub fn get(&self, course_code: &str, section_type: SectionType) -> Option<&ChosenSection> {
        self.sections
            .iter()
            .find(|s| s.course_code == course_code && s.section_type() == section_type)
    }

    /// Distinct course codes, in first-insertion order.
    pub fn course_codes(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.sections
            .iter()
            .map(|s| s.course_code.as_str())
            .filter(|c| seen.insert(*c))
            .collect()
    }

    /// Total credits, each course counted once through its lecture.
    pub fn total_credits(&self) -> f64 {
        total_credits(&self.sections)
    }

    /// Pairwise time conflicts among held sections.
    pub fn conflicts(&self) -> Vec<Conflict> {
        detect_conflicts(&self.sections)
    }
}

impl FromIterator<ChosenSection> for Selection {
    fn from_iter<I: IntoIterator<Item = ChosenSection>>(iter: I) -> Self {
        let mut selection = Selection::new();
        for chosen in iter {
            selection.add(chosen);
        }
        selection
    }
}
