//! Time-conflict detection.
//!
//! One overlap predicate backs both manual planning ([`detect_conflicts`])
//! and generated-schedule filtering ([`is_valid`]), so a combination the
//! generator accepts never shows a conflict once applied to a selection.
//!
//! # Overlap Rule
//! Two sections conflict iff some pair of their timeslots shares a weekday
//! and the half-open minute windows intersect. A section with no timeslots
//! never conflicts.

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::models::{ChosenSection, Section, Weekday};

/// A pairwise overlap between two held sections.
///
/// The pair is stored in a canonical order (by course code, then section
/// code), so the record does not depend on which section was added first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conflict {
    /// Course code of the first section.
    pub first_course: String,
    /// Code of the first section.
    pub first_section: String,
    /// Course code of the second section.
    pub second_course: String,
    /// Code of the second section.
    pub second_section: String,
    /// Human-readable description.
    pub reason: String,
}

impl Conflict {
    fn between(a: &ChosenSection, b: &ChosenSection, days: &[Weekday]) -> Self {
        let key = |s: &ChosenSection| (s.course_code.clone(), s.section.code.clone());
        let (first, second) = if key(a) <= key(b) { (a, b) } else { (b, a) };
        let day_list = days.iter().map(|d| d.name()).join(", ");

        Self {
            first_course: first.course_code.clone(),
            first_section: first.section.code.clone(),
            second_course: second.course_code.clone(),
            second_section: second.section.code.clone(),
            reason: format!("Time overlap on {day_list}"),
        }
    }

    /// Whether this conflict involves the given course.
    pub fn involves(&self, course_code: &str) -> bool {
        self.first_course == course_code || self.second_course == course_code
    }
}

/// Whether any timeslot of `a` overlaps any timeslot of `b` on a shared day.
///
/// Stops at the first overlapping pair.
pub fn sections_overlap(a: &Section, b: &Section) -> bool {
    a.timeslots
        .iter()
        .cartesian_product(b.timeslots.iter())
        .any(|(x, y)| x.overlaps(y))
}

/// Weekdays on which `a` and `b` overlap, Monday first, without duplicates.
///
/// Empty iff [`sections_overlap`] is false.
pub fn overlapping_days(a: &Section, b: &Section) -> Vec<Weekday> {
    a.timeslots
        .iter()
        .cartesian_product(b.timeslots.iter())
        .filter(|(x, y)| x.overlaps(y))
        .flat_map(|(x, y)| x.common_days(y))
        .sorted()
        .dedup()
        .collect()
}

/// Scans every pair of sections and reports each overlapping pair once.
///
/// The result is sorted, so it is the same for any insertion order of the
/// input.
///
/// # Complexity
/// O(k² · t²) for k sections with up to t timeslots each.
///
/// # Examples
///
/// ```
/// use u_timetable::conflict::detect_conflicts;
/// use u_timetable::models::{ChosenSection, Course, Section, Timeslot, Weekday};
///
/// let a = Course::new("A").with_section(
///     Section::lecture("L1").with_timeslot(Timeslot::new([Weekday::Monday], "9:00AM", "10:30AM")),
/// );
/// let b = Course::new("B").with_section(
///     Section::lecture("L1").with_timeslot(Timeslot::new([Weekday::Monday], "10:00AM", "11:00AM")),
/// );
/// let held = vec![
///     ChosenSection::new(&a, &a.sections[0]),
///     ChosenSection::new(&b, &b.sections[0]),
/// ];
///
/// let conflicts = detect_conflicts(&held);
/// assert_eq!(conflicts.len(), 1);
/// assert!(conflicts[0].reason.contains("Monday"));
/// ```
pub fn detect_conflicts(sections: &[ChosenSection]) -> Vec<Conflict> {
    sections
        .iter()
        .tuple_combinations()
        .filter_map(|(a, b)| {
            let days = overlapping_days(&a.section, &b.section);
            (!days.is_empty()).then(|| Conflict::between(a, b, &days))
        })
        .sorted_by(|x, y| {
            (&x.first_course, &x.first_section, &x.second_course, &x.second_section).cmp(&(
                &y.first_course,
                &y.first_section,
                &y.second_course,
                &y.second_section,
            ))
        })
        .collect()
}

/// Whether no two sections of a combination overlap.
///
/// Pairwise over the whole combination; invalid combinations are dropped
/// before scoring.
pub fn is_valid(combination: &[ChosenSection]) -> bool {
    !combination
        .iter()
        .tuple_combinations()
        .any(|(a, b)| sections_overlap(&a.section, &b.section))
}
