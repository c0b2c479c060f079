//! Integrity checks for course catalogs.
//!
//! The generation pipeline tolerates imperfect data: malformed clocks read
//! as midnight and unmatched linkage falls back to every lab or tutorial.
//! These checks surface such problems up front. Detects:
//! - Duplicate course codes
//! - Duplicate section codes within a course and component type
//! - Empty or inverted timeslots
//! - Unparsable clock strings
//! - Courses without a lecture
//! - Lab/tutorial linkage that matches no lecture
//!
//! Every problem is collected; validation does not stop at the first.

use std::collections::HashSet;

use thiserror::Error;

use crate::linkage::is_linked;
use crate::models::{parse_clock, Course, Section, SectionType};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two courses share the same code.
    DuplicateCourseCode,
    /// Two sections of one course and type share the same code.
    DuplicateSectionCode,
    /// A timeslot has no days or does not end after it starts.
    InvalidTimeslot,
    /// A clock string does not match `H:MM` + `AM`/`PM`.
    MalformedClockTime,
    /// A course offers no lecture, so it can never be scheduled.
    MissingLecture,
    /// A lab or tutorial references a lecture that does not exist.
    DanglingLinkage,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a course catalog.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
///
/// # Example
/// ```
/// use u_timetable::models::{Course, Section};
/// use u_timetable::validation::{validate_catalog, ValidationErrorKind};
///
/// let courses = vec![
///     Course::new("COMP2012")
///         .with_section(Section::lecture("L1"))
///         .with_section(Section::lab("LA1").with_linked_section("L9")),
/// ];
/// let errors = validate_catalog(&courses).unwrap_err();
/// assert_eq!(errors[0].kind, ValidationErrorKind::DanglingLinkage);
/// ```
pub fn validate_catalog(courses: &[Course]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut course_codes = HashSet::new();

    for course in courses {
        if !course_codes.insert(course.code.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateCourseCode,
                format!("Duplicate course code: {}", course.code),
            ));
        }

        if course.lectures().next().is_none() {
            errors.push(ValidationError::new(
                ValidationErrorKind::MissingLecture,
                format!("Course '{}' has no lecture section", course.code),
            ));
        }

        let mut section_keys = HashSet::new();
        for section in &course.sections {
            if !section_keys.insert((section.section_type, section.code.as_str())) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::DuplicateSectionCode,
                    format!(
                        "Course '{}' repeats {} section '{}'",
                        course.code, section.section_type, section.code
                    ),
                ));
            }
            check_timeslots(course, section, &mut errors);
        }

        check_linkage(course, &mut errors);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_timeslots(course: &Course, section: &Section, errors: &mut Vec<ValidationError>) {
    for slot in &section.timeslots {
        let mut clocks_ok = true;
        for clock in [slot.start_time(), slot.end_time()] {
            if parse_clock(clock).is_none() {
                clocks_ok = false;
                errors.push(ValidationError::new(
                    ValidationErrorKind::MalformedClockTime,
                    format!(
                        "Section '{}' of '{}' has malformed clock time '{}'",
                        section.code, course.code, clock
                    ),
                ));
            }
        }

        // A malformed clock already reads as midnight; do not report it twice.
        if clocks_ok && !slot.is_well_formed() {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidTimeslot,
                format!(
                    "Section '{}' of '{}' has an empty or inverted timeslot {}-{}",
                    section.code,
                    course.code,
                    slot.start_time(),
                    slot.end_time()
                ),
            ));
        }
    }
}

fn check_linkage(course: &Course, errors: &mut Vec<ValidationError>) {
    let companions = course
        .sections
        .iter()
        .filter(|s| matches!(s.section_type, SectionType::Lab | SectionType::Tutorial));

    for section in companions {
        let Some(reference) = section.linked_section.as_deref() else {
            continue;
        };
        if !course
            .lectures()
            .any(|lecture| is_linked(Some(reference), &lecture.code))
        {
            errors.push(ValidationError::new(
                ValidationErrorKind::DanglingLinkage,
                format!(
                    "Section '{}' of '{}' links to unknown lecture '{}'",
                    section.code, course.code, reference
                ),
            ));
        }
    }
}
