//! Lecture ↔ lab/tutorial linkage resolution.
//!
//! Catalogs tie labs and tutorials to a lecture with a free-form reference
//! such as `"L1"`, `"L1 (2213)"` or `"l1"`. Resolution decides, for one
//! lecture, which labs and tutorials may accompany it.
//!
//! # Matching
//! A reference matches a lecture code if either
//! 1. both are equal after upper-casing and removing whitespace and
//!    parentheses, or
//! 2. both start with the same `letters+digits` token, read before any
//!    parenthesised suffix (`"L1(2213)"` → `"L1"`).
//!
//! # Policy
//! - Some labs link to the lecture → only those are candidates.
//! - Labs exist but none links to it → every lab is a candidate (fallback
//!   for inconsistently linked catalogs).
//! - No labs → the only option is "no lab".
//!
//! Tutorials follow the same policy independently.

use regex::Regex;
use std::sync::LazyLock;

use crate::models::{Course, Section, SectionType};

static LEADING_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]+[0-9]+").unwrap());

/// Upper-cases a section code and strips whitespace and parentheses.
pub fn normalize_section_code(code: &str) -> String {
    code.chars()
        .filter(|c| !c.is_whitespace() && *c != '(' && *c != ')')
        .flat_map(char::to_uppercase)
        .collect()
}

/// Leading `letters+digits` token of an upper-cased, trimmed code.
fn leading_token(code: &str) -> Option<String> {
    let upper = code.trim().to_uppercase();
    LEADING_TOKEN.find(&upper).map(|m| m.as_str().to_string())
}

/// Whether a linkage reference points at the given lecture code.
///
/// A missing or blank reference links to nothing.
///
/// # Examples
///
/// ```
/// use u_timetable::linkage::is_linked;
///
/// assert!(is_linked(Some("L1(2213)"), "L1"));
/// assert!(is_linked(Some(" l1 "), "L1"));
/// assert!(!is_linked(Some("L10"), "L1"));
/// assert!(!is_linked(None, "L1"));
/// ```
pub fn is_linked(reference: Option<&str>, lecture_code: &str) -> bool {
    let Some(reference) = reference.filter(|r| !r.trim().is_empty()) else {
        return false;
    };

    if normalize_section_code(reference) == normalize_section_code(lecture_code) {
        return true;
    }

    match (leading_token(reference), leading_token(lecture_code)) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

/// Which policy branch produced a candidate list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompanionSource {
    /// Sections declaring linkage to the lecture (mandatory pairing).
    Linked,
    /// No section links to the lecture; all sections of the type are offered.
    Fallback,
    /// The course has no section of this type.
    Absent,
}

/// Candidate labs and tutorials for one lecture.
#[derive(Debug, Clone)]
pub struct Companions<'a> {
    /// Candidate labs (empty when the course has none).
    pub labs: Vec<&'a Section>,
    /// How `labs` was chosen.
    pub lab_source: CompanionSource,
    /// Candidate tutorials (empty when the course has none).
    pub tutorials: Vec<&'a Section>,
    /// How `tutorials` was chosen.
    pub tutorial_source: CompanionSource,
}

impl<'a> Companions<'a> {
    /// Lab choices for enumeration; `[None]` when the course has no labs.
    pub fn lab_options(&self) -> Vec<Option<&'a Section>> {
        as_options(&self.labs)
    }

    /// Tutorial choices for enumeration; `[None]` when the course has no tutorials.
    pub fn tutorial_options(&self) -> Vec<Option<&'a Section>> {
        as_options(&self.tutorials)
    }
}

fn as_options<'a>(sections: &[&'a Section]) -> Vec<Option<&'a Section>> {
    if sections.is_empty() {
        vec![None]
    } else {
        sections.iter().copied().map(Some).collect()
    }
}

/// Resolves the labs and tutorials that may accompany `lecture`.
pub fn resolve_companions<'a>(course: &'a Course, lecture: &Section) -> Companions<'a> {
    let (labs, lab_source) = resolve_type(course, SectionType::Lab, lecture);
    let (tutorials, tutorial_source) = resolve_type(course, SectionType::Tutorial, lecture);

    Companions {
        labs,
        lab_source,
        tutorials,
        tutorial_source,
    }
}

fn resolve_type<'a>(
    course: &'a Course,
    section_type: SectionType,
    lecture: &Section,
) -> (Vec<&'a Section>, CompanionSource) {
    let all: Vec<&Section> = course.sections_of(section_type).collect();
    if all.is_empty() {
        return (all, CompanionSource::Absent);
    }

    let linked: Vec<&Section> = all
        .iter()
        .copied()
        .filter(|s| is_linked(s.linked_section.as_deref(), &lecture.code))
        .collect();

    if linked.is_empty() {
        (all, CompanionSource::Fallback)
    } else {
        (linked, CompanionSource::Linked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_section_code() {
        assert_eq!(normalize_section_code(" l1 (2213) "), "L12213");
        assert_eq!(normalize_section_code("LA1"), "LA1");
        assert_eq!(normalize_section_code(""), "");
    }

    #[test]
    fn test_is_linked_variants() {
        assert!(is_linked(Some("L1"), "L1"));
        assert!(is_linked(Some("L1 (2213)"), "L1(2213)"));
        assert!(is_linked(Some("L1(2213)"), "L1"));
        assert!(is_linked(Some("L1"), "L1 (1001)"));
        assert!(!is_linked(Some("L2"), "L1"));
        assert!(!is_linked(Some("L12"), "L1"));
        assert!(!is_linked(Some("   "), "L1"));
        assert!(!is_linked(Some("TBA"), "L1"));
    }

    fn course_with_labs() -> Course {
        Course::new("COMP1021")
            .with_section(Section::lecture("L1"))
            .with_section(Section::lecture("L2"))
            .with_section(Section::lab("LA1").with_linked_section("L1(2213)"))
            .with_section(Section::lab("LA2").with_linked_section("L2(2214)"))
            .with_section(Section::lab("LA3"))
    }

    #[test]
    fn test_linked_lab_is_sole_candidate() {
        let course = course_with_labs();
        let lecture = course.section("L1", SectionType::Lecture).unwrap();
        let c = resolve_companions(&course, lecture);

        let codes: Vec<&str> = c.labs.iter().map(|s| s.code.as_str()).collect();
        assert_eq!(codes, vec!["LA1"]);
        assert_eq!(c.lab_source, CompanionSource::Linked);
    }

    #[test]
    fn test_multiple_linked_labs_all_offered() {
        let course = Course::new("X")
            .with_section(Section::lecture("L1"))
            .with_section(Section::lab("LA1").with_linked_section("L1"))
            .with_section(Section::lab("LA2").with_linked_section("L1"))
            .with_section(Section::lab("LA3").with_linked_section("L2"));
        let c = resolve_companions(&course, &course.sections[0]);
        assert_eq!(c.labs.len(), 2);
        assert_eq!(c.lab_options().len(), 2);
    }

    #[test]
    fn test_fallback_offers_all_labs() {
        let course = Course::new("X")
            .with_section(Section::lecture("L3"))
            .with_section(Section::lab("LA1").with_linked_section("L1"))
            .with_section(Section::lab("LA2"));
        let c = resolve_companions(&course, &course.sections[0]);
        assert_eq!(c.lab_source, CompanionSource::Fallback);
        assert_eq!(c.labs.len(), 2);
    }

    #[test]
    fn test_absent_type_yields_none_option() {
        let course = Course::new("X").with_section(Section::lecture("L1"));
        let c = resolve_companions(&course, &course.sections[0]);
        assert_eq!(c.lab_source, CompanionSource::Absent);
        assert_eq!(c.tutorial_source, CompanionSource::Absent);
        assert_eq!(c.lab_options(), vec![None]);
        assert_eq!(c.tutorial_options(), vec![None]);
    }

    #[test]
    fn test_tutorials_resolved_independently() {
        let course = Course::new("X")
            .with_section(Section::lecture("L1"))
            .with_section(Section::lab("LA1").with_linked_section("L1"))
            .with_section(Section::tutorial("T1"))
            .with_section(Section::tutorial("T2"));
        let c = resolve_companions(&course, &course.sections[0]);
        assert_eq!(c.lab_source, CompanionSource::Linked);
        assert_eq!(c.tutorial_source, CompanionSource::Fallback);
        assert_eq!(c.tutorials.len(), 2);
    }
}
