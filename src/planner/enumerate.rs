//! Lazy enumeration of candidate schedules.
//!
//! # Algorithm
//!
//! 1. For each course, expand every lecture into its options:
//!    lecture × (one resolved lab or none) × (one resolved tutorial or none).
//! 2. Walk the Cartesian product of the per-course option lists with an
//!    odometer: the last course varies fastest, the first slowest.
//!
//! Only the per-course option lists are materialised; combinations are
//! produced one at a time.
//!
//! # Complexity
//! Π over courses of (Σ over lectures of lab options × tutorial options).
//! The enumerator does not cap this; callers bound the course count.

use tracing::debug;

use crate::linkage::resolve_companions;
use crate::models::{ChosenSection, Course};

/// Expands a course into its self-contained choices (1–3 sections each).
///
/// A course without lectures has no options.
pub fn course_options(course: &Course) -> Vec<Vec<ChosenSection>> {
    let mut options = Vec::new();

    for lecture in course.lectures() {
        let companions = resolve_companions(course, lecture);
        debug!(
            course = %course.code,
            lecture = %lecture.code,
            labs = companions.labs.len(),
            lab_source = ?companions.lab_source,
            tutorials = companions.tutorials.len(),
            tutorial_source = ?companions.tutorial_source,
            "resolved companions"
        );
        for lab in companions.lab_options() {
            for tutorial in companions.tutorial_options() {
                let mut option = vec![ChosenSection::new(course, lecture)];
                option.extend(lab.map(|s| ChosenSection::new(course, s)));
                option.extend(tutorial.map(|s| ChosenSection::new(course, s)));
                options.push(option);
            }
        }
    }

    options
}

/// Iterator over every combination of per-course options.
///
/// Zero courses yields exactly one empty combination. Any course with no
/// options makes the whole product empty.
///
/// # Example
/// ```
/// use u_timetable::models::{Course, Section};
/// use u_timetable::planner::Combinations;
///
/// let a = Course::new("A")
///     .with_section(Section::lecture("L1"))
///     .with_section(Section::lecture("L2"));
/// let b = Course::new("B")
///     .with_section(Section::lecture("L1"))
///     .with_section(Section::lab("LA1").with_linked_section("L1"));
///
/// let combos = Combinations::new([&a, &b]);
/// assert_eq!(combos.total(), 2);
/// assert_eq!(combos.count(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct Combinations {
    options: Vec<Vec<Vec<ChosenSection>>>,
    cursor: Vec<usize>,
    exhausted: bool,
}

impl Combinations {
    /// Prepares enumeration over the given courses.
    pub fn new<'a, I>(courses: I) -> Self
    where
        I: IntoIterator<Item = &'a Course>,
    {
        let options: Vec<Vec<Vec<ChosenSection>>> =
            courses.into_iter().map(course_options).collect();
        let exhausted = options.iter().any(|o| o.is_empty());
        let cursor = vec![0; options.len()];

        Self {
            options,
            cursor,
            exhausted,
        }
    }

    /// Total number of combinations, saturating at `u128::MAX`.
    pub fn total(&self) -> u128 {
        self.options
            .iter()
            .fold(1u128, |acc, o| acc.saturating_mul(o.len() as u128))
    }

    /// Moves the odometer one step; marks exhaustion after the last state.
    fn advance(&mut self) {
        for i in (0..self.cursor.len()).rev() {
            self.cursor[i] += 1;
            if self.cursor[i] < self.options[i].len() {
                return;
            }
            self.cursor[i] = 0;
        }
        self.exhausted = true;
    }
}

impl Iterator for Combinations {
    type Item = Vec<ChosenSection>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }

        let combination: Vec<ChosenSection> = self
            .cursor
            .iter()
            .zip(&self.options)
            .flat_map(|(&i, course)| course[i].iter().cloned())
            .collect();

        self.advance();
        Some(combination)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Section, SectionType};

    fn codes(combo: &[ChosenSection]) -> Vec<String> {
        combo
            .iter()
            .map(|s| format!("{}:{}", s.course_code, s.section_code()))
            .collect()
    }

    #[test]
    fn test_empty_course_list_yields_one_empty_combination() {
        let combos: Vec<_> = Combinations::new(Vec::<&Course>::new()).collect();
        assert_eq!(combos.len(), 1);
        assert!(combos[0].is_empty());
    }

    #[test]
    fn test_single_lecture_with_linked_lab() {
        let course = Course::new("COMP2012")
            .with_section(Section::lecture("L1"))
            .with_section(Section::lab("LA1").with_linked_section("L1"));
        let combos: Vec<_> = Combinations::new([&course]).collect();
        assert_eq!(combos.len(), 1);
        assert_eq!(codes(&combos[0]), vec!["COMP2012:L1", "COMP2012:LA1"]);
    }

    #[test]
    fn test_course_without_lectures_empties_product() {
        let a = Course::new("A").with_section(Section::lecture("L1"));
        let b = Course::new("B").with_section(Section::lab("LA1"));
        let combos = Combinations::new([&a, &b]);
        assert_eq!(combos.total(), 0);
        assert_eq!(combos.count(), 0);
    }

    #[test]
    fn test_fallback_tries_each_lab_separately() {
        let course = Course::new("X")
            .with_section(Section::lecture("L1"))
            .with_section(Section::lab("LA1"))
            .with_section(Section::lab("LA2"))
            .with_section(Section::tutorial("T1").with_linked_section("L1"));
        let combos: Vec<_> = Combinations::new([&course]).collect();
        assert_eq!(combos.len(), 2);
        for combo in &combos {
            let labs = combo
                .iter()
                .filter(|s| s.section_type() == SectionType::Lab)
                .count();
            assert_eq!(labs, 1);
            assert_eq!(combo.len(), 3);
        }
    }

    #[test]
    fn test_cross_product_order_and_size() {
        let a = Course::new("A")
            .with_section(Section::lecture("L1"))
            .with_section(Section::lecture("L2"));
        let b = Course::new("B")
            .with_section(Section::lecture("L1"))
            .with_section(Section::lecture("L2"))
            .with_section(Section::lecture("L3"));

        let combos = Combinations::new([&a, &b]);
        assert_eq!(combos.total(), 6);
        let all: Vec<Vec<String>> = combos.map(|c| codes(&c)).collect();
        assert_eq!(all.len(), 6);
        assert_eq!(all[0], vec!["A:L1", "B:L1"]);
        assert_eq!(all[1], vec!["A:L1", "B:L2"]);
        assert_eq!(all[5], vec!["A:L2", "B:L3"]);
    }

    #[test]
    fn test_course_options_per_lecture() {
        let course = Course::new("X")
            .with_section(Section::lecture("L1"))
            .with_section(Section::lecture("L2"))
            .with_section(Section::lab("LA1").with_linked_section("L1"))
            .with_section(Section::lab("LA2").with_linked_section("L2"))
            .with_section(Section::tutorial("T1"))
            .with_section(Section::tutorial("T2"));
        let options = course_options(&course);
        // Each lecture: 1 linked lab × 2 fallback tutorials.
        assert_eq!(options.len(), 4);
        assert!(options.iter().all(|o| o.len() == 3));
    }
}
