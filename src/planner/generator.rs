//! Schedule generation pipeline.
//!
//! # Algorithm
//!
//! 1. Enumerate combinations lazily ([`Combinations`]).
//! 2. Drop every combination with an internal overlap.
//! 3. Score the survivors against the preference weights.
//! 4. Rank by descending score.
//!
//! # Complexity
//! O(N × k²) where N = combination count and k = sections per combination.
//! N grows exponentially with the number of courses; [`ScheduleGenerator`]
//! bounds the course count before any enumeration happens.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::enumerate::Combinations;
use super::ranker::{RankedSchedules, ScheduleCombination};
use crate::conflict::is_valid;
use crate::error::{Result, ScheduleError};
use crate::models::{Course, PreferenceWeights};
use crate::scoring::PreferenceScorer;

/// Default upper bound on courses per generation request.
pub const DEFAULT_MAX_COURSES: usize = 6;
/// Default number of ranked schedules shown to the user.
pub const DEFAULT_DISPLAY_LIMIT: usize = 10;

/// Generates every conflict-free schedule for the given courses, best first.
///
/// Unbounded: the caller is responsible for keeping the course count small.
/// Zero courses produce a single empty schedule; courses that cannot be
/// combined without overlap produce an empty ranking.
///
/// # Example
/// ```
/// use u_timetable::generate_schedules;
/// use u_timetable::models::{Course, PreferenceWeights, Section, Timeslot, Weekday};
///
/// let course = Course::new("COMP2012")
///     .with_section(Section::lecture("L1").with_timeslot(Timeslot::new(
///         [Weekday::Monday, Weekday::Wednesday],
///         "10:30AM",
///         "11:50AM",
///     )))
///     .with_section(Section::lab("LA1").with_linked_section("L1(2213)"));
///
/// let ranked = generate_schedules([&course], &PreferenceWeights::default());
/// assert_eq!(ranked.len(), 1);
/// assert_eq!(ranked.best().unwrap().sections.len(), 2);
/// ```
pub fn generate_schedules<'a, I>(courses: I, preferences: &PreferenceWeights) -> RankedSchedules
where
    I: IntoIterator<Item = &'a Course>,
{
    let scorer = PreferenceScorer::from_weights(preferences);
    let combinations = Combinations::new(courses);
    let total = combinations.total();

    let mut rejected = 0usize;
    let mut scored = Vec::new();
    for sections in combinations {
        if !is_valid(&sections) {
            rejected += 1;
            continue;
        }
        let (score, breakdown) = scorer.score(&sections);
        scored.push(ScheduleCombination {
            sections,
            score,
            breakdown,
        });
    }

    info!(
        total,
        valid = scored.len(),
        rejected,
        "generated schedules"
    );

    RankedSchedules::new(scored)
}

/// Limits applied around generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlannerConfig {
    /// Largest accepted course count per request.
    pub max_courses: usize,
    /// How many ranked schedules to surface.
    pub display_limit: usize,
}

impl PlannerConfig {
    /// Sets the maximum course count.
    pub fn with_max_courses(mut self, max_courses: usize) -> Self {
        self.max_courses = max_courses;
        self
    }

    /// Sets the display limit.
    pub fn with_display_limit(mut self, display_limit: usize) -> Self {
        self.display_limit = display_limit;
        self
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            max_courses: DEFAULT_MAX_COURSES,
            display_limit: DEFAULT_DISPLAY_LIMIT,
        }
    }
}

/// Guarded front end to [`generate_schedules`].
///
/// Validates the preference weights and the course count, then runs the
/// unbounded core.
///
/// # Example
/// ```
/// use u_timetable::planner::{PlannerConfig, ScheduleGenerator};
/// use u_timetable::models::{Course, Section};
/// use u_timetable::ScheduleError;
///
/// let generator = ScheduleGenerator::new()
///     .with_config(PlannerConfig::default().with_max_courses(1));
///
/// let a = Course::new("A").with_section(Section::lecture("L1"));
/// let b = Course::new("B").with_section(Section::lecture("L1"));
///
/// assert!(generator.plan([&a]).is_ok());
/// assert!(matches!(
///     generator.plan([&a, &b]),
///     Err(ScheduleError::TooManyCourses { requested: 2, max: 1 })
/// ));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScheduleGenerator {
    config: PlannerConfig,
    weights: PreferenceWeights,
}

impl ScheduleGenerator {
    /// Creates a generator with default limits and weights.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the limits.
    pub fn with_config(mut self, config: PlannerConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the preference weights.
    pub fn with_weights(mut self, weights: PreferenceWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Current limits.
    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Current preference weights.
    pub fn weights(&self) -> &PreferenceWeights {
        &self.weights
    }

    /// Rejects empty and oversized requests.
    pub fn check_request(&self, course_count: usize) -> Result<()> {
        if course_count == 0 {
            warn!("rejected generation request without courses");
            return Err(ScheduleError::NoCourses);
        }
        if course_count > self.config.max_courses {
            warn!(
                requested = course_count,
                max = self.config.max_courses,
                "rejected oversized generation request"
            );
            return Err(ScheduleError::TooManyCourses {
                requested: course_count,
                max: self.config.max_courses,
            });
        }
        Ok(())
    }

    /// Validates the request and generates ranked schedules.
    pub fn plan<'a, I>(&self, courses: I) -> Result<RankedSchedules>
    where
        I: IntoIterator<Item = &'a Course>,
    {
        self.weights.validate()?;
        let courses: Vec<&Course> = courses.into_iter().collect();
        self.check_request(courses.len())?;
        Ok(generate_schedules(courses, &self.weights))
    }

    /// The schedules worth showing, bounded by the display limit.
    pub fn shortlist<'r>(&self, ranked: &'r RankedSchedules) -> &'r [ScheduleCombination] {
        ranked.top(self.config.display_limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Section, Timeslot, Weekday};
    use crate::scoring::NEUTRAL_SCORE;
    use tracing_test::traced_test;

    fn lecture(code: &str, days: &[Weekday], start: &str, end: &str) -> Section {
        Section::lecture(code).with_timeslot(Timeslot::new(days.iter().copied(), start, end))
    }

    fn keys(schedule: &ScheduleCombination) -> Vec<String> {
        schedule
            .sections
            .iter()
            .map(|s| format!("{}:{}", s.course_code, s.section_code()))
            .collect()
    }

    /// Two courses, each with a Monday-only and a two-day lecture.
    fn two_courses() -> (Course, Course) {
        let a = Course::new("A")
            .with_section(lecture("L1", &[Weekday::Monday], "9:00AM", "10:20AM"))
            .with_section(lecture(
                "L2",
                &[Weekday::Tuesday, Weekday::Thursday],
                "1:30PM",
                "2:50PM",
            ));
        let b = Course::new("B")
            .with_section(lecture("L1", &[Weekday::Monday], "10:30AM", "11:50AM"))
            .with_section(lecture(
                "L2",
                &[Weekday::Wednesday, Weekday::Friday],
                "3:00PM",
                "4:20PM",
            ));
        (a, b)
    }

    #[test]
    fn test_empty_request_yields_one_empty_schedule() {
        let ranked = generate_schedules(Vec::<&Course>::new(), &PreferenceWeights::default());
        assert_eq!(ranked.len(), 1);
        assert!(ranked.best().unwrap().sections.is_empty());
    }

    #[test]
    fn test_linked_lab_requested_alone() {
        let course = Course::new("COMP2012")
            .with_section(lecture("L1", &[Weekday::Monday], "9:00AM", "10:20AM"))
            .with_section(Section::lab("LA1").with_linked_section("L1(2213)"))
            .with_section(Section::lab("LA2").with_linked_section("L2"));
        let ranked = generate_schedules([&course], &PreferenceWeights::default());
        assert_eq!(ranked.len(), 1);
        assert_eq!(
            keys(ranked.best().unwrap()),
            vec!["COMP2012:L1", "COMP2012:LA1"]
        );
    }

    #[test]
    fn test_overlapping_courses_are_filtered() {
        let a = Course::new("A").with_section(lecture("L1", &[Weekday::Monday], "9:00AM", "10:30AM"));
        let b = Course::new("B").with_section(lecture("L1", &[Weekday::Monday], "10:00AM", "11:00AM"));
        let ranked = generate_schedules([&a, &b], &PreferenceWeights::default());
        assert!(ranked.is_empty());
    }

    #[test]
    fn test_touching_sections_are_kept() {
        let a = Course::new("A").with_section(lecture("L1", &[Weekday::Monday], "9:00AM", "10:00AM"));
        let b = Course::new("B").with_section(lecture("L1", &[Weekday::Monday], "10:00AM", "11:00AM"));
        let ranked = generate_schedules([&a, &b], &PreferenceWeights::default());
        assert_eq!(ranked.len(), 1);
    }

    #[test]
    fn test_generation_is_idempotent() {
        let (a, b) = two_courses();
        let weights = PreferenceWeights::default();
        let first = generate_schedules([&a, &b], &weights);
        let second = generate_schedules([&a, &b], &weights);
        assert_eq!(first, second);
    }

    #[test]
    fn test_ranked_best_first() {
        let (a, b) = two_courses();
        let ranked = generate_schedules([&a, &b], &PreferenceWeights::default());
        assert_eq!(ranked.len(), 4);
        let scores: Vec<f64> = ranked.iter().map(|s| s.score).collect();
        assert!(scores.windows(2).all(|w| w[0] >= w[1]));
        assert!(scores.iter().all(|s| (0.0..=100.0).contains(s)));
    }

    #[test]
    fn test_days_off_weight_favours_fewer_days() {
        let (a, b) = two_courses();
        let rank_of_monday_only = |weights: &PreferenceWeights| {
            let ranked = generate_schedules([&a, &b], weights);
            ranked
                .iter()
                .position(|s| keys(s) == vec!["A:L1", "B:L1"])
                .unwrap()
        };

        let base = PreferenceWeights::zero().with_minimize_gaps(2);
        let low = rank_of_monday_only(&base.with_days_off(1));
        let high = rank_of_monday_only(&base.with_days_off(10));
        assert!(high <= low);
        assert_eq!(high, 0);

        // A:L2 + B:L2 meets four days; it falls further behind as the weight rises.
        let spread = |weights: &PreferenceWeights| {
            let ranked = generate_schedules([&a, &b], weights);
            let score_of = |key: [&str; 2]| {
                ranked
                    .iter()
                    .find(|s| keys(s) == key)
                    .map(|s| s.score)
                    .unwrap()
            };
            score_of(["A:L1", "B:L1"]) - score_of(["A:L2", "B:L2"])
        };
        assert!(spread(&base.with_days_off(10)) > spread(&base.with_days_off(1)));
    }

    #[test]
    fn test_zero_weights_rank_everything_neutral() {
        let (a, b) = two_courses();
        let ranked = generate_schedules([&a, &b], &PreferenceWeights::zero());
        assert_eq!(ranked.len(), 4);
        assert!(ranked.iter().all(|s| s.score == NEUTRAL_SCORE));
    }

    #[test]
    #[traced_test]
    fn test_generation_logs_summary() {
        let (a, b) = two_courses();
        generate_schedules([&a, &b], &PreferenceWeights::default());
        assert!(logs_contain("generated schedules"));
        assert!(logs_contain("valid=4"));
    }

    #[test]
    fn test_check_request_bounds() {
        let generator = ScheduleGenerator::new();
        assert!(matches!(
            generator.check_request(0),
            Err(ScheduleError::NoCourses)
        ));
        assert!(generator.check_request(DEFAULT_MAX_COURSES).is_ok());
        assert!(matches!(
            generator.check_request(DEFAULT_MAX_COURSES + 1),
            Err(ScheduleError::TooManyCourses { requested: 7, max: 6 })
        ));
    }

    #[test]
    fn test_plan_rejects_invalid_weights() {
        let (a, _) = two_courses();
        let mut weights = PreferenceWeights::default();
        weights.days_off = 11;
        let generator = ScheduleGenerator::new().with_weights(weights);
        assert!(matches!(
            generator.plan([&a]),
            Err(ScheduleError::WeightOutOfRange { name: "daysOff", .. })
        ));
    }

    #[test]
    #[traced_test]
    fn test_plan_empty_request_is_rejected() {
        let generator = ScheduleGenerator::new();
        assert!(generator.plan(Vec::<&Course>::new()).is_err());
        assert!(logs_contain("rejected generation request without courses"));
    }

    #[test]
    fn test_shortlist_respects_display_limit() {
        let (a, b) = two_courses();
        let generator =
            ScheduleGenerator::new().with_config(PlannerConfig::default().with_display_limit(3));
        let ranked = generator.plan([&a, &b]).unwrap();
        assert_eq!(ranked.len(), 4);
        assert_eq!(generator.shortlist(&ranked).len(), 3);
    }

    #[test]
    fn test_config_deserializes_with_defaults() {
        let config: PlannerConfig = serde_json::from_str(r#"{"maxCourses": 4}"#).unwrap();
        assert_eq!(config.max_courses, 4);
        assert_eq!(config.display_limit, DEFAULT_DISPLAY_LIMIT);
    }
}
