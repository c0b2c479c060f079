//! Descriptive metrics of a schedule.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Total credits | Sum of course credits, each course once |
//! | Days used | Distinct weekdays with at least one meeting |
//! | Days off | Weekdays without any meeting |
//! | Weekly minutes | Sum of meeting durations over every (timeslot, day) |
//! | Earliest start | Earliest meeting start across the week |
//! | Latest end | Latest meeting end across the week |
//! | Idle gap minutes | Sum of same-day gaps between consecutive meetings |
//!
//! Unlike the preference criteria these values are not capped or weighted.

use serde::Serialize;

use crate::models::{total_credits, windows_by_day, ChosenSection, Minutes, Weekday};

/// Schedule summary figures.
///
/// All time values are minutes since midnight or minute counts.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleSummary {
    /// Credits, each course counted once.
    pub total_credits: f64,
    /// Weekdays with classes, Monday first.
    pub days_used: Vec<Weekday>,
    /// Weekdays without classes.
    pub days_off: usize,
    /// Weekly class time.
    pub weekly_minutes: Minutes,
    /// Earliest start of any meeting.
    pub earliest_start: Option<Minutes>,
    /// Latest end of any meeting.
    pub latest_end: Option<Minutes>,
    /// Total same-day idle time between meetings.
    pub idle_gap_minutes: Minutes,
}

impl ScheduleSummary {
    /// Computes the summary of a selection or generated combination.
    pub fn calculate(sections: &[ChosenSection]) -> Self {
        let by_day = windows_by_day(sections.iter().flat_map(|s| s.section.timeslots.iter()));

        let days_used: Vec<Weekday> = by_day.keys().copied().collect();
        let windows = by_day.values().flatten();

        let weekly_minutes = windows.clone().map(|w| w.duration()).sum();
        let earliest_start = windows.clone().map(|w| w.start).min();
        let latest_end = windows.map(|w| w.end).max();

        // Overlapping meetings (possible in a manual selection) add no gap.
        let idle_gap_minutes = by_day
            .values()
            .flat_map(|day| day.windows(2))
            .filter_map(|pair| pair[0].gap_to(&pair[1]))
            .sum();

        Self {
            total_credits: total_credits(sections),
            days_off: Weekday::ALL.len() - days_used.len(),
            days_used,
            weekly_minutes,
            earliest_start,
            latest_end,
            idle_gap_minutes,
        }
    }

    /// Whether any class is scheduled.
    pub fn is_empty(&self) -> bool {
        self.days_used.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Course, Section, Timeslot};

    fn chosen(course: &Course, section: Section) -> ChosenSection {
        ChosenSection::new(course, &section)
    }

    #[test]
    fn test_summary_basic() {
        let comp = Course::new("COMP2012").with_credits(4.0);
        let math = Course::new("MATH2411").with_credits(4.0);
        let sections = vec![
            chosen(
                &comp,
                Section::lecture("L1").with_timeslot(Timeslot::new(
                    [Weekday::Monday, Weekday::Wednesday],
                    "9:00AM",
                    "10:20AM",
                )),
            ),
            chosen(
                &comp,
                Section::lab("LA1").with_timeslot(Timeslot::new(
                    [Weekday::Monday],
                    "1:00PM",
                    "2:50PM",
                )),
            ),
            chosen(
                &math,
                Section::lecture("L1").with_timeslot(Timeslot::new(
                    [Weekday::Wednesday],
                    "10:30AM",
                    "11:50AM",
                )),
            ),
        ];

        let summary = ScheduleSummary::calculate(&sections);
        assert_eq!(summary.total_credits, 8.0);
        assert_eq!(summary.days_used, vec![Weekday::Monday, Weekday::Wednesday]);
        assert_eq!(summary.days_off, 3);
        // 80 + 80 + 110 + 80
        assert_eq!(summary.weekly_minutes, 350);
        assert_eq!(summary.earliest_start, Some(540));
        assert_eq!(summary.latest_end, Some(890));
        // Monday 10:20 -> 13:00, Wednesday 10:20 -> 10:30
        assert_eq!(summary.idle_gap_minutes, 160 + 10);
    }

    #[test]
    fn test_summary_empty() {
        let summary = ScheduleSummary::calculate(&[]);
        assert!(summary.is_empty());
        assert_eq!(summary.days_off, 5);
        assert_eq!(summary.weekly_minutes, 0);
        assert_eq!(summary.earliest_start, None);
        assert_eq!(summary.latest_end, None);
        assert_eq!(summary.total_credits, 0.0);
    }

    #[test]
    fn test_overlap_adds_no_gap() {
        let course = Course::new("C");
        let sections = vec![
            chosen(
                &course,
                Section::lecture("L1").with_timeslot(Timeslot::new(
                    [Weekday::Tuesday],
                    "9:00AM",
                    "10:30AM",
                )),
            ),
            chosen(
                &course,
                Section::lab("LA1").with_timeslot(Timeslot::new(
                    [Weekday::Tuesday],
                    "10:00AM",
                    "11:00AM",
                )),
            ),
        ];
        let summary = ScheduleSummary::calculate(&sections);
        assert_eq!(summary.idle_gap_minutes, 0);
        assert_eq!(summary.weekly_minutes, 150);
    }
}
