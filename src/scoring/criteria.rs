//! Built-in preference criteria.
//!
//! # Raw Values
//!
//! | Criterion | Raw value |
//! |-----------|-----------|
//! | Morning | 2 × (timeslot, day) pairs starting before 10:00 |
//! | Evening | 2 × (timeslot, day) pairs ending after 18:00 |
//! | Friday | 3 × timeslots meeting on Friday |
//! | Days off | 5 × (5 − distinct weekdays used) |
//! | Gaps | total minutes of same-day gaps over 60, ÷ 30 |

use std::collections::BTreeSet;

use super::{Criterion, CriterionKey, CriterionKind};
use crate::models::{windows_by_day, ChosenSection, Minutes, Timeslot, Weekday};

/// Classes starting strictly before this minute count as morning classes.
pub const MORNING_CUTOFF: Minutes = 10 * 60;
/// Classes ending strictly after this minute count as evening classes.
pub const EVENING_CUTOFF: Minutes = 18 * 60;
/// Same-day gaps up to this many minutes are not penalised.
pub const GAP_TOLERANCE: i64 = 60;

fn timeslots(sections: &[ChosenSection]) -> impl Iterator<Item = &Timeslot> {
    sections.iter().flat_map(|s| s.section.timeslots.iter())
}

// ======================== Time-of-day ========================

/// Penalises each weekly meeting that starts before 10:00.
#[derive(Debug, Clone, Copy)]
pub struct MorningClasses;

impl Criterion for MorningClasses {
    fn key(&self) -> CriterionKey {
        CriterionKey::MorningPenalty
    }

    fn kind(&self) -> CriterionKind {
        CriterionKind::Penalty
    }

    fn raw(&self, sections: &[ChosenSection]) -> f64 {
        let count: usize = timeslots(sections)
            .filter(|slot| slot.start() < MORNING_CUTOFF)
            .map(|slot| slot.days().len())
            .sum();
        (count * 2) as f64
    }

    fn description(&self) -> &'static str {
        "No classes before 10 AM"
    }
}

/// Penalises each weekly meeting that ends after 18:00.
#[derive(Debug, Clone, Copy)]
pub struct EveningClasses;

impl Criterion for EveningClasses {
    fn key(&self) -> CriterionKey {
        CriterionKey::EveningPenalty
    }

    fn kind(&self) -> CriterionKind {
        CriterionKind::Penalty
    }

    fn raw(&self, sections: &[ChosenSection]) -> f64 {
        let count: usize = timeslots(sections)
            .filter(|slot| slot.end() > EVENING_CUTOFF)
            .map(|slot| slot.days().len())
            .sum();
        (count * 2) as f64
    }

    fn description(&self) -> &'static str {
        "No classes after 6 PM"
    }
}

/// Penalises each timeslot that meets on Friday.
///
/// Counted per timeslot, not per (timeslot, day) pair.
#[derive(Debug, Clone, Copy)]
pub struct FridayClasses;

impl Criterion for FridayClasses {
    fn key(&self) -> CriterionKey {
        CriterionKey::FridayPenalty
    }

    fn kind(&self) -> CriterionKind {
        CriterionKind::Penalty
    }

    fn raw(&self, sections: &[ChosenSection]) -> f64 {
        let count = timeslots(sections)
            .filter(|slot| slot.includes(Weekday::Friday))
            .count();
        (count * 3) as f64
    }

    fn description(&self) -> &'static str {
        "No Friday classes"
    }
}

// ======================== Week shape ========================

/// Rewards weekdays without any class.
#[derive(Debug, Clone, Copy)]
pub struct DaysOff;

impl Criterion for DaysOff {
    fn key(&self) -> CriterionKey {
        CriterionKey::DaysOffBonus
    }

    fn kind(&self) -> CriterionKind {
        CriterionKind::Bonus
    }

    fn raw(&self, sections: &[ChosenSection]) -> f64 {
        let used: BTreeSet<Weekday> = timeslots(sections)
            .flat_map(|slot| slot.days().iter().copied())
            .collect();
        let off = Weekday::ALL.len().saturating_sub(used.len());
        (off * 5) as f64
    }

    fn description(&self) -> &'static str {
        "Maximize days off"
    }
}

/// Penalises same-day idle gaps longer than an hour.
///
/// Each day's meetings are sorted by start; only the gap between
/// consecutive meetings is measured.
#[derive(Debug, Clone, Copy)]
pub struct IdleGaps;

impl Criterion for IdleGaps {
    fn key(&self) -> CriterionKey {
        CriterionKey::GapPenalty
    }

    fn kind(&self) -> CriterionKind {
        CriterionKind::Penalty
    }

    fn raw(&self, sections: &[ChosenSection]) -> f64 {
        let total: i64 = windows_by_day(timeslots(sections))
            .values()
            .flat_map(|day| day.windows(2))
            .map(|pair| i64::from(pair[1].start) - i64::from(pair[0].end))
            .filter(|&gap| gap > GAP_TOLERANCE)
            .sum();
        total as f64 / 30.0
    }

    fn description(&self) -> &'static str {
        "Minimize gaps between classes"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Course, Section};

    fn held(slots: Vec<Timeslot>) -> Vec<ChosenSection> {
        let course = Course::new("C");
        slots
            .into_iter()
            .enumerate()
            .map(|(i, slot)| {
                let section = Section::lecture(format!("L{i}")).with_timeslot(slot);
                ChosenSection::new(&course, &section)
            })
            .collect()
    }

    fn slot(days: &[Weekday], start: &str, end: &str) -> Timeslot {
        Timeslot::new(days.iter().copied(), start, end)
    }

    #[test]
    fn test_morning_counts_day_pairs() {
        let s = held(vec![
            slot(&[Weekday::Monday, Weekday::Wednesday], "9:00AM", "10:20AM"),
            slot(&[Weekday::Friday], "10:00AM", "11:00AM"), // not before 10:00
        ]);
        assert_eq!(MorningClasses.raw(&s), 4.0);
    }

    #[test]
    fn test_evening_counts_day_pairs() {
        let s = held(vec![
            slot(&[Weekday::Tuesday, Weekday::Thursday], "4:30PM", "6:20PM"),
            slot(&[Weekday::Monday], "4:00PM", "6:00PM"), // ends exactly at 18:00
        ]);
        assert_eq!(EveningClasses.raw(&s), 4.0);
    }

    #[test]
    fn test_friday_counts_timeslots() {
        let s = held(vec![
            slot(&[Weekday::Wednesday, Weekday::Friday], "9:00AM", "10:00AM"),
            slot(&[Weekday::Friday], "1:00PM", "2:00PM"),
            slot(&[Weekday::Monday], "1:00PM", "2:00PM"),
        ]);
        assert_eq!(FridayClasses.raw(&s), 6.0);
    }

    #[test]
    fn test_days_off() {
        let s = held(vec![
            slot(&[Weekday::Monday, Weekday::Wednesday], "9:00AM", "10:00AM"),
            slot(&[Weekday::Wednesday], "1:00PM", "2:00PM"),
        ]);
        assert_eq!(DaysOff.raw(&s), 15.0);
        assert_eq!(DaysOff.raw(&[]), 25.0);
    }

    #[test]
    fn test_gaps_over_an_hour_only() {
        let s = held(vec![
            slot(&[Weekday::Monday], "9:00AM", "10:00AM"),
            slot(&[Weekday::Monday], "11:00AM", "12:00PM"), // 60 min gap, tolerated
            slot(&[Weekday::Monday], "3:00PM", "4:00PM"),   // 180 min gap
            slot(&[Weekday::Tuesday], "9:00AM", "10:00AM"),
            slot(&[Weekday::Tuesday], "11:30AM", "12:00PM"), // 90 min gap
        ]);
        assert_eq!(IdleGaps.raw(&s), (180.0 + 90.0) / 30.0);
    }

    #[test]
    fn test_contribution_direction() {
        assert_eq!(MorningClasses.contribution(4.0), 6.0);
        assert_eq!(MorningClasses.contribution(14.0), 0.0);
        assert_eq!(DaysOff.contribution(15.0), 10.0);
        assert_eq!(DaysOff.contribution(5.0), 5.0);
    }
}
