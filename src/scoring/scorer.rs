//! Weighted combination of preference criteria.
//!
//! # Formula
//!
//! ```text
//! share_i  = weight_i / Σ weight
//! score    = round(Σ contribution_i × share_i × 10), clamped to [0, 100]
//! ```
//!
//! When every weight is zero there is no preference to express; the score
//! short-circuits to [`NEUTRAL_SCORE`] instead of dividing by zero.

use serde::Serialize;
use std::sync::Arc;

use super::criteria::{DaysOff, EveningClasses, FridayClasses, IdleGaps, MorningClasses};
use super::{Criterion, CriterionKey};
use crate::models::{ChosenSection, PreferenceWeights};

/// Score given to every schedule when all weights are zero.
pub const NEUTRAL_SCORE: f64 = 50.0;

/// One criterion's part of a score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CriterionScore {
    /// Which criterion.
    pub key: CriterionKey,
    /// Uncapped, unweighted measurement.
    pub raw: f64,
    /// Weight share in `[0, 1]`.
    pub share: f64,
}

/// Per-criterion explanation of a score.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    entries: Vec<CriterionScore>,
}

impl ScoreBreakdown {
    /// All entries, in scorer order.
    pub fn entries(&self) -> &[CriterionScore] {
        &self.entries
    }

    /// Raw value of a criterion, if the scorer includes it.
    pub fn raw(&self, key: CriterionKey) -> Option<f64> {
        self.entries.iter().find(|e| e.key == key).map(|e| e.raw)
    }
}

#[derive(Clone)]
struct WeightedCriterion {
    criterion: Arc<dyn Criterion>,
    weight: f64,
}

/// Scores conflict-free section sets against weighted preferences.
///
/// # Example
/// ```
/// use u_timetable::scoring::{PreferenceScorer, criteria};
///
/// let scorer = PreferenceScorer::new()
///     .with_criterion(criteria::DaysOff, 8.0)
///     .with_criterion(criteria::FridayClasses, 2.0);
/// assert_eq!(scorer.total_weight(), 10.0);
/// ```
#[derive(Clone)]
pub struct PreferenceScorer {
    criteria: Vec<WeightedCriterion>,
}

impl PreferenceScorer {
    /// Creates a scorer with no criteria.
    pub fn new() -> Self {
        Self {
            criteria: Vec::new(),
        }
    }

    /// Builds the standard five-criterion scorer from slider weights.
    ///
    /// The `compact` slider is not read.
    pub fn from_weights(weights: &PreferenceWeights) -> Self {
        Self::new()
            .with_criterion(MorningClasses, f64::from(weights.no_morning))
            .with_criterion(EveningClasses, f64::from(weights.no_evening))
            .with_criterion(FridayClasses, f64::from(weights.no_friday))
            .with_criterion(DaysOff, f64::from(weights.days_off))
            .with_criterion(IdleGaps, f64::from(weights.minimize_gaps))
    }

    /// Adds a weighted criterion.
    pub fn with_criterion<C: Criterion + 'static>(mut self, criterion: C, weight: f64) -> Self {
        self.criteria.push(WeightedCriterion {
            criterion: Arc::new(criterion),
            weight: weight.max(0.0),
        });
        self
    }

    /// Sum of all criterion weights.
    pub fn total_weight(&self) -> f64 {
        self.criteria.iter().map(|wc| wc.weight).sum()
    }

    /// Scores a section set.
    ///
    /// Returns the 0–100 score and the raw per-criterion breakdown.
    pub fn score(&self, sections: &[ChosenSection]) -> (f64, ScoreBreakdown) {
        let total = self.total_weight();
        let mut weighted = 0.0;
        let mut entries = Vec::with_capacity(self.criteria.len());

        for wc in &self.criteria {
            let raw = wc.criterion.raw(sections);
            let share = if total > 0.0 { wc.weight / total } else { 0.0 };
            weighted += wc.criterion.contribution(raw) * share;
            entries.push(CriterionScore {
                key: wc.criterion.key(),
                raw,
                share,
            });
        }

        let score = if total > 0.0 {
            (weighted * 10.0).round().clamp(0.0, 100.0)
        } else {
            NEUTRAL_SCORE
        };

        (score, ScoreBreakdown { entries })
    }
}

impl Default for PreferenceScorer {
    fn default() -> Self {
        Self::from_weights(&PreferenceWeights::default())
    }
}

impl std::fmt::Debug for PreferenceScorer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PreferenceScorer")
            .field(
                "criteria",
                &self
                    .criteria
                    .iter()
                    .map(|wc| (wc.criterion.description(), wc.weight))
                    .collect::<Vec<_>>(),
            )
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Course, Section, Timeslot, Weekday};

    fn held(days: &[Weekday], start: &str, end: &str) -> ChosenSection {
        let course = Course::new("C");
        let section =
            Section::lecture("L1").with_timeslot(Timeslot::new(days.iter().copied(), start, end));
        ChosenSection::new(&course, &section)
    }

    #[test]
    fn test_default_weights_example() {
        // Mon/Wed 9:00-10:20: morning raw 4, two days used → bonus 15 (capped 10).
        let s = vec![held(
            &[Weekday::Monday, Weekday::Wednesday],
            "9:00AM",
            "10:20AM",
        )];
        let scorer = PreferenceScorer::from_weights(&PreferenceWeights::default());
        let (score, breakdown) = scorer.score(&s);

        // (6*5 + 10*3 + 10*7 + 10*8 + 10*6) / 29 * 10 = 93.1
        assert_eq!(score, 93.0);
        assert_eq!(breakdown.raw(CriterionKey::MorningPenalty), Some(4.0));
        assert_eq!(breakdown.raw(CriterionKey::DaysOffBonus), Some(15.0));
        assert_eq!(breakdown.raw(CriterionKey::GapPenalty), Some(0.0));
    }

    #[test]
    fn test_single_weight_dominates() {
        let s = vec![held(&[Weekday::Friday], "1:00PM", "2:00PM")];
        let scorer = PreferenceScorer::from_weights(&PreferenceWeights::zero().with_no_friday(10));
        let (score, _) = scorer.score(&s);
        // Friday raw 3 → contribution 7 → share 1.0 → 70
        assert_eq!(score, 70.0);
    }

    #[test]
    fn test_all_zero_weights_is_neutral() {
        let s = vec![held(&[Weekday::Friday], "8:00AM", "9:00PM")];
        let scorer = PreferenceScorer::from_weights(&PreferenceWeights::zero().with_compact(10));
        let (score, breakdown) = scorer.score(&s);
        assert_eq!(score, NEUTRAL_SCORE);
        assert!(score.is_finite());
        assert!(breakdown.entries().iter().all(|e| e.share == 0.0));
        assert_eq!(breakdown.raw(CriterionKey::FridayPenalty), Some(3.0));
    }

    #[test]
    fn test_score_bounds() {
        let packed = vec![
            held(&Weekday::ALL, "8:00AM", "9:00AM"),
            held(&Weekday::ALL, "6:00PM", "9:00PM"),
        ];
        let scorer = PreferenceScorer::from_weights(&PreferenceWeights::default());
        let (worst, _) = scorer.score(&packed);
        let (best, _) = scorer.score(&[]);
        assert!((0.0..=100.0).contains(&worst));
        assert_eq!(best, 100.0);
        assert!(worst < best);
    }

    #[test]
    fn test_breakdown_shares_sum_to_one() {
        let scorer = PreferenceScorer::from_weights(&PreferenceWeights::default());
        let (_, breakdown) = scorer.score(&[]);
        let sum: f64 = breakdown.entries().iter().map(|e| e.share).sum();
        assert!((sum - 1.0).abs() < 1e-10);
    }
}
