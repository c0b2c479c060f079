//! Preference criteria and weighted schedule scoring.
//!
//! Each soft preference is a [`Criterion`] that measures a raw value over a
//! conflict-free set of sections. The [`PreferenceScorer`] caps every raw
//! value to `[0, 10]`, turns it into a favourable contribution and combines
//! contributions by weight share into a 0–100 score.
//!
//! # Usage
//!
//! ```
//! use u_timetable::models::PreferenceWeights;
//! use u_timetable::scoring::PreferenceScorer;
//!
//! let scorer = PreferenceScorer::from_weights(&PreferenceWeights::default());
//! let (score, breakdown) = scorer.score(&[]);
//! assert_eq!(score, 100.0);
//! assert_eq!(breakdown.entries().len(), 5);
//! ```

pub mod criteria;
mod scorer;

pub use scorer::{CriterionScore, PreferenceScorer, ScoreBreakdown, NEUTRAL_SCORE};

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

use crate::models::ChosenSection;

/// Cap applied to every raw criterion value before weighting.
pub const MAX_COMPONENT: f64 = 10.0;

/// Identifies a scoring criterion in a breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CriterionKey {
    MorningPenalty,
    EveningPenalty,
    FridayPenalty,
    DaysOffBonus,
    GapPenalty,
}

/// Direction of a criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CriterionKind {
    /// Higher raw value is worse; contributes `10 - capped`.
    Penalty,
    /// Higher raw value is better; contributes `capped`.
    Bonus,
}

/// A soft preference measured over a set of sections.
pub trait Criterion: Send + Sync + Debug {
    /// Breakdown key.
    fn key(&self) -> CriterionKey;

    /// Penalty or bonus.
    fn kind(&self) -> CriterionKind;

    /// Uncapped, unweighted measurement.
    fn raw(&self, sections: &[ChosenSection]) -> f64;

    /// Criterion description.
    fn description(&self) -> &'static str;

    /// Favourable contribution in `[0, 10]` for a raw value.
    fn contribution(&self, raw: f64) -> f64 {
        let capped = raw.clamp(0.0, MAX_COMPONENT);
        match self.kind() {
            CriterionKind::Penalty => MAX_COMPONENT - capped,
            CriterionKind::Bonus => capped,
        }
    }
}
