//! Ranking of scored schedules.

use serde::Serialize;

use crate::models::ChosenSection;
use crate::scoring::ScoreBreakdown;

/// A conflict-free candidate schedule with its score.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleCombination {
    /// Chosen sections (1–3 per course).
    pub sections: Vec<ChosenSection>,
    /// Desirability in `[0, 100]`.
    pub score: f64,
    /// Raw per-criterion values behind the score.
    pub breakdown: ScoreBreakdown,
}

/// Scored schedules, best first.
///
/// Order among equal scores is unspecified.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RankedSchedules {
    schedules: Vec<ScheduleCombination>,
}

impl RankedSchedules {
    /// Sorts schedules by descending score.
    pub fn new(mut schedules: Vec<ScheduleCombination>) -> Self {
        schedules.sort_by(|a, b| b.score.total_cmp(&a.score));
        Self { schedules }
    }

    /// The first `k` schedules (fewer if not enough exist).
    pub fn top(&self, k: usize) -> &[ScheduleCombination] {
        &self.schedules[..k.min(self.schedules.len())]
    }

    /// The highest-scoring schedule.
    pub fn best(&self) -> Option<&ScheduleCombination> {
        self.schedules.first()
    }

    /// Every ranked schedule.
    pub fn all(&self) -> &[ScheduleCombination] {
        &self.schedules
    }

    /// Number of ranked schedules.
    pub fn len(&self) -> usize {
        self.schedules.len()
    }

    /// Whether no conflict-free schedule exists.
    pub fn is_empty(&self) -> bool {
        self.schedules.is_empty()
    }

    /// Iterates best first.
    pub fn iter(&self) -> std::slice::Iter<'_, ScheduleCombination> {
        self.schedules.iter()
    }

    /// Consumes the ranking into a vector, best first.
    pub fn into_vec(self) -> Vec<ScheduleCombination> {
        self.schedules
    }
}

impl IntoIterator for RankedSchedules {
    type Item = ScheduleCombination;
    type IntoIter = std::vec::IntoIter<ScheduleCombination>;

    fn into_iter(self) -> Self::IntoIter {
        self.schedules.into_iter()
    }
}

impl<'a> IntoIterator for &'a RankedSchedules {
    type Item = &'a ScheduleCombination;
    type IntoIter = std::slice::Iter<'a, ScheduleCombination>;

    fn into_iter(self) -> Self::IntoIter {
        self.schedules.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scored(score: f64) -> ScheduleCombination {
        ScheduleCombination {
            sections: Vec::new(),
            score,
            breakdown: ScoreBreakdown::default(),
        }
    }

    #[test]
    fn test_sorted_descending() {
        let ranked = RankedSchedules::new(vec![scored(40.0), scored(90.0), scored(65.0)]);
        let scores: Vec<f64> = ranked.iter().map(|s| s.score).collect();
        assert_eq!(scores, vec![90.0, 65.0, 40.0]);
        assert_eq!(ranked.best().unwrap().score, 90.0);
    }

    #[test]
    fn test_top_k_bounds() {
        let ranked = RankedSchedules::new(vec![scored(1.0), scored(2.0), scored(3.0)]);
        assert_eq!(ranked.top(2).len(), 2);
        assert_eq!(ranked.top(10).len(), 3);
        assert!(ranked.top(0).is_empty());
        assert_eq!(ranked.all().len(), 3);
    }

    #[test]
    fn test_empty() {
        let ranked = RankedSchedules::new(Vec::new());
        assert!(ranked.is_empty());
        assert!(ranked.best().is_none());
        assert!(ranked.top(10).is_empty());
    }
}
