//! Preference weights for schedule generation.
//!
//! Six sliders, each an integer in `0..=10` expressing relative importance.
//! Five of them drive a scoring criterion; `compact` is accepted and
//! validated but no criterion reads it yet.

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScheduleError};

/// Upper bound of every preference slider.
pub const MAX_WEIGHT: u8 = 10;

/// Relative importance of each soft preference.
///
/// Defaults match the planner's initial slider positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PreferenceWeights {
    /// Avoid classes starting before 10:00.
    pub no_morning: u8,
    /// Avoid classes ending after 18:00.
    pub no_evening: u8,
    /// Avoid Friday classes.
    pub no_friday: u8,
    /// Prefer more class-free weekdays.
    pub days_off: u8,
    /// Avoid idle gaps longer than an hour.
    pub minimize_gaps: u8,
    /// Keep classes close together (no scoring criterion yet).
    pub compact: u8,
}

impl PreferenceWeights {
    /// All sliders at zero.
    pub fn zero() -> Self {
        Self {
            no_morning: 0,
            no_evening: 0,
            no_friday: 0,
            days_off: 0,
            minimize_gaps: 0,
            compact: 0,
        }
    }

    /// Sets the morning weight.
    pub fn with_no_morning(mut self, weight: u8) -> Self {
        self.no_morning = weight;
        self
    }

    /// Sets the evening weight.
    pub fn with_no_evening(mut self, weight: u8) -> Self {
        self.no_evening = weight;
        self
    }

    /// Sets the Friday weight.
    pub fn with_no_friday(mut self, weight: u8) -> Self {
        self.no_friday = weight;
        self
    }

    /// Sets the days-off weight.
    pub fn with_days_off(mut self, weight: u8) -> Self {
        self.days_off = weight;
        self
    }

    /// Sets the gap weight.
    pub fn with_minimize_gaps(mut self, weight: u8) -> Self {
        self.minimize_gaps = weight;
        self
    }

    /// Sets the compactness weight.
    pub fn with_compact(mut self, weight: u8) -> Self {
        self.compact = weight;
        self
    }

    /// Sum of the five weights that feed a criterion.
    pub fn active_total(&self) -> u32 {
        [
            self.no_morning,
            self.no_evening,
            self.no_friday,
            self.days_off,
            self.minimize_gaps,
        ]
        .iter()
        .map(|&w| u32::from(w))
        .sum()
    }

    /// Checks that every slider is within `0..=10`.
    pub fn validate(&self) -> Result<()> {
        let sliders = [
            ("noMorning", self.no_morning),
            ("noEvening", self.no_evening),
            ("noFriday", self.no_friday),
            ("daysOff", self.days_off),
            ("minimizeGaps", self.minimize_gaps),
            ("compact", self.compact),
        ];
        match sliders.into_iter().find(|&(_, v)| v > MAX_WEIGHT) {
            Some((name, value)) => Err(ScheduleError::WeightOutOfRange {
                name,
                value,
                max: MAX_WEIGHT,
            }),
            None => Ok(()),
        }
    }
}

impl Default for PreferenceWeights {
    fn default() -> Self {
        Self {
            no_morning: 5,
            no_evening: 3,
            no_friday: 7,
            days_off: 8,
            minimize_gaps: 6,
            compact: 4,
        }
    }
}
