//! Clock times, weekdays and weekly timeslots.
//!
//! # Time Model
//! All times are minutes since midnight. Catalog clock strings use the
//! 12-hour `H:MM` form with a case-sensitive `AM`/`PM` suffix.
//!
//! # Intervals
//! Every interval is half-open `[start, end)`: a class ending at 10:00 and
//! another starting at 10:00 do not overlap.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;
use tracing::warn;

use crate::error::ScheduleError;

/// Minutes since midnight.
pub type Minutes = u32;

static CLOCK_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+):(\d+)(AM|PM)").unwrap());

/// Parses a 12-hour clock string into minutes since midnight.
///
/// Returns `None` when the string does not contain an `H:MM` + `AM`/`PM`
/// token.
///
/// # Hour Rules
/// - `12:xxAM` → hour 0
/// - `12:xxPM` → hour 12
/// - any other `PM` hour → hour + 12
pub fn parse_clock(clock: &str) -> Option<Minutes> {
    let caps = CLOCK_PATTERN.captures(clock)?;
    let hour: Minutes = caps[1].parse().ok()?;
    let minute: Minutes = caps[2].parse().ok()?;

    let hour = match (&caps[3], hour) {
        ("AM", 12) => 0,
        ("PM", 12) => 12,
        ("PM", h) => h.checked_add(12)?,
        (_, h) => h,
    };

    hour.checked_mul(60)?.checked_add(minute)
}

/// Converts a 12-hour clock string into minutes since midnight.
///
/// Malformed strings map to `0` and are reported as a `warn` event; catalog
/// data is expected to be pre-validated (see
/// [`validate_catalog`](crate::validation::validate_catalog)).
///
/// # Examples
///
/// ```
/// use u_timetable::models::to_minutes;
///
/// assert_eq!(to_minutes("12:00AM"), 0);
/// assert_eq!(to_minutes("12:00PM"), 720);
/// assert_eq!(to_minutes("1:30PM"), 810);
/// assert_eq!(to_minutes("11:59PM"), 1439);
/// ```
pub fn to_minutes(clock: &str) -> Minutes {
    parse_clock(clock).unwrap_or_else(|| {
        warn!(clock, "malformed clock time, using midnight");
        0
    })
}

/// A teaching weekday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Weekday {
    #[serde(alias = "Mon")]
    Monday,
    #[serde(alias = "Tue")]
    Tuesday,
    #[serde(alias = "Wed")]
    Wednesday,
    #[serde(alias = "Thu")]
    Thursday,
    #[serde(alias = "Fri")]
    Friday,
}

impl Weekday {
    /// All teaching days, Monday first.
    pub const ALL: [Weekday; 5] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
    ];

    /// Full English name.
    pub fn name(self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Weekday {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        Weekday::ALL
            .into_iter()
            .find(|d| {
                let name = d.name().to_ascii_lowercase();
                key == name || key == name[..3]
            })
            .ok_or_else(|| ScheduleError::UnknownWeekday(s.to_string()))
    }
}

/// A time interval [start, end) in minutes since midnight.
///
/// Half-open interval: includes start, excludes end.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    /// Interval start (inclusive).
    pub start: Minutes,
    /// Interval end (exclusive).
    pub end: Minutes,
}

impl TimeWindow {
    /// Creates a new time window.
    pub fn new(start: Minutes, end: Minutes) -> Self {
        Self { start, end }
    }

    /// Length in minutes (0 for an inverted window).
    #[inline]
    pub fn duration(&self) -> Minutes {
        self.end.saturating_sub(self.start)
    }

    /// Whether a minute offset falls within this window.
    #[inline]
    pub fn contains(&self, minute: Minutes) -> bool {
        minute >= self.start && minute < self.end
    }

    /// Whether two windows overlap.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Idle minutes between the end of `self` and the start of a later window.
    ///
    /// `None` when `next` starts before `self` ends.
    pub fn gap_to(&self, next: &Self) -> Option<Minutes> {
        next.start.checked_sub(self.end)
    }
}

/// One weekly meeting pattern: a set of days sharing the same start and end.
///
/// The minute window is resolved once at construction, so malformed clock
/// strings are reported a single time rather than on every comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "TimeslotRecord", into = "TimeslotRecord")]
pub struct Timeslot {
    days: Vec<Weekday>,
    start_time: String,
    end_time: String,
    window: TimeWindow,
}

#[derive(Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TimeslotRecord {
    days: Vec<Weekday>,
    start_time: String,
    end_time: String,
}

impl From<TimeslotRecord> for Timeslot {
    fn from(record: TimeslotRecord) -> Self {
        Timeslot::new(record.days, record.start_time, record.end_time)
    }
}

impl From<Timeslot> for TimeslotRecord {
    fn from(slot: Timeslot) -> Self {
        Self {
            days: slot.days,
            start_time: slot.start_time,
            end_time: slot.end_time,
        }
    }
}

impl Timeslot {
    /// Creates a timeslot. Days are deduplicated and sorted Monday first.
    pub fn new(
        days: impl IntoIterator<Item = Weekday>,
        start_time: impl Into<String>,
        end_time: impl Into<String>,
    ) -> Self {
        let mut days: Vec<Weekday> = days.into_iter().collect();
        days.sort();
        days.dedup();

        let start_time = start_time.into();
        let end_time = end_time.into();
        let window = TimeWindow::new(to_minutes(&start_time), to_minutes(&end_time));

        Self {
            days,
            start_time,
            end_time,
            window,
        }
    }

    /// Meeting days, Monday first.
    pub fn days(&self) -> &[Weekday] {
        &self.days
    }

    /// Start clock string as given by the catalog.
    pub fn start_time(&self) -> &str {
        &self.start_time
    }

    /// End clock string as given by the catalog.
    pub fn end_time(&self) -> &str {
        &self.end_time
    }

    /// Resolved minute window.
    pub fn window(&self) -> TimeWindow {
        self.window
    }

    /// Start in minutes since midnight.
    pub fn start(&self) -> Minutes {
        self.window.start
    }

    /// End in minutes since midnight.
    pub fn end(&self) -> Minutes {
        self.window.end
    }

    /// Whether this timeslot meets on `day`.
    pub fn includes(&self, day: Weekday) -> bool {
        self.days.contains(&day)
    }

    /// Days on which both timeslots meet.
    pub fn common_days(&self, other: &Self) -> Vec<Weekday> {
        self.days
            .iter()
            .copied()
            .filter(|d| other.includes(*d))
            .collect()
    }

    /// Whether the two timeslots share a day and their windows overlap.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.window.overlaps(&other.window) && self.days.iter().any(|d| other.includes(*d))
    }

    /// Whether the timeslot has at least one day and starts before it ends.
    pub fn is_well_formed(&self) -> bool {
        !self.days.is_empty() && self.window.start < self.window.end
    }
}

/// Groups the minute windows of `slots` per weekday, each day sorted by start.
pub fn windows_by_day<'a>(
    slots: impl IntoIterator<Item = &'a Timeslot>,
) -> BTreeMap<Weekday, Vec<TimeWindow>> {
    let mut by_day: BTreeMap<Weekday, Vec<TimeWindow>> = BTreeMap::new();
    for slot in slots {
        for &day in slot.days() {
            by_day.entry(day).or_default().push(slot.window());
        }
    }
    for windows in by_day.values_mut() {
        windows.sort_by_key(|w| w.start);
    }
    by_day
}
