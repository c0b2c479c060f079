//! In-memory course catalog.
//!
//! Holds the offerings a student picks from. Catalog data is supplied by the
//! caller, typically as the JSON payload served by a course listing API:
//!
//! ```json
//! [{
//!   "courseCode": "COMP2012",
//!   "courseTitle": "Object-Oriented Programming",
//!   "department": "COMP",
//!   "credits": 4,
//!   "sections": [{
//!     "sectionCode": "L1",
//!     "sectionType": "LECTURE",
//!     "parsedTime": {
//!       "days": ["Monday", "Wednesday"],
//!       "startTime": "9:00AM",
//!       "endTime": "10:20AM"
//!     }
//!   }]
//! }]
//! ```
//!
//! `parsedTime.timeslots`, when present and non-empty, replaces the single
//! legacy `days`/`startTime`/`endTime` triple.

use std::collections::HashMap;

use itertools::Itertools;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::{Result, ScheduleError};
use crate::models::{Course, Section, SectionType, Timeslot, Weekday};

// ======================== Wire records ========================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CourseRecord {
    course_code: String,
    #[serde(default)]
    course_title: String,
    #[serde(default)]
    department: String,
    #[serde(default)]
    credits: Option<f64>,
    #[serde(default)]
    sections: Vec<SectionRecord>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SectionRecord {
    section_code: String,
    #[serde(default)]
    section_type: Option<SectionType>,
    #[serde(default)]
    linked_section: Option<String>,
    #[serde(default)]
    parsed_time: Option<ParsedTimeRecord>,
    #[serde(default)]
    room: String,
    #[serde(default)]
    instructor: String,
    #[serde(default)]
    ta_ia_gta: String,
    #[serde(default)]
    quota: String,
    #[serde(default)]
    enrolled: String,
    #[serde(default)]
    available: String,
    #[serde(default)]
    wait: String,
    #[serde(default)]
    remarks: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SlotRecord {
    #[serde(default)]
    days: Vec<String>,
    #[serde(default)]
    start_time: String,
    #[serde(default)]
    end_time: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ParsedTimeRecord {
    #[serde(flatten)]
    legacy: SlotRecord,
    #[serde(default)]
    timeslots: Option<Vec<SlotRecord>>,
}

impl SlotRecord {
    /// Converts to a timeslot, dropping day labels outside Monday..Friday.
    fn into_timeslot(self, course: &str, section: &str) -> Timeslot {
        let days = self
            .days
            .iter()
            .filter_map(|label| match label.parse::<Weekday>() {
                Ok(day) => Some(day),
                Err(err) => {
                    warn!(course, section, %err, "dropping unsupported day");
                    None
                }
            })
            .collect::<Vec<_>>();
        Timeslot::new(days, self.start_time, self.end_time)
    }
}

impl ParsedTimeRecord {
    fn into_timeslots(self, course: &str, section: &str) -> Vec<Timeslot> {
        match self.timeslots {
            Some(slots) if !slots.is_empty() => slots
                .into_iter()
                .map(|slot| slot.into_timeslot(course, section))
                .collect(),
            // A legacy triple without days means "time to be arranged".
            _ if self.legacy.days.is_empty() => Vec::new(),
            _ => vec![self.legacy.into_timeslot(course, section)],
        }
    }
}

impl CourseRecord {
    fn into_course(self) -> Course {
        let code = self.course_code;
        let sections = self
            .sections
            .into_iter()
            .map(|record| {
                let timeslots = record
                    .parsed_time
                    .map(|t| t.into_timeslots(&code, &record.section_code))
                    .unwrap_or_default();
                Section {
                    code: record.section_code,
                    section_type: record.section_type.unwrap_or_default(),
                    timeslots,
                    linked_section: record.linked_section.filter(|l| !l.trim().is_empty()),
                    room: record.room,
                    instructor: record.instructor,
                    teaching_assistants: record.ta_ia_gta,
                    quota: record.quota,
                    enrolled: record.enrolled,
                    available: record.available,
                    wait: record.wait,
                    remarks: record.remarks,
                }
            })
            .collect();

        Course {
            code,
            title: self.course_title,
            department: self.department,
            credits: self.credits,
            sections,
        }
    }
}

// ======================== Catalog ========================

/// Lower-cases and strips whitespace for free-text matching.
fn search_key(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// A searchable collection of courses.
///
/// # Example
/// ```
/// use u_timetable::catalog::Catalog;
///
/// let catalog = Catalog::from_json(r#"[
///     {"courseCode": "COMP2012", "courseTitle": "OOP", "department": "COMP",
///      "sections": [{"sectionCode": "L1", "sectionType": "LECTURE",
///                    "parsedTime": {"days": ["Monday"], "startTime": "9:00AM", "endTime": "10:20AM"}}]}
/// ]"#).unwrap();
///
/// assert_eq!(catalog.len(), 1);
/// assert_eq!(catalog.search("comp 2012", 20).len(), 1);
/// assert_eq!(catalog.course("COMP2012").unwrap().sections[0].timeslots.len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    courses: Vec<Course>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Creates a catalog from courses. A repeated code keeps its first entry
    /// for lookups; every entry stays listed.
    pub fn new(courses: Vec<Course>) -> Self {
        let mut index = HashMap::with_capacity(courses.len());
        for (i, course) in courses.iter().enumerate() {
            index.entry(course.code.clone()).or_insert(i);
        }
        Self { courses, index }
    }

    /// Parses a JSON array of course records.
    pub fn from_json(json: &str) -> Result<Self> {
        let records: Vec<CourseRecord> = serde_json::from_str(json)?;
        let courses: Vec<Course> = records.into_iter().map(CourseRecord::into_course).collect();
        debug!(courses = courses.len(), "parsed catalog");
        Ok(Self::new(courses))
    }

    /// All courses in catalog order.
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    /// Number of courses.
    pub fn len(&self) -> usize {
        self.courses.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Looks up a course by exact code.
    pub fn course(&self, code: &str) -> Option<&Course> {
        self.index.get(code).map(|&i| &self.courses[i])
    }

    /// Distinct non-empty department names, sorted.
    pub fn departments(&self) -> Vec<&str> {
        self.courses
            .iter()
            .map(|c| c.department.as_str())
            .filter(|d| !d.is_empty())
            .sorted()
            .dedup()
            .collect()
    }

    /// Courses offered by a department.
    pub fn in_department<'a>(&'a self, department: &'a str) -> impl Iterator<Item = &'a Course> {
        self.courses
            .iter()
            .filter(move |c| c.department == department)
    }

    /// Courses whose code or title contains `query`, ignoring case and
    /// whitespace. At most `limit` results, in catalog order.
    ///
    /// A blank query matches nothing.
    pub fn search(&self, query: &str, limit: usize) -> Vec<&Course> {
        let needle = search_key(query);
        if needle.is_empty() {
            return Vec::new();
        }
        self.courses
            .iter()
            .filter(|c| search_key(&c.code).contains(&needle) || search_key(&c.title).contains(&needle))
            .take(limit)
            .collect()
    }

    /// Resolves course codes, failing on the first unknown one.
    pub fn select(&self, codes: &[&str]) -> Result<Vec<&Course>> {
        codes
            .iter()
            .map(|&code| {
                self.course(code)
                    .ok_or_else(|| ScheduleError::UnknownCourse(code.to_string()))
            })
            .collect()
    }
}

impl FromIterator<Course> for Catalog {
    fn from_iter<I: IntoIterator<Item = Course>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
