//! Course model.
//!
//! A course is immutable catalog data: an identifier, descriptive fields and
//! its ordered sections.

use serde::{Deserialize, Serialize};

use super::{Section, SectionType};

/// A course offering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    /// Unique course code (e.g., "COMP2012").
    pub code: String,
    /// Human-readable title.
    #[serde(default)]
    pub title: String,
    /// Offering department.
    #[serde(default)]
    pub department: String,
    /// Credit value. `None` = not published.
    #[serde(default)]
    pub credits: Option<f64>,
    /// Sections in catalog order.
    #[serde(default)]
    pub sections: Vec<Section>,
}

impl Course {
    /// Creates a course with the given code.
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            title: String::new(),
            department: String::new(),
            credits: None,
            sections: Vec::new(),
        }
    }

    /// Sets the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the department.
    pub fn with_department(mut self, department: impl Into<String>) -> Self {
        self.department = department.into();
        self
    }

    /// Sets the credit value.
    pub fn with_credits(mut self, credits: f64) -> Self {
        self.credits = Some(credits);
        self
    }

    /// Adds a section.
    pub fn with_section(mut self, section: Section) -> Self {
        self.sections.push(section);
        self
    }

    /// Sections of one component type, in catalog order.
    pub fn sections_of(&self, section_type: SectionType) -> impl Iterator<Item = &Section> {
        self.sections
            .iter()
            .filter(move |s| s.section_type == section_type)
    }

    /// Lecture sections.
    pub fn lectures(&self) -> impl Iterator<Item = &Section> {
        self.sections_of(SectionType::Lecture)
    }

    /// Lab sections.
    pub fn labs(&self) -> impl Iterator<Item = &Section> {
        self.sections_of(SectionType::Lab)
    }

    /// Tutorial sections.
    pub fn tutorials(&self) -> impl Iterator<Item = &Section> {
        self.sections_of(SectionType::Tutorial)
    }

    /// Finds a section by code and component type.
    pub fn section(&self, code: &str, section_type: SectionType) -> Option<&Section> {
        self.sections_of(section_type).find(|s| s.code == code)
    }

    /// Credit value, 0 when absent or negative.
    pub fn credit_value(&self) -> f64 {
        self.credits.unwrap_or(0.0).max(0.0)
    }
}
