//! Student model.
//!
//! A student is one roster entry for an exam. The engine reads students
//! but never mutates them; the roster is owned by the caller.

use serde::{Deserialize, Serialize};

/// A student registered for an exam.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    /// Unique student identifier.
    pub id: String,
    /// Unique roll number shown on admit cards.
    pub roll_number: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Department identifier. `None` = no department on record.
    #[serde(default)]
    pub department_id: Option<String>,
    /// Current semester, if known.
    #[serde(default)]
    pub semester: Option<u32>,
}

impl Student {
    /// Creates a student with the given ID and roll number.
    pub fn new(id: impl Into<String>, roll_number: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            roll_number: roll_number.into(),
            name: String::new(),
            department_id: None,
            semester: None,
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the department.
    pub fn with_department(mut self, department_id: impl Into<String>) -> Self {
        self.department_id = Some(department_id.into());
        self
    }

    /// Sets the semester.
    pub fn with_semester(mut self, semester: u32) -> Self {
        self.semester = Some(semester);
        self
    }

    /// Department as a string slice.
    #[inline]
    pub fn department(&self) -> Option<&str> {
        self.department_id.as_deref()
    }

    /// Whether both students have a department and it is the same one.
    pub fn shares_department_with(&self, other: &Student) -> bool {
        matches!(
            (self.department(), other.department()),
            (Some(a), Some(b)) if a == b
        )
    }
}
