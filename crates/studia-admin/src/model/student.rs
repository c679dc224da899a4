//! Student models.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::filter::Searchable;

/// Student enrolled on the platform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    /// Unique student identifier
    pub id: i64,
    /// Full name
    pub name: String,
    /// Contact email address
    pub email: String,
    /// Contact phone number
    pub phone: Option<String>,
    /// Faculty name shown in listings
    pub faculty: Option<String>,
    /// Semester name shown in listings
    pub semester: Option<String>,
    /// Time the student registered
    pub created_at: Option<Timestamp>,
}

impl Searchable for Student {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str(), self.email.as_str()];
        fields.extend(self.phone.as_deref());
        fields
    }
}

/// Data for registering a new student.
#[derive(Debug, Clone, Default, Serialize)]
pub struct NewStudent {
    /// Full name
    pub name: String,
    /// Contact email address
    pub email: String,
    /// Contact phone number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Faculty record to link
    #[serde(skip_serializing_if = "Option::is_none")]
    pub faculty_id: Option<i64>,
    /// Semester record to link
    #[serde(skip_serializing_if = "Option::is_none")]
    pub semester_id: Option<i64>,
}

/// Data for updating a student. Unset fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateStudent {
    /// Full name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Contact email address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Contact phone number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Faculty record to link
    #[serde(skip_serializing_if = "Option::is_none")]
    pub faculty_id: Option<i64>,
    /// Semester record to link
    #[serde(skip_serializing_if = "Option::is_none")]
    pub semester_id: Option<i64>,
}
