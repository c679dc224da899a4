//! Master data models.
//!
//! Master records are the lookup entities the rest of the catalog points
//! to. They carry no behavior of their own; each is a named record, some
//! with a link to their parent in the subject hierarchy
//! (faculty → department → subject → topic → subtopic).

use serde::{Deserialize, Serialize};

use crate::filter::Searchable;

/// Faculty, the root of the subject hierarchy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Faculty {
    /// Unique faculty identifier
    pub id: i64,
    /// Display name
    pub name: String,
}

/// Data for creating or renaming a faculty.
#[derive(Debug, Clone, Default, Serialize)]
pub struct NewFaculty {
    /// Display name
    pub name: String,
}

/// Department within a faculty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Department {
    /// Unique department identifier
    pub id: i64,
    /// Display name
    pub name: String,
    /// Parent faculty
    pub faculty_id: i64,
}

/// Data for creating or updating a department.
#[derive(Debug, Clone, Default, Serialize)]
pub struct NewDepartment {
    /// Display name
    pub name: String,
    /// Parent faculty
    pub faculty_id: i64,
}

/// Academic semester.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Semester {
    /// Unique semester identifier
    pub id: i64,
    /// Display name
    pub name: String,
}

/// Data for creating or renaming a semester.
#[derive(Debug, Clone, Default, Serialize)]
pub struct NewSemester {
    /// Display name
    pub name: String,
}

/// Subject taught within a department.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subject {
    /// Unique subject identifier
    pub id: i64,
    /// Display name
    pub name: String,
    /// Parent department
    pub department_id: i64,
}

/// Data for creating or updating a subject.
#[derive(Debug, Clone, Default, Serialize)]
pub struct NewSubject {
    /// Display name
    pub name: String,
    /// Parent department
    pub department_id: i64,
}

/// Topic within a subject.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Topic {
    /// Unique topic identifier
    pub id: i64,
    /// Display name
    pub name: String,
    /// Parent subject
    pub subject_id: i64,
}

/// Data for creating or updating a topic.
#[derive(Debug, Clone, Default, Serialize)]
pub struct NewTopic {
    /// Display name
    pub name: String,
    /// Parent subject
    pub subject_id: i64,
}

/// Subtopic within a topic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subtopic {
    /// Unique subtopic identifier
    pub id: i64,
    /// Display name
    pub name: String,
    /// Parent topic
    pub topic_id: i64,
}

/// Data for creating or updating a subtopic.
#[derive(Debug, Clone, Default, Serialize)]
pub struct NewSubtopic {
    /// Display name
    pub name: String,
    /// Parent topic
    pub topic_id: i64,
}

/// Tutor available for discussions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tutor {
    /// Unique tutor identifier
    pub id: i64,
    /// Full name
    pub name: String,
    /// Contact email address
    pub email: Option<String>,
}

/// Data for creating or updating a tutor.
#[derive(Debug, Clone, Default, Serialize)]
pub struct NewTutor {
    /// Full name
    pub name: String,
    /// Contact email address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Venue discussions are held at.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Venue {
    /// Unique venue identifier
    pub id: i64,
    /// Display name
    pub name: String,
    /// Street address
    pub address: Option<String>,
    /// Seating capacity
    pub capacity: Option<i32>,
}

/// Data for creating or updating a venue.
#[derive(Debug, Clone, Default, Serialize)]
pub struct NewVenue {
    /// Display name
    pub name: String,
    /// Street address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// Seating capacity
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity: Option<i32>,
}

/// Book author.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Author {
    /// Unique author identifier
    pub id: i64,
    /// Full name
    pub name: String,
}

/// Data for creating or renaming an author.
#[derive(Debug, Clone, Default, Serialize)]
pub struct NewAuthor {
    /// Full name
    pub name: String,
}

/// Book category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// Unique category identifier
    pub id: i64,
    /// Display name
    pub name: String,
}

/// Data for creating or renaming a category.
#[derive(Debug, Clone, Default, Serialize)]
pub struct NewCategory {
    /// Display name
    pub name: String,
}

impl Searchable for Faculty {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str()]
    }
}

impl Searchable for Department {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str()]
    }
}

impl Searchable for Semester {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str()]
    }
}

impl Searchable for Subject {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str()]
    }
}

impl Searchable for Topic {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str()]
    }
}

impl Searchable for Subtopic {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str()]
    }
}

impl Searchable for Tutor {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str()];
        fields.extend(self.email.as_deref());
        fields
    }
}

impl Searchable for Venue {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str()];
        fields.extend(self.address.as_deref());
        fields
    }
}

impl Searchable for Author {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str()]
    }
}

impl Searchable for Category {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str()]
    }
}
