//! Discussion (class session) models.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::filter::Searchable;

/// Lifecycle status of a discussion.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[derive(Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum DiscussionStatus {
    /// Planned and waiting to start.
    #[default]
    Scheduled,
    /// Currently in progress.
    Ongoing,
    /// Held and finished.
    Completed,
    /// Called off before completion.
    Cancelled,
}

impl DiscussionStatus {
    /// Returns whether students may still enroll.
    #[inline]
    pub fn is_enrollable(self) -> bool {
        matches!(self, DiscussionStatus::Scheduled)
    }

    /// Returns whether the discussion still occupies its tutor and venue.
    #[inline]
    pub fn is_active(self) -> bool {
        matches!(self, DiscussionStatus::Scheduled | DiscussionStatus::Ongoing)
    }

    /// Returns whether the discussion has reached a final state.
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, DiscussionStatus::Completed | DiscussionStatus::Cancelled)
    }
}

/// Discussion session with scheduling and enrollment counters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Discussion {
    /// Unique discussion identifier
    pub id: i64,
    /// Display title
    pub title: String,
    /// Current lifecycle status
    #[serde(default)]
    pub status: DiscussionStatus,
    /// Subject name shown in listings
    pub subject: Option<String>,
    /// Tutor name shown in listings
    pub tutor: Option<String>,
    /// Venue name shown in listings
    pub venue: Option<String>,
    /// Scheduled start time
    pub starts_at: Option<Timestamp>,
    /// Scheduled end time
    pub ends_at: Option<Timestamp>,
    /// Maximum number of students
    #[serde(default)]
    pub capacity: i32,
    /// Number of enrolled students
    #[serde(default)]
    pub enrolled: i32,
}

impl Discussion {
    /// Returns whether a student could still enroll.
    pub fn is_open_for_enrollment(&self) -> bool {
        self.status.is_enrollable() && self.enrolled < self.capacity
    }

    /// Returns the number of free seats, never negative.
    pub fn seats_left(&self) -> i32 {
        (self.capacity - self.enrolled).max(0)
    }
}

impl Searchable for Discussion {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.title.as_str()];
        fields.extend(self.subject.as_deref());
        fields.extend(self.tutor.as_deref());
        fields.extend(self.venue.as_deref());
        fields
    }
}

/// Reference to a master record in a submission: either an existing record
/// by id, or a name for the backend to create and link in one step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordRef {
    /// Link the master record with this id.
    Existing {
        /// Identifier of the existing record
        id: i64,
    },
    /// Create a master record with this name, then link it.
    New {
        /// Name for the record to create
        name: String,
    },
}

impl RecordRef {
    /// References an existing master record.
    pub fn existing(id: i64) -> Self {
        Self::Existing { id }
    }

    /// Names a master record to create on submission.
    pub fn named(name: impl Into<String>) -> Self {
        Self::New { name: name.into() }
    }

    /// Returns whether this references an already existing record.
    pub fn is_existing(&self) -> bool {
        matches!(self, Self::Existing { .. })
    }
}

/// Data for creating a new discussion.
///
/// The subject hierarchy is submitted as [`RecordRef`]s so a missing
/// faculty, department, subject, topic or subtopic can be created as part
/// of the same submission instead of requiring a detour through master
/// data screens.
#[derive(Debug, Clone, Serialize)]
pub struct NewDiscussion {
    /// Display title
    pub title: String,
    /// Faculty the session belongs to
    pub faculty: RecordRef,
    /// Department within the faculty
    pub department: RecordRef,
    /// Subject taught in the session
    pub subject: RecordRef,
    /// Topic within the subject
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic: Option<RecordRef>,
    /// Subtopic within the topic
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtopic: Option<RecordRef>,
    /// Assigned tutor
    pub tutor_id: i64,
    /// Assigned venue
    pub venue_id: i64,
    /// Scheduled start time
    pub starts_at: Timestamp,
    /// Scheduled end time
    pub ends_at: Timestamp,
    /// Maximum number of students
    pub capacity: i32,
}

/// Data for updating a discussion. Unset fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateDiscussion {
    /// Display title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Lifecycle status
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<DiscussionStatus>,
    /// Assigned tutor
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tutor_id: Option<i64>,
    /// Assigned venue
    #[serde(skip_serializing_if = "Option::is_none")]
    pub venue_id: Option<i64>,
    /// Scheduled start time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starts_at: Option<Timestamp>,
    /// Scheduled end time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ends_at: Option<Timestamp>,
    /// Maximum number of students
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity: Option<i32>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn discussion(status: DiscussionStatus, capacity: i32, enrolled: i32) -> Discussion {
        Discussion {
            id: 1,
            title: "Linear Algebra II".to_owned(),
            status,
            subject: None,
            tutor: None,
            venue: None,
            starts_at: None,
            ends_at: None,
            capacity,
            enrolled,
        }
    }

    #[test]
    fn test_enrollment_requires_scheduled_status_and_seats() {
        assert!(discussion(DiscussionStatus::Scheduled, 10, 9).is_open_for_enrollment());
        assert!(!discussion(DiscussionStatus::Scheduled, 10, 10).is_open_for_enrollment());
        assert!(!discussion(DiscussionStatus::Ongoing, 10, 0).is_open_for_enrollment());
        assert!(!discussion(DiscussionStatus::Cancelled, 10, 0).is_open_for_enrollment());
    }

    #[test]
    fn test_seats_left_never_negative() {
        assert_eq!(discussion(DiscussionStatus::Scheduled, 10, 4).seats_left(), 6);
        assert_eq!(discussion(DiscussionStatus::Scheduled, 10, 12).seats_left(), 0);
    }

    #[test]
    fn test_record_ref_wire_shapes() {
        let existing = serde_json::to_value(RecordRef::existing(3)).unwrap();
        assert_eq!(existing, json!({ "id": 3 }));

        let named = serde_json::to_value(RecordRef::named("Algebra")).unwrap();
        assert_eq!(named, json!({ "name": "Algebra" }));

        let parsed: RecordRef = serde_json::from_value(json!({ "id": 3 })).unwrap();
        assert!(parsed.is_existing());
    }

    #[test]
    fn test_status_parses_snake_case() {
        let status: DiscussionStatus = serde_json::from_value(json!("ongoing")).unwrap();
        assert_eq!(status, DiscussionStatus::Ongoing);
        assert_eq!(status.to_string(), "ongoing");
    }
}
