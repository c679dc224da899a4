//! Master data endpoints.

use std::marker::PhantomData;

use serde::Serialize;
use serde::de::DeserializeOwned;
use studia_http::{Empty, Envelope, HttpClient};

use crate::model::{
    Author, Category, Department, Faculty, NewAuthor, NewCategory, NewDepartment, NewFaculty,
    NewSemester, NewSubject, NewSubtopic, NewTopic, NewTutor, NewVenue, Semester, Subject,
    Subtopic, Topic, Tutor, Venue,
};
use crate::service::ListPayload;

/// Master data collection served by the admin API.
pub trait MasterResource: Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Draft accepted by the create and update endpoints.
    type Draft: Serialize + Send + Sync;

    /// Collection path under the API root.
    const PATH: &'static str;
}

/// Client for one master data collection.
///
/// All ten collections share the same CRUD surface; the resource type
/// picks the path.
#[derive(Debug, Clone)]
pub struct MasterService<R> {
    client: HttpClient,
    resource: PhantomData<fn() -> R>,
}

impl<R: MasterResource> MasterService<R> {
    /// Creates a service for the resource's collection.
    pub fn new(client: HttpClient) -> Self {
        Self {
            client,
            resource: PhantomData,
        }
    }

    /// Lists every record in the collection.
    pub async fn list(&self) -> Envelope<Vec<R>> {
        let response: Envelope<ListPayload<R>> = self.client.get(R::PATH).await;
        response.map(ListPayload::into_items)
    }

    /// Fetches a single record.
    pub async fn get(&self, id: i64) -> Envelope<R> {
        self.client.get(&format!("{}/{id}", R::PATH)).await
    }

    /// Creates a record.
    pub async fn create(&self, draft: &R::Draft) -> Envelope<R> {
        self.client.post(R::PATH, draft).await
    }

    /// Updates a record.
    pub async fn update(&self, id: i64, draft: &R::Draft) -> Envelope<R> {
        self.client.put(&format!("{}/{id}", R::PATH), draft).await
    }

    /// Deletes a record.
    pub async fn delete(&self, id: i64) -> Envelope<Empty> {
        self.client.delete(&format!("{}/{id}", R::PATH)).await
    }
}

impl MasterResource for Faculty {
    type Draft = NewFaculty;
    const PATH: &'static str = "/admin/faculties";
}

impl MasterResource for Department {
    type Draft = NewDepartment;
    const PATH: &'static str = "/admin/departments";
}

impl MasterResource for Semester {
    type Draft = NewSemester;
    const PATH: &'static str = "/admin/semesters";
}

impl MasterResource for Subject {
    type Draft = NewSubject;
    const PATH: &'static str = "/admin/subjects";
}

impl MasterResource for Topic {
    type Draft = NewTopic;
    const PATH: &'static str = "/admin/topics";
}

impl MasterResource for Subtopic {
    type Draft = NewSubtopic;
    const PATH: &'static str = "/admin/subtopics";
}

impl MasterResource for Tutor {
    type Draft = NewTutor;
    const PATH: &'static str = "/admin/tutors";
}

impl MasterResource for Venue {
    type Draft = NewVenue;
    const PATH: &'static str = "/admin/venues";
}

impl MasterResource for Author {
    type Draft = NewAuthor;
    const PATH: &'static str = "/admin/authors";
}

impl MasterResource for Category {
    type Draft = NewCategory;
    const PATH: &'static str = "/admin/categories";
}

/// Service over the faculties collection.
pub type FacultyService = MasterService<Faculty>;

/// Service over the departments collection.
pub type DepartmentService = MasterService<Department>;

/// Service over the semesters collection.
pub type SemesterService = MasterService<Semester>;

/// Service over the subjects collection.
pub type SubjectService = MasterService<Subject>;

/// Service over the topics collection.
pub type TopicService = MasterService<Topic>;

/// Service over the subtopics collection.
pub type SubtopicService = MasterService<Subtopic>;

/// Service over the tutors collection.
pub type TutorService = MasterService<Tutor>;

/// Service over the venues collection.
pub type VenueService = MasterService<Venue>;

/// Service over the authors collection.
pub type AuthorService = MasterService<Author>;

/// Service over the categories collection.
pub type CategoryService = MasterService<Category>;
