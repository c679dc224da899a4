//! Student endpoints.

use studia_http::{Empty, Envelope, HttpClient};

use crate::model::{NewStudent, Student, UpdateStudent};
use crate::service::ListPayload;

/// Client for the student endpoints.
///
/// Students live under `/students` rather than the `/admin` prefix; the
/// same records back the public storefront.
#[derive(Debug, Clone)]
pub struct StudentService {
    client: HttpClient,
}

impl StudentService {
    /// Creates a new student service.
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }

    /// Lists every student.
    pub async fn list(&self) -> Envelope<Vec<Student>> {
        let response: Envelope<ListPayload<Student>> = self.client.get("/students").await;
        response.map(ListPayload::into_items)
    }

    /// Fetches a single student.
    pub async fn get(&self, id: i64) -> Envelope<Student> {
        self.client.get(&format!("/students/{id}")).await
    }

    /// Registers a student.
    pub async fn create(&self, draft: &NewStudent) -> Envelope<Student> {
        self.client.post("/students", draft).await
    }

    /// Updates a student.
    pub async fn update(&self, id: i64, changes: &UpdateStudent) -> Envelope<Student> {
        self.client.put(&format!("/students/{id}"), changes).await
    }

    /// Deletes a student.
    pub async fn delete(&self, id: i64) -> Envelope<Empty> {
        self.client.delete(&format!("/students/{id}")).await
    }
}
