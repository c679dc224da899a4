//! Discussion endpoints.

use studia_http::{Empty, Envelope, HttpClient};

use crate::model::{Discussion, NewDiscussion, Student, UpdateDiscussion};
use crate::service::ListPayload;

/// Client for the discussion endpoints.
#[derive(Debug, Clone)]
pub struct DiscussionService {
    client: HttpClient,
}

impl DiscussionService {
    /// Creates a new discussion service.
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }

    /// Lists every discussion.
    pub async fn list(&self) -> Envelope<Vec<Discussion>> {
        let response: Envelope<ListPayload<Discussion>> =
            self.client.get("/admin/discussions").await;
        response.map(ListPayload::into_items)
    }

    /// Fetches a single discussion.
    pub async fn get(&self, id: i64) -> Envelope<Discussion> {
        self.client.get(&format!("/admin/discussions/{id}")).await
    }

    /// Creates a discussion, creating any master records named in the
    /// draft's hierarchy along the way.
    pub async fn create(&self, draft: &NewDiscussion) -> Envelope<Discussion> {
        self.client.post("/admin/discussions", draft).await
    }

    /// Updates a discussion.
    pub async fn update(&self, id: i64, changes: &UpdateDiscussion) -> Envelope<Discussion> {
        self.client
            .put(&format!("/admin/discussions/{id}"), changes)
            .await
    }

    /// Deletes a discussion.
    pub async fn delete(&self, id: i64) -> Envelope<Empty> {
        self.client
            .delete(&format!("/admin/discussions/{id}"))
            .await
    }

    /// Lists the students enrolled in a discussion.
    pub async fn students(&self, id: i64) -> Envelope<Vec<Student>> {
        let response: Envelope<ListPayload<Student>> = self
            .client
            .get(&format!("/admin/discussions/{id}/students"))
            .await;
        response.map(ListPayload::into_items)
    }
}
