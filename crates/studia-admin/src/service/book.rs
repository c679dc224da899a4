//! Book catalog endpoints.

use reqwest::multipart::{Form, Part};
use studia_http::{Empty, Envelope, HttpClient};

use crate::model::{Book, NewBook, UpdateBook};
use crate::service::ListPayload;

/// Client for the book catalog endpoints.
#[derive(Debug, Clone)]
pub struct BookService {
    client: HttpClient,
}

impl BookService {
    /// Creates a new book service.
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }

    /// Lists every book in the catalog.
    pub async fn list(&self) -> Envelope<Vec<Book>> {
        let response: Envelope<ListPayload<Book>> = self.client.get("/admin/books").await;
        response.map(ListPayload::into_items)
    }

    /// Fetches a single book.
    pub async fn get(&self, id: i64) -> Envelope<Book> {
        self.client.get(&format!("/admin/books/{id}")).await
    }

    /// Creates a book.
    pub async fn create(&self, draft: &NewBook) -> Envelope<Book> {
        self.client.post("/admin/books", draft).await
    }

    /// Updates a book.
    pub async fn update(&self, id: i64, changes: &UpdateBook) -> Envelope<Book> {
        self.client.put(&format!("/admin/books/{id}"), changes).await
    }

    /// Deletes a book.
    pub async fn delete(&self, id: i64) -> Envelope<Empty> {
        self.client.delete(&format!("/admin/books/{id}")).await
    }

    /// Uploads a cover image for a book.
    ///
    /// The bytes go up as a multipart form; the transport sets the
    /// boundary-aware content type itself.
    pub async fn upload_cover(
        &self,
        id: i64,
        file_name: &str,
        mime_type: &str,
        bytes: Vec<u8>,
    ) -> Envelope<Book> {
        let part = Part::bytes(bytes).file_name(file_name.to_owned());
        let part = match part.mime_str(mime_type) {
            Ok(part) => part,
            Err(_) => {
                return Envelope::failure(format!("Invalid MIME type '{mime_type}'"));
            }
        };

        let form = Form::new().part("cover", part);
        self.client
            .post_multipart(&format!("/admin/books/{id}/cover"), form)
            .await
    }
}
