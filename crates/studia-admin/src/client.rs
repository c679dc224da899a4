//! High-level client bundling services and session state.

use std::sync::Arc;

use studia_http::{HttpClient, HttpClientConfig, KeyValueStorage, Result};

use crate::service::{
    AuthService, AuthorService, BookService, CategoryService, DepartmentService,
    DiscussionService, FacultyService, MasterResource, MasterService, OrderService,
    PaymentService, SemesterService, StudentService, SubjectService, SubtopicService,
    TopicService, TutorService, VenueService,
};
use crate::session::SessionStore;

/// Entry point for the admin API.
///
/// Owns the HTTP client and the session store and hands out per-resource
/// services on demand. Services are cheap to create; they share the
/// client's connection pool and credentials.
///
/// # Examples
///
/// ```rust,ignore
/// use std::sync::Arc;
///
/// use studia_admin::AdminClient;
/// use studia_http::{HttpClientConfig, MemoryStorage};
///
/// let config = HttpClientConfig::new("https://api.studia.app")?;
/// let client = AdminClient::new(config, Arc::new(MemoryStorage::new()))?;
///
/// client.session().login("admin@studia.app", "secret").await;
/// let books = client.books().list().await;
/// ```
#[derive(Debug, Clone)]
pub struct AdminClient {
    http: HttpClient,
    session: SessionStore,
}

impl AdminClient {
    /// Creates a client over the given configuration and token storage.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the underlying
    /// HTTP client cannot be created.
    pub fn new(config: HttpClientConfig, storage: Arc<dyn KeyValueStorage>) -> Result<Self> {
        let http = HttpClient::new(config, storage)?;
        let session = SessionStore::new(http.clone());
        Ok(Self { http, session })
    }

    /// Gets the underlying HTTP client.
    pub fn http(&self) -> &HttpClient {
        &self.http
    }

    /// Gets the session store.
    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    /// Creates an auth service.
    ///
    /// Prefer [`session`](Self::session) for signing in and out; the raw
    /// service does not persist credentials or track state.
    pub fn auth(&self) -> AuthService {
        AuthService::new(self.http.clone())
    }

    /// Creates a book service.
    pub fn books(&self) -> BookService {
        BookService::new(self.http.clone())
    }

    /// Creates a discussion service.
    pub fn discussions(&self) -> DiscussionService {
        DiscussionService::new(self.http.clone())
    }

    /// Creates an order service.
    pub fn orders(&self) -> OrderService {
        OrderService::new(self.http.clone())
    }

    /// Creates a payment service.
    pub fn payments(&self) -> PaymentService {
        PaymentService::new(self.http.clone())
    }

    /// Creates a student service.
    pub fn students(&self) -> StudentService {
        StudentService::new(self.http.clone())
    }

    /// Creates a faculty service.
    pub fn faculties(&self) -> FacultyService {
        self.master()
    }

    /// Creates a department service.
    pub fn departments(&self) -> DepartmentService {
        self.master()
    }

    /// Creates a semester service.
    pub fn semesters(&self) -> SemesterService {
        self.master()
    }

    /// Creates a subject service.
    pub fn subjects(&self) -> SubjectService {
        self.master()
    }

    /// Creates a topic service.
    pub fn topics(&self) -> TopicService {
        self.master()
    }

    /// Creates a subtopic service.
    pub fn subtopics(&self) -> SubtopicService {
        self.master()
    }

    /// Creates a tutor service.
    pub fn tutors(&self) -> TutorService {
        self.master()
    }

    /// Creates a venue service.
    pub fn venues(&self) -> VenueService {
        self.master()
    }

    /// Creates an author service.
    pub fn authors(&self) -> AuthorService {
        self.master()
    }

    /// Creates a category service.
    pub fn categories(&self) -> CategoryService {
        self.master()
    }

    /// Creates a service for a master data collection.
    ///
    /// ```rust,ignore
    /// let faculties = client.master::<Faculty>().list().await;
    /// ```
    pub fn master<R: MasterResource>(&self) -> MasterService<R> {
        MasterService::new(self.http.clone())
    }
}
