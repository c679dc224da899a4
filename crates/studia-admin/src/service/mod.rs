//! Typed access to the admin API resources.
//!
//! One service per resource family, each a thin wrapper over the shared
//! [`HttpClient`](studia_http::HttpClient). Services return envelopes
//! as-is; they never interpret outcomes beyond unwrapping list payloads.

mod auth;
mod book;
mod discussion;
mod list;
mod master;
mod order;
mod payment;
mod student;

pub use auth::AuthService;
pub use book::BookService;
pub use discussion::DiscussionService;
pub use list::ListPayload;
pub use master::{
    AuthorService, CategoryService, DepartmentService, FacultyService, MasterResource,
    MasterService, SemesterService, SubjectService, SubtopicService, TopicService, TutorService,
    VenueService,
};
pub use order::OrderService;
pub use payment::PaymentService;
pub use student::StudentService;
