//! Commonly used items from studia-admin.
//!
//! # Usage
//!
//! ```rust,ignore
//! use studia_admin::prelude::*;
//! ```

pub use crate::client::AdminClient;
pub use crate::debounce::Debouncer;
pub use crate::filter::{ListFilter, Page, Searchable};
// Domain models
pub use crate::model::{
    Author, Book, Category, Department, Discussion, DiscussionStatus, Faculty, LoginCredentials,
    LoginData, NewAuthor, NewBook, NewCategory, NewDepartment, NewDiscussion, NewFaculty,
    NewSemester, NewStudent, NewSubject, NewSubtopic, NewTopic, NewTutor, NewVenue, Order,
    OrderItem, OrderStatus, Payment, PaymentMethod, PaymentStatus, RecordRef, Semester, Student,
    Subject, Subtopic, Topic, Tutor, UpdateBook, UpdateDiscussion, UpdateStudent, User, UserRole,
    Venue,
};
// Resource services
pub use crate::service::{
    AuthService, AuthorService, BookService, CategoryService, DepartmentService,
    DiscussionService, FacultyService, ListPayload, MasterResource, MasterService, OrderService,
    PaymentService, SemesterService, StudentService, SubjectService, SubtopicService,
    TopicService, TutorService, VenueService,
};
pub use crate::session::{SessionPhase, SessionState, SessionStore};
// Transport types
pub use studia_http::{Empty, Envelope, Error, FieldErrors, Result, error_code};
