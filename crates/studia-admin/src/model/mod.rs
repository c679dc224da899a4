//! Domain models exchanged with the admin API.
//!
//! Records are populated by the backend and rendered as-is; drafts
//! (`New*`/`Update*`) are the write-side companions submitted to the
//! create and update endpoints.

mod book;
mod discussion;
mod master;
mod order;
mod payment;
mod student;
mod user;

// Catalog models
pub use book::{Book, NewBook, UpdateBook};
pub use discussion::{
    Discussion, DiscussionStatus, NewDiscussion, RecordRef, UpdateDiscussion,
};
// Master data models
pub use master::{
    Author, Category, Department, Faculty, NewAuthor, NewCategory, NewDepartment, NewFaculty,
    NewSemester, NewSubject, NewSubtopic, NewTopic, NewTutor, NewVenue, Semester, Subject,
    Subtopic, Topic, Tutor, Venue,
};
// Commerce models
pub use order::{Order, OrderItem, OrderStatus};
pub use payment::{Payment, PaymentMethod, PaymentStatus};
// People models
pub use student::{NewStudent, Student, UpdateStudent};
pub use user::{LoginCredentials, LoginData, User, UserRole};
