//! Data models for the academy
//!
//! Each entity is a flat record persisted as one element of the array held by
//! its document (see [`crate::storage::Record`]).

mod class_session;
mod enums;
mod payment;
mod student;
mod teacher;
mod user;

pub use class_session::ClassSession;
pub use enums::{ClassDuration, PaymentMethod, PaymentStatus};
pub use payment::Payment;
pub use student::Student;
pub use teacher::Teacher;
pub use user::{User, UserRole};

/// Form-level rules shared by the editable entities
pub trait Entity {
    /// Fill derived fields before the record is stored
    fn normalize(&mut self) {}

    /// Names (wire spelling) of required fields left empty, and of
    /// enumerated fields holding a label outside the known set
    fn invalid_fields(&self) -> Vec<&'static str>;
}
