//! Domain records persisted as JSON collections.

macro_rules! impl_record {
    ($ty:ty, $entity:literal) => {
        impl crate::models::Record for $ty {
            const ENTITY: &'static str = $entity;

            fn id(&self) -> i64 {
                self.id
            }

            fn set_id(&mut self, id: i64) {
                self.id = id;
            }
        }
    };
}

pub(crate) use impl_record;

pub mod academic;
pub mod attendance;
pub mod calendar;
pub mod enums;
pub mod records;
pub mod school;
pub mod staff;
pub mod student;
pub mod user;

pub use academic::{Class, Subject, SubjectTeacher};
pub use attendance::{StudentAttendance, TeacherAttendance};
pub use calendar::CalendarEvent;
pub use records::{StudentAchievement, StudentViolation};
pub use school::School;
pub use staff::Teacher;
pub use student::{Student, StudentTransfer};
pub use user::User;

/// A record living in a list collection, addressed by its integer id.
pub trait Record: Clone {
    /// Human-readable entity name used in messages and errors.
    const ENTITY: &'static str;

    fn id(&self) -> i64;
    fn set_id(&mut self, id: i64);
}

/// Serde helper: skip empty optional strings on output.
pub(crate) fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().map(str::trim).unwrap_or("").is_empty()
}
