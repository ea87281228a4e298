//! SeaORM entity definitions.
//!
//! These entities are used for database access only and stay separate from
//! the business entities in the models module. The storage layer runs CRUD
//! against them and converts the rows into business entities.

pub mod prelude;

pub mod absences;
pub mod class_groups;
pub mod course_offerings;
pub mod grades;
pub mod guardian_profiles;
pub mod guardian_students;
pub mod offering_teachers;
pub mod room_reservations;
pub mod rooms;
pub mod student_profiles;
pub mod subjects;
pub mod suspensions;
pub mod users;
pub mod warnings;
