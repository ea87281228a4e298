pub mod absences;
pub mod auth;
pub mod class_groups;
pub mod disciplinary;
pub mod grades;
pub mod guardians;
pub mod offerings;
pub mod reports;
pub mod reservations;
pub mod rooms;
pub mod students;
pub mod subjects;
pub mod users;

pub use absences::configure_absence_routes;
pub use auth::configure_auth_routes;
pub use class_groups::configure_class_group_routes;
pub use disciplinary::configure_disciplinary_routes;
pub use grades::configure_grade_routes;
pub use guardians::configure_guardian_routes;
pub use offerings::configure_offering_routes;
pub use reports::configure_report_routes;
pub use reservations::configure_reservation_routes;
pub use rooms::configure_room_routes;
pub use students::configure_student_routes;
pub use subjects::configure_subject_routes;
pub use users::configure_user_routes;
