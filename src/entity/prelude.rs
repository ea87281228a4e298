//! Re-exports for shorter imports in the storage layer.

pub use super::absences::{
    ActiveModel as AbsenceActiveModel, Entity as Absences, Model as AbsenceModel,
};
pub use super::class_groups::{
    ActiveModel as ClassGroupActiveModel, Entity as ClassGroups, Model as ClassGroupModel,
};
pub use super::course_offerings::{
    ActiveModel as CourseOfferingActiveModel, Entity as CourseOfferings,
    Model as CourseOfferingModel,
};
pub use super::grades::{ActiveModel as GradeActiveModel, Entity as Grades, Model as GradeModel};
pub use super::guardian_profiles::{
    ActiveModel as GuardianProfileActiveModel, Entity as GuardianProfiles,
    Model as GuardianProfileModel,
};
pub use super::guardian_students::{
    ActiveModel as GuardianStudentActiveModel, Entity as GuardianStudents,
    Model as GuardianStudentModel,
};
pub use super::offering_teachers::{
    ActiveModel as OfferingTeacherActiveModel, Entity as OfferingTeachers,
    Model as OfferingTeacherModel,
};
pub use super::room_reservations::{
    ActiveModel as RoomReservationActiveModel, Entity as RoomReservations,
    Model as RoomReservationModel,
};
pub use super::rooms::{ActiveModel as RoomActiveModel, Entity as Rooms, Model as RoomModel};
pub use super::student_profiles::{
    ActiveModel as StudentProfileActiveModel, Entity as StudentProfiles,
    Model as StudentProfileModel,
};
pub use super::subjects::{
    ActiveModel as SubjectActiveModel, Entity as Subjects, Model as SubjectModel,
};
pub use super::suspensions::{
    ActiveModel as SuspensionActiveModel, Entity as Suspensions, Model as SuspensionModel,
};
pub use super::users::{ActiveModel as UserActiveModel, Entity as Users, Model as UserModel};
pub use super::warnings::{
    ActiveModel as WarningActiveModel, Entity as Warnings, Model as WarningModel,
};
