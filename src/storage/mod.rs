use std::sync::Arc;

use crate::models::{
    absences::{
        entities::Absence,
        requests::{AbsenceListQuery, CreateAbsenceRequest, UpdateAbsenceRequest},
        responses::AbsenceListResponse,
    },
    class_groups::{
        entities::ClassGroup,
        requests::{ClassGroupListQuery, CreateClassGroupRequest, UpdateClassGroupRequest},
        responses::ClassGroupListResponse,
    },
    disciplinary::{
        entities::{Suspension, Warning},
        requests::{
            CreateSuspensionRequest, CreateWarningRequest, DisciplinaryListQuery,
            UpdateSuspensionRequest, UpdateWarningRequest,
        },
        responses::{SuspensionListResponse, WarningListResponse},
    },
    grades::{
        entities::Grade,
        requests::{CreateGradeRequest, GradeListQuery, UpdateGradeRequest},
        responses::GradeListResponse,
    },
    guardians::{
        entities::{GuardianDetail, GuardianProfile},
        requests::{CreateGuardianRequest, GuardianListQuery, UpdateGuardianRequest},
        responses::GuardianListResponse,
    },
    offerings::{
        entities::CourseOffering,
        requests::{CreateOfferingRequest, OfferingListQuery, UpdateOfferingRequest},
        responses::OfferingListResponse,
    },
    reservations::{
        entities::RoomReservation,
        requests::{CreateReservationRequest, ReservationListQuery, UpdateReservationRequest},
        responses::ReservationListResponse,
    },
    rooms::{
        entities::Room,
        requests::{CreateRoomRequest, RoomListQuery, UpdateRoomRequest},
        responses::RoomListResponse,
    },
    students::{
        entities::{StudentDetail, StudentProfile},
        requests::{StudentListQuery, UpdateStudentRequest},
        responses::StudentListResponse,
    },
    subjects::{
        entities::Subject,
        requests::{CreateSubjectRequest, SubjectListQuery, UpdateSubjectRequest},
        responses::SubjectListResponse,
    },
    users::{
        entities::{User, UserRole},
        requests::{CreateUserRequest, UpdateUserRequest, UserListQuery},
        responses::UserListResponse,
    },
};

use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// Account management
    // The password hash is produced by the service layer
    async fn create_user(&self, user: CreateUserRequest, password_hash: &str) -> Result<User>;
    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>>;
    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>>;
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>>;
    async fn get_user_by_username_or_email(&self, identifier: &str) -> Result<Option<User>>;
    async fn list_users_with_pagination(&self, query: UserListQuery) -> Result<UserListResponse>;
    async fn update_user(&self, id: i64, update: UpdateUserRequest) -> Result<Option<User>>;
    async fn delete_user(&self, id: i64) -> Result<bool>;
    async fn update_last_login(&self, id: i64) -> Result<bool>;
    async fn count_users(&self) -> Result<u64>;
    async fn count_users_by_role(&self, role: UserRole) -> Result<u64>;

    /// Student profiles
    async fn create_student_profile(
        &self,
        user_id: i64,
        class_group_id: Option<i64>,
    ) -> Result<StudentProfile>;
    async fn get_student_by_id(&self, id: i64) -> Result<Option<StudentDetail>>;
    async fn get_student_by_user_id(&self, user_id: i64) -> Result<Option<StudentProfile>>;
    async fn list_students_with_pagination(
        &self,
        query: StudentListQuery,
    ) -> Result<StudentListResponse>;
    async fn list_students_by_ids(&self, ids: &[i64]) -> Result<Vec<StudentDetail>>;
    async fn list_student_profiles_by_group(
        &self,
        class_group_id: i64,
    ) -> Result<Vec<StudentProfile>>;
    async fn update_student(
        &self,
        id: i64,
        update: UpdateStudentRequest,
    ) -> Result<Option<StudentDetail>>;
    async fn delete_student(&self, id: i64) -> Result<bool>;
    async fn count_students(&self) -> Result<u64>;

    /// Guardian profiles and portal links
    async fn create_guardian_profile(
        &self,
        user_id: i64,
        guardian: CreateGuardianRequest,
    ) -> Result<GuardianProfile>;
    async fn get_guardian_by_id(&self, id: i64) -> Result<Option<GuardianDetail>>;
    async fn get_guardian_by_user_id(&self, user_id: i64) -> Result<Option<GuardianProfile>>;
    async fn list_guardians_with_pagination(
        &self,
        query: GuardianListQuery,
    ) -> Result<GuardianListResponse>;
    async fn update_guardian(
        &self,
        id: i64,
        update: UpdateGuardianRequest,
    ) -> Result<Option<GuardianDetail>>;
    async fn delete_guardian(&self, id: i64) -> Result<bool>;
    // Linked student profile ids, looked up by guardian account id
    async fn list_guardian_student_ids(&self, user_id: i64) -> Result<Vec<i64>>;
    async fn get_guardian_for_student(
        &self,
        student_id: i64,
    ) -> Result<Option<(GuardianProfile, User)>>;

    /// Class groups
    async fn create_class_group(&self, group: CreateClassGroupRequest) -> Result<ClassGroup>;
    async fn get_class_group_by_id(&self, id: i64) -> Result<Option<ClassGroup>>;
    async fn list_class_groups_with_pagination(
        &self,
        query: ClassGroupListQuery,
    ) -> Result<ClassGroupListResponse>;
    async fn list_all_class_groups(&self) -> Result<Vec<ClassGroup>>;
    async fn update_class_group(
        &self,
        id: i64,
        update: UpdateClassGroupRequest,
    ) -> Result<Option<ClassGroup>>;
    async fn delete_class_group(&self, id: i64) -> Result<bool>;
    async fn count_class_groups(&self) -> Result<u64>;

    /// Subjects
    async fn create_subject(&self, subject: CreateSubjectRequest) -> Result<Subject>;
    async fn get_subject_by_id(&self, id: i64) -> Result<Option<Subject>>;
    async fn list_subjects_with_pagination(
        &self,
        query: SubjectListQuery,
    ) -> Result<SubjectListResponse>;
    async fn list_subjects_by_ids(&self, ids: &[i64]) -> Result<Vec<Subject>>;
    async fn update_subject(&self, id: i64, update: UpdateSubjectRequest)
    -> Result<Option<Subject>>;
    async fn delete_subject(&self, id: i64) -> Result<bool>;

    /// Course offerings
    async fn create_offering(&self, offering: CreateOfferingRequest) -> Result<CourseOffering>;
    async fn get_offering_by_id(&self, id: i64) -> Result<Option<CourseOffering>>;
    async fn list_offerings_with_pagination(
        &self,
        query: OfferingListQuery,
    ) -> Result<OfferingListResponse>;
    async fn list_offerings_by_ids(&self, ids: &[i64]) -> Result<Vec<CourseOffering>>;
    async fn update_offering(
        &self,
        id: i64,
        update: UpdateOfferingRequest,
    ) -> Result<Option<CourseOffering>>;
    async fn delete_offering(&self, id: i64) -> Result<bool>;
    // Per-item authorization check of the bulk grade upsert
    async fn offering_taught_by(&self, offering_id: i64, teacher_id: i64) -> Result<bool>;

    /// Grades
    async fn create_grade(&self, grade: CreateGradeRequest) -> Result<Grade>;
    async fn get_grade_by_id(&self, id: i64) -> Result<Option<Grade>>;
    // The teacher-owned variant backs the bulk upsert's ownership rule
    async fn get_grade_by_id_taught_by(&self, id: i64, teacher_id: i64) -> Result<Option<Grade>>;
    async fn list_grades_with_pagination(&self, query: GradeListQuery)
    -> Result<GradeListResponse>;
    async fn list_grades_for_students(&self, student_ids: &[i64]) -> Result<Vec<Grade>>;
    async fn update_grade(&self, id: i64, update: UpdateGradeRequest) -> Result<Option<Grade>>;
    async fn delete_grade(&self, id: i64) -> Result<bool>;

    /// Absences
    async fn create_absence(&self, absence: CreateAbsenceRequest) -> Result<Absence>;
    async fn get_absence_by_id(&self, id: i64) -> Result<Option<Absence>>;
    async fn list_absences_with_pagination(
        &self,
        query: AbsenceListQuery,
    ) -> Result<AbsenceListResponse>;
    async fn list_absences_for_student(&self, student_id: i64) -> Result<Vec<Absence>>;
    async fn update_absence(
        &self,
        id: i64,
        update: UpdateAbsenceRequest,
    ) -> Result<Option<Absence>>;
    async fn delete_absence(&self, id: i64) -> Result<bool>;

    /// Disciplinary records
    async fn create_warning(&self, warning: CreateWarningRequest) -> Result<Warning>;
    async fn get_warning_by_id(&self, id: i64) -> Result<Option<Warning>>;
    async fn list_warnings_with_pagination(
        &self,
        query: DisciplinaryListQuery,
    ) -> Result<WarningListResponse>;
    async fn update_warning(
        &self,
        id: i64,
        update: UpdateWarningRequest,
    ) -> Result<Option<Warning>>;
    async fn delete_warning(&self, id: i64) -> Result<bool>;
    async fn create_suspension(&self, suspension: CreateSuspensionRequest) -> Result<Suspension>;
    async fn get_suspension_by_id(&self, id: i64) -> Result<Option<Suspension>>;
    async fn list_suspensions_with_pagination(
        &self,
        query: DisciplinaryListQuery,
    ) -> Result<SuspensionListResponse>;
    async fn update_suspension(
        &self,
        id: i64,
        update: UpdateSuspensionRequest,
    ) -> Result<Option<Suspension>>;
    async fn delete_suspension(&self, id: i64) -> Result<bool>;

    /// Rooms
    async fn create_room(&self, room: CreateRoomRequest) -> Result<Room>;
    async fn get_room_by_id(&self, id: i64) -> Result<Option<Room>>;
    async fn list_rooms_with_pagination(&self, query: RoomListQuery) -> Result<RoomListResponse>;
    async fn update_room(&self, id: i64, update: UpdateRoomRequest) -> Result<Option<Room>>;
    async fn delete_room(&self, id: i64) -> Result<bool>;

    /// Room reservations
    async fn create_reservation(
        &self,
        user_id: i64,
        reservation: CreateReservationRequest,
    ) -> Result<RoomReservation>;
    async fn get_reservation_by_id(&self, id: i64) -> Result<Option<RoomReservation>>;
    async fn list_reservations_with_pagination(
        &self,
        query: ReservationListQuery,
    ) -> Result<ReservationListResponse>;
    // Every booking for one room, for overlap validation in the service
    async fn list_room_reservations(&self, room_id: i64) -> Result<Vec<RoomReservation>>;
    async fn update_reservation(
        &self,
        id: i64,
        update: UpdateReservationRequest,
    ) -> Result<Option<RoomReservation>>;
    async fn delete_reservation(&self, id: i64) -> Result<bool>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
