//! SeaORM storage implementation.
//!
//! Unified database layer supporting SQLite, PostgreSQL and MySQL.

mod absences;
mod class_groups;
mod disciplinary;
mod grades;
mod guardians;
mod offerings;
mod reservations;
mod rooms;
mod students;
mod subjects;
mod users;

use crate::config::AppConfig;
use crate::errors::{EscolaError, Result};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        let db_url = Self::build_database_url(&config.database.url)?;

        let db = if db_url.starts_with("sqlite://") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        Migrator::up(&db, None)
            .await
            .map_err(|e| EscolaError::database_operation(format!("Migration failed: {e}")))?;

        info!("SeaORM storage initialized, database: {}", db_url);

        Ok(Self { db })
    }

    /// SQLite connection with WAL and pragma tuning.
    async fn connect_sqlite(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| EscolaError::database_config(format!("SQLite URL parse failed: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory")
            .pragma("mmap_size", "536870912")
            .pragma("wal_autocheckpoint", "1000");

        let pool = SqlitePoolOptions::new()
            .max_connections(config.database.pool_size)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(300))
            .connect_with(opt)
            .await
            .map_err(|e| EscolaError::database_connection(format!("SQLite connect failed: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// Generic connection (PostgreSQL, MySQL).
    async fn connect_generic(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.database.pool_size)
            .min_connections(5)
            .connect_timeout(Duration::from_secs(config.database.timeout))
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| EscolaError::database_connection(format!("Database connect failed: {e}")))
    }

    /// Infers the backend from the URL and normalizes bare file paths.
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite://") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") || url == ":memory:" {
            Ok(format!("sqlite://{}?mode=rwc", url))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(EscolaError::database_config(format!(
                "Cannot infer database type from URL: {url}. Supported: sqlite://, postgres://, mysql://, or a .db/.sqlite file path"
            )))
        }
    }
}

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
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // Accounts
    async fn create_user(&self, user: CreateUserRequest, password_hash: &str) -> Result<User> {
        self.create_user_impl(user, password_hash).await
    }

    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>> {
        self.get_user_by_id_impl(id).await
    }

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        self.get_user_by_username_impl(username).await
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        self.get_user_by_email_impl(email).await
    }

    async fn get_user_by_username_or_email(&self, identifier: &str) -> Result<Option<User>> {
        self.get_user_by_username_or_email_impl(identifier).await
    }

    async fn list_users_with_pagination(&self, query: UserListQuery) -> Result<UserListResponse> {
        self.list_users_with_pagination_impl(query).await
    }

    async fn update_user(&self, id: i64, update: UpdateUserRequest) -> Result<Option<User>> {
        self.update_user_impl(id, update).await
    }

    async fn delete_user(&self, id: i64) -> Result<bool> {
        self.delete_user_impl(id).await
    }

    async fn update_last_login(&self, id: i64) -> Result<bool> {
        self.update_last_login_impl(id).await
    }

    async fn count_users(&self) -> Result<u64> {
        self.count_users_impl().await
    }

    async fn count_users_by_role(&self, role: UserRole) -> Result<u64> {
        self.count_users_by_role_impl(role).await
    }

    // Student profiles
    async fn create_student_profile(
        &self,
        user_id: i64,
        class_group_id: Option<i64>,
    ) -> Result<StudentProfile> {
        self.create_student_profile_impl(user_id, class_group_id)
            .await
    }

    async fn get_student_by_id(&self, id: i64) -> Result<Option<StudentDetail>> {
        self.get_student_by_id_impl(id).await
    }

    async fn get_student_by_user_id(&self, user_id: i64) -> Result<Option<StudentProfile>> {
        self.get_student_by_user_id_impl(user_id).await
    }

    async fn list_students_with_pagination(
        &self,
        query: StudentListQuery,
    ) -> Result<StudentListResponse> {
        self.list_students_with_pagination_impl(query).await
    }

    async fn list_students_by_ids(&self, ids: &[i64]) -> Result<Vec<StudentDetail>> {
        self.list_students_by_ids_impl(ids).await
    }

    async fn list_student_profiles_by_group(
        &self,
        class_group_id: i64,
    ) -> Result<Vec<StudentProfile>> {
        self.list_student_profiles_by_group_impl(class_group_id)
            .await
    }

    async fn update_student(
        &self,
        id: i64,
        update: UpdateStudentRequest,
    ) -> Result<Option<StudentDetail>> {
        self.update_student_impl(id, update).await
    }

    async fn delete_student(&self, id: i64) -> Result<bool> {
        self.delete_student_impl(id).await
    }

    async fn count_students(&self) -> Result<u64> {
        self.count_students_impl().await
    }

    // Guardians
    async fn create_guardian_profile(
        &self,
        user_id: i64,
        guardian: CreateGuardianRequest,
    ) -> Result<GuardianProfile> {
        self.create_guardian_profile_impl(user_id, guardian).await
    }

    async fn get_guardian_by_id(&self, id: i64) -> Result<Option<GuardianDetail>> {
        self.get_guardian_by_id_impl(id).await
    }

    async fn get_guardian_by_user_id(&self, user_id: i64) -> Result<Option<GuardianProfile>> {
        self.get_guardian_by_user_id_impl(user_id).await
    }

    async fn list_guardians_with_pagination(
        &self,
        query: GuardianListQuery,
    ) -> Result<GuardianListResponse> {
        self.list_guardians_with_pagination_impl(query).await
    }

    async fn update_guardian(
        &self,
        id: i64,
        update: UpdateGuardianRequest,
    ) -> Result<Option<GuardianDetail>> {
        self.update_guardian_impl(id, update).await
    }

    async fn delete_guardian(&self, id: i64) -> Result<bool> {
        self.delete_guardian_impl(id).await
    }

    async fn list_guardian_student_ids(&self, user_id: i64) -> Result<Vec<i64>> {
        self.list_guardian_student_ids_impl(user_id).await
    }

    async fn get_guardian_for_student(
        &self,
        student_id: i64,
    ) -> Result<Option<(GuardianProfile, User)>> {
        self.get_guardian_for_student_impl(student_id).await
    }

    // Class groups
    async fn create_class_group(&self, group: CreateClassGroupRequest) -> Result<ClassGroup> {
        self.create_class_group_impl(group).await
    }

    async fn get_class_group_by_id(&self, id: i64) -> Result<Option<ClassGroup>> {
        self.get_class_group_by_id_impl(id).await
    }

    async fn list_class_groups_with_pagination(
        &self,
        query: ClassGroupListQuery,
    ) -> Result<ClassGroupListResponse> {
        self.list_class_groups_with_pagination_impl(query).await
    }

    async fn list_all_class_groups(&self) -> Result<Vec<ClassGroup>> {
        self.list_all_class_groups_impl().await
    }

    async fn update_class_group(
        &self,
        id: i64,
        update: UpdateClassGroupRequest,
    ) -> Result<Option<ClassGroup>> {
        self.update_class_group_impl(id, update).await
    }

    async fn delete_class_group(&self, id: i64) -> Result<bool> {
        self.delete_class_group_impl(id).await
    }

    async fn count_class_groups(&self) -> Result<u64> {
        self.count_class_groups_impl().await
    }

    // Subjects
    async fn create_subject(&self, subject: CreateSubjectRequest) -> Result<Subject> {
        self.create_subject_impl(subject).await
    }

    async fn get_subject_by_id(&self, id: i64) -> Result<Option<Subject>> {
        self.get_subject_by_id_impl(id).await
    }

    async fn list_subjects_with_pagination(
        &self,
        query: SubjectListQuery,
    ) -> Result<SubjectListResponse> {
        self.list_subjects_with_pagination_impl(query).await
    }

    async fn list_subjects_by_ids(&self, ids: &[i64]) -> Result<Vec<Subject>> {
        self.list_subjects_by_ids_impl(ids).await
    }

    async fn update_subject(
        &self,
        id: i64,
        update: UpdateSubjectRequest,
    ) -> Result<Option<Subject>> {
        self.update_subject_impl(id, update).await
    }

    async fn delete_subject(&self, id: i64) -> Result<bool> {
        self.delete_subject_impl(id).await
    }

    // Course offerings
    async fn create_offering(&self, offering: CreateOfferingRequest) -> Result<CourseOffering> {
        self.create_offering_impl(offering).await
    }

    async fn get_offering_by_id(&self, id: i64) -> Result<Option<CourseOffering>> {
        self.get_offering_by_id_impl(id).await
    }

    async fn list_offerings_with_pagination(
        &self,
        query: OfferingListQuery,
    ) -> Result<OfferingListResponse> {
        self.list_offerings_with_pagination_impl(query).await
    }

    async fn list_offerings_by_ids(&self, ids: &[i64]) -> Result<Vec<CourseOffering>> {
        self.list_offerings_by_ids_impl(ids).await
    }

    async fn update_offering(
        &self,
        id: i64,
        update: UpdateOfferingRequest,
    ) -> Result<Option<CourseOffering>> {
        self.update_offering_impl(id, update).await
    }

    async fn delete_offering(&self, id: i64) -> Result<bool> {
        self.delete_offering_impl(id).await
    }

    async fn offering_taught_by(&self, offering_id: i64, teacher_id: i64) -> Result<bool> {
        self.offering_taught_by_impl(offering_id, teacher_id).await
    }

    // Grades
    async fn create_grade(&self, grade: CreateGradeRequest) -> Result<Grade> {
        self.create_grade_impl(grade).await
    }

    async fn get_grade_by_id(&self, id: i64) -> Result<Option<Grade>> {
        self.get_grade_by_id_impl(id).await
    }

    async fn get_grade_by_id_taught_by(&self, id: i64, teacher_id: i64) -> Result<Option<Grade>> {
        self.get_grade_by_id_taught_by_impl(id, teacher_id).await
    }

    async fn list_grades_with_pagination(
        &self,
        query: GradeListQuery,
    ) -> Result<GradeListResponse> {
        self.list_grades_with_pagination_impl(query).await
    }

    async fn list_grades_for_students(&self, student_ids: &[i64]) -> Result<Vec<Grade>> {
        self.list_grades_for_students_impl(student_ids).await
    }

    async fn update_grade(&self, id: i64, update: UpdateGradeRequest) -> Result<Option<Grade>> {
        self.update_grade_impl(id, update).await
    }

    async fn delete_grade(&self, id: i64) -> Result<bool> {
        self.delete_grade_impl(id).await
    }

    // Absences
    async fn create_absence(&self, absence: CreateAbsenceRequest) -> Result<Absence> {
        self.create_absence_impl(absence).await
    }

    async fn get_absence_by_id(&self, id: i64) -> Result<Option<Absence>> {
        self.get_absence_by_id_impl(id).await
    }

    async fn list_absences_with_pagination(
        &self,
        query: AbsenceListQuery,
    ) -> Result<AbsenceListResponse> {
        self.list_absences_with_pagination_impl(query).await
    }

    async fn list_absences_for_student(&self, student_id: i64) -> Result<Vec<Absence>> {
        self.list_absences_for_student_impl(student_id).await
    }

    async fn update_absence(
        &self,
        id: i64,
        update: UpdateAbsenceRequest,
    ) -> Result<Option<Absence>> {
        self.update_absence_impl(id, update).await
    }

    async fn delete_absence(&self, id: i64) -> Result<bool> {
        self.delete_absence_impl(id).await
    }

    // Disciplinary records
    async fn create_warning(&self, warning: CreateWarningRequest) -> Result<Warning> {
        self.create_warning_impl(warning).await
    }

    async fn get_warning_by_id(&self, id: i64) -> Result<Option<Warning>> {
        self.get_warning_by_id_impl(id).await
    }

    async fn list_warnings_with_pagination(
        &self,
        query: DisciplinaryListQuery,
    ) -> Result<WarningListResponse> {
        self.list_warnings_with_pagination_impl(query).await
    }

    async fn update_warning(
        &self,
        id: i64,
        update: UpdateWarningRequest,
    ) -> Result<Option<Warning>> {
        self.update_warning_impl(id, update).await
    }

    async fn delete_warning(&self, id: i64) -> Result<bool> {
        self.delete_warning_impl(id).await
    }

    async fn create_suspension(&self, suspension: CreateSuspensionRequest) -> Result<Suspension> {
        self.create_suspension_impl(suspension).await
    }

    async fn get_suspension_by_id(&self, id: i64) -> Result<Option<Suspension>> {
        self.get_suspension_by_id_impl(id).await
    }

    async fn list_suspensions_with_pagination(
        &self,
        query: DisciplinaryListQuery,
    ) -> Result<SuspensionListResponse> {
        self.list_suspensions_with_pagination_impl(query).await
    }

    async fn update_suspension(
        &self,
        id: i64,
        update: UpdateSuspensionRequest,
    ) -> Result<Option<Suspension>> {
        self.update_suspension_impl(id, update).await
    }

    async fn delete_suspension(&self, id: i64) -> Result<bool> {
        self.delete_suspension_impl(id).await
    }

    // Rooms
    async fn create_room(&self, room: CreateRoomRequest) -> Result<Room> {
        self.create_room_impl(room).await
    }

    async fn get_room_by_id(&self, id: i64) -> Result<Option<Room>> {
        self.get_room_by_id_impl(id).await
    }

    async fn list_rooms_with_pagination(&self, query: RoomListQuery) -> Result<RoomListResponse> {
        self.list_rooms_with_pagination_impl(query).await
    }

    async fn update_room(&self, id: i64, update: UpdateRoomRequest) -> Result<Option<Room>> {
        self.update_room_impl(id, update).await
    }

    async fn delete_room(&self, id: i64) -> Result<bool> {
        self.delete_room_impl(id).await
    }

    // Room reservations
    async fn create_reservation(
        &self,
        user_id: i64,
        reservation: CreateReservationRequest,
    ) -> Result<RoomReservation> {
        self.create_reservation_impl(user_id, reservation).await
    }

    async fn get_reservation_by_id(&self, id: i64) -> Result<Option<RoomReservation>> {
        self.get_reservation_by_id_impl(id).await
    }

    async fn list_reservations_with_pagination(
        &self,
        query: ReservationListQuery,
    ) -> Result<ReservationListResponse> {
        self.list_reservations_with_pagination_impl(query).await
    }

    async fn list_room_reservations(&self, room_id: i64) -> Result<Vec<RoomReservation>> {
        self.list_room_reservations_impl(room_id).await
    }

    async fn update_reservation(
        &self,
        id: i64,
        update: UpdateReservationRequest,
    ) -> Result<Option<RoomReservation>> {
        self.update_reservation_impl(id, update).await
    }

    async fn delete_reservation(&self, id: i64) -> Result<bool> {
        self.delete_reservation_impl(id).await
    }
}
