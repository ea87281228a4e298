use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Users::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Users::Username)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Users::Email)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Users::PasswordHash).string().not_null())
                    .col(ColumnDef::new(Users::Role).string().not_null())
                    .col(ColumnDef::new(Users::Status).string().not_null())
                    .col(
                        ColumnDef::new(Users::IsSuperuser)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Users::FirstName).string().null())
                    .col(ColumnDef::new(Users::LastName).string().null())
                    .col(ColumnDef::new(Users::LastLogin).big_integer().null())
                    .col(ColumnDef::new(Users::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Users::UpdatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ClassGroups::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ClassGroups::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ClassGroups::Name).string().not_null())
                    .col(ColumnDef::new(ClassGroups::Shift).string().not_null())
                    .col(
                        ColumnDef::new(ClassGroups::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ClassGroups::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(StudentProfiles::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(StudentProfiles::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(StudentProfiles::UserId)
                            .big_integer()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(StudentProfiles::ClassGroupId)
                            .big_integer()
                            .null(),
                    )
                    .col(ColumnDef::new(StudentProfiles::Status).string().not_null())
                    .col(
                        ColumnDef::new(StudentProfiles::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(StudentProfiles::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(StudentProfiles::Table, StudentProfiles::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(StudentProfiles::Table, StudentProfiles::ClassGroupId)
                            .to(ClassGroups::Table, ClassGroups::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(GuardianProfiles::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(GuardianProfiles::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(GuardianProfiles::UserId)
                            .big_integer()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(GuardianProfiles::Phone).string().null())
                    .col(
                        ColumnDef::new(GuardianProfiles::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(GuardianProfiles::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(GuardianProfiles::Table, GuardianProfiles::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(GuardianStudents::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(GuardianStudents::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(GuardianStudents::GuardianId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(GuardianStudents::StudentId)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(GuardianStudents::Table, GuardianStudents::GuardianId)
                            .to(GuardianProfiles::Table, GuardianProfiles::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(GuardianStudents::Table, GuardianStudents::StudentId)
                            .to(StudentProfiles::Table, StudentProfiles::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .index(
                        Index::create()
                            .unique()
                            .name("uniq_guardian_students_pair")
                            .col(GuardianStudents::GuardianId)
                            .col(GuardianStudents::StudentId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Subjects::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Subjects::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Subjects::Name)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Subjects::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Subjects::UpdatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(CourseOfferings::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CourseOfferings::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(CourseOfferings::SubjectId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CourseOfferings::ClassGroupId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CourseOfferings::Workload)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(CourseOfferings::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CourseOfferings::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(CourseOfferings::Table, CourseOfferings::SubjectId)
                            .to(Subjects::Table, Subjects::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(CourseOfferings::Table, CourseOfferings::ClassGroupId)
                            .to(ClassGroups::Table, ClassGroups::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .index(
                        Index::create()
                            .unique()
                            .name("uniq_course_offerings_subject_class")
                            .col(CourseOfferings::SubjectId)
                            .col(CourseOfferings::ClassGroupId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(OfferingTeachers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(OfferingTeachers::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(OfferingTeachers::OfferingId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(OfferingTeachers::TeacherId)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(OfferingTeachers::Table, OfferingTeachers::OfferingId)
                            .to(CourseOfferings::Table, CourseOfferings::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(OfferingTeachers::Table, OfferingTeachers::TeacherId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .index(
                        Index::create()
                            .unique()
                            .name("uniq_offering_teachers_pair")
                            .col(OfferingTeachers::OfferingId)
                            .col(OfferingTeachers::TeacherId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Grades::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Grades::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Grades::StudentId).big_integer().not_null())
                    .col(ColumnDef::new(Grades::OfferingId).big_integer().not_null())
                    .col(ColumnDef::new(Grades::Term).string().not_null())
                    .col(ColumnDef::new(Grades::Value).double().not_null())
                    .col(ColumnDef::new(Grades::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Grades::UpdatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Grades::Table, Grades::StudentId)
                            .to(StudentProfiles::Table, StudentProfiles::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Grades::Table, Grades::OfferingId)
                            .to(CourseOfferings::Table, CourseOfferings::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .index(
                        Index::create()
                            .unique()
                            .name("uniq_grades_student_offering_term")
                            .col(Grades::StudentId)
                            .col(Grades::OfferingId)
                            .col(Grades::Term),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Absences::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Absences::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Absences::StudentId).big_integer().not_null())
                    .col(
                        ColumnDef::new(Absences::OfferingId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Absences::Date).date().not_null())
                    .col(
                        ColumnDef::new(Absences::Justified)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Absences::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Absences::UpdatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Absences::Table, Absences::StudentId)
                            .to(StudentProfiles::Table, StudentProfiles::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Absences::Table, Absences::OfferingId)
                            .to(CourseOfferings::Table, CourseOfferings::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Warnings::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Warnings::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Warnings::StudentId).big_integer().not_null())
                    .col(ColumnDef::new(Warnings::Date).date().not_null())
                    .col(ColumnDef::new(Warnings::Reason).text().not_null())
                    .col(ColumnDef::new(Warnings::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Warnings::UpdatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Warnings::Table, Warnings::StudentId)
                            .to(StudentProfiles::Table, StudentProfiles::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Suspensions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Suspensions::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Suspensions::StudentId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Suspensions::StartDate).date().not_null())
                    .col(ColumnDef::new(Suspensions::EndDate).date().not_null())
                    .col(ColumnDef::new(Suspensions::Reason).text().not_null())
                    .col(
                        ColumnDef::new(Suspensions::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Suspensions::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Suspensions::Table, Suspensions::StudentId)
                            .to(StudentProfiles::Table, StudentProfiles::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Rooms::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Rooms::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Rooms::Name).string().not_null().unique_key())
                    .col(ColumnDef::new(Rooms::Kind).string().not_null())
                    .col(
                        ColumnDef::new(Rooms::Capacity)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(Rooms::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Rooms::UpdatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(RoomReservations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(RoomReservations::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(RoomReservations::RoomId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(RoomReservations::UserId).big_integer().null())
                    .col(
                        ColumnDef::new(RoomReservations::StartsAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(RoomReservations::EndsAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(RoomReservations::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(RoomReservations::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(RoomReservations::Table, RoomReservations::RoomId)
                            .to(Rooms::Table, Rooms::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(RoomReservations::Table, RoomReservations::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_users_username")
                    .table(Users::Table)
                    .col(Users::Username)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_users_email")
                    .table(Users::Table)
                    .col(Users::Email)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_users_role")
                    .table(Users::Table)
                    .col(Users::Role)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_student_profiles_class_group_id")
                    .table(StudentProfiles::Table)
                    .col(StudentProfiles::ClassGroupId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_grades_offering_id")
                    .table(Grades::Table)
                    .col(Grades::OfferingId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_absences_student_id")
                    .table(Absences::Table)
                    .col(Absences::StudentId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_absences_offering_id")
                    .table(Absences::Table)
                    .col(Absences::OfferingId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_room_reservations_room_id")
                    .table(RoomReservations::Table)
                    .col(RoomReservations::RoomId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RoomReservations::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Rooms::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Suspensions::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Warnings::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Absences::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Grades::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(OfferingTeachers::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(CourseOfferings::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Subjects::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(GuardianStudents::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(GuardianProfiles::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(StudentProfiles::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ClassGroups::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Users {
    #[sea_orm(iden = "users")]
    Table,
    Id,
    Username,
    Email,
    PasswordHash,
    Role,
    Status,
    IsSuperuser,
    FirstName,
    LastName,
    LastLogin,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum ClassGroups {
    #[sea_orm(iden = "class_groups")]
    Table,
    Id,
    Name,
    Shift,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum StudentProfiles {
    #[sea_orm(iden = "student_profiles")]
    Table,
    Id,
    UserId,
    ClassGroupId,
    Status,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum GuardianProfiles {
    #[sea_orm(iden = "guardian_profiles")]
    Table,
    Id,
    UserId,
    Phone,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum GuardianStudents {
    #[sea_orm(iden = "guardian_students")]
    Table,
    Id,
    GuardianId,
    StudentId,
}

#[derive(DeriveIden)]
enum Subjects {
    #[sea_orm(iden = "subjects")]
    Table,
    Id,
    Name,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum CourseOfferings {
    #[sea_orm(iden = "course_offerings")]
    Table,
    Id,
    SubjectId,
    ClassGroupId,
    Workload,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum OfferingTeachers {
    #[sea_orm(iden = "offering_teachers")]
    Table,
    Id,
    OfferingId,
    TeacherId,
}

#[derive(DeriveIden)]
enum Grades {
    #[sea_orm(iden = "grades")]
    Table,
    Id,
    StudentId,
    OfferingId,
    Term,
    Value,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Absences {
    #[sea_orm(iden = "absences")]
    Table,
    Id,
    StudentId,
    OfferingId,
    Date,
    Justified,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Warnings {
    #[sea_orm(iden = "warnings")]
    Table,
    Id,
    StudentId,
    Date,
    Reason,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Suspensions {
    #[sea_orm(iden = "suspensions")]
    Table,
    Id,
    StudentId,
    StartDate,
    EndDate,
    Reason,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Rooms {
    #[sea_orm(iden = "rooms")]
    Table,
    Id,
    Name,
    Kind,
    Capacity,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum RoomReservations {
    #[sea_orm(iden = "room_reservations")]
    Table,
    Id,
    RoomId,
    UserId,
    StartsAt,
    EndsAt,
    CreatedAt,
    UpdatedAt,
}
