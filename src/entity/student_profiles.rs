//! Student profile entity

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "student_profiles")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub user_id: i64,
    pub class_group_id: Option<i64>,
    pub status: String,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id"
    )]
    User,
    #[sea_orm(
        belongs_to = "super::class_groups::Entity",
        from = "Column::ClassGroupId",
        to = "super::class_groups::Column::Id"
    )]
    ClassGroup,
    #[sea_orm(has_many = "super::grades::Entity")]
    Grades,
    #[sea_orm(has_many = "super::absences::Entity")]
    Absences,
    #[sea_orm(has_many = "super::guardian_students::Entity")]
    GuardianStudents,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::class_groups::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ClassGroup.def()
    }
}

impl Related<super::grades::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Grades.def()
    }
}

impl Related<super::absences::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Absences.def()
    }
}

impl Related<super::guardian_students::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GuardianStudents.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_student_profile(self) -> crate::models::students::entities::StudentProfile {
        use crate::models::students::entities::{StudentProfile, StudentStatus};
        use chrono::{DateTime, Utc};

        StudentProfile {
            id: self.id,
            user_id: self.user_id,
            class_group_id: self.class_group_id,
            status: self
                .status
                .parse::<StudentStatus>()
                .unwrap_or(StudentStatus::Active),
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
