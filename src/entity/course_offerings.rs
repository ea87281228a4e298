//! Course offering entity (subject taught to a class group)

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "course_offerings")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub subject_id: i64,
    pub class_group_id: i64,
    pub workload: i32,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::subjects::Entity",
        from = "Column::SubjectId",
        to = "super::subjects::Column::Id"
    )]
    Subject,
    #[sea_orm(
        belongs_to = "super::class_groups::Entity",
        from = "Column::ClassGroupId",
        to = "super::class_groups::Column::Id"
    )]
    ClassGroup,
    #[sea_orm(has_many = "super::offering_teachers::Entity")]
    OfferingTeachers,
    #[sea_orm(has_many = "super::grades::Entity")]
    Grades,
    #[sea_orm(has_many = "super::absences::Entity")]
    Absences,
}

impl Related<super::subjects::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Subject.def()
    }
}

impl Related<super::class_groups::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ClassGroup.def()
    }
}

impl Related<super::offering_teachers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OfferingTeachers.def()
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

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_course_offering(self) -> crate::models::offerings::entities::CourseOffering {
        use crate::models::offerings::entities::CourseOffering;
        use chrono::{DateTime, Utc};

        CourseOffering {
            id: self.id,
            subject_id: self.subject_id,
            class_group_id: self.class_group_id,
            workload: self.workload,
            teacher_ids: Vec::new(),
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
