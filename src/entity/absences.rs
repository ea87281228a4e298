//! Absence entity

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "absences")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub student_id: i64,
    pub offering_id: i64,
    pub date: Date,
    pub justified: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::student_profiles::Entity",
        from = "Column::StudentId",
        to = "super::student_profiles::Column::Id"
    )]
    Student,
    #[sea_orm(
        belongs_to = "super::course_offerings::Entity",
        from = "Column::OfferingId",
        to = "super::course_offerings::Column::Id"
    )]
    Offering,
}

impl Related<super::student_profiles::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl Related<super::course_offerings::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Offering.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_absence(self) -> crate::models::absences::entities::Absence {
        use crate::models::absences::entities::Absence;
        use chrono::{DateTime, Utc};

        Absence {
            id: self.id,
            student_id: self.student_id,
            offering_id: self.offering_id,
            date: self.date,
            justified: self.justified,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
