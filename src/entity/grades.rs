//! Grade entity

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "grades")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub student_id: i64,
    pub offering_id: i64,
    pub term: String,
    pub value: f64,
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
    pub fn into_grade(self) -> crate::models::grades::entities::Grade {
        use crate::models::grades::entities::Grade;
        use chrono::{DateTime, Utc};

        Grade {
            id: self.id,
            student_id: self.student_id,
            offering_id: self.offering_id,
            term: self.term,
            value: self.value,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
