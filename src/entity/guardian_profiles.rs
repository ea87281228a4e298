//! Guardian profile entity

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "guardian_profiles")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub user_id: i64,
    pub phone: Option<String>,
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
    #[sea_orm(has_many = "super::guardian_students::Entity")]
    GuardianStudents,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::guardian_students::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GuardianStudents.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_guardian_profile(self) -> crate::models::guardians::entities::GuardianProfile {
        use crate::models::guardians::entities::GuardianProfile;
        use chrono::{DateTime, Utc};

        GuardianProfile {
            id: self.id,
            user_id: self.user_id,
            phone: self.phone,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
