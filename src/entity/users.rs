//! Account entity

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub username: String,
    #[sea_orm(unique)]
    pub email: String,
    pub password_hash: String,
    pub role: String,
    pub status: String,
    pub is_superuser: bool,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub last_login: Option<i64>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_one = "super::student_profiles::Entity")]
    StudentProfile,
    #[sea_orm(has_one = "super::guardian_profiles::Entity")]
    GuardianProfile,
    #[sea_orm(has_many = "super::offering_teachers::Entity")]
    OfferingTeachers,
    #[sea_orm(has_many = "super::room_reservations::Entity")]
    RoomReservations,
}

impl Related<super::student_profiles::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StudentProfile.def()
    }
}

impl Related<super::guardian_profiles::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GuardianProfile.def()
    }
}

impl Related<super::offering_teachers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OfferingTeachers.def()
    }
}

impl Related<super::room_reservations::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RoomReservations.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// Conversion from database row to business model
impl Model {
    pub fn into_user(self) -> crate::models::users::entities::User {
        use crate::models::users::entities::{User, UserRole, UserStatus};
        use chrono::{DateTime, Utc};

        User {
            id: self.id,
            username: self.username,
            email: self.email,
            password_hash: self.password_hash,
            role: self.role.parse::<UserRole>().unwrap_or(UserRole::Student),
            status: self
                .status
                .parse::<UserStatus>()
                .unwrap_or(UserStatus::Active),
            is_superuser: self.is_superuser,
            first_name: self.first_name,
            last_name: self.last_name,
            last_login: self
                .last_login
                .map(|ts| DateTime::<Utc>::from_timestamp(ts, 0).unwrap_or_default()),
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
