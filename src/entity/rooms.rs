//! Room entity

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "rooms")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub name: String,
    pub kind: String,
    pub capacity: i32,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::room_reservations::Entity")]
    RoomReservations,
}

impl Related<super::room_reservations::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RoomReservations.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_room(self) -> crate::models::rooms::entities::Room {
        use crate::models::rooms::entities::Room;
        use chrono::{DateTime, Utc};

        Room {
            id: self.id,
            name: self.name,
            kind: self.kind,
            capacity: self.capacity,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
