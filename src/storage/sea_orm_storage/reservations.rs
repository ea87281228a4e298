use super::SeaOrmStorage;
use crate::entity::room_reservations::{ActiveModel, Column, Entity as RoomReservations};
use crate::errors::{EscolaError, Result};
use crate::models::{
    PaginationInfo,
    reservations::{
        entities::RoomReservation,
        requests::{CreateReservationRequest, ReservationListQuery, UpdateReservationRequest},
        responses::ReservationListResponse,
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    pub async fn create_reservation_impl(
        &self,
        user_id: i64,
        req: CreateReservationRequest,
    ) -> Result<RoomReservation> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            room_id: Set(req.room_id),
            user_id: Set(Some(user_id)),
            starts_at: Set(req.starts_at.timestamp()),
            ends_at: Set(req.ends_at.timestamp()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model.insert(&self.db).await.map_err(|e| {
            EscolaError::database_operation(format!("Create reservation failed: {e}"))
        })?;

        Ok(result.into_room_reservation())
    }

    pub async fn get_reservation_by_id_impl(&self, id: i64) -> Result<Option<RoomReservation>> {
        let result = RoomReservations::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| {
                EscolaError::database_operation(format!("Query reservation failed: {e}"))
            })?;

        Ok(result.map(|m| m.into_room_reservation()))
    }

    pub async fn list_reservations_with_pagination_impl(
        &self,
        query: ReservationListQuery,
    ) -> Result<ReservationListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = RoomReservations::find();

        if let Some(room_id) = query.room_id {
            select = select.filter(Column::RoomId.eq(room_id));
        }

        if let Some(owner_id) = query.owner_id {
            select = select.filter(Column::UserId.eq(owner_id));
        }

        select = select.order_by_desc(Column::StartsAt);

        let paginator = select.paginate(&self.db, size);
        let total = paginator.num_items().await.map_err(|e| {
            EscolaError::database_operation(format!("Count reservations failed: {e}"))
        })?;

        let pages = paginator.num_pages().await.map_err(|e| {
            EscolaError::database_operation(format!("Count reservation pages failed: {e}"))
        })?;

        let rows = paginator.fetch_page(page - 1).await.map_err(|e| {
            EscolaError::database_operation(format!("List reservations failed: {e}"))
        })?;

        Ok(ReservationListResponse {
            items: rows.into_iter().map(|m| m.into_room_reservation()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    pub async fn list_room_reservations_impl(&self, room_id: i64) -> Result<Vec<RoomReservation>> {
        let rows = RoomReservations::find()
            .filter(Column::RoomId.eq(room_id))
            .order_by_asc(Column::StartsAt)
            .all(&self.db)
            .await
            .map_err(|e| {
                EscolaError::database_operation(format!("Query reservations failed: {e}"))
            })?;

        Ok(rows.into_iter().map(|m| m.into_room_reservation()).collect())
    }

    pub async fn update_reservation_impl(
        &self,
        id: i64,
        update: UpdateReservationRequest,
    ) -> Result<Option<RoomReservation>> {
        let existing = self.get_reservation_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(room_id) = update.room_id {
            model.room_id = Set(room_id);
        }

        if let Some(starts_at) = update.starts_at {
            model.starts_at = Set(starts_at.timestamp());
        }

        if let Some(ends_at) = update.ends_at {
            model.ends_at = Set(ends_at.timestamp());
        }

        model.update(&self.db).await.map_err(|e| {
            EscolaError::database_operation(format!("Update reservation failed: {e}"))
        })?;

        self.get_reservation_by_id_impl(id).await
    }

    pub async fn delete_reservation_impl(&self, id: i64) -> Result<bool> {
        let result = RoomReservations::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| {
                EscolaError::database_operation(format!("Delete reservation failed: {e}"))
            })?;

        Ok(result.rows_affected > 0)
    }
}
