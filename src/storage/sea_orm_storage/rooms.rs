use super::SeaOrmStorage;
use crate::entity::rooms::{ActiveModel, Column, Entity as Rooms};
use crate::errors::{EscolaError, Result};
use crate::models::{
    PaginationInfo,
    rooms::{
        entities::Room,
        requests::{CreateRoomRequest, RoomListQuery, UpdateRoomRequest},
        responses::RoomListResponse,
    },
};
use crate::utils::escape_like_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    pub async fn create_room_impl(&self, req: CreateRoomRequest) -> Result<Room> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            name: Set(req.name),
            kind: Set(req.kind),
            capacity: Set(req.capacity),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| EscolaError::database_operation(format!("Create room failed: {e}")))?;

        Ok(result.into_room())
    }

    pub async fn get_room_by_id_impl(&self, id: i64) -> Result<Option<Room>> {
        let result = Rooms::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| EscolaError::database_operation(format!("Query room failed: {e}")))?;

        Ok(result.map(|m| m.into_room()))
    }

    pub async fn list_rooms_with_pagination_impl(
        &self,
        query: RoomListQuery,
    ) -> Result<RoomListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = Rooms::find();

        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let escaped = escape_like_pattern(search.trim());
            select = select.filter(Column::Name.contains(&escaped));
        }

        select = select.order_by_asc(Column::Name);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| EscolaError::database_operation(format!("Count rooms failed: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| EscolaError::database_operation(format!("Count room pages failed: {e}")))?;

        let rows = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| EscolaError::database_operation(format!("List rooms failed: {e}")))?;

        Ok(RoomListResponse {
            items: rows.into_iter().map(|m| m.into_room()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    pub async fn update_room_impl(
        &self,
        id: i64,
        update: UpdateRoomRequest,
    ) -> Result<Option<Room>> {
        let existing = self.get_room_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(name) = update.name {
            model.name = Set(name);
        }

        if let Some(kind) = update.kind {
            model.kind = Set(kind);
        }

        if let Some(capacity) = update.capacity {
            model.capacity = Set(capacity);
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| EscolaError::database_operation(format!("Update room failed: {e}")))?;

        self.get_room_by_id_impl(id).await
    }

    pub async fn delete_room_impl(&self, id: i64) -> Result<bool> {
        let result = Rooms::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| EscolaError::database_operation(format!("Delete room failed: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
