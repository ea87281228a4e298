use super::SeaOrmStorage;
use crate::entity::class_groups::{ActiveModel, Column, Entity as ClassGroups};
use crate::errors::{EscolaError, Result};
use crate::models::{
    PaginationInfo,
    class_groups::{
        entities::ClassGroup,
        requests::{ClassGroupListQuery, CreateClassGroupRequest, UpdateClassGroupRequest},
        responses::ClassGroupListResponse,
    },
};
use crate::utils::escape_like_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    pub async fn create_class_group_impl(
        &self,
        req: CreateClassGroupRequest,
    ) -> Result<ClassGroup> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            name: Set(req.name),
            shift: Set(req.shift.to_string()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model.insert(&self.db).await.map_err(|e| {
            EscolaError::database_operation(format!("Create class group failed: {e}"))
        })?;

        Ok(result.into_class_group())
    }

    pub async fn get_class_group_by_id_impl(&self, id: i64) -> Result<Option<ClassGroup>> {
        let result = ClassGroups::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| {
                EscolaError::database_operation(format!("Query class group failed: {e}"))
            })?;

        Ok(result.map(|m| m.into_class_group()))
    }

    pub async fn list_class_groups_with_pagination_impl(
        &self,
        query: ClassGroupListQuery,
    ) -> Result<ClassGroupListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = ClassGroups::find();

        if let Some(ref shift) = query.shift {
            select = select.filter(Column::Shift.eq(shift.to_string()));
        }

        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let escaped = escape_like_pattern(search.trim());
            select = select.filter(Column::Name.contains(&escaped));
        }

        select = select.order_by_asc(Column::Name);

        let paginator = select.paginate(&self.db, size);
        let total = paginator.num_items().await.map_err(|e| {
            EscolaError::database_operation(format!("Count class groups failed: {e}"))
        })?;

        let pages = paginator.num_pages().await.map_err(|e| {
            EscolaError::database_operation(format!("Count class group pages failed: {e}"))
        })?;

        let rows = paginator.fetch_page(page - 1).await.map_err(|e| {
            EscolaError::database_operation(format!("List class groups failed: {e}"))
        })?;

        Ok(ClassGroupListResponse {
            items: rows.into_iter().map(|m| m.into_class_group()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    pub async fn list_all_class_groups_impl(&self) -> Result<Vec<ClassGroup>> {
        let rows = ClassGroups::find()
            .order_by_asc(Column::Name)
            .all(&self.db)
            .await
            .map_err(|e| {
                EscolaError::database_operation(format!("List class groups failed: {e}"))
            })?;

        Ok(rows.into_iter().map(|m| m.into_class_group()).collect())
    }

    pub async fn update_class_group_impl(
        &self,
        id: i64,
        update: UpdateClassGroupRequest,
    ) -> Result<Option<ClassGroup>> {
        let existing = self.get_class_group_by_id_impl(id).await?;
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

        if let Some(shift) = update.shift {
            model.shift = Set(shift.to_string());
        }

        model.update(&self.db).await.map_err(|e| {
            EscolaError::database_operation(format!("Update class group failed: {e}"))
        })?;

        self.get_class_group_by_id_impl(id).await
    }

    pub async fn delete_class_group_impl(&self, id: i64) -> Result<bool> {
        let result = ClassGroups::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| {
                EscolaError::database_operation(format!("Delete class group failed: {e}"))
            })?;

        Ok(result.rows_affected > 0)
    }

    pub async fn count_class_groups_impl(&self) -> Result<u64> {
        let count = ClassGroups::find().count(&self.db).await.map_err(|e| {
            EscolaError::database_operation(format!("Count class groups failed: {e}"))
        })?;

        Ok(count)
    }
}
