use super::SeaOrmStorage;
use crate::entity::{suspensions, warnings};
use crate::errors::{EscolaError, Result};
use crate::models::{
    PaginationInfo,
    disciplinary::{
        entities::{Suspension, Warning},
        requests::{
            CreateSuspensionRequest, CreateWarningRequest, DisciplinaryListQuery,
            UpdateSuspensionRequest, UpdateWarningRequest,
        },
        responses::{SuspensionListResponse, WarningListResponse},
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    pub async fn create_warning_impl(&self, req: CreateWarningRequest) -> Result<Warning> {
        let now = chrono::Utc::now().timestamp();

        let model = warnings::ActiveModel {
            student_id: Set(req.student_id),
            date: Set(req.date),
            reason: Set(req.reason),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| EscolaError::database_operation(format!("Create warning failed: {e}")))?;

        Ok(result.into_warning())
    }

    pub async fn get_warning_by_id_impl(&self, id: i64) -> Result<Option<Warning>> {
        let result = warnings::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| EscolaError::database_operation(format!("Query warning failed: {e}")))?;

        Ok(result.map(|m| m.into_warning()))
    }

    pub async fn list_warnings_with_pagination_impl(
        &self,
        query: DisciplinaryListQuery,
    ) -> Result<WarningListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        if matches!(query.visible_student_ids, Some(ref ids) if ids.is_empty()) {
            return Ok(WarningListResponse {
                items: Vec::new(),
                pagination: PaginationInfo {
                    page: page as i64,
                    page_size: size as i64,
                    total: 0,
                    total_pages: 0,
                },
            });
        }

        let mut select = warnings::Entity::find();

        if let Some(student_id) = query.student_id {
            select = select.filter(warnings::Column::StudentId.eq(student_id));
        }

        if let Some(ids) = query.visible_student_ids {
            select = select.filter(warnings::Column::StudentId.is_in(ids));
        }

        select = select.order_by_desc(warnings::Column::Date);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| EscolaError::database_operation(format!("Count warnings failed: {e}")))?;

        let pages = paginator.num_pages().await.map_err(|e| {
            EscolaError::database_operation(format!("Count warning pages failed: {e}"))
        })?;

        let rows = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| EscolaError::database_operation(format!("List warnings failed: {e}")))?;

        Ok(WarningListResponse {
            items: rows.into_iter().map(|m| m.into_warning()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    pub async fn update_warning_impl(
        &self,
        id: i64,
        update: UpdateWarningRequest,
    ) -> Result<Option<Warning>> {
        let existing = self.get_warning_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = warnings::ActiveModel {
            id: Set(id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(date) = update.date {
            model.date = Set(date);
        }

        if let Some(reason) = update.reason {
            model.reason = Set(reason);
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| EscolaError::database_operation(format!("Update warning failed: {e}")))?;

        self.get_warning_by_id_impl(id).await
    }

    pub async fn delete_warning_impl(&self, id: i64) -> Result<bool> {
        let result = warnings::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| EscolaError::database_operation(format!("Delete warning failed: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    pub async fn create_suspension_impl(&self, req: CreateSuspensionRequest) -> Result<Suspension> {
        let now = chrono::Utc::now().timestamp();

        let model = suspensions::ActiveModel {
            student_id: Set(req.student_id),
            start_date: Set(req.start_date),
            end_date: Set(req.end_date),
            reason: Set(req.reason),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model.insert(&self.db).await.map_err(|e| {
            EscolaError::database_operation(format!("Create suspension failed: {e}"))
        })?;

        Ok(result.into_suspension())
    }

    pub async fn get_suspension_by_id_impl(&self, id: i64) -> Result<Option<Suspension>> {
        let result = suspensions::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| {
                EscolaError::database_operation(format!("Query suspension failed: {e}"))
            })?;

        Ok(result.map(|m| m.into_suspension()))
    }

    pub async fn list_suspensions_with_pagination_impl(
        &self,
        query: DisciplinaryListQuery,
    ) -> Result<SuspensionListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        if matches!(query.visible_student_ids, Some(ref ids) if ids.is_empty()) {
            return Ok(SuspensionListResponse {
                items: Vec::new(),
                pagination: PaginationInfo {
                    page: page as i64,
                    page_size: size as i64,
                    total: 0,
                    total_pages: 0,
                },
            });
        }

        let mut select = suspensions::Entity::find();

        if let Some(student_id) = query.student_id {
            select = select.filter(suspensions::Column::StudentId.eq(student_id));
        }

        if let Some(ids) = query.visible_student_ids {
            select = select.filter(suspensions::Column::StudentId.is_in(ids));
        }

        select = select.order_by_desc(suspensions::Column::StartDate);

        let paginator = select.paginate(&self.db, size);
        let total = paginator.num_items().await.map_err(|e| {
            EscolaError::database_operation(format!("Count suspensions failed: {e}"))
        })?;

        let pages = paginator.num_pages().await.map_err(|e| {
            EscolaError::database_operation(format!("Count suspension pages failed: {e}"))
        })?;

        let rows = paginator.fetch_page(page - 1).await.map_err(|e| {
            EscolaError::database_operation(format!("List suspensions failed: {e}"))
        })?;

        Ok(SuspensionListResponse {
            items: rows.into_iter().map(|m| m.into_suspension()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    pub async fn update_suspension_impl(
        &self,
        id: i64,
        update: UpdateSuspensionRequest,
    ) -> Result<Option<Suspension>> {
        let existing = self.get_suspension_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = suspensions::ActiveModel {
            id: Set(id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(start_date) = update.start_date {
            model.start_date = Set(start_date);
        }

        if let Some(end_date) = update.end_date {
            model.end_date = Set(end_date);
        }

        if let Some(reason) = update.reason {
            model.reason = Set(reason);
        }

        model.update(&self.db).await.map_err(|e| {
            EscolaError::database_operation(format!("Update suspension failed: {e}"))
        })?;

        self.get_suspension_by_id_impl(id).await
    }

    pub async fn delete_suspension_impl(&self, id: i64) -> Result<bool> {
        let result = suspensions::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| {
                EscolaError::database_operation(format!("Delete suspension failed: {e}"))
            })?;

        Ok(result.rows_affected > 0)
    }
}
