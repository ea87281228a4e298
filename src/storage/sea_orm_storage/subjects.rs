use super::SeaOrmStorage;
use crate::entity::subjects::{ActiveModel, Column, Entity as Subjects};
use crate::errors::{EscolaError, Result};
use crate::models::{
    PaginationInfo,
    subjects::{
        entities::Subject,
        requests::{CreateSubjectRequest, SubjectListQuery, UpdateSubjectRequest},
        responses::SubjectListResponse,
    },
};
use crate::utils::escape_like_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    pub async fn create_subject_impl(&self, req: CreateSubjectRequest) -> Result<Subject> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            name: Set(req.name),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| EscolaError::database_operation(format!("Create subject failed: {e}")))?;

        Ok(result.into_subject())
    }

    pub async fn get_subject_by_id_impl(&self, id: i64) -> Result<Option<Subject>> {
        let result = Subjects::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| EscolaError::database_operation(format!("Query subject failed: {e}")))?;

        Ok(result.map(|m| m.into_subject()))
    }

    pub async fn list_subjects_with_pagination_impl(
        &self,
        query: SubjectListQuery,
    ) -> Result<SubjectListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = Subjects::find();

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
            .map_err(|e| EscolaError::database_operation(format!("Count subjects failed: {e}")))?;

        let pages = paginator.num_pages().await.map_err(|e| {
            EscolaError::database_operation(format!("Count subject pages failed: {e}"))
        })?;

        let rows = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| EscolaError::database_operation(format!("List subjects failed: {e}")))?;

        Ok(SubjectListResponse {
            items: rows.into_iter().map(|m| m.into_subject()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    pub async fn list_subjects_by_ids_impl(&self, ids: &[i64]) -> Result<Vec<Subject>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let rows = Subjects::find()
            .filter(Column::Id.is_in(ids.to_vec()))
            .all(&self.db)
            .await
            .map_err(|e| EscolaError::database_operation(format!("List subjects failed: {e}")))?;

        Ok(rows.into_iter().map(|m| m.into_subject()).collect())
    }

    pub async fn update_subject_impl(
        &self,
        id: i64,
        update: UpdateSubjectRequest,
    ) -> Result<Option<Subject>> {
        let existing = self.get_subject_by_id_impl(id).await?;
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

        model
            .update(&self.db)
            .await
            .map_err(|e| EscolaError::database_operation(format!("Update subject failed: {e}")))?;

        self.get_subject_by_id_impl(id).await
    }

    pub async fn delete_subject_impl(&self, id: i64) -> Result<bool> {
        let result = Subjects::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| EscolaError::database_operation(format!("Delete subject failed: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
