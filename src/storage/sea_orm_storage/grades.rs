use super::SeaOrmStorage;
use crate::entity::grades::{ActiveModel, Column, Entity as Grades};
use crate::errors::{EscolaError, Result};
use crate::models::{
    PaginationInfo,
    grades::{
        entities::Grade,
        requests::{CreateGradeRequest, GradeListQuery, UpdateGradeRequest},
        responses::GradeListResponse,
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    // Uniqueness of (student, offering, term) is enforced by the index;
    // violations surface through the DbErr message.
    pub async fn create_grade_impl(&self, req: CreateGradeRequest) -> Result<Grade> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            student_id: Set(req.student_id),
            offering_id: Set(req.offering_id),
            term: Set(req.term),
            value: Set(req.value),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| EscolaError::database_operation(format!("Create grade failed: {e}")))?;

        Ok(result.into_grade())
    }

    pub async fn get_grade_by_id_impl(&self, id: i64) -> Result<Option<Grade>> {
        let result = Grades::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| EscolaError::database_operation(format!("Query grade failed: {e}")))?;

        Ok(result.map(|m| m.into_grade()))
    }

    pub async fn get_grade_by_id_taught_by_impl(
        &self,
        id: i64,
        teacher_id: i64,
    ) -> Result<Option<Grade>> {
        let offering_ids = self.offering_ids_taught_by_impl(teacher_id).await?;
        if offering_ids.is_empty() {
            return Ok(None);
        }

        let result = Grades::find_by_id(id)
            .filter(Column::OfferingId.is_in(offering_ids))
            .one(&self.db)
            .await
            .map_err(|e| EscolaError::database_operation(format!("Query grade failed: {e}")))?;

        Ok(result.map(|m| m.into_grade()))
    }

    pub async fn list_grades_with_pagination_impl(
        &self,
        query: GradeListQuery,
    ) -> Result<GradeListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let empty = |page: u64, size: u64| GradeListResponse {
            items: Vec::new(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: 0,
                total_pages: 0,
            },
        };

        if matches!(query.visible_student_ids, Some(ref ids) if ids.is_empty()) {
            return Ok(empty(page, size));
        }

        let mut select = Grades::find();

        if let Some(student_id) = query.student_id {
            select = select.filter(Column::StudentId.eq(student_id));
        }

        if let Some(offering_id) = query.offering_id {
            select = select.filter(Column::OfferingId.eq(offering_id));
        }

        if let Some(ref term) = query.term {
            select = select.filter(Column::Term.eq(term.clone()));
        }

        if let Some(ids) = query.visible_student_ids {
            select = select.filter(Column::StudentId.is_in(ids));
        }

        if let Some(teacher_id) = query.taught_by {
            let offering_ids = self.offering_ids_taught_by_impl(teacher_id).await?;
            if offering_ids.is_empty() {
                return Ok(empty(page, size));
            }
            select = select.filter(Column::OfferingId.is_in(offering_ids));
        }

        select = select.order_by_asc(Column::Id);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| EscolaError::database_operation(format!("Count grades failed: {e}")))?;

        let pages = paginator.num_pages().await.map_err(|e| {
            EscolaError::database_operation(format!("Count grade pages failed: {e}"))
        })?;

        let rows = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| EscolaError::database_operation(format!("List grades failed: {e}")))?;

        Ok(GradeListResponse {
            items: rows.into_iter().map(|m| m.into_grade()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    pub async fn list_grades_for_students_impl(&self, student_ids: &[i64]) -> Result<Vec<Grade>> {
        if student_ids.is_empty() {
            return Ok(Vec::new());
        }

        let rows = Grades::find()
            .filter(Column::StudentId.is_in(student_ids.to_vec()))
            .all(&self.db)
            .await
            .map_err(|e| EscolaError::database_operation(format!("List grades failed: {e}")))?;

        Ok(rows.into_iter().map(|m| m.into_grade()).collect())
    }

    pub async fn update_grade_impl(
        &self,
        id: i64,
        update: UpdateGradeRequest,
    ) -> Result<Option<Grade>> {
        let existing = self.get_grade_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(student_id) = update.student_id {
            model.student_id = Set(student_id);
        }

        if let Some(offering_id) = update.offering_id {
            model.offering_id = Set(offering_id);
        }

        if let Some(term) = update.term {
            model.term = Set(term);
        }

        if let Some(value) = update.value {
            model.value = Set(value);
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| EscolaError::database_operation(format!("Update grade failed: {e}")))?;

        self.get_grade_by_id_impl(id).await
    }

    pub async fn delete_grade_impl(&self, id: i64) -> Result<bool> {
        let result = Grades::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| EscolaError::database_operation(format!("Delete grade failed: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
