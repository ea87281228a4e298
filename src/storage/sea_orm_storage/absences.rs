use super::SeaOrmStorage;
use crate::entity::absences::{ActiveModel, Column, Entity as Absences};
use crate::errors::{EscolaError, Result};
use crate::models::{
    PaginationInfo,
    absences::{
        entities::Absence,
        requests::{AbsenceListQuery, CreateAbsenceRequest, UpdateAbsenceRequest},
        responses::AbsenceListResponse,
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    pub async fn create_absence_impl(&self, req: CreateAbsenceRequest) -> Result<Absence> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            student_id: Set(req.student_id),
            offering_id: Set(req.offering_id),
            date: Set(req.date),
            justified: Set(req.justified),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| EscolaError::database_operation(format!("Create absence failed: {e}")))?;

        Ok(result.into_absence())
    }

    pub async fn get_absence_by_id_impl(&self, id: i64) -> Result<Option<Absence>> {
        let result = Absences::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| EscolaError::database_operation(format!("Query absence failed: {e}")))?;

        Ok(result.map(|m| m.into_absence()))
    }

    pub async fn list_absences_with_pagination_impl(
        &self,
        query: AbsenceListQuery,
    ) -> Result<AbsenceListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let empty = |page: u64, size: u64| AbsenceListResponse {
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

        let mut select = Absences::find();

        if let Some(student_id) = query.student_id {
            select = select.filter(Column::StudentId.eq(student_id));
        }

        if let Some(offering_id) = query.offering_id {
            select = select.filter(Column::OfferingId.eq(offering_id));
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

        select = select.order_by_desc(Column::Date);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| EscolaError::database_operation(format!("Count absences failed: {e}")))?;

        let pages = paginator.num_pages().await.map_err(|e| {
            EscolaError::database_operation(format!("Count absence pages failed: {e}"))
        })?;

        let rows = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| EscolaError::database_operation(format!("List absences failed: {e}")))?;

        Ok(AbsenceListResponse {
            items: rows.into_iter().map(|m| m.into_absence()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    pub async fn list_absences_for_student_impl(&self, student_id: i64) -> Result<Vec<Absence>> {
        let rows = Absences::find()
            .filter(Column::StudentId.eq(student_id))
            .order_by_desc(Column::Date)
            .all(&self.db)
            .await
            .map_err(|e| EscolaError::database_operation(format!("List absences failed: {e}")))?;

        Ok(rows.into_iter().map(|m| m.into_absence()).collect())
    }

    pub async fn update_absence_impl(
        &self,
        id: i64,
        update: UpdateAbsenceRequest,
    ) -> Result<Option<Absence>> {
        let existing = self.get_absence_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(date) = update.date {
            model.date = Set(date);
        }

        if let Some(justified) = update.justified {
            model.justified = Set(justified);
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| EscolaError::database_operation(format!("Update absence failed: {e}")))?;

        self.get_absence_by_id_impl(id).await
    }

    pub async fn delete_absence_impl(&self, id: i64) -> Result<bool> {
        let result = Absences::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| EscolaError::database_operation(format!("Delete absence failed: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
