use super::SeaOrmStorage;
use crate::entity::course_offerings::{ActiveModel, Column, Entity as CourseOfferings};
use crate::entity::offering_teachers;
use crate::entity::student_profiles;
use crate::errors::{EscolaError, Result};
use crate::models::{
    PaginationInfo,
    offerings::{
        entities::CourseOffering,
        requests::{CreateOfferingRequest, OfferingListQuery, UpdateOfferingRequest},
        responses::OfferingListResponse,
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// Attaches the teacher set to a bare offering row.
    async fn fill_teacher_ids(&self, mut offering: CourseOffering) -> Result<CourseOffering> {
        let links = offering_teachers::Entity::find()
            .filter(offering_teachers::Column::OfferingId.eq(offering.id))
            .all(&self.db)
            .await
            .map_err(|e| {
                EscolaError::database_operation(format!("Query offering teachers failed: {e}"))
            })?;

        offering.teacher_ids = links.into_iter().map(|l| l.teacher_id).collect();
        Ok(offering)
    }

    /// Replaces the whole teacher set of an offering.
    async fn replace_teacher_set(&self, offering_id: i64, teacher_ids: &[i64]) -> Result<()> {
        offering_teachers::Entity::delete_many()
            .filter(offering_teachers::Column::OfferingId.eq(offering_id))
            .exec(&self.db)
            .await
            .map_err(|e| {
                EscolaError::database_operation(format!("Clear offering teachers failed: {e}"))
            })?;

        for teacher_id in teacher_ids {
            let link = offering_teachers::ActiveModel {
                offering_id: Set(offering_id),
                teacher_id: Set(*teacher_id),
                ..Default::default()
            };
            link.insert(&self.db).await.map_err(|e| {
                EscolaError::database_operation(format!("Link offering teacher failed: {e}"))
            })?;
        }

        Ok(())
    }

    /// Offering ids in this teacher's set. Used for scoped grade and
    /// absence queries.
    pub(crate) async fn offering_ids_taught_by_impl(&self, teacher_id: i64) -> Result<Vec<i64>> {
        let links = offering_teachers::Entity::find()
            .filter(offering_teachers::Column::TeacherId.eq(teacher_id))
            .all(&self.db)
            .await
            .map_err(|e| {
                EscolaError::database_operation(format!("Query offering teachers failed: {e}"))
            })?;

        Ok(links.into_iter().map(|l| l.offering_id).collect())
    }

    /// Class groups reached through any offering this teacher is in.
    pub(crate) async fn class_group_ids_taught_by_impl(&self, teacher_id: i64) -> Result<Vec<i64>> {
        let offering_ids = self.offering_ids_taught_by_impl(teacher_id).await?;
        if offering_ids.is_empty() {
            return Ok(Vec::new());
        }

        let offerings = CourseOfferings::find()
            .filter(Column::Id.is_in(offering_ids))
            .all(&self.db)
            .await
            .map_err(|e| EscolaError::database_operation(format!("Query offerings failed: {e}")))?;

        let mut group_ids: Vec<i64> = offerings.into_iter().map(|o| o.class_group_id).collect();
        group_ids.sort_unstable();
        group_ids.dedup();
        Ok(group_ids)
    }

    pub async fn create_offering_impl(&self, req: CreateOfferingRequest) -> Result<CourseOffering> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            subject_id: Set(req.subject_id),
            class_group_id: Set(req.class_group_id),
            workload: Set(req.workload),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| EscolaError::database_operation(format!("Create offering failed: {e}")))?;

        self.replace_teacher_set(result.id, &req.teacher_ids).await?;
        self.fill_teacher_ids(result.into_course_offering()).await
    }

    pub async fn get_offering_by_id_impl(&self, id: i64) -> Result<Option<CourseOffering>> {
        let result = CourseOfferings::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| EscolaError::database_operation(format!("Query offering failed: {e}")))?;

        match result {
            Some(model) => Ok(Some(self.fill_teacher_ids(model.into_course_offering()).await?)),
            None => Ok(None),
        }
    }

    pub async fn list_offerings_with_pagination_impl(
        &self,
        query: OfferingListQuery,
    ) -> Result<OfferingListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let empty = |page: u64, size: u64| OfferingListResponse {
            items: Vec::new(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: 0,
                total_pages: 0,
            },
        };

        let mut select = CourseOfferings::find();

        if let Some(class_group_id) = query.class_group_id {
            select = select.filter(Column::ClassGroupId.eq(class_group_id));
        }

        if let Some(teacher_id) = query.taught_by {
            let offering_ids = self.offering_ids_taught_by_impl(teacher_id).await?;
            if offering_ids.is_empty() {
                return Ok(empty(page, size));
            }
            select = select.filter(Column::Id.is_in(offering_ids));
        }

        // Students see the offerings of their class group
        if let Some(ref student_ids) = query.student_ids {
            if student_ids.is_empty() {
                return Ok(empty(page, size));
            }
            let profiles = student_profiles::Entity::find()
                .filter(student_profiles::Column::Id.is_in(student_ids.clone()))
                .all(&self.db)
                .await
                .map_err(|e| {
                    EscolaError::database_operation(format!("Query students failed: {e}"))
                })?;
            let group_ids: Vec<i64> = profiles.into_iter().filter_map(|p| p.class_group_id).collect();
            if group_ids.is_empty() {
                return Ok(empty(page, size));
            }
            select = select.filter(Column::ClassGroupId.is_in(group_ids));
        }

        select = select.order_by_asc(Column::Id);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| EscolaError::database_operation(format!("Count offerings failed: {e}")))?;

        let pages = paginator.num_pages().await.map_err(|e| {
            EscolaError::database_operation(format!("Count offering pages failed: {e}"))
        })?;

        let rows = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| EscolaError::database_operation(format!("List offerings failed: {e}")))?;

        let mut items = Vec::with_capacity(rows.len());
        for row in rows {
            items.push(self.fill_teacher_ids(row.into_course_offering()).await?);
        }

        Ok(OfferingListResponse {
            items,
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    pub async fn list_offerings_by_ids_impl(&self, ids: &[i64]) -> Result<Vec<CourseOffering>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let rows = CourseOfferings::find()
            .filter(Column::Id.is_in(ids.to_vec()))
            .all(&self.db)
            .await
            .map_err(|e| EscolaError::database_operation(format!("List offerings failed: {e}")))?;

        let mut items = Vec::with_capacity(rows.len());
        for row in rows {
            items.push(self.fill_teacher_ids(row.into_course_offering()).await?);
        }
        Ok(items)
    }

    pub async fn update_offering_impl(
        &self,
        id: i64,
        update: UpdateOfferingRequest,
    ) -> Result<Option<CourseOffering>> {
        let existing = self.get_offering_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(subject_id) = update.subject_id {
            model.subject_id = Set(subject_id);
        }

        if let Some(class_group_id) = update.class_group_id {
            model.class_group_id = Set(class_group_id);
        }

        if let Some(workload) = update.workload {
            model.workload = Set(workload);
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| EscolaError::database_operation(format!("Update offering failed: {e}")))?;

        if let Some(ref teacher_ids) = update.teacher_ids {
            self.replace_teacher_set(id, teacher_ids).await?;
        }

        self.get_offering_by_id_impl(id).await
    }

    pub async fn delete_offering_impl(&self, id: i64) -> Result<bool> {
        let result = CourseOfferings::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| EscolaError::database_operation(format!("Delete offering failed: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    pub async fn offering_taught_by_impl(&self, offering_id: i64, teacher_id: i64) -> Result<bool> {
        let count = offering_teachers::Entity::find()
            .filter(offering_teachers::Column::OfferingId.eq(offering_id))
            .filter(offering_teachers::Column::TeacherId.eq(teacher_id))
            .count(&self.db)
            .await
            .map_err(|e| {
                EscolaError::database_operation(format!("Query offering teachers failed: {e}"))
            })?;

        Ok(count > 0)
    }
}
