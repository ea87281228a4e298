use super::SeaOrmStorage;
use crate::entity::student_profiles::{ActiveModel, Column, Entity as StudentProfiles};
use crate::entity::users;
use crate::errors::{EscolaError, Result};
use crate::models::{
    PaginationInfo,
    students::{
        entities::{StudentDetail, StudentProfile, StudentStatus},
        requests::{StudentListQuery, UpdateStudentRequest},
        responses::StudentListResponse,
    },
};
use crate::utils::escape_like_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    Set,
};

fn into_detail(profile: crate::entity::student_profiles::Model, user: users::Model) -> StudentDetail {
    StudentDetail {
        profile: profile.into_student_profile(),
        user: user.into_user(),
    }
}

impl SeaOrmStorage {
    pub async fn create_student_profile_impl(
        &self,
        user_id: i64,
        class_group_id: Option<i64>,
    ) -> Result<StudentProfile> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            user_id: Set(user_id),
            class_group_id: Set(class_group_id),
            status: Set(StudentStatus::Active.to_string()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model.insert(&self.db).await.map_err(|e| {
            EscolaError::database_operation(format!("Create student profile failed: {e}"))
        })?;

        Ok(result.into_student_profile())
    }

    pub async fn get_student_by_id_impl(&self, id: i64) -> Result<Option<StudentDetail>> {
        let result = StudentProfiles::find_by_id(id)
            .find_also_related(users::Entity)
            .one(&self.db)
            .await
            .map_err(|e| EscolaError::database_operation(format!("Query student failed: {e}")))?;

        Ok(result.and_then(|(profile, user)| user.map(|u| into_detail(profile, u))))
    }

    pub async fn get_student_by_user_id_impl(&self, user_id: i64) -> Result<Option<StudentProfile>> {
        let result = StudentProfiles::find()
            .filter(Column::UserId.eq(user_id))
            .one(&self.db)
            .await
            .map_err(|e| EscolaError::database_operation(format!("Query student failed: {e}")))?;

        Ok(result.map(|m| m.into_student_profile()))
    }

    pub async fn list_students_with_pagination_impl(
        &self,
        query: StudentListQuery,
    ) -> Result<StudentListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        // An explicit empty restriction short-circuits to an empty page
        if matches!(query.visible_ids, Some(ref ids) if ids.is_empty()) {
            return Ok(StudentListResponse {
                items: Vec::new(),
                pagination: PaginationInfo {
                    page: page as i64,
                    page_size: size as i64,
                    total: 0,
                    total_pages: 0,
                },
            });
        }

        let mut select = StudentProfiles::find().find_also_related(users::Entity);

        if let Some(class_group_id) = query.class_group_id {
            select = select.filter(Column::ClassGroupId.eq(class_group_id));
        }

        if let Some(ids) = query.visible_ids {
            select = select.filter(Column::Id.is_in(ids));
        }

        if let Some(teacher_id) = query.taught_by {
            let group_ids = self.class_group_ids_taught_by_impl(teacher_id).await?;
            select = select.filter(Column::ClassGroupId.is_in(group_ids));
        }

        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let escaped = escape_like_pattern(search.trim());
            select = select.filter(
                Condition::any()
                    .add(users::Column::Username.contains(&escaped))
                    .add(users::Column::FirstName.contains(&escaped))
                    .add(users::Column::LastName.contains(&escaped)),
            );
        }

        select = select.order_by_asc(users::Column::FirstName);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| EscolaError::database_operation(format!("Count students failed: {e}")))?;

        let pages = paginator.num_pages().await.map_err(|e| {
            EscolaError::database_operation(format!("Count student pages failed: {e}"))
        })?;

        let rows = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| EscolaError::database_operation(format!("List students failed: {e}")))?;

        Ok(StudentListResponse {
            items: rows
                .into_iter()
                .filter_map(|(profile, user)| user.map(|u| into_detail(profile, u)))
                .collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    pub async fn list_students_by_ids_impl(&self, ids: &[i64]) -> Result<Vec<StudentDetail>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let rows = StudentProfiles::find()
            .filter(Column::Id.is_in(ids.to_vec()))
            .find_also_related(users::Entity)
            .order_by_asc(users::Column::FirstName)
            .all(&self.db)
            .await
            .map_err(|e| EscolaError::database_operation(format!("List students failed: {e}")))?;

        Ok(rows
            .into_iter()
            .filter_map(|(profile, user)| user.map(|u| into_detail(profile, u)))
            .collect())
    }

    pub async fn list_student_profiles_by_group_impl(
        &self,
        class_group_id: i64,
    ) -> Result<Vec<StudentProfile>> {
        let rows = StudentProfiles::find()
            .filter(Column::ClassGroupId.eq(class_group_id))
            .all(&self.db)
            .await
            .map_err(|e| EscolaError::database_operation(format!("List students failed: {e}")))?;

        Ok(rows.into_iter().map(|m| m.into_student_profile()).collect())
    }

    pub async fn update_student_impl(
        &self,
        id: i64,
        update: UpdateStudentRequest,
    ) -> Result<Option<StudentDetail>> {
        let existing = self.get_student_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(class_group_id) = update.class_group_id {
            model.class_group_id = Set(Some(class_group_id));
        }

        if let Some(status) = update.status {
            model.status = Set(status.to_string());
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| EscolaError::database_operation(format!("Update student failed: {e}")))?;

        self.get_student_by_id_impl(id).await
    }

    pub async fn delete_student_impl(&self, id: i64) -> Result<bool> {
        let result = StudentProfiles::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| EscolaError::database_operation(format!("Delete student failed: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    pub async fn count_students_impl(&self) -> Result<u64> {
        let count = StudentProfiles::find()
            .count(&self.db)
            .await
            .map_err(|e| EscolaError::database_operation(format!("Count students failed: {e}")))?;

        Ok(count)
    }
}
