use super::SeaOrmStorage;
use crate::entity::guardian_profiles::{ActiveModel, Column, Entity as GuardianProfiles};
use crate::entity::guardian_students;
use crate::entity::users;
use crate::errors::{EscolaError, Result};
use crate::models::{
    PaginationInfo,
    guardians::{
        entities::{GuardianDetail, GuardianProfile},
        requests::{CreateGuardianRequest, GuardianListQuery, UpdateGuardianRequest},
        responses::GuardianListResponse,
    },
    users::entities::User,
};
use crate::utils::escape_like_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    Set,
};

impl SeaOrmStorage {
    /// Linked student profile ids for a guardian profile id.
    async fn linked_student_ids(&self, guardian_id: i64) -> Result<Vec<i64>> {
        let links = guardian_students::Entity::find()
            .filter(guardian_students::Column::GuardianId.eq(guardian_id))
            .all(&self.db)
            .await
            .map_err(|e| {
                EscolaError::database_operation(format!("Query guardian students failed: {e}"))
            })?;

        Ok(links.into_iter().map(|l| l.student_id).collect())
    }

    /// Replaces the whole linked-student set of a guardian.
    async fn replace_student_links(&self, guardian_id: i64, student_ids: &[i64]) -> Result<()> {
        guardian_students::Entity::delete_many()
            .filter(guardian_students::Column::GuardianId.eq(guardian_id))
            .exec(&self.db)
            .await
            .map_err(|e| {
                EscolaError::database_operation(format!("Clear guardian students failed: {e}"))
            })?;

        for student_id in student_ids {
            let link = guardian_students::ActiveModel {
                guardian_id: Set(guardian_id),
                student_id: Set(*student_id),
                ..Default::default()
            };
            link.insert(&self.db).await.map_err(|e| {
                EscolaError::database_operation(format!("Link guardian student failed: {e}"))
            })?;
        }

        Ok(())
    }

    async fn into_detail(
        &self,
        profile: crate::entity::guardian_profiles::Model,
        user: users::Model,
    ) -> Result<GuardianDetail> {
        let student_ids = self.linked_student_ids(profile.id).await?;
        let students = self.list_students_by_ids_impl(&student_ids).await?;

        Ok(GuardianDetail {
            profile: profile.into_guardian_profile(),
            user: user.into_user(),
            students,
        })
    }

    pub async fn create_guardian_profile_impl(
        &self,
        user_id: i64,
        req: CreateGuardianRequest,
    ) -> Result<GuardianProfile> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            user_id: Set(user_id),
            phone: Set(req.phone),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model.insert(&self.db).await.map_err(|e| {
            EscolaError::database_operation(format!("Create guardian profile failed: {e}"))
        })?;

        self.replace_student_links(result.id, &req.student_ids)
            .await?;

        Ok(result.into_guardian_profile())
    }

    pub async fn get_guardian_by_id_impl(&self, id: i64) -> Result<Option<GuardianDetail>> {
        let result = GuardianProfiles::find_by_id(id)
            .find_also_related(users::Entity)
            .one(&self.db)
            .await
            .map_err(|e| EscolaError::database_operation(format!("Query guardian failed: {e}")))?;

        match result {
            Some((profile, Some(user))) => Ok(Some(self.into_detail(profile, user).await?)),
            _ => Ok(None),
        }
    }

    pub async fn get_guardian_by_user_id_impl(
        &self,
        user_id: i64,
    ) -> Result<Option<GuardianProfile>> {
        let result = GuardianProfiles::find()
            .filter(Column::UserId.eq(user_id))
            .one(&self.db)
            .await
            .map_err(|e| EscolaError::database_operation(format!("Query guardian failed: {e}")))?;

        Ok(result.map(|m| m.into_guardian_profile()))
    }

    pub async fn list_guardians_with_pagination_impl(
        &self,
        query: GuardianListQuery,
    ) -> Result<GuardianListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = GuardianProfiles::find().find_also_related(users::Entity);

        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let escaped = escape_like_pattern(search.trim());
            select = select.filter(
                Condition::any()
                    .add(users::Column::Username.contains(&escaped))
                    .add(users::Column::Email.contains(&escaped))
                    .add(users::Column::FirstName.contains(&escaped))
                    .add(users::Column::LastName.contains(&escaped)),
            );
        }

        select = select.order_by_asc(users::Column::FirstName);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| EscolaError::database_operation(format!("Count guardians failed: {e}")))?;

        let pages = paginator.num_pages().await.map_err(|e| {
            EscolaError::database_operation(format!("Count guardian pages failed: {e}"))
        })?;

        let rows = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| EscolaError::database_operation(format!("List guardians failed: {e}")))?;

        let mut items = Vec::with_capacity(rows.len());
        for (profile, user) in rows {
            if let Some(user) = user {
                items.push(self.into_detail(profile, user).await?);
            }
        }

        Ok(GuardianListResponse {
            items,
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    pub async fn update_guardian_impl(
        &self,
        id: i64,
        update: UpdateGuardianRequest,
    ) -> Result<Option<GuardianDetail>> {
        let existing = self.get_guardian_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(phone) = update.phone {
            model.phone = Set(Some(phone));
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| EscolaError::database_operation(format!("Update guardian failed: {e}")))?;

        if let Some(ref student_ids) = update.student_ids {
            self.replace_student_links(id, student_ids).await?;
        }

        self.get_guardian_by_id_impl(id).await
    }

    pub async fn delete_guardian_impl(&self, id: i64) -> Result<bool> {
        let result = GuardianProfiles::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| EscolaError::database_operation(format!("Delete guardian failed: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    pub async fn list_guardian_student_ids_impl(&self, user_id: i64) -> Result<Vec<i64>> {
        let profile = self.get_guardian_by_user_id_impl(user_id).await?;

        match profile {
            Some(profile) => self.linked_student_ids(profile.id).await,
            None => Ok(Vec::new()),
        }
    }

    pub async fn get_guardian_for_student_impl(
        &self,
        student_id: i64,
    ) -> Result<Option<(GuardianProfile, User)>> {
        let link = guardian_students::Entity::find()
            .filter(guardian_students::Column::StudentId.eq(student_id))
            .one(&self.db)
            .await
            .map_err(|e| {
                EscolaError::database_operation(format!("Query guardian students failed: {e}"))
            })?;

        let Some(link) = link else {
            return Ok(None);
        };

        let result = GuardianProfiles::find_by_id(link.guardian_id)
            .find_also_related(users::Entity)
            .one(&self.db)
            .await
            .map_err(|e| EscolaError::database_operation(format!("Query guardian failed: {e}")))?;

        Ok(result.and_then(|(profile, user)| {
            user.map(|u| (profile.into_guardian_profile(), u.into_user()))
        }))
    }
}
