use super::SeaOrmStorage;
use crate::entity::users::{ActiveModel, Column, Entity as Users};
use crate::errors::{EscolaError, Result};
use crate::models::{
    PaginationInfo,
    users::{
        entities::{User, UserRole, UserStatus},
        requests::{CreateUserRequest, UpdateUserRequest, UserListQuery},
        responses::UserListResponse,
    },
};
use crate::utils::escape_like_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    Set,
};

impl SeaOrmStorage {
    pub async fn create_user_impl(
        &self,
        req: CreateUserRequest,
        password_hash: &str,
    ) -> Result<User> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            username: Set(req.username),
            email: Set(req.email),
            password_hash: Set(password_hash.to_string()),
            role: Set(req.role.to_string()),
            status: Set(UserStatus::Active.to_string()),
            is_superuser: Set(false),
            first_name: Set(req.first_name),
            last_name: Set(req.last_name),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| EscolaError::database_operation(format!("Create user failed: {e}")))?;

        Ok(result.into_user())
    }

    pub async fn get_user_by_id_impl(&self, id: i64) -> Result<Option<User>> {
        let result = Users::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| EscolaError::database_operation(format!("Query user failed: {e}")))?;

        Ok(result.map(|m| m.into_user()))
    }

    pub async fn get_user_by_username_impl(&self, username: &str) -> Result<Option<User>> {
        let result = Users::find()
            .filter(Column::Username.eq(username))
            .one(&self.db)
            .await
            .map_err(|e| EscolaError::database_operation(format!("Query user failed: {e}")))?;

        Ok(result.map(|m| m.into_user()))
    }

    pub async fn get_user_by_email_impl(&self, email: &str) -> Result<Option<User>> {
        let result = Users::find()
            .filter(Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(|e| EscolaError::database_operation(format!("Query user failed: {e}")))?;

        Ok(result.map(|m| m.into_user()))
    }

    pub async fn get_user_by_username_or_email_impl(
        &self,
        identifier: &str,
    ) -> Result<Option<User>> {
        let result = Users::find()
            .filter(
                Condition::any()
                    .add(Column::Username.eq(identifier))
                    .add(Column::Email.eq(identifier)),
            )
            .one(&self.db)
            .await
            .map_err(|e| EscolaError::database_operation(format!("Query user failed: {e}")))?;

        Ok(result.map(|m| m.into_user()))
    }

    pub async fn list_users_with_pagination_impl(
        &self,
        query: UserListQuery,
    ) -> Result<UserListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = Users::find();

        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let escaped = escape_like_pattern(search.trim());
            select = select.filter(
                Condition::any()
                    .add(Column::Username.contains(&escaped))
                    .add(Column::Email.contains(&escaped))
                    .add(Column::FirstName.contains(&escaped))
                    .add(Column::LastName.contains(&escaped)),
            );
        }

        if let Some(ref role) = query.role {
            select = select.filter(Column::Role.eq(role.to_string()));
        }

        if let Some(ref status) = query.status {
            select = select.filter(Column::Status.eq(status.to_string()));
        }

        select = select.order_by_desc(Column::CreatedAt);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| EscolaError::database_operation(format!("Count users failed: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| EscolaError::database_operation(format!("Count user pages failed: {e}")))?;

        let users = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| EscolaError::database_operation(format!("List users failed: {e}")))?;

        Ok(UserListResponse {
            items: users.into_iter().map(|m| m.into_user()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    pub async fn update_last_login_impl(&self, id: i64) -> Result<bool> {
        let now = chrono::Utc::now().timestamp();

        let result = Users::update_many()
            .col_expr(Column::LastLogin, sea_orm::sea_query::Expr::value(now))
            .filter(Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(|e| {
                EscolaError::database_operation(format!("Update last login failed: {e}"))
            })?;

        Ok(result.rows_affected > 0)
    }

    pub async fn update_user_impl(
        &self,
        id: i64,
        update: UpdateUserRequest,
    ) -> Result<Option<User>> {
        let existing = self.get_user_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(email) = update.email {
            model.email = Set(email);
        }

        // Already hashed by the service layer
        if let Some(password) = update.password {
            model.password_hash = Set(password);
        }

        if let Some(role) = update.role {
            model.role = Set(role.to_string());
        }

        if let Some(status) = update.status {
            model.status = Set(status.to_string());
        }

        if let Some(first_name) = update.first_name {
            model.first_name = Set(Some(first_name));
        }

        if let Some(last_name) = update.last_name {
            model.last_name = Set(Some(last_name));
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| EscolaError::database_operation(format!("Update user failed: {e}")))?;

        self.get_user_by_id_impl(id).await
    }

    pub async fn delete_user_impl(&self, id: i64) -> Result<bool> {
        let result = Users::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| EscolaError::database_operation(format!("Delete user failed: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    pub async fn count_users_impl(&self) -> Result<u64> {
        let count = Users::find()
            .count(&self.db)
            .await
            .map_err(|e| EscolaError::database_operation(format!("Count users failed: {e}")))?;

        Ok(count)
    }

    pub async fn count_users_by_role_impl(&self, role: UserRole) -> Result<u64> {
        let count = Users::find()
            .filter(Column::Role.eq(role.to_string()))
            .count(&self.db)
            .await
            .map_err(|e| EscolaError::database_operation(format!("Count users failed: {e}")))?;

        Ok(count)
    }
}
