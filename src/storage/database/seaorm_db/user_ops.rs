use crate::core::models::User;
use crate::utils::error::{AdminError, Result};
use sea_orm::*;
use tracing::{debug, info};
use uuid::Uuid;

use super::super::entities::{self, user, user_permission, user_role, user_session};
use super::types::SeaOrmDatabase;

impl SeaOrmDatabase {
    /// Find user by ID
    pub async fn find_user_by_id(&self, user_id: Uuid) -> Result<Option<User>> {
        debug!("Finding user by ID: {}", user_id);

        let user_model = entities::User::find_by_id(user_id)
            .one(&self.db)
            .await
            .map_err(AdminError::Database)?;

        Ok(user_model.map(|model| model.to_domain_user()))
    }

    /// Find user by email
    pub async fn find_user_by_email(&self, email: &str) -> Result<Option<User>> {
        debug!("Finding user by email: {}", email);

        let user_model = entities::User::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(AdminError::Database)?;

        Ok(user_model.map(|model| model.to_domain_user()))
    }

    /// All users, oldest first
    pub async fn list_users(&self) -> Result<Vec<User>> {
        let models = entities::User::find()
            .order_by_asc(user::Column::CreatedAt)
            .order_by_asc(user::Column::Name)
            .all(&self.db)
            .await
            .map_err(AdminError::Database)?;

        Ok(models.iter().map(user::Model::to_domain_user).collect())
    }

    /// Whether another account already uses `email`
    pub async fn email_taken(&self, email: &str, except: Option<Uuid>) -> Result<bool> {
        let mut query = entities::User::find().filter(user::Column::Email.eq(email));
        if let Some(id) = except {
            query = query.filter(user::Column::Id.ne(id));
        }

        let count = query.count(&self.db).await.map_err(AdminError::Database)?;
        Ok(count > 0)
    }

    /// Create a new user
    pub async fn create_user(&self, user: &User) -> Result<User> {
        debug!("Creating user: {}", user.email);

        let active_model = user::Model::from_domain_user(user);

        entities::User::insert(active_model)
            .exec_without_returning(&self.db)
            .await
            .map_err(AdminError::Database)?;

        Ok(user.clone())
    }

    /// Persist name, email and password of an existing user
    ///
    /// The locale column is left alone; it is written by `persist_locale`.
    pub async fn update_user(&self, user: &User) -> Result<User> {
        debug!("Updating user: {}", user.id());

        let mut active_model: user::ActiveModel = entities::User::find_by_id(user.id())
            .one(&self.db)
            .await
            .map_err(AdminError::Database)?
            .ok_or_else(|| AdminError::NotFound("User not found".to_string()))?
            .into();

        active_model.name = Set(user.name.clone());
        active_model.email = Set(user.email.clone());
        active_model.password_hash = Set(user.password_hash.clone());
        active_model.updated_at = Set(chrono::Utc::now().into());

        let updated = active_model
            .update(&self.db)
            .await
            .map_err(AdminError::Database)?;

        Ok(updated.to_domain_user())
    }

    /// Delete a user with its sessions and grants; `false` when no such user
    pub async fn delete_user(&self, user_id: Uuid) -> Result<bool> {
        let txn = self.db.begin().await.map_err(AdminError::Database)?;

        entities::UserSession::delete_many()
            .filter(user_session::Column::UserId.eq(user_id))
            .exec(&txn)
            .await
            .map_err(AdminError::Database)?;
        entities::UserRole::delete_many()
            .filter(user_role::Column::UserId.eq(user_id))
            .exec(&txn)
            .await
            .map_err(AdminError::Database)?;
        entities::UserPermission::delete_many()
            .filter(user_permission::Column::UserId.eq(user_id))
            .exec(&txn)
            .await
            .map_err(AdminError::Database)?;

        let result = entities::User::delete_by_id(user_id)
            .exec(&txn)
            .await
            .map_err(AdminError::Database)?;

        txn.commit().await.map_err(AdminError::Database)?;

        if result.rows_affected > 0 {
            info!("Deleted user {}", user_id);
        }
        Ok(result.rows_affected > 0)
    }
}
