use crate::utils::error::{AdminError, Result};
use sea_orm::*;
use std::collections::BTreeSet;
use tracing::{debug, info};
use uuid::Uuid;

use super::super::entities::{
    self, permission, role, role_permission, user_permission, user_role,
};
use super::types::SeaOrmDatabase;

impl SeaOrmDatabase {
    /// Find a permission by name, creating it when missing
    pub async fn find_or_create_permission(&self, name: &str) -> Result<permission::Model> {
        if let Some(existing) = entities::Permission::find()
            .filter(permission::Column::Name.eq(name))
            .one(&self.db)
            .await
            .map_err(AdminError::Database)?
        {
            return Ok(existing);
        }

        info!("Creating permission: {}", name);
        let model = permission::ActiveModel {
            name: Set(name.to_string()),
            created_at: Set(chrono::Utc::now().into()),
            ..Default::default()
        };

        model.insert(&self.db).await.map_err(AdminError::Database)
    }

    /// Find a role by name, creating it when missing
    pub async fn find_or_create_role(&self, name: &str) -> Result<role::Model> {
        if let Some(existing) = self.find_role_by_name(name).await? {
            return Ok(existing);
        }

        info!("Creating role: {}", name);
        let model = role::ActiveModel {
            name: Set(name.to_string()),
            created_at: Set(chrono::Utc::now().into()),
            ..Default::default()
        };

        model.insert(&self.db).await.map_err(AdminError::Database)
    }

    pub async fn find_role_by_name(&self, name: &str) -> Result<Option<role::Model>> {
        entities::Role::find()
            .filter(role::Column::Name.eq(name))
            .one(&self.db)
            .await
            .map_err(AdminError::Database)
    }

    pub async fn find_permission_by_name(&self, name: &str) -> Result<Option<permission::Model>> {
        entities::Permission::find()
            .filter(permission::Column::Name.eq(name))
            .one(&self.db)
            .await
            .map_err(AdminError::Database)
    }

    /// Grant a permission to a role (no-op when already granted)
    pub async fn grant_permission_to_role(&self, role_id: i32, permission_id: i32) -> Result<()> {
        let exists = entities::RolePermission::find()
            .filter(role_permission::Column::RoleId.eq(role_id))
            .filter(role_permission::Column::PermissionId.eq(permission_id))
            .count(&self.db)
            .await
            .map_err(AdminError::Database)?
            > 0;
        if exists {
            return Ok(());
        }

        entities::RolePermission::insert(role_permission::ActiveModel {
            role_id: Set(role_id),
            permission_id: Set(permission_id),
        })
        .exec_without_returning(&self.db)
        .await
        .map_err(AdminError::Database)?;

        Ok(())
    }

    /// Assign a role to a user (no-op when already assigned)
    pub async fn assign_role_to_user(&self, user_id: Uuid, role_id: i32) -> Result<()> {
        let exists = entities::UserRole::find()
            .filter(user_role::Column::UserId.eq(user_id))
            .filter(user_role::Column::RoleId.eq(role_id))
            .count(&self.db)
            .await
            .map_err(AdminError::Database)?
            > 0;
        if exists {
            return Ok(());
        }

        entities::UserRole::insert(user_role::ActiveModel {
            user_id: Set(user_id),
            role_id: Set(role_id),
        })
        .exec_without_returning(&self.db)
        .await
        .map_err(AdminError::Database)?;

        Ok(())
    }

    /// Grant a permission directly to a user (no-op when already granted)
    pub async fn give_permission_to_user(&self, user_id: Uuid, permission_id: i32) -> Result<()> {
        let exists = entities::UserPermission::find()
            .filter(user_permission::Column::UserId.eq(user_id))
            .filter(user_permission::Column::PermissionId.eq(permission_id))
            .count(&self.db)
            .await
            .map_err(AdminError::Database)?
            > 0;
        if exists {
            return Ok(());
        }

        entities::UserPermission::insert(user_permission::ActiveModel {
            user_id: Set(user_id),
            permission_id: Set(permission_id),
        })
        .exec_without_returning(&self.db)
        .await
        .map_err(AdminError::Database)?;

        Ok(())
    }

    /// Names of the roles assigned to a user
    pub async fn role_names_for_user(&self, user_id: Uuid) -> Result<Vec<String>> {
        let role_ids = self.role_ids_for_user(user_id).await?;
        if role_ids.is_empty() {
            return Ok(Vec::new());
        }

        let roles = entities::Role::find()
            .filter(role::Column::Id.is_in(role_ids))
            .order_by_asc(role::Column::Name)
            .all(&self.db)
            .await
            .map_err(AdminError::Database)?;

        Ok(roles.into_iter().map(|r| r.name).collect())
    }

    /// Permission names held by a user, directly or through any role
    pub async fn effective_permission_names(&self, user_id: Uuid) -> Result<Vec<String>> {
        debug!("Loading effective permissions for user: {}", user_id);

        let mut permission_ids: BTreeSet<i32> = entities::UserPermission::find()
            .filter(user_permission::Column::UserId.eq(user_id))
            .all(&self.db)
            .await
            .map_err(AdminError::Database)?
            .into_iter()
            .map(|grant| grant.permission_id)
            .collect();

        let role_ids = self.role_ids_for_user(user_id).await?;
        if !role_ids.is_empty() {
            let role_grants = entities::RolePermission::find()
                .filter(role_permission::Column::RoleId.is_in(role_ids))
                .all(&self.db)
                .await
                .map_err(AdminError::Database)?;
            permission_ids.extend(role_grants.into_iter().map(|grant| grant.permission_id));
        }

        if permission_ids.is_empty() {
            return Ok(Vec::new());
        }

        let permissions = entities::Permission::find()
            .filter(permission::Column::Id.is_in(permission_ids))
            .all(&self.db)
            .await
            .map_err(AdminError::Database)?;

        Ok(permissions.into_iter().map(|p| p.name).collect())
    }

    async fn role_ids_for_user(&self, user_id: Uuid) -> Result<Vec<i32>> {
        let assignments = entities::UserRole::find()
            .filter(user_role::Column::UserId.eq(user_id))
            .all(&self.db)
            .await
            .map_err(AdminError::Database)?;

        Ok(assignments.into_iter().map(|a| a.role_id).collect())
    }
}
