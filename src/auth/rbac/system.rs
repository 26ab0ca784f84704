//! RBAC system core functionality

use crate::config::RbacConfig;
use crate::core::models::User;
use crate::storage::StorageLayer;
use crate::utils::crypto::hash_password;
use crate::utils::error::{AdminError, Result};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, info};
use uuid::Uuid;

use super::permissions::DEFAULT_PERMISSIONS;
use super::types::{PermissionSet, Role};

/// RBAC system backed by the role and permission tables
#[derive(Debug, Clone)]
pub struct RbacSystem {
    /// RBAC configuration
    pub(super) config: RbacConfig,
    /// Storage holding roles, permissions and their assignments
    pub(super) storage: Arc<StorageLayer>,
}

impl RbacSystem {
    /// Create a new RBAC system
    pub fn new(config: &RbacConfig, storage: Arc<StorageLayer>) -> Self {
        Self {
            config: config.clone(),
            storage,
        }
    }

    /// Name of the role that holds every user permission
    pub fn admin_role(&self) -> &str {
        &self.config.admin_role
    }

    /// Seed default permissions, the admin role and the optional admin account
    ///
    /// Safe to run on every boot; existing rows are reused.
    pub async fn seed_defaults(&self) -> Result<()> {
        info!("Seeding default roles and permissions");
        let db = self.storage.db();

        let mut permission_ids = Vec::with_capacity(DEFAULT_PERMISSIONS.len());
        for permission in DEFAULT_PERMISSIONS.iter() {
            debug!("Seeding permission {}: {}", permission.name, permission.description);
            permission_ids.push(db.find_or_create_permission(permission.name).await?.id);
        }

        let admin = db.find_or_create_role(&self.config.admin_role).await?;
        for permission_id in permission_ids {
            db.grant_permission_to_role(admin.id, permission_id).await?;
        }

        if let Some(seed) = &self.config.seed_admin {
            let user = match db.find_user_by_email(&seed.email).await? {
                Some(user) => user,
                None => {
                    info!("Creating seed admin account {}", seed.email);
                    let user = User::new(
                        seed.name.clone(),
                        seed.email.clone(),
                        hash_password(&seed.password)?,
                    );
                    db.create_user(&user).await?
                }
            };
            db.assign_role_to_user(user.id(), admin.id).await?;
        }

        info!("RBAC seeding completed");
        Ok(())
    }

    /// Effective permissions of a user: role grants plus direct grants
    pub async fn effective_permissions(&self, user_id: Uuid) -> Result<PermissionSet> {
        let names = self
            .storage
            .db()
            .effective_permission_names(user_id)
            .await?;
        debug!("User {} holds {} permissions", user_id, names.len());
        Ok(names.into_iter().collect())
    }

    /// Roles assigned to a user
    pub async fn user_roles(&self, user_id: Uuid) -> Result<Vec<String>> {
        self.storage.db().role_names_for_user(user_id).await
    }

    /// Create a role with the given permissions, creating missing permissions
    pub async fn create_role(&self, name: &str, permissions: &[&str]) -> Result<Role> {
        let db = self.storage.db();
        let role = db.find_or_create_role(name).await?;

        let mut granted = HashSet::new();
        for permission in permissions {
            let record = db.find_or_create_permission(permission).await?;
            db.grant_permission_to_role(role.id, record.id).await?;
            granted.insert(record.name);
        }

        info!("Role {} now grants {} permissions", name, granted.len());
        Ok(Role {
            name: role.name,
            permissions: granted,
        })
    }

    /// Assign an existing role to a user
    pub async fn assign_role(&self, user_id: Uuid, role_name: &str) -> Result<()> {
        let db = self.storage.db();
        let role = db
            .find_role_by_name(role_name)
            .await?
            .ok_or_else(|| AdminError::not_found(format!("Role {} not found", role_name)))?;

        db.assign_role_to_user(user_id, role.id).await?;
        info!("Assigned role {} to user {}", role_name, user_id);
        Ok(())
    }

    /// Grant an existing permission directly to a user
    pub async fn give_permission_to(&self, user_id: Uuid, permission: &str) -> Result<()> {
        let db = self.storage.db();
        let record = db
            .find_permission_by_name(permission)
            .await?
            .ok_or_else(|| {
                AdminError::not_found(format!("Permission {} not found", permission))
            })?;

        db.give_permission_to_user(user_id, record.id).await?;
        info!("Granted {} directly to user {}", permission, user_id);
        Ok(())
    }
}
