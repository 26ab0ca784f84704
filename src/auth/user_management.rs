//! User account management

use crate::core::models::User;
use crate::locale::{Locale, t, t_fmt};
use crate::storage::StorageLayer;
use crate::utils::crypto::{hash_password, verify_password};
use crate::utils::error::{AdminError, FieldErrors, Result};
use crate::utils::is_valid_email;
use serde::Deserialize;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

const NAME_MAX_CHARS: usize = 255;

/// Input for creating a user
#[derive(Debug, Clone, Deserialize)]
pub struct NewUser {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Partial update of another user; absent fields stay as they are
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserChanges {
    pub name: Option<String>,
    pub email: Option<String>,
    /// Empty means keep the current password
    pub password: Option<String>,
}

/// Self-service profile update
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfileChanges {
    pub name: Option<String>,
    pub email: Option<String>,
}

/// Creates, edits and removes user accounts, validating input in the caller's locale
#[derive(Debug, Clone)]
pub struct UserManager {
    storage: Arc<StorageLayer>,
}

impl UserManager {
    pub fn new(storage: Arc<StorageLayer>) -> Self {
        Self { storage }
    }

    pub async fn list(&self) -> Result<Vec<User>> {
        self.storage.db().list_users().await
    }

    pub async fn find(&self, id: Uuid) -> Result<Option<User>> {
        self.storage.db().find_user_by_id(id).await
    }

    /// Validate and store a new user with a hashed password
    pub async fn create(&self, input: &NewUser, locale: Locale) -> Result<User> {
        let name = input.name.trim();
        let email = input.email.trim();

        let mut errors = FieldErrors::new();
        validate_name(name, locale, &mut errors);
        self.validate_email(email, None, locale, &mut errors).await?;
        if input.password.is_empty() {
            errors.add("password", t(locale, "validation.custom.password.required"));
        }
        errors.into_result()?;

        let user = User::new(
            name.to_string(),
            email.to_string(),
            hash_password(&input.password)?,
        );
        let user = self
            .storage
            .db()
            .create_user(&user)
            .await
            .map_err(|e| email_conflict(e, locale))?;

        info!("Created user {}", user.id());
        Ok(user)
    }

    /// Apply changes to an existing user
    pub async fn update(&self, id: Uuid, changes: &UserChanges, locale: Locale) -> Result<User> {
        let mut user = self
            .find(id)
            .await?
            .ok_or_else(|| AdminError::not_found(t(locale, "users.not_found")))?;

        let mut errors = FieldErrors::new();
        if let Some(name) = &changes.name {
            validate_name(name.trim(), locale, &mut errors);
            user.name = name.trim().to_string();
        }
        if let Some(email) = &changes.email {
            self.validate_email(email.trim(), Some(id), locale, &mut errors)
                .await?;
            user.email = email.trim().to_string();
        }
        errors.into_result()?;

        if let Some(password) = changes.password.as_deref().filter(|p| !p.is_empty()) {
            user.password_hash = hash_password(password)?;
        }

        user.metadata.touch();
        let user = self
            .storage
            .db()
            .update_user(&user)
            .await
            .map_err(|e| email_conflict(e, locale))?;

        info!("Updated user {}", user.id());
        Ok(user)
    }

    /// Update one's own name and email
    pub async fn update_profile(
        &self,
        user: &User,
        changes: &ProfileChanges,
        locale: Locale,
    ) -> Result<User> {
        let changes = UserChanges {
            name: changes.name.clone(),
            email: changes.email.clone(),
            password: None,
        };
        self.update(user.id(), &changes, locale).await
    }

    /// Remove a user; `false` when no such user exists
    pub async fn delete(&self, id: Uuid) -> Result<bool> {
        self.storage.db().delete_user(id).await
    }

    /// Remove one's own account after confirming the current password
    pub async fn delete_own_account(&self, user: &User, password: &str, locale: Locale) -> Result<()> {
        if password.is_empty() {
            return Err(AdminError::validation(
                "password",
                t(locale, "validation.custom.password.required"),
            ));
        }
        if !verify_password(password, &user.password_hash)? {
            return Err(AdminError::validation(
                "password",
                t(locale, "validation.custom.password.current_password"),
            ));
        }

        self.delete(user.id()).await?;
        info!("User {} deleted their account", user.id());
        Ok(())
    }

    async fn validate_email(
        &self,
        email: &str,
        except: Option<Uuid>,
        locale: Locale,
        errors: &mut FieldErrors,
    ) -> Result<()> {
        if email.is_empty() {
            errors.add("email", t(locale, "validation.custom.email.required"));
        } else if !is_valid_email(email) {
            errors.add("email", t(locale, "validation.custom.email.email"));
        } else if self.storage.db().email_taken(email, except).await? {
            errors.add("email", t(locale, "validation.custom.email.unique"));
        }
        Ok(())
    }
}

/// A concurrent write can claim an email between the check and the insert
pub(super) fn email_conflict(err: AdminError, locale: Locale) -> AdminError {
    if err.is_unique_violation() {
        AdminError::validation("email", t(locale, "validation.custom.email.unique"))
    } else {
        err
    }
}

fn validate_name(name: &str, locale: Locale, errors: &mut FieldErrors) {
    if name.is_empty() {
        errors.add("name", t(locale, "validation.custom.name.required"));
    } else if name.chars().count() > NAME_MAX_CHARS {
        errors.add(
            "name",
            t_fmt(
                locale,
                "validation.custom.name.max",
                &[("max", NAME_MAX_CHARS.to_string().as_str())],
            ),
        );
    }
}
