//! Authorization rules for the user resource

use super::rbac::permissions::{ACCESS_USER, CREATE_USER, DELETE_USER, UPDATE_USER};
use super::types::Subject;
use crate::core::models::User;
use crate::locale::{Locale, t};
use crate::utils::error::{AdminError, Result};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use tracing::warn;

/// Actions on the user resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UserAction {
    ViewAny,
    View,
    Create,
    Update,
    Delete,
}

impl UserAction {
    pub const ALL: [UserAction; 5] = [
        UserAction::ViewAny,
        UserAction::View,
        UserAction::Create,
        UserAction::Update,
        UserAction::Delete,
    ];

    pub fn name(self) -> &'static str {
        match self {
            UserAction::ViewAny => "viewAny",
            UserAction::View => "view",
            UserAction::Create => "create",
            UserAction::Update => "update",
            UserAction::Delete => "delete",
        }
    }

    /// The single permission token guarding this action
    pub fn required_permission(self) -> &'static str {
        match self {
            UserAction::ViewAny | UserAction::View => ACCESS_USER,
            UserAction::Create => CREATE_USER,
            UserAction::Update => UPDATE_USER,
            UserAction::Delete => DELETE_USER,
        }
    }
}

impl fmt::Display for UserAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for UserAction {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|action| action.name() == s)
            .ok_or_else(|| format!("Unknown action: {}", s))
    }
}

/// Class-level flags attached to listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ClassAbilities {
    #[serde(rename = "can_viewAny")]
    pub can_view_any: bool,
    pub can_create: bool,
}

/// Per-row flags attached to listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InstanceAbilities {
    pub can_update: bool,
    pub can_delete: bool,
}

/// Decides which subject may do what to users
///
/// Each action maps to exactly one permission. The target user is accepted
/// for the instance actions but never inspected, so a subject editing
/// themselves needs `update_user` like anyone else.
pub struct UserPolicy;

impl UserPolicy {
    pub fn view_any(subject: &Subject) -> bool {
        subject.can(UserAction::ViewAny.required_permission())
    }

    pub fn view(subject: &Subject, _target: &User) -> bool {
        subject.can(UserAction::View.required_permission())
    }

    pub fn create(subject: &Subject) -> bool {
        subject.can(UserAction::Create.required_permission())
    }

    pub fn update(subject: &Subject, _target: &User) -> bool {
        subject.can(UserAction::Update.required_permission())
    }

    pub fn delete(subject: &Subject, _target: &User) -> bool {
        subject.can(UserAction::Delete.required_permission())
    }

    /// Evaluate an action; no subject means denied
    pub fn allows(subject: Option<&Subject>, action: UserAction) -> bool {
        subject.is_some_and(|subject| subject.can(action.required_permission()))
    }

    /// Evaluate an action given by name; unknown names are denied
    pub fn allows_named(subject: Option<&Subject>, action: &str) -> bool {
        match action.parse::<UserAction>() {
            Ok(action) => Self::allows(subject, action),
            Err(_) => {
                warn!("Denied unknown user action: {}", action);
                false
            }
        }
    }

    /// Turn a denial into an authorization error carrying a translated message
    pub fn authorize(subject: Option<&Subject>, action: UserAction, locale: Locale) -> Result<()> {
        if Self::allows(subject, action) {
            return Ok(());
        }

        warn!(
            "Denied {} on users for {}",
            action,
            subject.map_or_else(|| "guest".to_string(), |s| s.id().to_string())
        );
        Err(AdminError::authorization(t(locale, "auth.unauthorized")))
    }

    pub fn class_abilities(subject: Option<&Subject>) -> ClassAbilities {
        ClassAbilities {
            can_view_any: Self::allows(subject, UserAction::ViewAny),
            can_create: Self::allows(subject, UserAction::Create),
        }
    }

    pub fn instance_abilities(subject: Option<&Subject>, target: &User) -> InstanceAbilities {
        match subject {
            Some(subject) => InstanceAbilities {
                can_update: Self::update(subject, target),
                can_delete: Self::delete(subject, target),
            },
            None => InstanceAbilities {
                can_update: false,
                can_delete: false,
            },
        }
    }
}
