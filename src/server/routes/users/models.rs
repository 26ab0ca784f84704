//! Presentation models for the user resource

use crate::auth::{InstanceAbilities, Subject, UserPolicy};
use crate::core::models::User;
use serde::Serialize;
use uuid::Uuid;

/// One row of the user listing, with what the viewer may do to it
#[derive(Debug, Clone, Serialize)]
pub struct UserRow {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    #[serde(flatten)]
    pub abilities: InstanceAbilities,
}

impl UserRow {
    pub fn new(user: User, viewer: Option<&Subject>) -> Self {
        let abilities = UserPolicy::instance_abilities(viewer, &user);
        Self {
            id: user.id(),
            name: user.name,
            email: user.email,
            abilities,
        }
    }
}
