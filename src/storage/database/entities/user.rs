use sea_orm::Set;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// User database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    /// User ID (UUID)
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    /// Display name
    pub name: String,

    /// Email address (unique)
    #[sea_orm(unique)]
    pub email: String,

    /// Password hash
    pub password_hash: String,

    /// Preferred display language (`ar` / `en`)
    pub locale: Option<String>,

    /// Creation timestamp
    pub created_at: DateTimeWithTimeZone,

    /// Last update timestamp
    pub updated_at: DateTimeWithTimeZone,
}

/// User entity relations
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// User sessions relation
    #[sea_orm(has_many = "super::user_session::Entity")]
    UserSessions,
}

impl Related<super::user_session::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserSessions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Convert SeaORM model to domain user model
    pub fn to_domain_user(&self) -> crate::core::models::User {
        crate::core::models::User {
            metadata: crate::core::models::Metadata {
                id: self.id,
                created_at: self.created_at.naive_utc().and_utc(),
                updated_at: self.updated_at.naive_utc().and_utc(),
            },
            name: self.name.clone(),
            email: self.email.clone(),
            password_hash: self.password_hash.clone(),
            locale: self.locale.clone(),
        }
    }

    /// Convert domain user model to SeaORM active model
    pub fn from_domain_user(user: &crate::core::models::User) -> ActiveModel {
        ActiveModel {
            id: Set(user.metadata.id),
            name: Set(user.name.clone()),
            email: Set(user.email.clone()),
            password_hash: Set(user.password_hash.clone()),
            locale: Set(user.locale.clone()),
            created_at: Set(user.metadata.created_at.into()),
            updated_at: Set(user.metadata.updated_at.into()),
        }
    }
}
