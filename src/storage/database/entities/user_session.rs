use sea_orm::Set;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// User session database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "user_sessions")]
pub struct Model {
    /// Session token
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,

    /// User ID this session belongs to
    pub user_id: Uuid,

    /// Locale slot
    pub locale: Option<String>,

    /// Session expiration timestamp
    pub expires_at: DateTimeWithTimeZone,

    /// Session creation timestamp
    pub created_at: DateTimeWithTimeZone,

    /// Last access timestamp
    pub last_accessed_at: DateTimeWithTimeZone,

    /// Client IP address (optional)
    pub ip_address: Option<String>,

    /// Client user agent (optional)
    pub user_agent: Option<String>,

    /// Session active status
    pub is_active: bool,
}

/// User session entity relations
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Belongs to user relation
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    User,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn to_domain_session(&self) -> crate::core::models::UserSession {
        crate::core::models::UserSession {
            id: self.id.clone(),
            user_id: self.user_id,
            locale: self.locale.clone(),
            ip_address: self.ip_address.clone(),
            user_agent: self.user_agent.clone(),
            expires_at: self.expires_at.naive_utc().and_utc(),
            created_at: self.created_at.naive_utc().and_utc(),
            last_activity: self.last_accessed_at.naive_utc().and_utc(),
            is_active: self.is_active,
        }
    }

    pub fn from_domain_session(session: &crate::core::models::UserSession) -> ActiveModel {
        ActiveModel {
            id: Set(session.id.clone()),
            user_id: Set(session.user_id),
            locale: Set(session.locale.clone()),
            expires_at: Set(session.expires_at.into()),
            created_at: Set(session.created_at.into()),
            last_accessed_at: Set(session.last_activity.into()),
            ip_address: Set(session.ip_address.clone()),
            user_agent: Set(session.user_agent.clone()),
            is_active: Set(session.is_active),
        }
    }
}
