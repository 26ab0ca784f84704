use crate::core::models::UserSession;
use crate::utils::error::{AdminError, Result};
use sea_orm::sea_query::Expr;
use sea_orm::*;
use tracing::debug;

use super::super::entities::{self, user_session};
use super::types::SeaOrmDatabase;

impl SeaOrmDatabase {
    /// Store a new session row
    pub async fn create_session(&self, session: &UserSession) -> Result<()> {
        debug!("Creating session for user: {}", session.user_id);

        entities::UserSession::insert(user_session::Model::from_domain_session(session))
            .exec_without_returning(&self.db)
            .await
            .map_err(AdminError::Database)?;

        Ok(())
    }

    /// Look up a session by token
    pub async fn find_session(&self, session_id: &str) -> Result<Option<UserSession>> {
        let model = entities::UserSession::find_by_id(session_id.to_string())
            .one(&self.db)
            .await
            .map_err(AdminError::Database)?;

        Ok(model.map(|m| m.to_domain_session()))
    }

    /// Record activity on a session
    pub async fn touch_session(&self, session_id: &str) -> Result<()> {
        entities::UserSession::update_many()
            .col_expr(
                user_session::Column::LastAccessedAt,
                Expr::value(chrono::Utc::now().fixed_offset()),
            )
            .filter(user_session::Column::Id.eq(session_id))
            .exec(&self.db)
            .await
            .map_err(AdminError::Database)?;

        Ok(())
    }

    /// Mark a session inactive; `false` when it does not exist
    pub async fn deactivate_session(&self, session_id: &str) -> Result<bool> {
        debug!("Deactivating session");

        let result = entities::UserSession::update_many()
            .col_expr(user_session::Column::IsActive, Expr::value(false))
            .filter(user_session::Column::Id.eq(session_id))
            .exec(&self.db)
            .await
            .map_err(AdminError::Database)?;

        Ok(result.rows_affected > 0)
    }
}
