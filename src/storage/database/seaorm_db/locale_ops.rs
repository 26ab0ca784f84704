use crate::utils::error::{AdminError, Result};
use sea_orm::sea_query::Expr;
use sea_orm::*;
use tracing::debug;
use uuid::Uuid;

use super::super::entities::{self, user, user_session};
use super::types::SeaOrmDatabase;

impl SeaOrmDatabase {
    /// Write a locale to the user row and then to the session slot, atomically
    ///
    /// Nothing is written unless both rows exist.
    pub async fn persist_locale(
        &self,
        user_id: Uuid,
        session_id: Option<&str>,
        locale: &str,
    ) -> Result<()> {
        debug!("Persisting locale {} for user {}", locale, user_id);

        let txn = self.db.begin().await.map_err(AdminError::Database)?;

        let updated = entities::User::update_many()
            .col_expr(user::Column::Locale, Expr::value(locale))
            .col_expr(
                user::Column::UpdatedAt,
                Expr::value(chrono::Utc::now().fixed_offset()),
            )
            .filter(user::Column::Id.eq(user_id))
            .exec(&txn)
            .await
            .map_err(AdminError::Database)?;

        if updated.rows_affected == 0 {
            txn.rollback().await.map_err(AdminError::Database)?;
            return Err(AdminError::NotFound(format!("User {} not found", user_id)));
        }

        if let Some(session_id) = session_id {
            let updated = entities::UserSession::update_many()
                .col_expr(user_session::Column::Locale, Expr::value(locale))
                .filter(user_session::Column::Id.eq(session_id))
                .filter(user_session::Column::UserId.eq(user_id))
                .exec(&txn)
                .await
                .map_err(AdminError::Database)?;

            if updated.rows_affected == 0 {
                txn.rollback().await.map_err(AdminError::Database)?;
                return Err(AdminError::Session(
                    "Session not found for locale update".to_string(),
                ));
            }
        }

        txn.commit().await.map_err(AdminError::Database)?;
        Ok(())
    }
}
