//! Database integration tests
//!
//! Tests storage operations using a real in-memory SQLite database.

#[cfg(test)]
mod tests {
    use crate::common::{TestDatabase, UserFactory};
    use chrono::{Duration, Utc};
    use polyglot_admin::core::models::UserSession;
    use polyglot_admin::utils::error::AdminError;

    #[tokio::test]
    async fn test_user_round_trip() {
        let db = TestDatabase::new().await;
        let user = UserFactory::insert(db.storage(), "Asmaa").await;

        let by_email = db.db().find_user_by_email(&user.email).await.unwrap();
        assert_eq!(by_email.map(|u| u.id()), Some(user.id()));

        let by_id = db.db().find_user_by_id(user.id()).await.unwrap().unwrap();
        assert_eq!(by_id.name, "Asmaa");
        assert!(by_id.locale.is_none());
    }

    #[tokio::test]
    async fn test_email_taken_ignores_own_row() {
        let db = TestDatabase::new().await;
        let user = UserFactory::insert(db.storage(), "Omar").await;

        assert!(db.db().email_taken(&user.email, None).await.unwrap());
        assert!(!db.db().email_taken(&user.email, Some(user.id())).await.unwrap());
        assert!(!db.db().email_taken("nobody@example.com", None).await.unwrap());
    }

    #[tokio::test]
    async fn test_persist_locale_writes_user_and_session() {
        let db = TestDatabase::new().await;
        let user = UserFactory::insert(db.storage(), "Laila").await;
        let session = UserSession::new(
            "locale-session".to_string(),
            user.id(),
            Utc::now() + Duration::hours(1),
        );
        db.db().create_session(&session).await.unwrap();

        db.db()
            .persist_locale(user.id(), Some("locale-session"), "ar")
            .await
            .unwrap();

        let user = db.db().find_user_by_id(user.id()).await.unwrap().unwrap();
        let session = db.db().find_session("locale-session").await.unwrap().unwrap();
        assert_eq!(user.locale.as_deref(), Some("ar"));
        assert_eq!(session.locale.as_deref(), Some("ar"));
    }

    #[tokio::test]
    async fn test_persist_locale_rolls_back_without_session() {
        let db = TestDatabase::new().await;
        let user = UserFactory::insert(db.storage(), "Karim").await;

        let err = db
            .db()
            .persist_locale(user.id(), Some("missing-session"), "ar")
            .await
            .unwrap_err();
        assert!(matches!(err, AdminError::Session(_)));

        let user = db.db().find_user_by_id(user.id()).await.unwrap().unwrap();
        assert!(user.locale.is_none());
    }

    #[tokio::test]
    async fn test_delete_user_removes_sessions_and_grants() {
        let db = TestDatabase::new().await;
        let user = UserFactory::insert(db.storage(), "Huda").await;
        let permission = db.db().find_or_create_permission("access_user").await.unwrap();
        db.db()
            .give_permission_to_user(user.id(), permission.id)
            .await
            .unwrap();
        let session = UserSession::new("doomed".to_string(), user.id(), Utc::now() + Duration::hours(1));
        db.db().create_session(&session).await.unwrap();

        assert!(db.db().delete_user(user.id()).await.unwrap());

        assert!(db.db().find_user_by_id(user.id()).await.unwrap().is_none());
        assert!(db.db().find_session("doomed").await.unwrap().is_none());
        assert!(db.db().effective_permission_names(user.id()).await.unwrap().is_empty());
        assert!(!db.db().delete_user(user.id()).await.unwrap());
    }
}
