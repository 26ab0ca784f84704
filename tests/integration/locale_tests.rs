//! Locale resolution and persistence against real storage

#[cfg(test)]
mod tests {
    use crate::common::{TestDatabase, UserFactory};
    use chrono::{Duration, Utc};
    use polyglot_admin::auth::Subject;
    use polyglot_admin::auth::rbac::PermissionSet;
    use polyglot_admin::core::models::UserSession;
    use polyglot_admin::locale::{ChangeResult, Locale, LocaleContext, LocaleResolver, LocaleSource};

    struct Fixture {
        db: TestDatabase,
        resolver: LocaleResolver,
        subject: Subject,
        session_id: String,
    }

    async fn fixture() -> Fixture {
        let db = TestDatabase::new().await;
        let user = UserFactory::insert(db.storage(), "Mona").await;
        let session = UserSession::new(
            format!("session-{}", user.id()),
            user.id(),
            Utc::now() + Duration::hours(2),
        );
        db.db().create_session(&session).await.unwrap();

        Fixture {
            resolver: LocaleResolver::new(db.storage()),
            subject: Subject::new(user, Vec::new(), PermissionSet::default()),
            session_id: session.id,
            db,
        }
    }

    impl Fixture {
        /// Resolve the way the next request would see it
        async fn next_request(&self) -> LocaleContext {
            let session = self.db.db().find_session(&self.session_id).await.unwrap().unwrap();
            let user = self
                .db
                .db()
                .find_user_by_id(self.subject.id())
                .await
                .unwrap()
                .unwrap();
            LocaleResolver::resolve_for_request(session.locale.as_deref(), user.locale.as_deref())
        }
    }

    #[tokio::test]
    async fn test_change_to_arabic_persists_both_stores() {
        let f = fixture().await;
        let mut context = LocaleContext::default();

        let result = f
            .resolver
            .change_locale("ar", Some(&f.subject), Some(&f.session_id), &mut context)
            .await
            .unwrap();

        assert_eq!(result, ChangeResult::Applied(Locale::Ar));
        assert_eq!(context.locale, Locale::Ar);
        assert!(context.is_rtl());

        let next = f.next_request().await;
        assert_eq!(next, LocaleContext::new(Locale::Ar, LocaleSource::Session));
    }

    #[tokio::test]
    async fn test_unsupported_locale_changes_nothing() {
        let f = fixture().await;
        let mut context = LocaleContext::default();

        let result = f
            .resolver
            .change_locale("fr", Some(&f.subject), Some(&f.session_id), &mut context)
            .await
            .unwrap();

        assert_eq!(result, ChangeResult::Ignored);
        assert_eq!(context, LocaleContext::default());
        assert_eq!(f.next_request().await, LocaleContext::default());
    }

    #[tokio::test]
    async fn test_change_is_idempotent() {
        let f = fixture().await;
        let mut context = LocaleContext::default();

        for _ in 0..2 {
            let result = f
                .resolver
                .change_locale("en", Some(&f.subject), Some(&f.session_id), &mut context)
                .await
                .unwrap();
            assert_eq!(result, ChangeResult::Applied(Locale::En));
        }

        let next = f.next_request().await;
        assert_eq!(next.locale, Locale::En);
        assert_eq!(next.source, LocaleSource::Session);
    }

    #[tokio::test]
    async fn test_stored_preference_applies_to_a_new_session() {
        let f = fixture().await;
        let mut context = LocaleContext::default();
        f.resolver
            .change_locale("ar", Some(&f.subject), None, &mut context)
            .await
            .unwrap();

        // The old session slot was never written
        let next = f.next_request().await;
        assert_eq!(next, LocaleContext::new(Locale::Ar, LocaleSource::Subject));
    }

    #[tokio::test]
    async fn test_last_change_wins() {
        let f = fixture().await;
        let mut context = LocaleContext::default();

        for code in ["ar", "en", "ar"] {
            f.resolver
                .change_locale(code, Some(&f.subject), Some(&f.session_id), &mut context)
                .await
                .unwrap();
        }

        assert_eq!(f.next_request().await.locale, Locale::Ar);
    }
}
