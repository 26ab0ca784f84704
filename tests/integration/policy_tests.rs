//! Authorization policy over stored roles and grants

#[cfg(test)]
mod tests {
    use crate::common::{TestDatabase, UserFactory};
    use polyglot_admin::auth::rbac::RbacSystem;
    use polyglot_admin::auth::{Subject, UserAction, UserPolicy};
    use polyglot_admin::config::RbacConfig;
    use polyglot_admin::core::models::User;

    async fn subject_for(rbac: &RbacSystem, user: User) -> Subject {
        let roles = rbac.user_roles(user.id()).await.unwrap();
        let permissions = rbac.effective_permissions(user.id()).await.unwrap();
        Subject::new(user, roles, permissions)
    }

    async fn seeded_rbac(db: &TestDatabase) -> RbacSystem {
        let rbac = RbacSystem::new(&RbacConfig::default(), db.storage());
        rbac.seed_defaults().await.unwrap();
        rbac
    }

    #[tokio::test]
    async fn test_admin_role_allows_everything() {
        let db = TestDatabase::new().await;
        let rbac = seeded_rbac(&db).await;
        let user = UserFactory::insert(db.storage(), "Admin").await;
        rbac.assign_role(user.id(), "admin").await.unwrap();

        let subject = subject_for(&rbac, user).await;

        for action in UserAction::ALL {
            assert!(UserPolicy::allows(Some(&subject), action), "{}", action);
        }
    }

    #[tokio::test]
    async fn test_zero_permission_subject_is_denied_everything() {
        let db = TestDatabase::new().await;
        let rbac = seeded_rbac(&db).await;
        let user = UserFactory::insert(db.storage(), "Guest").await;
        let target = UserFactory::build("Target");

        let subject = subject_for(&rbac, user).await;

        for action in UserAction::ALL {
            assert!(!UserPolicy::allows(Some(&subject), action));
        }
        let class = UserPolicy::class_abilities(Some(&subject));
        assert!(!class.can_view_any && !class.can_create);
        let instance = UserPolicy::instance_abilities(Some(&subject), &target);
        assert!(!instance.can_update && !instance.can_delete);
    }

    #[tokio::test]
    async fn test_permission_through_role_only() {
        let db = TestDatabase::new().await;
        let rbac = seeded_rbac(&db).await;
        rbac.create_role("viewer", &["access_user"]).await.unwrap();
        let user = UserFactory::insert(db.storage(), "Viewer").await;
        rbac.assign_role(user.id(), "viewer").await.unwrap();

        let subject = subject_for(&rbac, user).await;

        assert_eq!(subject.roles, vec!["viewer".to_string()]);
        assert!(UserPolicy::allows(Some(&subject), UserAction::ViewAny));
        assert!(UserPolicy::allows(Some(&subject), UserAction::View));
        assert!(!UserPolicy::allows(Some(&subject), UserAction::Create));
        assert!(!UserPolicy::allows(Some(&subject), UserAction::Update));
        assert!(!UserPolicy::allows(Some(&subject), UserAction::Delete));
    }

    #[tokio::test]
    async fn test_direct_grant_joins_role_grants() {
        let db = TestDatabase::new().await;
        let rbac = seeded_rbac(&db).await;
        rbac.create_role("viewer", &["access_user"]).await.unwrap();
        let user = UserFactory::insert(db.storage(), "Editor").await;
        rbac.assign_role(user.id(), "viewer").await.unwrap();
        rbac.give_permission_to(user.id(), "update_user").await.unwrap();

        let subject = subject_for(&rbac, user).await;

        assert_eq!(
            subject.permissions.sorted(),
            vec!["access_user", "update_user"]
        );
        assert!(UserPolicy::allows(Some(&subject), UserAction::Update));
        assert!(!UserPolicy::allows(Some(&subject), UserAction::Delete));
    }

    #[tokio::test]
    async fn test_update_requires_permission_even_for_self() {
        let db = TestDatabase::new().await;
        let rbac = seeded_rbac(&db).await;
        let user = UserFactory::insert(db.storage(), "Self").await;
        let subject = subject_for(&rbac, user.clone()).await;

        assert!(!UserPolicy::update(&subject, &user));
        assert!(!UserPolicy::delete(&subject, &user));
    }

    #[tokio::test]
    async fn test_unknown_action_and_missing_subject_fail_closed() {
        let db = TestDatabase::new().await;
        let rbac = seeded_rbac(&db).await;
        let user = UserFactory::insert(db.storage(), "Admin").await;
        rbac.assign_role(user.id(), "admin").await.unwrap();
        let subject = subject_for(&rbac, user).await;

        assert!(!UserPolicy::allows_named(Some(&subject), "restore"));
        assert!(!UserPolicy::allows_named(Some(&subject), "forceDelete"));
        assert!(UserPolicy::allows_named(Some(&subject), "viewAny"));
        assert!(!UserPolicy::allows(None, UserAction::ViewAny));
    }

    #[tokio::test]
    async fn test_seeding_twice_is_idempotent() {
        let db = TestDatabase::new().await;
        let rbac = seeded_rbac(&db).await;
        rbac.seed_defaults().await.unwrap();

        let user = UserFactory::insert(db.storage(), "Admin").await;
        rbac.assign_role(user.id(), "admin").await.unwrap();
        rbac.assign_role(user.id(), "admin").await.unwrap();

        let subject = subject_for(&rbac, user).await;
        assert_eq!(subject.roles.len(), 1);
        assert_eq!(subject.permissions.len(), 4);
    }
}
