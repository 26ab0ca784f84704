//! HTTP tests against the real application factory

#[cfg(test)]
mod tests {
    use crate::common::{ADMIN_EMAIL, TEST_PASSWORD, UserFactory, login_token, test_state};
    use actix_web::cookie::Cookie;
    use actix_web::http::StatusCode;
    use actix_web::http::header::CONTENT_LANGUAGE;
    use actix_web::test::{self, TestRequest};
    use actix_web::web;
    use polyglot_admin::server::HttpServer;
    use serde_json::{Value, json};
    use uuid::Uuid;

    macro_rules! init_app {
        ($state:expr) => {
            test::init_service(HttpServer::create_app(web::Data::new($state.clone()))).await
        };
    }

    fn with_session(req: TestRequest, token: &str) -> TestRequest {
        req.insert_header(("x-session-token", token.to_string()))
    }

    #[actix_web::test]
    async fn test_login_sets_session_cookie() {
        let state = test_state().await;
        let app = init_app!(state);

        let req = TestRequest::post()
            .uri("/auth/login")
            .set_json(json!({ "email": ADMIN_EMAIL, "password": TEST_PASSWORD }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let cookie = resp
            .response()
            .cookies()
            .find(|c| c.name() == "session")
            .expect("session cookie")
            .into_owned();
        assert_eq!(cookie.http_only(), Some(true));

        let req = TestRequest::get()
            .uri("/dashboard")
            .cookie(Cookie::new("session", cookie.value().to_string()))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["component"], "Dashboard");
        assert_eq!(body["props"]["auth"]["user"]["email"], ADMIN_EMAIL);
        assert!(body["props"]["auth"]["user"].get("password_hash").is_none());
    }

    #[actix_web::test]
    async fn test_login_with_wrong_password() {
        let state = test_state().await;
        let app = init_app!(state);

        let req = TestRequest::post()
            .uri("/auth/login")
            .set_json(json!({ "email": ADMIN_EMAIL, "password": "nope" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "AUTH_ERROR");
        assert_eq!(
            body["error"]["message"],
            "These credentials do not match our records."
        );
    }

    #[actix_web::test]
    async fn test_logout_ends_session() {
        let state = test_state().await;
        let token = login_token(&state, ADMIN_EMAIL).await;
        let app = init_app!(state);

        let req = with_session(TestRequest::post().uri("/auth/logout"), &token).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let req = with_session(TestRequest::get().uri("/dashboard"), &token).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_change_language_switches_following_requests() {
        let state = test_state().await;
        let token = login_token(&state, ADMIN_EMAIL).await;
        let app = init_app!(state);

        let req = with_session(TestRequest::post().uri("/change-language"), &token)
            .set_json(json!({ "language": "ar" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.headers().get(CONTENT_LANGUAGE).unwrap(), "ar");
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "status": "ok" }));

        let req = with_session(TestRequest::get().uri("/settings"), &token).to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["component"], "Settings/General");
        assert_eq!(body["props"]["locale"], "ar");
        assert_eq!(body["props"]["dir"], "rtl");

        let admin = state
            .storage
            .db()
            .find_user_by_email(ADMIN_EMAIL)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(admin.locale.as_deref(), Some("ar"));
    }

    #[actix_web::test]
    async fn test_change_language_accepts_form_body() {
        let state = test_state().await;
        let token = login_token(&state, ADMIN_EMAIL).await;
        let app = init_app!(state);

        let req = with_session(TestRequest::post().uri("/change-language"), &token)
            .set_form([("language", "ar")])
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.headers().get(CONTENT_LANGUAGE).unwrap(), "ar");
    }

    #[actix_web::test]
    async fn test_change_language_ignores_unsupported_code() {
        let state = test_state().await;
        let token = login_token(&state, ADMIN_EMAIL).await;
        let app = init_app!(state);

        let req = with_session(TestRequest::post().uri("/change-language"), &token)
            .set_json(json!({ "language": "fr" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.headers().get(CONTENT_LANGUAGE).unwrap(), "en");
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "ok");

        let req = with_session(TestRequest::get().uri("/dashboard"), &token).to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["props"]["locale"], "en");
    }

    #[actix_web::test]
    async fn test_change_language_requires_authentication() {
        let state = test_state().await;
        let app = init_app!(state);

        let req = TestRequest::post()
            .uri("/change-language")
            .set_json(json!({ "language": "ar" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_user_listing_carries_ability_flags() {
        let state = test_state().await;
        UserFactory::insert(state.storage.clone(), "Nour").await;
        let token = login_token(&state, ADMIN_EMAIL).await;
        let app = init_app!(state);

        let req = with_session(TestRequest::get().uri("/users"), &token).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["component"], "User/Index");
        assert_eq!(body["props"]["can_viewAny"], true);
        assert_eq!(body["props"]["can_create"], true);

        let users = body["props"]["users"].as_array().unwrap();
        assert_eq!(users.len(), 2);
        for row in users {
            assert_eq!(row["can_update"], true);
            assert_eq!(row["can_delete"], true);
            assert!(row.get("password_hash").is_none());
        }
    }

    #[actix_web::test]
    async fn test_user_without_permissions_is_refused() {
        let state = test_state().await;
        let plain = UserFactory::insert(state.storage.clone(), "Plain").await;
        let token = login_token(&state, &plain.email).await;
        let app = init_app!(state);

        for (method, uri) in [
            ("GET", "/users".to_string()),
            ("GET", "/users/create".to_string()),
            ("GET", format!("/users/{}", plain.id())),
            ("GET", format!("/users/{}/edit", plain.id())),
            ("DELETE", format!("/users/{}", plain.id())),
        ] {
            let req = match method {
                "DELETE" => TestRequest::delete(),
                _ => TestRequest::get(),
            };
            let req = with_session(req.uri(&uri), &token).to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::FORBIDDEN, "{} {}", method, uri);

            let body: Value = test::read_body_json(resp).await;
            assert_eq!(body["error"]["code"], "AUTHORIZATION_ERROR");
        }

        // Refused before any change
        let req = with_session(
            TestRequest::patch().uri(&format!("/users/{}", plain.id())),
            &token,
        )
        .set_json(json!({ "name": "Renamed" }))
        .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);

        let stored = state.storage.db().find_user_by_id(plain.id()).await.unwrap().unwrap();
        assert_eq!(stored.name, "Plain");
    }

    #[actix_web::test]
    async fn test_refusal_message_follows_locale() {
        let state = test_state().await;
        let plain = UserFactory::insert(state.storage.clone(), "Plain").await;
        let token = login_token(&state, &plain.email).await;
        let app = init_app!(state);

        let req = with_session(TestRequest::post().uri("/change-language"), &token)
            .set_json(json!({ "language": "ar" }))
            .to_request();
        test::call_service(&app, req).await;

        let req = with_session(TestRequest::get().uri("/users"), &token).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["message"], "هذا الإجراء غير مصرح به.");
    }

    #[actix_web::test]
    async fn test_unknown_user_is_not_found_after_policy() {
        let state = test_state().await;
        let plain = UserFactory::insert(state.storage.clone(), "Plain").await;
        let admin_token = login_token(&state, ADMIN_EMAIL).await;
        let plain_token = login_token(&state, &plain.email).await;
        let app = init_app!(state);
        let uri = format!("/users/{}", Uuid::new_v4());

        let req = with_session(TestRequest::get().uri(&uri), &admin_token).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let req = with_session(TestRequest::get().uri("/users/not-a-uuid"), &admin_token)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let req = with_session(TestRequest::get().uri(&uri), &plain_token).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    }

    #[actix_web::test]
    async fn test_create_update_and_delete_user() {
        let state = test_state().await;
        let token = login_token(&state, ADMIN_EMAIL).await;
        let app = init_app!(state);

        let req = with_session(TestRequest::post().uri("/users"), &token)
            .set_json(json!({
                "name": "Sara",
                "email": "sara@example.com",
                "password": "another-secret"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "User Sara created.");
        let id = body["data"]["id"].as_str().unwrap().to_string();

        let req = with_session(TestRequest::patch().uri(&format!("/users/{}", id)), &token)
            .set_json(json!({ "name": "Sara K." }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["name"], "Sara K.");
        assert_eq!(body["data"]["email"], "sara@example.com");

        let req = with_session(TestRequest::get().uri(&format!("/users/{}/edit", id)), &token)
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["component"], "User/Edit");
        assert_eq!(body["props"]["user"]["name"], "Sara K.");

        let req = with_session(TestRequest::delete().uri(&format!("/users/{}", id)), &token)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let req = with_session(TestRequest::delete().uri(&format!("/users/{}", id)), &token)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_validation_errors_are_translated() {
        let state = test_state().await;
        let token = login_token(&state, ADMIN_EMAIL).await;
        let app = init_app!(state);

        let req = with_session(TestRequest::post().uri("/change-language"), &token)
            .set_json(json!({ "language": "ar" }))
            .to_request();
        test::call_service(&app, req).await;

        let req = with_session(TestRequest::post().uri("/users"), &token)
            .set_json(json!({ "name": "", "email": ADMIN_EMAIL, "password": "" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(body["errors"]["name"][0], "حقل الاسم مطلوب.");
        assert_eq!(body["errors"]["email"][0], "البريد الإلكتروني مستخدم من قبل.");
        assert_eq!(body["errors"]["password"][0], "حقل كلمة المرور مطلوب.");
    }

    #[actix_web::test]
    async fn test_profile_is_self_service() {
        let state = test_state().await;
        let plain = UserFactory::insert(state.storage.clone(), "Plain").await;
        let token = login_token(&state, &plain.email).await;
        let app = init_app!(state);

        let req = with_session(TestRequest::get().uri("/profile"), &token).to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["component"], "Profile/Edit");
        assert_eq!(body["props"]["user"]["email"], plain.email.as_str());

        let req = with_session(TestRequest::patch().uri("/profile"), &token)
            .set_json(json!({ "name": "Plain Too" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let stored = state.storage.db().find_user_by_id(plain.id()).await.unwrap().unwrap();
        assert_eq!(stored.name, "Plain Too");
    }

    #[actix_web::test]
    async fn test_deleting_own_account_needs_password() {
        let state = test_state().await;
        let plain = UserFactory::insert(state.storage.clone(), "Leaving").await;
        let token = login_token(&state, &plain.email).await;
        let app = init_app!(state);

        let req = with_session(TestRequest::delete().uri("/profile"), &token)
            .set_json(json!({ "password": "wrong" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let req = with_session(TestRequest::delete().uri("/profile"), &token)
            .set_json(json!({ "password": TEST_PASSWORD }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        assert!(state.storage.db().find_user_by_id(plain.id()).await.unwrap().is_none());

        let req = with_session(TestRequest::get().uri("/profile"), &token).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_session_lookup_failure_is_a_server_error() {
        use sea_orm::ConnectionTrait;

        let state = test_state().await;
        let token = login_token(&state, ADMIN_EMAIL).await;
        let app = init_app!(state);

        state
            .storage
            .db()
            .connection()
            .execute_unprepared("DROP TABLE user_has_roles")
            .await
            .unwrap();

        let req = with_session(TestRequest::get().uri("/users"), &token).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "DATABASE_ERROR");

        // Public pages still render without the session
        let req = with_session(TestRequest::get().uri("/"), &token).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }
}
