//! Configuration loading tests

#[cfg(test)]
mod tests {
    use polyglot_admin::config::Config;
    use polyglot_admin::server::builder::load_config;
    use std::io::Write;

    #[tokio::test]
    async fn test_load_yaml_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
server:
  host: 127.0.0.1
  port: 9090
storage:
  database:
    url: "sqlite::memory:"
    max_connections: 1
auth:
  session_cookie: admin_session
  session_ttl: 600
  rbac:
    admin_role: superuser
    seed_admin:
      name: Root
      email: root@example.com
      password: change-me-please
"#
        )
        .unwrap();

        let config = load_config(file.path()).await.unwrap();

        assert_eq!(config.server().address(), "127.0.0.1:9090");
        assert_eq!(config.auth().session_cookie, "admin_session");
        assert_eq!(config.auth().rbac.admin_role, "superuser");
        assert_eq!(
            config.auth().rbac.seed_admin.as_ref().map(|s| s.email.as_str()),
            Some("root@example.com")
        );
    }

    #[tokio::test]
    async fn test_missing_file_falls_back_to_environment() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config(&dir.path().join("absent.yaml")).await;

        assert!(config.is_ok());
    }

    #[tokio::test]
    async fn test_invalid_file_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "auth:\n  session_ttl: 5").unwrap();

        assert!(load_config(file.path()).await.is_err());
    }

    #[test]
    fn test_yaml_round_trip_keeps_overrides() {
        let config = Config::from_lookup(|key| match key {
            "ADMIN_PORT" => Some("8181".to_string()),
            _ => None,
        })
        .unwrap();

        let yaml = config.to_yaml().unwrap();
        let reparsed = Config::from_yaml_str(&yaml).unwrap();

        assert_eq!(reparsed.server().port, 8181);
        assert_eq!(reparsed.storage().database.url, config.storage().database.url);
    }
}
