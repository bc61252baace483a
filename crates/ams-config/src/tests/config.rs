use crate::Config;

#[test]
fn test_default_config_validates() {
    let config = Config::default();

    assert!(config.validate().is_ok());
}

#[test]
fn test_parse_full_toml() {
    let toml = r#"
        [server]
        host = "0.0.0.0"
        port = 8080

        [database]
        path = "ams.db"

        [identity_api]
        base_url = "https://restapi.example.ac.th"
        timeout_secs = 5
        cache_ttl_secs = 600

        [session]
        ttl_secs = 7200

        [logging]
        level = "debug"
    "#;

    let config: Config = toml::from_str(toml).unwrap();

    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.server.port, 8080);
    assert_eq!(config.identity_api.base_url, "https://restapi.example.ac.th");
    assert_eq!(config.identity_api.timeout_secs, 5);
    assert_eq!(config.identity_api.cache_ttl_secs, 600);
    assert_eq!(config.session.ttl_secs, 7200);
    assert_eq!(config.logging.level.filter(), log::LevelFilter::Debug);
}

#[test]
fn test_partial_toml_uses_defaults() {
    let config: Config = toml::from_str("[server]\nport = 9000\n").unwrap();

    assert_eq!(config.server.port, 9000);
    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.identity_api.timeout_secs, 10);
    assert_eq!(config.identity_api.cache_ttl_secs, 3600);
}

#[test]
fn test_absolute_database_path_rejected() {
    let mut config = Config::default();
    config.database.path = "/etc/ams.db".to_string();

    assert!(config.validate().is_err());
}

#[test]
fn test_database_path_traversal_rejected() {
    let mut config = Config::default();
    config.database.path = "../ams.db".to_string();

    assert!(config.validate().is_err());
}

#[test]
fn test_low_port_rejected() {
    let mut config = Config::default();
    config.server.port = 80;

    assert!(config.validate().is_err());
}

#[test]
fn test_unknown_log_level_falls_back_to_info() {
    let config: Config = toml::from_str("[logging]\nlevel = \"verbose\"\n").unwrap();

    assert_eq!(config.logging.level.filter(), log::LevelFilter::Info);
}

#[test]
fn test_log_level_parsing_is_case_insensitive() {
    let config: Config = toml::from_str("[logging]\nlevel = \"TRACE\"\n").unwrap();

    assert_eq!(config.logging.level.filter(), log::LevelFilter::Trace);
}

#[test]
fn test_database_defaults() {
    let config = Config::default();

    assert_eq!(config.database.path, "ams.db");
    assert_eq!(config.database.max_connections, 10);
    assert_eq!(config.database.busy_timeout_secs, 5);
}

#[test]
fn test_zero_database_connections_rejected() {
    let mut config = Config::default();
    config.database.max_connections = 0;

    assert!(config.validate().is_err());
}
