//! Unit tests for `GlobalConfig` parsing, defaults, and validation.

use std::path::PathBuf;

use todo_keeper::{config::GlobalConfig, AppError};

fn sample_toml() -> &'static str {
    r#"
http_host = "0.0.0.0"
http_port = 8080
db_path = "data/todos.db"
storage_path = "data/local.json"
storage_key = "my-todos"
"#
}

#[test]
fn parses_full_config() {
    let config = GlobalConfig::from_toml_str(sample_toml()).expect("valid config");

    assert_eq!(config.http_host, "0.0.0.0");
    assert_eq!(config.http_port, 8080);
    assert_eq!(config.db_path, "data/todos.db");
    assert_eq!(config.storage_path, PathBuf::from("data/local.json"));
    assert_eq!(config.storage_key, "my-todos");
    assert_eq!(config.bind_addr().expect("addr").port(), 8080);
}

#[test]
fn empty_config_uses_defaults() {
    let config = GlobalConfig::from_toml_str("").expect("valid config");

    assert_eq!(config, GlobalConfig::default());
    assert_eq!(config.http_host, "127.0.0.1");
    assert_eq!(config.http_port, 3000);
    assert_eq!(config.db_path, "todo-keeper.db");
    assert_eq!(config.storage_key, "todos");
    assert!(!config.uses_memory_db());
}

#[test]
fn memory_db_path_is_recognised() {
    let config = GlobalConfig::from_toml_str(r#"db_path = ":memory:""#).expect("valid config");
    assert!(config.uses_memory_db());
}

#[test]
fn invalid_host_is_rejected() {
    let result = GlobalConfig::from_toml_str(r#"http_host = "not an ip""#);
    assert!(matches!(result, Err(AppError::Config(_))));
}

#[test]
fn blank_storage_key_is_rejected() {
    let result = GlobalConfig::from_toml_str(r#"storage_key = "  ""#);
    assert!(matches!(result, Err(AppError::Config(_))));
}

#[test]
fn unknown_field_is_rejected() {
    let result = GlobalConfig::from_toml_str("retention_days = 3");
    assert!(matches!(result, Err(AppError::Config(_))));
}

#[test]
fn load_from_path_reads_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    std::fs::write(&path, sample_toml()).expect("write");

    let config = GlobalConfig::load_from_path(&path).expect("load");
    assert_eq!(config.http_port, 8080);
}

#[test]
fn load_from_missing_path_is_config_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let result = GlobalConfig::load_from_path(dir.path().join("absent.toml"));
    assert!(matches!(result, Err(AppError::Config(_))));
}
