use std::fs;

use ecomm_core::config::{ConfigError, ConfigProperties, ConfigValue, EcommConfig};
use serial_test::serial;

#[test]
fn test_empty_config() {
    let config = EcommConfig::empty();
    assert!(matches!(
        config.get::<String>("nonexistent"),
        Err(ConfigError::NotFound(_))
    ));
}

#[test]
fn test_set_and_get() {
    let mut config = EcommConfig::empty();
    config.set("database.url", "sqlite::memory:");
    config.set("server.port", 9000i64);
    assert_eq!(config.get::<String>("database.url").unwrap(), "sqlite::memory:");
    assert_eq!(config.get::<u16>("server.port").unwrap(), 9000);
}

#[test]
fn test_get_or_only_defaults_missing_keys() {
    let mut config = EcommConfig::empty();
    assert_eq!(config.get_or("server.port", 8080u16).unwrap(), 8080);

    config.set("server.port", "not-a-port");
    let err = config.get_or("server.port", 8080u16).unwrap_err();
    assert!(matches!(err, ConfigError::TypeMismatch { expected: "i64", .. }));
}

#[test]
fn test_type_conversions() {
    let mut config = EcommConfig::empty();
    config.set("int_val", ConfigValue::Integer(42));
    config.set("bool_str", "yes");
    config.set("null_val", ConfigValue::Null);
    config.set("negative", -1i64);

    assert_eq!(config.get::<i64>("int_val").unwrap(), 42);
    assert_eq!(config.get::<String>("int_val").unwrap(), "42");
    assert!(config.get::<bool>("bool_str").unwrap());
    assert!(config.get::<Option<String>>("null_val").unwrap().is_none());
    assert!(config.get::<u32>("negative").is_err());
}

#[test]
fn test_flatten_yaml() {
    let yaml = r#"
server:
  host: "0.0.0.0"
  port: 8081
  request-timeout-ms: 2500
database:
  url: "sqlite::memory:"
  init-schema: true
"#;
    let config = EcommConfig::from_yaml_str(yaml, "test").unwrap();

    assert_eq!(config.get::<String>("server.host").unwrap(), "0.0.0.0");
    assert_eq!(config.get::<u16>("server.port").unwrap(), 8081);
    assert_eq!(config.get::<u64>("server.request-timeout-ms").unwrap(), 2500);
    assert!(config.get::<bool>("database.init-schema").unwrap());
}

#[test]
fn test_invalid_yaml_is_a_load_error() {
    let err = EcommConfig::from_yaml_str("server: [unclosed", "test").unwrap_err();
    assert!(matches!(err, ConfigError::Load(_)));
}

// ── Typed sections ──────────────────────────────────────────────────────

struct PoolSection {
    url: String,
    max_connections: u32,
}

impl ConfigProperties for PoolSection {
    fn prefix() -> &'static str {
        "database"
    }

    fn from_config(config: &EcommConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            url: config.get(&Self::key("url"))?,
            max_connections: config.get_or(&Self::key("max-connections"), 5)?,
        })
    }
}

#[test]
fn test_typed_section() {
    let config = EcommConfig::from_yaml_str("database:\n  url: mysql://db/shop\n", "test").unwrap();
    let section: PoolSection = config.section().unwrap();
    assert_eq!(section.url, "mysql://db/shop");
    assert_eq!(section.max_connections, 5);

    let missing = EcommConfig::empty().section::<PoolSection>();
    assert!(matches!(missing, Err(ConfigError::NotFound(key)) if key == "database.url"));
}

// ── Files, profiles and environment ─────────────────────────────────────

#[test]
#[serial]
fn test_profile_file_overrides_base() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("application.yaml"),
        "server:\n  port: 8080\n  host: 127.0.0.1\n",
    )
    .unwrap();
    fs::write(dir.path().join("application-prod.yaml"), "server:\n  port: 80\n").unwrap();

    std::env::remove_var("ECOMM_PROFILE");
    let config = EcommConfig::load_from(dir.path(), "prod").unwrap();
    assert_eq!(config.profile(), "prod");
    assert_eq!(config.get::<u16>("server.port").unwrap(), 80);
    assert_eq!(config.get::<String>("server.host").unwrap(), "127.0.0.1");
}

#[test]
#[serial]
fn test_profile_env_var_wins_over_argument() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("application-staging.yaml"), "server:\n  port: 81\n").unwrap();

    std::env::set_var("ECOMM_PROFILE", "staging");
    let config = EcommConfig::load_from(dir.path(), "dev");
    std::env::remove_var("ECOMM_PROFILE");

    let config = config.unwrap();
    assert_eq!(config.profile(), "staging");
    assert_eq!(config.get::<u16>("server.port").unwrap(), 81);
}

#[test]
#[serial]
fn test_env_var_overrides_hyphenated_key() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("application.yaml"),
        "server:\n  request-timeout-ms: 5000\n",
    )
    .unwrap();

    std::env::set_var("SERVER_REQUEST_TIMEOUT_MS", "750");
    let config = EcommConfig::load_from(dir.path(), "dev");
    std::env::remove_var("SERVER_REQUEST_TIMEOUT_MS");

    assert_eq!(
        config.unwrap().get::<u64>("server.request-timeout-ms").unwrap(),
        750
    );
}

#[test]
#[serial]
fn test_dotenv_file_does_not_override_process_env() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join(".env"),
        "ECOMM_TEST_DOTENV_A=from-file\nECOMM_TEST_DOTENV_B=from-file\n",
    )
    .unwrap();

    std::env::set_var("ECOMM_TEST_DOTENV_A", "from-env");
    let config = EcommConfig::load_from(dir.path(), "dev").unwrap();
    std::env::remove_var("ECOMM_TEST_DOTENV_A");
    std::env::remove_var("ECOMM_TEST_DOTENV_B");

    assert_eq!(config.get::<String>("ecomm.test.dotenv.a").unwrap(), "from-env");
    assert_eq!(config.get::<String>("ecomm.test.dotenv.b").unwrap(), "from-file");
}
