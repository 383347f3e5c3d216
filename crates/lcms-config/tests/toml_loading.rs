//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for sandboxed working directory and env vars.

use figment::Jail;
use pretty_assertions::assert_eq;
use lcms_config::{ConfigError, LcmsConfig};

#[test]
fn loads_project_local_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "lcms.toml",
            r#"
[database]
path = "/data/lcms/standards.db"

[curation]
null_value = "NONE"
vocabulary = ["M+H", "M+Na"]
"#,
        )?;

        let config = LcmsConfig::load().expect("config loads");
        assert_eq!(config.database.path, "/data/lcms/standards.db");
        assert_eq!(config.curation.null_value, "NONE");
        assert_eq!(config.curation.vocabulary, vec!["M+H", "M+Na"]);
        assert!(!config.database.is_remote());
        Ok(())
    });
}

#[test]
fn partial_toml_keeps_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "lcms.toml",
            r#"
[database]
url = "libsql://lcms-lab.turso.io"
auth_token = "tok"
"#,
        )?;

        let config = LcmsConfig::load().expect("config loads");
        assert_eq!(config.database.path, "lcms.db");
        assert!(config.database.is_remote());
        assert_eq!(config.curation.null_value, "NULL");
        Ok(())
    });
}

#[test]
fn blank_null_value_is_rejected() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "lcms.toml",
            r#"
[curation]
null_value = ""
"#,
        )?;

        let result = LcmsConfig::load();
        assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
        Ok(())
    });
}

#[test]
fn malformed_toml_is_a_figment_error() {
    Jail::expect_with(|jail| {
        jail.create_file("lcms.toml", "[database\npath = 1")?;

        let result = LcmsConfig::load();
        assert!(matches!(result, Err(ConfigError::Figment(_))));
        Ok(())
    });
}
