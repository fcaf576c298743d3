//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for safe, sandboxed env var manipulation.

use evl_config::EvlConfig;
use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};
use pretty_assertions::assert_eq;

#[test]
fn loads_all_sections_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[database]
path = "/var/lib/eventline/audit.db"

[audit]
default_limit = 20
max_limit = 200

[auth]
user_id = "user-42"
"#,
        )?;

        let config = EvlConfig::from_figment(
            Figment::from(Serialized::defaults(EvlConfig::default()))
                .merge(Toml::file("config.toml")),
        )
        .expect("config should load");

        assert_eq!(config.database.path, "/var/lib/eventline/audit.db");
        assert!(!config.database.is_ephemeral());
        assert_eq!(config.audit.default_limit, 20);
        assert_eq!(config.audit.max_limit, 200);
        assert_eq!(config.auth.user_id(), Some("user-42"));
        Ok(())
    });
}

#[test]
fn partial_toml_keeps_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[audit]
max_limit = 1000
"#,
        )?;

        let config = EvlConfig::from_figment(
            Figment::from(Serialized::defaults(EvlConfig::default()))
                .merge(Toml::file("config.toml")),
        )
        .expect("config should load");

        assert_eq!(config.database.path, ".eventline/eventline.db");
        assert_eq!(config.audit.default_limit, 50);
        assert_eq!(config.audit.max_limit, 1000);
        assert!(!config.auth.is_configured());
        Ok(())
    });
}

#[test]
fn missing_file_falls_back_to_defaults() {
    Jail::expect_with(|_jail| {
        let config = EvlConfig::from_figment(
            Figment::from(Serialized::defaults(EvlConfig::default()))
                .merge(Toml::file("does-not-exist.toml")),
        )
        .expect("config should load");

        assert_eq!(config.audit.default_limit, 50);
        assert_eq!(config.audit.max_limit, 500);
        Ok(())
    });
}

#[test]
fn blank_user_id_is_not_configured() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[auth]
user_id = "   "
"#,
        )?;

        let config = EvlConfig::from_figment(
            Figment::from(Serialized::defaults(EvlConfig::default()))
                .merge(Toml::file("config.toml")),
        )
        .expect("config should load");

        assert!(!config.auth.is_configured());
        assert_eq!(config.auth.user_id(), None);
        Ok(())
    });
}

#[test]
fn default_limit_above_max_is_rejected() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[audit]
default_limit = 100
max_limit = 10
"#,
        )?;

        let err = EvlConfig::from_figment(
            Figment::from(Serialized::defaults(EvlConfig::default()))
                .merge(Toml::file("config.toml")),
        )
        .expect_err("default above max must fail");
        assert!(err.to_string().contains("audit.default_limit"));
        Ok(())
    });
}

#[test]
fn wrong_type_is_a_figment_error() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[audit]
default_limit = "lots"
"#,
        )?;

        let err = EvlConfig::from_figment(
            Figment::from(Serialized::defaults(EvlConfig::default()))
                .merge(Toml::file("config.toml")),
        )
        .expect_err("string limit must fail");
        assert!(matches!(err, evl_config::ConfigError::Figment(_)));
        Ok(())
    });
}
