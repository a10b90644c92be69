//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for safe, sandboxed env var manipulation.

use cardia_config::CardiaConfig;
use figment::{
    providers::{Format, Serialized, Toml},
    Figment, Jail,
};

#[test]
fn loads_api_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "cardia.toml",
            r#"
[api]
base_url = "http://predictor.internal:8080"
timeout_secs = 30
"#,
        )?;

        let config: CardiaConfig = Figment::from(Serialized::defaults(CardiaConfig::default()))
            .merge(Toml::file("cardia.toml"))
            .extract()?;

        assert_eq!(config.api.base_url, "http://predictor.internal:8080");
        assert_eq!(config.api.timeout_secs, 30);
        Ok(())
    });
}

#[test]
fn loads_ui_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "cardia.toml",
            r#"
[ui]
tick_ms = 100
"#,
        )?;

        let config: CardiaConfig = Figment::from(Serialized::defaults(CardiaConfig::default()))
            .merge(Toml::file("cardia.toml"))
            .extract()?;

        assert_eq!(config.ui.tick_ms, 100);
        Ok(())
    });
}

#[test]
fn loads_full_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "cardia.toml",
            r#"
[api]
base_url = "https://cardia.example.com"
timeout_secs = 5

[ui]
tick_ms = 50
"#,
        )?;

        let config: CardiaConfig = Figment::from(Serialized::defaults(CardiaConfig::default()))
            .merge(Toml::file("cardia.toml"))
            .extract()?;

        assert_eq!(config.api.base_url, "https://cardia.example.com");
        assert_eq!(config.api.timeout_secs, 5);
        assert_eq!(config.ui.tick_ms, 50);
        Ok(())
    });
}

#[test]
fn partial_toml_keeps_remaining_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "cardia.toml",
            r#"
[api]
base_url = "http://10.0.0.7:5001"
"#,
        )?;

        let config: CardiaConfig = Figment::from(Serialized::defaults(CardiaConfig::default()))
            .merge(Toml::file("cardia.toml"))
            .extract()?;

        assert_eq!(config.api.base_url, "http://10.0.0.7:5001");
        // Untouched fields keep their defaults.
        assert_eq!(config.api.timeout_secs, 10);
        assert_eq!(config.ui.tick_ms, 200);
        Ok(())
    });
}
