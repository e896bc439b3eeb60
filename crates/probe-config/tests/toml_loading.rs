//! Integration tests for layered configuration loading.
//!
//! Uses figment::Jail for sandboxed cwd and env var manipulation.

use figment::{
    Figment, Jail,
    providers::{Env, Format, Serialized, Toml},
};
use probe_config::{ConfigError, ProbeConfig};
use std::path::PathBuf;

#[test]
fn loads_firestore_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
env_file = "secrets/.env.production"
credential_key = "GCP_SA_JSON"

[firestore]
project_id = "staging-project"
database = "reports"
base_url = "http://localhost:8080/v1"
page_size = 25
"#,
        )?;

        let figment = Figment::from(Serialized::defaults(ProbeConfig::default()))
            .merge(Toml::file("config.toml"));
        let config = ProbeConfig::from_figment(&figment).expect("config loads");

        assert_eq!(config.env_file, PathBuf::from("secrets/.env.production"));
        assert_eq!(config.credential_key, "GCP_SA_JSON");
        assert_eq!(config.firestore.project_id, "staging-project");
        assert_eq!(config.firestore.database, "reports");
        assert_eq!(config.firestore.base_url, "http://localhost:8080/v1");
        assert_eq!(config.firestore.page_size, 25);
        Ok(())
    });
}

#[test]
fn project_local_file_is_picked_up() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "docprobe.toml",
            r#"
[firestore]
project_id = "from-local-file"
"#,
        )?;

        let config = ProbeConfig::load().expect("config loads");
        assert_eq!(config.firestore.project_id, "from-local-file");
        assert_eq!(config.firestore.page_size, 100);
        Ok(())
    });
}

#[test]
fn env_beats_project_file() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "docprobe.toml",
            r#"
[firestore]
project_id = "from-local-file"
"#,
        )?;
        jail.set_env("DOCPROBE_FIRESTORE__PROJECT_ID", "from-env");
        jail.set_env("DOCPROBE_ENV_FILE", "/run/secrets/probe.env");

        let config = ProbeConfig::load().expect("config loads");
        assert_eq!(config.firestore.project_id, "from-env");
        assert_eq!(config.env_file, PathBuf::from("/run/secrets/probe.env"));
        Ok(())
    });
}

#[test]
fn out_of_range_page_size_is_rejected() {
    Jail::expect_with(|jail| {
        jail.set_env("DOCPROBE_FIRESTORE__PAGE_SIZE", "0");

        let err = ProbeConfig::load().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "firestore.page_size"));
        Ok(())
    });
}

#[test]
fn mistyped_value_is_a_figment_error() {
    Jail::expect_with(|_jail| {
        let figment = Figment::from(Serialized::defaults(ProbeConfig::default()))
            .merge(Env::prefixed("DOCPROBE_").split("__"))
            .merge(("firestore.page_size", "lots"));

        let err = ProbeConfig::from_figment(&figment).unwrap_err();
        assert!(matches!(err, ConfigError::Figment(_)));
        Ok(())
    });
}
