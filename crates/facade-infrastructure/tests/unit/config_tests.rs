//! Configuration Loader Tests

use facade_infrastructure::config::{ConfigBuilder, ConfigLoader, LoggingConfig};
use facade_infrastructure::constants::{DEFAULT_CONFIG_FILENAME, DEFAULT_LOG_LEVEL};
use figment::Jail;
use tempfile::TempDir;

#[test]
fn test_config_loader_default() {
    Jail::expect_with(|_jail| {
        let config = ConfigLoader::new().load().map_err(|e| e.to_string())?;

        assert_eq!(config.logging.level, DEFAULT_LOG_LEVEL);
        assert!(config.facades.discover_packages);
        assert!(config.facades.aliases.is_empty());
        Ok(())
    });
}

#[test]
fn test_config_builder() {
    let config = ConfigBuilder::new()
        .with_alias("Cache", "app::Cache")
        .with_package_discovery(false)
        .without_package("vendor")
        .build();

    assert_eq!(config.facades.aliases["Cache"], "app::Cache");
    assert!(!config.facades.discover_packages);
    assert_eq!(config.facades.dont_discover, vec!["vendor".to_string()]);
}

#[test]
fn test_config_save_load() {
    Jail::expect_with(|_jail| {
        let temp_dir = TempDir::new().map_err(|e| e.to_string())?;
        let config_path = temp_dir.path().join("saved.toml");

        let original = ConfigBuilder::new()
            .with_alias("Clock", "app::Clock")
            .with_logging(LoggingConfig {
                level: "debug".to_string(),
                ..LoggingConfig::default()
            })
            .build();

        let loader = ConfigLoader::new().with_config_path(&config_path);
        loader
            .save_to_file(&original, &config_path)
            .map_err(|e| e.to_string())?;
        let loaded = loader.load().map_err(|e| e.to_string())?;

        assert_eq!(loaded.logging.level, "debug");
        assert_eq!(loaded.facades.aliases["Clock"], "app::Clock");
        assert_eq!(loader.config_path(), Some(config_path.as_path()));
        Ok(())
    });
}

#[test]
fn test_missing_config_file_falls_back_to_defaults() {
    Jail::expect_with(|jail| {
        let config = ConfigLoader::new()
            .with_config_path(jail.directory().join("absent.toml"))
            .load()
            .map_err(|e| e.to_string())?;

        assert_eq!(config.logging.level, DEFAULT_LOG_LEVEL);
        Ok(())
    });
}

#[test]
fn test_default_config_file_discovered_in_working_directory() {
    Jail::expect_with(|jail| {
        jail.create_file(
            DEFAULT_CONFIG_FILENAME,
            r#"
                [facades]
                dont_discover = ["vendor"]

                [facades.aliases]
                Mail = "app::Mail"
            "#,
        )?;

        let config = ConfigLoader::new().load().map_err(|e| e.to_string())?;

        assert_eq!(config.facades.aliases["Mail"], "app::Mail");
        assert_eq!(config.facades.dont_discover, vec!["vendor".to_string()]);
        Ok(())
    });
}

#[test]
fn test_environment_overrides_file() {
    Jail::expect_with(|jail| {
        jail.create_file(DEFAULT_CONFIG_FILENAME, "[logging]\nlevel = \"warn\"\n")?;
        jail.set_env("FACADE__LOGGING__LEVEL", "trace");
        jail.set_env("FACADE__FACADES__DISCOVER_PACKAGES", "false");

        let config = ConfigLoader::new().load().map_err(|e| e.to_string())?;

        assert_eq!(config.logging.level, "trace");
        assert!(!config.facades.discover_packages);
        Ok(())
    });
}

#[test]
fn test_invalid_log_level_rejected() {
    Jail::expect_with(|jail| {
        jail.set_env("FACADE__LOGGING__LEVEL", "loud");

        let err = ConfigLoader::new().load().unwrap_err();

        assert!(err.is_configuration());
        Ok(())
    });
}

#[test]
fn test_empty_alias_target_rejected() {
    Jail::expect_with(|jail| {
        jail.create_file(DEFAULT_CONFIG_FILENAME, "[facades.aliases]\nCache = \"\"\n")?;

        let err = ConfigLoader::new().load().unwrap_err();

        assert!(err.to_string().contains("empty target"));
        Ok(())
    });
}
