//! Configuration management for Elidune Shelf

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct StorageConfig {
    /// JSON file holding the catalog
    pub path: PathBuf,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CatalogConfig {
    /// Id the numbering continues from when the catalog is empty
    pub default_id: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
    /// Log file; logs go to stderr when unset
    #[serde(default)]
    pub file: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(Path::new("config"))
    }

    /// Same as [`AppConfig::load`] with the settings files read from `dir`
    pub fn load_from(dir: &Path) -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());
        let default_file = dir.join("default");
        let mode_file = dir.join(&run_mode);

        let config = Config::builder()
            .set_default("storage.path", "database.json")?
            .set_default("catalog.default_id", 12)?
            .set_default("logging.level", "info")?
            .set_default("logging.format", "pretty")?
            .add_source(File::with_name(&default_file.to_string_lossy()).required(false))
            .add_source(File::with_name(&mode_file.to_string_lossy()).required(false))
            // Environment variables, e.g. SHELF__STORAGE__PATH
            .add_source(
                Environment::with_prefix("SHELF")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

impl LoggingConfig {
    pub fn is_json(&self) -> bool {
        self.format.eq_ignore_ascii_case("json")
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("database.json"),
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self { default_id: 12 }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
            file: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.storage.path, PathBuf::from("database.json"));
        assert_eq!(config.catalog.default_id, 12);
        assert_eq!(config.logging.level, "info");
        assert!(!config.logging.is_json());
        assert!(config.logging.file.is_none());
    }

    #[test]
    fn test_load_layers_file_then_environment() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("default.toml"),
            "[storage]\npath = \"shelf.json\"\n\n[catalog]\ndefault_id = 100\n\n[logging]\nlevel = \"debug\"\n",
        )
        .unwrap();

        let config = AppConfig::load_from(dir.path()).unwrap();
        assert_eq!(config.storage.path, PathBuf::from("shelf.json"));
        assert_eq!(config.catalog.default_id, 100);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, "pretty");

        env::set_var("SHELF__STORAGE__PATH", "/tmp/elidune-shelf.json");
        env::set_var("SHELF__CATALOG__DEFAULT_ID", "40");
        let config = AppConfig::load_from(dir.path());
        env::remove_var("SHELF__STORAGE__PATH");
        env::remove_var("SHELF__CATALOG__DEFAULT_ID");

        let config = config.unwrap();
        assert_eq!(config.storage.path, PathBuf::from("/tmp/elidune-shelf.json"));
        assert_eq!(config.catalog.default_id, 40);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_load_without_files_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load_from(dir.path()).unwrap();
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_json_format_is_case_insensitive() {
        let logging = LoggingConfig {
            format: "JSON".to_string(),
            ..LoggingConfig::default()
        };
        assert!(logging.is_json());
    }
}
