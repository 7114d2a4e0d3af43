//! Configuration management for rentreport
//!
//! This module handles loading, validation, and management of
//! rentreport configuration from YAML files.

pub mod error;

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub use error::ConfigError;

// ==================== Configuration Types ====================

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,
    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8081
}

/// Document store configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Root directory of the product documents
    #[serde(default = "default_store_path")]
    pub path: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: default_store_path(),
        }
    }
}

fn default_store_path() -> PathBuf {
    PathBuf::from("./data")
}

/// Session the report is rendered for
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SessionConfig {
    /// Branch code of the signed-in user; nothing is loaded without one
    #[serde(default)]
    pub branch_code: Option<String>,
}

/// Pagination settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginationConfig {
    /// Sales rows per page
    #[serde(default = "default_entries_per_page")]
    pub entries_per_page: usize,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            entries_per_page: default_entries_per_page(),
        }
    }
}

fn default_entries_per_page() -> usize {
    50
}

/// CSV export settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Download file name
    #[serde(default = "default_export_file_name")]
    pub file_name: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            file_name: default_export_file_name(),
        }
    }
}

fn default_export_file_name() -> String {
    "sales_report.csv".to_string()
}

/// Navigation targets outside the report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavigationConfig {
    /// Route of the "Back to Dashboard" link
    #[serde(default = "default_back_route")]
    pub back_route: String,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            back_route: default_back_route(),
        }
    }
}

fn default_back_route() -> String {
    "/welcome".to_string()
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Server settings
    #[serde(default)]
    pub server: ServerConfig,
    /// Document store settings
    #[serde(default)]
    pub store: StoreConfig,
    /// Session settings
    #[serde(default)]
    pub session: SessionConfig,
    /// Pagination settings
    #[serde(default)]
    pub pagination: PaginationConfig,
    /// Export settings
    #[serde(default)]
    pub export: ExportConfig,
    /// Navigation settings
    #[serde(default)]
    pub navigation: NavigationConfig,
    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a YAML file
    pub fn load(path: PathBuf) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(&path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => ConfigError::FileNotFound {
                path: path.to_string_lossy().to_string(),
            },
            _ => ConfigError::IoError,
        })?;

        Self::from_yaml(&content)
    }

    /// Parse and validate configuration from YAML text
    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_yaml::from_str(content)
            .map_err(|e| ConfigError::InvalidYaml { message: e.to_string() })?;

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::InvalidValue {
                field: "server.port".to_string(),
                reason: "Port must be greater than 0".to_string(),
            });
        }

        if self.pagination.entries_per_page == 0 {
            return Err(ConfigError::InvalidValue {
                field: "pagination.entries_per_page".to_string(),
                reason: "Entries per page must be greater than 0".to_string(),
            });
        }

        if !self.export.file_name.ends_with(".csv") {
            return Err(ConfigError::InvalidValue {
                field: "export.file_name".to_string(),
                reason: "Export file name must end with .csv".to_string(),
            });
        }

        if !self.navigation.back_route.starts_with('/') {
            return Err(ConfigError::InvalidValue {
                field: "navigation.back_route".to_string(),
                reason: "Back route must be an absolute path".to_string(),
            });
        }

        if let Some(code) = &self.session.branch_code {
            if code.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: "session.branch_code".to_string(),
                    reason: "Branch code must not be blank; omit it instead".to_string(),
                });
            }
        }

        Ok(())
    }

    /// Generate a default configuration file
    pub fn generate_default() -> &'static str {
        include_str!("../templates/default_config.yaml")
    }
}
