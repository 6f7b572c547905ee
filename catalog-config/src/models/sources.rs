use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::util::{non_empty_var, parse_bool_var, parse_var};

/// Raw configuration as defined in a TOML file.
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct FileConfig {
    #[serde(default)]
    pub database: FileDatabaseConfig,
    #[serde(default)]
    pub pagination: FilePaginationConfig,
    #[serde(default)]
    pub logging: FileLoggingConfig,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct FileDatabaseConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password_file: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_connections: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_connections: Option<u32>,
    /// Human duration, e.g. `"30s"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acquire_timeout: Option<String>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct FilePaginationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_per_page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_per_page: Option<u32>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct FileLoggingConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ansi: Option<bool>,
}

/// Configuration values read from the process environment.
#[derive(Debug, Default, Clone)]
pub struct EnvConfig {
    pub config_path: Option<PathBuf>,
    pub database_url: Option<String>,
    pub database_url_file: Option<PathBuf>,
    pub database_host: Option<String>,
    pub database_port: Option<u16>,
    pub database_user: Option<String>,
    pub database_name: Option<String>,
    pub database_password: Option<String>,
    pub database_password_file: Option<PathBuf>,
    pub database_max_connections: Option<u32>,
    pub database_min_connections: Option<u32>,
    pub database_acquire_timeout: Option<String>,
    pub default_per_page: Option<u32>,
    pub max_per_page: Option<u32>,
    pub log_filter: Option<String>,
    pub log_ansi: Option<bool>,
}

impl EnvConfig {
    pub fn gather() -> Self {
        Self {
            config_path: non_empty_var("CATALOG_CONFIG_PATH").map(PathBuf::from),
            database_url: non_empty_var("DATABASE_URL"),
            database_url_file: non_empty_var("DATABASE_URL_FILE")
                .map(PathBuf::from),
            database_host: non_empty_var("DATABASE_HOST"),
            database_port: parse_var("DATABASE_PORT"),
            database_user: non_empty_var("DATABASE_USER"),
            database_name: non_empty_var("DATABASE_NAME"),
            database_password: non_empty_var("DATABASE_PASSWORD"),
            database_password_file: non_empty_var("DATABASE_PASSWORD_FILE")
                .map(PathBuf::from),
            database_max_connections: parse_var("DATABASE_MAX_CONNECTIONS"),
            database_min_connections: parse_var("DATABASE_MIN_CONNECTIONS"),
            database_acquire_timeout: non_empty_var("DATABASE_ACQUIRE_TIMEOUT"),
            default_per_page: parse_var("CATALOG_DEFAULT_PER_PAGE"),
            max_per_page: parse_var("CATALOG_MAX_PER_PAGE"),
            log_filter: non_empty_var("CATALOG_LOG"),
            log_ansi: parse_bool_var("CATALOG_LOG_ANSI"),
        }
    }
}
