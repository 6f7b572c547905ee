pub mod db_url;
pub mod error;

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use tracing::debug;

use self::error::ConfigLoadError;
use crate::models::sources::{EnvConfig, FileConfig};
use crate::models::{
    Config, ConfigMetadata, DatabaseConfig, LoggingConfig, PaginationConfig,
};
use crate::util::parse_duration;
use crate::validation::{ConfigWarnings, apply_guard_rails};

const DEFAULT_CONFIG_LOCATIONS: [&str; 2] =
    ["catalog.toml", "config/catalog.toml"];

#[derive(Debug, Default, Clone)]
pub struct ConfigLoaderOptions {
    pub config_path: Option<PathBuf>,
    pub env_file: Option<PathBuf>,
    /// Use this instead of reading the process environment (and `.env`).
    pub env_override: Option<EnvConfig>,
}

/// Resolved configuration plus the non-fatal findings from loading it.
#[derive(Debug, Clone)]
pub struct ConfigLoad {
    pub config: Config,
    pub warnings: ConfigWarnings,
}

#[derive(Debug, Default)]
pub struct ConfigLoader {
    options: ConfigLoaderOptions,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ConfigLoaderOptions) -> Self {
        Self { options }
    }

    pub fn with_config_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.options.config_path = Some(path.into());
        self
    }

    pub fn with_env_file<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.options.env_file = Some(path.into());
        self
    }

    pub fn with_env(mut self, env: EnvConfig) -> Self {
        self.options.env_override = Some(env);
        self
    }

    pub fn load(&self) -> Result<ConfigLoad, ConfigLoadError> {
        let (env, env_file_loaded) = match &self.options.env_override {
            Some(env) => (env.clone(), false),
            None => {
                let loaded = self.load_env_file()?;
                (EnvConfig::gather(), loaded)
            }
        };

        let (file, config_path) = self.load_file_config(&env)?;
        let mut warnings = ConfigWarnings::default();
        if config_path.is_none() {
            warnings.push_with_hint(
                "No catalog.toml detected; using defaults and environment variables",
                "Set CATALOG_CONFIG_PATH or pass --config to use a config file",
            );
        }

        let mut config = compose(file, &env)?;
        config.metadata = ConfigMetadata {
            config_path,
            env_file_loaded,
        };
        warnings.extend(apply_guard_rails(&mut config));

        debug!(
            config_path = ?config.metadata.config_path,
            env_file_loaded,
            warnings = warnings.len(),
            "configuration loaded"
        );
        Ok(ConfigLoad { config, warnings })
    }

    /// A missing `.env` is fine; a malformed one is not.
    fn load_env_file(&self) -> Result<bool, ConfigLoadError> {
        let result = match &self.options.env_file {
            Some(path) => dotenvy::from_path(path),
            None => dotenvy::dotenv().map(|_| ()),
        };
        match result {
            Ok(()) => Ok(true),
            Err(dotenvy::Error::Io(_)) => Ok(false),
            Err(err) => Err(err.into()),
        }
    }

    fn load_file_config(
        &self,
        env: &EnvConfig,
    ) -> Result<(FileConfig, Option<PathBuf>), ConfigLoadError> {
        let explicit = self
            .options
            .config_path
            .clone()
            .or_else(|| env.config_path.clone());

        let path = match explicit {
            Some(path) if !path.exists() => {
                return Err(ConfigLoadError::MissingConfig { path });
            }
            Some(path) => path,
            None => match DEFAULT_CONFIG_LOCATIONS
                .iter()
                .map(PathBuf::from)
                .find(|candidate| candidate.exists())
            {
                Some(path) => path,
                None => return Ok((FileConfig::default(), None)),
            },
        };

        Ok((read_file_config(&path)?, Some(path)))
    }
}

fn read_file_config(path: &Path) -> Result<FileConfig, ConfigLoadError> {
    let contents =
        fs::read_to_string(path).map_err(|source| ConfigLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    toml::from_str(&contents).map_err(|source| ConfigLoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Environment values override the file, which overrides the defaults.
fn compose(file: FileConfig, env: &EnvConfig) -> Result<Config, ConfigLoadError> {
    let defaults = Config::default();
    let FileConfig {
        database: file_database,
        pagination: file_pagination,
        logging: file_logging,
    } = file;

    let acquire_timeout = match env
        .database_acquire_timeout
        .clone()
        .or_else(|| file_database.acquire_timeout.clone())
    {
        Some(raw) => duration("database.acquire_timeout", &raw)?,
        None => defaults.database.acquire_timeout,
    };

    let database = DatabaseConfig {
        url: db_url::resolve_database_url(env, &file_database)?,
        max_connections: env
            .database_max_connections
            .or(file_database.max_connections)
            .unwrap_or(defaults.database.max_connections),
        min_connections: env
            .database_min_connections
            .or(file_database.min_connections)
            .unwrap_or(defaults.database.min_connections),
        acquire_timeout,
    };

    let pagination = PaginationConfig {
        default_per_page: env
            .default_per_page
            .or(file_pagination.default_per_page)
            .unwrap_or(defaults.pagination.default_per_page),
        max_per_page: env
            .max_per_page
            .or(file_pagination.max_per_page)
            .unwrap_or(defaults.pagination.max_per_page),
    };

    let logging = LoggingConfig {
        filter: env
            .log_filter
            .clone()
            .or(file_logging.filter)
            .unwrap_or(defaults.logging.filter),
        ansi: env
            .log_ansi
            .or(file_logging.ansi)
            .unwrap_or(defaults.logging.ansi),
    };

    Ok(Config {
        database,
        pagination,
        logging,
        metadata: ConfigMetadata::default(),
    })
}

fn duration(field: &'static str, raw: &str) -> Result<Duration, ConfigLoadError> {
    parse_duration(raw).map_err(|source| ConfigLoadError::InvalidDuration {
        field,
        value: raw.to_string(),
        source,
    })
}
