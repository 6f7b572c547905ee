//! Configuration for the video catalog.
//!
//! [`ConfigLoader`] layers built-in defaults, an optional TOML file and the
//! process environment (after reading `.env`), then runs the guard rails in
//! [`validation`] and hands back the resolved [`Config`] together with any
//! non-fatal warnings.

#![allow(missing_docs)]

pub mod loader;
pub mod models;
pub mod util;
pub mod validation;

pub use loader::{
    ConfigLoad, ConfigLoader, ConfigLoaderOptions, error::ConfigLoadError,
};
pub use models::sources::{EnvConfig, FileConfig};
pub use models::{
    Config, ConfigMetadata, DatabaseConfig, LoggingConfig, PaginationConfig,
};
pub use validation::{ConfigWarning, ConfigWarnings};
