mod cli;
mod commands;

use anyhow::Context;
use catalog_config::{Config, ConfigLoad, ConfigLoader, ConfigLoaderOptions};
use catalog_core::CatalogRepositories;
use catalog_core::database::{PoolSettings, PostgresDatabase};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::{Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let loader = ConfigLoader::with_options(ConfigLoaderOptions {
        config_path: cli.config.clone(),
        env_file: cli.env_file.clone(),
        ..ConfigLoaderOptions::default()
    });
    let ConfigLoad { config, warnings } =
        loader.load().context("failed to load configuration")?;

    // Logs go to stderr so stdout stays parseable JSON.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.logging.filter.as_str().into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(config.logging.ansi)
                .with_writer(std::io::stderr),
        )
        .init();

    if config.metadata.env_file_loaded {
        info!("loaded .env file");
    }
    if let Some(path) = config.metadata.config_path.as_ref() {
        info!(path = %path.display(), "config file loaded");
    }
    for warning in warnings.iter() {
        match &warning.hint {
            Some(hint) => {
                warn!(message = %warning.message, hint = %hint, "configuration warning")
            }
            None => warn!(message = %warning.message, "configuration warning"),
        }
    }

    let db = connect(&config).await?;
    let repos = CatalogRepositories::postgres(&db);
    let pagination = &config.pagination;

    match cli.command {
        Command::Migrate => {
            db.migrate().await.context("database migration failed")?;
            info!("Database migrations applied successfully");
            Ok(())
        }
        Command::Category(command) => {
            commands::category(&repos, pagination, command).await
        }
        Command::Genre(command) => {
            commands::genre(&repos, pagination, command).await
        }
        Command::CastMember(command) => {
            commands::cast_member(&repos, pagination, command).await
        }
        Command::Video(command) => {
            commands::video(&repos, pagination, command).await
        }
    }
}

async fn connect(config: &Config) -> anyhow::Result<PostgresDatabase> {
    let url = config
        .database
        .url
        .as_deref()
        .context("no database URL configured (set DATABASE_URL)")?;
    let settings = PoolSettings {
        max_connections: config.database.max_connections,
        min_connections: config.database.min_connections,
        acquire_timeout: config.database.acquire_timeout,
    };
    PostgresDatabase::connect(url, settings)
        .await
        .context("failed to connect to PostgreSQL")
}
