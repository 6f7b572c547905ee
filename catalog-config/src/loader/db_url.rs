use std::fs::read_to_string;
use std::path::Path;

use url::Url;

use super::error::ConfigLoadError;
use crate::models::sources::{EnvConfig, FileDatabaseConfig};

const DEFAULT_PORT: u16 = 5432;

/// Resolve the PostgreSQL URL. Precedence: `DATABASE_URL`,
/// `DATABASE_URL_FILE`, `[database].url` from the file, then a URL composed
/// from `DATABASE_HOST` / `DATABASE_USER` / `DATABASE_NAME`.
pub fn resolve_database_url(
    env: &EnvConfig,
    file_database: &FileDatabaseConfig,
) -> Result<Option<String>, ConfigLoadError> {
    if let Some(url) = env.database_url.as_deref().and_then(non_blank) {
        return Ok(Some(url.to_string()));
    }

    if let Some(path) = env.database_url_file.as_deref()
        && let Some(url) = read_secret_file(path)?
    {
        return Ok(Some(url));
    }

    if let Some(stored) = file_database.url.as_deref().and_then(non_blank) {
        let mut parsed = Url::parse(stored)
            .map_err(|source| ConfigLoadError::InvalidDatabaseUrl { source })?;
        if parsed.password().is_none()
            && let Some(password) = resolve_database_password(env, file_database)?
        {
            parsed
                .set_password(Some(&password))
                .map_err(|_| ConfigLoadError::InvalidDatabasePassword)?;
        }
        return Ok(Some(parsed.to_string()));
    }

    compose_from_parts(env, file_database)
}

fn compose_from_parts(
    env: &EnvConfig,
    file_database: &FileDatabaseConfig,
) -> Result<Option<String>, ConfigLoadError> {
    let host = env.database_host.as_deref().and_then(non_blank);
    let user = env.database_user.as_deref().and_then(non_blank);
    let name = env.database_name.as_deref().and_then(non_blank);

    let (Some(host), Some(user), Some(name)) = (host, user, name) else {
        return Ok(None);
    };

    let port = env.database_port.unwrap_or(DEFAULT_PORT);
    let mut url = Url::parse(&format!("postgresql://{host}:{port}/{name}"))
        .map_err(|source| ConfigLoadError::InvalidDatabaseUrl { source })?;
    url.set_username(user).map_err(|_| {
        ConfigLoadError::InvalidDatabaseUsername {
            username: user.to_string(),
        }
    })?;
    if let Some(password) = resolve_database_password(env, file_database)? {
        url.set_password(Some(&password))
            .map_err(|_| ConfigLoadError::InvalidDatabasePassword)?;
    }
    Ok(Some(url.to_string()))
}

pub fn resolve_database_password(
    env: &EnvConfig,
    file_database: &FileDatabaseConfig,
) -> Result<Option<String>, ConfigLoadError> {
    if let Some(password) = env.database_password.as_deref().and_then(non_blank)
    {
        return Ok(Some(password.to_string()));
    }

    for path in [
        env.database_password_file.as_deref(),
        file_database.password_file.as_deref(),
    ]
    .into_iter()
    .flatten()
    {
        if let Some(secret) = read_secret_file(path)? {
            return Ok(Some(secret));
        }
    }

    Ok(None)
}

/// Trimmed file contents, `None` when the file is blank.
pub fn read_secret_file(path: &Path) -> Result<Option<String>, ConfigLoadError> {
    let contents =
        read_to_string(path).map_err(|source| ConfigLoadError::SecretFileIo {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(non_blank(&contents).map(str::to_string))
}

fn non_blank(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}
