use crate::errors::{AppError, AppResult};
use std::env;

/// Environment variable holding the database connection string.
pub const DATABASE_URL_VAR: &str = "DATABASE_URL";

#[derive(Debug, Clone)]
pub struct Config {
    /// Path handed to SQLite (already stripped of any `sqlite:` scheme).
    pub database: String,
}

impl Config {
    /// Load configuration from the process environment.
    ///
    /// A `.env` file in the working directory is read first, so
    /// `DATABASE_URL=movies.sqlite` there behaves like an exported variable.
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();

        let raw = env::var(DATABASE_URL_VAR).map_err(|_| {
            AppError::Config(format!(
                "{DATABASE_URL_VAR} is not set (export it or add it to a .env file)"
            ))
        })?;

        Self::from_url(&raw)
    }

    /// Build a configuration from an explicit connection string.
    pub fn from_url(url: &str) -> AppResult<Self> {
        let database = normalize_database_url(url);
        if database.is_empty() {
            return Err(AppError::Config(format!(
                "{DATABASE_URL_VAR} is empty or has no database path: '{url}'"
            )));
        }

        Ok(Self { database })
    }

    /// `--db` wins over the environment; without it `DATABASE_URL` is mandatory.
    pub fn resolve(db_override: Option<&str>) -> AppResult<Self> {
        match db_override {
            Some(path) => Self::from_url(path),
            None => Self::from_env(),
        }
    }
}

/// Turn a connection string into a SQLite path.
///
/// Accepted forms: `movies.sqlite`, `sqlite://movies.sqlite`,
/// `sqlite:movies.sqlite?mode=rwc`, `:memory:`.
pub fn normalize_database_url(url: &str) -> String {
    let trimmed = url.trim();

    let without_scheme = trimmed
        .strip_prefix("sqlite://")
        .or_else(|| trimmed.strip_prefix("sqlite:"))
        .unwrap_or(trimmed);

    let without_query = match without_scheme.split_once('?') {
        Some((path, _query)) => path,
        None => without_scheme,
    };

    without_query.to_string()
}
