use std::str::FromStr;

use sqlx::postgres::PgConnectOptions;

/// A configuration value that could not be parsed.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be a valid {expected}, got {value:?}")]
    Invalid {
        var: &'static str,
        expected: &'static str,
        value: String,
    },
}

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8010`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Run category deletion as a single transaction instead of two
    /// independent statements (default: `false`).
    pub atomic_cascade_delete: bool,
    /// Database connection settings.
    pub database: DatabaseConfig,
}

/// Connection settings for the PostgreSQL store.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Full connection URL. When set, the component fields are ignored.
    pub url: Option<String>,
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: Option<String>,
    pub name: String,
    /// Upper bound on pooled connections (default: `20`).
    pub max_connections: u32,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                 | Default                  |
    /// |-------------------------|--------------------------|
    /// | `HOST`                  | `0.0.0.0`                |
    /// | `PORT`                  | `8010`                   |
    /// | `CORS_ORIGINS`          | `http://localhost:3000`  |
    /// | `REQUEST_TIMEOUT_SECS`  | `30`                     |
    /// | `ATOMIC_CASCADE_DELETE` | `false`                  |
    /// | `DATABASE_URL`          | unset                    |
    /// | `APP_DB_HOST`           | `localhost`              |
    /// | `APP_DB_PORT`           | `5432`                   |
    /// | `APP_DB_USERNAME`       | `postgres`               |
    /// | `APP_DB_PASSWORD`       | unset                    |
    /// | `APP_DB_NAME`           | `tasklist`               |
    /// | `DB_MAX_CONNECTIONS`    | `20`                     |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".into());
        let port = parse_or(&lookup, "PORT", "u16", 8010)?;

        let cors_origins: Vec<String> = lookup("CORS_ORIGINS")
            .unwrap_or_else(|| "http://localhost:3000".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs = parse_or(&lookup, "REQUEST_TIMEOUT_SECS", "u64", 30)?;
        let atomic_cascade_delete =
            parse_or(&lookup, "ATOMIC_CASCADE_DELETE", "bool", false)?;

        let database = DatabaseConfig {
            url: lookup("DATABASE_URL").filter(|s| !s.is_empty()),
            host: lookup("APP_DB_HOST").unwrap_or_else(|| "localhost".into()),
            port: parse_or(&lookup, "APP_DB_PORT", "u16", 5432)?,
            username: lookup("APP_DB_USERNAME").unwrap_or_else(|| "postgres".into()),
            password: lookup("APP_DB_PASSWORD"),
            name: lookup("APP_DB_NAME").unwrap_or_else(|| "tasklist".into()),
            max_connections: parse_or(&lookup, "DB_MAX_CONNECTIONS", "u32", 20)?,
        };

        Ok(Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            atomic_cascade_delete,
            database,
        })
    }
}

impl DatabaseConfig {
    /// Resolve the settings into sqlx connect options.
    pub fn connect_options(&self) -> Result<PgConnectOptions, sqlx::Error> {
        if let Some(url) = &self.url {
            return url.parse();
        }

        let options = PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.username)
            .database(&self.name);

        Ok(match &self.password {
            Some(password) => options.password(password),
            None => options,
        })
    }
}

fn parse_or<F, T>(
    lookup: &F,
    var: &'static str,
    expected: &'static str,
    default: T,
) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(var) {
        None => Ok(default),
        Some(value) => value.trim().parse().map_err(|_| ConfigError::Invalid {
            var,
            expected,
            value,
        }),
    }
}
