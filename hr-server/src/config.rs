//! Server configuration

use std::time::Duration;

use sqlx::postgres::{PgConnectOptions, PgSslMode};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Default HTTP port when `PORT` is unset
pub const DEFAULT_HTTP_PORT: u16 = 3000;
/// Requests allowed per client in one rate-limit window
pub const DEFAULT_RATE_LIMIT_MAX: u32 = 5;
/// Rate-limit window length
pub const DEFAULT_RATE_LIMIT_WINDOW_SECS: u64 = 60;

/// Server configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP port (env: PORT)
    pub http_port: u16,
    /// Database connection descriptor
    pub database: DatabaseConfig,
    /// Default log filter when RUST_LOG is unset
    pub log_level: String,
    /// JSON console logs (production)
    pub log_json: bool,
    /// Directory for daily rotating log files
    pub log_dir: Option<String>,
    /// Per-request access logging
    pub access_log: bool,
    /// Abort requests that take longer than this
    pub request_timeout: Option<Duration>,
    /// Max requests per client per window
    pub rate_limit_max: u32,
    /// Rate-limit window length in seconds
    pub rate_limit_window_secs: u64,
    /// Key the rate limiter on `X-Forwarded-For` (trusted reverse proxy only)
    pub rate_limit_trust_forwarded: bool,
}

/// PostgreSQL connection descriptor
#[derive(Clone)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub name: String,
    /// Session time zone (e.g. Asia/Jakarta)
    pub timezone: String,
    /// disable | allow | prefer | require | verify-ca | verify-full
    pub ssl_mode: String,
    pub max_connections: u32,
}

impl std::fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"***")
            .field("name", &self.name)
            .field("timezone", &self.timezone)
            .field("ssl_mode", &self.ssl_mode)
            .field("max_connections", &self.max_connections)
            .finish()
    }
}

impl DatabaseConfig {
    /// Build sqlx connect options from the descriptor
    pub fn connect_options(&self) -> Result<PgConnectOptions, BoxError> {
        let ssl_mode: PgSslMode = self
            .ssl_mode
            .parse()
            .map_err(|_| format!("invalid DB_SSL_MODE: {}", self.ssl_mode))?;

        Ok(PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.name)
            .ssl_mode(ssl_mode)
            .options([("timezone", self.timezone.as_str())]))
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, BoxError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(var: F) -> Result<Self, BoxError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let parse_or = |name: &str, default: u64| -> Result<u64, BoxError> {
            match var(name).filter(|v| !v.is_empty()) {
                Some(v) => v
                    .parse()
                    .map_err(|_| format!("{name} must be a non-negative integer, got {v:?}").into()),
                None => Ok(default),
            }
        };
        let positive_or = |name: &str, default: u64| -> Result<u64, BoxError> {
            match parse_or(name, default)? {
                0 => Err(format!("{name} must be greater than zero").into()),
                n => Ok(n),
            }
        };
        let flag_or = |name: &str, default: bool| -> bool {
            var(name)
                .map(|v| matches!(v.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
                .unwrap_or(default)
        };

        let http_port = u16::try_from(parse_or("PORT", DEFAULT_HTTP_PORT.into())?)
            .map_err(|_| "PORT is out of range")?;
        let db_port =
            u16::try_from(parse_or("DB_PORT", 5432)?).map_err(|_| "DB_PORT is out of range")?;

        let request_timeout = match parse_or("REQUEST_TIMEOUT_SECS", 0)? {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        };

        Ok(Self {
            http_port,
            database: DatabaseConfig {
                host: var("DB_HOST").unwrap_or_else(|| "localhost".into()),
                port: db_port,
                user: var("DB_USER").unwrap_or_else(|| "postgres".into()),
                password: var("DB_PASSWORD").unwrap_or_default(),
                name: var("DB_NAME").unwrap_or_else(|| "postgres".into()),
                timezone: var("DB_TIMEZONE").unwrap_or_else(|| "Asia/Jakarta".into()),
                ssl_mode: var("DB_SSL_MODE").unwrap_or_else(|| "disable".into()),
                max_connections: u32::try_from(parse_or("DB_MAX_CONNECTIONS", 10)?)
                    .map_err(|_| "DB_MAX_CONNECTIONS is out of range")?,
            },
            log_level: var("LOG_LEVEL").unwrap_or_else(|| "hr_server=info,tower_http=info".into()),
            log_json: flag_or("LOG_JSON", false),
            log_dir: var("LOG_DIR").filter(|s| !s.is_empty()),
            access_log: flag_or("ACCESS_LOG", true),
            request_timeout,
            rate_limit_max: u32::try_from(positive_or(
                "RATE_LIMIT_MAX",
                DEFAULT_RATE_LIMIT_MAX.into(),
            )?)
            .map_err(|_| "RATE_LIMIT_MAX is out of range")?,
            rate_limit_window_secs: positive_or(
                "RATE_LIMIT_WINDOW_SECS",
                DEFAULT_RATE_LIMIT_WINDOW_SECS,
            )?,
            rate_limit_trust_forwarded: flag_or("RATE_LIMIT_TRUST_FORWARDED", false),
        })
    }
}
