/// Configuration management for Community Service
///
/// This module handles loading and managing configuration from environment variables.
/// A `.env` file, when present, is loaded by the binary before `Config::from_env` runs.
use serde::{Deserialize, Serialize};
use std::fmt;

/// Hard ceiling applied to caller-supplied `limit` query parameters.
pub const DEFAULT_MAX_LIMIT: usize = 100;

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Application settings
    pub app: AppConfig,
    /// CORS configuration
    pub cors: CorsConfig,
    /// Document store configuration
    pub database: DatabaseConfig,
    /// Content listing configuration
    pub content: ContentConfig,
}

/// Application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application environment (development, staging, production)
    pub env: String,
    /// Server host to bind to
    pub host: String,
    /// Server port to bind to
    pub port: u16,
}

/// CORS configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    /// Comma-separated list of allowed origins, `*` allows any origin
    pub allowed_origins: String,
}

/// Document store configuration.
///
/// Both `url` and `name` are optional: the service runs on sample data when
/// no store is configured.
#[derive(Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Store connection string (`postgres://...` or `memory://`)
    pub url: Option<String>,
    /// Logical store name
    pub name: Option<String>,
    /// Max connections in pool
    pub max_connections: u32,
    /// Seconds to wait for a pooled connection before the call fails
    pub acquire_timeout_secs: u64,
}

impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("url", &self.url.as_ref().map(|_| "[REDACTED]"))
            .field("name", &self.name)
            .field("max_connections", &self.max_connections)
            .field("acquire_timeout_secs", &self.acquire_timeout_secs)
            .finish()
    }
}

impl DatabaseConfig {
    pub fn url_configured(&self) -> bool {
        self.url.is_some()
    }

    pub fn name_configured(&self) -> bool {
        self.name.is_some()
    }
}

/// Content listing configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentConfig {
    /// Upper bound for any caller-supplied `limit`
    pub max_limit: usize,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            max_limit: DEFAULT_MAX_LIMIT,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, String> {
        let app_env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string());

        let max_limit = parse_env_or_default("CONTENT_MAX_LIMIT", DEFAULT_MAX_LIMIT)?;
        if max_limit == 0 {
            return Err("CONTENT_MAX_LIMIT must be at least 1".to_string());
        }

        Ok(Config {
            app: AppConfig {
                env: app_env,
                host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: parse_env_or_default("PORT", 8000)?,
            },
            cors: CorsConfig {
                allowed_origins: std::env::var("CORS_ALLOWED_ORIGINS")
                    .unwrap_or_else(|_| "*".to_string()),
            },
            database: DatabaseConfig {
                url: non_empty_env("DATABASE_URL"),
                name: non_empty_env("DATABASE_NAME"),
                max_connections: parse_env_or_default("DATABASE_MAX_CONNECTIONS", 10)?,
                acquire_timeout_secs: parse_env_or_default("DATABASE_ACQUIRE_TIMEOUT_SECS", 3)?,
            },
            content: ContentConfig { max_limit },
        })
    }
}

fn non_empty_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_env_or_default<T>(key: &str, default: T) -> Result<T, String>
where
    T: std::str::FromStr,
    T::Err: fmt::Display,
{
    match std::env::var(key) {
        Ok(val) => val
            .trim()
            .parse()
            .map_err(|e| format!("Failed to parse {}='{}': {}", key, val, e)),
        Err(_) => Ok(default),
    }
}
