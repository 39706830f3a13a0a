// Configuration module
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Main server configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub database: DatabaseSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
    #[serde(default)]
    pub pagination: PaginationSettings,
    #[serde(default)]
    pub jobs: JobsSettings,
    #[serde(default)]
    pub cors: CorsSettings,
}

/// Server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_workers")]
    pub workers: usize,
}

/// Database settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseSettings {
    /// SQLite database file; created on first start.
    #[serde(default = "default_database_path")]
    pub path: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

/// Logging settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_path")]
    pub file_path: String,
    #[serde(default = "default_true")]
    pub log_to_console: bool,
    /// "compact" or "json"
    #[serde(default = "default_log_format")]
    pub format: String,
    /// Per-target level overrides, e.g. `"rosterd_store" = "debug"`.
    #[serde(default)]
    pub targets: HashMap<String, String>,
}

/// Pagination policy for listing endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginationSettings {
    #[serde(default = "default_page_size")]
    pub default_page_size: u32,
    #[serde(default = "default_max_page_size")]
    pub max_page_size: u32,
}

/// Background job settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobsSettings {
    #[serde(default = "default_dispatch_interval")]
    pub email_dispatch_interval_seconds: u64,
    #[serde(default = "default_rollup_interval")]
    pub rollup_interval_seconds: u64,
    #[serde(default = "default_dispatch_batch_size")]
    pub dispatch_batch_size: i64,
    #[serde(default = "default_max_send_attempts")]
    pub max_send_attempts: i64,
}

/// CORS settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsSettings {
    /// Empty or `["*"]` allows any origin.
    #[serde(default)]
    pub allowed_origins: Vec<String>,
    #[serde(default = "default_cors_max_age")]
    pub max_age: u32,
}

impl ServerConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: ServerConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Sanity checks that cannot be expressed as serde defaults.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.server.port == 0 {
            anyhow::bail!("server.port must be non-zero");
        }
        if self.pagination.default_page_size == 0 {
            anyhow::bail!("pagination.default_page_size must be non-zero");
        }
        if self.pagination.default_page_size > self.pagination.max_page_size {
            anyhow::bail!(
                "pagination.default_page_size ({}) exceeds max_page_size ({})",
                self.pagination.default_page_size,
                self.pagination.max_page_size
            );
        }
        if self.database.max_connections == 0 {
            anyhow::bail!("database.max_connections must be non-zero");
        }
        Ok(())
    }
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: default_workers(),
        }
    }
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            path: default_database_path(),
            max_connections: default_max_connections(),
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file_path: default_log_path(),
            log_to_console: default_true(),
            format: default_log_format(),
            targets: HashMap::new(),
        }
    }
}

impl Default for PaginationSettings {
    fn default() -> Self {
        Self {
            default_page_size: default_page_size(),
            max_page_size: default_max_page_size(),
        }
    }
}

impl Default for JobsSettings {
    fn default() -> Self {
        Self {
            email_dispatch_interval_seconds: default_dispatch_interval(),
            rollup_interval_seconds: default_rollup_interval(),
            dispatch_batch_size: default_dispatch_batch_size(),
            max_send_attempts: default_max_send_attempts(),
        }
    }
}

impl Default for CorsSettings {
    fn default() -> Self {
        Self {
            allowed_origins: Vec::new(),
            max_age: default_cors_max_age(),
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_workers() -> usize {
    num_workers()
}

fn num_workers() -> usize {
    std::thread::available_parallelism().map(|n| n.get()).unwrap_or(2)
}

fn default_database_path() -> String {
    "data/rosterd.db".to_string()
}

fn default_max_connections() -> u32 {
    8
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_path() -> String {
    "logs/server.log".to_string()
}

fn default_log_format() -> String {
    "compact".to_string()
}

fn default_true() -> bool {
    true
}

fn default_page_size() -> u32 {
    20
}

fn default_max_page_size() -> u32 {
    100
}

fn default_dispatch_interval() -> u64 {
    15
}

fn default_rollup_interval() -> u64 {
    300
}

fn default_dispatch_batch_size() -> i64 {
    50
}

fn default_max_send_attempts() -> i64 {
    3
}

fn default_cors_max_age() -> u32 {
    3600
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config: ServerConfig = toml::from_str("").unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.pagination.default_page_size, 20);
        assert_eq!(config.pagination.max_page_size, 100);
        assert_eq!(config.jobs.max_send_attempts, 3);
        config.validate().unwrap();
    }

    #[test]
    fn test_partial_toml_overrides() {
        let config: ServerConfig = toml::from_str(
            r#"
            [server]
            port = 9090

            [pagination]
            default_page_size = 10
            "#,
        )
        .unwrap();
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.pagination.default_page_size, 10);
        assert_eq!(config.pagination.max_page_size, 100);
    }

    #[test]
    fn test_validate_rejects_inverted_pagination() {
        let config: ServerConfig = toml::from_str(
            r#"
            [pagination]
            default_page_size = 200
            max_page_size = 100
            "#,
        )
        .unwrap();
        assert!(config.validate().is_err());
    }
}
