//! Environment-driven server configuration.

use std::net::SocketAddr;

use thiserror::Error;

pub const DEFAULT_ADDR: &str = "0.0.0.0:8000";
pub const DEFAULT_DB_PATH: &str = "clinic_desk.db";
pub const DEFAULT_LOG_FILTER: &str = "clinic_desk_web=info,clinic_desk_core=info,tower_http=info";

/// Value of `CLINIC_DESK_DB` that selects a throwaway in-memory store.
pub const IN_MEMORY_DB: &str = ":memory:";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {key}: {message}")]
    Invalid { key: &'static str, message: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseLocation {
    File(String),
    InMemory,
}

#[derive(Debug, Clone)]
pub struct WebConfig {
    pub addr: SocketAddr,
    pub database: DatabaseLocation,
    pub username: String,
    pub password: String,
    pub log_filter: String,
}

impl WebConfig {
    /// Read configuration from the process environment.
    ///
    /// Call `dotenvy::dotenv()` first to pick up a local `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let addr_raw = get("CLINIC_DESK_ADDR", DEFAULT_ADDR);
        let addr = addr_raw.trim().parse::<SocketAddr>().map_err(|e| ConfigError::Invalid {
            key: "CLINIC_DESK_ADDR",
            message: format!("{addr_raw:?}: {e}"),
        })?;

        let db = get("CLINIC_DESK_DB", DEFAULT_DB_PATH);
        let database = match db.trim() {
            "" => {
                return Err(ConfigError::Invalid {
                    key: "CLINIC_DESK_DB",
                    message: "must not be empty".into(),
                })
            }
            IN_MEMORY_DB => DatabaseLocation::InMemory,
            path => DatabaseLocation::File(path.to_string()),
        };

        let username = get("CLINIC_DESK_USERNAME", "admin");
        if username.trim().is_empty() {
            return Err(ConfigError::Invalid {
                key: "CLINIC_DESK_USERNAME",
                message: "must not be empty".into(),
            });
        }
        let password = get("CLINIC_DESK_PASSWORD", "admin");

        // RUST_LOG wins over the app-specific filter when both are set.
        let log_filter = lookup("RUST_LOG")
            .or_else(|| lookup("CLINIC_DESK_LOG"))
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        Ok(Self {
            addr,
            database,
            username,
            password,
            log_filter,
        })
    }
}
