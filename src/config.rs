// src/config.rs
//
// Runtime configuration
//
// Read from the process environment; main.rs loads a `.env` file first
// through dotenvy, so both sources work.

use std::net::SocketAddr;
use std::path::PathBuf;

use crate::error::{AppError, AppResult};

pub const DATABASE_PATH_VAR: &str = "KMDB_DATABASE_PATH";
pub const BIND_ADDR_VAR: &str = "KMDB_BIND_ADDR";
pub const POOL_SIZE_VAR: &str = "KMDB_POOL_SIZE";

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";
pub const DEFAULT_POOL_SIZE: u32 = 15;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub database_path: PathBuf,
    pub bind_addr: SocketAddr,
    pub pool_max_size: u32,
}

impl AppConfig {
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; empty values count as unset
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let database_path = match get(DATABASE_PATH_VAR) {
            Some(path) => PathBuf::from(path),
            None => default_database_path()?,
        };

        let bind_addr_raw = get(BIND_ADDR_VAR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_addr_raw.trim().parse::<SocketAddr>().map_err(|e| {
            AppError::Other(format!("Invalid {} '{}': {}", BIND_ADDR_VAR, bind_addr_raw, e))
        })?;

        let pool_max_size = match get(POOL_SIZE_VAR) {
            Some(raw) => match raw.trim().parse::<u32>() {
                Ok(size) if size >= 1 => size,
                _ => {
                    return Err(AppError::Other(format!(
                        "Invalid {} '{}': expected a positive integer",
                        POOL_SIZE_VAR, raw
                    )))
                }
            },
            None => DEFAULT_POOL_SIZE,
        };

        Ok(Self {
            database_path,
            bind_addr,
            pool_max_size,
        })
    }
}

/// Path structure: {APP_DATA}/kmdb/kmdb.db
pub fn default_database_path() -> AppResult<PathBuf> {
    let app_data_dir = dirs::data_dir()
        .ok_or_else(|| AppError::Other("Could not determine app data directory".to_string()))?;

    Ok(app_data_dir.join("kmdb").join("kmdb.db"))
}
