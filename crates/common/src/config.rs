//! Configuration management following 12-factor app principles
//!
//! All configuration is loaded from environment variables to ensure
//! clean separation between code and config.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::time::Duration;

/// Default TTL for the category read-through cache (10 minutes)
const DEFAULT_CATEGORY_CACHE_TTL_SECS: u64 = 600;

/// Which entity store implementation backs the services
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    #[default]
    Postgres,
    Memory,
}

impl FromStr for StoreBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(StoreBackend::Postgres),
            "memory" | "in-memory" => Ok(StoreBackend::Memory),
            other => Err(anyhow::anyhow!(
                "Unknown STORE_BACKEND: {}. Supported backends: postgres, memory",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Entity store implementation
    pub store_backend: StoreBackend,

    /// Database connection URL (required for the postgres backend)
    pub database_url: Option<String>,

    /// Identity provider token verification
    pub jwt_secret: String,
    pub jwt_issuer: Option<String>,
    pub jwt_audience: Option<String>,

    /// Category cache freshness window, in seconds
    pub category_cache_ttl_secs: u64,

    /// Comma-separated list of allowed CORS origins
    pub cors_allowed_origins: Option<String>,

    /// Runtime configuration
    pub rust_log: String,
    pub port: u16,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // Load .env file if it exists

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let store_backend = match lookup("STORE_BACKEND") {
            Some(raw) => raw.parse()?,
            None => StoreBackend::default(),
        };

        let database_url = lookup("DATABASE_URL");
        if store_backend == StoreBackend::Postgres && database_url.is_none() {
            return Err(anyhow::anyhow!(
                "DATABASE_URL is required for the postgres store backend"
            ));
        }

        let config = Self {
            store_backend,
            database_url,

            jwt_secret: lookup("JWT_SECRET")
                .ok_or_else(|| anyhow::anyhow!("JWT_SECRET is required"))?,
            jwt_issuer: lookup("JWT_ISSUER"),
            jwt_audience: lookup("JWT_AUDIENCE"),

            category_cache_ttl_secs: lookup("CATEGORY_CACHE_TTL_SECS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_CATEGORY_CACHE_TTL_SECS),

            cors_allowed_origins: lookup("CORS_ALLOWED_ORIGINS"),

            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "collabhub=debug".to_string()),
            port: lookup("PORT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
        };

        Ok(config)
    }

    /// Category cache TTL as a `Duration`
    pub fn category_cache_ttl(&self) -> Duration {
        Duration::from_secs(self.category_cache_ttl_secs)
    }
}
