//! Configuration management following 12-factor app principles
//!
//! Settings are split into a public grouping (safe to expose to clients)
//! and a secret grouping (credentials), loaded once at process start and
//! passed explicitly to consumers.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::env;

/// Settings that are safe to expose outside the process
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublicConfig {
    /// Feature flag as exposed to clients
    pub manticore_enabled: String,

    /// Development-mode flag
    pub is_dev: String,

    /// Clerk publishable key (empty when not configured)
    pub clerk_publishable_key: String,
}

impl PublicConfig {
    /// Load public settings from environment variables
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // Load .env file if it exists

        Ok(Self {
            manticore_enabled: env::var("PUBLIC_MANTICORE_ENABLED")
                .map_err(|_| anyhow::anyhow!("PUBLIC_MANTICORE_ENABLED is required"))?,
            is_dev: env::var("IS_DEV").map_err(|_| anyhow::anyhow!("IS_DEV is required"))?,
            clerk_publishable_key: env::var("PUBLIC_CLERK_PUBLISHABLE_KEY").unwrap_or_default(),
        })
    }
}

/// Sensitive settings; values must never be written to logs or stdout
#[derive(Debug, Clone)]
pub struct SecretConfig {
    /// Server-side feature flag
    pub manticore_enabled: String,

    /// Clerk backend API secret key (empty when not configured)
    pub clerk_secret_key: String,
}

impl SecretConfig {
    /// Load secret settings from environment variables
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Self {
            manticore_enabled: env::var("MANTICORE_ENABLED")
                .map_err(|_| anyhow::anyhow!("MANTICORE_ENABLED is required"))?,
            clerk_secret_key: env::var("CLERK_SECRET_KEY").unwrap_or_default(),
        })
    }
}

/// Full server configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub public: PublicConfig,
    pub secrets: SecretConfig,

    /// Database connection URL (PostgreSQL)
    pub database_url: String,

    /// Runtime configuration
    pub rust_log: String,
    pub port: u16,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Self {
            public: PublicConfig::from_env()?,
            secrets: SecretConfig::from_env()?,

            database_url: env::var("DATABASE_URL")
                .map_err(|_| anyhow::anyhow!("DATABASE_URL is required"))?,

            rust_log: env::var("RUST_LOG").unwrap_or_else(|_| "manticore=debug".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .unwrap_or(3000),
        })
    }
}
