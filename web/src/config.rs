use std::env;
use std::time::Duration;

use anyhow::{bail, Context};

use crate::adapters::RetryPolicy;
use crate::domain::entities::FormVariant;

/// Secret used for anti-forgery tokens when none is configured outside production
const DEV_CSRF_SECRET: &str = "dev-csrf-secret-not-for-production";

/// Deployment environment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl std::str::FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Ok(Environment::Development),
            "production" | "prod" => Ok(Environment::Production),
            _ => Err(format!("Unknown environment: {}", s)),
        }
    }
}

/// Which question store to build at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    InMemory,
    Sql,
}

#[derive(Clone)]
pub struct Config {
    pub environment: Environment,
    /// Requested in-memory store; only honoured outside production
    pub use_in_memory_store: bool,
    pub database_url: Option<String>,
    pub db_max_connections: u32,
    pub retry_policy: RetryPolicy,
    pub form_variant: FormVariant,
    /// Key for HMAC anti-forgery tokens
    pub csrf_secret: String,
    /// Seconds to replenish one request of the per-IP quota
    pub rate_limit_replenish_secs: u64,
    pub rate_limit_burst: u32,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let environment: Environment = parse_var("APP_ENV", Environment::Development)?;

        let csrf_secret = match env::var("CSRF_SECRET") {
            Ok(secret) if !secret.is_empty() => secret,
            _ if environment == Environment::Production => {
                bail!("CSRF_SECRET must be set in production")
            }
            _ => DEV_CSRF_SECRET.to_string(),
        };

        Ok(Self {
            environment,
            use_in_memory_store: parse_var("USE_IN_MEMORY_STORE", false)?,
            database_url: env::var("DATABASE_URL").ok().filter(|u| !u.is_empty()),
            db_max_connections: parse_var("DB_MAX_CONNECTIONS", 10)?,
            retry_policy: RetryPolicy {
                max_retries: parse_var("DB_MAX_RETRIES", 6)?,
                base_delay: Duration::from_millis(parse_var("DB_RETRY_BASE_DELAY_MS", 200)?),
                max_delay: Duration::from_secs(parse_var("DB_RETRY_MAX_DELAY_SECS", 30)?),
            },
            form_variant: parse_var("FORM_VARIANT", FormVariant::default())?,
            csrf_secret,
            rate_limit_replenish_secs: parse_var("RATE_LIMIT_REPLENISH_SECS", 1)?,
            rate_limit_burst: parse_var("RATE_LIMIT_BURST", 10)?,
            port: parse_var("PORT", 8080)?,
        })
    }

    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }

    /// In-memory only when requested and not in production
    pub fn store_backend(&self) -> StoreBackend {
        if self.use_in_memory_store && !self.is_production() {
            StoreBackend::InMemory
        } else {
            StoreBackend::Sql
        }
    }
}

/// Read and parse an optional environment variable
fn parse_var<T>(name: &str, default: T) -> anyhow::Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .map_err(|e: T::Err| anyhow::anyhow!("{}", e))
            .with_context(|| format!("Invalid value for {}: {:?}", name, raw)),
        _ => Ok(default),
    }
}

#[cfg(test)]
impl Config {
    /// Development configuration backed by the in-memory store
    pub fn for_tests() -> Self {
        Self {
            environment: Environment::Development,
            use_in_memory_store: true,
            database_url: None,
            db_max_connections: 1,
            retry_policy: RetryPolicy::default(),
            form_variant: FormVariant::default(),
            csrf_secret: "test-csrf-secret".to_string(),
            rate_limit_replenish_secs: 1,
            rate_limit_burst: 10,
            port: 0,
        }
    }
}
