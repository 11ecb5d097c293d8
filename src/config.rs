//! Environment-driven configuration
//!
//! Read once at startup. Invalid values fall back to defaults with a warning
//! rather than aborting; only the bind address is allowed to fail hard, and
//! that happens later when the listener binds.

use std::env;
use std::time::Duration;

use tracing::warn;

use crate::engine::ValidationPolicy;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:5001";
const DEFAULT_NUMBERS_API_URL: &str = "http://numbersapi.com";
const DEFAULT_FACT_TIMEOUT_SECS: u64 = 3;

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Address the HTTP listener binds to (`BIND_ADDR`).
    pub bind_addr: String,
    /// Base URL of the numeric-trivia provider (`NUMBERS_API_URL`).
    pub numbers_api_url: String,
    /// Upper bound on a single fact request (`FACT_TIMEOUT_SECS`).
    pub fact_timeout: Duration,
    /// Input validation policy (`VALIDATION_POLICY`: "lenient" | "strict").
    pub policy: ValidationPolicy,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            numbers_api_url: DEFAULT_NUMBERS_API_URL.to_string(),
            fact_timeout: Duration::from_secs(DEFAULT_FACT_TIMEOUT_SECS),
            policy: ValidationPolicy::default(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let fact_timeout = match env::var("FACT_TIMEOUT_SECS") {
            Ok(raw) => match raw.parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    warn!("Ignoring invalid FACT_TIMEOUT_SECS {:?}", raw);
                    defaults.fact_timeout
                }
            },
            Err(_) => defaults.fact_timeout,
        };

        let policy = match env::var("VALIDATION_POLICY") {
            Ok(raw) => match raw.to_lowercase().as_str() {
                "lenient" => ValidationPolicy::Lenient,
                "strict" => ValidationPolicy::StrictInteger,
                _ => {
                    warn!("Ignoring unknown VALIDATION_POLICY {:?}", raw);
                    defaults.policy
                }
            },
            Err(_) => defaults.policy,
        };

        Self {
            bind_addr: env::var("BIND_ADDR").unwrap_or(defaults.bind_addr),
            numbers_api_url: env::var("NUMBERS_API_URL").unwrap_or(defaults.numbers_api_url),
            fact_timeout,
            policy,
        }
    }
}
