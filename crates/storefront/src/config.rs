//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional.
//!
//! ## Server
//! - `STOREFRONT_HOST` - Bind address (default: 127.0.0.1)
//! - `STOREFRONT_PORT` - Listen port (default: 3000)
//!
//! ## Delivery pricing
//! - `DELIVERY_CHECKOUT_BASE_FEE` - Base fee added at checkout (default: 5.0)
//! - `DELIVERY_DOMESTIC_RATE` - Quote for domestic addresses (default: 5.0)
//! - `DELIVERY_INTERNATIONAL_RATE` - Quote for other addresses (default: 15.0)
//! - `DELIVERY_DOMESTIC_COUNTRIES` - Comma-separated country names (default: `Ukraine,Україна`)
//! - `DELIVERY_RESTRICTED_REGIONS` - Comma-separated region names (default: `East,Схід`)
//!
//! ## Error tracking
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment tag
//! - `SENTRY_SAMPLE_RATE` - Error event sample rate (default: 1.0)
//! - `SENTRY_TRACES_SAMPLE_RATE` - Transaction sample rate (default: 0.0)

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use cartline_core::Money;
use thiserror::Error;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_DOMESTIC_COUNTRIES: &str = "Ukraine,Україна";
const DEFAULT_RESTRICTED_REGIONS: &str = "East,Схід";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Delivery pricing rules
    pub delivery: DeliveryConfig,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment tag (e.g. "production")
    pub sentry_environment: Option<String>,
    /// Fraction of error events sent to Sentry
    pub sentry_sample_rate: f32,
    /// Fraction of transactions sent to Sentry
    pub sentry_traces_sample_rate: f32,
}

/// Constants behind delivery quotes, checkout cost and availability checks.
///
/// Country and region names are compared case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryConfig {
    /// Flat fee added to every checkout.
    pub checkout_base_fee: Money,
    /// Quote for addresses in a domestic country.
    pub domestic_rate: Money,
    /// Quote for every other address.
    pub international_rate: Money,
    /// Country names treated as domestic.
    pub domestic_countries: Vec<String>,
    /// Regions where some products cannot be delivered.
    pub restricted_regions: Vec<String>,
}

impl Default for DeliveryConfig {
    fn default() -> Self {
        Self {
            checkout_base_fee: Money::from_units(5),
            domestic_rate: Money::from_units(5),
            international_rate: Money::from_units(15),
            domestic_countries: parse_list(DEFAULT_DOMESTIC_COUNTRIES),
            restricted_regions: parse_list(DEFAULT_RESTRICTED_REGIONS),
        }
    }
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: DEFAULT_PORT,
            delivery: DeliveryConfig::default(),
            sentry_dsn: None,
            sentry_environment: None,
            sentry_sample_rate: 1.0,
            sentry_traces_sample_rate: 0.0,
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("STOREFRONT_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("STOREFRONT_HOST".to_string(), e.to_string())
            })?;
        let port = get_env_or_default("STOREFRONT_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("STOREFRONT_PORT".to_string(), e.to_string())
            })?;

        let delivery = DeliveryConfig::from_env()?;

        Ok(Self {
            host,
            port,
            delivery,
            sentry_dsn: get_optional_env("SENTRY_DSN"),
            sentry_environment: get_optional_env("SENTRY_ENVIRONMENT"),
            sentry_sample_rate: parse_rate(
                "SENTRY_SAMPLE_RATE",
                &get_env_or_default("SENTRY_SAMPLE_RATE", "1.0"),
            )?,
            sentry_traces_sample_rate: parse_rate(
                "SENTRY_TRACES_SAMPLE_RATE",
                &get_env_or_default("SENTRY_TRACES_SAMPLE_RATE", "0.0"),
            )?,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl DeliveryConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            checkout_base_fee: parse_money(
                "DELIVERY_CHECKOUT_BASE_FEE",
                &get_env_or_default("DELIVERY_CHECKOUT_BASE_FEE", "5.0"),
            )?,
            domestic_rate: parse_money(
                "DELIVERY_DOMESTIC_RATE",
                &get_env_or_default("DELIVERY_DOMESTIC_RATE", "5.0"),
            )?,
            international_rate: parse_money(
                "DELIVERY_INTERNATIONAL_RATE",
                &get_env_or_default("DELIVERY_INTERNATIONAL_RATE", "15.0"),
            )?,
            domestic_countries: parse_list(&get_env_or_default(
                "DELIVERY_DOMESTIC_COUNTRIES",
                DEFAULT_DOMESTIC_COUNTRIES,
            )),
            restricted_regions: parse_list(&get_env_or_default(
                "DELIVERY_RESTRICTED_REGIONS",
                DEFAULT_RESTRICTED_REGIONS,
            )),
        })
    }

    /// Whether `country` is one of the domestic countries.
    #[must_use]
    pub fn is_domestic(&self, country: &str) -> bool {
        matches_any(&self.domestic_countries, country)
    }

    /// Whether `region` is one of the restricted regions.
    #[must_use]
    pub fn is_restricted(&self, region: &str) -> bool {
        matches_any(&self.restricted_regions, region)
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.is_empty())
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Parse a monetary amount, reporting the variable name on failure.
fn parse_money(key: &str, value: &str) -> Result<Money, ConfigError> {
    value
        .parse::<Money>()
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
}

/// Parse a sample rate in `0.0..=1.0`.
fn parse_rate(key: &str, value: &str) -> Result<f32, ConfigError> {
    let rate = value
        .trim()
        .parse::<f32>()
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))?;
    if !(0.0..=1.0).contains(&rate) {
        return Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            format!("must be between 0.0 and 1.0 (got {rate})"),
        ));
    }
    Ok(rate)
}

/// Split a comma-separated list, dropping blank entries.
fn parse_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(String::from)
        .collect()
}

/// Case-insensitive membership test (Unicode-aware).
fn matches_any(names: &[String], candidate: &str) -> bool {
    let candidate = candidate.to_lowercase();
    names.iter().any(|name| name.to_lowercase() == candidate)
}
