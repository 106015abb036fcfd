//! # Store Configuration
//!
//! Connection settings for the hosted table store.
//!
//! Configuration is loaded from environment variables; the two required
//! values fail fast with a clear error instead of surfacing as a network
//! failure deep inside the first call.

use std::env;
use std::time::Duration;

/// Environment variable holding the store endpoint base URL.
pub const ENV_STORE_URL: &str = "STOCKROOM_STORE_URL";

/// Environment variable holding the store access key.
pub const ENV_STORE_KEY: &str = "STOCKROOM_STORE_KEY";

/// Environment variable overriding the per-call timeout, in seconds.
pub const ENV_STORE_TIMEOUT_SECS: &str = "STOCKROOM_STORE_TIMEOUT_SECS";

/// Default per-call deadline for remote store operations.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

// =============================================================================
// Configuration
// =============================================================================

/// Table-store connection configuration.
///
/// ## Example
/// ```rust
/// use std::time::Duration;
/// use stockroom_store::StoreConfig;
///
/// let config = StoreConfig::new("https://store.example.com/rest/v1", "service-key")
///     .timeout(Duration::from_secs(5));
/// assert_eq!(config.timeout, Duration::from_secs(5));
/// ```
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Base URL of the table-store REST endpoint.
    pub endpoint: String,

    /// Access key, sent as both `apikey` and bearer authorization.
    pub access_key: String,

    /// Deadline applied to every remote call.
    /// Default: 10 seconds
    pub timeout: Duration,
}

impl StoreConfig {
    /// Creates a configuration from explicit values.
    ///
    /// ## Arguments
    /// * `endpoint` - Base URL, with or without a trailing slash
    /// * `access_key` - The backend's access key
    pub fn new(endpoint: impl Into<String>, access_key: impl Into<String>) -> Self {
        StoreConfig {
            endpoint: endpoint.into(),
            access_key: access_key.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Sets the per-call timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Load configuration from environment variables.
    ///
    /// ## Required
    /// * `STOCKROOM_STORE_URL` - endpoint base URL
    /// * `STOCKROOM_STORE_KEY` - access key
    ///
    /// ## Optional
    /// * `STOCKROOM_STORE_TIMEOUT_SECS` - per-call deadline override
    ///
    /// ## Errors
    /// `ConfigError::MissingRequired` naming the absent variable, or
    /// `ConfigError::InvalidValue` when the timeout does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        let endpoint = env::var(ENV_STORE_URL)
            .map_err(|_| ConfigError::MissingRequired(ENV_STORE_URL.to_string()))?;
        let access_key = env::var(ENV_STORE_KEY)
            .map_err(|_| ConfigError::MissingRequired(ENV_STORE_KEY.to_string()))?;

        let timeout = match env::var(ENV_STORE_TIMEOUT_SECS) {
            Ok(raw) => {
                let secs: u64 = raw
                    .parse()
                    .map_err(|_| ConfigError::InvalidValue(ENV_STORE_TIMEOUT_SECS.to_string()))?;
                Duration::from_secs(secs)
            }
            Err(_) => DEFAULT_TIMEOUT,
        };

        Ok(StoreConfig {
            endpoint,
            access_key,
            timeout,
        })
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required configuration: {0}")]
    MissingRequired(String),

    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

// =============================================================================
// Unit Tests
// =============================================================================
