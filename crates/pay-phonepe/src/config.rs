//! # PhonePe Configuration
//!
//! Configuration management for the Pay Page integration.
//! All secrets are loaded from environment variables.

use pay_core::PaymentError;
use std::env;
use std::fmt;
use std::time::Duration;
use tracing::warn;

/// Redirect destination used when `REDIRECT_URL` is not set
pub const DEFAULT_REDIRECT_URL: &str = "https://atwtravels.com/paymentSuccess.html";

/// Salt index used when `SALT_INDEX` is not set
pub const DEFAULT_SALT_INDEX: u32 = 1;

/// Outbound request timeout used when `GATEWAY_TIMEOUT_SECS` is not set
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Gateway API configuration
#[derive(Clone)]
pub struct PhonePeConfig {
    /// Merchant identifier issued by the gateway
    pub merchant_id: String,

    /// API base URL (e.g. https://api-preprod.phonepe.com/apis/pg-sandbox)
    pub base_url: String,

    /// Secret salt key used in every checksum
    pub salt_key: String,

    /// Salt key version, appended to checksums as `###{index}`
    pub salt_index: u32,

    /// Where the gateway sends the customer after payment
    pub redirect_url: String,

    /// Timeout for each outbound request
    pub timeout: Duration,
}

impl PhonePeConfig {
    /// Load configuration from environment variables.
    ///
    /// `MERCHANT_ID`, `BASE_URL` and `SALT_KEY` are read as-is. A missing
    /// value is logged and left empty; the resulting calls fail at the
    /// gateway rather than at startup.
    ///
    /// Optional env vars:
    /// - `SALT_INDEX` (default 1)
    /// - `REDIRECT_URL` (default [`DEFAULT_REDIRECT_URL`])
    /// - `GATEWAY_TIMEOUT_SECS` (default 30)
    pub fn from_env() -> Result<Self, PaymentError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let merchant_id = required_var("MERCHANT_ID");
        let base_url = required_var("BASE_URL");
        let salt_key = required_var("SALT_KEY");

        let salt_index = match env::var("SALT_INDEX") {
            Ok(raw) => raw.trim().parse().map_err(|_| {
                PaymentError::Configuration(format!("SALT_INDEX must be a number, got {raw:?}"))
            })?,
            Err(_) => DEFAULT_SALT_INDEX,
        };

        let timeout_secs = match env::var("GATEWAY_TIMEOUT_SECS") {
            Ok(raw) => raw.trim().parse().map_err(|_| {
                PaymentError::Configuration(format!(
                    "GATEWAY_TIMEOUT_SECS must be a number of seconds, got {raw:?}"
                ))
            })?,
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };

        let redirect_url =
            env::var("REDIRECT_URL").unwrap_or_else(|_| DEFAULT_REDIRECT_URL.to_string());

        Ok(Self {
            merchant_id,
            base_url,
            salt_key,
            salt_index,
            redirect_url,
            timeout: Duration::from_secs(timeout_secs),
        })
    }

    /// Create config with explicit values (for testing)
    pub fn new(
        merchant_id: impl Into<String>,
        base_url: impl Into<String>,
        salt_key: impl Into<String>,
    ) -> Self {
        Self {
            merchant_id: merchant_id.into(),
            base_url: base_url.into(),
            salt_key: salt_key.into(),
            salt_index: DEFAULT_SALT_INDEX,
            redirect_url: DEFAULT_REDIRECT_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Absolute URL for an endpoint path such as `/pg/v1/pay`
    pub fn endpoint_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    /// Builder: set salt index
    pub fn with_salt_index(mut self, salt_index: u32) -> Self {
        self.salt_index = salt_index;
        self
    }

    /// Builder: set redirect URL
    pub fn with_redirect_url(mut self, url: impl Into<String>) -> Self {
        self.redirect_url = url.into();
        self
    }

    /// Builder: set outbound timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl fmt::Debug for PhonePeConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PhonePeConfig")
            .field("merchant_id", &self.merchant_id)
            .field("base_url", &self.base_url)
            .field("salt_key", &"<redacted>")
            .field("salt_index", &self.salt_index)
            .field("redirect_url", &self.redirect_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

fn required_var(name: &str) -> String {
    env::var(name).unwrap_or_else(|_| {
        warn!("{} not set, gateway calls will be rejected", name);
        String::new()
    })
}
