//! # Transaction Identity & Amounts
//!
//! Value types shared by every gateway call:
//! - `Amount`: a validated major-unit amount with minor-unit conversion
//! - `MerchantTransactionId`: the sanitized, length-capped reference
//! - `IdSource`: the injectable source of randomness and time

use crate::error::{PaymentError, PaymentResult};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Message returned when the amount is missing, zero or negative
pub const AMOUNT_REQUIRED: &str = "Amount is required";

/// Message returned when a status lookup has no transaction id
pub const TRANSACTION_NOT_FOUND: &str = "Transaction is not found!";

/// Minor units per major unit (paise per rupee, cents per dollar)
const MINOR_UNITS_PER_MAJOR: f64 = 100.0;

// =============================================================================
// Amount
// =============================================================================

/// Payment amount in the major currency unit, as sent by the client.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Amount(f64);

impl Amount {
    /// Validate a major-unit amount.
    ///
    /// Rejects non-finite values, anything `<= 0`, and values that do not
    /// convert to between 1 and `i64::MAX` whole minor units.
    pub fn from_major(value: f64) -> PaymentResult<Self> {
        if !value.is_finite() || value <= 0.0 {
            return Err(PaymentError::Validation(AMOUNT_REQUIRED.to_string()));
        }

        let minor = (value * MINOR_UNITS_PER_MAJOR).round();
        if minor < 1.0 || minor >= i64::MAX as f64 {
            return Err(PaymentError::Validation(AMOUNT_REQUIRED.to_string()));
        }

        Ok(Self(value))
    }

    /// Validate an optional amount; `None` is a missing amount.
    pub fn required(value: Option<f64>) -> PaymentResult<Self> {
        value
            .ok_or_else(|| PaymentError::Validation(AMOUNT_REQUIRED.to_string()))
            .and_then(Self::from_major)
    }

    /// Amount in minor units, rounded to the nearest whole unit.
    pub fn to_minor_units(&self) -> i64 {
        (self.0 * MINOR_UNITS_PER_MAJOR).round() as i64
    }

    /// True when `major * 100` is already a whole number, i.e. the
    /// conversion did not need to round.
    pub fn is_exact_in_minor_units(&self) -> bool {
        let minor = self.0 * MINOR_UNITS_PER_MAJOR;
        minor == minor.trunc()
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Merchant Transaction Id
// =============================================================================

/// Client-generated transaction reference.
///
/// Always 1..=34 characters drawn from `[A-Za-z0-9_-]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MerchantTransactionId(String);

impl MerchantTransactionId {
    /// Maximum length accepted by the gateway
    pub const MAX_LEN: usize = 34;

    /// Prefix of every generated id
    pub const PREFIX: &'static str = "MT";

    /// Build `MT{user_id}{epoch_millis}`, sanitized and truncated.
    pub fn generate(user_id: &str, epoch_millis: i64) -> Self {
        Self(sanitize(&format!("{}{}{}", Self::PREFIX, user_id, epoch_millis)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for MerchantTransactionId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MerchantTransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Drop every character outside `[A-Za-z0-9_-]`, then keep the first
/// `MerchantTransactionId::MAX_LEN` characters.
pub fn sanitize(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '-')
        .take(MerchantTransactionId::MAX_LEN)
        .collect()
}

// =============================================================================
// Id Source
// =============================================================================

/// Source of the two non-deterministic inputs to a payment: a unique user
/// token and the current time.
pub trait IdSource: Send + Sync {
    /// A fresh unique identifier (UUID v4 in production)
    fn user_id(&self) -> String;

    /// Milliseconds since the Unix epoch
    fn epoch_millis(&self) -> i64;
}

/// Production id source: random UUID v4 and the system clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemIdSource;

impl IdSource for SystemIdSource {
    fn user_id(&self) -> String {
        Uuid::new_v4().to_string()
    }

    fn epoch_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

/// Id source returning fixed values, for reproducible checksums in tests
#[derive(Debug, Clone)]
pub struct FixedIdSource {
    pub user_id: String,
    pub epoch_millis: i64,
}

impl FixedIdSource {
    pub fn new(user_id: impl Into<String>, epoch_millis: i64) -> Self {
        Self {
            user_id: user_id.into(),
            epoch_millis,
        }
    }
}

impl IdSource for FixedIdSource {
    fn user_id(&self) -> String {
        self.user_id.clone()
    }

    fn epoch_millis(&self) -> i64 {
        self.epoch_millis
    }
}

/// The identifiers minted for one payment initiation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionIdentity {
    pub merchant_user_id: String,
    pub merchant_transaction_id: MerchantTransactionId,
}

impl TransactionIdentity {
    /// Draw a user id and timestamp from `source` and derive the transaction id.
    pub fn mint(source: &dyn IdSource) -> Self {
        let merchant_user_id = source.user_id();
        let merchant_transaction_id =
            MerchantTransactionId::generate(&merchant_user_id, source.epoch_millis());

        Self {
            merchant_user_id,
            merchant_transaction_id,
        }
    }
}
