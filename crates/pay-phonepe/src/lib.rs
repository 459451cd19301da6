//! # pay-phonepe
//!
//! PhonePe Pay Page gateway client for paypage-relay-rs.
//!
//! Two signed calls, both relayed back verbatim:
//!
//! 1. **Initiation** - `POST /pg/v1/pay`
//!    - Base64 JSON payload in `{"request": ...}`
//!    - `X-VERIFY` over payload + endpoint + salt key
//!
//! 2. **Status** - `GET /pg/v1/status/{merchantId}/{merchantTransactionId}`
//!    - `X-VERIFY` over the path + salt key
//!    - `X-MERCHANT-ID` header
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use pay_phonepe::PhonePeClient;
//! use pay_core::{Amount, PaymentGateway};
//!
//! // Create client from environment
//! let client = PhonePeClient::from_env()?;
//!
//! // Initiate a 100.00 payment
//! let body = client.initiate_payment(Amount::from_major(100.0)?).await?;
//!
//! // Later, poll its status
//! let status = client.check_status("MT...").await?;
//! ```

pub mod client;
pub mod config;
pub mod payload;
pub mod signing;

// Re-exports
pub use client::PhonePeClient;
pub use config::PhonePeConfig;
pub use payload::{
    PayPageRequest, PayRequestBody, StatusQuery, PAY_ENDPOINT, STATUS_ENDPOINT_PREFIX,
};
pub use signing::{
    decode_payload, encode_payload, sign_payment, sign_status, x_verify, SignedEnvelope,
};
