//! # pay-core
//!
//! Core types and traits for the paypage-relay payment relay.
//!
//! This crate provides:
//! - `PaymentGateway` trait implemented by the gateway client
//! - `Amount` and `MerchantTransactionId` value types
//! - `IdSource` for injectable id and clock generation
//! - `PaymentError` for typed error handling
//!
//! ## Example
//!
//! ```rust,ignore
//! use pay_core::{Amount, PaymentGateway};
//!
//! let amount = Amount::required(request.amount)?;
//! let body = gateway.initiate_payment(amount).await?;
//!
//! // Redirect user to body.data.instrumentResponse.redirectInfo.url
//! ```

pub mod error;
pub mod gateway;
pub mod transaction;

// Re-exports for convenience
pub use error::{PaymentError, PaymentResult};
pub use gateway::{BoxedPaymentGateway, PaymentGateway};
pub use transaction::{
    sanitize, Amount, FixedIdSource, IdSource, MerchantTransactionId, SystemIdSource,
    TransactionIdentity, AMOUNT_REQUIRED, TRANSACTION_NOT_FOUND,
};
