//! # Payment Gateway Trait
//!
//! The seam between the HTTP layer and the gateway client.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    PaymentGateway (trait)                   │
//! │  ├── initiate_payment()                                     │
//! │  ├── check_status()                                         │
//! │  └── provider_name()                                        │
//! └─────────────────────────────────────────────────────────────┘
//!                            ▲
//!                 ┌──────────┴──────────┐
//!                 │                     │
//!         ┌───────┴───────┐     ┌───────┴───────┐
//!         │ PhonePeClient │     │  test stubs   │
//!         └───────────────┘     └───────────────┘
//! ```
//!
//! Responses are passed through as raw JSON: the gateway owns the payment
//! lifecycle and its response shape.

use crate::error::PaymentResult;
use crate::transaction::Amount;
use async_trait::async_trait;
use std::sync::Arc;

/// A payment gateway reachable over the network.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Sign and submit a Pay Page initiation for `amount`.
    ///
    /// # Returns
    /// The gateway's JSON response body, unmodified.
    async fn initiate_payment(&self, amount: Amount) -> PaymentResult<serde_json::Value>;

    /// Sign and submit a status lookup for a merchant transaction id.
    ///
    /// # Returns
    /// The gateway's JSON response body, unmodified.
    async fn check_status(&self, transaction_id: &str) -> PaymentResult<serde_json::Value>;

    /// Get the provider name (for logging).
    fn provider_name(&self) -> &'static str;
}

/// Type alias for a shared payment gateway (dynamic dispatch)
pub type BoxedPaymentGateway = Arc<dyn PaymentGateway>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct EchoGateway;

    #[async_trait]
    impl PaymentGateway for EchoGateway {
        async fn initiate_payment(&self, amount: Amount) -> PaymentResult<serde_json::Value> {
            Ok(json!({ "minor": amount.to_minor_units() }))
        }

        async fn check_status(&self, transaction_id: &str) -> PaymentResult<serde_json::Value> {
            Ok(json!({ "id": transaction_id }))
        }

        fn provider_name(&self) -> &'static str {
            "echo"
        }
    }

    #[tokio::test]
    async fn test_boxed_gateway_dispatch() {
        let gateway: BoxedPaymentGateway = Arc::new(EchoGateway);

        let body = gateway
            .initiate_payment(Amount::from_major(2.5).unwrap())
            .await
            .unwrap();
        assert_eq!(body, json!({ "minor": 250 }));

        let body = gateway.check_status("MT123").await.unwrap();
        assert_eq!(body, json!({ "id": "MT123" }));
        assert_eq!(gateway.provider_name(), "echo");
    }
}
