//! # Pay Page Wire Types
//!
//! Request bodies exactly as the gateway expects them. Field order matters:
//! the JSON text is base64-encoded and signed, so it must serialize the same
//! way on every call.

use pay_core::{Amount, MerchantTransactionId, TransactionIdentity};
use serde::{Deserialize, Serialize};

/// Payment initiation endpoint path (also part of the signed message)
pub const PAY_ENDPOINT: &str = "/pg/v1/pay";

/// Status endpoint prefix; the full path is `{prefix}/{merchant}/{txn}`
pub const STATUS_ENDPOINT_PREFIX: &str = "/pg/v1/status";

/// Decoded Pay Page request payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayPageRequest {
    pub merchant_id: String,
    pub merchant_transaction_id: MerchantTransactionId,
    pub merchant_user_id: String,
    /// Amount in minor units
    pub amount: i64,
    pub redirect_url: String,
    pub redirect_mode: RedirectMode,
    pub payment_instrument: PaymentInstrument,
}

impl PayPageRequest {
    pub fn new(
        merchant_id: impl Into<String>,
        identity: TransactionIdentity,
        amount: Amount,
        redirect_url: impl Into<String>,
    ) -> Self {
        Self {
            merchant_id: merchant_id.into(),
            merchant_transaction_id: identity.merchant_transaction_id,
            merchant_user_id: identity.merchant_user_id,
            amount: amount.to_minor_units(),
            redirect_url: redirect_url.into(),
            redirect_mode: RedirectMode::Redirect,
            payment_instrument: PaymentInstrument::pay_page(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RedirectMode {
    Redirect,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentInstrument {
    #[serde(rename = "type")]
    pub kind: InstrumentType,
}

impl PaymentInstrument {
    /// Hosted payment page
    pub fn pay_page() -> Self {
        Self {
            kind: InstrumentType::PayPage,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InstrumentType {
    PayPage,
}

/// HTTP body of the initiation call: `{"request": "<base64 payload>"}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayRequestBody {
    pub request: String,
}

/// Status lookup for one transaction. Nothing is stored locally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusQuery {
    pub merchant_id: String,
    pub merchant_transaction_id: String,
}

impl StatusQuery {
    pub fn new(merchant_id: impl Into<String>, merchant_transaction_id: impl Into<String>) -> Self {
        Self {
            merchant_id: merchant_id.into(),
            merchant_transaction_id: merchant_transaction_id.into(),
        }
    }

    /// `/pg/v1/status/{merchant_id}/{merchant_transaction_id}`
    pub fn path(&self) -> String {
        format!(
            "{}/{}/{}",
            STATUS_ENDPOINT_PREFIX, self.merchant_id, self.merchant_transaction_id
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pay_core::FixedIdSource;

    #[test]
    fn test_payload_json_layout() {
        let identity = TransactionIdentity::mint(&FixedIdSource::new(
            "0f8fad5b-d9cb-469f-a165-70867728950e",
            1_700_000_000_000,
        ));
        let request = PayPageRequest::new(
            "PGTESTPAYUAT",
            identity,
            Amount::from_major(100.0).unwrap(),
            "https://atwtravels.com/paymentSuccess.html",
        );

        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(
            json,
            concat!(
                r#"{"merchantId":"PGTESTPAYUAT","#,
                r#""merchantTransactionId":"MT0f8fad5b-d9cb-469f-a165-70867728","#,
                r#""merchantUserId":"0f8fad5b-d9cb-469f-a165-70867728950e","#,
                r#""amount":10000,"#,
                r#""redirectUrl":"https://atwtravels.com/paymentSuccess.html","#,
                r#""redirectMode":"REDIRECT","#,
                r#""paymentInstrument":{"type":"PAY_PAGE"}}"#
            )
        );
    }

    #[test]
    fn test_status_path() {
        let query = StatusQuery::new("PGTESTPAYUAT", "MT123");
        assert_eq!(query.path(), "/pg/v1/status/PGTESTPAYUAT/MT123");
    }
}
