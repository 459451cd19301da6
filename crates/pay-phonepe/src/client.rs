//! # PhonePe Pay Page Client
//!
//! Implementation of the Pay Page initiation and status APIs.
//! Both calls are signed, sent once, and relayed back verbatim.

use crate::config::PhonePeConfig;
use crate::payload::{PayPageRequest, PayRequestBody, StatusQuery, PAY_ENDPOINT};
use crate::signing::{sign_payment, sign_status};
use async_trait::async_trait;
use pay_core::{
    Amount, IdSource, PaymentError, PaymentGateway, PaymentResult, SystemIdSource,
    TransactionIdentity, TRANSACTION_NOT_FOUND,
};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, RequestBuilder};
use std::error::Error as _;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info, instrument, warn};

const JSON_MIME: &str = "application/json";
const X_VERIFY: &str = "X-VERIFY";
const X_MERCHANT_ID: &str = "X-MERCHANT-ID";

/// Gateway client for the Pay Page flow
pub struct PhonePeClient {
    config: PhonePeConfig,
    client: Client,
    ids: Arc<dyn IdSource>,
}

impl PhonePeClient {
    /// Create a new client with the system id source
    pub fn new(config: PhonePeConfig) -> PaymentResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| {
                PaymentError::Configuration(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self {
            config,
            client,
            ids: Arc::new(SystemIdSource),
        })
    }

    /// Create from environment variables
    pub fn from_env() -> PaymentResult<Self> {
        let config = PhonePeConfig::from_env()?;
        Self::new(config)
    }

    /// Builder: replace the id source (for reproducible ids in tests)
    pub fn with_id_source(mut self, ids: Arc<dyn IdSource>) -> Self {
        self.ids = ids;
        self
    }

    /// Build the signed initiation payload for `amount`
    fn build_payment(&self, amount: Amount) -> PayPageRequest {
        let identity = TransactionIdentity::mint(self.ids.as_ref());

        PayPageRequest::new(
            self.config.merchant_id.clone(),
            identity,
            amount,
            self.config.redirect_url.clone(),
        )
    }

    /// Headers common to both calls
    fn signed(&self, builder: RequestBuilder, checksum: &str) -> RequestBuilder {
        builder
            .header(ACCEPT, JSON_MIME)
            .header(CONTENT_TYPE, JSON_MIME)
            .header(X_VERIFY, checksum)
    }
}

#[async_trait]
impl PaymentGateway for PhonePeClient {
    #[instrument(skip_all, fields(amount = %amount))]
    async fn initiate_payment(&self, amount: Amount) -> PaymentResult<serde_json::Value> {
        if !amount.is_exact_in_minor_units() {
            warn!(
                "Amount {} is not a whole number of minor units, sending {}",
                amount,
                amount.to_minor_units()
            );
        }

        let request = self.build_payment(amount);
        let envelope = sign_payment(&request, &self.config.salt_key, self.config.salt_index)?;

        debug!(
            "Submitting Pay Page request: merchant_transaction_id={}, amount={}",
            request.merchant_transaction_id, request.amount
        );

        let url = self.config.endpoint_url(PAY_ENDPOINT);
        let response = self
            .signed(self.client.post(&url), &envelope.checksum)
            .json(&PayRequestBody {
                request: envelope.payload,
            })
            .send()
            .await
            .map_err(|e| network_error(e, self.config.timeout))?;

        let body = read_json(response, self.config.timeout).await?;

        info!(
            "Pay Page initiated: merchant_transaction_id={}",
            request.merchant_transaction_id
        );

        Ok(body)
    }

    #[instrument(skip(self))]
    async fn check_status(&self, transaction_id: &str) -> PaymentResult<serde_json::Value> {
        if transaction_id.trim().is_empty() {
            return Err(PaymentError::Validation(TRANSACTION_NOT_FOUND.to_string()));
        }

        let query = StatusQuery::new(self.config.merchant_id.clone(), transaction_id);
        let checksum = sign_status(&query, &self.config.salt_key, self.config.salt_index);

        let url = self.config.endpoint_url(&query.path());
        let response = self
            .signed(self.client.get(&url), &checksum)
            .header(X_MERCHANT_ID, &self.config.merchant_id)
            .send()
            .await
            .map_err(|e| network_error(e, self.config.timeout))?;

        read_json(response, self.config.timeout).await
    }

    fn provider_name(&self) -> &'static str {
        "phonepe"
    }
}

/// Read a gateway response: any 2xx JSON body is returned as-is.
async fn read_json(
    response: reqwest::Response,
    timeout: Duration,
) -> PaymentResult<serde_json::Value> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| network_error(e, timeout))?;

    if !status.is_success() {
        error!("Gateway API error: status={}, body={}", status, body);

        return Err(PaymentError::Gateway {
            status: status.as_u16(),
            message: format!("Request failed with status code {}", status.as_u16()),
        });
    }

    serde_json::from_str(&body).map_err(|e| {
        PaymentError::Serialization(format!("Failed to parse gateway response: {}", e))
    })
}

/// Flatten a transport error and its `source()` chain into one message.
///
/// `reqwest` keeps the cause (timeout, refused connection, DNS) in the
/// chain; its own `Display` only names the URL.
fn network_error(err: reqwest::Error, timeout: Duration) -> PaymentError {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }

    if err.is_timeout() {
        message = format!("timeout of {}ms exceeded: {}", timeout.as_millis(), message);
    }

    PaymentError::Network(message)
}
