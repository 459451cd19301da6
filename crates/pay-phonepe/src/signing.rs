//! # Request Signing
//!
//! The gateway authenticates each call with an `X-VERIFY` header:
//!
//! ```text
//! X-VERIFY = hex(sha256(message + salt_key)) + "###" + salt_index
//! ```
//!
//! For initiation, `message` is the base64 payload followed by `/pg/v1/pay`.
//! For status, `message` is the status path alone.

use crate::payload::{PayPageRequest, StatusQuery, PAY_ENDPOINT};
use base64::{engine::general_purpose::STANDARD, Engine};
use pay_core::{PaymentError, PaymentResult};
use serde::{de::DeserializeOwned, Serialize};
use sha2::{Digest, Sha256};

/// Base64 payload plus the checksum that signs it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedEnvelope {
    pub payload: String,
    pub checksum: String,
}

/// Compute an `X-VERIFY` value for `message`.
pub fn x_verify(message: &str, salt_key: &str, salt_index: u32) -> String {
    let mut hasher = Sha256::new();
    hasher.update(message.as_bytes());
    hasher.update(salt_key.as_bytes());
    format!("{}###{}", hex::encode(hasher.finalize()), salt_index)
}

/// Serialize to compact JSON and base64-encode the UTF-8 bytes.
pub fn encode_payload<T: Serialize>(payload: &T) -> PaymentResult<String> {
    let json = serde_json::to_vec(payload)?;
    Ok(STANDARD.encode(json))
}

/// Inverse of [`encode_payload`]
pub fn decode_payload<T: DeserializeOwned>(encoded: &str) -> PaymentResult<T> {
    let bytes = STANDARD
        .decode(encoded)
        .map_err(|e| PaymentError::Serialization(format!("Invalid base64 payload: {}", e)))?;
    Ok(serde_json::from_slice(&bytes)?)
}

/// Encode and sign a Pay Page initiation.
pub fn sign_payment(
    request: &PayPageRequest,
    salt_key: &str,
    salt_index: u32,
) -> PaymentResult<SignedEnvelope> {
    let payload = encode_payload(request)?;
    let checksum = x_verify(&format!("{}{}", payload, PAY_ENDPOINT), salt_key, salt_index);

    Ok(SignedEnvelope { payload, checksum })
}

/// Sign a status lookup.
pub fn sign_status(query: &StatusQuery, salt_key: &str, salt_index: u32) -> String {
    x_verify(&query.path(), salt_key, salt_index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pay_core::{Amount, FixedIdSource, TransactionIdentity};

    const SALT_KEY: &str = "099eb0cd-02cf-4e2a-8aca-3e6c6aff0399";
    const USER_ID: &str = "0f8fad5b-d9cb-469f-a165-70867728950e";

    const EXPECTED_PAYLOAD: &str = "eyJtZXJjaGFudElkIjoiUEdURVNUUEFZVUFUIiwibWVyY2hhbnRUcmFuc2FjdGlvbklkIjoiTVQwZjhmYWQ1Yi1kOWNiLTQ2OWYtYTE2NS03MDg2NzcyOCIsIm1lcmNoYW50VXNlcklkIjoiMGY4ZmFkNWItZDljYi00NjlmLWExNjUtNzA4Njc3Mjg5NTBlIiwiYW1vdW50IjoxMDAwMCwicmVkaXJlY3RVcmwiOiJodHRwczovL2F0d3RyYXZlbHMuY29tL3BheW1lbnRTdWNjZXNzLmh0bWwiLCJyZWRpcmVjdE1vZGUiOiJSRURJUkVDVCIsInBheW1lbnRJbnN0cnVtZW50Ijp7InR5cGUiOiJQQVlfUEFHRSJ9fQ==";

    fn fixture_request() -> PayPageRequest {
        let identity =
            TransactionIdentity::mint(&FixedIdSource::new(USER_ID, 1_700_000_000_000));
        PayPageRequest::new(
            "PGTESTPAYUAT",
            identity,
            Amount::from_major(100.0).unwrap(),
            "https://atwtravels.com/paymentSuccess.html",
        )
    }

    #[test]
    fn test_sign_payment_known_vector() {
        let envelope = sign_payment(&fixture_request(), SALT_KEY, 1).unwrap();

        assert_eq!(envelope.payload, EXPECTED_PAYLOAD);
        assert_eq!(
            envelope.checksum,
            "dc2f498e80ca3c7d182e5e1c78f304f8a312d3cbc52db4b460ee0cfd88b4a95a###1"
        );
    }

    #[test]
    fn test_sign_status_known_vector() {
        let query = StatusQuery::new("PGTESTPAYUAT", "MT0f8fad5b-d9cb-469f-a165-70867728");

        assert_eq!(
            sign_status(&query, SALT_KEY, 1),
            "7e086299f79dfdb1b7763e3ae1ac20d7d21dccd3a87bef94dc7f578d821c9f18###1"
        );
    }

    #[test]
    fn test_salt_index_suffix() {
        let checksum = x_verify("/pg/v1/status/M/T", "salt", 3);
        let (digest, index) = checksum.split_once("###").unwrap();

        assert_eq!(index, "3");
        assert_eq!(digest.len(), 64);
        assert!(digest.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn test_payload_decodes_to_sent_object() {
        let request = fixture_request();
        let envelope = sign_payment(&request, SALT_KEY, 1).unwrap();

        let decoded: PayPageRequest = decode_payload(&envelope.payload).unwrap();
        assert_eq!(decoded, request);
    }

    #[test]
    fn test_decode_rejects_bad_base64() {
        let err = decode_payload::<PayPageRequest>("not base64!").unwrap_err();
        assert!(matches!(err, PaymentError::Serialization(_)));
    }
}
