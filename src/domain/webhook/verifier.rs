//! Paystack webhook signature verification.
//!
//! Paystack signs the raw request body with HMAC-SHA512 keyed by the
//! account's secret key and sends the lowercase hex digest in the
//! `x-paystack-signature` header. Verification must run over the exact
//! bytes received, before any JSON parsing, because re-serialization can
//! change the byte sequence and invalidate the signature.
//!
//! Each verification is a pure computation over its own inputs; a single
//! verifier can be shared across concurrent requests without locking.

use hmac::{Hmac, Mac};
use secrecy::{ExposeSecret, SecretString};
use sha2::Sha512;
use subtle::ConstantTimeEq;

use super::errors::WebhookError;
use super::event::PaystackEvent;

type HmacSha512 = Hmac<Sha512>;

/// Verifier for Paystack webhook signatures.
///
/// Constructed with the shared secret at startup (dependency injection,
/// never ambient global state) and immutable for the process lifetime.
pub struct PaystackWebhookVerifier {
    /// The Paystack secret key, shared out-of-band with the provider.
    secret: SecretString,
}

impl PaystackWebhookVerifier {
    /// Creates a new verifier with the given secret.
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: SecretString::new(secret.into()),
        }
    }

    /// Verifies that `payload` was signed by the holder of the secret.
    ///
    /// # Errors
    ///
    /// - `MissingSecret` - the configured secret is empty
    /// - `MissingSignature` - no signature header was supplied
    /// - `SignatureMismatch` - the claimed digest does not match
    pub fn verify(&self, payload: &[u8], signature: Option<&str>) -> Result<(), WebhookError> {
        if self.secret.expose_secret().is_empty() {
            return Err(WebhookError::MissingSecret);
        }

        let claimed = match signature {
            Some(s) if !s.is_empty() => s,
            _ => return Err(WebhookError::MissingSignature),
        };

        let expected = self.compute_signature(payload);

        // Paystack sends a lowercase hex digest; compare the hex strings in
        // constant time, exactly as the provider documents the check.
        if !constant_time_eq(expected.as_bytes(), claimed.as_bytes()) {
            return Err(WebhookError::SignatureMismatch);
        }

        Ok(())
    }

    /// Verifies the signature and parses the payload into a [`PaystackEvent`].
    ///
    /// Parsing only happens after the signature has been accepted, so an
    /// attacker cannot probe the JSON parser with forged payloads.
    pub fn verify_and_parse(
        &self,
        payload: &[u8],
        signature: Option<&str>,
    ) -> Result<PaystackEvent, WebhookError> {
        self.verify(payload, signature)?;

        let event: PaystackEvent = serde_json::from_slice(payload)
            .map_err(|e| WebhookError::ParseError(e.to_string()))?;

        Ok(event)
    }

    /// Computes the lowercase hex HMAC-SHA512 digest of `payload`.
    fn compute_signature(&self, payload: &[u8]) -> String {
        let mut mac = HmacSha512::new_from_slice(self.secret.expose_secret().as_bytes())
            .expect("HMAC accepts any key length");
        mac.update(payload);
        hex_encode(&mac.finalize().into_bytes())
    }
}

/// Performs constant-time comparison of two byte slices.
///
/// Execution time does not depend on where the first mismatching byte
/// occurs, which prevents recovering the expected digest via timing.
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.ct_eq(b).into()
}

/// Encode bytes to a lowercase hex string.
fn hex_encode(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}

/// Computes the hex HMAC-SHA512 digest for use in test fixtures.
#[cfg(test)]
pub fn compute_test_signature(secret: &str, payload: &[u8]) -> String {
    let mut mac =
        HmacSha512::new_from_slice(secret.as_bytes()).expect("HMAC accepts any key length");
    mac.update(payload);
    hex_encode(&mac.finalize().into_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const TEST_SECRET: &str = "whsec_test";
    const TEST_BODY: &[u8] = br#"{"event":"charge.success","data":{"reference":"abc123"}}"#;

    /// HMAC-SHA512("whsec_test", TEST_BODY), computed independently.
    const TEST_BODY_SIGNATURE: &str = "36cfe4cac0f637fc6276d0232c676807c802678ebbe7c16128b20db9b9520a1a2af9c8ccd89366b792849260ff321d527e31ea498d8d1b40963f5375f52758ac";

    // ══════════════════════════════════════════════════════════════
    // Verification Tests
    // ══════════════════════════════════════════════════════════════

    #[test]
    fn verify_known_good_vector_succeeds() {
        let verifier = PaystackWebhookVerifier::new(TEST_SECRET);
        assert!(verifier.verify(TEST_BODY, Some(TEST_BODY_SIGNATURE)).is_ok());
    }

    #[test]
    fn computed_signature_matches_known_vector() {
        assert_eq!(
            compute_test_signature(TEST_SECRET, TEST_BODY),
            TEST_BODY_SIGNATURE
        );
    }

    #[test]
    fn verify_wrong_hex_of_same_length_fails() {
        let verifier = PaystackWebhookVerifier::new(TEST_SECRET);
        let forged = "0".repeat(TEST_BODY_SIGNATURE.len());

        assert_eq!(
            verifier.verify(TEST_BODY, Some(&forged)),
            Err(WebhookError::SignatureMismatch)
        );
    }

    #[test]
    fn verify_uppercase_hex_fails() {
        // The provider sends lowercase hex; the check is a string compare,
        // matching the upstream behavior.
        let verifier = PaystackWebhookVerifier::new(TEST_SECRET);
        let upper = TEST_BODY_SIGNATURE.to_uppercase();

        assert_eq!(
            verifier.verify(TEST_BODY, Some(&upper)),
            Err(WebhookError::SignatureMismatch)
        );
    }

    #[test]
    fn verify_wrong_secret_fails() {
        let verifier = PaystackWebhookVerifier::new("wrong_secret");

        assert_eq!(
            verifier.verify(TEST_BODY, Some(TEST_BODY_SIGNATURE)),
            Err(WebhookError::SignatureMismatch)
        );
    }

    #[test]
    fn verify_tampered_body_fails() {
        let verifier = PaystackWebhookVerifier::new(TEST_SECRET);
        let tampered = br#"{"event":"charge.success","data":{"reference":"abc124"}}"#;

        assert_eq!(
            verifier.verify(tampered, Some(TEST_BODY_SIGNATURE)),
            Err(WebhookError::SignatureMismatch)
        );
    }

    #[test]
    fn verify_missing_signature_fails() {
        let verifier = PaystackWebhookVerifier::new(TEST_SECRET);

        assert_eq!(
            verifier.verify(TEST_BODY, None),
            Err(WebhookError::MissingSignature)
        );
    }

    #[test]
    fn verify_empty_signature_fails() {
        let verifier = PaystackWebhookVerifier::new(TEST_SECRET);

        assert_eq!(
            verifier.verify(TEST_BODY, Some("")),
            Err(WebhookError::MissingSignature)
        );
    }

    #[test]
    fn verify_empty_secret_fails_regardless_of_signature() {
        let verifier = PaystackWebhookVerifier::new("");

        assert_eq!(
            verifier.verify(TEST_BODY, Some(TEST_BODY_SIGNATURE)),
            Err(WebhookError::MissingSecret)
        );
        assert_eq!(
            verifier.verify(TEST_BODY, None),
            Err(WebhookError::MissingSecret)
        );
    }

    // ══════════════════════════════════════════════════════════════
    // Verify-and-Parse Tests
    // ══════════════════════════════════════════════════════════════

    #[test]
    fn verify_and_parse_returns_event() {
        let verifier = PaystackWebhookVerifier::new(TEST_SECRET);

        let event = verifier
            .verify_and_parse(TEST_BODY, Some(TEST_BODY_SIGNATURE))
            .unwrap();

        assert_eq!(event.event, "charge.success");
        assert_eq!(event.reference(), Some("abc123"));
    }

    #[test]
    fn verify_and_parse_rejects_invalid_json_after_valid_signature() {
        let verifier = PaystackWebhookVerifier::new(TEST_SECRET);
        let payload = b"not valid json";
        let signature = compute_test_signature(TEST_SECRET, payload);

        let result = verifier.verify_and_parse(payload, Some(&signature));

        assert!(matches!(result, Err(WebhookError::ParseError(_))));
    }

    #[test]
    fn verify_and_parse_does_not_parse_unverified_payload() {
        let verifier = PaystackWebhookVerifier::new(TEST_SECRET);
        let payload = b"not valid json";

        // Bad signature must win over bad JSON
        let result = verifier.verify_and_parse(payload, Some("feedface"));

        assert_eq!(result.unwrap_err(), WebhookError::SignatureMismatch);
    }

    // ══════════════════════════════════════════════════════════════
    // Constant-Time Comparison Tests
    // ══════════════════════════════════════════════════════════════

    #[test]
    fn constant_time_eq_equal_values() {
        assert!(constant_time_eq(b"abcdef", b"abcdef"));
    }

    #[test]
    fn constant_time_eq_different_values() {
        assert!(!constant_time_eq(b"abcdef", b"abcdeg"));
    }

    #[test]
    fn constant_time_eq_different_lengths() {
        assert!(!constant_time_eq(b"abc", b"abcd"));
    }

    #[test]
    fn hex_encode_known_bytes() {
        assert_eq!(hex_encode(&[0x00, 0xff, 0x10]), "00ff10");
        assert_eq!(hex_encode(&[]), "");
    }

    // ══════════════════════════════════════════════════════════════
    // Properties
    // ══════════════════════════════════════════════════════════════

    proptest! {
        /// Identical inputs always produce identical digests.
        #[test]
        fn signature_is_deterministic(
            secret in ".{1,64}",
            body in proptest::collection::vec(any::<u8>(), 0..512),
        ) {
            let a = compute_test_signature(&secret, &body);
            let b = compute_test_signature(&secret, &body);
            prop_assert_eq!(&a, &b);

            let verifier = PaystackWebhookVerifier::new(secret);
            prop_assert!(verifier.verify(&body, Some(&a)).is_ok());
        }

        /// Flipping any single bit of the body invalidates the signature.
        #[test]
        fn single_bit_flip_breaks_signature(
            body in proptest::collection::vec(any::<u8>(), 1..256),
            bit in 0usize..8,
            idx_seed in any::<usize>(),
        ) {
            let signature = compute_test_signature(TEST_SECRET, &body);
            let verifier = PaystackWebhookVerifier::new(TEST_SECRET);

            let mut mutated = body.clone();
            let idx = idx_seed % mutated.len();
            mutated[idx] ^= 1 << bit;

            prop_assert_eq!(
                verifier.verify(&mutated, Some(&signature)),
                Err(WebhookError::SignatureMismatch)
            );
        }

        /// A digest computed under a different secret never validates.
        #[test]
        fn different_secret_never_validates(
            body in proptest::collection::vec(any::<u8>(), 0..256),
        ) {
            let signature = compute_test_signature("secret-a", &body);
            let verifier = PaystackWebhookVerifier::new("secret-b");

            prop_assert_eq!(
                verifier.verify(&body, Some(&signature)),
                Err(WebhookError::SignatureMismatch)
            );
        }
    }
}
