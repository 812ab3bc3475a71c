//! Generation failure taxonomy.
//!
//! The wrapped service does not guarantee a stable error format, so
//! classification matches substrings of the reported message instead of
//! exact codes. Validation failures never reach this type; they stay in
//! [`crate::validate::ValidationErrors`].

use thiserror::Error;

/// Lowercase substrings that mark a credential-shaped failure
/// (authentication, permission, or not-found-style reports).
const CREDENTIAL_MARKERS: &[&str] = &[
    "api key",
    "api_key",
    "unauthorized",
    "permission",
    "forbidden",
    "invalid authentication",
    "401",
    "403",
    "not found",
    "404",
];

/// Why a generation call failed.
///
/// Returned by [`crate::llm::GenerationClient::generate`]. Every variant
/// leaves the evaluation input and the session log untouched.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// The service rejected the credential; the fix is a new API key.
    #[error("generation service rejected the credential: {0}")]
    InvalidCredential(String),

    /// Anything else: network trouble, rate limits, server errors. The user
    /// may resubmit; no automatic retry happens.
    #[error("generation failed: {0}")]
    Transient(String),

    /// The service answered without usable text (no choices or blank content).
    #[error("generation service returned an empty response")]
    EmptyResponse,
}

impl GenerateError {
    /// Classifies a reported service error by substring, case-insensitively.
    pub fn classify(message: impl Into<String>) -> Self {
        let message = message.into();
        let lower = message.to_lowercase();
        if CREDENTIAL_MARKERS.iter().any(|m| lower.contains(m)) {
            GenerateError::InvalidCredential(message)
        } else {
            GenerateError::Transient(message)
        }
    }

    /// True when re-entering the API key is the expected fix.
    pub fn is_credential(&self) -> bool {
        matches!(self, GenerateError::InvalidCredential(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// **Scenario**: a message containing "permission" classifies as InvalidCredential.
    #[test]
    fn permission_message_classifies_as_credential() {
        let err = GenerateError::classify("the caller lacks permission on this resource");
        assert!(err.is_credential(), "got: {:?}", err);
    }

    /// **Scenario**: "rate limit exceeded" classifies as Transient.
    #[test]
    fn rate_limit_classifies_as_transient() {
        let err = GenerateError::classify("rate limit exceeded");
        assert!(matches!(err, GenerateError::Transient(_)), "got: {:?}", err);
    }

    /// **Scenario**: classification is case-insensitive.
    #[test]
    fn classification_is_case_insensitive() {
        assert!(GenerateError::classify("PERMISSION_DENIED").is_credential());
        assert!(GenerateError::classify("Invalid API Key provided").is_credential());
        assert!(GenerateError::classify("HTTP 401 Unauthorized").is_credential());
    }

    /// **Scenario**: not-found-style reports count as credential failures
    /// (the service reports bad keys that way on some routes).
    #[test]
    fn not_found_classifies_as_credential() {
        assert!(GenerateError::classify("model not found for this key").is_credential());
        assert!(GenerateError::classify("HTTP 404").is_credential());
    }

    /// **Scenario**: Display keeps the original message for both classified variants.
    #[test]
    fn display_keeps_original_message() {
        let s = GenerateError::classify("permission denied by upstream").to_string();
        assert!(s.contains("rejected the credential"), "got: {}", s);
        assert!(s.contains("permission denied by upstream"), "got: {}", s);

        let s = GenerateError::classify("connection reset by peer").to_string();
        assert!(s.contains("generation failed"), "got: {}", s);
        assert!(s.contains("connection reset by peer"), "got: {}", s);
    }

    /// **Scenario**: EmptyResponse has its own fixed message.
    #[test]
    fn empty_response_display() {
        let s = GenerateError::EmptyResponse.to_string();
        assert!(s.contains("empty response"), "got: {}", s);
    }
}
