//! Mock generation client for tests.
//!
//! Returns a fixed reply or a fixed failure, and counts calls so tests can
//! assert the one-request-per-submission behavior.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::error::GenerateError;
use crate::llm::GenerationClient;

#[derive(Clone, Copy, Debug)]
enum MockFailure {
    Credential,
    Transient,
    Empty,
}

/// Mock client: fixed reply or fixed failure.
///
/// **Interaction**: Implements `GenerationClient`; used by integration tests
/// in place of `ChatCompletion`.
pub struct MockGeneration {
    reply: String,
    failure: Option<MockFailure>,
    calls: AtomicUsize,
}

impl MockGeneration {
    /// Mock that answers every prompt with the given text.
    pub fn with_reply(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
            failure: None,
            calls: AtomicUsize::new(0),
        }
    }

    /// Mock that fails every call with `InvalidCredential`.
    pub fn with_credential_failure() -> Self {
        Self {
            reply: String::new(),
            failure: Some(MockFailure::Credential),
            calls: AtomicUsize::new(0),
        }
    }

    /// Mock that fails every call with `Transient`.
    pub fn with_transient_failure() -> Self {
        Self {
            reply: String::new(),
            failure: Some(MockFailure::Transient),
            calls: AtomicUsize::new(0),
        }
    }

    /// Mock that fails every call with `EmptyResponse`.
    pub fn with_empty_response() -> Self {
        Self {
            reply: String::new(),
            failure: Some(MockFailure::Empty),
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of `generate` calls made so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl GenerationClient for MockGeneration {
    async fn generate(&self, _prompt: &str) -> Result<String, GenerateError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.failure {
            Some(MockFailure::Credential) => Err(GenerateError::InvalidCredential(
                "mock: invalid api key".to_string(),
            )),
            Some(MockFailure::Transient) => {
                Err(GenerateError::Transient("mock: rate limit exceeded".to_string()))
            }
            Some(MockFailure::Empty) => Err(GenerateError::EmptyResponse),
            None => Ok(self.reply.trim().to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// **Scenario**: the reply mock returns its text trimmed and counts calls.
    #[tokio::test]
    async fn reply_mock_returns_trimmed_text() {
        let mock = MockGeneration::with_reply("  Léa progresse bien.  ");
        let text = mock.generate("prompt").await.expect("generate");
        assert_eq!(text, "Léa progresse bien.");
        assert_eq!(mock.calls(), 1);
    }

    /// **Scenario**: each failure constructor yields its matching variant.
    #[tokio::test]
    async fn failure_mocks_return_matching_variants() {
        let err = MockGeneration::with_credential_failure()
            .generate("p")
            .await
            .unwrap_err();
        assert!(err.is_credential());

        let err = MockGeneration::with_transient_failure()
            .generate("p")
            .await
            .unwrap_err();
        assert!(matches!(err, GenerateError::Transient(_)));

        let err = MockGeneration::with_empty_response()
            .generate("p")
            .await
            .unwrap_err();
        assert!(matches!(err, GenerateError::EmptyResponse));
    }
}
